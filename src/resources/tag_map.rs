/*!
 * Fine-grained to coarse part-of-speech mapping.
 *
 * Error categories are named after coarse tags, so every fine tag the
 * annotator emits is looked up here. Adpositions are reported as `PREP` and
 * proper nouns are folded into `NOUN`.
 */

use std::collections::HashMap;
use std::path::Path;

use crate::errors::ResourceError;
use crate::language_utils::CorpusLanguage;

/// Coarse tag for anything the map does not know
pub const UNKNOWN_TAG: &str = "X";

/// Penn Treebank → universal tags
const PTB_MAP: &str = "\
!\tPUNCT
#\tSYM
$\tSYM
''\tPUNCT
(\tPUNCT
)\tPUNCT
,\tPUNCT
-LRB-\tPUNCT
-RRB-\tPUNCT
.\tPUNCT
:\tPUNCT
?\tPUNCT
AFX\tADJ
CC\tCONJ
CD\tNUM
DT\tDET
EX\tADV
FW\tX
HYPH\tPUNCT
IN\tADP
JJ\tADJ
JJR\tADJ
JJS\tADJ
LS\tPUNCT
MD\tVERB
NN\tNOUN
NNP\tPROPN
NNPS\tPROPN
NNS\tNOUN
PDT\tADJ
POS\tPART
PRP\tPRON
PRP$\tDET
RB\tADV
RBR\tADV
RBS\tADV
RP\tPART
SYM\tSYM
TO\tPART
UH\tINTJ
VB\tVERB
VBD\tVERB
VBG\tVERB
VBN\tVERB
VBP\tVERB
VBZ\tVERB
WDT\tDET
WP\tNOUN
WP$\tADJ
WRB\tADV
``\tPUNCT
";

/// Stuttgart-Tübingen tagset → universal tags
const STTS_MAP: &str = "\
$(\tPUNCT
$,\tPUNCT
$.\tPUNCT
ADJA\tADJ
ADJD\tADJ
ADV\tADV
APPO\tADP
APPR\tADP
APPRART\tADP
APZR\tADP
ART\tDET
CARD\tNUM
FM\tX
ITJ\tINTJ
KOKOM\tCONJ
KON\tCONJ
KOUI\tCONJ
KOUS\tCONJ
NE\tPROPN
NN\tNOUN
NNE\tPROPN
PAV\tADV
PROAV\tADV
PDAT\tDET
PDS\tPRON
PIAT\tDET
PIDAT\tDET
PIS\tPRON
PPER\tPRON
PPOSAT\tDET
PPOSS\tPRON
PRELAT\tDET
PRELS\tPRON
PRF\tPRON
PTKA\tPART
PTKANT\tPART
PTKNEG\tPART
PTKVZ\tPART
PTKZU\tPART
PWAT\tDET
PWAV\tADV
PWS\tPRON
TRUNC\tX
VAFIN\tVERB
VAIMP\tVERB
VAINF\tVERB
VAPP\tVERB
VMFIN\tVERB
VMINF\tVERB
VMPP\tVERB
VVFIN\tVERB
VVIMP\tVERB
VVINF\tVERB
VVIZU\tVERB
VVPP\tVERB
XY\tX
";

/// Read-only fine → coarse tag table
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    map: HashMap<String, String>,
}

impl TagMap {
    /// Built-in table for a corpus language
    pub fn for_language(language: CorpusLanguage) -> Self {
        let table = match language {
            CorpusLanguage::English => PTB_MAP,
            CorpusLanguage::German => STTS_MAP,
        };
        // Built-in tables are well formed
        Self::parse(table).unwrap_or_default()
    }

    /// Load a `fine<TAB>coarse` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Unreadable {
            kind: "tag map",
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse `fine<TAB>coarse` lines; blank lines are ignored
    pub fn parse(content: &str) -> Result<Self, ResourceError> {
        let mut map = HashMap::new();

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(fine), Some(coarse)) = (fields.next(), fields.next()) else {
                return Err(ResourceError::InvalidEntry {
                    kind: "tag map",
                    line: i + 1,
                    content: line.to_string(),
                });
            };
            let coarse = match coarse.trim() {
                "ADP" => "PREP",
                "PROPN" => "NOUN",
                other => other,
            };
            map.insert(fine.to_string(), coarse.to_string());
        }

        // Tags emitted by taggers that are absent from the treebank tables
        map.insert("\"\"".to_string(), "PUNCT".to_string());
        map.insert("SP".to_string(), "SPACE".to_string());
        for tag in ["ADD", "GW", "NFP", "XX"] {
            map.insert(tag.to_string(), UNKNOWN_TAG.to_string());
        }

        Ok(Self { map })
    }

    /// Coarse tag for `fine`, `X` when unmapped
    pub fn coarse<'a>(&'a self, fine: &str) -> &'a str {
        self.map.get(fine).map(String::as_str).unwrap_or(UNKNOWN_TAG)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

use anyhow::{Result, anyhow};
use isolang::Language;
use serde::{Deserialize, Serialize};

/// Language utilities for ISO language code handling
///
/// Corpus languages are configured with ISO 639-1 or ISO 639-2 codes;
/// this module normalises them and maps them onto the rule sets that exist.
/// Languages with an error-typing rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CorpusLanguage {
    // @language: English, PTB tags
    #[default]
    #[serde(rename = "en")]
    English,
    // @language: German, STTS tags
    #[serde(rename = "de")]
    German,
}

impl CorpusLanguage {
    /// All supported languages
    pub const ALL: [CorpusLanguage; 2] = [CorpusLanguage::English, CorpusLanguage::German];

    // @returns: ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    // @returns: ISO 639-2/T code
    pub fn part2t(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::German => "deu",
        }
    }

    /// Resolve any ISO code for a supported language
    pub fn from_code(code: &str) -> Result<Self> {
        let part2t = normalize_to_part2t(code)?;
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.part2t() == part2t)
            .ok_or_else(|| {
                anyhow!(
                    "Unsupported corpus language '{}' ({}). Supported: {}",
                    code,
                    get_language_name(code).unwrap_or_else(|_| "unknown".to_string()),
                    Self::ALL.iter().map(|l| l.code()).collect::<Vec<_>>().join(", ")
                )
            })
    }
}

impl std::fmt::Display for CorpusLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for CorpusLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        // ISO 639-2/B codes that differ from their 639-2/T form
        match normalized_code.as_str() {
            "fre" => return Ok("fra".to_string()),
            "ger" => return Ok("deu".to_string()),
            "dut" => return Ok("nld".to_string()),
            "cze" => return Ok("ces".to_string()),
            _ => {}
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

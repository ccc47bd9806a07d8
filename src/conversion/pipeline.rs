/*!
 * Per-record conversion.
 *
 * `Converter::convert` takes a parsed record and returns a new one with
 * realigned or reclassified edits. It only reads the shared resources, so a
 * converter can serve many records, in any order, from any thread.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::minimize::minimize_edit;
use crate::alignment::{Aligner, AlignerOptions, MergePolicy, Merger};
use crate::annotation::{Annotator, Sentence, Token};
use crate::classification::Classifier;
use crate::errors::AlignmentError;
use crate::m2::{AnnotatorEntry, Edit, Record, UM, UNK};
use crate::resources::Resources;

/// Where the output edits come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Align the original with each corrected sentence
    #[default]
    Auto,
    /// Keep the annotators' edits
    Gold,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gold => write!(f, "gold"),
        }
    }
}

/// Switches for one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    // @field: Automatic alignment or gold edits
    pub mode: Mode,

    // @field: Keep gold spans unminimised
    pub max_edits: bool,

    // @field: Keep gold categories
    pub legacy_categories: bool,

    // @field: Plain Levenshtein alignment
    pub levenshtein: bool,

    // @field: Detect reordered blocks
    pub transpositions: bool,

    // @field: How alignment operations become edits
    pub merge: MergePolicy,

    // @field: Write `O`/`C` annotation lines
    pub annotate: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            max_edits: false,
            legacy_categories: false,
            levenshtein: false,
            transpositions: true,
            merge: MergePolicy::Rules,
            annotate: false,
        }
    }
}

/// Record converter over read-only resources
#[derive(Debug)]
pub struct Converter {
    options: ConversionOptions,
    resources: Resources,
    annotator: Box<dyn Annotator>,
    classifier: Classifier,
    aligner: Aligner,
}

impl Converter {
    /// Converter with the built-in cascade of the resources' language
    pub fn new(options: ConversionOptions, resources: Resources, annotator: Box<dyn Annotator>) -> Self {
        let classifier = Classifier::for_language(resources.language);
        let aligner = Aligner::new(AlignerOptions {
            levenshtein: options.levenshtein,
            transpositions: options.transpositions,
        });
        Self {
            options,
            resources,
            annotator,
            classifier,
            aligner,
        }
    }

    /// Replace the classifier
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Convert one record
    ///
    /// Annotators are visited in ascending id order. The original sentence is
    /// annotated at most once, and only if some annotator needs it.
    ///
    /// # Arguments
    /// * `record` - The parsed input record
    ///
    /// # Returns
    /// * `Result<Record, AlignmentError>` - The output record
    pub fn convert(&self, record: Record) -> Result<Record, AlignmentError> {
        let mut output = Record::new(record.original.clone());
        let mut orig_sentence: Option<Sentence> = None;

        for (annotator, entry) in record.annotators {
            // A leading noop is the annotator's only output
            if entry.is_noop() {
                let mut noop = AnnotatorEntry::new(entry.corrected);
                noop.edits = entry.edits.into_iter().take(1).collect();
                output.annotators.insert(annotator, noop);
                continue;
            }

            let orig = orig_sentence.get_or_insert_with(|| self.annotator.annotate(&record.original));
            let cor = self.annotator.annotate(&entry.corrected);
            let edits = self.convert_edits(&annotator, entry.edits, orig, &cor)?;

            let mut converted = AnnotatorEntry::new(entry.corrected);
            if self.options.annotate {
                converted.annotation = Some(cor.annotation());
            }
            converted.edits = edits;
            output.annotators.insert(annotator, converted);
        }

        if self.options.annotate {
            output.annotation = orig_sentence.as_ref().map(Sentence::annotation);
        }

        Ok(output)
    }

    fn convert_edits(
        &self,
        annotator: &str,
        gold: Vec<Edit>,
        orig: &Sentence,
        cor: &Sentence,
    ) -> Result<Vec<Edit>, AlignmentError> {
        let legacy = self.options.legacy_categories;
        let mut edits = Vec::with_capacity(gold.len());

        for edit in gold {
            // Uncorrected errors survive in both modes
            if edit.category == UM || edit.category == UNK {
                edits.push(self.classifier.reclassify(edit, orig, cor, &self.resources, legacy));
                continue;
            }
            if self.options.mode != Mode::Gold {
                continue;
            }

            let edit = if self.options.max_edits {
                edit
            } else {
                match minimize_edit(edit, orig, cor) {
                    Some(edit) => edit,
                    None => continue,
                }
            };
            let edit = if legacy {
                edit
            } else {
                self.classifier.reclassify(edit, orig, cor, &self.resources, legacy)
            };
            edits.push(edit);
        }

        if self.options.mode == Mode::Auto {
            edits.extend(self.align_edits(annotator, orig, cor)?);
        }

        Ok(edits)
    }

    /// Edits obtained by aligning, merging and classifying
    pub fn align_edits(&self, annotator: &str, orig: &Sentence, cor: &Sentence) -> Result<Vec<Edit>, AlignmentError> {
        let alignment = self.aligner.align(orig, cor, self.resources.stemmer.as_ref());
        alignment.validate(orig.len(), cor.len())?;

        let spans = Merger::new(orig, cor).merge(&alignment.ops, self.options.merge);
        if spans.is_empty() && orig.words() != cor.words() {
            return Err(AlignmentError::Partition(format!(
                "no edits between differing sentences ({})",
                alignment.signature()
            )));
        }
        debug!("Alignment {} merged into {} edits", alignment.signature(), spans.len());

        Ok(spans
            .into_iter()
            .map(|span| {
                let category = self.classifier.classify(span, orig, cor, &self.resources);
                let correction = cor
                    .slice(span.cor_start, span.cor_end)
                    .iter()
                    .map(Token::text)
                    .collect::<Vec<_>>()
                    .join(" ");
                Edit::from_span(span, &category, &correction, annotator)
            })
            .collect())
    }
}

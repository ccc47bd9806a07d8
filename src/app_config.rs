use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::alignment::MergePolicy;
use crate::conversion::{ConversionOptions, Mode};
use crate::language_utils::CorpusLanguage;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Corpus language, selects the resources and the rule cascade
    #[serde(default)]
    pub language: CorpusLanguage,

    /// Lexical resource files
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Conversion switches
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Optional resource files; built-in defaults are used for anything unset
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ResourceConfig {
    // @field: One known word per line
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    // @field: `fine<TAB>coarse` tag table
    #[serde(default)]
    pub tag_map: Option<PathBuf>,

    // @field: `word<TAB>tag<TAB>lemma[<TAB>dep]` annotation lexicon
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

impl ResourceConfig {
    // @returns: Configured paths with their resource kind
    fn paths(&self) -> impl Iterator<Item = (&'static str, &PathBuf)> {
        [
            ("word list", self.word_list.as_ref()),
            ("tag map", self.tag_map.as_ref()),
            ("lexicon", self.lexicon.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.map(|p| (kind, p)))
    }
}

/// Conversion settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConversionConfig {
    /// `auto` aligns sentences, `gold` keeps the annotators' edits
    #[serde(default)]
    pub mode: Mode,

    /// Do not minimise gold edit spans
    #[serde(default)]
    pub max_edits: bool,

    /// Keep the input categories: gold edits are not reclassified and `Um` stays `Um`
    #[serde(default)]
    pub old_cats: bool,

    /// Align with plain Levenshtein costs
    #[serde(default)]
    pub levenshtein: bool,

    /// Detect reordered token blocks
    #[serde(default = "default_true")]
    pub transpositions: bool,

    /// Merge policy for automatic alignment
    #[serde(default)]
    pub merge: MergePolicy,

    /// Write annotation lines
    #[serde(default)]
    pub annotate: bool,

    /// Suffix inserted before `.m2` when converting a folder
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_edits: false,
            old_cats: false,
            levenshtein: false,
            transpositions: default_true(),
            merge: MergePolicy::default(),
            annotate: false,
            output_suffix: default_output_suffix(),
        }
    }
}

impl ConversionConfig {
    // @returns: Engine options for these settings
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions {
            mode: self.mode,
            max_edits: self.max_edits,
            legacy_categories: self.old_cats,
            levenshtein: self.levenshtein,
            transpositions: self.transpositions,
            merge: self.merge,
            annotate: self.annotate,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_output_suffix() -> String {
    "converted".to_string()
}

impl Config {
    /// Load a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        for (kind, path) in self.resources.paths() {
            if !path.is_file() {
                return Err(anyhow!("Configured {} does not exist: {:?}", kind, path));
            }
        }

        let suffix = &self.conversion.output_suffix;
        if suffix.is_empty() || suffix.contains(['/', '\\']) {
            return Err(anyhow!("Invalid output suffix: {:?}", suffix));
        }

        // Auto mode builds minimal edits itself
        if self.conversion.mode == Mode::Auto && self.conversion.max_edits {
            warn!("max_edits only applies to gold mode and is ignored");
        }

        Ok(())
    }
}

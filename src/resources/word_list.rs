use std::collections::HashSet;
use std::path::Path;

use crate::errors::ResourceError;

// @module: Known-word list used for spelling decisions

// @struct: Set of correctly spelled words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Load a one-word-per-line dictionary
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Unreadable {
            kind: "word list",
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_lines(&content))
    }

    // @creates: Word list from dictionary text
    pub fn from_lines(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    // @checks: Exact membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership of the word as written or lower-cased
    pub fn knows(&self, word: &str) -> bool {
        self.contains(word) || self.contains(&word.to_lowercase())
    }

    /// A loaded list that knows neither form of the word; an empty list knows everything
    pub fn is_unknown(&self, word: &str) -> bool {
        !self.is_empty() && !self.knows(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

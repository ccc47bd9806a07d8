/*!
 * Lexical resources shared by every record.
 *
 * The word list, tag map and stemmer are loaded once before processing
 * starts and are only ever read afterwards:
 * - `word_list`: known-word set for spelling decisions
 * - `tag_map`: fine → coarse part-of-speech table
 */

pub mod tag_map;
pub mod word_list;

use log::{debug, info};

pub use tag_map::TagMap;
pub use word_list::WordList;

use crate::annotation::stemmer::{Stemmer, SuffixStemmer};
use crate::app_config::ResourceConfig;
use crate::errors::ResourceError;
use crate::language_utils::CorpusLanguage;

/// Read-only resource bundle passed explicitly into each component
#[derive(Debug)]
pub struct Resources {
    /// Language the resources belong to
    pub language: CorpusLanguage,
    /// Known words
    pub word_list: WordList,
    /// Fine → coarse tag table
    pub tag_map: TagMap,
    /// Stemmer used for derivational checks
    pub stemmer: Box<dyn Stemmer>,
}

impl Resources {
    /// Assemble a bundle from already loaded parts
    pub fn new(
        language: CorpusLanguage,
        word_list: WordList,
        tag_map: TagMap,
        stemmer: Box<dyn Stemmer>,
    ) -> Self {
        Self {
            language,
            word_list,
            tag_map,
            stemmer,
        }
    }

    /// Built-in tag map and stemmer with the given word list
    pub fn builtin(language: CorpusLanguage, word_list: WordList) -> Self {
        Self::new(
            language,
            word_list,
            TagMap::for_language(language),
            Box::new(SuffixStemmer::for_language(language)),
        )
    }

    /// Load the resources named in the configuration
    pub fn load(language: CorpusLanguage, config: &ResourceConfig) -> Result<Self, ResourceError> {
        let word_list = match &config.word_list {
            Some(path) => WordList::load(path)?,
            None => {
                debug!("No word list configured, spelling checks are disabled");
                WordList::default()
            }
        };

        let tag_map = match &config.tag_map {
            Some(path) => TagMap::load(path)?,
            None => TagMap::for_language(language),
        };

        info!(
            "Loaded {} resources: {} known words, {} tag mappings",
            language,
            word_list.len(),
            tag_map.len()
        );

        Ok(Self::new(
            language,
            word_list,
            tag_map,
            Box::new(SuffixStemmer::for_language(language)),
        ))
    }

    /// Coarse category tag for a fine tag
    pub fn coarse_tag(&self, fine: &str) -> &str {
        self.tag_map.coarse(fine)
    }

    /// Stem through the configured stemmer
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }
}

/*!
 * Linguistic annotation boundary.
 *
 * - `token`: immutable annotated tokens and sentences
 * - `annotator`: the annotation capability and its lexicon-backed implementation
 * - `stemmer`: the stemming capability and its suffix-stripping implementation
 */

pub mod annotator;
pub mod stemmer;
pub mod token;

pub use annotator::{Annotator, LexiconAnnotator};
pub use stemmer::{Stemmer, SuffixStemmer};
pub use token::{Sentence, Token};

/*!
 * The M2 corpus format.
 *
 * - `edit`: edit lines and the reserved categories
 * - `record`: sentence blocks with per-annotator edits
 * - `reader`: block splitting over a whole corpus
 */

pub mod edit;
pub mod reader;
pub mod record;

pub use edit::{Edit, NOOP, UM, UNK};
pub use reader::{RecordBlocks, parse_corpus};
pub use record::{AnnotatorEntry, Record};

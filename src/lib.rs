/*!
 * # m2align - edit extraction and error typing for M2 corpora
 *
 * A Rust library for converting grammatical-error corpora in the M2 format.
 *
 * ## Features
 *
 * - Parse and write M2 records, including `noop`, `Um` and annotation lines
 * - Align original and corrected sentences with a linguistically weighted
 *   Damerau-Levenshtein aligner
 * - Merge alignment operations into edits with rule-based or fixed policies
 * - Minimise gold edits to their differing tokens
 * - Classify edits into error types (English and German rule sets)
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `annotation`: annotated tokens and the annotation/stemming capabilities
 * - `resources`: word list and tag map shared read-only by every record
 * - `alignment`: alignment matrix and operation merging
 * - `classification`: the error-type classifier and its rule cascades
 * - `m2`: the record model and corpus reader
 * - `conversion`: edit minimisation and the per-record converter
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder conversion
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod annotation;
pub mod app_config;
pub mod app_controller;
pub mod classification;
pub mod conversion;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod m2;
pub mod resources;

// Re-export main types for easier usage
pub use alignment::{Aligner, MergePolicy};
pub use annotation::{Annotator, LexiconAnnotator, Sentence, Token};
pub use app_config::Config;
pub use classification::Classifier;
pub use conversion::{ConversionOptions, Converter, Mode};
pub use errors::{AlignmentError, AppError, M2Error, ResourceError};
pub use language_utils::{CorpusLanguage, get_language_name, normalize_to_part2t};
pub use m2::{Edit, Record};
pub use resources::Resources;

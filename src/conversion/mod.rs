/*!
 * Record conversion.
 *
 * - `minimize`: shrink gold edits to their differing core
 * - `pipeline`: the per-record converter and its options
 */

pub mod minimize;
pub mod pipeline;

pub use minimize::minimize_edit;
pub use pipeline::{ConversionOptions, Converter, Mode};

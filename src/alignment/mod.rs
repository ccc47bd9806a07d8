/*!
 * Token alignment between an original and a corrected sentence.
 *
 * - `operation`: alignment steps and merged edit spans
 * - `cost`: linguistically weighted substitution cost
 * - `matrix`: dynamic-programming aligner
 * - `merge`: merge policies turning operations into edit spans
 */

pub mod cost;
pub mod matrix;
pub mod merge;
pub mod operation;

pub use matrix::{Aligner, AlignerOptions};
pub use merge::{MergePolicy, Merger};
pub use operation::{AlignOp, Alignment, EditSpan, OpKind};

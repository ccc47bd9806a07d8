/*!
 * Edit minimisation: `[has eaten -> was eaten]` becomes `[has -> was]`.
 */

use log::debug;

use crate::annotation::Sentence;
use crate::m2::Edit;

/// Trim tokens with identical text from both ends of a placed edit
///
/// Returns `None` when nothing differs. Unplaced edits are returned as is.
pub fn minimize_edit(edit: Edit, orig: &Sentence, cor: &Sentence) -> Option<Edit> {
    let Some(span) = edit.span() else {
        return Some(edit);
    };

    let mut o = orig.slice(span.orig_start, span.orig_end);
    let mut c = cor.slice(span.cor_start, span.cor_end);
    let (mut orig_start, mut orig_end) = (span.orig_start, span.orig_start + o.len());
    let (mut cor_start, mut cor_end) = (span.cor_start, span.cor_start + c.len());

    while let ([first_o, rest_o @ ..], [first_c, rest_c @ ..]) = (o, c) {
        if first_o.text() != first_c.text() {
            break;
        }
        o = rest_o;
        c = rest_c;
        orig_start += 1;
        cor_start += 1;
    }
    while let ([rest_o @ .., last_o], [rest_c @ .., last_c]) = (o, c) {
        if last_o.text() != last_c.text() {
            break;
        }
        o = rest_o;
        c = rest_c;
        orig_end -= 1;
        cor_end -= 1;
    }

    if o.is_empty() && c.is_empty() {
        debug!("Edit {} minimised away", edit);
        return None;
    }

    let correction = c.iter().map(|t| t.text()).collect::<Vec<_>>().join(" ");
    Some(Edit {
        orig: Some((orig_start, orig_end)),
        cor: Some((cor_start, cor_end)),
        correction,
        ..edit
    })
}

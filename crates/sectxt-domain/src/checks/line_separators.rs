use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::{LineKind, ids};

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    let terminated = doc
        .lines
        .last()
        .is_some_and(|line| line.kind == LineKind::Empty);
    if terminated {
        return;
    }

    let past_end = u32::try_from(doc.lines.len()).map_or(u32::MAX, |n| n.saturating_add(1));
    out.error(
        ids::CODE_NO_LINE_SEPARATORS,
        "Every line, including the last one, must end with either a carriage return and \
         line feed characters or just a line feed character",
        Some(past_end),
    );
}

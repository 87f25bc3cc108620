use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    if !doc.envelope.signed {
        out.recommend(
            ids::CODE_NOT_SIGNED,
            "security.txt should be digitally signed.",
            None,
        );
    } else if !doc.values.contains(ids::FIELD_CANONICAL) {
        out.recommend(
            ids::CODE_NO_CANONICAL,
            "'Canonical' field should be present in a signed file.",
            None,
        );
    }
}

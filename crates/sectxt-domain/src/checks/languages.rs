use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    if doc.values.count(ids::FIELD_PREFERRED_LANGUAGES) > 1 {
        out.error(
            ids::CODE_MULTI_LANG,
            "'Preferred-Languages' field must not appear more than once.",
            None,
        );
    }
}

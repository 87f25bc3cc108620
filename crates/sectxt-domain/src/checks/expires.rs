use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    match doc.values.count(ids::FIELD_EXPIRES) {
        0 => out.error(ids::CODE_NO_EXPIRE, "'Expires' field must be present.", None),
        1 => {}
        _ => out.error(
            ids::CODE_MULTI_EXPIRE,
            "'Expires' field must not appear more than once.",
            None,
        ),
    }
}

use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    let contacts = doc.values.get(ids::FIELD_CONTACT);
    if contacts.is_empty() {
        out.error(
            ids::CODE_NO_CONTACT,
            "'Contact' field must appear at least once.",
            None,
        );
        return;
    }

    let has_email = contacts.iter().any(|v| v.starts_with("mailto:"));
    if has_email && !doc.values.contains(ids::FIELD_ENCRYPTION) {
        out.recommend(
            ids::CODE_NO_ENCRYPTION,
            "'Encryption' field should be present when 'Contact' field contains an email address.",
            None,
        );
    }
}

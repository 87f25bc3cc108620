use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

/// Any fetch URL (first or last of a redirect chain included) must be listed as `Canonical`.
pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    if doc.urls.is_empty() || !doc.values.contains(ids::FIELD_CANONICAL) {
        return;
    }

    let canonical = doc.values.get(ids::FIELD_CANONICAL);
    if doc.urls.iter().any(|url| canonical.contains(url)) {
        return;
    }

    out.error(
        ids::CODE_NO_CANONICAL_MATCH,
        "Web URI where security.txt is located must match with a 'Canonical' field. \
         In case of redirecting either the first or last web URI of the redirect chain must match.",
        None,
    );
}

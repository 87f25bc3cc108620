use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;
use sectxt_types::ids;

const PROVIDER_METADATA: &str = "provider-metadata.json";

pub fn run(doc: &ScannedDocument, out: &mut Diagnostics) {
    let values = doc.values.get(ids::FIELD_CSAF);
    if values.is_empty() {
        return;
    }

    if !values.iter().all(|v| v.ends_with(PROVIDER_METADATA)) {
        out.error(
            ids::CODE_NO_CSAF_FILE,
            "All CSAF fields must point to a provider-metadata.json file.",
            None,
        );
    }

    if values.len() > 1 {
        out.recommend(
            ids::CODE_MULTIPLE_CSAF_FIELDS,
            "It is allowed to have more than one csaf field, however this should be removed if possible.",
            None,
        );
    }
}

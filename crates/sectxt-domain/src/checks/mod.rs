//! Cross-field checks. Run once, after every line has been classified.

use crate::diagnostics::Diagnostics;
use crate::model::ScannedDocument;

mod canonical;
mod contact;
mod csaf;
mod expires;
mod languages;
mod line_separators;
mod signature;


pub fn run_all(doc: &ScannedDocument, out: &mut Diagnostics) {
    expires::run(doc, out);
    canonical::run(doc, out);
    line_separators::run(doc, out);
    csaf::run(doc, out);
    contact::run(doc, out);
    languages::run(doc, out);
    signature::run(doc, out);
}

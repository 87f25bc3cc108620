use crate::capabilities::Collaborators;
use crate::diagnostics::Diagnostics;
use crate::parser::{ParseOptions, Parser};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use sectxt_types::Verdict;

/// What the engine gets to look at for one run.
#[derive(Clone, Copy, Debug)]
pub struct DocumentInput<'a> {
    /// Decoded document text. `None` when retrieval found nothing.
    pub content: Option<&'a str>,
    /// Fetch URLs in redirect order; empty for local input.
    pub urls: &'a [String],
    /// Diagnostics raised while retrieving or decoding the document.
    pub retrieval: &'a Diagnostics,
}

pub fn evaluate(
    input: &DocumentInput<'_>,
    cfg: &EffectiveConfig,
    collab: &Collaborators,
) -> DomainReport {
    let mut diagnostics = input.retrieval.clone();

    let parser = input.content.map(|content| {
        let urls = if input.urls.is_empty() {
            &cfg.canonical_urls
        } else {
            input.urls
        };
        let options = ParseOptions::default()
            .with_urls(urls.iter().cloned())
            .notify_unknown_fields(cfg.notify_unknown_fields);
        Parser::with_collaborators(content, options, collab)
    });

    if let Some(parser) = &parser {
        diagnostics.extend(parser.diagnostics());
    }

    let verdict = compute_verdict(&diagnostics, cfg.fail_on);
    let counts = SeverityCounts::from_diagnostics(&diagnostics);

    DomainReport {
        verdict,
        diagnostics,
        counts,
        parser,
    }
}

/// Notifications never influence the verdict.
pub fn compute_verdict(diagnostics: &Diagnostics, fail_on: FailOn) -> Verdict {
    if diagnostics.has_errors() {
        return Verdict::Fail;
    }

    if !diagnostics.recommendations().is_empty() {
        return match fail_on {
            FailOn::Recommendation => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

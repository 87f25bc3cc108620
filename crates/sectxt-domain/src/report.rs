use crate::diagnostics::Diagnostics;
use crate::parser::Parser;
use sectxt_types::Verdict;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub error: u32,
    pub recommendation: u32,
    pub notification: u32,
}

impl SeverityCounts {
    pub fn from_diagnostics(diagnostics: &Diagnostics) -> Self {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        SeverityCounts {
            error: count(diagnostics.errors().len()),
            recommendation: count(diagnostics.recommendations().len()),
            notification: count(diagnostics.notifications().len()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Retrieval diagnostics first, then the parser's, each in discovery order.
    pub diagnostics: Diagnostics,
    pub counts: SeverityCounts,
    /// Absent when there was no document to parse.
    pub parser: Option<Parser>,
}

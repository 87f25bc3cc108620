//! Pure security.txt validation (no IO).
//!
//! Input: the document text plus the URLs it was fetched from.
//! Output: per-line classification, diagnostics in discovery order, and a verdict.

#![forbid(unsafe_code)]

pub mod capabilities;
pub mod diagnostics;
pub mod model;
pub mod policy;
pub mod report;

mod checks;
mod engine;
mod envelope;
mod expiry;
mod field;
mod parser;

pub use capabilities::Collaborators;
pub use diagnostics::Diagnostics;
pub use engine::{DocumentInput, compute_verdict, evaluate};
pub use parser::{ParseOptions, Parser};
pub use policy::{EffectiveConfig, FailOn};
pub use report::{DomainReport, SeverityCounts};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod proptest;

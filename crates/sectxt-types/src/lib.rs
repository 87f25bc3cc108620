//! Stable DTOs and codes used across the sectxt workspace.
//!
//! This crate is intentionally boring:
//! - data types for diagnostics, line classification and the emitted report
//! - stable snake_case diagnostic codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    Diagnostic, LineKind, LineRecord, ReportData, SCHEMA_REPORT_V1, SectxtReport, Severity,
    SourceMeta, ToolMeta, Verdict,
};

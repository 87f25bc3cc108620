//! Rendering utilities for CI surfaces (Markdown, GitHub annotations).
//!
//! Renderers work on a small owned model so they stay independent of the report schema.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableDiagnostic, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};

use crate::{RenderableReport, RenderableSeverity};

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::[{code}] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for d in &report.diagnostics {
        let level = match d.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Recommendation => "warning",
            RenderableSeverity::Notification => "notice",
        };

        let mut meta = Vec::new();
        if !report.target.is_empty() {
            meta.push(format!("file={}", escape_property(&report.target)));
        }
        if let Some(line) = d.line {
            meta.push(format!("line={line}"));
        }

        let message = escape_data(&format!("[{}] {}", d.code, d.message));

        if meta.is_empty() {
            out.push(format!("::{level}::{message}"));
        } else {
            out.push(format!("::{level} {}::{message}", meta.join(",")));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

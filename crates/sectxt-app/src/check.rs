//! The `check` use case: obtain a document, validate it and produce a report.

use anyhow::Context;
use sectxt_domain::{Collaborators, Diagnostics, DocumentInput};
use sectxt_fetch::HttpClient;
use sectxt_settings::{Overrides, ResolvedConfig};
use sectxt_types::{ReportData, SCHEMA_REPORT_V1, SectxtReport, SourceMeta, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::info;

/// Where the document comes from.
#[derive(Clone, Copy)]
pub enum CheckSource<'a> {
    /// Bytes read from a local file. No fetch URLs are known.
    File { path: &'a str, bytes: &'a [u8] },
    /// A domain or URL to probe over HTTP(S).
    Host {
        target: &'a str,
        client: &'a dyn HttpClient,
    },
}

impl CheckSource<'_> {
    fn target(&self) -> &str {
        match self {
            CheckSource::File { path, .. } => path,
            CheckSource::Host { target, .. } => target,
        }
    }
}

/// Input for the check use case.
pub struct CheckInput<'a> {
    pub source: CheckSource<'a>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub collaborators: &'a Collaborators,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: SectxtReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, obtain the document, validate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = sectxt_settings::parse_config_toml(input.config_text).context("parse config")?;
    let resolved =
        sectxt_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    let (content, urls, retrieval) = match input.source {
        CheckSource::File { bytes, .. } => {
            let mut retrieval = Diagnostics::new();
            let content = sectxt_fetch::decode_body(bytes, &mut retrieval);
            (Some(content), Vec::new(), retrieval)
        }
        CheckSource::Host { target, client } => {
            let retrieved = sectxt_fetch::retrieve(target, client)
                .with_context(|| format!("retrieve security.txt for {target}"))?;
            (retrieved.content, retrieved.urls, retrieved.diagnostics)
        }
    };

    let domain_report = sectxt_domain::evaluate(
        &DocumentInput {
            content: content.as_deref(),
            urls: &urls,
            retrieval: &retrieval,
        },
        &resolved.effective,
        input.collaborators,
    );

    let sectxt_domain::DomainReport {
        verdict,
        diagnostics,
        counts,
        parser,
    } = domain_report;

    info!(
        target = input.source.target(),
        verdict = ?verdict,
        errors = counts.error,
        recommendations = counts.recommendation,
        notifications = counts.notification,
        "check finished"
    );

    let mut data = ReportData {
        profile: resolved.effective.profile.clone(),
        ..ReportData::default()
    };
    let mut lines = Vec::new();
    if let Some(parser) = parser {
        data.lines_scanned = u32::try_from(parser.lines().len()).unwrap_or(u32::MAX);
        data.fields_recognized = u32::try_from(parser.values().occurrences()).unwrap_or(u32::MAX);
        data.signed = parser.is_signed();
        data.contact_email = parser.contact_email().map(str::to_string);
        data.preferred_languages = parser.preferred_languages();
        data.expires = parser.expires();
        lines = parser.lines().to_vec();
    }

    let (errors, recommendations, notifications) = diagnostics.into_parts();
    let source = SourceMeta {
        target: input.source.target().to_string(),
        resolved_url: urls.last().cloned(),
        urls,
    };

    let report = SectxtReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        source,
        errors,
        recommendations,
        notifications,
        lines,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "sectxt".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectxt_domain::capabilities::FixedClock;
    use sectxt_fetch::{HttpResponse, TransportError};
    use sectxt_types::{LineKind, ids};
    use time::macros::datetime;

    const DOC: &str = "Contact: mailto:security@example.com\nExpires: 2030-01-01T00:00:00.000Z\n";

    fn collaborators() -> Collaborators {
        Collaborators::default().with_clock(FixedClock(datetime!(2029-09-01 12:00 UTC)))
    }

    fn check_file(bytes: &[u8], config_text: &str, overrides: Overrides) -> CheckOutput {
        let collab = collaborators();
        run_check(CheckInput {
            source: CheckSource::File {
                path: "security.txt",
                bytes,
            },
            config_text,
            overrides,
            collaborators: &collab,
        })
        .expect("run_check")
    }

    fn codes(list: &[sectxt_types::Diagnostic]) -> Vec<&str> {
        list.iter().map(|d| d.code.as_str()).collect()
    }

    /// Serves one body at the well-known https location.
    struct OneFile(&'static [u8]);

    impl HttpClient for OneFile {
        fn get(&self, url: &str, _verify_tls: bool) -> Result<HttpResponse, TransportError> {
            if url == "https://example.com/.well-known/security.txt" {
                Ok(HttpResponse {
                    status: 200,
                    final_url: url.to_string(),
                    content_type: Some("text/plain; charset=utf-8".to_string()),
                    body: self.0.to_vec(),
                })
            } else {
                Ok(HttpResponse {
                    status: 404,
                    final_url: url.to_string(),
                    ..HttpResponse::default()
                })
            }
        }
    }

    #[test]
    fn local_file_with_only_recommendations_warns() {
        let out = check_file(DOC.as_bytes(), "", Overrides::default());
        let report = out.report;

        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.verdict, Verdict::Warn);
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert!(codes(&report.recommendations).contains(&ids::CODE_NOT_SIGNED));
        assert_eq!(report.source.target, "security.txt");
        assert!(report.source.urls.is_empty());
        assert_eq!(report.source.resolved_url, None);

        assert_eq!(report.data.profile, "default");
        assert_eq!(report.data.lines_scanned, 3);
        assert_eq!(report.data.fields_recognized, 2);
        assert!(!report.data.signed);
        assert_eq!(
            report.data.contact_email.as_deref(),
            Some("security@example.com")
        );
        assert_eq!(report.data.expires, Some(datetime!(2030-01-01 00:00 UTC)));
        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.lines[2].kind, LineKind::Empty);
    }

    #[test]
    fn strict_profile_turns_recommendations_into_failure() {
        let out = check_file(DOC.as_bytes(), "profile = \"strict\"\n", Overrides::default());
        assert_eq!(out.resolved_config.effective.profile, "strict");
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(verdict_exit_code(out.report.verdict), 2);
    }

    #[test]
    fn file_decoding_problems_come_first() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(DOC.as_bytes());

        let out = check_file(&bytes, "", Overrides::default());
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(codes(&out.report.errors)[0], ids::CODE_BOM_IN_FILE);
        assert_eq!(out.report.data.lines_scanned, 3);
    }

    #[test]
    fn overrides_silence_unknown_fields() {
        let doc = format!("{DOC}X-Custom: hello\n");
        let noisy = check_file(doc.as_bytes(), "", Overrides::default());
        assert_eq!(codes(&noisy.report.notifications), vec![ids::CODE_UNKNOWN_FIELD]);

        let quiet = check_file(
            doc.as_bytes(),
            "",
            Overrides {
                notify_unknown_fields: Some(false),
                ..Overrides::default()
            },
        );
        assert!(quiet.report.notifications.is_empty());
    }

    #[test]
    fn bad_config_is_a_runtime_error() {
        let collab = collaborators();
        let err = run_check(CheckInput {
            source: CheckSource::File {
                path: "security.txt",
                bytes: DOC.as_bytes(),
            },
            config_text: "fail_on = \"sometimes\"\n",
            overrides: Overrides::default(),
            collaborators: &collab,
        })
        .expect_err("invalid fail_on");
        assert!(format!("{err:#}").contains("resolve config"));
    }

    #[test]
    fn host_check_records_fetch_urls() {
        let collab = collaborators();
        let client = OneFile(DOC.as_bytes());
        let out = run_check(CheckInput {
            source: CheckSource::Host {
                target: "example.com",
                client: &client,
            },
            config_text: "",
            overrides: Overrides::default(),
            collaborators: &collab,
        })
        .expect("run_check");

        let url = "https://example.com/.well-known/security.txt";
        assert_eq!(out.report.source.target, "example.com");
        assert_eq!(out.report.source.urls, vec![url.to_string()]);
        assert_eq!(out.report.source.resolved_url.as_deref(), Some(url));
        assert!(out.report.errors.is_empty(), "{:?}", out.report.errors);
    }

    #[test]
    fn host_without_security_txt_fails_without_lines() {
        let collab = collaborators();
        let client = OneFile(b"");
        let out = run_check(CheckInput {
            source: CheckSource::Host {
                target: "https://nothing.example/",
                client: &client,
            },
            config_text: "",
            overrides: Overrides::default(),
            collaborators: &collab,
        })
        .expect("run_check");

        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(codes(&out.report.errors), vec![ids::CODE_NO_SECURITY_TXT]);
        assert!(out.report.lines.is_empty());
        assert_eq!(out.report.data.lines_scanned, 0);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}

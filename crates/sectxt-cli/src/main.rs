//! CLI entry point for sectxt.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `sectxt-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use sectxt_app::{
    CheckInput, CheckSource, ExplainOutput, format_explanation, format_not_found,
    parse_report_json, render_annotations, render_markdown, run_check, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use sectxt_domain::Collaborators;
use sectxt_fetch::ReqwestClient;
use sectxt_settings::Overrides;
use sectxt_types::{SectxtReport, Verdict};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "sectxt",
    version,
    about = "Validate security.txt files against RFC 9116"
)]
struct Cli {
    /// Path to sectxt config TOML. A missing file means defaults.
    #[arg(long, default_value = "sectxt.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|quiet).
    #[arg(long)]
    profile: Option<String>,

    /// Do not report fields RFC 9116 does not define.
    #[arg(long)]
    no_unknown_fields: bool,

    /// Log debug output to stderr (SECTXT_LOG takes precedence).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a security.txt file or a host's published one, and write artifacts.
    Check {
        /// A domain, a URL, or (with --file or when it exists) a local path.
        target: String,

        /// Treat TARGET as a local file.
        #[arg(long)]
        file: bool,

        /// URL the document is served from, for Canonical matching of local files.
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/sectxt/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/sectxt/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/sectxt/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/sectxt/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a diagnostic code with remediation guidance.
    Explain {
        /// The diagnostic code (e.g. "no_expire").
        code: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Check {
            target,
            file,
            urls,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(
            &cli,
            target,
            *file,
            urls,
            report_out,
            *write_markdown,
            markdown_out,
        ),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { code } => cmd_explain(code),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SECTXT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn cmd_check(
    cli: &Cli,
    target: &str,
    file: bool,
    urls: &[String],
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Missing config file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            notify_unknown_fields: cli.no_unknown_fields.then_some(false),
            canonical_urls: urls.to_vec(),
        };
        let collaborators = Collaborators::default();

        let local = file || Utf8Path::new(target).is_file();
        let output = if local {
            let bytes =
                std::fs::read(target).with_context(|| format!("read security.txt: {target}"))?;
            run_check(CheckInput {
                source: CheckSource::File {
                    path: target,
                    bytes: &bytes,
                },
                config_text: &cfg_text,
                overrides,
                collaborators: &collaborators,
            })?
        } else {
            let client = ReqwestClient::new().context("build HTTP client")?;
            run_check(CheckInput {
                source: CheckSource::Host {
                    target,
                    client: &client,
                },
                config_text: &cfg_text,
                overrides,
                collaborators: &collaborators,
            })?
        };

        print!("{}", summarize(&output.report));

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(target, &format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("sectxt error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Plain-text console summary: verdict line, then every diagnostic.
fn summarize(report: &SectxtReport) -> String {
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };

    let mut out = format!(
        "{}: {verdict} ({} errors, {} recommendations, {} notifications)\n",
        report.source.target,
        report.errors.len(),
        report.recommendations.len(),
        report.notifications.len(),
    );
    for (severity, d) in report.diagnostics() {
        match d.line {
            Some(line) => out.push_str(&format!(
                "  {}[{}] line {line}: {}\n",
                severity.as_str(),
                d.code,
                d.message
            )),
            None => out.push_str(&format!(
                "  {}[{}]: {}\n",
                severity.as_str(),
                d.code,
                d.message
            )),
        }
    }
    out
}

fn write_report_file(path: &Utf8Path, report: &SectxtReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_text_file(out_path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&identifier, available_codes));
            std::process::exit(1);
        }
    }
}

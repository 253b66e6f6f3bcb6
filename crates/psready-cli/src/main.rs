//! CLI entry point for psready.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `psready-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use psready_app::{
    format_explanation, format_not_found, parse_report_json, render_markdown, run_check,
    run_explain, serialize_report, serialize_status, verdict_exit_code, CheckInput, ExplainOutput,
};
use psready_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "psready",
    version,
    about = "Pod-security readiness evaluation for cluster namespace inventories"
)]
struct Cli {
    /// Path to psready config TOML.
    #[arg(long, default_value = "psready.toml")]
    config: Utf8PathBuf,

    /// Override when a failing verdict fails the run (violations|never).
    #[arg(long)]
    fail_on: Option<String>,

    /// Override the snapshot input format (auto|descriptors|namespace-list).
    #[arg(long)]
    format: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a namespace snapshot and write artifacts.
    Check {
        /// Path to the namespace snapshot JSON.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/psready/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/psready/comment.md")]
        markdown_out: Utf8PathBuf,

        /// Status file to merge the conditions into (read if present, written back).
        #[arg(long)]
        status: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/psready/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a condition type with remediation guidance.
    Explain {
        /// The condition type (e.g., "PodSecurityCustomerEvaluationConditionsDetected").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref input,
            ref report_out,
            write_markdown,
            ref markdown_out,
            ref status,
        } => cmd_check(
            &cli,
            input.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
            status.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_check(
    cli: &Cli,
    input: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    status: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let snapshot_text = std::fs::read_to_string(&input)
            .with_context(|| format!("read snapshot: {input}"))?;

        // Load config if present; missing file is allowed (defaults apply).
        let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let status_text = match &status {
            Some(path) if path.exists() => Some(
                std::fs::read_to_string(path).with_context(|| format!("read status: {path}"))?,
            ),
            Some(_) => Some(String::new()),
            None => None,
        };

        let overrides = Overrides {
            fail_on: cli.fail_on.clone(),
            format: cli.format.clone(),
        };

        let output = run_check(CheckInput {
            snapshot_text: &snapshot_text,
            config_text: &config_text,
            overrides,
            status_text: status_text.as_deref(),
        })?;

        write_bytes_file(
            &report_out,
            &serialize_report(&output.report).context("serialize report")?,
        )
        .context("write report json")?;

        if write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        if let (Some(path), Some(merged)) = (&status, &output.status) {
            write_bytes_file(path, &serialize_status(merged).context("serialize status")?)
                .context("write status")?;
        }

        Ok(verdict_exit_code(
            output.report.verdict,
            output.resolved_config.effective.fail_on,
        ))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("psready error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_condition_types,
        } => {
            eprint!("{}", format_not_found(&identifier, available_condition_types));
            std::process::exit(1);
        }
    }
}

fn write_bytes_file(path: &camino::Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes_file(path, text.as_bytes())
}

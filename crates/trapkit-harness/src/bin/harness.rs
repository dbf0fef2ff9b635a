//! CLI entrypoint for the trapkit fixture harness.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use trapkit_core::TrapChannel;
use trapkit_harness::runner::DEFAULT_TIMEOUT;
use trapkit_harness::structured_log::{LogEmitter, now_utc};
use trapkit_harness::{
    ConformanceReport, FixtureManifest, FixtureRunner, FixtureSpec, HarnessError,
    VerificationSummary,
};

/// Fixture driver for trapkit.
#[derive(Debug, Parser)]
#[command(name = "trapkit-harness")]
#[command(about = "Run trapkit fixtures and check their exit contract")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelArg {
    Exit,
    Abort,
}

impl From<ChannelArg> for TrapChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Exit => TrapChannel::Exit,
            ChannelArg::Abort => TrapChannel::Abort,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run fixtures sequentially and compare each verdict with its expectation.
    Run {
        /// Fixture executable as PATH, PATH=good or PATH=bad (repeatable).
        #[arg(long = "fixture")]
        fixtures: Vec<String>,
        /// JSON manifest listing fixtures; run before any --fixture entries.
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Force a trap channel on every fixture (default: inherit TRAPKIT_TRAP).
        #[arg(long, value_enum)]
        channel: Option<ChannelArg>,
        /// Kill a fixture still running after this many milliseconds.
        #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
        timeout_ms: u64,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Output report path (markdown); a JSON copy is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            fixtures,
            manifest,
            channel,
            timeout_ms,
            log,
            report,
            timestamp,
        } => {
            let mut specs = Vec::new();
            if let Some(path) = manifest {
                eprintln!("Loading manifest {}", path.display());
                specs.extend(FixtureManifest::from_file(&path)?.fixtures);
            }
            for raw in &fixtures {
                specs.push(FixtureSpec::parse_inline(raw)?);
            }
            if specs.is_empty() {
                return Err(HarnessError::NoFixtures.into());
            }

            let runner = FixtureRunner::new("harness-run", channel.map(TrapChannel::from))
                .with_timeout(Duration::from_millis(timeout_ms));
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, &runner.run_id)?),
                None => None,
            };
            let results = runner.run(&specs, emitter.as_mut())?;

            for r in &results {
                let status = if r.passed { "PASS" } else { "FAIL" };
                eprintln!(
                    "[{status}] {} expected={} got={} ({})",
                    r.fixture,
                    r.expected.as_str(),
                    r.verdict,
                    r.detail
                );
            }

            let report_doc = ConformanceReport {
                title: String::from("trapkit Fixture Report"),
                channel: runner.channel_label().to_string(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Run complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }
            if let Some(path) = log {
                eprintln!("Wrote structured log to {}", path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Fixture verification failed".into());
            }
        }
    }

    Ok(())
}

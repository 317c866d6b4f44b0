//! Command-line interface for test binaries
//!
//! A test binary only needs `fn main() -> ExitCode { test_harness::run_main() }`.

use crate::error::HarnessResult;
use crate::logging;
use crate::registry::{self, TestCase};
use crate::report::TestReport;
use crate::runner::{RunConfig, TestRunner};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code used when the harness itself fails (not a test failure)
pub const HARNESS_ERROR_EXIT: u8 = 2;

/// Report rendering on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Failure details followed by a summary
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Run all registered test cases and report the results
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List registered test cases instead of running them
    #[arg(long)]
    pub list: bool,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a CLI invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Registered cases were listed, nothing ran
    Listed,
    /// Cases ran and produced a report
    Completed(TestReport),
}

impl RunOutcome {
    /// Numeric exit status for this outcome
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Listed => 0,
            RunOutcome::Completed(report) => report.exit_status(),
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Entry point for test binaries: parse arguments, run registered cases,
/// print the report and map the outcome to an exit code.
pub fn run_main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let runner = TestRunner::with_config(RunConfig { quiet_panics: true });
    let cases = registry::registered_cases();
    let stdout = io::stdout();

    match execute(&cli, &runner, &cases, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "harness error");
            eprintln!("Error: {}", e);
            ExitCode::from(HARNESS_ERROR_EXIT)
        }
    }
}

/// Carry out a parsed invocation against `cases`, writing output to `out`
pub fn execute<W: Write>(
    cli: &Cli,
    runner: &TestRunner,
    cases: &[&TestCase],
    out: &mut W,
) -> HarnessResult<RunOutcome> {
    if cli.list {
        write_listing(cases, out)?;
        return Ok(RunOutcome::Listed);
    }

    let report = runner.run_cases(cases);

    match cli.format {
        OutputFormat::Text => writeln!(out, "{}", report.detailed_summary())?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }

    if let Some(path) = &cli.out {
        fs::write(path, report.to_json()?)?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    Ok(RunOutcome::Completed(report))
}

fn write_listing<W: Write>(cases: &[&TestCase], out: &mut W) -> HarnessResult<()> {
    writeln!(out, "All available test cases:")?;
    for case in cases {
        writeln!(out, "  {}", case.name)?;
        if !case.tags.is_empty() {
            writeln!(out, "      {}", case.tags)?;
        }
    }
    writeln!(
        out,
        "{} test {}",
        cases.len(),
        if cases.len() == 1 { "case" } else { "cases" }
    )?;
    Ok(())
}

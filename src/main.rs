// src/main.rs
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use line_triage::{
    app::{self, RunOutcome},
    cli::Args,
    config::RunConfig,
    presentation::{self, RejectedInput},
};
use line_triage_shared_kernel::PresentationError;
use log::{LevelFilter, warn};

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbose))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn execute(config: &RunConfig) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = app::run(config, &mut out).context("failed to report results")?;
    out.flush().context("failed to flush stdout")?;

    presentation::print_file_problems(&mut io::stderr().lock(), &config.rejected_inputs, outcome.failures())
        .context("failed to report file errors")?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match RunConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            if let PresentationError::MissingInputFiles { rejected } = &e {
                for path in rejected {
                    eprintln!("{}", RejectedInput(path));
                }
            }
            eprintln!("{e}. Exiting program.");
            return ExitCode::FAILURE;
        }
    };

    match execute(&config) {
        Ok(outcome) => {
            if outcome.failure_count() > 0 {
                warn!("{} file operation(s) failed", outcome.failure_count());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

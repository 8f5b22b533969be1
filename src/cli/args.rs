// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliReportFormat;

/// Top-level CLI arguments parsed via clap.
///
/// Options and input files may be given in any order.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "line_triage",
    version = crate::VERSION,
    about = "Sort the lines of text files into integers, floats and strings",
    args_override_self = true
)]
pub struct Args {
    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print short statistics (count per category)
    #[arg(short = 's', long = "short", overrides_with = "full")]
    pub short: bool,

    /// Print full statistics (min, max, sum, average; string lengths)
    #[arg(short = 'f', long = "full", overrides_with = "short")]
    pub full: bool,

    /// Directory for the result files (must exist)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Prefix for the result file names
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Statistics report format
    #[arg(long, value_enum, default_value_t = CliReportFormat::Text)]
    pub format: CliReportFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Input files, processed in the order given
    #[arg(value_name = "FILES", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

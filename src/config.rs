// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use line_triage_domain::StatsMode;
use line_triage_infra::filesystem;
use line_triage_ports::{OutputPlan, WriteMode};
use line_triage_shared_kernel::PresentationError;
use log::debug;

use crate::cli::{Args, CliReportFormat};
use crate::presentation::ReportFormat;

/// Validated settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    /// Readable input files, in the order given.
    pub inputs: Vec<PathBuf>,
    /// Inputs dropped because they could not be read.
    #[builder(default)]
    pub rejected_inputs: Vec<PathBuf>,
    #[builder(default)]
    pub output: OutputPlan,
    #[builder(default)]
    pub stats: Option<StatsMode>,
    #[builder(default)]
    pub format: ReportFormat,
}

impl TryFrom<Args> for RunConfig {
    type Error = PresentationError;

    /// Performs the boundary checks: the output directory must exist and at
    /// least one input file must be readable. Unreadable inputs are dropped
    /// with a warning.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let directory = match args.output_dir.filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => {
                filesystem::ensure_directory(&dir).map_err(|err| {
                    debug!("{err}");
                    PresentationError::OutputDirectoryNotFound { path: dir.clone() }
                })?;
                dir
            }
            None => PathBuf::from("."),
        };

        let (inputs, rejected_inputs): (Vec<_>, Vec<_>) =
            args.files.into_iter().partition(|path| filesystem::is_readable_file(path));
        for path in &rejected_inputs {
            debug!("dropping unreadable input {}", path.display());
        }
        if inputs.is_empty() {
            return Err(PresentationError::MissingInputFiles { rejected: rejected_inputs });
        }

        let stats = match (args.short, args.full) {
            (true, _) => Some(StatsMode::Short),
            (_, true) => Some(StatsMode::Full),
            _ => None,
        };
        let mode = if args.append { WriteMode::Append } else { WriteMode::Truncate };

        RunConfigBuilder::default()
            .inputs(inputs)
            .rejected_inputs(rejected_inputs)
            .output(OutputPlan { directory, prefix: args.prefix, mode })
            .stats(stats)
            .format(ReportFormat::from(args.format))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

impl From<CliReportFormat> for ReportFormat {
    fn from(format: CliReportFormat) -> Self {
        match format {
            CliReportFormat::Text => Self::Text,
            CliReportFormat::Json => Self::Json,
        }
    }
}

use clap::ValueEnum;

/// Rendering of the statistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportFormat {
    /// One line per bucket
    #[default]
    Text,
    /// A single JSON document
    Json,
}

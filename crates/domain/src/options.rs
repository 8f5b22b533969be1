// crates/domain/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Depth of the statistics report produced after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsMode {
    /// Count per non-empty bucket.
    Short,
    /// Count plus min/max/sum/average, or length extremities for strings.
    Full,
}

impl FromStr for StatsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" | "s" => Ok(Self::Short),
            "full" | "f" => Ok(Self::Full),
            other => Err(format!("Unknown statistics mode: {other}")),
        }
    }
}

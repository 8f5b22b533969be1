// crates/domain/src/model/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The three buckets a line can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integers,
    Floats,
    Strings,
}

impl Category {
    /// Report and output order.
    pub const ALL: [Self; 3] = [Self::Integers, Self::Floats, Self::Strings];

    /// Label used at the start of every report line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integers => "Integers",
            Self::Floats => "Floats",
            Self::Strings => "Strings",
        }
    }

    /// Output file name before any prefix is applied.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Integers => "integers.txt",
            Self::Floats => "floats.txt",
            Self::Strings => "strings.txt",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

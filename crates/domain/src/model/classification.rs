// crates/domain/src/model/classification.rs
use line_triage_shared_kernel::ItemCount;
use serde::Serialize;

use crate::model::{Bucket, Category};

/// The three buckets produced once every input has been classified.
///
/// Built by [`crate::Classifier::finish`]; there is no way to append to it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationResult {
    integers: Bucket<i64>,
    floats: Bucket<f64>,
    strings: Bucket<String>,
}

impl ClassificationResult {
    pub fn from_buckets(integers: Bucket<i64>, floats: Bucket<f64>, strings: Bucket<String>) -> Self {
        Self { integers, floats, strings }
    }

    pub fn integers(&self) -> &Bucket<i64> {
        &self.integers
    }

    pub fn floats(&self) -> &Bucket<f64> {
        &self.floats
    }

    pub fn strings(&self) -> &Bucket<String> {
        &self.strings
    }

    pub fn count(&self, category: Category) -> ItemCount {
        match category {
            Category::Integers => self.integers.count(),
            Category::Floats => self.floats.count(),
            Category::Strings => self.strings.count(),
        }
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.count(category).is_zero()
    }

    /// Total number of classified (non-skipped) lines.
    pub fn total(&self) -> ItemCount {
        Category::ALL.iter().map(|&c| self.count(c)).sum()
    }

    /// Canonical text of every value in `category`, in classification order.
    ///
    /// Floats use the `Debug` rendering so whole values keep their `.0` and
    /// read back as floats.
    pub fn rendered(&self, category: Category) -> Vec<String> {
        match category {
            Category::Integers => self.integers.iter().map(i64::to_string).collect(),
            Category::Floats => self.floats.iter().map(|v| format!("{v:?}")).collect(),
            Category::Strings => self.strings.to_vec(),
        }
    }
}

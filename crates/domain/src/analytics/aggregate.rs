// crates/domain/src/analytics/aggregate.rs
use crate::{
    analytics::summary::{FloatStats, IntegerStats, StringStats, Summary},
    model::{Category, ClassificationResult},
    options::StatsMode,
};

/// Summarises a finished classification. Empty buckets never produce an entry.
pub struct Aggregator;

impl Aggregator {
    /// Typed summaries in report order (integers, floats, strings).
    pub fn summaries(result: &ClassificationResult, mode: StatsMode) -> Vec<Summary> {
        Category::ALL
            .into_iter()
            .filter(|&category| !result.is_empty(category))
            .filter_map(|category| Self::summarize_bucket(result, category, mode))
            .collect()
    }

    /// Report lines, one per non-empty bucket.
    pub fn summarize(result: &ClassificationResult, mode: StatsMode) -> Vec<String> {
        Self::summaries(result, mode).iter().map(ToString::to_string).collect()
    }

    fn summarize_bucket(result: &ClassificationResult, category: Category, mode: StatsMode) -> Option<Summary> {
        if mode == StatsMode::Short {
            return Some(Summary::Count { category, count: result.count(category) });
        }
        // `from_values` only fails on an empty bucket, which is filtered out above.
        match category {
            Category::Integers => IntegerStats::from_values(result.integers().as_slice()).ok().map(Summary::Integers),
            Category::Floats => FloatStats::from_values(result.floats().as_slice()).ok().map(Summary::Floats),
            Category::Strings => StringStats::from_values(result.strings().as_slice()).ok().map(Summary::Strings),
        }
    }
}

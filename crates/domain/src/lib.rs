//! # Domain
//!
//! Classification of raw text lines into typed buckets and the statistics
//! computed over them. Nothing in this crate performs I/O.
//!
//! - [`classifier`]: per-line type decision and bucket accumulation
//! - [`model`]: categories, buckets and the finished classification
//! - [`analytics`]: short and full summaries over a classification
//! - [`options`]: statistics modes

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classifier;
pub mod model;
pub mod options;

pub use analytics::{Aggregator, FloatStats, IntegerStats, StringStats, Summary};
pub use classifier::{Classified, Classifier, classify};
pub use model::{Bucket, Category, ClassificationResult};
pub use options::StatsMode;

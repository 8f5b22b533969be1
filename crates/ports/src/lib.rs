//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: reading input sources line by line
//! - [`sink`]: persisting a bucket as an output file
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::{BucketSink, OutputPlan, WriteMode};
pub use source::LineSource;

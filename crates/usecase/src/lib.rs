//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the port traits to implement
//! the two phases of a run:
//!
//! - [`orchestrator`]: classify every input source, then write every bucket
//! - [`dto`]: outcomes carried across the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{ClassifyOutput, SourceFailure, WriteFailure, WriteOutput};
pub use orchestrator::{ClassifySources, WriteBuckets};

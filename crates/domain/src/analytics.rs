pub mod aggregate;
pub mod summary;

pub use aggregate::Aggregator;
pub use summary::{FloatStats, IntegerStats, StringStats, Summary};

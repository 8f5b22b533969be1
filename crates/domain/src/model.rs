pub mod bucket;
pub mod category;
pub mod classification;

pub use bucket::Bucket;
pub use category::Category;
pub use classification::ClassificationResult;

//! Per-line type decision and bucket accumulation.
//!
//! A line is trimmed, then tried as an integer, then as a float, and
//! otherwise kept as a string. Parse failures are the normal way a line
//! falls through to the next category; nothing here returns an error.

use crate::model::{Bucket, Category, ClassificationResult};

/// Outcome of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    Integer(i64),
    Float(f64),
    Text(&'a str),
    /// Empty after trimming; contributes to no bucket.
    Skipped,
}

impl Classified<'_> {
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Integer(_) => Some(Category::Integers),
            Self::Float(_) => Some(Category::Floats),
            Self::Text(_) => Some(Category::Strings),
            Self::Skipped => None,
        }
    }
}

/// Classifies a single line. The returned text borrows the trimmed line.
pub fn classify(line: &str) -> Classified<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Classified::Skipped;
    }
    if let Some(value) = parse_integer(trimmed) {
        return Classified::Integer(value);
    }
    if let Some(value) = parse_float(trimmed) {
        return Classified::Float(value);
    }
    Classified::Text(trimmed)
}

/// Base-10 `i64`, optional leading `-` only.
fn parse_integer(text: &str) -> Option<i64> {
    // `i64::from_str` accepts a leading '+', which is not an integer literal here.
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

/// Platform float grammar: decimal, scientific, `inf`, `nan`.
fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Accumulates classified lines into the three buckets.
#[derive(Debug, Default)]
pub struct Classifier {
    integers: Bucket<i64>,
    floats: Bucket<f64>,
    strings: Bucket<String>,
    skipped: usize,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `line` and appends it to its bucket.
    pub fn feed(&mut self, line: &str) -> Option<Category> {
        let classified = classify(line);
        match classified {
            Classified::Integer(value) => self.integers.push(value),
            Classified::Float(value) => self.floats.push(value),
            Classified::Text(text) => self.strings.push(text.to_owned()),
            Classified::Skipped => self.skipped += 1,
        }
        classified.category()
    }

    pub fn feed_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref());
        }
    }

    /// Lines dropped because they were blank.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> ClassificationResult {
        ClassificationResult::from_buckets(self.integers, self.floats, self.strings)
    }
}

// crates/domain/src/model/bucket.rs
use std::{ops::Deref, slice};

use line_triage_shared_kernel::ItemCount;
use serde::Serialize;

/// Append-only sequence of classified values in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bucket<T> {
    values: Vec<T>,
}

impl<T> Bucket<T> {
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    #[inline]
    pub fn count(&self) -> ItemCount {
        ItemCount::new(self.values.len())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Bucket<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl<T> From<Vec<T>> for Bucket<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for Bucket<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a Bucket<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// crates/domain/src/analytics/summary.rs
use std::{cmp::Ordering, fmt};

use line_triage_shared_kernel::{DomainError, DomainResult, ItemCount, TextLength};
use serde::Serialize;

use crate::model::Category;

fn empty_bucket(category: Category) -> DomainError {
    DomainError::EmptyBucket { category: category.label().to_lowercase() }
}

/// Full statistics over a non-empty integer bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegerStats {
    pub count: ItemCount,
    pub min: i64,
    pub max: i64,
    /// Wide enough that no realistic number of `i64` values can wrap it.
    pub sum: i128,
    pub average: f64,
}

impl IntegerStats {
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBucket`] when `values` is empty.
    pub fn from_values(values: &[i64]) -> DomainResult<Self> {
        let (&first, rest) = values.split_first().ok_or_else(|| empty_bucket(Category::Integers))?;
        let (min, max, sum) = rest.iter().fold((first, first, i128::from(first)), |(lo, hi, sum), &v| {
            (lo.min(v), hi.max(v), sum + i128::from(v))
        });
        let count = ItemCount::new(values.len());
        #[allow(clippy::cast_precision_loss)]
        let average = sum as f64 / values.len() as f64;
        Ok(Self { count, min, max, sum, average })
    }
}

/// Full statistics over a non-empty float bucket.
///
/// NaN and infinities flow through ordinary IEEE arithmetic. Min and max use
/// the total order, so a NaN element is reported as the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatStats {
    pub count: ItemCount,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

impl FloatStats {
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBucket`] when `values` is empty.
    pub fn from_values(values: &[f64]) -> DomainResult<Self> {
        let (&first, rest) = values.split_first().ok_or_else(|| empty_bucket(Category::Floats))?;
        let (min, max, sum) = rest.iter().fold((first, first, first), |(lo, hi, sum), &v| {
            let lo = if v.total_cmp(&lo) == Ordering::Less { v } else { lo };
            let hi = if v.total_cmp(&hi) == Ordering::Greater { v } else { hi };
            (lo, hi, sum + v)
        });
        #[allow(clippy::cast_precision_loss)]
        let average = sum / values.len() as f64;
        Ok(Self { count: ItemCount::new(values.len()), min, max, sum, average })
    }
}

/// Full statistics over a non-empty string bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StringStats {
    pub count: ItemCount,
    pub min_length: TextLength,
    pub max_length: TextLength,
}

impl StringStats {
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBucket`] when `values` is empty.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> DomainResult<Self> {
        let mut lengths = values.iter().map(|s| TextLength::of(s.as_ref()));
        let first = lengths.next().ok_or_else(|| empty_bucket(Category::Strings))?;
        let (min_length, max_length) =
            lengths.fold((first, first), |(lo, hi), len| (lo.min(len), hi.max(len)));
        Ok(Self { count: ItemCount::new(values.len()), min_length, max_length })
    }
}

/// One report entry for a non-empty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Summary {
    Count { category: Category, count: ItemCount },
    Integers(IntegerStats),
    Floats(FloatStats),
    Strings(StringStats),
}

impl Summary {
    pub const fn category(&self) -> Category {
        match self {
            Self::Count { category, .. } => *category,
            Self::Integers(_) => Category::Integers,
            Self::Floats(_) => Category::Floats,
            Self::Strings(_) => Category::Strings,
        }
    }

    pub const fn count(&self) -> ItemCount {
        match self {
            Self::Count { count, .. } => *count,
            Self::Integers(s) => s.count,
            Self::Floats(s) => s.count,
            Self::Strings(s) => s.count,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.category().label();
        match self {
            Self::Count { count, .. } => write!(f, "{label}: count={count}"),
            Self::Integers(s) => write!(
                f,
                "{label}: count={}, Min={}, Max={}, Sum={}, Avg={}",
                s.count,
                s.min,
                s.max,
                s.sum,
                TwoDecimals(s.average)
            ),
            Self::Floats(s) => write!(
                f,
                "{label}: count={}, Min={}, Max={}, Sum={}, Avg={}",
                s.count,
                TwoDecimals(s.min),
                TwoDecimals(s.max),
                TwoDecimals(s.sum),
                TwoDecimals(s.average)
            ),
            Self::Strings(s) => write!(
                f,
                "{label}: count={}, Min Length={}, Max Length={}",
                s.count, s.min_length, s.max_length
            ),
        }
    }
}

/// Fixed two-decimal rendering that rounds ties upward in magnitude.
///
/// Rounding works on the shortest decimal form of the value, so `0.125`
/// prints as `0.13` and `2.675` as `2.68`. Non-finite values print as
/// `NaN`, `inf` and `-inf`.
struct TwoDecimals(f64);

impl fmt::Display for TwoDecimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value:.2}");
        }

        let shortest = value.abs().to_string();
        let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
        let mut digits: Vec<u8> = whole
            .bytes()
            .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
            .collect();

        if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == b'9' {
                    *digit = b'0';
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, b'1');
            }
        }

        let (whole, cents) = digits.split_at(digits.len() - 2);
        let sign = if value.is_sign_negative() { "-" } else { "" };
        let whole: String = whole.iter().copied().map(char::from).collect();
        let cents: String = cents.iter().copied().map(char::from).collect();
        write!(f, "{sign}{whole}.{cents}")
    }
}

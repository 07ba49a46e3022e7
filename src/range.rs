//! Value pools and the ranges they are built from

use std::iter::FromIterator;
use std::ops::Deref;

use itertools::Itertools;

use crate::collections::IteratorExt;
use crate::Value;

/// The lowest value of a range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    /// Ranges of the form `0..=n`
    Zero,
    /// Ranges of the form `1..=n`, the values of a puzzle of width `n`
    One,
}

impl Base {
    fn value(self) -> Value {
        match self {
            Base::Zero => 0,
            Base::One => 1,
        }
    }
}

/// Returns every integer from `base` to `n` inclusive, except those in `excluded`.
///
/// Excluded values do not need to be within the range. The result is strictly increasing
/// and is empty if `n` is below `base`.
pub fn range(n: Value, base: Base, excluded: &[Value]) -> Vec<Value> {
    let excluded = excluded.iter().copied().sorted().dedup();
    let values: Vec<_> = (base.value()..=n).left_merge(excluded).collect();
    trace_step!("range {}..={} -> {:?}", base.value(), n, values);
    values
}

/// All the numbers from 1 to `n` except those in `excluded`
pub fn krange(n: Value, excluded: &[Value]) -> Vec<Value> {
    range(n, Base::One, excluded)
}

/// All the numbers from 0 to `n` except those in `excluded`
pub fn zrange(n: Value, excluded: &[Value]) -> Vec<Value> {
    range(n, Base::Zero, excluded)
}

/// The ordered values a cell may take before any arithmetic filtering.
///
/// The values are expected to be strictly increasing. This is not checked outside of debug
/// builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool(Vec<Value>);

impl Pool {
    /// Wraps an explicit list of values
    pub fn new(values: Vec<Value>) -> Self {
        debug_assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "pool values must be strictly increasing: {:?}",
            values
        );
        Pool(values)
    }

    /// The default pool of a puzzle of width `n`
    pub fn width(n: Value) -> Self {
        Pool(krange(n, &[]))
    }

    /// The values of the pool
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Unwraps the values of the pool
    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Pool {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Value> for Pool {
    fn from(n: Value) -> Self {
        Pool::width(n)
    }
}

impl From<Vec<Value>> for Pool {
    fn from(values: Vec<Value>) -> Self {
        Pool::new(values)
    }
}

impl From<&[Value]> for Pool {
    fn from(values: &[Value]) -> Self {
        Pool::new(values.to_vec())
    }
}

impl From<&Pool> for Pool {
    fn from(pool: &Pool) -> Self {
        pool.clone()
    }
}

impl FromIterator<Value> for Pool {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Pool::new(iter.into_iter().collect())
    }
}

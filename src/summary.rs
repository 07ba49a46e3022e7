//! Digests of enumerated candidates

use std::collections::BTreeSet;

use crate::filter::{Aggregate, CageFilter};
use crate::range::Pool;
use crate::shape::{l_shapes, LShape};
use crate::{HashSet, Value};

/// The values that may appear in each part of an L-shaped cage
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LShapeSummary {
    /// Values that may be in the line, in the order of the pool
    pub line_values: Vec<Value>,
    /// Values that may be in the extra cell, ascending
    pub extra_values: Vec<Value>,
}

/// The distinct sums of the candidates, ascending
pub fn sums<T: AsRef<[Value]>>(candidates: impl IntoIterator<Item = T>) -> Vec<Value> {
    aggregates(candidates, Aggregate::Sum)
}

/// The distinct products of the candidates, ascending. Products too large for a `Value` are
/// left out.
pub fn products<T: AsRef<[Value]>>(candidates: impl IntoIterator<Item = T>) -> Vec<Value> {
    aggregates(candidates, Aggregate::Product)
}

fn aggregates<T: AsRef<[Value]>>(
    candidates: impl IntoIterator<Item = T>,
    aggregate: Aggregate,
) -> Vec<Value> {
    candidates
        .into_iter()
        .filter_map(|c| aggregate.apply(c.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The members of `pool` that appear in at least one candidate, in the order of the pool
pub fn possible_values<T: AsRef<[Value]>>(
    pool: &[Value],
    candidates: impl IntoIterator<Item = T>,
) -> Vec<Value> {
    let mut seen = HashSet::default();
    for candidate in candidates {
        seen.extend(candidate.as_ref().iter().copied());
    }
    pool.iter().copied().filter(|v| seen.contains(v)).collect()
}

/// Collapses L-shape candidates into the values possible in the line and in the extra cell.
/// `pool` is the pool the lines were drawn from.
pub fn summarize(pool: &[Value], candidates: impl IntoIterator<Item = LShape>) -> LShapeSummary {
    let mut line_values = HashSet::default();
    let mut extra_values = BTreeSet::new();
    for LShape { line, extra } in candidates {
        line_values.extend(line);
        extra_values.insert(extra);
    }
    let summary = LShapeSummary {
        line_values: pool
            .iter()
            .copied()
            .filter(|v| line_values.contains(v))
            .collect(),
        extra_values: extra_values.into_iter().collect(),
    };
    debug!("l-shape summary {:?}", summary);
    summary
}

/// Enumerates L-shapes with [`l_shapes`] and summarizes them
pub fn l_shape_summary(
    pool: impl Into<Pool>,
    width: usize,
    extra_pool: Option<Pool>,
    no_double: &[Value],
    filter: &CageFilter,
) -> LShapeSummary {
    let pool = pool.into();
    summarize(
        &pool,
        l_shapes(pool.clone(), width, extra_pool, no_double, filter),
    )
}

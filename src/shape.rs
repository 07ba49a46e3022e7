//! Candidate enumeration for the cage shapes
//!
//! Each generator accepts a pool as either an explicit list of values or a puzzle width `n`,
//! which stands for the values `1..=n`. Results are produced lazily and every generator can
//! be restarted by calling it again with the same arguments. A degenerate request, such as a
//! shape wider than its pool, yields nothing rather than failing.

use std::iter;

use crate::collections::combinations;
use crate::filter::CageFilter;
use crate::range::Pool;
use crate::{HashSet, Value};

/// The contents of a 2x2 box
pub type BoxCandidate = [Value; 4];

/// Candidate contents of an L-shaped cage: a line of cells plus one cell off the line
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LShape {
    /// The values of the line part, ascending
    pub line: Vec<Value>,
    /// The value of the cell off the line
    pub extra: Value,
}

impl LShape {
    /// All the values of the shape, the line values followed by the extra value
    pub fn values(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.line.len() + 1);
        values.extend_from_slice(&self.line);
        values.push(self.extra);
        values
    }

    /// Returns true if the extra value also appears in the line
    pub fn is_double(&self) -> bool {
        self.line.contains(&self.extra)
    }
}

/// Lists the possible contents of `width` colinear cells.
///
/// Yields every ascending `width`-sized selection from the pool that passes `filter`.
/// Cells of a line never share a value, so there are no repeats.
pub fn line<'a>(
    pool: impl Into<Pool>,
    width: usize,
    filter: &'a CageFilter,
) -> impl Iterator<Item = Vec<Value>> + 'a {
    let pool = pool.into();
    debug!("line of {} from {:?}, {:?}", width, pool.values(), filter);
    combinations(&pool, width).filter(move |tuple| {
        let passed = filter.test(tuple);
        if passed {
            trace_step!("line passed {:?}", tuple);
        }
        passed
    })
}

/// Lists the possible contents of a line of `width - 1` cells with one extra cell off the
/// line, such as ".:" or "..:" or ".:.".
///
/// The line is drawn from `pool` and the extra cell from `extra_pool`, or from `pool` when
/// `extra_pool` is `None`. The extra cell may repeat a value of the line (a "double") unless
/// that value is in `no_double`. `filter` is applied to all the values of the shape together.
pub fn l_shapes<'a>(
    pool: impl Into<Pool>,
    width: usize,
    extra_pool: Option<Pool>,
    no_double: &[Value],
    filter: &'a CageFilter,
) -> impl Iterator<Item = LShape> + 'a {
    let pool = pool.into();
    let extra_pool = extra_pool.unwrap_or_else(|| pool.clone()).into_values();
    debug!(
        "l-shape of {} from {:?} and {:?}, no doubles {:?}, {:?}",
        width,
        pool.values(),
        extra_pool,
        no_double,
        filter
    );
    let no_double: HashSet<Value> = no_double.iter().copied().collect();
    let lines: Box<dyn Iterator<Item = Vec<Value>>> = match width.checked_sub(1) {
        Some(line_width) => combinations(&pool, line_width),
        None => Box::new(iter::empty()),
    };
    lines
        .flat_map(move |line| {
            let no_double = no_double.clone();
            extra_pool.clone().into_iter().filter_map(move |t| {
                if line.contains(&t) && no_double.contains(&t) {
                    return None;
                }
                let mut values = line.clone();
                values.push(t);
                Some(values)
            })
        })
        .filter(move |values| filter.test(values))
        .filter_map(|mut values| {
            let extra = values.pop()?;
            trace_step!("l-shape passed {:?} + {}", values, extra);
            Some(LShape {
                line: values,
                extra,
            })
        })
}

/// Lists the possible contents of a 2x2 box.
///
/// A box is two short rows and two short columns, so one value may appear twice (on a
/// diagonal) unless it is in `no_double`. No value appears three or more times. Each candidate
/// is sorted ascending, so every multiset of values is produced exactly once.
pub fn boxes<'a>(
    pool: impl Into<Pool>,
    no_double: &[Value],
    filter: &'a CageFilter,
) -> impl Iterator<Item = BoxCandidate> + 'a {
    let pool = pool.into().into_values();
    debug!(
        "box from {:?}, no doubles {:?}, {:?}",
        pool, no_double, filter
    );
    let no_double: HashSet<Value> = no_double.iter().copied().collect();
    let distinct = combinations(&pool, 4).map(|t| [t[0], t[1], t[2], t[3]]);
    let pairs: Vec<_> = combinations(&pool, 2).map(|t| (t[0], t[1])).collect();
    let doubles = pool
        .into_iter()
        .filter(move |d| !no_double.contains(d))
        .flat_map(move |d| {
            pairs
                .clone()
                .into_iter()
                .filter(move |&(x, y)| d != x && d != y)
                .map(move |(x, y)| {
                    if d < x {
                        [d, d, x, y]
                    } else if d < y {
                        [x, d, d, y]
                    } else {
                        [x, y, d, d]
                    }
                })
        });
    distinct.chain(doubles).filter(move |tuple| {
        let passed = filter.test(tuple);
        if passed {
            trace_step!("box passed {:?}", tuple);
        }
        passed
    })
}

#[cfg(test)]
mod tests {
    use crate::filter::{CageFilter, FilterSpec};
    use crate::shape::{boxes, l_shapes, line, LShape};

    #[test]
    fn line_adds_to() {
        let filter = CageFilter::new().adds_to(5);
        let results: Vec<_> = line(vec![1, 2, 3, 4, 5], 2, &filter).collect();
        assert_eq!(vec![vec![1, 4], vec![2, 3]], results);
    }

    #[test]
    fn line_from_width() {
        let filter = CageFilter::new().adds_to(10);
        let results: Vec<_> = line(9, 2, &filter).collect();
        assert_eq!(
            vec![vec![1, 9], vec![2, 8], vec![3, 7], vec![4, 6]],
            results
        );
    }

    #[test]
    fn line_product_overflow() {
        let filter = CageFilter::new().mult_to(1);
        assert_eq!(0, line(21, 21, &filter).count());
        let filter = CageFilter::new().mult_to(FilterSpec::at_most(i64::MAX));
        assert_eq!(0, line(21, 21, &filter).count());
        assert_eq!(1, line(21, 21, &CageFilter::new()).count());
    }

    #[test]
    fn line_too_wide() {
        let filter = CageFilter::new();
        assert_eq!(0, line(3, 4, &filter).count());
    }

    #[test]
    fn line_restartable() {
        let filter = CageFilter::new().mult_to(vec![6, 12]);
        let first: Vec<_> = line(4, 2, &filter).collect();
        let second: Vec<_> = line(4, 2, &filter).collect();
        assert_eq!(vec![vec![2, 3], vec![3, 4]], first);
        assert_eq!(first, second);
    }

    #[test]
    fn l_shape_example() {
        let filter = CageFilter::new().mult_to(72).adds_to(14);
        let results: Vec<_> = l_shapes(9, 3, None, &[], &filter).collect();
        assert_eq!(
            vec![
                LShape {
                    line: vec![2, 6],
                    extra: 6
                },
                LShape {
                    line: vec![3, 8],
                    extra: 3
                },
            ],
            results
        );
    }

    #[test]
    fn l_shape_no_double() {
        let filter = CageFilter::new().mult_to(72).adds_to(14);
        let results: Vec<_> = l_shapes(9, 3, None, &[6], &filter).collect();
        assert_eq!(
            vec![LShape {
                line: vec![3, 8],
                extra: 3
            }],
            results
        );
    }

    #[test]
    fn l_shape_extra_pool() {
        let filter = CageFilter::new();
        let results: Vec<_> = l_shapes(vec![1, 2], 2, Some(vec![5].into()), &[], &filter).collect();
        assert_eq!(
            vec![
                LShape {
                    line: vec![1],
                    extra: 5
                },
                LShape {
                    line: vec![2],
                    extra: 5
                },
            ],
            results
        );
    }

    #[test]
    fn l_shape_degenerate_widths() {
        let filter = CageFilter::new();
        assert_eq!(0, l_shapes(4, 0, None, &[], &filter).count());
        let singles: Vec<_> = l_shapes(2, 1, None, &[], &filter).collect();
        assert_eq!(
            vec![
                LShape {
                    line: vec![],
                    extra: 1
                },
                LShape {
                    line: vec![],
                    extra: 2
                },
            ],
            singles
        );
    }

    #[test]
    fn box_small_pool() {
        let filter = CageFilter::new();
        let results: Vec<_> = boxes(vec![1, 2, 3], &[], &filter).collect();
        assert_eq!(vec![[1, 1, 2, 3], [1, 2, 2, 3], [1, 2, 3, 3]], results);
    }

    #[test]
    fn box_no_double() {
        let filter = CageFilter::new();
        let results: Vec<_> = boxes(vec![1, 2, 3], &[1, 3, 7], &filter).collect();
        assert_eq!(vec![[1, 2, 2, 3]], results);
    }

    #[test]
    fn box_filtered() {
        let filter = CageFilter::new().adds_to(10).mult_to(24);
        let results: Vec<_> = boxes(4, &[], &filter).collect();
        assert_eq!(vec![[1, 2, 3, 4]], results);
    }

    #[test]
    fn box_too_small() {
        let filter = CageFilter::new();
        assert_eq!(0, boxes(vec![1, 2], &[], &filter).count());
    }
}

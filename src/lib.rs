//! Enumerate candidate values for KenKen cages
//!
//! This crate does not solve puzzles. It lists the number sets that could fill a cage of a
//! given shape (a line of cells, an L-shape or a 2x2 box), optionally filtered by the cage's
//! sum and product, so that a human solver can narrow down the possibilities.
//!
//! ```
//! use cagecomb::{l_shapes, CageFilter, LShape};
//!
//! let filter = CageFilter::new().adds_to(14).mult_to(72);
//! let shapes: Vec<_> = l_shapes(9, 3, None, &[], &filter).collect();
//! assert_eq!(
//!     shapes,
//!     vec![
//!         LShape { line: vec![2, 6], extra: 6 },
//!         LShape { line: vec![3, 8], extra: 3 },
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub use crate::factor::prime_factors;
pub use crate::filter::{build_test, Aggregate, CageFilter, FilterSpec, TupleTest};
pub use crate::range::{krange, range, zrange, Base, Pool};
pub use crate::shape::{boxes, l_shapes, line, BoxCandidate, LShape};
pub use crate::summary::{
    l_shape_summary, possible_values, products, sums, summarize, LShapeSummary,
};

#[macro_use]
pub mod diagnostics;
pub mod error;
pub mod parse;

mod collections;
mod factor;
mod filter;
mod range;
mod shape;
mod summary;

/// The value of a single puzzle cell
pub type Value = i64;

pub(crate) type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;

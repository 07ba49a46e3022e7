//! Arithmetic filters over candidate tuples

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A test applied to a whole candidate tuple
pub type TupleTest = Box<dyn Fn(&[Value]) -> bool + Send + Sync>;

/// Reduces a candidate tuple to one number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    /// The sum of the values
    Sum,
    /// The product of the values
    Product,
}

impl Aggregate {
    /// Applies the aggregate to a tuple. The sum of an empty tuple is 0 and the product is 1.
    /// Returns `None` if the result does not fit in a `Value`.
    pub fn apply(self, values: &[Value]) -> Option<Value> {
        match self {
            Aggregate::Sum => values
                .iter()
                .try_fold(0, |acc: Value, &v| acc.checked_add(v)),
            Aggregate::Product => values
                .iter()
                .try_fold(1, |acc: Value, &v| acc.checked_mul(v)),
        }
    }
}

/// The acceptable values for the sum or product of a cage
#[derive(Clone)]
pub enum FilterSpec {
    /// No constraint
    Absent,
    /// Exactly this value
    Literal(Value),
    /// Any one of these values
    Membership(BTreeSet<Value>),
    /// Any value for which the function returns true
    Predicate(Arc<dyn Fn(Value) -> bool + Send + Sync>),
}

impl FilterSpec {
    /// Accepts values for which `f` returns true
    pub fn predicate(f: impl Fn(Value) -> bool + Send + Sync + 'static) -> Self {
        FilterSpec::Predicate(Arc::new(f))
    }

    /// Accepts `x` if `p` is evenly divisible by `x`.
    ///
    /// Useful with `mult_to` for part of a larger cage: if the whole cage has a product of 150,
    /// any row inside of it has a product that divides 150.
    pub fn divides(p: Value) -> Self {
        Self::predicate(move |x| x != 0 && p % x == 0)
    }

    /// Accepts `x` if `x <= p`.
    ///
    /// Useful with `adds_to` for part of a larger cage: if a cage of two rows of two cells plus
    /// one extra cell adds up to 40, and one row plus the extra cell is at least 4, the
    /// remaining row adds up to at most 36.
    pub fn at_most(p: Value) -> Self {
        Self::predicate(move |x| x <= p)
    }

    /// Returns true if the spec accepts an aggregate value
    pub fn accepts(&self, value: Value) -> bool {
        match self {
            FilterSpec::Absent => true,
            FilterSpec::Literal(v) => value == *v,
            FilterSpec::Membership(set) => set.contains(&value),
            FilterSpec::Predicate(f) => f(value),
        }
    }

    /// Returns true if this spec places no constraint
    pub fn is_absent(&self) -> bool {
        matches!(self, FilterSpec::Absent)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::Absent
    }
}

impl fmt::Debug for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Absent => write!(f, "Absent"),
            FilterSpec::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            FilterSpec::Membership(set) => f.debug_tuple("Membership").field(set).finish(),
            FilterSpec::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

impl From<Value> for FilterSpec {
    fn from(value: Value) -> Self {
        FilterSpec::Literal(value)
    }
}

impl From<Option<Value>> for FilterSpec {
    fn from(value: Option<Value>) -> Self {
        value.map_or(FilterSpec::Absent, FilterSpec::Literal)
    }
}

impl From<Vec<Value>> for FilterSpec {
    fn from(values: Vec<Value>) -> Self {
        FilterSpec::Membership(values.into_iter().collect())
    }
}

impl From<&[Value]> for FilterSpec {
    fn from(values: &[Value]) -> Self {
        FilterSpec::Membership(values.iter().copied().collect())
    }
}

impl From<BTreeSet<Value>> for FilterSpec {
    fn from(values: BTreeSet<Value>) -> Self {
        FilterSpec::Membership(values)
    }
}

/// Resolves a spec into a test of the aggregate of a tuple.
/// A tuple whose aggregate overflows only passes an absent spec.
pub fn build_test(spec: FilterSpec, aggregate: Aggregate) -> TupleTest {
    match spec {
        FilterSpec::Absent => Box::new(|_: &[Value]| true),
        FilterSpec::Literal(v) => Box::new(move |t: &[Value]| aggregate.apply(t) == Some(v)),
        FilterSpec::Membership(set) => Box::new(move |t: &[Value]| {
            aggregate.apply(t).map_or(false, |a| set.contains(&a))
        }),
        FilterSpec::Predicate(f) => {
            Box::new(move |t: &[Value]| aggregate.apply(t).map_or(false, |a| f(a)))
        }
    }
}

/// The sum and product constraints of a cage. A tuple passes if it satisfies both.
pub struct CageFilter {
    adds_to: FilterSpec,
    mult_to: FilterSpec,
    sum_test: TupleTest,
    product_test: TupleTest,
}

impl CageFilter {
    /// A filter that accepts everything
    pub fn new() -> Self {
        Self {
            adds_to: FilterSpec::Absent,
            mult_to: FilterSpec::Absent,
            sum_test: build_test(FilterSpec::Absent, Aggregate::Sum),
            product_test: build_test(FilterSpec::Absent, Aggregate::Product),
        }
    }

    /// Constrain the sum of the tuple
    pub fn adds_to(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.adds_to = spec.into();
        self.sum_test = build_test(self.adds_to.clone(), Aggregate::Sum);
        self
    }

    /// Constrain the product of the tuple
    pub fn mult_to(mut self, spec: impl Into<FilterSpec>) -> Self {
        self.mult_to = spec.into();
        self.product_test = build_test(self.mult_to.clone(), Aggregate::Product);
        self
    }

    /// Returns true if the tuple satisfies both constraints
    pub fn test(&self, tuple: &[Value]) -> bool {
        (self.sum_test)(tuple) && (self.product_test)(tuple)
    }

    /// Returns true if neither the sum nor the product is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.adds_to.is_absent() && self.mult_to.is_absent()
    }
}

impl Default for CageFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CageFilter")
            .field("adds_to", &self.adds_to)
            .field("mult_to", &self.mult_to)
            .finish()
    }
}

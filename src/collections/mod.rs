pub(crate) mod iterator_ext;

pub(crate) use self::iterator_ext::IteratorExt;

use std::iter;

use itertools::Itertools;

use crate::Value;

/// All `k`-sized selections from `pool`, in lexicographic order of positions.
/// A zero-sized selection is the single empty selection and `k` larger than the pool gives none.
pub(crate) fn combinations(pool: &[Value], k: usize) -> Box<dyn Iterator<Item = Vec<Value>>> {
    if k == 0 {
        Box::new(iter::once(Vec::new()))
    } else if k > pool.len() {
        Box::new(iter::empty())
    } else {
        Box::new(pool.to_vec().into_iter().combinations(k))
    }
}

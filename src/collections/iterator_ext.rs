use std::cmp::Ordering;

pub(crate) trait IteratorExt: Iterator {
    /// Merge another iterator and only output values that are in the original iterator and not in the other iterator.
    /// Assumes both iterators are sorted. Values of the other iterator that never appear in the
    /// original iterator are skipped over.
    /// Analogous to "LEFT JOIN" in SQL.
    fn left_merge<T>(self, other: T) -> LeftMerge<Self, T::IntoIter, Self::Item>
    where
        Self: Iterator + Sized,
        T: IntoIterator<Item = Self::Item>,
    {
        let mut right = other.into_iter();
        let r = right.next();
        LeftMerge {
            left: self,
            right,
            r_next: r,
        }
    }
}

pub(crate) struct LeftMerge<L, R, T> {
    left: L,
    right: R,
    r_next: Option<T>,
}

impl<L, R, T> Iterator for LeftMerge<L, R, T>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let l = self.left.next()?;
            loop {
                match self.r_next.as_ref().map(|r| r.cmp(&l)) {
                    Some(Ordering::Less) => self.r_next = self.right.next(),
                    Some(Ordering::Equal) => break,
                    Some(Ordering::Greater) | None => return Some(l),
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l_min, l_max) = self.left.size_hint();
        let (_, mut r_max) = self.right.size_hint();
        if self.r_next.is_some() {
            r_max = r_max.map(|v| v.saturating_add(1));
        };
        let min = r_max.map_or(0, |r_max| l_min.saturating_sub(r_max));
        (min, l_max)
    }
}

impl<T: Iterator> IteratorExt for T {}

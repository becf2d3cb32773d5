//! Run detection: maximal stretches where each value is the successor of the previous.

use std::iter::Fuse;

use mg_core::{GroupValues, Steppable};

/// A maximal run of consecutive values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<T> {
    pub first: T,
    pub last: T,
    pub len: usize,
}

impl<T: Steppable> Run<T> {
    pub fn single(value: T) -> Self {
        Self { first: value.clone(), last: value, len: 1 }
    }

    fn push(&mut self, value: T) {
        self.last = value;
        self.len += 1;
    }

    /// The run minus its opening element, or `None` if nothing is left.
    ///
    /// Applied to the leading run of every grouping. The second element of a
    /// run is always the successor of the first, so no buffer is needed.
    pub fn without_first(self) -> Option<Self> {
        if self.len < 2 {
            return None;
        }
        let first = self.first.successor()?;
        Some(Self { first, last: self.last, len: self.len - 1 })
    }

    /// Iterate the run's members in order.
    pub fn values(&self) -> GroupValues<T> {
        GroupValues::between(self.first.clone(), self.last.clone())
    }
}

/// Lazily splits an ordered sequence into maximal runs.
pub struct Runs<I: Iterator> {
    iter: Fuse<I>,
    pending: Option<I::Item>,
}

impl<I: Iterator> Runs<I> {
    pub fn new(iter: I) -> Self {
        Self { iter: iter.fuse(), pending: None }
    }
}

impl<I> Iterator for Runs<I>
where
    I: Iterator,
    I::Item: Steppable,
{
    type Item = Run<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pending.take().or_else(|| self.iter.next())?;
        let mut run = Run::single(start);

        for curr in self.iter.by_ref() {
            if run.last.is_followed_by(&curr) {
                run.push(curr);
            } else {
                // Run broken; `curr` opens the next one.
                self.pending = Some(curr);
                break;
            }
        }
        Some(run)
    }
}

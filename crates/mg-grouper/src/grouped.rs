//! Lazy grouping: runs become ranges or singles, minus the leading element.

use mg_core::{Group, GroupValues, GrouperConfig, Result, Steppable};

use crate::runs::Runs;

/// Iterator adapter yielding [`Group`]s for an ordered sequence.
///
/// Runs at least `min_run_size` long are emitted as one `Group::Range`; shorter
/// runs are emitted value by value as `Group::Single`.
///
/// The first input element never appears in the output. The leading run is
/// grouped by its full length and then loses its opening element: a leading
/// range `1..5` is emitted as `2..5`, even if the shortened range is now below
/// `min_run_size`. The values covered by the output are therefore exactly the
/// input minus its first element.
pub struct Grouped<I: Iterator> {
    runs: Runs<I>,
    min_run_size: usize,
    leading_dropped: bool,
    singles: Option<GroupValues<I::Item>>,
}

impl<I: Iterator> Grouped<I> {
    /// Callers are expected to have validated `min_run_size`.
    pub(crate) fn new(iter: I, min_run_size: usize) -> Self {
        Self {
            runs: Runs::new(iter),
            min_run_size,
            leading_dropped: false,
            singles: None,
        }
    }

    pub fn min_run_size(&self) -> usize {
        self.min_run_size
    }
}

impl<I> Iterator for Grouped<I>
where
    I: Iterator,
    I::Item: Steppable,
{
    type Item = Group<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(values) = self.singles.as_mut() {
                if let Some(value) = values.next() {
                    return Some(Group::Single(value));
                }
                self.singles = None;
            }

            let mut run = self.runs.next()?;
            // Decided on the full run, before the leading element is dropped.
            let collapse = run.len >= self.min_run_size;
            if !self.leading_dropped {
                self.leading_dropped = true;
                match run.without_first() {
                    Some(rest) => run = rest,
                    None => continue,
                }
            }

            if collapse {
                return Some(Group::Range { first: run.first, last: run.last });
            }
            self.singles = Some(run.values());
        }
    }
}

/// Group an ordered sequence of one value kind.
///
/// Only `InvalidArgument` can be returned: the element type fixes the kind.
pub fn group_monotonic<I>(values: I, min_run_size: usize) -> Result<Grouped<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Steppable,
{
    GrouperConfig::new(min_run_size)?;
    Ok(Grouped::new(values.into_iter(), min_run_size))
}

/// `.group_monotonic(n)` on any iterator of steppable values.
pub trait GroupMonotonic: Iterator + Sized {
    fn group_monotonic(self, min_run_size: usize) -> Result<Grouped<Self>>
    where
        Self::Item: Steppable,
    {
        group_monotonic(self, min_run_size)
    }
}

impl<I: Iterator> GroupMonotonic for I {}

/// `.group_monotonic(n)` on slices, collecting the groups.
pub trait GroupMonotonicSlice<T> {
    fn group_monotonic(&self, min_run_size: usize) -> Result<Vec<Group<T>>>;
}

impl<T: Steppable> GroupMonotonicSlice<T> for [T] {
    fn group_monotonic(&self, min_run_size: usize) -> Result<Vec<Group<T>>> {
        Ok(group_monotonic(self.iter().cloned(), min_run_size)?.collect())
    }
}

/// Re-expand groups into the values they cover, in order.
pub fn expand<T, G>(groups: G) -> impl Iterator<Item = T>
where
    T: Steppable,
    G: IntoIterator<Item = Group<T>>,
{
    groups.into_iter().flat_map(|group| group.values())
}

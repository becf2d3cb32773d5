//! Output elements: a bare value or a closed range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Steppable;

/// One element of a grouped sequence.
///
/// `Range` covers every value from `first` to `last` inclusive and is only
/// produced for runs at least `min_run_size` long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group<T> {
    Single(T),
    Range { first: T, last: T },
}

impl<T> Group<T> {
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    pub fn first(&self) -> &T {
        match self {
            Self::Single(v) => v,
            Self::Range { first, .. } => first,
        }
    }

    pub fn last(&self) -> &T {
        match self {
            Self::Single(v) => v,
            Self::Range { last, .. } => last,
        }
    }

    /// Convert the covered values into another representation.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Group<U> {
        match self {
            Self::Single(v) => Group::Single(f(v)),
            Self::Range { first, last } => Group::Range { first: f(first), last: f(last) },
        }
    }
}

impl<T: Steppable> Group<T> {
    /// Number of values covered.
    pub fn len(&self) -> usize {
        self.values().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the covered values in order.
    pub fn values(&self) -> GroupValues<T> {
        let (next, last) = match self {
            Self::Single(v) => (v.clone(), v.clone()),
            Self::Range { first, last } => (first.clone(), last.clone()),
        };
        GroupValues::between(next, last)
    }
}

/// Iterator over the values a [`Group`] covers.
#[derive(Debug, Clone)]
pub struct GroupValues<T> {
    next: Option<T>,
    last: T,
}

impl<T> GroupValues<T> {
    /// Values from `first` to `last` inclusive, stepping by successor.
    pub fn between(first: T, last: T) -> Self {
        Self { next: Some(first), last }
    }
}

impl<T: Steppable> Iterator for GroupValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        if current < self.last {
            self.next = current.successor();
        }
        Some(current)
    }
}

impl<T: fmt::Display> fmt::Display for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Range { first, last } => write!(f, "{first}..{last}"),
        }
    }
}

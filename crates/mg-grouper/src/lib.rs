//! Monotonic grouper: collapses runs of consecutive values into ranges.
//!
//! Runs at least `min_run_size` long (default 3) become `Group::Range`; shorter
//! runs stay as individual `Group::Single` values. The first input element is
//! never part of the output: the leading group loses its opening element after
//! grouping, e.g. `[1, 2, 3, 4, 5, 10, 11, 12]` groups to `[2..5, 10..12]` and
//! `[1, 2, 3, 5]` groups to `[2..3, 5]`.
//!
//! Supported kinds are `i64`, `chrono::NaiveDate` and `char`.

pub mod compact;
pub mod grouped;
pub mod runs;

pub use compact::{check_kinds, compact, compact_with, CompactionResult, RangeCompactor};
pub use grouped::{expand, group_monotonic, GroupMonotonic, GroupMonotonicSlice, Grouped};
pub use mg_core::{Group, GrouperConfig, GrouperError, Result, Steppable, Value, ValueKind};
pub use runs::{Run, Runs};

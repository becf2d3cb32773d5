//! RangeCompactor: the dynamic entry point over mixed-kind host values.

use mg_core::{parse_sequence, Group, GrouperConfig, GrouperError, Result, Steppable, Value, ValueKind};

use crate::grouped::Grouped;

/// Compaction result with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactionResult {
    pub groups: Vec<Group<Value>>,
    pub kind: Option<ValueKind>,
    pub input_len: usize,
    pub covered_len: usize,
    pub range_count: usize,
    pub single_count: usize,
}

impl CompactionResult {
    /// Output elements per input element. 1.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 1.0;
        }
        self.groups.len() as f64 / self.input_len as f64
    }
}

/// Collapses runs of consecutive values into ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCompactor {
    pub config: GrouperConfig,
}

impl RangeCompactor {
    pub fn new(config: GrouperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_min_run_size(min_run_size: usize) -> Result<Self> {
        Self::new(GrouperConfig::new(min_run_size)?)
    }

    /// Compact a homogeneous sequence.
    ///
    /// Fails with `TypeMismatch` if any element differs in kind from the first;
    /// nothing is returned in that case.
    pub fn compact(&self, values: &[Value]) -> Result<Vec<Group<Value>>> {
        self.config.validate()?;
        check_kinds(values)?;
        let groups: Vec<_> = Grouped::new(values.iter().copied(), self.config.min_run_size).collect();
        tracing::trace!(
            input_len = values.len(),
            groups = groups.len(),
            min_run_size = self.config.min_run_size,
            "compacted sequence"
        );
        Ok(groups)
    }

    /// Compact and report statistics.
    pub fn compact_detailed(&self, values: &[Value]) -> Result<CompactionResult> {
        let groups = self.compact(values)?;
        let kind = values.first().map(Value::kind);
        let range_count = groups.iter().filter(|g| g.is_range()).count();
        let covered_len = groups.iter().map(Group::len).sum();
        Ok(CompactionResult {
            kind,
            input_len: values.len(),
            covered_len,
            range_count,
            single_count: groups.len() - range_count,
            groups,
        })
    }

    /// Decode a JSON array, compact it, and encode the groups as JSON.
    pub fn compact_json(&self, input: &str) -> Result<String> {
        let items: Vec<serde_json::Value> = serde_json::from_str(input)?;
        let values = parse_sequence(&items)?;
        let groups = self.compact(&values)?;
        Ok(serde_json::to_string(&groups)?)
    }
}

/// Compact `values` with the given threshold.
pub fn compact(values: &[Value], min_run_size: usize) -> Result<Vec<Group<Value>>> {
    RangeCompactor::with_min_run_size(min_run_size)?.compact(values)
}

/// Compact `values` using `config`.
pub fn compact_with(values: &[Value], config: &GrouperConfig) -> Result<Vec<Group<Value>>> {
    RangeCompactor::new(*config)?.compact(values)
}

/// Check every element has the first element's kind.
///
/// Returns that kind, or `None` for an empty sequence.
pub fn check_kinds(values: &[Value]) -> Result<Option<ValueKind>> {
    let Some(first) = values.first() else {
        return Ok(None);
    };
    let expected = first.kind();
    let mismatch = values
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, v)| v.kind() != expected);

    match mismatch {
        Some((index, value)) => {
            tracing::debug!(index, %value, %expected, "mixed value kinds");
            Err(GrouperError::TypeMismatch { index, value: value.to_string(), expected })
        }
        None => Ok(Some(expected)),
    }
}

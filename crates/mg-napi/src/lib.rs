use mg_core::{Group, GrouperConfig, GrouperError};
use mg_grouper::{GroupMonotonicSlice, RangeCompactor};
use napi_derive::napi;

#[napi]
pub fn ping() -> String {
    format!("monotonic-grouper v{}", env!("CARGO_PKG_VERSION"))
}

fn config(min_run_size: Option<u32>) -> GrouperConfig {
    match min_run_size {
        Some(n) => GrouperConfig::default().with_min_run_size(n as usize),
        None => GrouperConfig::default(),
    }
}

// Error messages lead with the variant code so JS callers can branch on it.
fn to_napi_error(err: GrouperError) -> napi::Error {
    napi::Error::new(napi::Status::InvalidArg, format!("{}: {}", err.code(), err))
}

fn run_json(values_json: &str, min_run_size: Option<u32>) -> mg_core::Result<String> {
    let compactor = RangeCompactor::new(config(min_run_size))?;
    compactor.compact_json(values_json)
}

// ========== Grouping ==========

/// Group a JSON array of integers, `YYYY-MM-DD` dates or one-character strings.
#[napi]
pub fn group_monotonic(values_json: String, min_run_size: Option<u32>) -> napi::Result<String> {
    run_json(&values_json, min_run_size).map_err(to_napi_error)
}

#[napi(object)]
pub struct IntegerGroup {
    pub first: i64,
    pub last: i64,
    pub is_range: bool,
}

impl From<Group<i64>> for IntegerGroup {
    fn from(group: Group<i64>) -> Self {
        Self { first: *group.first(), last: *group.last(), is_range: group.is_range() }
    }
}

/// Integer fast path: no JSON round trip.
#[napi]
pub fn group_monotonic_integers(values: Vec<i64>, min_run_size: Option<u32>) -> napi::Result<Vec<IntegerGroup>> {
    let groups = values
        .group_monotonic(config(min_run_size).min_run_size)
        .map_err(to_napi_error)?;
    Ok(groups.into_iter().map(IntegerGroup::from).collect())
}

#[napi(object)]
pub struct CompactionInfo {
    pub groups_json: String,
    pub input_len: u32,
    pub covered_len: u32,
    pub range_count: u32,
    pub single_count: u32,
    pub ratio: f64,
}

#[napi]
pub fn group_monotonic_detailed(values_json: String, min_run_size: Option<u32>) -> napi::Result<CompactionInfo> {
    detailed(&values_json, min_run_size).map_err(|err| match err.downcast::<GrouperError>() {
        Ok(err) => to_napi_error(err),
        Err(other) => napi::Error::from_reason(other.to_string()),
    })
}

fn detailed(values_json: &str, min_run_size: Option<u32>) -> anyhow::Result<CompactionInfo> {
    let compactor = RangeCompactor::new(config(min_run_size))?;
    let items: Vec<serde_json::Value> = serde_json::from_str(values_json).map_err(GrouperError::from)?;
    let values = mg_core::parse_sequence(&items)?;
    let r = compactor.compact_detailed(&values)?;
    Ok(CompactionInfo {
        groups_json: serde_json::to_string(&r.groups)?,
        input_len: r.input_len as u32,
        covered_len: r.covered_len as u32,
        range_count: r.range_count as u32,
        single_count: r.single_count as u32,
        ratio: r.ratio(),
    })
}

//! Steppable values: the three kinds a run can be built from.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GrouperError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of a steppable value. Fixed for a whole input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Date,
    Character,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Date => "date",
            Self::Character => "character",
        };
        f.write_str(name)
    }
}

/// A totally ordered value with a well-defined next value.
pub trait Steppable: Clone + Ord {
    /// The value exactly one step after `self`, or `None` at the end of the domain.
    fn successor(&self) -> Option<Self>;

    fn kind(&self) -> ValueKind;

    /// Whether `next` is exactly one step after `self`.
    fn is_followed_by(&self, next: &Self) -> bool {
        self.successor().as_ref() == Some(next)
    }
}

impl Steppable for i64 {
    fn successor(&self) -> Option<Self> {
        self.checked_add(1)
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Integer
    }

    fn is_followed_by(&self, next: &Self) -> bool {
        self.checked_add(1) == Some(*next)
    }
}

impl Steppable for NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Date
    }
}

impl Steppable for char {
    // Code-point order; the surrogate block and the end of Unicode have no successor.
    fn successor(&self) -> Option<Self> {
        char::from_u32(u32::from(*self) + 1)
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Character
    }
}

/// A value of any supported kind.
///
/// Values of different kinds order by kind first. The grouper never compares
/// across kinds; the ordering only exists so `Value` is `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Date(NaiveDate),
    Character(char),
}

impl Value {
    /// Decode a host value, detecting its kind.
    ///
    /// Integers map to `Integer`, one-character strings to `Character` and
    /// `YYYY-MM-DD` strings to `Date`.
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Integer),
            serde_json::Value::String(s) => single_char(s)
                .map(Self::Character)
                .or_else(|| parse_date(s).map(Self::Date)),
            _ => None,
        }
    }

    /// Decode a host value as a specific kind.
    pub fn from_json_as(kind: ValueKind, json: &serde_json::Value) -> Option<Self> {
        match kind {
            ValueKind::Integer => json.as_i64().map(Self::Integer),
            ValueKind::Date => json.as_str().and_then(parse_date).map(Self::Date),
            ValueKind::Character => json.as_str().and_then(single_char).map(Self::Character),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Character(v) => Some(*v),
            _ => None,
        }
    }
}

impl Steppable for Value {
    fn successor(&self) -> Option<Self> {
        match self {
            Self::Integer(v) => v.successor().map(Self::Integer),
            Self::Date(v) => v.successor().map(Self::Date),
            Self::Character(v) => v.successor().map(Self::Character),
        }
    }

    fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Date(_) => ValueKind::Date,
            Self::Character(_) => ValueKind::Character,
        }
    }

    fn is_followed_by(&self, next: &Self) -> bool {
        match (self, next) {
            (Self::Integer(a), Self::Integer(b)) => a.is_followed_by(b),
            (Self::Date(a), Self::Date(b)) => a.is_followed_by(b),
            (Self::Character(a), Self::Character(b)) => a.is_followed_by(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Self::Character(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Decode a host array into homogeneous values.
///
/// The first element decides the kind. Fails with `UnsupportedType` when the
/// first element is not a supported kind, and with `TypeMismatch` on the first
/// later element that does not decode as that kind.
pub fn parse_sequence(items: &[serde_json::Value]) -> Result<Vec<Value>> {
    let Some((head, tail)) = items.split_first() else {
        return Ok(Vec::new());
    };
    let first = Value::from_json(head)
        .ok_or_else(|| GrouperError::UnsupportedType { value: head.to_string() })?;
    let kind = first.kind();

    let mut values = Vec::with_capacity(items.len());
    values.push(first);
    for (offset, item) in tail.iter().enumerate() {
        let value = Value::from_json_as(kind, item).ok_or_else(|| GrouperError::TypeMismatch {
            index: offset + 1,
            value: item.to_string(),
            expected: kind,
        })?;
        values.push(value);
    }
    Ok(values)
}

pub mod config;
pub mod error;
pub mod group;
pub mod value;

pub use config::{GrouperConfig, DEFAULT_MIN_RUN_SIZE};
pub use error::{GrouperError, Result};
pub use group::{Group, GroupValues};
pub use value::{parse_sequence, Steppable, Value, ValueKind};

use serde::{Deserialize, Serialize};

use crate::error::{GrouperError, Result};

/// Minimum run length collapsed into a range when the caller does not say.
pub const DEFAULT_MIN_RUN_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrouperConfig {
    pub min_run_size: usize,
}

impl GrouperConfig {
    pub fn new(min_run_size: usize) -> Result<Self> {
        let config = Self { min_run_size };
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_run_size(mut self, min_run_size: usize) -> Self {
        self.min_run_size = min_run_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_run_size < 1 {
            tracing::debug!(min_run_size = self.min_run_size, "rejecting grouper config");
            return Err(GrouperError::InvalidArgument { min_run_size: self.min_run_size });
        }
        Ok(())
    }
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self { min_run_size: DEFAULT_MIN_RUN_SIZE }
    }
}

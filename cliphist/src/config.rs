use crate::error::{HistoryError, HistoryResult};
use serde::{Deserialize, Serialize};

/// Smallest accepted history size
pub const HISTORY_MIN: usize = 2;

/// Largest accepted history size
pub const HISTORY_MAX: usize = 1024;

/// History size used when nothing else is configured
pub const HISTORY_DEFAULT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of retained entries, fixed for the store's lifetime
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: HISTORY_DEFAULT,
        }
    }
}

impl HistoryConfig {
    pub fn with_capacity(capacity: usize) -> HistoryResult<Self> {
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HistoryResult<()> {
        if (HISTORY_MIN..=HISTORY_MAX).contains(&self.capacity) {
            Ok(())
        } else {
            Err(HistoryError::invalid_capacity(self.capacity))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(HistoryConfig::with_capacity(HISTORY_MIN).is_ok());
        assert!(HistoryConfig::with_capacity(HISTORY_MAX).is_ok());
        assert!(HistoryConfig::with_capacity(HISTORY_MIN - 1).is_err());
        assert!(HistoryConfig::with_capacity(HISTORY_MAX + 1).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let config = HistoryConfig::default();
        assert_eq!(config.capacity, 64);
        assert!(config.validate().is_ok());
    }
}

//! Error handling for the history store

use crate::store::EntryHandle;
use thiserror::Error;

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Store-level errors. All of them are handled locally by the caller; none is
/// allowed to take the process down once the store exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("History entry not found: {0}")]
    NotFound(EntryHandle),

    #[error("Invalid history size `{value}' (>= {min} && <= {max})")]
    InvalidCapacity { value: usize, min: usize, max: usize },

    #[error("Refusing to store empty content")]
    EmptyContent,

    #[error("Content already present in history ({len} bytes)")]
    DuplicateEntry { len: usize },
}

impl HistoryError {
    /// Errors that leave the store untouched and can be ignored by callers
    #[inline(always)]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HistoryError::NotFound(_)
                | HistoryError::EmptyContent
                | HistoryError::DuplicateEntry { .. }
        )
    }

    /// Create a capacity error against the fixed bounds
    #[inline]
    pub fn invalid_capacity(value: usize) -> Self {
        Self::InvalidCapacity {
            value,
            min: crate::config::HISTORY_MIN,
            max: crate::config::HISTORY_MAX,
        }
    }

    /// Create a duplicate error without copying the content
    #[inline]
    pub fn duplicate_entry(content: &str) -> Self {
        Self::DuplicateEntry { len: content.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = HistoryError::invalid_capacity(1);
        assert_eq!(err.to_string(), "Invalid history size `1' (>= 2 && <= 1024)");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_duplicate_is_recoverable() {
        let err = HistoryError::duplicate_entry("abc");
        assert_eq!(err, HistoryError::DuplicateEntry { len: 3 });
        assert!(err.is_recoverable());
    }
}

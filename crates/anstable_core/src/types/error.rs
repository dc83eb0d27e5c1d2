//! Error types for table generation and validation.

use thiserror::Error;

/// Errors raised while building or validating slot tables.
///
/// All errors are detected synchronously and returned to the immediate
/// caller. A failed call never yields a partial table or batch.
///
/// # Examples
/// ```
/// use anstable_core::types::TableError;
///
/// let err = TableError::InvalidParameter { name: "precision", value: 0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter: precision must be at least 1, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A size parameter is below its minimum of 1.
    #[error("Invalid parameter: {name} must be at least 1, got {value}")]
    InvalidParameter {
        /// Parameter name (`alphabet_size` or `precision`)
        name: &'static str,
        /// The rejected value
        value: usize,
    },

    /// The Random Source broke its contract by returning a value outside
    /// the requested inclusive range.
    #[error("Random source returned {value} outside requested range [{low}, {high}]")]
    DrawOutOfRange {
        /// Requested lower bound
        low: u64,
        /// Requested upper bound
        high: u64,
        /// Value actually returned
        value: u64,
    },

    /// A table supplied from outside the builder is structurally invalid.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl TableError {
    /// Returns `true` for [`TableError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, TableError::InvalidParameter { .. })
    }
}

/// Checks the size preconditions shared by every builder operation.
pub(crate) fn check_sizes(alphabet_size: usize, precision: usize) -> Result<(), TableError> {
    if alphabet_size < 1 {
        return Err(TableError::InvalidParameter {
            name: "alphabet_size",
            value: alphabet_size,
        });
    }
    if precision < 1 {
        return Err(TableError::InvalidParameter {
            name: "precision",
            value: precision,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sizes() {
        assert!(check_sizes(1, 1).is_ok());
        assert!(check_sizes(256, 4096).is_ok());

        assert_eq!(
            check_sizes(0, 8),
            Err(TableError::InvalidParameter {
                name: "alphabet_size",
                value: 0
            })
        );
        assert_eq!(
            check_sizes(8, 0),
            Err(TableError::InvalidParameter {
                name: "precision",
                value: 0
            })
        );
    }

    #[test]
    fn test_alphabet_checked_first() {
        let err = check_sizes(0, 0).unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidParameter {
                name: "alphabet_size",
                value: 0
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = TableError::DrawOutOfRange {
            low: 0,
            high: 4,
            value: 9,
        };
        assert_eq!(
            err.to_string(),
            "Random source returned 9 outside requested range [0, 4]"
        );

        let err = TableError::InvariantViolation("slot 0 holds symbol 1".to_string());
        assert!(err.to_string().starts_with("Invariant violation"));
        assert!(!err.is_invalid_parameter());
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for argument validation at the crate boundary.
//!
//! Only the entry points that accept signed integers can fail. Reads against
//! the cache outside its built range are not errors: they resolve to defaults.

/// Result type for fallible boundary operations.
pub type Result<T> = std::result::Result<T, RingsError>;

/// Errors raised when a caller hands in an unusable argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingsError {
    /// A tier, max tier, sieve limit or buffer index was negative.
    #[error("invalid argument `{name}`: {value} (must be non-negative)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// A buffer index lies past the fixed length of the buffer.
    #[error("index {index} out of bounds for buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl RingsError {
    /// Convert a signed argument into `usize`, rejecting negative values.
    pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<usize> {
        usize::try_from(value).map_err(|_| RingsError::InvalidArgument { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(RingsError::non_negative("limit", 0), Ok(0));
        assert_eq!(RingsError::non_negative("limit", 42), Ok(42));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = RingsError::non_negative("max_tier", -3).unwrap_err();
        assert_eq!(
            err,
            RingsError::InvalidArgument {
                name: "max_tier",
                value: -3
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid argument `max_tier`: -3 (must be non-negative)"
        );
    }

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = RingsError::IndexOutOfBounds { index: 60, len: 60 };
        assert_eq!(
            err.to_string(),
            "index 60 out of bounds for buffer of length 60"
        );
    }
}

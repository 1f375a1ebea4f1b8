//! Error types for the standalone bit accessors.
//!
//! The cursor itself never returns errors; abnormal conditions surface as
//! sticky [crate::flags::Flags] instead.

use std::fmt;

/// Errors produced by the absolute-bit accessors in [crate::bits].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Requested bit index is beyond the end of the data.
    OutOfBounds,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::OutOfBounds => write!(f, "bit index out of bounds"),
        }
    }
}

impl std::error::Error for AccessError {}

//! Error types shared by every layer of the tiling engine

use std::fmt;

use crate::algebra::point::Frame;

/// Main error type for all tiling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// Rotation angle outside the twelve supported 30 degree classes
    UnsupportedAngle {
        /// Requested angle in degrees, before normalization
        degrees: i32,
    },

    /// Arithmetic attempted between points tagged with incompatible frames
    FrameMismatch {
        /// Operation that mixed the frames
        operation: &'static str,
        /// Frame of the left operand
        lhs: Frame,
        /// Frame of the right operand
        rhs: Frame,
    },

    /// Rotation or reflection table failed a structural self-check
    MalformedTransform {
        /// Description of the violated identity
        reason: String,
    },

    /// Caller-supplied value failed validation
    InvalidArgument {
        /// Operation that rejected the value
        operation: &'static str,
        /// What the operation expected
        expected: &'static str,
        /// Value actually provided
        found: String,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAngle { degrees } => {
                write!(
                    f,
                    "Unsupported rotation angle {degrees} (must be a multiple of 30 degrees)"
                )
            }
            Self::FrameMismatch {
                operation,
                lhs,
                rhs,
            } => {
                write!(f, "Frame mismatch in {operation}: {lhs} vs {rhs}")
            }
            Self::MalformedTransform { reason } => {
                write!(f, "Malformed transform table: {reason}")
            }
            Self::InvalidArgument {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Invalid argument for {operation}: expected {expected}, found {found}"
                )
            }
        }
    }
}

impl std::error::Error for TilingError {}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an unsupported angle error
pub const fn unsupported_angle(degrees: i32) -> TilingError {
    TilingError::UnsupportedAngle { degrees }
}

/// Create a frame mismatch error
pub const fn frame_mismatch(operation: &'static str, lhs: Frame, rhs: Frame) -> TilingError {
    TilingError::FrameMismatch {
        operation,
        lhs,
        rhs,
    }
}

/// Create a malformed transform error
pub fn malformed_transform(reason: &impl ToString) -> TilingError {
    TilingError::MalformedTransform {
        reason: reason.to_string(),
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    operation: &'static str,
    expected: &'static str,
    found: &impl ToString,
) -> TilingError {
    TilingError::InvalidArgument {
        operation,
        expected,
        found: found.to_string(),
    }
}

//! Error types for image loading, partitioning and rendering

use crate::io::configuration::FAILURE_EXIT_CODE;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum ConversionError {
    /// Source image could not be opened or decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A size or count that is used as a divisor came out as zero
    ///
    /// Occurs when:
    /// - The image is narrower than the requested column count
    /// - The column count itself is zero
    /// - A region contains no pixels
    Division {
        /// Name of the computation that would have divided by zero
        operation: &'static str,
        /// Description of the zero quantity
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing the rendered grid failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl ConversionError {
    /// Process exit code reported for this error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ImageLoad { .. }
            | Self::Division { .. }
            | Self::InvalidParameter { .. }
            | Self::Output { .. } => FAILURE_EXIT_CODE,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Error opening image '{}': {source}", path.display())
            }
            Self::Division { operation, reason } => {
                write!(f, "Division by zero in {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::Output { source } => Some(source),
            Self::Division { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ConversionError {
    ConversionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a division error
pub fn division_error(operation: &'static str, reason: &impl ToString) -> ConversionError {
    ConversionError::Division {
        operation,
        reason: reason.to_string(),
    }
}

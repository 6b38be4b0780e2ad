//! Error types for slicing and archiving operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all splitting operations
#[derive(Debug)]
pub enum SplitError {
    /// Source bytes could not be decoded as a raster image
    Decode {
        /// Path or display name of the source
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A grid cell could not be encoded to its output format
    Encode {
        /// Row index of the failing cell
        row: u32,
        /// Column index of the failing cell
        col: u32,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Zip container assembly failed
    Archive {
        /// Underlying zip writer error
        source: zip::result::ZipError,
    },

    /// Grid shape validation failed
    InvalidGrid {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::Encode { row, col, source } => {
                write!(f, "Failed to encode tile at row {row}, col {col}: {source}")
            }
            Self::Archive { source } => {
                write!(f, "Failed to assemble zip archive: {source}")
            }
            Self::InvalidGrid {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid grid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::Archive { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidGrid { .. } => None,
        }
    }
}

/// Convenience type alias for splitting results
pub type Result<T> = std::result::Result<T, SplitError>;

impl From<zip::result::ZipError> for SplitError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive { source: err }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid grid parameter error
pub fn invalid_grid(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SplitError {
    SplitError::InvalidGrid {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a generic path validation error
pub fn path_error(msg: &str) -> SplitError {
    SplitError::InvalidGrid {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

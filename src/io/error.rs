//! Error types for board construction and the PNG workflow

use std::fmt;
use std::path::PathBuf;

/// Main error type for all cutting operations
///
/// "No admissible cut" outcomes are normal boolean results, never errors;
/// the only fault the core itself can raise is [`CutError::InvalidDimensions`]
/// at construction time.
#[derive(Debug)]
pub enum CutError {
    /// Buffer and width cannot form a rectangular grid
    InvalidDimensions {
        /// Number of cells in the rejected buffer
        length: usize,
        /// Requested row width
        width: usize,
    },

    /// Failed to load a shape image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a result image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General filesystem operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CLI target cannot be processed
    InvalidTarget {
        /// Description of what is wrong with the target
        reason: String,
    },
}

impl fmt::Display for CutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { length, width } => {
                write!(
                    f,
                    "Invalid dimensions: {length} cells cannot form rows of width {width}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidTarget { reason } => {
                write!(f, "Invalid target: {reason}")
            }
        }
    }
}

impl std::error::Error for CutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for cutting results
pub type Result<T> = std::result::Result<T, CutError>;

/// Create an invalid target error
pub fn invalid_target(reason: &impl ToString) -> CutError {
    CutError::InvalidTarget {
        reason: reason.to_string(),
    }
}

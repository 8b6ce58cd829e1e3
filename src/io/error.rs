//! Error types for puzzle loading, configuration and search

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackError {
    /// Puzzle description could not be parsed
    InvalidPuzzle {
        /// 1-based line where the problem was found
        line: usize,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Search parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Reading the puzzle description failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing solutions to the output stream failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Worker threads did not finish cleanly
    ///
    /// A branch that panicked has not been explored completely, so the
    /// collected solutions cannot be trusted.
    WorkerFailure {
        /// Number of workers whose join reported a panic
        failed: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPuzzle { line, reason } => {
                write!(f, "Invalid puzzle description at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Output { source } => write!(f, "Failed to write solutions: {source}"),
            Self::WorkerFailure { failed } => {
                write!(f, "{failed} search worker(s) terminated abnormally")
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackError>;

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid puzzle error for the given 1-based line
pub fn invalid_puzzle(line: usize, reason: &impl ToString) -> PackError {
    PackError::InvalidPuzzle {
        line,
        reason: reason.to_string(),
    }
}

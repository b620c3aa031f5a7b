//! Error types for recomendar operations.
//!
//! Provides rich error context for library consumers: which hyperparameter
//! was rejected, which catalog column was missing, which title failed to
//! resolve.

use std::fmt;

/// Result type alias for recomendar operations.
pub type Result<T> = std::result::Result<T, RecomendarError>;

/// Main error type for recomendar operations.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::MissingColumn {
///     column: "overview".to_string(),
/// };
/// assert!(err.to_string().contains("overview"));
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// Invalid tuning parameter provided (e.g. a zero vocabulary cap).
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A required catalog column is absent from every record.
    MissingColumn {
        /// Column name
        column: String,
    },

    /// Query issued before a successful `fit`.
    NotFitted,

    /// Query title has no normalized match in the catalog.
    TitleNotFound {
        /// The title as the caller supplied it
        title: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// CSV record could not be parsed.
    CsvParse {
        /// 1-based line number in the source file
        line: usize,
        /// Error details
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomendarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            RecomendarError::MissingColumn { column } => {
                write!(f, "Required column '{column}' not found in catalog")
            }
            RecomendarError::NotFitted => {
                write!(f, "Model not fitted yet, call fit() first")
            }
            RecomendarError::TitleNotFound { title } => {
                write!(f, "Title '{title}' not found in catalog")
            }
            RecomendarError::Io(e) => write!(f, "I/O error: {e}"),
            RecomendarError::CsvParse { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            RecomendarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecomendarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(err: std::io::Error) -> Self {
        RecomendarError::Io(err)
    }
}

impl From<&str> for RecomendarError {
    fn from(msg: &str) -> Self {
        RecomendarError::Other(msg.to_string())
    }
}

impl From<String> for RecomendarError {
    fn from(msg: String) -> Self {
        RecomendarError::Other(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = RecomendarError::InvalidHyperparameter {
            param: "max_features".to_string(),
            value: "0".to_string(),
            constraint: "must be positive".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("max_features"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = RecomendarError::MissingColumn {
            column: "overview".to_string(),
        };
        assert!(err.to_string().contains("'overview'"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = RecomendarError::NotFitted;
        assert!(err.to_string().contains("fit()"));
    }

    #[test]
    fn test_title_not_found_display() {
        let err = RecomendarError::TitleNotFound {
            title: "Nonexistent Movie XYZ".to_string(),
        };
        assert!(err.to_string().contains("Nonexistent Movie XYZ"));
    }

    #[test]
    fn test_csv_parse_display() {
        let err = RecomendarError::CsvParse {
            line: 42,
            message: "unequal lengths".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("unequal lengths"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: RecomendarError = io_err.into();
        assert!(matches!(err, RecomendarError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = RecomendarError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = RecomendarError::Other("test".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_str() {
        let err: RecomendarError = "something went sideways".into();
        assert!(matches!(err, RecomendarError::Other(_)));
        assert_eq!(err.to_string(), "something went sideways");
    }
}

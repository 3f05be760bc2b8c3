use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the rundown crate.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum RundownError {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    // Internal module errors
    #[error("{0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("{0}")]
    StructuralError(#[from] crate::layout::StructuralError),

    #[error("{0}")]
    NotFoundError(#[from] crate::schedule::NotFoundError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, RundownError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| RundownError::WithContextError(format!("{}: {}", message, e)))
    }
}

/// Non-fatal data problems. Each one degrades to a literal-text or sentinel fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataQualityWarning {
    #[error("Music catalog has no {0} column")]
    CatalogColumnMissing(&'static str),

    #[error("Music catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Song mention '{0}' not found in catalog")]
    UnresolvedSong(String),

    /// A collaborator lookup failed; `date` is the date the lookup was made for.
    #[error("{program} on {date}: {message}")]
    Collaborator {
        program: String,
        date: NaiveDate,
        message: String,
    },

    #[error("{0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StructuralError;

    #[test]
    fn prefix_wraps_message() {
        let result: Result<(), RundownError> =
            Err(StructuralError::InsufficientSegments { found: 2 }.into());
        let message = result.with_prefix("6/2週").unwrap_err().to_string();
        assert_eq!(message, "6/2週: Expected 4 segment rows in remarks column, found 2");
    }

    #[test]
    fn prefix_keeps_ok() {
        let result: Result<usize, RundownError> = Ok(7);
        assert_eq!(result.with_prefix("ignored").unwrap(), 7);
    }
}

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The user command that needed a table selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Edit => write!(f, "edit"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No assignment selected to {0}")]
    NoSelection(Action),

    #[error("Invalid due date '{0}': expected MM/DD/YYYY")]
    InvalidDate(String),
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_message_names_the_action() {
        assert_eq!(
            TrackerError::NoSelection(Action::Delete).to_string(),
            "No assignment selected to delete"
        );
        assert_eq!(
            TrackerError::NoSelection(Action::Edit).to_string(),
            "No assignment selected to edit"
        );
    }
}

//! Error types for command parsing and task list operations.

use thiserror::Error;

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors surfaced to the user for a single command.
///
/// Every variant carries the message shown to the user verbatim; none of
/// them ends the interaction loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// A required field (description, keyword, index) was empty.
    #[error("{0}")]
    Validation(String),

    /// A marker (`/by`, `/from`, `/to`) is missing, misplaced, or delimits nothing.
    #[error("{0}")]
    Format(String),

    /// The index argument is not a positive integer.
    #[error("{0}")]
    Type(String),

    /// The index argument does not name an existing task.
    #[error("{0}")]
    Range(String),

    /// The task is already in the requested state.
    #[error("{0}")]
    State(String),

    /// Writing the task file failed; the in-memory list was left untouched.
    #[error("There is an error saving your tasks: {0}")]
    Persistence(String),
}

/// Fieldless discriminant of [`TaskError`], handy for matching in tests and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Format,
    Type,
    Range,
    State,
    Persistence,
}

impl TaskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::Validation,
            TaskError::Format(_) => ErrorKind::Format,
            TaskError::Type(_) => ErrorKind::Type,
            TaskError::Range(_) => ErrorKind::Range,
            TaskError::State(_) => ErrorKind::State,
            TaskError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line.
        Self::Persistence(format!("{:#}", err))
    }
}

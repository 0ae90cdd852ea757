//! Command error taxonomy.

use thiserror::Error;

/// A well-known command that was rejected. Each variant carries the raw
/// input line so the message can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Wrong number of arguments, or an argument that is not an integer.
    #[error("Invalid input format: {0}")]
    Format(String),
    /// Canvas width or height below 1.
    #[error("Invalid canvas specified: {0}")]
    Canvas(String),
    /// A drawing command issued before any canvas exists.
    #[error("Invalid initialization: {0}")]
    Uninitialized(String),
    /// Line endpoints that share neither a row nor a column.
    #[error("Invalid input: {0} -- not a line")]
    NotALine(String),
    /// Coordinates outside the canvas.
    #[error("Invalid {target}: {line} -- overflowed")]
    Overflowed { target: &'static str, line: String },
    /// Fill target that already holds a non-blank character.
    #[error("Invalid point: {0} -- not fillable")]
    NotFillable(String),
    /// Fill colour that is not exactly one character.
    #[error("Invalid color: {0}")]
    Color(String),
    /// A command that has already produced its post-state.
    #[error("Cannot execute already-executed command: {0}")]
    AlreadyExecuted(String),
    /// Redo on a command that never executed successfully.
    #[error("Cannot redo never-executed command: {0}")]
    NotExecuted(String),
    #[error("Cannot undo not-yet-executed command")]
    UndoPending,
    #[error("Cannot redo already-executed command")]
    RedoDone,
}

/// Errors produced while dispatching or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Empty line or unrecognised keyword.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// Deliberate termination request, not a failure.
    #[error("{0}")]
    UserExit(String),
}

impl CommandError {
    /// Check whether this is a termination request rather than a failure.
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandError::UserExit(_))
    }
}

/// Result type for command operations.
pub type CommandResult<T> = Result<T, CommandError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Task {task} not found in column {column}")]
    TaskNotFound { task: String, column: String },

    #[error("No move in progress")]
    NoPendingMove,

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("No note is being edited")]
    NoActiveNote,

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("No date selected")]
    NoDateSelected,

    #[error("Track not found: {0}")]
    TrackNotFound(u32),

    #[error("Volume must be between 0 and 100, got {0}")]
    InvalidVolume(u8),

    #[error("Timer driver must be started inside a Tokio runtime")]
    NoRuntime,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

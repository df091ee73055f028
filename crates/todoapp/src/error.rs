use crate::model::TaskId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Task text cannot be empty")]
    EmptyText,

    #[error("Invalid due date: {0:?}")]
    InvalidDueDate(String),

    #[error("Unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;

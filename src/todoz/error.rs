use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("There is no item {line}. Please choose a number from 1 to {count}")]
    LineOutOfRange { line: usize, count: usize },

    #[error("Invalid line number: {0}")]
    InvalidLineNumber(String),

    #[error("Invalid priority argument '{0}' (expected a line number followed by one marker, e.g. 2B)")]
    InvalidPriority(String),

    #[error("Cannot add an empty item")]
    EmptyItem,

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;

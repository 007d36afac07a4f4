use gridcss::GridCssError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid prop: {0}")]
    InvalidProp(#[from] GridCssError),

    #[error("No class registered for key {0}")]
    MissingClass(String),

    #[error("Invalid build mode: {0}")]
    InvalidBuildMode(String),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GridError>;

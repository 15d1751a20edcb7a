use thiserror::Error;

use crate::store::StoreError;

pub type AppResult<T> = core::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Form validation failures. The message is shown to the user verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a Quest Name!")]
    MissingName,
    #[error("Please select a Type of Magic!")]
    MissingType,
    #[error("Please select a Difficulty!")]
    MissingDifficulty,
}

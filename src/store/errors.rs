use std::io::Error as IoError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user with this email already exists")]
    EmailAlreadyRegistered,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("note title must not be empty")]
    EmptyTitle,

    #[error("data directory path exists but is not a directory")]
    NotADirectory,

    #[error("data directory must be owned by the current user with mode 0700")]
    Permission,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid stored value: {0}")]
    Parsing(#[from] serde_json::Error),
}

use thiserror::Error;

use crate::accounts::AccountError;
use crate::input::ReadError;

pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("history error: {0}")]
    History(#[from] csv::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Input(#[from] ReadError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

use crate::types::ElementIdError;
use crate::types::config::AppConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid element id: {0}")]
    InvalidElementId(#[from] ElementIdError),

    #[error("indexed name must not be empty")]
    EmptyName,

    #[error("unknown node kind: {0}")]
    UnknownNodeKind(String),
}

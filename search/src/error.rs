use symnav_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("index is frozen; call clear() before adding entries")]
    Frozen,
}

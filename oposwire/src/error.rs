//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Codec error: {0}")]
    Codec(#[from] oposwire_core::Error),

    #[error("Type error: {0}")]
    Types(#[from] oposwire_types::Error),
}

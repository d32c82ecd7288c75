use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NdcError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("expected 10 or 11 digits, found {0}")]
    InvalidLength(usize),
    #[error("cannot convert: {0}")]
    Unconvertible(String),
}

pub type Result<T> = std::result::Result<T, NdcError>;

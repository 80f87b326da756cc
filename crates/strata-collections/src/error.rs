use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("No elements remain in the sequence")]
    EndOfSequence,
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    /// The universe must contain at least one element.
    #[error("universe size must be positive")]
    InvalidSize,

    #[error("element {index} is out of range for a universe of {len} elements")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, UnionFindError>;

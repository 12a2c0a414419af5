use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    #[error("ring capacity {0} cannot tell a full ring apart from an empty one")]
    InvalidCapacity(u32),

    #[error("element storage holds {found} slots but the descriptor claims {expected}")]
    StorageMismatch { expected: u32, found: usize },

    #[error("descriptor indices (start {start}, end {end}) fall outside capacity {capacity}")]
    IndexOutOfBounds { start: u32, end: u32, capacity: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError<E>
where
    E: Debug,
{
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error("queue is full and cannot accept another item")]
    Full,

    #[error("queue is empty and no item can be removed")]
    Empty,

    #[error("transport access to the remote ring failed: {0:?}")]
    Transport(E),

    /// Reserved for operations that only one variant can ever serve.
    #[error("operation is not supported by this queue variant")]
    Unsupported,
}

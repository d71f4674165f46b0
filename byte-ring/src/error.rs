use thiserror::Error;

/// Reasons a ring buffer operation was refused.
///
/// Every variant is local to the call that produced it: the buffer is left
/// in the state it had before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// Storage was empty, capacity was zero, or capacity exceeded the storage.
    #[error("invalid ring buffer init: capacity {capacity} over {storage_len} bytes of storage")]
    InvalidInit { capacity: usize, storage_len: usize },

    #[error("ring buffer full ({capacity} elements)")]
    Full { capacity: usize },

    #[error("ring buffer empty")]
    Empty,

    #[error("ring buffer has no storage bound")]
    Uninitialized,
}

pub type Result<T> = std::result::Result<T, RingBufferError>;

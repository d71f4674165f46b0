pub mod error;
pub mod ring_buffer;

pub use error::{Result, RingBufferError};
pub use ring_buffer::RingBuffer;

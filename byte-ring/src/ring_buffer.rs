//! Fixed-capacity circular byte buffer over caller-owned storage.
//!
//! The buffer never allocates: it borrows a byte slice for as long as it is
//! initialized and hands the borrow back on [`RingBuffer::deinit`]. A write
//! into a full buffer is rejected rather than overwriting the oldest byte.

use tracing::{debug, trace, warn};

use crate::error::{Result, RingBufferError};

#[derive(Debug)]
pub struct RingBuffer<'a> {
    storage: Option<&'a mut [u8]>,
    capacity: usize,
    head: usize,
    tail: usize,
    // head == tail means either empty or full; this flag tells them apart.
    is_empty: bool,
}

impl<'a> RingBuffer<'a> {
    /// Creates an uninitialized buffer. Writes and reads fail until
    /// [`init`](Self::init) binds storage.
    pub const fn new() -> Self {
        RingBuffer {
            storage: None,
            capacity: 0,
            head: 0,
            tail: 0,
            is_empty: true,
        }
    }

    /// Creates a buffer that uses the whole of `storage` as its capacity.
    pub fn with_storage(storage: &'a mut [u8]) -> Result<Self> {
        let capacity = storage.len();
        let mut buffer = RingBuffer::new();
        buffer.init(storage, capacity)?;
        Ok(buffer)
    }

    /// Binds `storage` and resets the buffer to empty.
    ///
    /// Only the first `capacity` bytes of `storage` are used. Re-initializing
    /// an already bound buffer discards its unread contents. On error the
    /// buffer is left untouched.
    pub fn init(&mut self, storage: &'a mut [u8], capacity: usize) -> Result<()> {
        let storage_len = storage.len();
        if storage_len == 0 || capacity == 0 || capacity > storage_len {
            warn!(capacity, storage_len, "rejected ring buffer init");
            return Err(RingBufferError::InvalidInit {
                capacity,
                storage_len,
            });
        }

        self.storage = Some(storage);
        self.capacity = capacity;
        self.head = 0;
        self.tail = 0;
        self.is_empty = true;
        debug!(capacity, "ring buffer initialized");
        Ok(())
    }

    /// Unbinds the storage and returns it to the caller.
    ///
    /// Returns `None` when the buffer was not initialized, so calling this
    /// twice is harmless.
    pub fn deinit(&mut self) -> Option<&'a mut [u8]> {
        let storage = self.storage.take();
        if storage.is_some() {
            debug!(capacity = self.capacity, "ring buffer deinitialized");
        }

        self.capacity = 0;
        self.head = 0;
        self.tail = 0;
        self.is_empty = true;
        storage
    }

    /// Appends `value` at the write cursor.
    ///
    /// Fails with [`RingBufferError::Full`] once `capacity` bytes are unread;
    /// the value is dropped and nothing in the buffer changes.
    pub fn write(&mut self, value: u8) -> Result<()> {
        let is_full = self.is_full();
        let storage = self
            .storage
            .as_deref_mut()
            .ok_or(RingBufferError::Uninitialized)?;

        if is_full {
            trace!(capacity = self.capacity, "write rejected, ring buffer full");
            return Err(RingBufferError::Full {
                capacity: self.capacity,
            });
        }

        storage[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        self.is_empty = false;
        Ok(())
    }

    /// Removes and returns the oldest unread byte.
    pub fn read(&mut self) -> Result<u8> {
        let storage = self
            .storage
            .as_deref()
            .ok_or(RingBufferError::Uninitialized)?;

        if self.is_empty {
            trace!("read rejected, ring buffer empty");
            return Err(RingBufferError::Empty);
        }

        let value = storage[self.tail];
        self.tail = (self.tail + 1) % self.capacity;
        if self.tail == self.head {
            self.is_empty = true;
        }
        Ok(value)
    }

    /// Number of unread bytes.
    pub fn elems_cnt(&self) -> usize {
        if self.is_empty {
            0
        } else if self.head == self.tail {
            self.capacity
        } else {
            (self.head + self.capacity - self.tail) % self.capacity
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn is_full(&self) -> bool {
        self.storage.is_some() && !self.is_empty && self.head == self.tail
    }

    /// Usable slot count, `0` while uninitialized.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }
}

impl Default for RingBuffer<'_> {
    fn default() -> Self {
        RingBuffer::new()
    }
}

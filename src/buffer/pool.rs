//! Thread-local buffer pool for efficient memory reuse.

use std::cell::RefCell;

/// Default capacity for pooled buffers, matching the default read size.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Buffers larger than this are not returned to the pool.
pub const MAX_POOLED_CAPACITY: usize = 128 * 1024;

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable byte buffer for bounded reads.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if let Some(data) = pool.pop() {
                Self { data }
            } else {
                Self {
                    data: Vec::with_capacity(DEFAULT_BUFFER_SIZE),
                }
            }
        })
    }

    /// Returns a slice of exactly `size` bytes to read into.
    ///
    /// Contents are unspecified; callers must only use the prefix a read
    /// reported as filled.
    pub fn read_buf(&mut self, size: usize) -> &mut [u8] {
        if self.data.len() < size {
            self.data.resize(size, 0);
        }
        &mut self.data[..size]
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::take()
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_buf_size() {
        let mut buf = Buffer::take();
        assert_eq!(buf.read_buf(100).len(), 100);
        assert_eq!(buf.read_buf(4096).len(), 4096);
        // Shrinking requests still hand out exactly the requested size.
        assert_eq!(buf.read_buf(10).len(), 10);
    }

    #[test]
    fn test_buffer_reuse() {
        {
            let mut buf = Buffer::take();
            let _ = buf.read_buf(DEFAULT_BUFFER_SIZE);
        }

        // The buffer went back to the pool; taking again reuses its storage.
        let mut buf2 = Buffer::take();
        assert!(buf2.read_buf(DEFAULT_BUFFER_SIZE).len() == DEFAULT_BUFFER_SIZE);
    }
}

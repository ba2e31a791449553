//! Internal buffer management for read-loop reuse.
//!
//! This module provides a thread-local buffer pool so repeated runs do not
//! reallocate their read buffers. It is an implementation detail and not
//! part of the public API.

mod pool;

pub(crate) use pool::Buffer;

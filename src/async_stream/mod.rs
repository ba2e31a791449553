//! Async streaming support for boundary detection.
//!
//! This module provides asynchronous scanning using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//!
//! - [`scan_async`] - Creates an async stream of split points from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{ScanStream, scan_async};

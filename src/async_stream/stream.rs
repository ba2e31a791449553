//! Async stream adapter for boundary detection.
//!
//! This module provides asynchronous scanning using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and
//! compatible with tokio, async-std, smol, and other async runtimes.
//! Sinks stay synchronous; the stream covers detection, which is the part
//! that benefits from async sources (network dumps, async files).
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use sqlsplit::{scan_async, SplitConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), sqlsplit::SplitError> {
//!     let mut stream = scan_async(reader, SplitConfig::default());
//!
//!     while let Some(point) = stream.next().await {
//!         println!("split at {}", point?);
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::scanner::Scanner;

pin_project! {
    /// A stream that yields split points from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// Split points arrive in increasing order; the stream ends after the
    /// reader reports end of input, or after yielding one `Err` if a read
    /// fails.
    pub struct ScanStream<R> {
        #[pin]
        reader: R,
        scanner: Scanner,
        buf: Vec<u8>,
        pending: VecDeque<u64>,
        finished: bool,
    }
}

impl<R> ScanStream<R> {
    /// Creates a new scan stream from an async reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - An async reader implementing `AsyncRead`
    /// * `config` - The split configuration
    pub fn new(reader: R, config: SplitConfig) -> Self {
        Self {
            reader,
            scanner: Scanner::new(&config),
            buf: vec![0u8; config.read_size()],
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for ScanStream<R> {
    type Item = Result<u64, SplitError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(point) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(point)));
            }
            if *this.finished {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, this.buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(SplitError::Input(e))));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    return Poll::Ready(None);
                }
                Poll::Ready(Ok(n)) => {
                    this.pending.extend(this.scanner.push(&this.buf[..n]));
                }
            }
        }
    }
}

/// Creates a split-point stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
/// This works with any async runtime (tokio, async-std, smol, etc.).
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use sqlsplit::{scan_async, SplitConfig};
///
/// let tokio_reader = tokio::fs::File::open("dump.sql").await?;
/// let stream = scan_async(tokio_reader.compat(), SplitConfig::default());
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `config` - The split configuration
///
/// # Returns
///
/// A [`ScanStream`] that implements `Stream<Item = Result<u64, SplitError>>`
pub fn scan_async<R: AsyncRead>(reader: R, config: SplitConfig) -> ScanStream<R> {
    ScanStream::new(reader, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_scan_stream_empty() {
        let reader: &[u8] = &[];
        let stream = scan_async(reader, SplitConfig::default());
        let points: Vec<_> = stream.collect().await;
        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn test_scan_stream_finds_points() {
        let reader: &[u8] = b"top\n-- mark a\nbody\n-- mark b\n";
        let config = SplitConfig::new("-- mark").unwrap().with_read_size(5);
        let stream = scan_async(reader, config);

        let points: Vec<u64> = stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(points, vec![4, 19]);
    }

    #[tokio::test]
    async fn test_scan_stream_matches_sync_scanner() {
        let input = b"x\n-- mark\ny\n-- mark\nz\n";
        let config = SplitConfig::new("-- mark").unwrap().with_read_size(3);

        let mut scanner = Scanner::new(&config);
        let expected = scanner.push(input);

        let reader: &[u8] = input;
        let stream = scan_async(reader, config);
        let points: Vec<u64> = stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(points, expected);
    }
}

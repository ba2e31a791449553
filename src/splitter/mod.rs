//! High-level driver - Splitter, Summary, AbortSignal.
//!
//! [`Splitter`] owns the one-pass control flow: read a bounded chunk, let
//! the [`Scanner`](crate::Scanner) find split points in it, hand chunk and
//! points to the [`SplitWriter`](crate::SplitWriter), repeat until end of
//! input, then finalize.
//!
//! # Example
//!
//! ```
//! use sqlsplit::{MemorySinkProvider, SplitConfig, Splitter};
//!
//! let input: &[u8] = b"PREAMBLE\n-- Table structure for table\nX";
//! let splitter = Splitter::new(SplitConfig::default());
//! let mut sinks = MemorySinkProvider::new();
//!
//! let summary = splitter.split(input, &mut sinks)?;
//! assert_eq!(summary.sink_count(), 2);
//! assert_eq!(sinks.contents()[0], b"PREAMBLE\n");
//! # Ok::<(), sqlsplit::SplitError>(())
//! ```

use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::buffer::Buffer;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::scanner::{ScanIter, Scanner};
use crate::segment::Segment;
use crate::sink::SinkProvider;
use crate::writer::SplitWriter;

/// A splitter that drives one forward pass over a dump.
///
/// `Splitter` holds a configuration and an optional abort signal and
/// provides methods to split data from various sources. It is cheap to
/// construct and reusable across runs.
///
/// # Example
///
/// ```
/// use sqlsplit::{MemorySinkProvider, SplitConfig, Splitter};
///
/// let splitter = Splitter::new(SplitConfig::new("-- mark")?);
/// let mut sinks = MemorySinkProvider::new();
///
/// let summary = splitter.split_bytes(b"-- mark\na\n-- mark\nb\n", &mut sinks)?;
/// assert_eq!(summary.sink_count(), 2);
/// # Ok::<(), sqlsplit::SplitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
    signal: Option<AbortSignal>,
}

impl Splitter {
    /// Creates a new splitter with the given configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            signal: None,
        }
    }

    /// Attaches a cooperative abort signal, checked between chunks.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlsplit::{AbortSignal, SplitConfig, Splitter};
    ///
    /// let signal = AbortSignal::new();
    /// let splitter = Splitter::new(SplitConfig::default())
    ///     .with_abort_signal(signal.clone());
    /// # let _ = splitter;
    /// ```
    pub fn with_abort_signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Creates a lazy split-point iterator over a reader.
    ///
    /// This runs detection only; no sinks are involved. See
    /// [`ScanIter`](crate::ScanIter).
    pub fn scan<R: Read>(&self, reader: R) -> ScanIter<R> {
        ScanIter::new(reader, &self.config)
    }

    /// Splits everything `reader` yields into sinks from `provider`.
    ///
    /// Reads in chunks of the configured read size until a read returns
    /// zero bytes, then finalizes the last sink. Returns the run
    /// [`Summary`] on success. On failure the error identifies the failing
    /// side (input, sink open, sink write) with stream position and sink
    /// sequence number; sinks closed before the failure are left as they
    /// are.
    pub fn split<R: Read, P: SinkProvider>(
        &self,
        mut reader: R,
        provider: P,
    ) -> Result<Summary, SplitError> {
        self.config.validate()?;

        let mut scanner = Scanner::new(&self.config);
        let mut writer = SplitWriter::new(provider, self.config.clone());
        let mut pooled = Buffer::take();
        let buf = pooled.read_buf(self.config.read_size());

        loop {
            if let Some(signal) = &self.signal {
                if signal.is_aborted() {
                    let position = writer.position();
                    writer.abandon();
                    return Err(SplitError::Aborted { position });
                }
            }

            let n = match reader.read(buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    writer.abandon();
                    return Err(SplitError::Input(e));
                }
            };

            let points = scanner.push(&buf[..n]);
            writer.push(&buf[..n], &points)?;
        }

        writer.finish()
    }

    /// Splits an in-memory buffer. Convenience wrapper around
    /// [`Splitter::split`].
    pub fn split_bytes<P: SinkProvider>(
        &self,
        data: &[u8],
        provider: P,
    ) -> Result<Summary, SplitError> {
        self.split(data, provider)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

/// The report of one successful split run.
///
/// Concatenating the segments in order reproduces the input exactly; the
/// intervals tile `[0, total_bytes)` with no gap and no overlap.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Per-segment metadata, in sequence order.
    pub segments: Vec<Segment>,

    /// Total input bytes processed.
    pub total_bytes: u64,
}

impl Summary {
    /// Returns the number of sinks produced.
    pub fn sink_count(&self) -> usize {
        self.segments.len()
    }
}

/// A cooperative cancellation flag for an in-flight split run.
///
/// Clones share one flag. Raise it from anywhere (another thread, a signal
/// handler) and the run stops between chunks: the open sink is abandoned
/// after a best-effort flush and the run reports
/// [`SplitError::Aborted`](crate::SplitError::Aborted).
///
/// # Example
///
/// ```
/// use sqlsplit::AbortSignal;
///
/// let signal = AbortSignal::new();
/// assert!(!signal.is_aborted());
/// signal.abort();
/// assert!(signal.is_aborted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    flag: Arc<AtomicBool>,
}

impl AbortSignal {
    /// Creates a new, unraised signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Idempotent.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns whether the signal has been raised.
    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySinkProvider;

    #[test]
    fn test_split_bytes_round_trip() {
        let input = b"top\n-- mark a\nbody\n-- mark b\n";
        let splitter = Splitter::new(SplitConfig::new("-- mark").unwrap());
        let mut sinks = MemorySinkProvider::new();

        let summary = splitter.split_bytes(input, &mut sinks).unwrap();

        assert_eq!(summary.sink_count(), 3);
        assert_eq!(summary.total_bytes, input.len() as u64);
        assert_eq!(sinks.concatenated(), input);
    }

    #[test]
    fn test_empty_input_reports_success() {
        let splitter = Splitter::default();
        let mut sinks = MemorySinkProvider::new();

        let summary = splitter.split_bytes(b"", &mut sinks).unwrap();

        assert_eq!(summary.sink_count(), 0);
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(sinks.sink_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let splitter = Splitter::new(SplitConfig::default().with_marker(""));
        let mut sinks = MemorySinkProvider::new();

        match splitter.split_bytes(b"data", &mut sinks) {
            Err(SplitError::InvalidConfig { .. }) => {}
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
        assert_eq!(sinks.sink_count(), 0);
    }

    #[test]
    fn test_abort_before_first_chunk() {
        let signal = AbortSignal::new();
        signal.abort();

        let splitter =
            Splitter::new(SplitConfig::new("-- mark").unwrap()).with_abort_signal(signal);
        let mut sinks = MemorySinkProvider::new();

        match splitter.split_bytes(b"a\n-- mark\nb\n", &mut sinks) {
            Err(SplitError::Aborted { position: 0 }) => {}
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_segments_tile_input() {
        let input = b"x\n-- mark\nyy\n-- mark\nzzz\n";
        let splitter = Splitter::new(
            SplitConfig::new("-- mark")
                .unwrap()
                .with_read_size(4),
        );
        let mut sinks = MemorySinkProvider::new();

        let summary = splitter.split_bytes(input, &mut sinks).unwrap();

        let mut expected_start = 0u64;
        for (i, segment) in summary.segments.iter().enumerate() {
            assert_eq!(segment.seq(), i as u32);
            assert_eq!(segment.start(), expected_start);
            expected_start = segment.end();
        }
        assert_eq!(expected_start, summary.total_bytes);
    }
}

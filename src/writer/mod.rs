//! Sink routing engine - the SplitWriter.
//!
//! The writer consumes the same chunk sequence the scanner sees, together
//! with the scanner's split points, and routes every byte to exactly one
//! sink. Sinks rotate precisely at split points; content that precedes the
//! first marker (the preamble) gets its own sink rather than being dropped.
//!
//! A marker straddling two chunks is only confirmed by the scanner once
//! the later chunk arrives, so the writer holds back the last
//! `marker.len() - 1` bytes it has received instead of committing them to
//! the open sink. A late-confirmed split point therefore always lands in
//! bytes that are still routable. The window is flushed at end of input.
//!
//! # Example
//!
//! ```
//! use sqlsplit::{FnSinkProvider, SplitConfig, SplitWriter};
//!
//! let config = SplitConfig::new("-- mark")?;
//! let provider = FnSinkProvider::new(|_seq| Ok(Vec::<u8>::new()));
//! let mut writer = SplitWriter::new(provider, config);
//!
//! // One chunk, one split point at offset 4.
//! writer.push(b"top\n-- mark\nrest\n", &[4])?;
//! let summary = writer.finish()?;
//!
//! assert_eq!(summary.sink_count(), 2);
//! assert_eq!(summary.total_bytes, 17);
//! # Ok::<(), sqlsplit::SplitError>(())
//! ```

use std::io::Write;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::segment::Segment;
use crate::sink::SinkProvider;
use crate::splitter::Summary;

#[cfg(feature = "hash-blake3")]
use crate::hash::Blake3Hasher;

/// A writer that routes streamed bytes to rotating sinks.
///
/// Feed it each input chunk via `push()` along with the split points the
/// [`Scanner`](crate::Scanner) reported for that chunk, then call
/// `finish()` once at end of input. Exactly one sink is open at any time;
/// a sink is created lazily when the first byte destined for it is known,
/// receives the configured prologue, its content, and the epilogue, and
/// is closed before the next sink opens.
///
/// # Error policy
///
/// I/O failures are not retried. Sink failures carry the sequence number
/// and stream position; on a write failure the open sink gets a
/// best-effort flush before the error surfaces. Segments that were
/// already closed stay on their sinks untouched - partial progress is
/// preserved, not rolled back.
pub struct SplitWriter<P: SinkProvider> {
    provider: P,
    config: SplitConfig,
    current: Option<OpenSink<P::Sink>>,
    segments: Vec<Segment>,
    next_seq: u32,
    /// Received bytes not yet committed to a sink, at most
    /// `marker.len() - 1` of them.
    held: Vec<u8>,
    /// Stream position of the next expected chunk byte.
    position: u64,
    /// Reused scratch holding held ++ chunk for one push.
    scratch: Vec<u8>,
    done: bool,
}

struct OpenSink<W> {
    sink: W,
    seq: u32,
    start: u64,
    #[cfg(feature = "hash-blake3")]
    hasher: Option<Blake3Hasher>,
}

impl<P: SinkProvider> SplitWriter<P> {
    /// Creates a writer that obtains sinks from `provider`.
    pub fn new(provider: P, config: SplitConfig) -> Self {
        Self {
            provider,
            config,
            current: None,
            segments: Vec::new(),
            next_seq: 0,
            held: Vec::new(),
            position: 0,
            scratch: Vec::new(),
            done: false,
        }
    }

    /// Routes one chunk's bytes, rotating sinks at the given split points.
    ///
    /// `split_points` must be the points the scanner reported for this
    /// chunk: absolute stream positions in increasing order, each one a
    /// marker occurrence whose final byte lies within this chunk. A point
    /// may lie before the chunk itself when the marker straddled a chunk
    /// boundary; the hold-back window guarantees those bytes are still
    /// routable. Bytes arriving with no sink open cause a sink to open at
    /// the current position, which is how the preamble before the first
    /// marker gets segment 0.
    pub fn push(&mut self, chunk: &[u8], split_points: &[u64]) -> Result<(), SplitError> {
        debug_assert!(!self.done, "push after finish/abandon");

        let marker_len = self.config.marker().len();
        let base = self.position - self.held.len() as u64;

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        scratch.extend_from_slice(&self.held);
        scratch.extend_from_slice(chunk);
        let total = scratch.len();

        // Everything past this index stays in the hold-back window; a
        // confirmed split point can never land there because its marker
        // already ended within the bytes received so far.
        let writable_end = total - total.min(marker_len.saturating_sub(1));

        let mut cursor = 0usize;
        for &point in split_points {
            debug_assert!(point >= base, "split point {} precedes window", point);
            let rel = (point - base) as usize;
            debug_assert!(
                rel >= cursor && rel + marker_len <= total,
                "split point {} out of order or unconfirmed",
                point
            );
            if rel > cursor {
                self.write_content(base + cursor as u64, &scratch[cursor..rel])?;
                cursor = rel;
            }
            self.close_current(point)?;
            self.open_sink(point)?;
        }

        if cursor < writable_end {
            self.write_content(base + cursor as u64, &scratch[cursor..writable_end])?;
        }

        self.held.clear();
        self.held.extend_from_slice(&scratch[writable_end..]);
        self.scratch = scratch;
        self.position = base + total as u64;
        Ok(())
    }

    /// Flushes the hold-back window, closes the final sink and returns the
    /// run summary.
    pub fn finish(&mut self) -> Result<Summary, SplitError> {
        debug_assert!(!self.done, "finish after finish/abandon");

        if !self.held.is_empty() {
            let start = self.position - self.held.len() as u64;
            let held = std::mem::take(&mut self.held);
            self.write_content(start, &held)?;
        }
        self.close_current(self.position)?;
        self.done = true;
        Ok(Summary {
            segments: std::mem::take(&mut self.segments),
            total_bytes: self.position,
        })
    }

    /// Drops the open sink after a best-effort flush, without epilogue or
    /// segment record; bytes still in the hold-back window are discarded.
    /// Used on the abort path; the writer is inert afterwards.
    pub fn abandon(&mut self) {
        if let Some(mut open) = self.current.take() {
            let _ = open.sink.flush();
        }
        self.held.clear();
        self.done = true;
    }

    /// Returns the stream position of the next expected byte.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the segments closed so far.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Consumes the writer and returns the sink provider.
    pub fn into_provider(self) -> P {
        self.provider
    }

    fn open_sink(&mut self, start: u64) -> Result<(), SplitError> {
        let seq = self.next_seq;
        let mut sink = match self.provider.open(seq) {
            Ok(sink) => sink,
            Err(source) => {
                self.done = true;
                return Err(SplitError::SinkOpen {
                    seq,
                    position: start,
                    source,
                });
            }
        };

        if !self.config.prologue().is_empty() {
            if let Err(source) = sink.write_all(self.config.prologue()) {
                let _ = sink.flush();
                self.done = true;
                return Err(SplitError::SinkWrite {
                    seq,
                    position: start,
                    source,
                });
            }
        }

        self.next_seq += 1;
        self.current = Some(OpenSink {
            sink,
            seq,
            start,
            #[cfg(feature = "hash-blake3")]
            hasher: self.config.hash_config().enabled.then(Blake3Hasher::new),
        });
        Ok(())
    }

    fn write_content(&mut self, start: u64, data: &[u8]) -> Result<(), SplitError> {
        if self.current.is_none() {
            self.open_sink(start)?;
        }
        if let Some(open) = self.current.as_mut() {
            if let Err(source) = open.sink.write_all(data) {
                let seq = open.seq;
                self.abandon();
                return Err(SplitError::SinkWrite {
                    seq,
                    position: start,
                    source,
                });
            }
            #[cfg(feature = "hash-blake3")]
            if let Some(hasher) = open.hasher.as_mut() {
                hasher.update(data);
            }
        }
        Ok(())
    }

    /// Writes the epilogue, flushes, records the segment and releases the
    /// sink. `end` is the exclusive end position of the segment.
    fn close_current(&mut self, end: u64) -> Result<(), SplitError> {
        let Some(mut open) = self.current.take() else {
            return Ok(());
        };

        if !self.config.epilogue().is_empty() {
            if let Err(source) = open.sink.write_all(self.config.epilogue()) {
                let _ = open.sink.flush();
                self.done = true;
                return Err(SplitError::SinkWrite {
                    seq: open.seq,
                    position: end,
                    source,
                });
            }
        }
        if let Err(source) = open.sink.flush() {
            self.done = true;
            return Err(SplitError::SinkWrite {
                seq: open.seq,
                position: end,
                source,
            });
        }

        let mut segment = Segment::new(open.seq, open.start, end - open.start);
        #[cfg(feature = "hash-blake3")]
        if let Some(hasher) = open.hasher {
            segment = segment.set_hash(hasher.finalize());
        }
        self.segments.push(segment);
        Ok(())
    }
}

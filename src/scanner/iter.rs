//! Reader-driven boundary detection - ScanIter.
//!
//! [`ScanIter`] wraps a [`std::io::Read`] source and lazily yields split
//! points as bounded reads arrive. It is the pull-based counterpart of the
//! push-based [`Scanner`].
//!
//! # Example
//!
//! ```
//! use sqlsplit::{Splitter, SplitConfig};
//!
//! let input: &[u8] = b"top\n-- Table structure for table `a`\nx\n";
//! let splitter = Splitter::new(SplitConfig::default());
//!
//! let points: Vec<u64> = splitter.scan(input).collect::<Result<_, _>>()?;
//! assert_eq!(points, vec![4]);
//! # Ok::<(), sqlsplit::SplitError>(())
//! ```

use std::collections::VecDeque;
use std::io::Read;

use crate::buffer::Buffer;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::scanner::Scanner;

/// An iterator that yields split points from a reader.
///
/// `ScanIter` reads the source incrementally in chunks of the configured
/// read size and yields the stream position of every line-anchored marker
/// occurrence, in order. A read error yields `Err` once and ends the
/// iteration; clean end of input simply ends it.
pub struct ScanIter<R> {
    reader: R,
    scanner: Scanner,
    buf: Buffer,
    read_size: usize,
    pending: VecDeque<u64>,
    finished: bool,
}

impl<R: Read> ScanIter<R> {
    /// Creates a new split-point iterator.
    pub(crate) fn new(reader: R, config: &SplitConfig) -> Self {
        Self {
            reader,
            scanner: Scanner::new(config),
            buf: Buffer::take(),
            read_size: config.read_size(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Returns the stream position of the next byte to be read.
    pub fn position(&self) -> u64 {
        self.scanner.position()
    }
}

impl<R: Read> Iterator for ScanIter<R> {
    type Item = Result<u64, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.pending.pop_front() {
                return Some(Ok(point));
            }
            if self.finished {
                return None;
            }

            let buf = self.buf.read_buf(self.read_size);
            match self.reader.read(buf) {
                Ok(0) => {
                    self.finished = true;
                }
                Ok(n) => {
                    self.pending.extend(self.scanner.push(&buf[..n]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(SplitError::Input(e)));
                }
            }
        }
    }
}

//! Core boundary detection engine - the push-based Scanner.
//!
//! The scanner consumes the input as a sequence of chunks and reports the
//! stream positions where the marker begins at the start of a line. A
//! match that straddles two chunks is still found: the scanner keeps a
//! carry buffer of the last `marker.len() - 1` bytes it has seen, which is
//! exactly enough trailing context to complete any partial match at the
//! head of the next chunk.
//!
//! # Example
//!
//! ```
//! use sqlsplit::{Scanner, SplitConfig};
//!
//! let config = SplitConfig::default();
//! let mut scanner = Scanner::new(&config);
//!
//! let points = scanner.push(b"line one\n-- Table structure for table `a`\n");
//! assert_eq!(points, vec![9]);
//! # Ok::<(), sqlsplit::SplitError>(())
//! ```

use bytes::Bytes;

use crate::config::SplitConfig;

/// A scanner that detects line-anchored marker occurrences in streaming data.
///
/// `Scanner` is a pure detector: feed it chunks with `push()` and it returns
/// the absolute stream positions where a new segment must begin. State is
/// explicit and bounded - a carry buffer of at most `marker.len() - 1` bytes
/// plus a line-start flag - so memory use is independent of input size.
///
/// # Determinism
///
/// The set of reported split points depends only on the input bytes, never
/// on how the input is sliced into chunks. One-byte pushes, huge pushes and
/// anything between produce identical results.
///
/// # Anchoring
///
/// A marker occurrence counts only when it begins at stream position 0 or
/// immediately after a line feed. Mid-line occurrences are ignored.
///
/// # Example
///
/// ```
/// use sqlsplit::{Scanner, SplitConfig};
///
/// let config = SplitConfig::default();
/// let mut scanner = Scanner::new(&config);
///
/// // A match split across two pushes is still found, at the right offset.
/// let mut points = scanner.push(b"a\n-- Table stru");
/// points.extend(scanner.push(b"cture for table\n"));
/// assert_eq!(points, vec![2]);
/// ```
#[derive(Debug)]
pub struct Scanner {
    marker: Bytes,
    /// Trailing bytes of consumed input, at most `marker.len() - 1` of them.
    carry: Vec<u8>,
    /// Whether the first unscanned byte sits at the start of a line.
    line_start: bool,
    /// Stream position of the next incoming byte.
    position: u64,
    /// Reused scratch holding carry ++ chunk for one scan.
    scan_buf: Vec<u8>,
}

impl Scanner {
    /// Creates a new scanner for the configuration's marker.
    ///
    /// The configuration should already be validated; see
    /// [`SplitConfig::validate`](crate::SplitConfig::validate).
    pub fn new(config: &SplitConfig) -> Self {
        Self {
            marker: config.marker().clone(),
            carry: Vec::new(),
            line_start: true,
            position: 0,
            scan_buf: Vec::new(),
        }
    }

    /// Pushes a chunk and returns the split points found within it.
    ///
    /// Returned positions are absolute stream positions, strictly
    /// increasing, and always satisfy `position <= point < position +
    /// chunk.len()` relative to the scanner's position before the call.
    /// A position whose marker window extends past the available bytes is
    /// held back and re-examined on the next push; each occurrence is
    /// reported exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlsplit::{Scanner, SplitConfig};
    ///
    /// let config = SplitConfig::new("-- next")?;
    /// let mut scanner = Scanner::new(&config);
    ///
    /// // Marker at position 0 counts: the stream starts a line.
    /// let points = scanner.push(b"-- next\ndata\n-- next\n");
    /// assert_eq!(points, vec![0, 13]);
    /// # Ok::<(), sqlsplit::SplitError>(())
    /// ```
    pub fn push(&mut self, chunk: &[u8]) -> Vec<u64> {
        if chunk.is_empty() {
            return Vec::new();
        }

        let marker_len = self.marker.len();
        // Absolute position of the first scratch byte.
        let base = self.position - self.carry.len() as u64;

        self.scan_buf.clear();
        self.scan_buf.extend_from_slice(&self.carry);
        self.scan_buf.extend_from_slice(chunk);
        let buf = &self.scan_buf;

        let mut points = Vec::new();
        let mut line_start = self.line_start;

        for (p, &byte) in buf.iter().enumerate() {
            if line_start && p + marker_len <= buf.len() && buf[p..p + marker_len] == self.marker {
                points.push(base + p as u64);
                // Scanning resumes at p + 1; the non-overlap rule only
                // forbids emitting the same position twice.
            }
            line_start = byte == b'\n';
        }

        // Keep the last marker_len - 1 bytes as carry. Positions inside the
        // carry were never matchable this round (their window ran past the
        // end), so rescanning them next round cannot double-report.
        let keep = buf.len().min(marker_len.saturating_sub(1));
        let carry_head = buf.len() - keep;
        if carry_head > 0 {
            self.line_start = buf[carry_head - 1] == b'\n';
        }
        self.carry.clear();
        self.carry.extend_from_slice(&buf[carry_head..]);
        self.position += chunk.len() as u64;

        points
    }

    /// Resets the scanner for a new stream.
    ///
    /// Clears the carry buffer and restores the line-start flag and
    /// position, so one `Scanner` can serve several runs.
    pub fn reset(&mut self) {
        self.carry.clear();
        self.line_start = true;
        self.position = 0;
    }

    /// Returns the stream position of the next incoming byte.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the marker this scanner matches.
    pub fn marker(&self) -> &Bytes {
        &self.marker
    }
}

//! Output sink abstractions.
//!
//! The split writer never touches the filesystem itself; it asks a
//! [`SinkProvider`] for a fresh [`std::io::Write`] destination each time a
//! segment begins. Provided implementations:
//!
//! - [`FileSinkProvider`] - numbered files next to the input (`dump_000.sql`, ...)
//! - [`MemorySinkProvider`] - in-memory sinks whose contents outlive the run
//! - [`FnSinkProvider`] - wraps a closure, for one-off destinations

mod file;
mod memory;

pub use file::FileSinkProvider;
pub use memory::{MemorySink, MemorySinkProvider};

use std::io;
use std::io::Write;

/// A factory for output sinks, one per segment.
///
/// `open` is called with the segment's sequence number (0, 1, 2, ...) the
/// moment the first byte destined for that segment is known. The returned
/// sink receives the configured prologue, the segment's content, and the
/// epilogue, and is dropped when the segment ends.
///
/// Failures are reported as plain [`io::Error`]s; the writer wraps them
/// with the sequence number and stream position before surfacing them.
pub trait SinkProvider {
    /// The sink type handed out by this provider.
    type Sink: Write;

    /// Opens the sink for the segment with the given sequence number.
    fn open(&mut self, seq: u32) -> io::Result<Self::Sink>;
}

impl<P: SinkProvider + ?Sized> SinkProvider for &mut P {
    type Sink = P::Sink;

    fn open(&mut self, seq: u32) -> io::Result<Self::Sink> {
        (**self).open(seq)
    }
}

/// A sink provider backed by a closure.
///
/// Useful when the destination logic is a one-liner and a dedicated
/// provider type would be noise.
///
/// # Example
///
/// ```
/// use sqlsplit::FnSinkProvider;
///
/// // Discard everything; only the run summary is interesting.
/// let provider = FnSinkProvider::new(|_seq| Ok(std::io::sink()));
/// # let _ = provider;
/// ```
pub struct FnSinkProvider<F> {
    open_fn: F,
}

impl<W, F> FnSinkProvider<F>
where
    W: Write,
    F: FnMut(u32) -> io::Result<W>,
{
    /// Wraps a closure as a sink provider.
    pub fn new(open_fn: F) -> Self {
        Self { open_fn }
    }
}

impl<W, F> SinkProvider for FnSinkProvider<F>
where
    W: Write,
    F: FnMut(u32) -> io::Result<W>,
{
    type Sink = W;

    fn open(&mut self, seq: u32) -> io::Result<Self::Sink> {
        (self.open_fn)(seq)
    }
}

//! sqlsplit
//!
//! Streaming splitter for large SQL dump files.
//!
//! `sqlsplit` breaks one huge dump into per-table files: every time the
//! marker line (by default mysqldump's `-- Table structure for table`)
//! appears at the start of a line, output rotates to a fresh sink. The
//! whole run is a single forward pass with bounded memory - a carry buffer
//! the size of the marker plus one in-flight read chunk - so dumps far
//! larger than RAM split fine. Markers split across read boundaries are
//! still found, exactly once, at the right offset.
//!
//! The crate intentionally:
//! - does NOT parse or validate SQL
//! - does NOT reorder or merge statements
//! - does NOT manage concurrency
//! - does NOT assume the output is a filesystem (sinks are abstract)
//!
//! It only does one thing: **Read bytes → route them to numbered sinks,
//! rotating at marker lines**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use sqlsplit::{FileSinkProvider, SplitConfig, SplitError, Splitter};
//!
//! fn main() -> Result<(), SplitError> {
//!     let input = File::open("dump.sql")?;
//!     let splitter = Splitter::new(SplitConfig::mysql_dump());
//!     let mut sinks = FileSinkProvider::new("dump.sql");
//!
//!     let summary = splitter.split(input, &mut sinks)?;
//!     println!("{} files, {} bytes", summary.sink_count(), summary.total_bytes);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
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
//!         println!("table boundary at byte {}", point?);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod scanner;
mod segment;
mod sink;
mod splitter;
mod writer;

mod buffer; // internal (thread-local reuse)
mod hash; // internal blake3 impl

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use config::{
    DEFAULT_MARKER, DEFAULT_READ_SIZE, HashConfig, MYSQL_DUMP_EPILOGUE, MYSQL_DUMP_PROLOGUE,
    SplitConfig,
};
pub use error::SplitError;
pub use scanner::{ScanIter, Scanner};
pub use segment::{Segment, SegmentHash};
pub use sink::{FileSinkProvider, FnSinkProvider, MemorySink, MemorySinkProvider, SinkProvider};
pub use splitter::{AbortSignal, Splitter, Summary};
pub use writer::SplitWriter;

#[cfg(feature = "async-io")]
pub use async_stream::{ScanStream, scan_async};

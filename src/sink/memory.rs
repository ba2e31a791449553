//! In-memory sink provider for tests and examples.

use std::cell::RefCell;
use std::io;
use std::io::Write;
use std::rc::Rc;

use super::SinkProvider;

/// A sink provider that keeps every segment's bytes in memory.
///
/// Each opened sink appends to a slot that stays readable through the
/// provider after the run finishes, which makes byte-for-byte assertions
/// about the split output straightforward. Single-threaded by design,
/// like the split pass itself.
///
/// # Example
///
/// ```
/// use sqlsplit::{MemorySinkProvider, SplitConfig, Splitter};
///
/// let splitter = Splitter::new(SplitConfig::new("-- mark")?);
/// let mut sinks = MemorySinkProvider::new();
///
/// splitter.split_bytes(b"top\n-- mark\nrest\n", &mut sinks)?;
/// assert_eq!(sinks.contents(), vec![
///     b"top\n".to_vec(),
///     b"-- mark\nrest\n".to_vec(),
/// ]);
/// # Ok::<(), sqlsplit::SplitError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemorySinkProvider {
    slots: Vec<Rc<RefCell<Vec<u8>>>>,
}

impl MemorySinkProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many sinks have been opened.
    pub fn sink_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns a copy of every sink's bytes, in sequence order.
    pub fn contents(&self) -> Vec<Vec<u8>> {
        self.slots.iter().map(|s| s.borrow().clone()).collect()
    }

    /// Returns all sinks' bytes concatenated in sequence order.
    pub fn concatenated(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for slot in &self.slots {
            out.extend_from_slice(&slot.borrow());
        }
        out
    }
}

impl SinkProvider for MemorySinkProvider {
    type Sink = MemorySink;

    fn open(&mut self, _seq: u32) -> io::Result<Self::Sink> {
        let slot = Rc::new(RefCell::new(Vec::new()));
        self.slots.push(Rc::clone(&slot));
        Ok(MemorySink { slot })
    }
}

/// A single in-memory sink handed out by [`MemorySinkProvider`].
#[derive(Debug)]
pub struct MemorySink {
    slot: Rc<RefCell<Vec<u8>>>,
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.slot.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_survive_sink_drop() {
        let mut provider = MemorySinkProvider::new();
        {
            let mut sink = provider.open(0).unwrap();
            sink.write_all(b"hello").unwrap();
        }
        {
            let mut sink = provider.open(1).unwrap();
            sink.write_all(b" world").unwrap();
        }

        assert_eq!(provider.sink_count(), 2);
        assert_eq!(
            provider.contents(),
            vec![b"hello".to_vec(), b" world".to_vec()]
        );
        assert_eq!(provider.concatenated(), b"hello world");
    }
}

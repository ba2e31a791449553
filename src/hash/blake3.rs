//! BLAKE3-based segment hashing implementation.
//!
//! Segments are unbounded, so the hasher is fed incrementally as content
//! streams through the writer and finalized when the sink closes.

use crate::segment::SegmentHash;

/// A hasher that computes BLAKE3 hashes.
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the hash.
    pub fn finalize(&self) -> SegmentHash {
        SegmentHash::new(self.state.finalize().into())
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Convenience method to hash data in one shot.
    #[allow(dead_code)]
    pub(crate) fn hash(data: &[u8]) -> SegmentHash {
        SegmentHash::new(blake3::hash(data).into())
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"-- Table structure ");
        hasher.update(b"for table `users`\n");
        let hash = hasher.finalize();

        let expected = Blake3Hasher::hash(b"-- Table structure for table `users`\n");
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_reset() {
        let mut hasher = Blake3Hasher::new();
        hasher.update(b"some data");

        hasher.reset();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected = Blake3Hasher::hash(b"hello world");
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_distinct_content_distinct_hash() {
        let a = Blake3Hasher::hash(b"DROP TABLE a;");
        let b = Blake3Hasher::hash(b"DROP TABLE b;");
        assert_ne!(a, b);
    }
}

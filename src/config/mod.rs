//! Configuration for splitting behavior.
//!
//! This module provides types to configure how a dump is split:
//!
//! - [`SplitConfig`] - Marker, framing, read size and hashing behavior
//! - [`HashConfig`] - Specifies whether to compute segment hashes
//!
//! # Example
//!
//! ```
//! use sqlsplit::{SplitConfig, HashConfig};
//!
//! // Custom marker
//! let config = SplitConfig::new("-- New table")?;
//!
//! // The classic mysqldump setup: table marker plus the framing that
//! // disables and re-enables constraint checks around each file
//! let config = SplitConfig::mysql_dump();
//!
//! // Disable hashing
//! let config = SplitConfig::default()
//!     .with_hash_config(HashConfig::disabled());
//!
//! # Ok::<(), sqlsplit::SplitError>(())
//! ```

use bytes::Bytes;

use crate::error::SplitError;

/// Default marker: the line mysqldump emits before each table's schema.
pub const DEFAULT_MARKER: &str = "-- Table structure for table";

/// Default read size for reader-driven runs (8 KiB).
pub const DEFAULT_READ_SIZE: usize = 8 * 1024;

/// Prologue written by [`SplitConfig::mysql_dump`]: disables unique and
/// foreign key checks so each split file can be applied in isolation.
pub const MYSQL_DUMP_PROLOGUE: &str = "/*!40014 SET @OLD_UNIQUE_CHECKS=@@UNIQUE_CHECKS, UNIQUE_CHECKS=0 */;\n/*!40014 SET @OLD_FOREIGN_KEY_CHECKS=@@FOREIGN_KEY_CHECKS, FOREIGN_KEY_CHECKS=0 */;\n\n";

/// Epilogue written by [`SplitConfig::mysql_dump`]: restores the checks
/// disabled by [`MYSQL_DUMP_PROLOGUE`].
pub const MYSQL_DUMP_EPILOGUE: &str = "\n\n/*!40014 SET FOREIGN_KEY_CHECKS=@OLD_FOREIGN_KEY_CHECKS */;\n/*!40014 SET UNIQUE_CHECKS=@OLD_UNIQUE_CHECKS */;\n";

/// Configuration for splitting behavior.
///
/// `SplitConfig` controls boundary detection and sink framing:
///
/// - `marker` - Byte sequence that begins a new segment when found at the
///   start of a line. Must be non-empty.
/// - `prologue` / `epilogue` - Bytes written right after a sink opens and
///   right before it closes. Either or both may be empty (the default).
/// - `read_size` - Size of the bounded reads used by reader-driven APIs.
///   Must be non-zero. Matching is independent of this value.
/// - `hash_config` - Whether each segment's content is hashed.
///
/// # Example
///
/// ```
/// use sqlsplit::SplitConfig;
///
/// // Defaults: mysqldump table marker, no framing, 8 KiB reads
/// let config = SplitConfig::default();
///
/// // Builder pattern
/// let config = SplitConfig::default()
///     .with_prologue("-- split --\n")
///     .with_read_size(64 * 1024);
/// # Ok::<(), sqlsplit::SplitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Byte sequence that starts a new segment when line-anchored.
    marker: Bytes,

    /// Bytes written immediately after a sink opens.
    prologue: Bytes,

    /// Bytes written immediately before a sink closes.
    epilogue: Bytes,

    /// Read size for reader-driven runs.
    read_size: usize,

    /// Configuration for hashing behavior.
    hash_config: HashConfig,
}

impl SplitConfig {
    /// Creates a configuration with the given marker and no framing.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidConfig`] if the marker is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlsplit::SplitConfig;
    ///
    /// let config = SplitConfig::new("-- Table structure for table")?;
    /// assert_eq!(config.marker(), &b"-- Table structure for table"[..]);
    /// # Ok::<(), sqlsplit::SplitError>(())
    /// ```
    pub fn new(marker: impl Into<Bytes>) -> Result<Self, SplitError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(SplitError::InvalidConfig {
                message: "marker must be non-empty",
            });
        }
        Ok(Self {
            marker,
            ..Self::default()
        })
    }

    /// The classic mysqldump configuration: the table-structure marker plus
    /// framing that disables constraint enforcement while each split file
    /// loads and re-enables it afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlsplit::SplitConfig;
    ///
    /// let config = SplitConfig::mysql_dump();
    /// assert!(!config.prologue().is_empty());
    /// assert!(!config.epilogue().is_empty());
    /// ```
    pub fn mysql_dump() -> Self {
        Self::default()
            .with_prologue(MYSQL_DUMP_PROLOGUE)
            .with_epilogue(MYSQL_DUMP_EPILOGUE)
    }

    /// Sets the marker.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`SplitConfig::validate`] to check that the marker is non-empty.
    pub fn with_marker(mut self, marker: impl Into<Bytes>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Sets the prologue written after each sink opens.
    pub fn with_prologue(mut self, prologue: impl Into<Bytes>) -> Self {
        self.prologue = prologue.into();
        self
    }

    /// Sets the epilogue written before each sink closes.
    pub fn with_epilogue(mut self, epilogue: impl Into<Bytes>) -> Self {
        self.epilogue = epilogue.into();
        self
    }

    /// Sets the read size for reader-driven runs.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`SplitConfig::validate`] to check that the size is non-zero.
    pub fn with_read_size(mut self, size: usize) -> Self {
        self.read_size = size;
        self
    }

    /// Sets the hash configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the marker bytes.
    pub fn marker(&self) -> &Bytes {
        &self.marker
    }

    /// Returns the prologue bytes.
    pub fn prologue(&self) -> &Bytes {
        &self.prologue
    }

    /// Returns the epilogue bytes.
    pub fn epilogue(&self) -> &Bytes {
        &self.epilogue
    }

    /// Returns the read size for reader-driven runs.
    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlsplit::SplitConfig;
    ///
    /// let config = SplitConfig::default().with_marker("");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.marker.is_empty() {
            return Err(SplitError::InvalidConfig {
                message: "marker must be non-empty",
            });
        }
        if self.read_size == 0 {
            return Err(SplitError::InvalidConfig {
                message: "read_size must be non-zero",
            });
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            marker: Bytes::from_static(DEFAULT_MARKER.as_bytes()),
            prologue: Bytes::new(),
            epilogue: Bytes::new(),
            read_size: DEFAULT_READ_SIZE,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for segment hashing behavior.
///
/// `HashConfig` controls whether a BLAKE3 hash of each segment's content
/// (framing excluded) is computed while the segment streams through the
/// writer. Hashing is enabled by default.
///
/// # Example
///
/// ```
/// use sqlsplit::HashConfig;
///
/// let config = HashConfig::enabled();
/// let config = HashConfig::disabled();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes for segments.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.marker(), DEFAULT_MARKER.as_bytes());
        assert!(config.prologue().is_empty());
        assert!(config.epilogue().is_empty());
        assert_eq!(config.read_size(), DEFAULT_READ_SIZE);
    }

    #[test]
    fn test_empty_marker_rejected() {
        assert!(SplitConfig::new("").is_err());
        assert!(SplitConfig::default().with_marker("").validate().is_err());
    }

    #[test]
    fn test_zero_read_size_rejected() {
        let config = SplitConfig::default().with_read_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SplitConfig::default()
            .with_marker("CREATE TABLE")
            .with_prologue("BEGIN;\n")
            .with_epilogue("COMMIT;\n")
            .with_read_size(1024);

        assert_eq!(config.marker(), &b"CREATE TABLE"[..]);
        assert_eq!(config.prologue(), &b"BEGIN;\n"[..]);
        assert_eq!(config.epilogue(), &b"COMMIT;\n"[..]);
        assert_eq!(config.read_size(), 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mysql_dump_preset() {
        let config = SplitConfig::mysql_dump();
        assert_eq!(config.marker(), DEFAULT_MARKER.as_bytes());
        assert_eq!(config.prologue(), MYSQL_DUMP_PROLOGUE.as_bytes());
        assert_eq!(config.epilogue(), MYSQL_DUMP_EPILOGUE.as_bytes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hash_config() {
        let config = HashConfig::default();
        assert!(config.enabled);

        let config = HashConfig::disabled();
        assert!(!config.enabled);
    }
}

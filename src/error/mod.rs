//! Error types for sqlsplit.

use std::fmt;

/// Errors that can occur while splitting a dump.
///
/// Sink failures carry the sequence number of the affected sink and the
/// stream position at the time of failure, so a caller can decide whether
/// the run is worth retrying. Sinks that were already closed successfully
/// are never rolled back.
#[derive(Debug)]
pub enum SplitError {
    /// The input source failed mid-read. Distinct from clean end of input,
    /// which is a zero-length read.
    Input(std::io::Error),

    /// A new output sink could not be created.
    SinkOpen {
        /// Sequence number of the sink that could not be opened.
        seq: u32,
        /// Stream position at the time of failure.
        position: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A write to the currently open sink failed.
    SinkWrite {
        /// Sequence number of the affected sink.
        seq: u32,
        /// Stream position of the first byte of the failed write.
        position: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The run was cancelled through an [`AbortSignal`](crate::AbortSignal).
    Aborted {
        /// Stream position at which the run stopped.
        position: u64,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Input(e) => write!(f, "input read error: {}", e),
            SplitError::SinkOpen {
                seq,
                position,
                source,
            } => {
                write!(
                    f,
                    "cannot open sink {} at position {}: {}",
                    seq, position, source
                )
            }
            SplitError::SinkWrite {
                seq,
                position,
                source,
            } => {
                write!(
                    f,
                    "cannot write to sink {} at position {}: {}",
                    seq, position, source
                )
            }
            SplitError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            SplitError::Aborted { position } => {
                write!(f, "aborted at position {}", position)
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Input(e) => Some(e),
            SplitError::SinkOpen { source, .. } => Some(source),
            SplitError::SinkWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Only input reads convert implicitly; sink paths build their variants
// explicitly so a stray `?` can never mislabel a sink failure.
impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        SplitError::Input(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: SplitError = io_err.into();
        matches!(err, SplitError::Input(_));
    }

    #[test]
    fn test_display_carries_context() {
        let err = SplitError::SinkWrite {
            seq: 3,
            position: 4096,
            source: std::io::Error::other("disk full"),
        };
        let s = err.to_string();
        assert!(s.contains("sink 3"));
        assert!(s.contains("position 4096"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = SplitError::SinkOpen {
            seq: 0,
            position: 0,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());

        let err = SplitError::Aborted { position: 10 };
        assert!(err.source().is_none());
    }
}

//! Error types for the container and import layer.

use std::fmt;
use std::io;

/// Errors from image container construction and access.
///
/// Payloads carry pre-rendered text so the enum stays non-generic over the
/// domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The container was given a domain with inverted corners.
    InvalidDomain {
        /// Rendering of the domain's corners.
        domain: String,
    },
    /// A write addressed a point outside the container's domain.
    PointOutsideDomain {
        /// Rendering of the offending point.
        point: String,
        /// Rendering of the domain's corners.
        domain: String,
    },
    /// A raw value buffer did not match the domain's size.
    LengthMismatch {
        /// `domain.size()`.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain } => {
                write!(f, "cannot build an image over invalid domain {domain}")
            }
            Self::PointOutsideDomain { point, domain } => {
                write!(f, "point {point} not in image domain {domain}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "value buffer holds {got} values, domain has {expected} points")
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// Errors from the raw volume importer.
///
/// This is the explicit result boundary of the reader collaborator:
/// format-level failures surface here and never reach the domain or
/// iterator contracts.
#[derive(Debug)]
pub enum ImportError {
    /// The extents metadata describes an invalid (inverted) box.
    InvalidExtents {
        /// Rendering of the box the extents produced.
        domain: String,
    },
    /// The sample stream ended before the domain was filled.
    Truncated {
        /// Samples the domain requires.
        expected: usize,
        /// Samples actually read.
        got: usize,
    },
    /// The sample stream continued past the last point of the domain.
    TrailingData {
        /// Samples the domain requires.
        expected: usize,
    },
    /// An I/O failure from the underlying reader.
    Io(io::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtents { domain } => {
                write!(f, "extents metadata produced invalid domain {domain}")
            }
            Self::Truncated { expected, got } => {
                write!(f, "sample stream truncated: read {got} of {expected} samples")
            }
            Self::TrailingData { expected } => {
                write!(f, "sample stream continues past the {expected} samples the domain holds")
            }
            Self::Io(e) => write!(f, "i/o failure while importing: {e}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_error_chains_io_source() {
        use std::error::Error;
        let e = ImportError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert!(e.source().is_some());
        assert!(e.to_string().contains("disk on fire"));
    }

    #[test]
    fn image_error_display() {
        let e = ImageError::LengthMismatch {
            expected: 162,
            got: 100,
        };
        assert_eq!(
            e.to_string(),
            "value buffer holds 100 values, domain has 162 points"
        );
    }
}

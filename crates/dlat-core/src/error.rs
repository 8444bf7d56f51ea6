//! Error types surfaced at the domain boundary.

use std::fmt;

/// Errors arising from domain queries and iterator construction.
///
/// Payloads carry pre-rendered text so the enum stays non-generic over the
/// scalar type and dimension of the offending values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A point violated a membership precondition, e.g. a span anchor
    /// outside its domain.
    PointOutsideDomain {
        /// Rendering of the offending point.
        point: String,
        /// Rendering of the domain's corners.
        domain: String,
    },
    /// An axis index was not in `[0, DIM)`.
    AxisOutOfRange {
        /// The offending axis.
        axis: usize,
        /// Dimension count of the space.
        dim: usize,
    },
    /// An operation that requires a valid domain was given an invalid one
    /// (some lower coordinate exceeds the matching upper coordinate).
    InvalidDomain {
        /// Rendering of the domain's corners.
        domain: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideDomain { point, domain } => {
                write!(f, "point {point} not in domain {domain}")
            }
            Self::AxisOutOfRange { axis, dim } => {
                write!(f, "axis {axis} out of range for a {dim}-dimensional space")
            }
            Self::InvalidDomain { domain } => {
                write!(f, "invalid domain {domain}: lower corner exceeds upper corner")
            }
        }
    }
}

impl std::error::Error for DomainError {}

//! Axis-aligned box domains and their iteration protocols.
//!
//! This crate defines [`BoxDomain`] — the set of all lattice points between
//! a lower and an upper corner, inclusive — together with the two cursors
//! every algorithm above it traverses with:
//!
//! - [`FullIter`]: every point of the domain, lexicographically, axis 0
//!   varying fastest
//! - [`SpanIter`]: a single-axis sweep from an anchor point up to the
//!   domain's upper bound on that axis
//!
//! The [`Domain`] trait is the capability contract consumed by containers
//! and readers built on top of the kernel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod box_domain;
pub mod domain;
pub mod full_iter;
pub mod span_iter;

#[cfg(test)]
pub(crate) mod compliance;

pub use box_domain::BoxDomain;
pub use domain::{Domain, PointOf};
pub use full_iter::FullIter;
pub use span_iter::SpanIter;

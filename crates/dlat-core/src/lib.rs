//! Core coordinate types for the dlat digital lattice kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! compile-time coordinate machinery everything else is built on:
//!
//! - [`Scalar`]: the integer coordinate type bound
//! - [`Point`]: an immutable `N`-tuple of coordinates
//! - [`Space`] / [`SpaceND`]: the type-level description of a coordinate
//!   space (scalar type + dimension count)
//! - [`DomainError`]: failures surfaced at the domain boundary

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;
pub mod scalar;
pub mod space;

pub use error::DomainError;
pub use point::Point;
pub use scalar::Scalar;
pub use space::{Space, SpaceND};

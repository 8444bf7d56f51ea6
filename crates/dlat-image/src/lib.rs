//! Image containers and import collaborators built on the domain contract.
//!
//! Everything here is generic over [`Domain`](dlat_domain::Domain) and
//! touches only its public capability surface: bounds, membership, size,
//! rank, and full iteration. The kernel's iterator internals never leak
//! into this layer.
//!
//! - [`ImageVec`]: flat-vector value storage keyed by domain rank
//! - [`ValueCast`]: the unary value-casting functor seam, with
//!   [`CastValue`] and [`LinearRescale`] impls
//! - [`import_raw`]: populate an image from extents metadata plus a raw
//!   sample stream, with an explicit error-kind boundary ([`ImportError`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod functor;
pub mod image;
pub mod reader;

pub use error::{ImageError, ImportError};
pub use functor::{CastValue, LinearRescale, ValueCast};
pub use image::ImageVec;
pub use reader::{import_raw, RawVolume};

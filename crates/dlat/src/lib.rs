//! dlat: dimension-generic digital lattice domains, iterators, and images.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! dlat sub-crates. For most users, adding `dlat` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dlat::prelude::*;
//!
//! // A 4D box domain between two corners, inclusive.
//! let domain = BoxDomain::new(Point::new([1, 1, 1, 1]), Point::new([3, 6, 3, 3]));
//! assert!(domain.is_valid());
//! assert_eq!(domain.size(), 162);
//!
//! // Full traversal: every point exactly once, axis 0 fastest.
//! assert_eq!(domain.points().count(), 162);
//!
//! // Span traversal: sweep axis 1 from an interior anchor to the
//! // domain's upper bound on that axis.
//! let anchor = Point::new([1, 2, 1, 1]);
//! let row: Vec<_> = domain.span(anchor, 1).unwrap().collect();
//! assert_eq!(row.len(), 5);
//! assert_eq!(row[0], anchor);
//! assert_eq!(row[4], Point::new([1, 6, 1, 1]));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dlat-core` | `Scalar`, `Point`, `SpaceND`, `DomainError` |
//! | [`domain`] | `dlat-domain` | `BoxDomain`, `FullIter`, `SpanIter`, the `Domain` trait |
//! | [`image`] | `dlat-image` | `ImageVec`, cast functors, raw volume import |
//!
//! The [`z2`] and [`z3`] modules alias the everyday `i32` spaces.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core coordinate types (re-export of `dlat-core`).
pub mod types {
    pub use dlat_core::*;
}

/// Box domains and iterators (re-export of `dlat-domain`).
pub mod domain {
    pub use dlat_domain::*;
}

/// Image containers and import (re-export of `dlat-image`).
pub mod image {
    pub use dlat_image::*;
}

/// The common digital plane: `i32` coordinates, 2 dimensions.
pub mod z2 {
    /// The 2D space over `i32`.
    pub type Space = dlat_core::SpaceND<i32, 2>;
    /// A 2D point.
    pub type Point = dlat_core::Point<i32, 2>;
    /// A 2D box domain.
    pub type Domain = dlat_domain::BoxDomain<i32, 2>;
}

/// The common digital volume: `i32` coordinates, 3 dimensions.
pub mod z3 {
    /// The 3D space over `i32`.
    pub type Space = dlat_core::SpaceND<i32, 3>;
    /// A 3D point.
    pub type Point = dlat_core::Point<i32, 3>;
    /// A 3D box domain.
    pub type Domain = dlat_domain::BoxDomain<i32, 3>;
}

/// Everything most users need, in one import.
pub mod prelude {
    pub use dlat_core::{DomainError, Point, Scalar, Space, SpaceND};
    pub use dlat_domain::{BoxDomain, Domain, FullIter, PointOf, SpanIter};
    pub use dlat_image::{
        import_raw, CastValue, ImageError, ImageVec, ImportError, LinearRescale, RawVolume,
        ValueCast,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn facade_wires_the_layers_together() {
        let volume = RawVolume {
            lower: crate::z2::Point::new([0, 0]),
            upper: crate::z2::Point::new([1, 0]),
        };
        let bytes: Vec<u8> = [7i16, 8].iter().flat_map(|s| s.to_le_bytes()).collect();
        let img = import_raw::<_, 2, i32, _, _>(&volume, bytes.as_slice(), &CastValue).unwrap();
        assert_eq!(img.value(&Point::new([1, 0])), &8);
        assert_eq!(img.domain().size(), 2);
    }
}

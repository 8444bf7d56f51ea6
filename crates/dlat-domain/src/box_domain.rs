//! The axis-aligned box domain.

use std::fmt;

use dlat_core::{DomainError, Point, Scalar, SpaceND};

use crate::domain::Domain;
use crate::full_iter::FullIter;
use crate::span_iter::SpanIter;

/// An axis-aligned box of lattice points: every point `p` with
/// `lower[i] <= p[i] <= upper[i]` on all axes.
///
/// Construction always succeeds; a corner pair with `lower[i] > upper[i]`
/// on some axis produces a domain with [`is_valid`](BoxDomain::is_valid)
/// `== false`. Validity is checked once, at the boundary, by whoever is
/// about to iterate — traversing an invalid domain is a caller bug, not a
/// runtime condition the iterators re-check on every step.
///
/// A valid domain is never empty: a degenerate axis with
/// `lower[i] == upper[i]` contributes extent 1, not 0.
///
/// The domain is immutable after construction and holds nothing but its
/// two corner points, so it is `Copy` and freely shared across threads;
/// every cursor obtained from it owns its own state.
///
/// # Examples
///
/// ```
/// use dlat_core::Point;
/// use dlat_domain::BoxDomain;
///
/// let d = BoxDomain::new(Point::new([1, 1]), Point::new([3, 2]));
/// assert!(d.is_valid());
/// assert_eq!(d.size(), 6);
/// assert!(d.is_inside(&Point::new([2, 2])));
/// assert!(!d.is_inside(&Point::new([4, 2])));
/// assert_eq!(d.points().count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxDomain<T: Scalar, const N: usize> {
    lower: Point<T, N>,
    upper: Point<T, N>,
}

impl<T: Scalar, const N: usize> BoxDomain<T, N> {
    /// Build the box spanned by two corner points.
    ///
    /// Never fails; check [`is_valid`](BoxDomain::is_valid) before
    /// iterating if the corners come from untrusted arithmetic.
    pub fn new(lower: Point<T, N>, upper: Point<T, N>) -> Self {
        Self { lower, upper }
    }

    /// The lower corner.
    pub fn lower_bound(&self) -> Point<T, N> {
        self.lower
    }

    /// The upper corner.
    pub fn upper_bound(&self) -> Point<T, N> {
        self.upper
    }

    /// True iff `lower[i] <= upper[i]` on every axis.
    pub fn is_valid(&self) -> bool {
        self.lower.le(&self.upper)
    }

    /// True iff `p` lies between the corners, inclusive, on every axis.
    pub fn is_inside(&self, p: &Point<T, N>) -> bool {
        self.lower.le(p) && p.le(&self.upper)
    }

    /// Number of lattice values on `axis`, `upper[axis] - lower[axis] + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn extent(&self, axis: usize) -> usize {
        T::extent(self.lower[axis], self.upper[axis])
    }

    /// Number of points in the domain: the product of all axis extents.
    ///
    /// At least 1 for a valid domain. Defined only for valid domains;
    /// debug builds assert validity and release builds return 0.
    pub fn size(&self) -> usize {
        debug_assert!(self.is_valid(), "size() on invalid domain {self}");
        (0..N).map(|axis| self.extent(axis)).product()
    }

    /// Cursor over every point of the domain, lexicographically with
    /// axis 0 fastest. See [`FullIter`] for the order contract.
    ///
    /// Each call returns an independent cursor positioned at the lower
    /// corner. Iterating an invalid domain is a contract violation; debug
    /// builds assert, release builds yield nothing.
    pub fn points(&self) -> FullIter<T, N> {
        debug_assert!(self.is_valid(), "points() on invalid domain {self}");
        FullIter::new(self.lower, self.upper)
    }

    /// Cursor sweeping `axis` from `anchor[axis]` up to the domain's upper
    /// bound on that axis, all other coordinates held at the anchor's.
    ///
    /// Fails fast with [`DomainError::PointOutsideDomain`] if the anchor is
    /// not inside the domain, and [`DomainError::AxisOutOfRange`] if
    /// `axis >= N`. Clamping silently instead would mask caller bugs in
    /// the sweep-based algorithms above this kernel.
    pub fn span(
        &self,
        anchor: Point<T, N>,
        axis: usize,
    ) -> Result<SpanIter<T, N>, DomainError> {
        if axis >= N {
            return Err(DomainError::AxisOutOfRange { axis, dim: N });
        }
        if !self.is_inside(&anchor) {
            return Err(DomainError::PointOutsideDomain {
                point: anchor.to_string(),
                domain: self.to_string(),
            });
        }
        Ok(SpanIter::new(anchor, axis, self.upper[axis]))
    }
}

impl<T: Scalar, const N: usize> fmt::Display for BoxDomain<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]^{}", self.lower, self.upper, N)
    }
}

impl<T: Scalar, const N: usize> Domain for BoxDomain<T, N> {
    type Space = SpaceND<T, N>;
    type Iter<'a>
        = FullIter<T, N>
    where
        Self: 'a;

    fn lower_bound(&self) -> Point<T, N> {
        self.lower
    }

    fn upper_bound(&self) -> Point<T, N> {
        self.upper
    }

    fn is_valid(&self) -> bool {
        BoxDomain::is_valid(self)
    }

    fn is_inside(&self, p: &Point<T, N>) -> bool {
        BoxDomain::is_inside(self, p)
    }

    fn size(&self) -> usize {
        BoxDomain::size(self)
    }

    fn points(&self) -> FullIter<T, N> {
        BoxDomain::points(self)
    }

    fn rank(&self, p: &Point<T, N>) -> Option<usize> {
        if !self.is_inside(p) {
            return None;
        }
        // Axis 0 fastest: stride grows by the extent of each faster axis.
        let mut rank = 0;
        let mut stride = 1;
        for axis in 0..N {
            rank += p[axis].offset_from(self.lower[axis]) * stride;
            stride *= self.extent(axis);
        }
        Some(rank)
    }
}

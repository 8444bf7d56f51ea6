//! The domain capability trait consumed by containers and readers.

use std::fmt;

use dlat_core::Space;

/// The point type of a [`Domain`], for signatures generic over `D`.
pub type PointOf<D> = <<D as Domain>::Space as Space>::Point;

/// Compile-time contract for "something an image container can be built
/// on": bounded, membership-queryable, sized, and fully traversable.
///
/// This is the seam between the kernel and its collaborators. A format
/// reader or container is generic over `D: Domain` and touches nothing but
/// this trait — never an iterator's internals, never a concrete domain's
/// fields. [`BoxDomain`](crate::BoxDomain) is the canonical implementor.
pub trait Domain: Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The coordinate space this domain lives in.
    type Space: Space;

    /// The full-traversal cursor type.
    type Iter<'a>: Iterator<Item = <Self::Space as Space>::Point>
    where
        Self: 'a;

    /// The lower corner.
    fn lower_bound(&self) -> <Self::Space as Space>::Point;

    /// The upper corner.
    fn upper_bound(&self) -> <Self::Space as Space>::Point;

    /// True iff the domain may be traversed at all.
    fn is_valid(&self) -> bool;

    /// Membership test for `p`.
    fn is_inside(&self, p: &<Self::Space as Space>::Point) -> bool;

    /// Total number of points; at least 1 for a valid domain.
    fn size(&self) -> usize;

    /// Independent cursor over every point, in the domain's canonical
    /// deterministic order. Two cursors over the same domain yield the
    /// same sequence.
    fn points(&self) -> Self::Iter<'_>;

    /// Position of `p` in the canonical order, or `None` if outside.
    ///
    /// `points().nth(rank)` yields `p` back. Containers use this for O(1)
    /// linear indexing into flat storage.
    fn rank(&self, p: &<Self::Space as Space>::Point) -> Option<usize>;
}

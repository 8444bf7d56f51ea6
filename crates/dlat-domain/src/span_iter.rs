//! Single-axis span traversal anchored at an interior point.

use std::iter::FusedIterator;

use dlat_core::{Point, Scalar};

/// Cursor sweeping one coordinate of an anchor point up to the domain's
/// upper bound on that axis.
///
/// Every yielded point equals the anchor on all other axes; the swept
/// coordinate takes the values `anchor[axis], anchor[axis] + 1, …,
/// upper[axis]` in increasing order. The sweep starts at the anchor's own
/// coordinate — not the domain's lower bound — so an algorithm can resume
/// a row or column from an arbitrary interior point.
///
/// The end state is the exhausted cursor: conceptually the position one
/// past `upper[axis]`, represented as `None` so an upper bound at the
/// scalar's maximum cannot overflow.
///
/// Two sweeps of the same axis from the same anchor compare equal iff
/// both are ended or both sit at the same scalar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanIter<T: Scalar, const N: usize> {
    anchor: Point<T, N>,
    axis: usize,
    current: Option<T>,
    hi: T,
}

impl<T: Scalar, const N: usize> SpanIter<T, N> {
    /// Sweep of `axis` from `anchor[axis]` to `hi`, inclusive.
    ///
    /// Membership of the anchor (and `anchor[axis] <= hi` in particular)
    /// is the caller's responsibility; `BoxDomain::span` checks it.
    pub(crate) fn new(anchor: Point<T, N>, axis: usize, hi: T) -> Self {
        Self {
            anchor,
            axis,
            current: Some(anchor.coord(axis)),
            hi,
        }
    }

    /// The fixed reference point this sweep started from.
    pub fn anchor(&self) -> Point<T, N> {
        self.anchor
    }

    /// The axis being swept.
    pub fn axis(&self) -> usize {
        self.axis
    }
}

impl<T: Scalar, const N: usize> Iterator for SpanIter<T, N> {
    type Item = Point<T, N>;

    fn next(&mut self) -> Option<Point<T, N>> {
        let v = self.current?;
        self.current = if v < self.hi { Some(v.succ()) } else { None };
        Some(self.anchor.with_coord(self.axis, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.current {
            Some(v) => T::extent(v, self.hi),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<T: Scalar, const N: usize> ExactSizeIterator for SpanIter<T, N> {}

impl<T: Scalar, const N: usize> FusedIterator for SpanIter<T, N> {}

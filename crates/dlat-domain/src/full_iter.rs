//! Full lexicographic traversal of a box domain.

use std::iter::FusedIterator;

use dlat_core::{Point, Scalar};

/// Cursor enumerating every point of a box domain exactly once.
///
/// The order is lexicographic with **axis 0 varying fastest**: the cursor
/// starts at the lower corner, steps axis 0 until it passes the upper bound
/// on that axis, then resets axis 0 to its lower bound and carries into
/// axis 1, and so on. Overflowing the slowest axis ends the traversal.
/// Downstream storage layouts (see `dlat-image`) linearize in the same
/// order, so the two agree by construction.
///
/// The ended state is the exhausted cursor (`next()` returned `None`);
/// there is no separate sentinel value. Each cursor owns its state, so any
/// number of them can traverse the same domain independently, and calling
/// `BoxDomain::points` again restarts from the lower corner.
///
/// Two cursors over the same domain compare equal iff both are ended or
/// both sit at the same point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullIter<T: Scalar, const N: usize> {
    lower: Point<T, N>,
    upper: Point<T, N>,
    current: Option<Point<T, N>>,
    remaining: usize,
}

impl<T: Scalar, const N: usize> FullIter<T, N> {
    /// Cursor over all points of `[lower, upper]`, positioned at `lower`.
    ///
    /// An inverted corner pair produces an immediately-exhausted cursor;
    /// callers are expected to have checked validity already.
    pub(crate) fn new(lower: Point<T, N>, upper: Point<T, N>) -> Self {
        let valid = lower.le(&upper);
        let remaining = if valid {
            (0..N).map(|i| T::extent(lower[i], upper[i])).product()
        } else {
            0
        };
        Self {
            lower,
            upper,
            current: if valid { Some(lower) } else { None },
            remaining,
        }
    }
}

impl<T: Scalar, const N: usize> Iterator for FullIter<T, N> {
    type Item = Point<T, N>;

    fn next(&mut self) -> Option<Point<T, N>> {
        let ret = self.current?;
        self.remaining -= 1;
        // Lexicographic successor: step the fastest axis, carrying a reset
        // into the next axis each time an axis passes its upper bound.
        let mut next = ret;
        let mut ended = true;
        for axis in 0..N {
            if next[axis] < self.upper[axis] {
                next = next.with_coord(axis, next[axis].succ());
                ended = false;
                break;
            }
            next = next.with_coord(axis, self.lower[axis]);
        }
        self.current = if ended { None } else { Some(next) };
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Scalar, const N: usize> ExactSizeIterator for FullIter<T, N> {}

impl<T: Scalar, const N: usize> FusedIterator for FullIter<T, N> {}

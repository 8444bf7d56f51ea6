//! Immutable lattice points.

use std::fmt;
use std::ops::Index;

use crate::scalar::Scalar;

/// An immutable `N`-tuple of integer coordinates.
///
/// `Point` is the value type for domain corners and iterator cursors alike.
/// Operations never mutate: arithmetic returns a fresh `Point`, so a point
/// yielded by an iterator can never be altered retroactively.
///
/// Arithmetic and ordering are explicitly named methods rather than
/// operator overloads. In particular there is no `PartialOrd` impl: the
/// lattice order is the component-wise partial order ([`le`](Point::le)),
/// and a derived lexicographic `<=` would silently disagree with it.
///
/// # Examples
///
/// ```
/// use dlat_core::Point;
///
/// let p = Point::new([1, 2, 3]);
/// let q = Point::new([3, 2, 1]);
/// assert_eq!(p.add(q), Point::new([4, 4, 4]));
/// assert_eq!(p[0], 1);
/// assert!(p.le(&Point::new([1, 5, 3])));
/// assert!(!q.le(&p));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point<T: Scalar, const N: usize> {
    coords: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    /// Build a point from an ordered coordinate array.
    ///
    /// This is the only construction path; the dimension is checked by the
    /// type system, not at runtime.
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// The point with every coordinate equal to `v`.
    pub fn diagonal(v: T) -> Self {
        Self { coords: [v; N] }
    }

    /// Dimension count, fixed at compile time.
    pub const fn dim() -> usize {
        N
    }

    /// Coordinate on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn coord(&self, axis: usize) -> T {
        self.coords[axis]
    }

    /// All coordinates, in axis order.
    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    /// A copy of this point with the coordinate on `axis` replaced by `v`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn with_coord(&self, axis: usize, v: T) -> Self {
        let mut coords = self.coords;
        coords[axis] = v;
        Self { coords }
    }

    /// Component-wise addition.
    pub fn add(self, rhs: Self) -> Self {
        let mut coords = self.coords;
        for (c, r) in coords.iter_mut().zip(rhs.coords.iter()) {
            *c = c.add(*r);
        }
        Self { coords }
    }

    /// Component-wise subtraction.
    pub fn sub(self, rhs: Self) -> Self {
        let mut coords = self.coords;
        for (c, r) in coords.iter_mut().zip(rhs.coords.iter()) {
            *c = c.sub(*r);
        }
        Self { coords }
    }

    /// Component-wise `<=` — the lattice partial order.
    ///
    /// `a.le(&b)` and `b.le(&a)` can both be false: points that differ in
    /// opposite directions on different axes are incomparable.
    pub fn le(&self, rhs: &Self) -> bool {
        self.coords.iter().zip(rhs.coords.iter()).all(|(a, b)| a <= b)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::new(coords)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.coords[axis]
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_and_sub_are_componentwise() {
        let p = Point::new([1, -2, 3]);
        let q = Point::new([10, 20, 30]);
        assert_eq!(p.add(q), Point::new([11, 18, 33]));
        assert_eq!(q.sub(p), Point::new([9, 22, 27]));
    }

    #[test]
    fn le_is_componentwise_not_lexicographic() {
        let p = Point::new([1, 5]);
        let q = Point::new([2, 3]);
        // Lexicographically p < q, but neither dominates the other.
        assert!(!p.le(&q));
        assert!(!q.le(&p));
        assert!(p.le(&p));
        assert!(p.le(&Point::new([1, 5])));
    }

    #[test]
    fn with_coord_replaces_exactly_one_axis() {
        let p = Point::new([1, 2, 1, 1]);
        assert_eq!(p.with_coord(1, 6), Point::new([1, 6, 1, 1]));
        // The original is untouched.
        assert_eq!(p, Point::new([1, 2, 1, 1]));
    }

    #[test]
    fn diagonal_fills_every_axis() {
        assert_eq!(Point::<i32, 4>::diagonal(7), Point::new([7, 7, 7, 7]));
    }

    #[test]
    fn display_renders_tuple() {
        let p = Point::new([1, 2, 1, 1]);
        assert_eq!(p.to_string(), "(1, 2, 1, 1)");
        let q = Point::new([-4i64]);
        assert_eq!(q.to_string(), "(-4)");
    }

    proptest! {
        #[test]
        fn add_then_sub_round_trips(
            a in proptest::array::uniform3(-1000i32..1000),
            b in proptest::array::uniform3(-1000i32..1000),
        ) {
            let p = Point::new(a);
            let q = Point::new(b);
            prop_assert_eq!(p.add(q).sub(q), p);
        }

        #[test]
        fn le_is_reflexive_and_transitive(
            a in proptest::array::uniform3(-50i32..50),
            d1 in proptest::array::uniform3(0i32..10),
            d2 in proptest::array::uniform3(0i32..10),
        ) {
            let p = Point::new(a);
            let q = p.add(Point::new(d1));
            let r = q.add(Point::new(d2));
            prop_assert!(p.le(&p));
            prop_assert!(p.le(&q));
            prop_assert!(q.le(&r));
            prop_assert!(p.le(&r));
        }
    }
}

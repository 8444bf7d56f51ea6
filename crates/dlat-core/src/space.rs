//! Type-level coordinate space descriptions.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::point::Point;
use crate::scalar::Scalar;

/// Compile-time description of a coordinate space: which integer scalar the
/// coordinates use and how many dimensions there are.
///
/// A `Space` has no runtime state; it exists so that containers and
/// algorithms can be constrained on "the same space" and pull the point
/// type from a single source. [`SpaceND`] is the canonical implementor.
pub trait Space: Copy + Eq + Default + Send + Sync + 'static {
    /// The coordinate scalar type.
    type Scalar: Scalar;

    /// The point value type of this space.
    type Point: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Dimension count, fixed at compile time.
    const DIM: usize;
}

/// The standard `N`-dimensional digital space over scalar `T`.
///
/// A zero-sized marker: all information lives in the type parameters.
///
/// # Examples
///
/// ```
/// use dlat_core::{Point, Space, SpaceND};
///
/// type Z4 = SpaceND<i32, 4>;
/// assert_eq!(Z4::DIM, 4);
/// let p: <Z4 as Space>::Point = Point::new([1, 1, 1, 1]);
/// assert_eq!(p.coord(3), 1);
/// ```
pub struct SpaceND<T: Scalar, const N: usize> {
    _scalar: PhantomData<T>,
}

impl<T: Scalar, const N: usize> Space for SpaceND<T, N> {
    type Scalar = T;
    type Point = Point<T, N>;
    const DIM: usize = N;
}

// Manual impls: a derive would put a spurious `T: Clone`-style bound on the
// marker even though no `T` value is ever stored.
impl<T: Scalar, const N: usize> Clone for SpaceND<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, const N: usize> Copy for SpaceND<T, N> {}

impl<T: Scalar, const N: usize> PartialEq for SpaceND<T, N> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: Scalar, const N: usize> Eq for SpaceND<T, N> {}

impl<T: Scalar, const N: usize> Default for SpaceND<T, N> {
    fn default() -> Self {
        Self {
            _scalar: PhantomData,
        }
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for SpaceND<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpaceND<{}, {}>", std::any::type_name::<T>(), N)
    }
}

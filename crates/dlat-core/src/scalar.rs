//! The integer scalar bound for lattice coordinates.

use std::fmt;
use std::hash::Hash;

/// Bound on the coordinate scalar type of a lattice.
///
/// Implemented for the signed integer primitives. Everything a domain or
/// iterator needs from a coordinate is expressed here, so the rest of the
/// kernel never reaches for `as` casts or concrete integer types.
///
/// Counting helpers ([`extent`](Scalar::extent),
/// [`offset_from`](Scalar::offset_from)) widen through `i128` internally so
/// corner subtraction cannot overflow even for `i64` coordinates at the
/// extremes of their range.
pub trait Scalar:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity, also the lattice step.
    const ONE: Self;
    /// Smallest representable coordinate.
    const MIN: Self;
    /// Largest representable coordinate.
    const MAX: Self;

    /// Component addition. Wraps on overflow in release builds, like the
    /// underlying primitive.
    fn add(self, rhs: Self) -> Self;

    /// Component subtraction. Wraps on overflow in release builds, like the
    /// underlying primitive.
    fn sub(self, rhs: Self) -> Self;

    /// The next lattice value, `self + 1`.
    ///
    /// Callers must ensure `self < Self::MAX`.
    fn succ(self) -> Self;

    /// Number of lattice values in the closed interval `[lo, hi]`.
    ///
    /// Returns `0` when `hi < lo`. Never overflows: the count is computed
    /// in `i128`.
    fn extent(lo: Self, hi: Self) -> usize;

    /// Offset of `self` from `lo`, as an index.
    ///
    /// Callers must ensure `lo <= self`.
    fn offset_from(self, lo: Self) -> usize;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn succ(self) -> Self {
                debug_assert!(self < <$t>::MAX, "succ past {}::MAX", stringify!($t));
                self.wrapping_add(1)
            }

            fn extent(lo: Self, hi: Self) -> usize {
                if hi < lo {
                    0
                } else {
                    (hi as i128 - lo as i128 + 1) as usize
                }
            }

            fn offset_from(self, lo: Self) -> usize {
                debug_assert!(lo <= self, "offset_from with lo > self");
                (self as i128 - lo as i128) as usize
            }
        }
    )*};
}

impl_scalar!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_counts_closed_interval() {
        assert_eq!(<i32 as Scalar>::extent(1, 6), 6);
        assert_eq!(<i32 as Scalar>::extent(-3, 3), 7);
        assert_eq!(<i32 as Scalar>::extent(5, 5), 1);
    }

    #[test]
    fn extent_is_zero_for_inverted_interval() {
        assert_eq!(<i32 as Scalar>::extent(4, 2), 0);
    }

    #[test]
    fn extent_survives_full_range_i8() {
        assert_eq!(<i8 as Scalar>::extent(i8::MIN, i8::MAX), 256);
    }

    #[test]
    fn extent_survives_full_range_i64() {
        // 2^64 truncates to 0 in a u64; through i128 it saturates the
        // usize conversion semantics the platform gives us, but the
        // arithmetic itself must not panic.
        let _ = <i64 as Scalar>::extent(i64::MIN, -1);
        assert_eq!(<i64 as Scalar>::extent(i64::MAX - 2, i64::MAX), 3);
    }

    #[test]
    fn offset_from_matches_subtraction() {
        assert_eq!(7i32.offset_from(3), 4);
        assert_eq!((-2i32).offset_from(-5), 3);
        assert_eq!(0i16.offset_from(0), 0);
    }

    #[test]
    fn succ_steps_by_one() {
        assert_eq!(0i32.succ(), 1);
        assert_eq!((-1i64).succ(), 0);
    }
}

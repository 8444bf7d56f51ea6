//! Flat-vector image container parameterized by a domain.

use dlat_domain::{Domain, PointOf};

use crate::error::ImageError;

/// An image: one value of type `V` per point of a domain `D`.
///
/// Storage is a flat vector indexed by [`Domain::rank`], i.e. the domain's
/// canonical iteration order — for a `BoxDomain` that is lexicographic
/// with axis 0 fastest, so memory layout and `points()` agree by
/// construction.
///
/// The container owns an immutable domain and a mutable value buffer; it
/// never exposes or depends on iterator internals.
///
/// # Examples
///
/// ```
/// use dlat_core::Point;
/// use dlat_domain::BoxDomain;
/// use dlat_image::ImageVec;
///
/// let d = BoxDomain::new(Point::new([0, 0]), Point::new([2, 1]));
/// let mut img = ImageVec::new(d, 0u8).unwrap();
/// img.set(&Point::new([1, 1]), 9).unwrap();
/// assert_eq!(img.get(&Point::new([1, 1])), Some(&9));
/// assert_eq!(img.get(&Point::new([5, 5])), None);
/// ```
#[derive(Debug, Clone)]
pub struct ImageVec<D: Domain, V> {
    domain: D,
    data: Vec<V>,
}

impl<D: Domain, V> ImageVec<D, V> {
    /// Build an image over `domain` with every value set to `fill`.
    ///
    /// Returns [`ImageError::InvalidDomain`] if the domain is invalid —
    /// this is the boundary where validity gets checked, per the domain
    /// contract.
    pub fn new(domain: D, fill: V) -> Result<Self, ImageError>
    where
        V: Clone,
    {
        if !domain.is_valid() {
            return Err(ImageError::InvalidDomain {
                domain: domain.to_string(),
            });
        }
        let data = vec![fill; domain.size()];
        Ok(Self { domain, data })
    }

    /// Build an image from values already laid out in the domain's
    /// canonical iteration order.
    ///
    /// Returns [`ImageError::LengthMismatch`] if `data.len()` differs from
    /// `domain.size()`, and [`ImageError::InvalidDomain`] for an invalid
    /// domain.
    pub fn from_raw_vec(domain: D, data: Vec<V>) -> Result<Self, ImageError> {
        if !domain.is_valid() {
            return Err(ImageError::InvalidDomain {
                domain: domain.to_string(),
            });
        }
        if data.len() != domain.size() {
            return Err(ImageError::LengthMismatch {
                expected: domain.size(),
                got: data.len(),
            });
        }
        Ok(Self { domain, data })
    }

    /// The domain this image is defined over.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Number of stored values, equal to `domain().size()`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a valid domain holds at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value at `p`, or `None` if `p` is outside the domain.
    pub fn get(&self, p: &PointOf<D>) -> Option<&V> {
        self.domain.rank(p).map(|i| &self.data[i])
    }

    /// Value at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the domain; use [`get`](ImageVec::get)
    /// when membership is not already established.
    pub fn value(&self, p: &PointOf<D>) -> &V {
        match self.get(p) {
            Some(v) => v,
            None => panic!("point {:?} not in image domain {}", p, self.domain),
        }
    }

    /// Store `v` at `p`.
    ///
    /// Returns [`ImageError::PointOutsideDomain`] rather than clamping:
    /// silent clamping would mask caller bugs.
    pub fn set(&mut self, p: &PointOf<D>, v: V) -> Result<(), ImageError> {
        match self.domain.rank(p) {
            Some(i) => {
                self.data[i] = v;
                Ok(())
            }
            None => Err(ImageError::PointOutsideDomain {
                point: format!("{p}"),
                domain: self.domain.to_string(),
            }),
        }
    }

    /// Values in the domain's canonical iteration order.
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.data.iter()
    }

    /// `(point, value)` pairs in the domain's canonical iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (PointOf<D>, &V)> + '_ {
        self.domain.points().zip(self.data.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlat_core::Point;
    use dlat_domain::BoxDomain;

    fn image_3x2() -> ImageVec<BoxDomain<i32, 2>, u16> {
        let d = BoxDomain::new(Point::new([0, 0]), Point::new([2, 1]));
        ImageVec::new(d, 0u16).unwrap()
    }

    #[test]
    fn new_rejects_invalid_domain() {
        let d = BoxDomain::new(Point::new([2, 0]), Point::new([1, 1]));
        let err = ImageVec::new(d, 0u8).unwrap_err();
        assert!(matches!(err, ImageError::InvalidDomain { .. }));
    }

    #[test]
    fn storage_matches_iteration_order() {
        let d = BoxDomain::new(Point::new([0, 0]), Point::new([2, 1]));
        let img = ImageVec::from_raw_vec(d, vec![10u8, 11, 12, 13, 14, 15]).unwrap();
        let collected: Vec<u8> = img
            .domain()
            .points()
            .map(|p| *img.value(&p))
            .collect();
        assert_eq!(collected, vec![10, 11, 12, 13, 14, 15]);
        // Axis 0 fastest: (1, 0) is the second stored value.
        assert_eq!(img.value(&Point::new([1, 0])), &11);
        assert_eq!(img.value(&Point::new([0, 1])), &13);
    }

    #[test]
    fn from_raw_vec_rejects_wrong_length() {
        let d = BoxDomain::new(Point::new([0, 0]), Point::new([2, 1]));
        let err = ImageVec::from_raw_vec(d, vec![1u8, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ImageError::LengthMismatch {
                expected: 6,
                got: 3
            }
        );
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut img = image_3x2();
        img.set(&Point::new([2, 1]), 999).unwrap();
        assert_eq!(img.get(&Point::new([2, 1])), Some(&999));
        assert_eq!(img.len(), 6);
    }

    #[test]
    fn set_outside_domain_fails_fast() {
        let mut img = image_3x2();
        let err = img.set(&Point::new([3, 0]), 1).unwrap_err();
        assert!(matches!(err, ImageError::PointOutsideDomain { .. }));
    }

    #[test]
    #[should_panic(expected = "not in image domain")]
    fn value_panics_outside_domain() {
        let img = image_3x2();
        let _ = img.value(&Point::new([-1, 0]));
    }

    #[test]
    fn iter_pairs_points_with_values() {
        let mut img = image_3x2();
        img.set(&Point::new([0, 0]), 7).unwrap();
        let (first_p, first_v) = img.iter().next().unwrap();
        assert_eq!(first_p, Point::new([0, 0]));
        assert_eq!(*first_v, 7);
        assert_eq!(img.iter().count(), 6);
    }
}

//! Unary value-casting functors.

/// Unary functor casting a source sample into a stored image value.
///
/// This is the seam between raw sample types (what a reader decodes) and
/// the container's value type. Importers are generic over it, so rescaling
/// or thresholding policies stay out of the reader itself.
pub trait ValueCast<I, O> {
    /// Cast one sample.
    fn cast(&self, input: I) -> O;
}

/// The default functor: a plain lossless conversion through [`From`].
///
/// # Examples
///
/// ```
/// use dlat_image::{CastValue, ValueCast};
///
/// let f = CastValue;
/// let v: i32 = f.cast(-700i16);
/// assert_eq!(v, -700);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CastValue;

impl<I, O: From<I>> ValueCast<I, O> for CastValue {
    fn cast(&self, input: I) -> O {
        O::from(input)
    }
}

/// Window-rescale functor mapping a source interval onto `0..=255`.
///
/// Samples at or below `min` map to 0, at or above `max` to 255, and the
/// interval in between maps linearly. The classic use is collapsing a
/// signed radiodensity range into displayable grayscale.
///
/// # Examples
///
/// ```
/// use dlat_image::{LinearRescale, ValueCast};
///
/// let f = LinearRescale::new(-900, 530);
/// assert_eq!(ValueCast::<i16, u8>::cast(&f, -3000), 0);
/// assert_eq!(ValueCast::<i16, u8>::cast(&f, 530), 255);
/// assert_eq!(ValueCast::<i16, u8>::cast(&f, 3000), 255);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearRescale {
    min: i32,
    max: i32,
}

impl LinearRescale {
    /// Rescale window `[min, max]` onto `0..=255`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn new(min: i32, max: i32) -> Self {
        assert!(min < max, "rescale window must be non-degenerate");
        Self { min, max }
    }

    fn rescale(&self, v: i32) -> u8 {
        if v <= self.min {
            0
        } else if v >= self.max {
            255
        } else {
            let scale = 255.0 / (self.max - self.min) as f64;
            ((v - self.min) as f64 * scale) as u8
        }
    }
}

impl ValueCast<i16, u8> for LinearRescale {
    fn cast(&self, input: i16) -> u8 {
        self.rescale(i32::from(input))
    }
}

impl ValueCast<i32, u8> for LinearRescale {
    fn cast(&self, input: i32) -> u8 {
        self.rescale(input)
    }
}

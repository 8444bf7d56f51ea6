//! Raw volume import: extents metadata plus a sample stream in, image out.

use std::io::{self, Read};

use dlat_core::{Point, Scalar};
use dlat_domain::BoxDomain;

use crate::error::ImportError;
use crate::functor::ValueCast;
use crate::image::ImageVec;

/// Extents metadata for a raw volume, as decoded from some external
/// format's header: the box the samples cover.
///
/// The importer builds its domain purely from these corners. Parsing the
/// surrounding format (and its failures) is the caller's concern; by the
/// time a `RawVolume` exists the only things left to go wrong are the
/// extents themselves and the sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawVolume<T: Scalar, const N: usize> {
    /// Lower corner of the covered box (offset metadata).
    pub lower: Point<T, N>,
    /// Upper corner of the covered box (offset + size metadata).
    pub upper: Point<T, N>,
}

impl<T: Scalar, const N: usize> RawVolume<T, N> {
    /// The box domain described by the extents.
    pub fn domain(&self) -> BoxDomain<T, N> {
        BoxDomain::new(self.lower, self.upper)
    }
}

/// Import a raw volume: read one little-endian `i16` sample per domain
/// point, in the domain's full-iteration order, casting each through
/// `functor` into the container's value type.
///
/// Fails with [`ImportError::InvalidExtents`] before touching the stream
/// if the metadata describes an inverted box, [`ImportError::Truncated`] /
/// [`ImportError::TrailingData`] when the stream disagrees with the
/// domain's size, and [`ImportError::Io`] for transport failures.
///
/// # Examples
///
/// ```
/// use dlat_core::Point;
/// use dlat_image::{import_raw, CastValue, RawVolume};
///
/// let volume = RawVolume {
///     lower: Point::new([0, 0]),
///     upper: Point::new([1, 1]),
/// };
/// let samples: Vec<u8> = [5i16, -6, 7, -8]
///     .iter()
///     .flat_map(|s| s.to_le_bytes())
///     .collect();
/// let img = import_raw::<_, 2, i32, _, _>(&volume, samples.as_slice(), &CastValue).unwrap();
/// assert_eq!(img.value(&Point::new([1, 0])), &-6);
/// ```
pub fn import_raw<T, const N: usize, V, R, F>(
    volume: &RawVolume<T, N>,
    mut stream: R,
    functor: &F,
) -> Result<ImageVec<BoxDomain<T, N>, V>, ImportError>
where
    T: Scalar,
    R: Read,
    F: ValueCast<i16, V>,
{
    let domain = volume.domain();
    if !domain.is_valid() {
        return Err(ImportError::InvalidExtents {
            domain: domain.to_string(),
        });
    }

    let expected = domain.size();
    let mut data = Vec::with_capacity(expected);
    let mut buf = [0u8; 2];

    // One sample per point, in the same order from_raw_vec linearizes by.
    for (got, _point) in domain.points().enumerate() {
        match stream.read_exact(&mut buf) {
            Ok(()) => data.push(functor.cast(i16::from_le_bytes(buf))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(ImportError::Truncated { expected, got });
            }
            Err(e) => return Err(ImportError::Io(e)),
        }
    }

    let mut probe = [0u8; 1];
    match stream.read(&mut probe) {
        Ok(0) => {}
        Ok(_) => return Err(ImportError::TrailingData { expected }),
        Err(e) => return Err(ImportError::Io(e)),
    }

    match ImageVec::from_raw_vec(domain, data) {
        Ok(img) => Ok(img),
        // Validity and length were established above; surface any
        // inconsistency as stream corruption rather than panicking.
        Err(e) => Err(ImportError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            e.to_string(),
        ))),
    }
}

//! Domain contract compliance test helpers.
//!
//! These functions verify the iteration guarantees every `BoxDomain` must
//! satisfy, regardless of scalar type or dimension. Reused across the unit
//! test modules and the property tests.

use dlat_core::{Point, Scalar};
use indexmap::IndexSet;

use crate::box_domain::BoxDomain;

/// Assert the full-iteration contract on a valid domain:
/// exactly `size()` points, all inside, all distinct, restartable.
pub fn assert_full_iteration_contract<T: Scalar, const N: usize>(d: &BoxDomain<T, N>) {
    assert!(d.is_valid(), "compliance helper requires a valid domain");

    let first: Vec<Point<T, N>> = d.points().collect();
    assert_eq!(
        first.len(),
        d.size(),
        "full iteration of {d} yielded {} points, size() = {}",
        first.len(),
        d.size()
    );

    let distinct: IndexSet<Point<T, N>> = first.iter().copied().collect();
    assert_eq!(distinct.len(), first.len(), "duplicate point yielded by {d}");

    for p in &first {
        assert!(d.is_inside(p), "{d} yielded outside point {p}");
    }

    assert_eq!(first.first().copied(), Some(d.lower_bound()));
    assert_eq!(first.last().copied(), Some(d.upper_bound()));

    // Restartability: a fresh cursor reproduces the identical sequence.
    let second: Vec<Point<T, N>> = d.points().collect();
    assert_eq!(first, second, "re-running points() diverged on {d}");
}

/// Assert the span contract for an in-domain anchor and axis:
/// `upper[axis] - anchor[axis] + 1` points, the k-th equal to the anchor
/// except for coordinate `axis` at `anchor[axis] + k`.
pub fn assert_span_contract<T: Scalar, const N: usize>(
    d: &BoxDomain<T, N>,
    anchor: Point<T, N>,
    axis: usize,
) {
    assert!(d.is_inside(&anchor));

    let seq: Vec<Point<T, N>> = d
        .span(anchor, axis)
        .expect("span preconditions hold")
        .collect();

    let expected = T::extent(anchor.coord(axis), d.upper_bound().coord(axis));
    assert_eq!(seq.len(), expected, "span count mismatch on {d} axis {axis}");

    let mut v = anchor.coord(axis);
    for (k, p) in seq.iter().enumerate() {
        assert_eq!(
            *p,
            anchor.with_coord(axis, v),
            "span point {k} wrong on {d} axis {axis}"
        );
        if k + 1 < seq.len() {
            v = v.succ();
        }
    }
    assert_eq!(
        seq.last().map(|p| p.coord(axis)),
        Some(d.upper_bound().coord(axis)),
        "span did not end at the upper bound on {d} axis {axis}"
    );
}

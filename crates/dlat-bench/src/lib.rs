//! Benchmark profiles and fixtures for the dlat lattice kernel.
//!
//! Provides pre-built domains and deterministic point sets shared by the
//! criterion benches:
//!
//! - [`reference_domain_2d`]: 100x100 box (10K points)
//! - [`reference_domain_3d`]: 32x32x32 box (~33K points)
//! - [`probe_points_2d`]: deterministic pseudo-random membership probes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dlat_core::Point;
use dlat_domain::BoxDomain;

/// The reference 2D profile: a 100x100 box, 10K points.
pub fn reference_domain_2d() -> BoxDomain<i32, 2> {
    BoxDomain::new(Point::new([0, 0]), Point::new([99, 99]))
}

/// The reference 3D profile: a 32x32x32 box, 32768 points.
pub fn reference_domain_3d() -> BoxDomain<i32, 3> {
    BoxDomain::new(Point::new([0, 0, 0]), Point::new([31, 31, 31]))
}

/// Deterministic pseudo-random 2D probe points, roughly half inside the
/// reference domain and half outside.
///
/// Uses wrapping multiplications by large odd constants rather than an RNG
/// so runs are reproducible without a seed dependency.
pub fn probe_points_2d(n: usize) -> Vec<Point<i32, 2>> {
    let mut points = Vec::with_capacity(n);
    for i in 0u64..n as u64 {
        let x = (i.wrapping_mul(6364136223846793005) % 200) as i32 - 50;
        let y = (i.wrapping_mul(1442695040888963407) % 200) as i32 - 50;
        points.push(Point::new([x, y]));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_domains_have_expected_sizes() {
        assert_eq!(reference_domain_2d().size(), 10_000);
        assert_eq!(reference_domain_3d().size(), 32_768);
    }

    #[test]
    fn probe_points_are_deterministic() {
        assert_eq!(probe_points_2d(100), probe_points_2d(100));
        assert_eq!(probe_points_2d(100).len(), 100);
    }

    #[test]
    fn probe_points_mix_inside_and_outside() {
        let d = reference_domain_2d();
        let probes = probe_points_2d(1000);
        let inside = probes.iter().filter(|p| d.is_inside(p)).count();
        assert!(inside > 0 && inside < probes.len());
    }
}

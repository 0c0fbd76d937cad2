// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Biot-Savart Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Magnetostatic field of polyline current segments.
//!
//! Each segment is a chain of straight elements. The field of one
//! element is the exact finite-wire Biot-Savart expression in the
//! Hanson–Hirshman form, which stays well conditioned far from the
//! end-point singularities:
//!
//!   B = (μ₀ I / 4π) · (|a| + |b|) · (a × b) / (|a||b| (|a||b| + a·b))
//!
//! with a, b the vectors from the element end points to the field
//! point. Coordinates are mm, currents A, fields mT.

use coil_types::constants::{MU0_OVER_4PI_MT_MM, SEGMENT_EPS};
use coil_types::geometry::{Coil, Segment, Vec3};

/// Field [mT] of a single straight element from `p1` to `p2`.
///
/// Field points on the element axis between the end points make the
/// denominator vanish; such contributions are dropped rather than
/// returned as non-finite values.
pub fn element_field(p1: Vec3, p2: Vec3, current_a: f64, point: Vec3) -> Vec3 {
    let a = p1 - point;
    let b = p2 - point;
    let na = a.norm();
    let nb = b.norm();

    let denom = na * nb * (na * nb + a.dot(b));
    if denom < SEGMENT_EPS {
        return Vec3::ZERO;
    }

    a.cross(b) * (MU0_OVER_4PI_MT_MM * current_a * (na + nb) / denom)
}

/// Field [mT] of one segment: sum over its polyline elements.
pub fn segment_field(segment: &Segment, point: Vec3) -> Vec3 {
    let verts = segment.vertices();
    let mut b = Vec3::ZERO;
    for pair in verts.windows(2) {
        b = b + element_field(pair[0], pair[1], segment.current_a, point);
    }
    b
}

/// Superposed field [mT] of every segment in the coil.
pub fn coil_field(coil: &Coil, point: Vec3) -> Vec3 {
    let mut b = Vec3::ZERO;
    for segment in &coil.segments {
        b = b + segment_field(segment, point);
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Analytic field of a finite wire of half-length `t` at
    /// perpendicular distance `rho` from its midpoint [mT].
    fn finite_wire_mt(current: f64, rho: f64, t: f64) -> f64 {
        2.0 * MU0_OVER_4PI_MT_MM * current / rho * t / (t * t + rho * rho).sqrt()
    }

    #[test]
    fn test_element_matches_finite_wire_analytic() {
        let t = 120.0;
        let rho = 35.0;
        let current = 10.0;
        let b = element_field(
            Vec3::new(0.0, 0.0, -t),
            Vec3::new(0.0, 0.0, t),
            current,
            Vec3::new(rho, 0.0, 0.0),
        );
        let expected = finite_wire_mt(current, rho, t);
        assert!((b.x).abs() < 1e-15);
        assert!((b.z).abs() < 1e-15);
        assert!(
            (b.y - expected).abs() / expected < 1e-12,
            "got {}, expected {expected}",
            b.y
        );
    }

    #[test]
    fn test_long_wire_approaches_ampere_law() {
        // B = μ₀I/2πρ, i.e. 0.2·I/ρ in mT for mm and A.
        let rho = 10.0;
        let current = 100.0;
        let b = element_field(
            Vec3::new(0.0, 0.0, -1e7),
            Vec3::new(0.0, 0.0, 1e7),
            current,
            Vec3::new(rho, 0.0, 0.0),
        );
        let expected = 0.2 * current / rho;
        assert!(
            (b.y - expected).abs() / expected < 1e-6,
            "got {}, expected {expected}",
            b.y
        );
    }

    #[test]
    fn test_polygon_loop_centre_matches_circular_loop() {
        // Centre field of a circular loop: B = μ₀I/2R, +z for CCW.
        let radius = 50.0;
        let current = 100.0;
        let n = 1000;
        let verts: Vec<Vec3> = (0..=n)
            .map(|k| {
                let a = 2.0 * PI * k as f64 / n as f64;
                Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
            })
            .collect();
        let loop_seg = Segment::arc("loop", current, verts);

        let b = segment_field(&loop_seg, Vec3::ZERO);
        let expected = MU0_OVER_4PI_MT_MM * current * 2.0 * PI / radius;
        assert!((b.x).abs() < 1e-12);
        assert!((b.y).abs() < 1e-12);
        assert!(
            (b.z - expected).abs() / expected < 1e-4,
            "got {}, expected {expected}",
            b.z
        );
    }

    #[test]
    fn test_reversed_traversal_flips_sign() {
        let p1 = Vec3::new(-3.0, 1.0, -50.0);
        let p2 = Vec3::new(2.0, -1.0, 60.0);
        let point = Vec3::new(20.0, 15.0, 5.0);
        let fwd = element_field(p1, p2, 7.5, point);
        let rev = element_field(p2, p1, 7.5, point);
        assert!((fwd + rev).norm() < 1e-15, "reversal must negate the field");
    }

    #[test]
    fn test_point_on_element_is_guarded() {
        let b = element_field(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::new(0.0, 0.0, 10.0),
            100.0,
            Vec3::new(0.0, 0.0, 3.0),
        );
        assert_eq!(b, Vec3::ZERO, "on-axis point must not produce NaN");
        let b_end = element_field(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::new(0.0, 0.0, 10.0),
            100.0,
            Vec3::new(0.0, 0.0, 10.0),
        );
        assert_eq!(b_end, Vec3::ZERO);
    }

    #[test]
    fn test_superposition_over_segments() {
        let s1 = Segment::line(
            "a",
            5.0,
            Vec3::new(0.0, 0.0, -100.0),
            Vec3::new(0.0, 0.0, 100.0),
        );
        let s2 = s1.mapped("b", |p| p);
        let coil = Coil::new("pair", vec![s1.clone(), s2]);
        let point = Vec3::new(25.0, 0.0, 0.0);

        let single = segment_field(&s1, point);
        let both = coil_field(&coil, point);
        assert!(
            (both - single * 2.0).norm() < 1e-15,
            "two identical segments double the field"
        );
    }

    #[test]
    fn test_field_scales_linearly_with_current() {
        let p1 = Vec3::new(0.0, 0.0, -80.0);
        let p2 = Vec3::new(0.0, 0.0, 80.0);
        let point = Vec3::new(12.0, -7.0, 30.0);
        let b1 = element_field(p1, p2, 1.0, point);
        let b10 = element_field(p1, p2, 10.0, point);
        assert!((b10 - b1 * 10.0).norm() < 1e-12);
    }
}

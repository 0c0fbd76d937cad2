// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Saddle-Coil Builder
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Saddle-coil geometry assembly.
//!
//! Two diametrically opposed loops on a cylindrical former, each made
//! of two axial wires and two arcs. Loop 1 spans azimuth
//! (90° − α, 90° + α); loop 2 is its half-turn image about the coil
//! axis. All eight segments derive from two canonical templates at the
//! origin via translate-then-flip compositions.
//!
//! The composition order is a precision requirement: templates are
//! flipped about axes through the origin *before* being displaced, and
//! second-loop segments are rotated about the coil axis *before* the
//! flip about their own displaced position. Changing either order
//! reverses the winding sense of one loop and the two loops cancel on
//! axis instead of reinforcing.

use coil_types::config::SaddleConfig;
use coil_types::error::CoilResult;
use coil_types::geometry::{Axis, Coil, Segment, Vec3};

/// Build the eight-segment double-saddle coil described by `cfg`.
///
/// Segment labels and their construction order are deterministic:
/// `wire_1_up`, `arc_1_up`, `wire_1_down`, `arc_1_down`, then the
/// half-turn images `wire_2_up`, `arc_2_up`, `wire_2_down`,
/// `arc_2_down`. The solver sums contributions regardless of order;
/// the ordering exists so identical configs produce identical coils.
pub fn build_saddle_coil(cfg: &SaddleConfig) -> CoilResult<Coil> {
    cfg.geometry.validate()?;

    let geo = &cfg.geometry;
    let radius = geo.radius_mm();
    let length = geo.length_mm();
    let alpha = geo.half_angle_deg;
    let current = geo.current_a;
    let n_arc = geo.arc_resolution;

    // Canonical templates, centred at the origin.
    let wire = Segment::line(
        "wire",
        current,
        Vec3::new(0.0, 0.0, -length / 2.0),
        Vec3::new(0.0, 0.0, length / 2.0),
    );
    let arc = Segment::arc("arc", current, arc_vertices(radius, alpha, n_arc));

    // Azimuthal anchor points of the two wires of loop 1.
    let d_up = circle_point(radius, 90.0 - alpha);
    let d_down = circle_point(radius, 90.0 + alpha);
    let z_up = Vec3::new(0.0, 0.0, length / 2.0);
    let z_down = Vec3::new(0.0, 0.0, -length / 2.0);

    // Loop 1: flip about y through the origin, then displace.
    let wire_1_up = wire.translated("wire_1_up", d_up);
    let wire_1_down = wire
        .half_turned("wire_flipped", Axis::Y, Vec3::ZERO)
        .translated("wire_1_down", d_down);
    let arc_1_up = arc.translated("arc_1_up", z_up);
    let arc_1_down = arc
        .half_turned("arc_flipped", Axis::Y, Vec3::ZERO)
        .translated("arc_1_down", z_down);

    // Loop 2: half turn about the coil axis through the origin, then a
    // flip about the segment's own displaced position. The second flip
    // keeps each segment in place but reverses its traversal, which is
    // what makes the opposite loop wind the right way round.
    let wire_2_down = wire_1_up
        .half_turned("wire_rotated", Axis::Z, Vec3::ZERO)
        .half_turned("wire_2_down", Axis::X, d_up.half_turn_z(Vec3::ZERO));
    let wire_2_up = wire_1_down
        .half_turned("wire_rotated", Axis::Z, Vec3::ZERO)
        .half_turned("wire_2_up", Axis::X, d_down.half_turn_z(Vec3::ZERO));
    let arc_2_up = arc_1_up
        .half_turned("arc_rotated", Axis::Z, Vec3::ZERO)
        .half_turned("arc_2_up", Axis::Y, z_up);
    let arc_2_down = arc_1_down
        .half_turned("arc_rotated", Axis::Z, Vec3::ZERO)
        .half_turned("arc_2_down", Axis::Y, z_down);

    Ok(Coil::new(
        &cfg.coil_name,
        vec![
            wire_1_up,
            arc_1_up,
            wire_1_down,
            arc_1_down,
            wire_2_up,
            arc_2_up,
            wire_2_down,
            arc_2_down,
        ],
    ))
}

/// Point on the former circle at `angle_deg` azimuth, in the z=0 plane.
fn circle_point(radius: f64, angle_deg: f64) -> Vec3 {
    let a = angle_deg.to_radians();
    Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
}

/// Arc template vertices: `n` points at uniform angles over
/// [90° − α, 90° + α] at `radius`, in the z=0 plane, endpoint inclusive.
fn arc_vertices(radius: f64, half_angle_deg: f64, n: usize) -> Vec<Vec3> {
    let start = 90.0 - half_angle_deg;
    let step = 2.0 * half_angle_deg / (n - 1) as f64;
    (0..n)
        .map(|k| circle_point(radius, start + step * k as f64))
        .collect()
}

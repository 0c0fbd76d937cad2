// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Geometry Primitives
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cartesian 3-vectors and current-carrying segments.
//!
//! All coordinates are in millimetres, currents in amperes. A `Coil`
//! is built once by the saddle-coil builder and never mutated; winding
//! sense is encoded purely in vertex order.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Cartesian 3-vector [mm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm_sq(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// 180° rotation about the x-axis through `anchor`.
    pub fn half_turn_x(self, anchor: Vec3) -> Vec3 {
        let d = self - anchor;
        anchor + Vec3::new(d.x, -d.y, -d.z)
    }

    /// 180° rotation about the y-axis through `anchor`.
    pub fn half_turn_y(self, anchor: Vec3) -> Vec3 {
        let d = self - anchor;
        anchor + Vec3::new(-d.x, d.y, -d.z)
    }

    /// 180° rotation about the z-axis through `anchor`.
    pub fn half_turn_z(self, anchor: Vec3) -> Vec3 {
        let d = self - anchor;
        anchor + Vec3::new(-d.x, -d.y, d.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Rotation axis for half-turn transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Geometric shape of a current segment.
///
/// A `Line` is an ordered endpoint pair; an `Arc` is a polyline sampled
/// at uniform angular steps. The tag keeps the two-vertex invariant of
/// straight wires structural rather than conventional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SegmentGeometry {
    Line([Vec3; 2]),
    Arc(Vec<Vec3>),
}

/// A current-carrying segment: geometry plus current magnitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Stable construction label (`wire_1_up`, `arc_2_down`, ...).
    pub label: String,
    /// Current magnitude [A]; direction follows vertex order.
    pub current_a: f64,
    pub geometry: SegmentGeometry,
}

impl Segment {
    pub fn line(label: &str, current_a: f64, start: Vec3, end: Vec3) -> Self {
        Segment {
            label: label.to_string(),
            current_a,
            geometry: SegmentGeometry::Line([start, end]),
        }
    }

    pub fn arc(label: &str, current_a: f64, vertices: Vec<Vec3>) -> Self {
        Segment {
            label: label.to_string(),
            current_a,
            geometry: SegmentGeometry::Arc(vertices),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        match &self.geometry {
            SegmentGeometry::Line(v) => v,
            SegmentGeometry::Arc(v) => v,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self.geometry, SegmentGeometry::Line(_))
    }

    /// Copy with every vertex mapped through `f`, keeping label and current.
    pub fn mapped(&self, label: &str, f: impl Fn(Vec3) -> Vec3) -> Segment {
        let geometry = match &self.geometry {
            SegmentGeometry::Line([a, b]) => SegmentGeometry::Line([f(*a), f(*b)]),
            SegmentGeometry::Arc(v) => SegmentGeometry::Arc(v.iter().map(|&p| f(p)).collect()),
        };
        Segment {
            label: label.to_string(),
            current_a: self.current_a,
            geometry,
        }
    }

    /// Copy translated by `d`.
    pub fn translated(&self, label: &str, d: Vec3) -> Segment {
        self.mapped(label, |p| p + d)
    }

    /// Copy rotated 180° about `axis` through `anchor`.
    pub fn half_turned(&self, label: &str, axis: Axis, anchor: Vec3) -> Segment {
        self.mapped(label, |p| match axis {
            Axis::X => p.half_turn_x(anchor),
            Axis::Y => p.half_turn_y(anchor),
            Axis::Z => p.half_turn_z(anchor),
        })
    }
}

/// An immutable collection of current segments built in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coil {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Coil {
    pub fn new(name: &str, segments: Vec<Segment>) -> Self {
        Coil {
            name: name.to_string(),
            segments,
        }
    }

    pub fn segment(&self, label: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.label == label)
    }

    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }
}

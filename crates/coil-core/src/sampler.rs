// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Field Samplers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grid and axis sampling of the coil field.
//!
//! The plane sampler walks the y=0 slice the downstream streamline
//! plot consumes: x across the bore with a margin past the former,
//! z past both coil ends.

use crate::biot_savart::coil_field;
use coil_types::config::SaddleConfig;
use coil_types::error::CoilResult;
use coil_types::geometry::{Coil, Vec3};
use ndarray::{Array1, Array2, Array3};

/// Sampling grid for the y=0 plane.
#[derive(Debug, Clone)]
pub struct PlaneGrid {
    pub xs: Array1<f64>,
    pub zs: Array1<f64>,
}

impl PlaneGrid {
    /// Uniform grid spanning ±`x_half_span` by ±`z_half_span` [mm].
    pub fn new(nx: usize, nz: usize, x_half_span: f64, z_half_span: f64) -> Self {
        PlaneGrid {
            xs: Array1::linspace(-x_half_span, x_half_span, nx),
            zs: Array1::linspace(-z_half_span, z_half_span, nz),
        }
    }

    /// Grid from config: x spans ±(x_span_factor · R),
    /// z spans ±(z_span_factor · L/2).
    pub fn from_config(cfg: &SaddleConfig) -> CoilResult<Self> {
        cfg.validate()?;
        let x_half = cfg.grid.x_span_factor * cfg.geometry.radius_mm();
        let z_half = cfg.grid.z_span_factor * cfg.geometry.length_mm() / 2.0;
        Ok(PlaneGrid::new(cfg.grid.nx, cfg.grid.nz, x_half, z_half))
    }

    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn nz(&self) -> usize {
        self.zs.len()
    }
}

/// Sample the coil field over the y=0 plane.
///
/// Returns `[nz, nx, 3]`: rows walk z, columns walk x, the last axis
/// holds (Bx, By, Bz) in mT.
pub fn sample_plane(coil: &Coil, grid: &PlaneGrid) -> Array3<f64> {
    let nx = grid.nx();
    let nz = grid.nz();
    let mut b = Array3::zeros((nz, nx, 3));
    for iz in 0..nz {
        for ix in 0..nx {
            let point = Vec3::new(grid.xs[ix], 0.0, grid.zs[iz]);
            let field = coil_field(coil, point);
            b[[iz, ix, 0]] = field.x;
            b[[iz, ix, 1]] = field.y;
            b[[iz, ix, 2]] = field.z;
        }
    }
    b
}

/// Sample the three field components along the coil axis.
///
/// Returns `[n, 3]` for the given z positions [mm].
pub fn sample_axis(coil: &Coil, zs: &Array1<f64>) -> Array2<f64> {
    let n = zs.len();
    let mut b = Array2::zeros((n, 3));
    for (i, &z) in zs.iter().enumerate() {
        let field = coil_field(coil, Vec3::new(0.0, 0.0, z));
        b[[i, 0]] = field.x;
        b[[i, 1]] = field.y;
        b[[i, 2]] = field.z;
    }
    b
}

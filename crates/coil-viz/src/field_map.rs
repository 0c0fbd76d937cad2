// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Field Map
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sampled y=0 field slice with the derived quantities a streamline
//! plot consumes: in-plane components and magnitude normalized to its
//! maximum (the color scale of the plot).

use coil_core::sampler::{sample_plane, PlaneGrid};
use coil_types::error::{CoilError, CoilResult};
use coil_types::geometry::Coil;
use ndarray::{Array1, Array2, Array3};

/// A fully sampled field slice over the y=0 plane.
#[derive(Debug, Clone)]
pub struct FieldMap {
    pub xs: Array1<f64>,
    pub zs: Array1<f64>,
    /// Field vectors `[nz, nx, 3]` in mT.
    pub b: Array3<f64>,
    /// |B| / max |B| over the slice, `[nz, nx]`.
    pub b_norm: Array2<f64>,
}

impl FieldMap {
    /// Sample `coil` over `grid` and derive the normalized magnitude.
    pub fn from_plane(coil: &Coil, grid: &PlaneGrid) -> CoilResult<FieldMap> {
        let b = sample_plane(coil, grid);
        let (nz, nx) = (grid.nz(), grid.nx());

        let mut b_norm = Array2::zeros((nz, nx));
        let mut max_amp = 0.0_f64;
        for iz in 0..nz {
            for ix in 0..nx {
                let amp = (b[[iz, ix, 0]].powi(2)
                    + b[[iz, ix, 1]].powi(2)
                    + b[[iz, ix, 2]].powi(2))
                .sqrt();
                b_norm[[iz, ix]] = amp;
                max_amp = max_amp.max(amp);
            }
        }
        if !max_amp.is_finite() || max_amp <= 0.0 {
            return Err(CoilError::GeometryError(
                "field magnitude is zero or non-finite over the sampling plane".to_string(),
            ));
        }
        b_norm.mapv_inplace(|v| v / max_amp);

        Ok(FieldMap {
            xs: grid.xs.clone(),
            zs: grid.zs.clone(),
            b,
            b_norm,
        })
    }

    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    pub fn nz(&self) -> usize {
        self.zs.len()
    }

    /// In-plane x component `[nz, nx]`, the u-field of the streamplot.
    pub fn bx(&self) -> Array2<f64> {
        self.component(0)
    }

    /// In-plane z component `[nz, nx]`, the v-field of the streamplot.
    pub fn bz(&self) -> Array2<f64> {
        self.component(2)
    }

    fn component(&self, k: usize) -> Array2<f64> {
        let (nz, nx) = (self.nz(), self.nx());
        let mut out = Array2::zeros((nz, nx));
        for iz in 0..nz {
            for ix in 0..nx {
                out[[iz, ix]] = self.b[[iz, ix, k]];
            }
        }
        out
    }
}

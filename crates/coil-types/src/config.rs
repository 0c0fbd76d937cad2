// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{DEFAULT_ARC_RESOLUTION, MM_PER_CM};
use crate::error::{CoilError, CoilResult};
use serde::{Deserialize, Serialize};

/// Top-level saddle-coil study configuration.
/// Maps 1:1 to the saddle_config.json schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaddleConfig {
    pub coil_name: String,
    pub geometry: GeometryParams,
    #[serde(default)]
    pub grid: GridParams,
}

/// Physical coil parameters. Lengths in cm, current in A.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryParams {
    pub radius_cm: f64,
    pub length_cm: f64,
    /// Angular half-span of each loop [deg]; must lie in (0, 90).
    pub half_angle_deg: f64,
    pub current_a: f64,
    /// Points sampled along each arc. Higher values give a smoother
    /// field approximation at higher solver cost.
    #[serde(default = "default_arc_resolution")]
    pub arc_resolution: usize,
}

/// Sampling-plane parameters for the y=0 field slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridParams {
    #[serde(default = "default_grid_n")]
    pub nx: usize,
    #[serde(default = "default_grid_n")]
    pub nz: usize,
    /// x spans ±(x_span_factor · radius).
    #[serde(default = "default_x_span_factor")]
    pub x_span_factor: f64,
    /// z spans ±(z_span_factor · length / 2).
    #[serde(default = "default_z_span_factor")]
    pub z_span_factor: f64,
}

fn default_arc_resolution() -> usize {
    DEFAULT_ARC_RESOLUTION
}
fn default_grid_n() -> usize {
    10
}
fn default_x_span_factor() -> f64 {
    1.1
}
fn default_z_span_factor() -> f64 {
    1.5
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            nx: default_grid_n(),
            nz: default_grid_n(),
            x_span_factor: default_x_span_factor(),
            z_span_factor: default_z_span_factor(),
        }
    }
}

impl Default for GeometryParams {
    fn default() -> Self {
        GeometryParams {
            radius_cm: 5.5,
            length_cm: 40.0,
            half_angle_deg: 60.0,
            current_a: 100.0,
            arc_resolution: DEFAULT_ARC_RESOLUTION,
        }
    }
}

impl GeometryParams {
    pub fn radius_mm(&self) -> f64 {
        self.radius_cm * MM_PER_CM
    }

    pub fn length_mm(&self) -> f64 {
        self.length_cm * MM_PER_CM
    }

    /// Reject parameter sets that cannot produce a physical saddle coil.
    ///
    /// A half-angle at or beyond 90° closes the two loops into an
    /// overlapping circle; zero or negative dimensions collapse the
    /// geometry. These are hard errors rather than silently degenerate
    /// output.
    pub fn validate(&self) -> CoilResult<()> {
        if !self.radius_cm.is_finite() || self.radius_cm <= 0.0 {
            return Err(CoilError::ConfigError(format!(
                "coil radius must be finite and > 0, got {} cm",
                self.radius_cm
            )));
        }
        if !self.length_cm.is_finite() || self.length_cm <= 0.0 {
            return Err(CoilError::ConfigError(format!(
                "coil length must be finite and > 0, got {} cm",
                self.length_cm
            )));
        }
        if !self.half_angle_deg.is_finite()
            || self.half_angle_deg <= 0.0
            || self.half_angle_deg >= 90.0
        {
            return Err(CoilError::ConfigError(format!(
                "half-angle must lie in (0, 90) degrees, got {}",
                self.half_angle_deg
            )));
        }
        if !self.current_a.is_finite() || self.current_a == 0.0 {
            return Err(CoilError::ConfigError(format!(
                "coil current must be finite and non-zero, got {} A",
                self.current_a
            )));
        }
        if self.arc_resolution < 2 {
            return Err(CoilError::ConfigError(format!(
                "arc resolution must be >= 2, got {}",
                self.arc_resolution
            )));
        }
        Ok(())
    }
}

impl Default for SaddleConfig {
    fn default() -> Self {
        SaddleConfig {
            coil_name: "saddle".to_string(),
            geometry: GeometryParams::default(),
            grid: GridParams::default(),
        }
    }
}

impl SaddleConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> CoilResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> CoilResult<()> {
        self.geometry.validate()?;
        if self.grid.nx < 2 || self.grid.nz < 2 {
            return Err(CoilError::ConfigError(format!(
                "sampling grid must be at least 2x2, got {}x{}",
                self.grid.nx, self.grid.nz
            )));
        }
        if !self.grid.x_span_factor.is_finite()
            || self.grid.x_span_factor <= 0.0
            || !self.grid.z_span_factor.is_finite()
            || self.grid.z_span_factor <= 0.0
        {
            return Err(CoilError::ConfigError(
                "grid span factors must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }
}

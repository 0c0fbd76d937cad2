// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Vacuum permeability (H/m) - real SI value.
pub const MU0_SI: f64 = 1.2566370614e-6;

/// μ₀/4π expressed in mT·mm/A.
///
/// μ₀/4π = 1e-7 T·m/A = 1e-7 · 1e3 mT · 1e3 mm / A = 0.1 mT·mm/A.
/// With vertex coordinates in mm and currents in A, the Biot-Savart
/// solver therefore returns fields directly in mT.
pub const MU0_OVER_4PI_MT_MM: f64 = 0.1;

/// Millimetres per centimetre. Config takes cm, geometry works in mm.
pub const MM_PER_CM: f64 = 10.0;

/// Default number of points sampled along each arc segment.
pub const DEFAULT_ARC_RESOLUTION: usize = 100;

/// Denominator floor for the finite-segment Biot-Savart kernel.
/// Field points on or numerically touching a current element would
/// otherwise divide by zero; their contribution is dropped instead.
pub const SEGMENT_EPS: f64 = 1e-12;

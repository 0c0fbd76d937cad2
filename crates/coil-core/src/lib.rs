//! Saddle-coil assembly and magnetostatic field evaluation.
//!
//! `builder` places eight current segments by symmetry transforms,
//! `biot_savart` evaluates their superposed field, `sampler` walks
//! grids and axis lines through the solver.

pub mod biot_savart;
pub mod builder;
pub mod sampler;

//! Downstream data surfaces for plotting frontends.
//!
//! `field_map` assembles the normalized-magnitude slice a streamline
//! plot colors by; `export` serializes sampled fields and coil
//! wireframes to CSV, NPZ, and JSON.

pub mod export;
pub mod field_map;

// ─────────────────────────────────────────────────────────────────────
// SCPN Coil Lab — Export
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! File export of sampled fields and coil wireframes.
//!
//! Three surfaces: delimited text for spreadsheet-style inspection,
//! NPZ for array-based plotting frontends, and a JSON wireframe a 3-D
//! viewer can render. Positions are mm, fields mT.

use crate::field_map::FieldMap;
use coil_types::error::{CoilError, CoilResult};
use coil_types::geometry::Coil;
use ndarray::{Array1, Array2};
use ndarray_npy::NpzWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one row per plane sample: position and field components.
pub fn write_field_csv(path: &Path, map: &FieldMap) -> CoilResult<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "x_mm,y_mm,z_mm,bx_mt,by_mt,bz_mt")?;
    for iz in 0..map.nz() {
        for ix in 0..map.nx() {
            writeln!(
                w,
                "{:.6},{:.6},{:.6},{:.9},{:.9},{:.9}",
                map.xs[ix],
                0.0,
                map.zs[iz],
                map.b[[iz, ix, 0]],
                map.b[[iz, ix, 1]],
                map.b[[iz, ix, 2]],
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Write the on-axis profile: z position and the three components.
pub fn write_axis_csv(path: &Path, zs: &Array1<f64>, b: &Array2<f64>) -> CoilResult<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(w, "z_mm,bx_mt,by_mt,bz_mt")?;
    for (i, &z) in zs.iter().enumerate() {
        writeln!(
            w,
            "{:.6},{:.9},{:.9},{:.9}",
            z,
            b[[i, 0]],
            b[[i, 1]],
            b[[i, 2]],
        )?;
    }
    w.flush()?;
    Ok(())
}

/// Write the sampled slice as NPZ: grid axes, field vectors, and the
/// normalized magnitude used as the streamline color scale.
pub fn write_field_npz(path: &Path, map: &FieldMap) -> CoilResult<()> {
    let file = File::create(path)?;
    let mut writer = NpzWriter::new(file);
    writer.add_array("xs", &map.xs).map_err(npz_err)?;
    writer.add_array("zs", &map.zs).map_err(npz_err)?;
    writer.add_array("b", &map.b).map_err(npz_err)?;
    writer.add_array("b_norm", &map.b_norm).map_err(npz_err)?;
    writer.finish().map_err(npz_err)?;
    Ok(())
}

fn npz_err(e: ndarray_npy::WriteNpzError) -> CoilError {
    CoilError::ExportError(e.to_string())
}

/// Write the coil wireframe (labels, currents, vertex lists) as JSON.
pub fn write_geometry_json(path: &Path, coil: &Coil) -> CoilResult<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);
    serde_json::to_writer_pretty(w, coil)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coil_core::builder::build_saddle_coil;
    use coil_core::sampler::{sample_axis, PlaneGrid};
    use coil_types::config::SaddleConfig;
    use ndarray::Array3;
    use ndarray_npy::NpzReader;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(stem: &str, ext: &str) -> PathBuf {
        let epoch_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "coil_viz_{stem}_{}_{epoch_ns}.{ext}",
            std::process::id()
        ))
    }

    fn demo() -> (SaddleConfig, Coil, FieldMap) {
        let cfg = SaddleConfig::default();
        let coil = build_saddle_coil(&cfg).unwrap();
        let grid = PlaneGrid::from_config(&cfg).unwrap();
        let map = FieldMap::from_plane(&coil, &grid).unwrap();
        (cfg, coil, map)
    }

    #[test]
    fn test_field_csv_row_count_and_header() {
        let (_, _, map) = demo();
        let path = temp_path("field", "csv");
        write_field_csv(&path, &map).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x_mm,y_mm,z_mm,bx_mt,by_mt,bz_mt");
        assert_eq!(lines.len(), 1 + map.nx() * map.nz());
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 6, "bad row: {line}");
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_axis_csv_roundtrip_values() {
        let (_, coil, _) = demo();
        let zs = Array1::linspace(-300.0, 300.0, 11);
        let b = sample_axis(&coil, &zs);
        let path = temp_path("axis", "csv");
        write_axis_csv(&path, &zs, &b).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        // Middle row is z=0; By there must match the sampled value.
        let mid: Vec<&str> = lines[6].split(',').collect();
        let z: f64 = mid[0].parse().unwrap();
        let by: f64 = mid[2].parse().unwrap();
        assert!(z.abs() < 1e-9);
        assert!((by - b[[5, 1]]).abs() < 1e-6);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_npz_roundtrip_shapes() {
        let (_, _, map) = demo();
        let path = temp_path("field", "npz");
        write_field_npz(&path, &map).unwrap();

        let file = File::open(&path).unwrap();
        let mut reader = NpzReader::new(file).unwrap();
        // Zip entries may or may not carry the .npy suffix.
        let xs: Array1<f64> = reader
            .by_name("xs.npy")
            .or_else(|_| reader.by_name("xs"))
            .unwrap();
        let b: Array3<f64> = reader
            .by_name("b.npy")
            .or_else(|_| reader.by_name("b"))
            .unwrap();
        let b_norm: Array2<f64> = reader
            .by_name("b_norm.npy")
            .or_else(|_| reader.by_name("b_norm"))
            .unwrap();
        assert_eq!(xs.len(), map.nx());
        assert_eq!(b.shape(), map.b.shape());
        assert_eq!(b_norm.shape(), map.b_norm.shape());
        assert!((b[[0, 0, 1]] - map.b[[0, 0, 1]]).abs() < 1e-15);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_geometry_json_roundtrip() {
        let (_, coil, _) = demo();
        let path = temp_path("coil", "json");
        write_geometry_json(&path, &coil).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Coil = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.name, coil.name);
        assert_eq!(parsed.n_segments(), 8);
        let wire = parsed.segment("wire_1_up").unwrap();
        assert_eq!(wire.vertices().len(), 2);
        assert!((wire.vertices()[1].z - 200.0).abs() < 1e-9);
        std::fs::remove_file(&path).ok();
    }
}

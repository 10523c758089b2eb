// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end STL to include-file conversion tests

use anyhow::Result;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use stl2pov::cli::{ConversionError, Converter};
use stl2pov::{ConvertConfig, MeshStyle};
use stl_io::{Normal, Triangle, Vertex};
use tempfile::tempdir;

fn cube_triangles(size: f32) -> Vec<Triangle> {
    let c = |x: f32, y: f32, z: f32| Vertex::new([x * size, y * size, z * size]);
    let quads = [
        ([0.0, 0.0, -1.0], [c(0., 0., 0.), c(0., 1., 0.), c(1., 1., 0.), c(1., 0., 0.)]),
        ([0.0, 0.0, 1.0], [c(0., 0., 1.), c(1., 0., 1.), c(1., 1., 1.), c(0., 1., 1.)]),
        ([0.0, -1.0, 0.0], [c(0., 0., 0.), c(1., 0., 0.), c(1., 0., 1.), c(0., 0., 1.)]),
        ([0.0, 1.0, 0.0], [c(0., 1., 0.), c(0., 1., 1.), c(1., 1., 1.), c(1., 1., 0.)]),
        ([-1.0, 0.0, 0.0], [c(0., 0., 0.), c(0., 0., 1.), c(0., 1., 1.), c(0., 1., 0.)]),
        ([1.0, 0.0, 0.0], [c(1., 0., 0.), c(1., 1., 0.), c(1., 1., 1.), c(1., 0., 1.)]),
    ];

    quads
        .iter()
        .flat_map(|(normal, [a, b, c, d])| {
            [
                Triangle {
                    normal: Normal::new(*normal),
                    vertices: [a.clone(), b.clone(), c.clone()],
                },
                Triangle {
                    normal: Normal::new(*normal),
                    vertices: [a.clone(), c.clone(), d.clone()],
                },
            ]
        })
        .collect()
}

fn write_binary_cube(path: &Path, size: f32) -> Result<()> {
    let mut buffer = Vec::new();
    stl_io::write_stl(&mut Cursor::new(&mut buffer), cube_triangles(size).iter())?;
    std::fs::write(path, buffer)?;
    Ok(())
}

fn converter(style: MeshStyle, output_dir: &Path) -> Converter {
    Converter::new(ConvertConfig {
        style,
        output_dir: Some(output_dir.to_path_buf()),
        ..ConvertConfig::default()
    })
}

#[test]
fn test_convert_cube_to_mesh() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("cube.stl");
    write_binary_cube(&input, 10.0)?;

    let report = converter(MeshStyle::Inline, dir.path()).convert_file(&input)?;

    assert_eq!(report.output, dir.path().join("cube.inc"));
    assert_eq!(report.facets, 12);
    assert_eq!(report.points, 8);
    assert_eq!(report.degenerate, 0);

    let written = std::fs::read_to_string(&report.output)?;
    let lines: Vec<&str> = written.lines().collect();
    assert!(lines[0].starts_with("// Generated by stl2pov"));
    assert!(lines[1].starts_with("// on "));
    assert_eq!(
        lines[2],
        format!("// Source file name: '{}'", input.display())
    );
    assert_eq!(lines[3], "# declare m_cube = mesh {");
    assert_eq!(written.matches("  triangle {").count(), 12);
    assert!(written.contains("<10.0, 0.0, 0.0>"));
    assert!(written.ends_with("  }\n}"));
    Ok(())
}

#[test]
fn test_convert_cube_to_mesh2() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("block.stl");
    write_binary_cube(&input, 2.0)?;

    let report = converter(MeshStyle::Indexed, dir.path()).convert_file(&input)?;
    assert_eq!(report.style, MeshStyle::Indexed);

    let written = std::fs::read_to_string(&report.output)?;
    assert!(written.contains("# declare m_block = mesh2 {"));
    assert!(written.contains("  vertex_vectors {\n    8,\n"));
    assert!(written.contains("  face_indices {\n    12,\n"));
    assert_eq!(written.matches("<0.0, 2.0, 0.0>").count(), 1);
    Ok(())
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() -> Result<()> {
    let dir = tempdir()?;
    let good = dir.path().join("good.stl");
    write_binary_cube(&good, 1.0)?;
    let broken = dir.path().join("broken.stl");
    std::fs::write(&broken, b"definitely not an STL")?;
    let other = dir.path().join("notes.txt");
    std::fs::write(&other, "hello")?;

    let inputs = vec![broken.clone(), other.clone(), good.clone()];
    let results = converter(MeshStyle::Inline, dir.path()).convert_all(&inputs, None);

    let paths: Vec<&PathBuf> = results.iter().map(|(path, _)| path).collect();
    assert_eq!(paths, vec![&broken, &other, &good]);

    assert!(matches!(results[0].1, Err(ConversionError::Read { .. })));
    assert!(matches!(results[1].1, Err(ConversionError::NotStl(_))));
    assert!(results[2].1.is_ok());
    assert!(dir.path().join("good.inc").exists());
    assert!(!dir.path().join("broken.inc").exists());
    Ok(())
}

#[test]
fn test_directory_inputs_are_expanded() -> Result<()> {
    let dir = tempdir()?;
    let models = dir.path().join("models");
    std::fs::create_dir_all(models.join("nested"))?;
    write_binary_cube(&models.join("b.stl"), 1.0)?;
    write_binary_cube(&models.join("nested").join("a.STL"), 1.0)?;
    std::fs::write(models.join("readme.md"), "-")?;

    let inputs = Converter::collect_inputs(&[models.clone()]);
    assert_eq!(
        inputs,
        vec![models.join("b.stl"), models.join("nested").join("a.STL")]
    );
    Ok(())
}

#[test]
fn test_unwritable_output_is_write_failure() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("cube.stl");
    write_binary_cube(&input, 1.0)?;

    let missing = dir.path().join("does").join("not").join("exist");
    let err = converter(MeshStyle::Inline, &missing)
        .convert_file(&input)
        .unwrap_err();
    assert!(err.is_write_failure());
    assert!(err.to_string().contains("Cannot write output file"));
    Ok(())
}

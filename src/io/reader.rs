// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL reader

use crate::geometry::{FacetMesh, Vector3};
use anyhow::{Context, Result};
use log::debug;
use std::io::Cursor;
use std::path::Path;

const BINARY_HEADER_LEN: usize = 80;
const MAX_NAME_LINE: usize = 1024;

/// First line of an ASCII file, or the fixed binary header.
fn header_bytes(bytes: &[u8]) -> &[u8] {
    let window = &bytes[..bytes.len().min(MAX_NAME_LINE)];
    match window.iter().position(|&b| b == b'\n') {
        Some(end)
            if window[..end]
                .iter()
                .all(|&b| b == b'\r' || b == b'\t' || !b.is_ascii_control()) =>
        {
            &window[..end]
        }
        _ => &bytes[..bytes.len().min(BINARY_HEADER_LEN)],
    }
}

/// Name of the solid stored in the STL header, if there is a usable one.
///
/// ASCII files carry it on the `solid <name>` line; binary files in the
/// free-form 80 byte header, which exporters often also start with `solid`.
pub fn solid_name(bytes: &[u8]) -> Option<String> {
    let header = header_bytes(bytes);
    let header = match header.iter().position(|&b| b == 0) {
        Some(end) => &header[..end],
        None => header,
    };

    let text: String = String::from_utf8_lossy(header)
        .chars()
        .filter(|c| !c.is_control())
        .collect();
    let text = text.trim();
    let name = match text.strip_prefix("solid") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => text,
    };

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// `vertex` coordinates of an ASCII STL body in file order, parsed as `f64`.
///
/// `stl_io` stores coordinates as `f32`, which would turn `0.1` into
/// `0.10000000149011612`. Returns `None` for binary data or unparsable lines.
fn ascii_vertices(bytes: &[u8]) -> Option<Vec<Vector3>> {
    let text = std::str::from_utf8(bytes).ok()?;
    if !text.trim_start().starts_with("solid") {
        return None;
    }

    text.lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            (tokens.next() == Some("vertex")).then_some(tokens)
        })
        .map(|mut tokens| {
            let mut coord = || tokens.next()?.parse::<f64>().ok();
            Some(Vector3::new(coord()?, coord()?, coord()?))
        })
        .collect()
}

/// Parse ASCII or binary STL data into a facet mesh.
///
/// ASCII coordinates keep their full decimal precision; binary ones are
/// widened from `f32`. Vertices are merged when bit-identical, in the order
/// the facets first use them. `fallback_name` is used when the header has no
/// name.
pub fn read_stl_bytes(bytes: &[u8], fallback_name: &str) -> Result<FacetMesh> {
    let stl = stl_io::read_stl(&mut Cursor::new(bytes)).context("Failed to parse STL data")?;

    let triangles: Vec<[Vector3; 3]> = match ascii_vertices(bytes) {
        Some(points) if points.len() == stl.faces.len() * 3 => points
            .chunks_exact(3)
            .map(|corners| [corners[0], corners[1], corners[2]])
            .collect(),
        _ => {
            let vertex = |index: usize| -> Result<Vector3> {
                let v = stl
                    .vertices
                    .get(index)
                    .with_context(|| format!("STL facet refers to missing vertex {}", index))?;
                Ok(Vector3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2])))
            };

            stl.faces
                .iter()
                .map(|face| -> Result<[Vector3; 3]> {
                    Ok([
                        vertex(face.vertices[0])?,
                        vertex(face.vertices[1])?,
                        vertex(face.vertices[2])?,
                    ])
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    let name = solid_name(bytes).unwrap_or_else(|| fallback_name.to_string());
    let mesh = FacetMesh::from_triangles(name, triangles);

    debug!(
        "parsed STL solid '{}': {} facets, {} points",
        mesh.name,
        mesh.facet_count(),
        mesh.point_count()
    );

    Ok(mesh)
}

/// Read an STL file. The file stem names the mesh when the header does not.
pub fn read_stl_file(path: impl AsRef<Path>) -> Result<FacetMesh> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read STL file: {}", path.display()))?;

    let fallback = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());

    read_stl_bytes(&bytes, &fallback)
        .with_context(|| format!("Failed to load STL file: {}", path.display()))
}

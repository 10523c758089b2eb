// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! stl2pov
//!
//! Converts triangulated STL surface meshes into POV-Ray `mesh` or `mesh2`
//! objects. The geometry layer provides immutable vector types, bounding
//! boxes and facet normals; the I/O layer reads STL and renders the POV-Ray
//! declarations.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;

pub use config::{ConvertConfig, DegeneratePolicy};
pub use error::GeometryError;
pub use geometry::{facet_normal, BoundingBox, FacetMesh, Vector2, Vector3};
pub use io::{read_stl_file, render_indexed_mesh, render_inline_mesh, MeshStyle};

use anyhow::Result;
use std::path::Path;

/// Read an STL file and render it as a POV-Ray object, without banner
pub fn render_file(path: impl AsRef<Path>, style: MeshStyle) -> Result<String> {
    let mesh = read_stl_file(path)?;
    Ok(style.render_mesh(&mesh)?)
}

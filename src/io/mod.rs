// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - STL reading, POV-Ray rendering and include-file writing

mod pov;
mod reader;
mod writer;

pub use pov::{
    declaration_name, format_scalar, render_indexed_mesh, render_inline_mesh, MeshStyle,
};
pub use reader::{read_stl_bytes, read_stl_file, solid_name};
pub use writer::{banner, document, output_path, write_document, DEFAULT_EXTENSION};

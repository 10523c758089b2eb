// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Output naming and include-file assembly

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = ".inc";

/// `<stem><extension>` of `input`, placed in `output_dir` or the current
/// directory.
pub fn output_path(input: &Path, output_dir: Option<&Path>, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    let extension = extension.trim_start_matches('.');
    let file_name = format!("{}.{}", stem, extension);

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Comment block written above the mesh: generator version, time of
/// conversion (in `ctime` layout) and the source file.
pub fn banner(source: &str, generated_at: NaiveDateTime) -> String {
    format!(
        "// Generated by stl2pov [ver. {}]\n// on {}.\n// Source file name: '{}'\n",
        env!("CARGO_PKG_VERSION"),
        generated_at.format("%a %b %e %H:%M:%S %Y"),
        source
    )
}

/// Complete include file: banner followed by the rendered mesh.
pub fn document(source: &str, mesh_text: &str, generated_at: NaiveDateTime) -> String {
    let mut contents = banner(source, generated_at);
    contents.push_str(mesh_text);
    contents
}

pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Cannot write output file '{}'", path.display()))
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch STL to POV-Ray conversion

use crate::config::{ConvertConfig, DegeneratePolicy};
use crate::error::GeometryError;
use crate::geometry::{FacetMesh, Vector3};
use crate::io::{self, MeshStyle};
use chrono::Local;
use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use walkdir::WalkDir;

/// Why a single input was not converted
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("The file \"{}\" is probably not an STL file, skipping.", .0.display())]
    NotStl(PathBuf),

    #[error("{}: {error:#}", .path.display())]
    Read { path: PathBuf, error: anyhow::Error },

    #[error("{}: {error}", .path.display())]
    Geometry { path: PathBuf, error: GeometryError },

    #[error("{error:#}")]
    Write { path: PathBuf, error: anyhow::Error },
}

impl ConversionError {
    /// Output could not be written; the batch should end with a failure code.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, ConversionError::Write { .. })
    }
}

/// Outcome of one successful conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub style: MeshStyle,
    pub facets: usize,
    pub points: usize,
    pub degenerate: usize,
    pub skipped: usize,
    pub duration: Duration,
}

/// Mesh statistics printed by the `info` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshSummary {
    pub name: String,
    pub facets: usize,
    pub points: usize,
    pub degenerate_facets: usize,
    pub min: Option<Vector3>,
    pub max: Option<Vector3>,
    pub center: Option<Vector3>,
    pub volume: Option<f64>,
}

impl MeshSummary {
    pub fn from_mesh(mesh: &FacetMesh) -> Result<Self, GeometryError> {
        let bbox = mesh.bounding_box();
        Ok(Self {
            name: mesh.name.clone(),
            facets: mesh.facet_count(),
            points: mesh.point_count(),
            degenerate_facets: mesh.degenerate_facets()?.len(),
            min: bbox.min(),
            max: bbox.max(),
            center: bbox.center(),
            volume: bbox.volume(),
        })
    }
}

/// Drives reading, rendering and writing for a set of files
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Case-insensitive check for a `.stl` extension
    pub fn is_stl(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.eq_ignore_ascii_case("stl"))
            .unwrap_or(false)
    }

    /// Expand directories into the STL files below them. Plain file arguments
    /// are kept as given so that the converter can report non-STL names.
    pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut inputs = Vec::new();
        for path in paths {
            if path.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(path)
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file() && Self::is_stl(entry.path()))
                    .map(|entry| entry.into_path())
                    .collect();
                found.sort();
                debug!("found {} STL files under {}", found.len(), path.display());
                inputs.extend(found);
            } else {
                inputs.push(path.clone());
            }
        }
        inputs
    }

    /// Convert a single STL file into an include file.
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport, ConversionError> {
        if !Self::is_stl(input) {
            return Err(ConversionError::NotStl(input.to_path_buf()));
        }

        let start = Instant::now();
        let geometry_error = |error| ConversionError::Geometry {
            path: input.to_path_buf(),
            error,
        };

        let mut mesh = io::read_stl_file(input).map_err(|error| ConversionError::Read {
            path: input.to_path_buf(),
            error,
        })?;

        let degenerate = mesh.degenerate_facets().map_err(geometry_error)?.len();
        if degenerate > 0 {
            warn!(
                "{}: {} degenerate facet(s) in '{}'",
                input.display(),
                degenerate,
                mesh.name
            );
        }
        let skipped = match self.config.degenerate {
            DegeneratePolicy::Skip => mesh.remove_degenerate_facets().map_err(geometry_error)?,
            DegeneratePolicy::Keep => 0,
        };

        let text = self.config.style.render_mesh(&mesh).map_err(geometry_error)?;

        let output = io::output_path(
            input,
            self.config.output_dir.as_deref(),
            &self.config.extension,
        );
        let contents = io::document(
            &input.display().to_string(),
            &text,
            Local::now().naive_local(),
        );
        io::write_document(&output, &contents).map_err(|error| ConversionError::Write {
            path: output.clone(),
            error,
        })?;

        debug!(
            "wrote {} ({} facets, {} points) to {}",
            self.config.style,
            mesh.facet_count(),
            mesh.point_count(),
            output.display()
        );

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output,
            name: mesh.name,
            style: self.config.style,
            facets: mesh.facets.len(),
            points: mesh.points.len(),
            degenerate,
            skipped,
            duration: start.elapsed(),
        })
    }

    /// Convert independent files in parallel; results keep the input order.
    pub fn convert_all(
        &self,
        inputs: &[PathBuf],
        progress: Option<&ProgressBar>,
    ) -> Vec<(PathBuf, Result<ConversionReport, ConversionError>)> {
        inputs
            .par_iter()
            .map(|input| {
                let result = self.convert_file(input);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                (input.clone(), result)
            })
            .collect()
    }

    /// Read a file and summarize it without writing anything.
    pub fn summarize(path: &Path) -> anyhow::Result<MeshSummary> {
        let mesh = io::read_stl_file(path)?;
        Ok(MeshSummary::from_mesh(&mesh)?)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertConfig::default())
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! POV-Ray mesh serializers
//!
//! Two renderings of the same `(facets, points)` data:
//!
//! * `mesh`: every facet is a `triangle` carrying its three corner
//!   coordinates.
//! * `mesh2`: the point list is written once as `vertex_vectors` followed by
//!   the facets as `face_indices`. Indices are written as given, so they must
//!   already address the point list in order.
//!
//! POV-Ray uses a left-handed system, so every coordinate is written as
//! `<y, x, z>`.

use crate::error::{GeometryError, Result};
use crate::geometry::{resolve_facet, Facet, FacetMesh};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeshStyle {
    /// Inline triangles (`mesh`)
    #[default]
    #[serde(rename = "mesh")]
    Inline,
    /// Indexed vertices (`mesh2`)
    #[serde(rename = "mesh2")]
    Indexed,
}

impl MeshStyle {
    pub fn render<P>(&self, name: &str, facets: &[Facet], points: &[P]) -> Result<String>
    where
        P: Copy + Into<[f64; 3]>,
    {
        match self {
            MeshStyle::Inline => render_inline_mesh(name, facets, points),
            MeshStyle::Indexed => render_indexed_mesh(name, facets, points),
        }
    }

    pub fn render_mesh(&self, mesh: &FacetMesh) -> Result<String> {
        self.render(&mesh.name, &mesh.facets, &mesh.points)
    }
}

impl fmt::Display for MeshStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshStyle::Inline => write!(f, "mesh"),
            MeshStyle::Indexed => write!(f, "mesh2"),
        }
    }
}

impl FromStr for MeshStyle {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mesh" | "mesh1" | "inline" => Ok(MeshStyle::Inline),
            "mesh2" | "indexed" => Ok(MeshStyle::Indexed),
            other => Err(GeometryError::invalid_argument(format!(
                "unknown mesh style '{}' (expected mesh or mesh2)",
                other
            ))),
        }
    }
}

/// Identifier of the declared object: `m_` followed by the name with spaces
/// replaced by underscores.
pub fn declaration_name(name: &str) -> String {
    format!("m_{}", name.replace(' ', "_"))
}

/// Render a float the way the reference output does: shortest round-trip
/// digits, a trailing `.0` on integral values, and exponent notation with a
/// signed two-digit exponent below 1e-4 or from 1e16 upwards.
pub fn format_scalar(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
        return formatted;
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

/// `<y, x, z>` for a point given as `[x, y, z]`.
fn pov_vector(point: [f64; 3]) -> String {
    let [x, y, z] = point;
    format!(
        "<{}, {}, {}>",
        format_scalar(y),
        format_scalar(x),
        format_scalar(z)
    )
}

/// Append `items` indented by four spaces, comma-terminated except the last.
fn push_list(lines: &mut Vec<String>, items: Vec<String>) {
    let count = items.len();
    for (position, item) in items.into_iter().enumerate() {
        let separator = if position + 1 == count { "" } else { "," };
        lines.push(format!("    {}{}", item, separator));
    }
}

/// Render an inline-triangle `mesh` object.
pub fn render_inline_mesh<P>(name: &str, facets: &[Facet], points: &[P]) -> Result<String>
where
    P: Copy + Into<[f64; 3]>,
{
    let mut lines = Vec::with_capacity(facets.len() * 5 + 2);
    lines.push(format!("# declare {} = mesh {{", declaration_name(name)));

    for facet in facets {
        let corners = resolve_facet(facet, points)?;
        lines.push("  triangle {".to_string());
        push_list(
            &mut lines,
            corners.iter().map(|&p| pov_vector(p.into())).collect(),
        );
        lines.push("  }".to_string());
    }

    lines.push("}".to_string());
    Ok(lines.join("\n"))
}

/// Render an indexed-vertex `mesh2` object.
pub fn render_indexed_mesh<P>(name: &str, facets: &[Facet], points: &[P]) -> Result<String>
where
    P: Copy + Into<[f64; 3]>,
{
    for facet in facets {
        resolve_facet(facet, points)?;
    }

    let mut lines = Vec::with_capacity(points.len() + facets.len() + 9);
    lines.push(format!("# declare {} = mesh2 {{", declaration_name(name)));

    lines.push("  vertex_vectors {".to_string());
    push_list(
        &mut lines,
        std::iter::once(points.len().to_string())
            .chain(points.iter().map(|&p| pov_vector(p.into())))
            .collect(),
    );
    lines.push("  }".to_string());

    lines.push("  face_indices {".to_string());
    push_list(
        &mut lines,
        std::iter::once(facets.len().to_string())
            .chain(facets.iter().map(|[a, b, c]| format!("<{}, {}, {}>", a, b, c)))
            .collect(),
    );
    lines.push("  }".to_string());

    lines.push("}".to_string());
    Ok(lines.join("\n"))
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Facet normals

use super::Vector3;
use crate::error::{GeometryError, Result};

/// Unit normal of the triangle `[a, b, c]`, oriented by the right-hand rule.
///
/// Computed as `(b - a) × (c - b)` divided by its length. A normal whose
/// length compares equal to zero (collinear or coincident vertices) is
/// rejected with [`GeometryError::DegenerateFacet`]. There is no tolerance:
/// arbitrarily small but nonzero normals are still normalized, so nearly
/// degenerate facets can yield imprecise directions.
pub fn facet_normal(vertices: &[Vector3; 3]) -> Result<Vector3> {
    let [a, b, c] = *vertices;
    let u = b - a;
    let v = c - b;
    let n = u.cross(&v);
    let length = n.length();
    if length == 0.0 {
        return Err(GeometryError::DegenerateFacet);
    }
    n.try_div(length)
}

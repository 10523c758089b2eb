// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - vectors, bounding boxes, normals and facet meshes

mod bbox;
mod mesh;
mod normal;
mod vecops;
mod vector;

pub use bbox::BoundingBox;
pub use mesh::{resolve_facet, Facet, FacetMesh, PointIndex};
pub use normal::facet_normal;
pub use vector::{Vector2, Vector3};

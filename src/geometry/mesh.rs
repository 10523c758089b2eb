// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Facet mesh representation and utilities

use super::{facet_normal, BoundingBox, Vector3};
use crate::error::{GeometryError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Triangle defined by three indices into a point list
pub type Facet = [usize; 3];

/// Look up the three entries of `points` that `facet` refers to.
pub fn resolve_facet<P: Copy>(facet: &Facet, points: &[P]) -> Result<[P; 3]> {
    let lookup = |index: usize| {
        points.get(index).copied().ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "facet index {} out of range for {} points",
                index,
                points.len()
            ))
        })
    };
    Ok([lookup(facet[0])?, lookup(facet[1])?, lookup(facet[2])?])
}

/// Deduplicating point list. Points are compared with exact equality and keep
/// the order in which they were first inserted.
#[derive(Debug, Default)]
pub struct PointIndex {
    lookup: AHashMap<Vector3, usize>,
    points: Vec<Vector3>,
}

impl PointIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: AHashMap::with_capacity(capacity),
            points: Vec::with_capacity(capacity),
        }
    }

    /// Index of `point`, adding it if it has not been seen yet.
    pub fn insert(&mut self, point: Vector3) -> usize {
        let points = &mut self.points;
        *self.lookup.entry(point).or_insert_with(|| {
            points.push(point);
            points.len() - 1
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Vector3> {
        self.points
    }
}

/// Named triangular mesh: facets as index triples into a shared point list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetMesh {
    pub name: String,
    pub facets: Vec<Facet>,
    pub points: Vec<Vector3>,
}

impl FacetMesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Vec::new(),
            points: Vec::new(),
        }
    }

    /// Build a mesh from resolved triangles, merging bit-identical vertices.
    pub fn from_triangles<I>(name: impl Into<String>, triangles: I) -> Self
    where
        I: IntoIterator<Item = [Vector3; 3]>,
    {
        let triangles = triangles.into_iter();
        let mut index = PointIndex::with_capacity(triangles.size_hint().0);
        let facets = triangles
            .map(|[a, b, c]| [index.insert(a), index.insert(b), index.insert(c)])
            .collect();

        Self {
            name: name.into(),
            facets,
            points: index.into_points(),
        }
    }

    /// Get point count
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get facet count
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Vertices of the facet at `position`.
    pub fn triangle(&self, position: usize) -> Result<[Vector3; 3]> {
        let facet = self.facets.get(position).ok_or_else(|| {
            GeometryError::invalid_argument(format!(
                "facet {} out of range for {} facets",
                position,
                self.facets.len()
            ))
        })?;
        resolve_facet(facet, &self.points)
    }

    /// Check that every facet index addresses a point.
    pub fn validate(&self) -> Result<()> {
        for facet in &self.facets {
            resolve_facet(facet, &self.points)?;
        }
        Ok(())
    }

    /// Unit normal per facet, in facet order.
    ///
    /// The outer error reports a bad index; degenerate facets show up as
    /// per-facet [`GeometryError::DegenerateFacet`] entries.
    pub fn normals(&self) -> Result<Vec<Result<Vector3>>> {
        self.facets
            .iter()
            .map(|facet| -> Result<Result<Vector3>> {
                Ok(facet_normal(&resolve_facet(facet, &self.points)?))
            })
            .collect()
    }

    /// Positions of facets whose normal cannot be computed.
    pub fn degenerate_facets(&self) -> Result<Vec<usize>> {
        Ok(self
            .normals()?
            .iter()
            .enumerate()
            .filter(|(_, normal)| matches!(normal, Err(GeometryError::DegenerateFacet)))
            .map(|(position, _)| position)
            .collect())
    }

    /// Drop degenerate facets, keeping the point list untouched so existing
    /// indices stay valid. Returns the number of facets removed.
    pub fn remove_degenerate_facets(&mut self) -> Result<usize> {
        let original_count = self.facets.len();
        let normals = self.normals()?;
        let mut normals = normals.iter();
        self.facets
            .retain(|_| !matches!(normals.next(), Some(Err(GeometryError::DegenerateFacet))));
        Ok(original_count - self.facets.len())
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::Vector3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box over a set of points.
///
/// A box built from no points has no bounds; every accessor that depends on
/// them returns `None` in that case.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    bounds: Option<(Vector3, Vector3)>,
}

impl BoundingBox {
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    pub fn from_points(points: &[Vector3]) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.expand_to_include(point);
        }
        bbox
    }

    fn expand_to_include(&mut self, point: &Vector3) {
        let (min, max) = match self.bounds {
            None => (*point, *point),
            Some((min, max)) => (
                Vector3::new(
                    min.x().min(point.x()),
                    min.y().min(point.y()),
                    min.z().min(point.z()),
                ),
                Vector3::new(
                    max.x().max(point.x()),
                    max.y().max(point.y()),
                    max.z().max(point.z()),
                ),
            ),
        };
        self.bounds = Some((min, max));
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn min(&self) -> Option<Vector3> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<Vector3> {
        self.bounds.map(|(_, max)| max)
    }

    pub fn center(&self) -> Option<Vector3> {
        self.bounds.map(|(min, max)| {
            Vector3::new(
                (min.x() + max.x()) / 2.0,
                (min.y() + max.y()) / 2.0,
                (min.z() + max.z()) / 2.0,
            )
        })
    }

    /// Extent along x.
    pub fn length(&self) -> Option<f64> {
        self.bounds.map(|(min, max)| (max.x() - min.x()).abs())
    }

    /// Extent along y.
    pub fn width(&self) -> Option<f64> {
        self.bounds.map(|(min, max)| (max.y() - min.y()).abs())
    }

    /// Extent along z.
    pub fn height(&self) -> Option<f64> {
        self.bounds.map(|(min, max)| (max.z() - min.z()).abs())
    }

    pub fn volume(&self) -> Option<f64> {
        Some(self.length()? * self.width()? * self.height()?)
    }
}

impl From<Vector3> for BoundingBox {
    fn from(point: Vector3) -> Self {
        Self {
            bounds: Some((point, point)),
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for geometry operations

use thiserror::Error;

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by the vector, normal and serializer code.
///
/// None of these are recovered inside the crate. A converter is expected to
/// catch [`GeometryError::DegenerateFacet`] per facet and treat the other
/// variants as fatal for the whole mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Wrong arity, out-of-range index or otherwise malformed input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division of a vector by a zero scalar.
    #[error("division by 0")]
    DivisionByZero,

    /// Facet normal has zero length.
    #[error("degenerate facet")]
    DegenerateFacet,
}

impl GeometryError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }
}

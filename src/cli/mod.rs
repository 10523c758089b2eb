// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for stl2pov

pub mod converter;
pub mod reporter;

pub use converter::{ConversionError, ConversionReport, Converter, MeshSummary};
pub use reporter::Reporter;

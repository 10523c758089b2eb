// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw component-wise algebra over fixed-size coordinate arrays.
//!
//! These helpers are unchecked: `div` by zero yields IEEE infinities or NaN.
//! The public API is [`super::Vector2`] / [`super::Vector3`], which guard
//! against that.

use crate::io::format_scalar;

pub(crate) fn add<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + b[i])
}

pub(crate) fn sub<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

pub(crate) fn mul<const N: usize>(v: [f64; N], s: f64) -> [f64; N] {
    v.map(|c| s * c)
}

pub(crate) fn div<const N: usize>(v: [f64; N], s: f64) -> [f64; N] {
    v.map(|c| c / s)
}

pub(crate) fn eq<const N: usize>(a: [f64; N], b: [f64; N]) -> bool {
    a.iter().zip(b.iter()).all(|(i, j)| i == j)
}

pub(crate) fn ne<const N: usize>(a: [f64; N], b: [f64; N]) -> bool {
    a.iter().zip(b.iter()).any(|(i, j)| i != j)
}

/// Euclidean norm. Falls back to scaling by the largest component when the
/// plain sum of squares underflows or overflows, so the result is zero only
/// for the zero vector.
pub(crate) fn length<const N: usize>(v: [f64; N]) -> f64 {
    let sum: f64 = v.iter().map(|c| c * c).sum();
    if sum.is_normal() {
        return sum.sqrt();
    }

    let scale = v.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }
    scale * v.iter().map(|c| (c / scale).powi(2)).sum::<f64>().sqrt()
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    let [ax, ay, az] = a;
    let [bx, by, bz] = b;
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

pub(crate) fn dot<const N: usize>(a: [f64; N], b: [f64; N]) -> f64 {
    a.iter().zip(b.iter()).map(|(i, j)| i * j).sum()
}

/// Comma separated components, for diagnostics.
pub(crate) fn mkstr<const N: usize>(v: [f64; N]) -> String {
    v.iter()
        .map(|&c| format_scalar(c))
        .collect::<Vec<_>>()
        .join(", ")
}

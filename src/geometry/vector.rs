// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Immutable 2D and 3D vector value types
//!
//! Equality is exact floating-point comparison, with no tolerance. `Eq` and
//! `Hash` are implemented so that vectors can key a point index; callers must
//! only hash finite coordinates.

use super::vecops;
use crate::error::{GeometryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Bit pattern of a component, with `-0.0` folded onto `0.0` so that values
/// which compare equal also hash equal.
fn component_bits(c: f64) -> u64 {
    if c == 0.0 {
        0.0f64.to_bits()
    } else {
        c.to_bits()
    }
}

fn arity_error(name: &str, expected: usize, got: usize) -> GeometryError {
    GeometryError::invalid_argument(format!(
        "a {name} needs exactly {expected} coordinates, got {got}"
    ))
}

/// A coordinate in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialOrd, Serialize, Deserialize)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Components ordered `(x, y)`.
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean length, recomputed on every call.
    pub fn length(&self) -> f64 {
        vecops::length(self.coords())
    }

    pub fn dot(&self, other: &Vector2) -> f64 {
        vecops::dot(self.coords(), other.coords())
    }

    /// Divide by a scalar, refusing a zero divisor.
    pub fn try_div(&self, scalar: f64) -> Result<Vector2> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(vecops::div(self.coords(), scalar).into())
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.coords()
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(arity_error("Vector2", 2, values.len())),
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        vecops::add(self.coords(), other.coords()).into()
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        vecops::sub(self.coords(), other.coords()).into()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        vecops::mul(self.coords(), scalar).into()
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self * -1.0
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        vecops::eq(self.coords(), other.coords())
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        vecops::ne(self.coords(), other.coords())
    }
}

impl Eq for Vector2 {}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(component_bits(self.x) ^ component_bits(self.y));
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", vecops::mkstr(self.coords()))
    }
}

/// A coordinate in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialOrd, Serialize, Deserialize)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components ordered `(x, y, z)`.
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length, recomputed on every call.
    pub fn length(&self) -> f64 {
        vecops::length(self.coords())
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        vecops::dot(self.coords(), other.coords())
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        vecops::cross(self.coords(), other.coords()).into()
    }

    /// Divide by a scalar, refusing a zero divisor.
    pub fn try_div(&self, scalar: f64) -> Result<Vector3> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(vecops::div(self.coords(), scalar).into())
    }

    /// Unit vector with the same direction.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] for the zero vector.
    pub fn normalized(&self) -> Result<Vector3> {
        self.try_div(self.length())
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.coords()
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(arity_error("Vector3", 3, values.len())),
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        vecops::add(self.coords(), other.coords()).into()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        vecops::sub(self.coords(), other.coords()).into()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        vecops::mul(self.coords(), scalar).into()
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.0
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        vecops::eq(self.coords(), other.coords())
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        vecops::ne(self.coords(), other.coords())
    }
}

impl Eq for Vector3 {}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(
            component_bits(self.x) ^ component_bits(self.y) ^ component_bits(self.z),
        );
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", vecops::mkstr(self.coords()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construction() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), v);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(Vector3::try_from(&[1.0, 2.0, 3.0][..]), Ok(v));
        assert_eq!(v.coords(), [1.0, 2.0, 3.0]);
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let err = Vector3::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));

        let err = Vector2::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = Vector3::new(1.5, -2.25, 8.0);
        let b = Vector3::new(0.5, 4.0, -3.0);
        assert_eq!(a + b - b, a);
        assert_eq!(a + b, b + a);

        let p = Vector2::new(3.0, 1.0);
        let q = Vector2::new(-0.5, 2.0);
        assert_eq!(p + q - q, p);
        assert_eq!(p + q, q + p);
    }

    #[test]
    fn test_scale_and_divide() {
        let v = Vector3::new(1.0, -2.0, 4.0);
        assert_eq!(v * 2.0, Vector3::new(2.0, -4.0, 8.0));
        assert_eq!(v.try_div(2.0), Ok(Vector3::new(0.5, -1.0, 2.0)));
        assert_eq!(-v, Vector3::new(-1.0, 2.0, -4.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Vector3::new(1.0, 1.0, 1.0).try_div(0.0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(
            Vector2::new(1.0, 1.0).try_div(-0.0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(
            Vector3::zero().normalized(),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn test_cross_and_dot() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(x.dot(&y), 0.0);

        let a = Vector3::new(3.0, -7.5, 2.0);
        assert!(a.cross(&a).is_zero());
        assert_eq!(Vector2::new(1.0, 2.0).dot(&Vector2::new(3.0, 4.0)), 11.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector3::zero().length(), 0.0);
        assert!(Vector3::new(0.0, 0.0, 1e-150).length() > 0.0);
        assert_eq!(Vector3::new(1e-200, 0.0, 0.0).length(), 1e-200);
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector3::new(0.1 + 0.2, 0.0, 0.0);
        let b = Vector3::new(0.3, 0.0, 0.0);
        assert_ne!(a, b);
        assert!(a != b);
        assert!(Vector3::new(1.0, 2.0, 3.0) < Vector3::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_equal_vectors_hash_equal() {
        let a = Vector3::new(0.0, 1.0, 2.0);
        let b = Vector3::new(-0.0, 1.0, 2.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(
            hash_of(&Vector2::new(-0.0, 5.0)),
            hash_of(&Vector2::new(0.0, 5.0))
        );
    }

    #[test]
    fn test_nalgebra_interop() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let n: nalgebra::Vector3<f64> = v.into();
        let p: nalgebra::Point3<f64> = v.into();
        assert_eq!(Vector3::from(n), v);
        assert_eq!(Vector3::from(p), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.5, -2.0, 0.25).to_string(), "(1.5, -2.0, 0.25)");
        assert_eq!(Vector2::new(1.0, 2.5).to_string(), "(1.0, 2.5)");
    }
}

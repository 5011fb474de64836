use crate::{PhysicsError, Real, Result};
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A point or direction in 3-space.
///
/// Every operation comes in a pure form that returns a new vector and an
/// in-place `_assign` form that overwrites `x`, `y` and `z` of the receiver
/// with exactly what the pure form would have returned.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,

    /// Alignment padding, only ever set at construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pad: Option<Real>,
}

impl Vector3 {
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z, pad: None }
    }

    pub fn with_pad(x: Real, y: Real, z: Real, pad: Real) -> Self {
        Self {
            x,
            y,
            z,
            pad: Some(pad),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub fn z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn pad(&self) -> Option<Real> {
        self.pad
    }

    pub fn magnitude(&self) -> Real {
        self.square_magnitude().sqrt()
    }

    /// The squared length, for comparisons that don't need the square root.
    pub fn square_magnitude(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the unit vector pointing the same way.
    /// The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let length = self.magnitude();
        if length > 0.0 {
            self.scalar_multiply(length.recip())
        } else {
            *self
        }
    }

    pub fn normalize_assign(&mut self) {
        self.set_components(self.normalize());
    }

    pub fn scalar_multiply(&self, scale: Real) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }

    pub fn scalar_multiply_assign(&mut self, scale: Real) {
        self.set_components(self.scalar_multiply(scale));
    }

    /// Computes `self + other * scale` without an intermediate vector.
    pub fn add_scaled_vector(&self, other: Self, scale: Real) -> Self {
        Self::new(
            self.x + other.x * scale,
            self.y + other.y * scale,
            self.z + other.z * scale,
        )
    }

    pub fn add_scaled_vector_assign(&mut self, other: Self, scale: Real) {
        self.set_components(self.add_scaled_vector(other, scale));
    }

    pub fn subtract_scaled_vector(&self, other: Self, scale: Real) -> Self {
        Self::new(
            self.x - other.x * scale,
            self.y - other.y * scale,
            self.z - other.z * scale,
        )
    }

    pub fn subtract_scaled_vector_assign(&mut self, other: Self, scale: Real) {
        self.set_components(self.subtract_scaled_vector(other, scale));
    }

    /// The Hadamard (componentwise) product.
    pub fn component_product(&self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn component_product_assign(&mut self, other: Self) {
        self.set_components(self.component_product(other));
    }

    pub fn scalar_product(&self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Alias of [`Vector3::scalar_product`].
    pub fn dot(&self, other: Self) -> Real {
        self.scalar_product(other)
    }

    pub fn vector_product(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn vector_product_assign(&mut self, other: Self) {
        self.set_components(self.vector_product(other));
    }

    /// Alias of [`Vector3::vector_product`].
    pub fn cross(&self, other: Self) -> Self {
        self.vector_product(other)
    }

    /// Builds a unit vector orthogonal to `self` by crossing the normalized
    /// receiver with `other` and crossing the normalized result back with it.
    ///
    /// Fails with [`PhysicsError::InvalidOperation`] when the two vectors
    /// are parallel.
    pub fn orthonormal(&self, other: Self) -> Result<Self> {
        let normal = self.normalize();
        let perpendicular = normal.cross(other);
        if perpendicular.square_magnitude() == 0.0 {
            return Err(PhysicsError::InvalidOperation(format!(
                "vectors are parallel: {:?} and {:?}",
                (self.x, self.y, self.z),
                (other.x, other.y, other.z)
            )));
        }
        Ok(perpendicular.normalize().cross(normal))
    }

    // The padding of the receiver is left alone
    fn set_components(&mut self, other: Self) {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
    }
}

// Padding carries no meaning so it takes no part in equality
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.set_components(*self + rhs);
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.set_components(*self - rhs);
    }
}

impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.component_product(rhs)
    }
}

impl MulAssign for Vector3 {
    fn mul_assign(&mut self, rhs: Self) {
        self.component_product_assign(rhs);
    }
}

impl Mul<Real> for Vector3 {
    type Output = Self;

    fn mul(self, value: Real) -> Self {
        self.scalar_multiply(value)
    }
}

impl MulAssign<Real> for Vector3 {
    fn mul_assign(&mut self, value: Real) {
        self.scalar_multiply_assign(value);
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scalar_multiply(-1.0)
    }
}

impl From<glm::DVec3> for Vector3 {
    fn from(vector: glm::DVec3) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for glm::DVec3 {
    fn from(vector: Vector3) -> Self {
        glm::vec3(vector.x, vector.y, vector.z)
    }
}

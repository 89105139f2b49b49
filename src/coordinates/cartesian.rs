//! # Cartesian Coordinate Module
//!
//! A 3D Cartesian representation used as the common ground between the
//! cylindrical vector algebra and ordinary linear algebra.
//!
//! ## Frame Convention
//!
//! The frame is right-handed and centred on the torus axis of symmetry:
//! - **X-axis**: Toroidal angle φ = 0 in the midplane
//! - **Y-axis**: Toroidal angle φ = π/2 in the midplane
//! - **Z-axis**: Along the torus axis of symmetry, shared with cylindrical Z
//!
//! ## Examples
//!
//! ```rust
//! use cylfield::coordinates::cartesian::Cartesian3;
//!
//! let radial = Cartesian3::new(1.0, 0.0, 0.0);
//! let axial = Cartesian3::new(0.0, 0.0, 1.0);
//!
//! assert_eq!(radial.dot(&axial), 0.0);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::cylindrical::Cylindrical3;

/// Three-dimensional Cartesian point or vector
///
/// Whether a value is a position, a velocity or a field vector depends on
/// the caller; the type carries no units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward φ = 0)
    pub x: f64,
    /// Y-component (toward φ = π/2)
    pub y: f64,
    /// Z-component (along the symmetry axis)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylfield::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Converts to cylindrical coordinates (R, φ, Z)
    ///
    /// The azimuth comes from the two-argument arctangent and lies in (−π, π].
    /// A point on the symmetry axis maps to φ = 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylfield::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let cyl = Cartesian3::new(0.0, 2.0, 1.0).to_cylindrical();
    /// assert!((cyl.r - 2.0).abs() < 1e-15);
    /// assert!((cyl.phi - PI / 2.0).abs() < 1e-15);
    /// assert_eq!(cyl.z, 1.0);
    /// ```
    pub fn to_cylindrical(&self) -> Cylindrical3 {
        Cylindrical3::from_cartesian(*self)
    }

    /// Dot product `x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylfield::coordinates::cartesian::Cartesian3;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.cross(&y_axis), Cartesian3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3::from(self.to_vector3().cross(&other.to_vector3()))
    }

    /// Views the point as a nalgebra `Vector3<f64>`
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3<f64>`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(coord: Cartesian3) -> Self {
        coord.to_vector3()
    }
}

impl From<Cylindrical3> for Cartesian3 {
    fn from(cyl: Cylindrical3) -> Self {
        cyl.to_cartesian()
    }
}

impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

//! # Cylindrical Vector Algebra
//!
//! Conversion between cylindrical (R, φ, Z) and Cartesian (x, y, z)
//! coordinates, and vector arithmetic carried out directly on cylindrical
//! triples so that trajectory code does not need to bounce through Cartesian
//! space on every step.
//!
//! ## Two layers
//!
//! - Free functions (`cylindrical_to_cartesian`, `cylindrical_add`, ...) take
//!   bare components and are generic over [`num_traits::Float`], so they work
//!   for `f32` as well as `f64`.
//! - [`Cylindrical3`] wraps an `f64` triple and exposes the same operations as
//!   methods and operator impls.
//!
//! Elementwise versions over `ndarray` sequences live in
//! [`crate::coordinates::vectorized`].
//!
//! ## Singular points
//!
//! Nothing here validates its input. Inputs that hit a singularity yield
//! IEEE infinities or NaN instead of an error, and the azimuth of a vector
//! with R = 0 is whatever the two-argument arctangent returns for (0, 0).
//!
//! ## Examples
//!
//! ```rust
//! use cylfield::coordinates::cylindrical::{cylindrical_add, cylindrical_to_cartesian};
//! use std::f64::consts::PI;
//!
//! let (x, y, z) = cylindrical_to_cartesian(1.0, PI / 2.0, 5.0);
//! assert!(x.abs() < 1e-15);
//! assert!((y - 1.0).abs() < 1e-15);
//! assert_eq!(z, 5.0);
//!
//! // Two opposite unit vectors cancel
//! let (r, _phi, z) = cylindrical_add(1.0, 0.0, 0.0, 1.0, PI, 0.0);
//! assert!(r.abs() < 1e-7);
//! assert_eq!(z, 0.0);
//! ```

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::cartesian::Cartesian3;

/// Converts cylindrical components to Cartesian components
///
/// `x = R·cos φ`, `y = R·sin φ`, `z = Z`
pub fn cylindrical_to_cartesian<T: Float>(r: T, phi: T, z: T) -> (T, T, T) {
    let (sin_phi, cos_phi) = phi.sin_cos();
    (r * cos_phi, r * sin_phi, z)
}

/// Converts Cartesian components to cylindrical components
///
/// `R = √(x² + y²)`, `φ = atan2(y, x)`, `Z = z`
///
/// The azimuth uses the two-argument arctangent, so the result lies in
/// (−π, π] and this is a true inverse of [`cylindrical_to_cartesian`] for
/// every (x, y) ≠ (0, 0), including x = 0 and the left half-plane where
/// `atan(y / x)` would pick the wrong branch. On the axis the azimuth is
/// `atan2(±0, ±0)`, i.e. 0 or ±π.
pub fn cartesian_to_cylindrical<T: Float>(x: T, y: T, z: T) -> (T, T, T) {
    (x.hypot(y), y.atan2(x), z)
}

/// Component-wise cross product of two cylindrical triples
///
/// ```text
/// R = φ₁·Z₂ − Z₁·φ₂
/// φ = −(R₁·Z₂ − Z₁·R₂)
/// Z = R₁·φ₂ − φ₁·R₂
/// ```
///
/// The triples are treated as if their (R, φ, Z) slots held orthonormal
/// components in a shared frame. This is not the geometric cross product of
/// two cylindrical position vectors: no unit-vector coupling between the R
/// and φ slots is applied, and the φ slot is used as a length, not an angle.
/// Trajectory code relies on exactly this formula when it crosses velocity
/// and field components that are already expressed in the local
/// (ê_R, ê_φ, ê_Z) basis.
pub fn cylindrical_cross<T: Float>(r1: T, phi1: T, z1: T, r2: T, phi2: T, z2: T) -> (T, T, T) {
    let r = phi1 * z2 - z1 * phi2;
    let phi = -(r1 * z2 - z1 * r2);
    let z = r1 * phi2 - phi1 * r2;
    (r, phi, z)
}

/// Inner product of two cylindrical vectors
///
/// Both vectors are converted with [`cylindrical_to_cartesian`] and the
/// ordinary dot product is returned, so the result does not depend on the
/// azimuthal reference.
pub fn cylindrical_inner<T: Float>(r1: T, phi1: T, z1: T, r2: T, phi2: T, z2: T) -> T {
    let (x1, y1, z1) = cylindrical_to_cartesian(r1, phi1, z1);
    let (x2, y2, z2) = cylindrical_to_cartesian(r2, phi2, z2);
    x1 * x2 + y1 * y2 + z1 * z2
}

/// Adds two cylindrical vectors anchored at the same origin
///
/// ```text
/// R = √(R₁² + R₂² + 2·R₁·R₂·cos(φ₂ − φ₁))
/// φ = φ₁ + atan2(R₂·sin(φ₂ − φ₁), R₁ + R₂·cos(φ₂ − φ₁))
/// Z = Z₁ + Z₂
/// ```
///
/// The returned azimuth is measured from φ₁ and is not wrapped, so it can
/// leave (−π, π] when φ₁ is large.
pub fn cylindrical_add<T: Float>(r1: T, phi1: T, z1: T, r2: T, phi2: T, z2: T) -> (T, T, T) {
    let two = T::one() + T::one();
    let (sin_dphi, cos_dphi) = (phi2 - phi1).sin_cos();

    let r = (r1 * r1 + r2 * r2 + two * r1 * r2 * cos_dphi).sqrt();
    let phi = phi1 + (r2 * sin_dphi).atan2(r1 + r2 * cos_dphi);
    (r, phi, z1 + z2)
}

/// A point or vector in cylindrical coordinates
///
/// # Fields
///
/// - `r`: radial distance from the symmetry axis (non-negative by convention)
/// - `phi`: azimuthal (toroidal) angle in radians
/// - `z`: height along the symmetry axis
///
/// Whether the triple is a position or a vector anchored at a position is
/// up to the caller. Field models in [`crate::fields`] return their vectors
/// in the local (ê_R, ê_φ, ê_Z) basis using this same type.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cylindrical3 {
    /// Radial distance R
    pub r: f64,
    /// Azimuth φ in radians
    pub phi: f64,
    /// Axial height Z
    pub z: f64,
}

impl Cylindrical3 {
    /// Creates a new cylindrical coordinate
    ///
    /// No normalization is applied: negative `r` and azimuths outside
    /// (−π, π] are stored as given.
    pub fn new(r: f64, phi: f64, z: f64) -> Self {
        Cylindrical3 { r, phi, z }
    }

    /// Builds a cylindrical coordinate from a `(R, φ, Z)` tuple
    pub fn from_tuple((r, phi, z): (f64, f64, f64)) -> Self {
        Cylindrical3 { r, phi, z }
    }

    /// Returns the components as an `(R, φ, Z)` tuple
    pub fn to_tuple(self) -> (f64, f64, f64) {
        (self.r, self.phi, self.z)
    }

    /// Converts a Cartesian coordinate using [`cartesian_to_cylindrical`]
    pub fn from_cartesian(cart: Cartesian3) -> Self {
        Self::from_tuple(cartesian_to_cylindrical(cart.x, cart.y, cart.z))
    }

    /// Converts to Cartesian using [`cylindrical_to_cartesian`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cylfield::coordinates::{Cartesian3, Cylindrical3};
    ///
    /// let cart = Cylindrical3::new(1.0, 0.0, 0.0).to_cartesian();
    /// assert_eq!(cart, Cartesian3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn to_cartesian(&self) -> Cartesian3 {
        let (x, y, z) = cylindrical_to_cartesian(self.r, self.phi, self.z);
        Cartesian3::new(x, y, z)
    }

    /// Inner product with another cylindrical vector, see [`cylindrical_inner`]
    pub fn inner(&self, other: &Cylindrical3) -> f64 {
        cylindrical_inner(self.r, self.phi, self.z, other.r, other.phi, other.z)
    }

    /// Component-wise cross product, see [`cylindrical_cross`]
    ///
    /// Named `component_cross` rather than `cross` because it is not the
    /// geometric cross product of two positions.
    pub fn component_cross(&self, other: &Cylindrical3) -> Cylindrical3 {
        Self::from_tuple(cylindrical_cross(
            self.r, self.phi, self.z, other.r, other.phi, other.z,
        ))
    }
}

impl From<Cartesian3> for Cylindrical3 {
    fn from(cart: Cartesian3) -> Self {
        Cylindrical3::from_cartesian(cart)
    }
}

impl std::ops::Add for Cylindrical3 {
    type Output = Cylindrical3;

    /// Vector addition, see [`cylindrical_add`]
    fn add(self, other: Cylindrical3) -> Cylindrical3 {
        Cylindrical3::from_tuple(cylindrical_add(
            self.r, self.phi, self.z, other.r, other.phi, other.z,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;
    use std::f64::consts::PI;

    /// Compares two azimuths modulo 2π
    fn assert_same_angle(a: f64, b: f64, eps: f64) {
        let diff = (a - b).rem_euclid(2.0 * PI);
        let diff = diff.min(2.0 * PI - diff);
        assert!(diff < eps, "angles differ: {} vs {}", a, b);
    }

    #[test]
    fn test_to_cartesian_unit_radial() {
        assert_eq!(cylindrical_to_cartesian(1.0, 0.0, 0.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_to_cartesian_quarter_turn() {
        let (x, y, z) = cylindrical_to_cartesian(1.0, PI / 2.0, 5.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-15);
        assert_eq!(z, 5.0);
    }

    #[test]
    fn test_to_cylindrical_keeps_z() {
        let (_, _, z) = cartesian_to_cylindrical(3.0, 4.0, -7.25);
        assert_eq!(z, -7.25);
    }

    #[rstest]
    #[case(0.0, 2.0, PI / 2.0)]
    #[case(0.0, -2.0, -PI / 2.0)]
    #[case(-2.0, 0.0, PI)]
    #[case(-1.0, 1.0, 3.0 * PI / 4.0)]
    #[case(1.0, -1.0, -PI / 4.0)]
    fn test_to_cylindrical_azimuth_all_quadrants(
        #[case] x: f64,
        #[case] y: f64,
        #[case] expected_phi: f64,
    ) {
        let (r, phi, _) = cartesian_to_cylindrical(x, y, 0.0);
        assert_relative_eq!(r, x.hypot(y), epsilon = 1e-15);
        assert_abs_diff_eq!(phi, expected_phi, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_random_samples() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..500 {
            let x: f64 = rng.gen_range(-10.0..10.0);
            let y: f64 = rng.gen_range(-10.0..10.0);
            let z: f64 = rng.gen_range(-10.0..10.0);

            let (r, phi, zc) = cartesian_to_cylindrical(x, y, z);
            let (xb, yb, zb) = cylindrical_to_cartesian(r, phi, zc);

            assert_abs_diff_eq!(xb, x, epsilon = 1e-12);
            assert_abs_diff_eq!(yb, y, epsilon = 1e-12);
            assert_eq!(zb, z);
        }
    }

    #[test]
    fn test_inverse_on_restricted_domain() {
        // R > 0 and φ in (−π/2, π/2) recovers the original triple exactly
        for &(r, phi, z) in &[(1.0, 0.3, 2.0), (4.5, -1.2, -0.5), (0.01, 1.5, 0.0)] {
            let (x, y, zc) = cylindrical_to_cartesian(r, phi, z);
            let (rb, phib, zb) = cartesian_to_cylindrical(x, y, zc);
            assert_relative_eq!(rb, r, max_relative = 1e-14);
            assert_abs_diff_eq!(phib, phi, epsilon = 1e-14);
            assert_eq!(zb, z);
        }
    }

    #[test]
    fn test_cross_formula_verbatim() {
        let (r, phi, z) = cylindrical_cross(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(r, 2.0 * 6.0 - 3.0 * 5.0);
        assert_eq!(phi, -(1.0 * 6.0 - 3.0 * 4.0));
        assert_eq!(z, 1.0 * 5.0 - 2.0 * 4.0);
    }

    #[test]
    fn test_cross_matches_cartesian_componentwise() {
        // Same arithmetic as the Cartesian cross product with (R, φ, Z) in the (x, y, z) slots
        let a = Cartesian3::new(0.3, -1.1, 2.0);
        let b = Cartesian3::new(1.7, 0.4, -0.9);
        let expected = a.cross(&b);
        let (r, phi, z) = cylindrical_cross(a.x, a.y, a.z, b.x, b.y, b.z);
        assert_abs_diff_eq!(r, expected.x, epsilon = 1e-15);
        assert_abs_diff_eq!(phi, expected.y, epsilon = 1e-15);
        assert_abs_diff_eq!(z, expected.z, epsilon = 1e-15);
    }

    #[test]
    fn test_inner_parallel_unit_vectors() {
        assert_eq!(cylindrical_inner(1.0, 0.0, 0.0, 1.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_inner_orthogonal_and_axial() {
        let dot = cylindrical_inner(2.0, 0.0, 0.0, 3.0, PI / 2.0, 0.0);
        assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-15);

        let dot = cylindrical_inner(0.0, 1.0, 2.0, 0.0, -3.0, 4.0);
        assert_eq!(dot, 8.0);
    }

    #[test]
    fn test_inner_symmetry_random_samples() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let a: [f64; 3] = [rng.gen_range(0.0..5.0), rng.gen_range(-PI..PI), rng.gen_range(-5.0..5.0)];
            let b: [f64; 3] = [rng.gen_range(0.0..5.0), rng.gen_range(-PI..PI), rng.gen_range(-5.0..5.0)];

            let ab = cylindrical_inner(a[0], a[1], a[2], b[0], b[1], b[2]);
            let ba = cylindrical_inner(b[0], b[1], b[2], a[0], a[1], a[2]);
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn test_add_opposite_unit_vectors_cancel() {
        let (r, _phi, z) = cylindrical_add(1.0, 0.0, 0.0, 1.0, PI, 0.0);
        assert_abs_diff_eq!(r, 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-15);
    }

    #[rstest]
    #[case(1.0, 0.0, 0.0)]
    #[case(2.5, 1.0, -3.0)]
    #[case(0.7, -2.8, 4.0)]
    fn test_add_identity(#[case] r: f64, #[case] phi: f64, #[case] z: f64) {
        let (rs, phis, zs) = cylindrical_add(r, phi, z, 0.0, phi, 0.0);
        assert_relative_eq!(rs, r, max_relative = 1e-15);
        assert_abs_diff_eq!(phis, phi, epsilon = 1e-15);
        assert_eq!(zs, z);
    }

    #[test]
    fn test_add_commutative_random_samples() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let (r1, phi1, z1): (f64, f64, f64) = (rng.gen_range(0.1..5.0), rng.gen_range(-PI..PI), rng.gen_range(-5.0..5.0));
            let (r2, phi2, z2): (f64, f64, f64) = (rng.gen_range(0.1..5.0), rng.gen_range(-PI..PI), rng.gen_range(-5.0..5.0));

            let (ra, phia, za) = cylindrical_add(r1, phi1, z1, r2, phi2, z2);
            let (rb, phib, zb) = cylindrical_add(r2, phi2, z2, r1, phi1, z1);

            assert_abs_diff_eq!(ra, rb, epsilon = 1e-12);
            assert_abs_diff_eq!(za, zb, epsilon = 1e-12);
            if ra > 1e-3 {
                assert_same_angle(phia, phib, 1e-9);
            }
        }
    }

    #[test]
    fn test_add_matches_cartesian_sum() {
        let a = Cylindrical3::new(1.5, 0.3, 1.0);
        let b = Cylindrical3::new(0.8, 2.1, -0.5);

        let sum = a + b;
        let expected = a.to_cartesian() + b.to_cartesian();
        let actual = sum.to_cartesian();
        assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_generic_over_f32() {
        let (x, y, z) = cylindrical_to_cartesian(2.0_f32, 0.0_f32, 1.0_f32);
        assert_eq!((x, y, z), (2.0, 0.0, 1.0));

        let dot = cylindrical_inner(1.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(dot, 1.0_f32);
    }

    #[test]
    fn test_singularities_propagate() {
        let (x, y, z) = cylindrical_to_cartesian(f64::NAN, 0.0, 1.0);
        assert!(x.is_nan());
        assert!(y.is_nan());
        assert_eq!(z, 1.0);

        let (r, _, _) = cartesian_to_cylindrical(f64::INFINITY, 1.0, 0.0);
        assert!(r.is_infinite());
    }

    #[test]
    fn test_struct_methods() {
        let a = Cylindrical3::new(1.0, 0.0, 2.0);
        let b = Cylindrical3::new(1.0, 0.0, -1.0);

        assert_eq!(a.inner(&b), -1.0);
        assert_eq!(
            a.component_cross(&b),
            Cylindrical3::from_tuple(cylindrical_cross(1.0, 0.0, 2.0, 1.0, 0.0, -1.0))
        );
        assert_eq!(a.to_tuple(), (1.0, 0.0, 2.0));
    }
}

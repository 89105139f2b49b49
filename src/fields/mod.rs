//! Analytic tokamak field models
//!
//! The models are written in the local cylindrical basis (ê_R, ê_φ, ê_Z) and
//! return their field vectors as [`Cylindrical3`] triples whose `phi` slot is
//! the toroidal component, not an angle. The distance from the magnetic axis,
//!
//! ```text
//! r = √((R − R0)² + Z²)
//! ```
//!
//! appears in a denominator of several components, so the models are singular
//! on the axis itself (and at R = 0). No guard is applied: evaluating there
//! yields NaN or infinite components.
//!
//! Each model is available as a free function taking its parameters
//! explicitly and as a parameter struct implementing [`FieldModel`], which
//! adds elementwise evaluation over `ndarray` sequences. The [`vectorized`]
//! module exposes the same models, and [`b_star`], as free functions over
//! arrays.

pub mod vectorized;

use log::trace;
use ndarray::{ArrayView1, Zip};

use crate::config::TokamakConfig;
use crate::constants::{DEFAULT_B0, DEFAULT_BP0, DEFAULT_E0, DEFAULT_EP0, DEFAULT_MAJOR_RADIUS};
use crate::coordinates::vectorized::{check_lengths, unzip3, Components};
use crate::coordinates::Cylindrical3;
use crate::Result;

/// Distance from the magnetic axis in the poloidal plane
fn minor_radius(pos: &Cylindrical3, r0: f64) -> f64 {
    let r = (pos.r - r0).hypot(pos.z);
    if r == 0.0 {
        trace!("field evaluated on the magnetic axis (R = {}, Z = {})", pos.r, pos.z);
    }
    r
}

/// Tokamak magnetic field of assignment question 3
///
/// ```text
/// B_R = Bp0·Z·R0 / (r·R)
/// B_φ = B0·R0 / R
/// B_Z = Bp0·(R0 − R)·R0 / (r·R)
/// ```
///
/// A 1/R toroidal field plus a poloidal field of constant magnitude
/// `Bp0·R0/R` circulating around the magnetic axis.
pub fn b_field_3(pos: &Cylindrical3, r0: f64, b0: f64, bp0: f64) -> Cylindrical3 {
    let r = minor_radius(pos, r0);
    Cylindrical3::new(
        bp0 * pos.z * r0 / (r * pos.r),
        b0 * r0 / pos.r,
        bp0 * (r0 - pos.r) * r0 / (r * pos.r),
    )
}

/// Electric field of assignment question 3: identically zero
///
/// The amplitudes are accepted so the signature lines up with
/// [`e_field_5`]; they do not affect the result.
pub fn e_field_3(_pos: &Cylindrical3, _r0: f64, _e0: f64, _ep0: f64) -> Cylindrical3 {
    Cylindrical3::new(0.0, 0.0, 0.0)
}

/// Electric field of assignment question 5
///
/// ```text
/// E_R = E0·(R − R0) / r
/// E_φ = 0
/// E_Z = E0·Z / r
/// ```
///
/// A field of constant magnitude `E0` pointing radially away from the
/// magnetic axis. `ep0` is part of the model signature but unused.
pub fn e_field_5(pos: &Cylindrical3, r0: f64, e0: f64, _ep0: f64) -> Cylindrical3 {
    let r = minor_radius(pos, r0);
    Cylindrical3::new(e0 * (pos.r - r0) / r, 0.0, e0 * pos.z / r)
}

/// Rescales a magnetic field for the generalized-toroidal-momentum pusher
///
/// ```text
/// B*_R = q·dt·B_R / m
/// B*_φ = q·dt·B_φ / m
/// B*_Z = q·dt·(B_Z + m·(1.5·v_φ,n + 0.5·v_φ,n−1) / (q·R)) / m
/// ```
///
/// `vphi_current` and `vphi_old` are the toroidal velocities at the current
/// and previous step; their 3/2, 1/2 weighting extrapolates v_φ to the
/// half step.
pub fn b_star(
    b: &Cylindrical3,
    r: f64,
    q: f64,
    dt: f64,
    m: f64,
    vphi_current: f64,
    vphi_old: f64,
) -> Cylindrical3 {
    Cylindrical3::new(
        q * dt * b.r / m,
        q * dt * b.phi / m,
        q * dt * (b.z + m * (1.5 * vphi_current + 0.5 * vphi_old) / (q * r)) / m,
    )
}

/// A static vector field defined at every cylindrical position
pub trait FieldModel {
    /// Field vector at `pos`, in the local (ê_R, ê_φ, ê_Z) basis
    fn evaluate(&self, pos: &Cylindrical3) -> Cylindrical3;

    /// Evaluates the field at every index of equal-length position arrays
    fn evaluate_many<'a>(
        &self,
        r: ArrayView1<'a, f64>,
        phi: ArrayView1<'a, f64>,
        z: ArrayView1<'a, f64>,
    ) -> Result<Components> {
        check_lengths("evaluate_many", &[r, phi, z])?;
        let triples = Zip::from(r)
            .and(phi)
            .and(z)
            .map_collect(|&r, &phi, &z| self.evaluate(&Cylindrical3::new(r, phi, z)).to_tuple());
        Ok(unzip3(triples))
    }
}

/// Parameters of [`b_field_3`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField3 {
    /// Major radius of the magnetic axis (m)
    pub r0: f64,
    /// Toroidal field on the axis (T)
    pub b0: f64,
    /// Poloidal field amplitude (T)
    pub bp0: f64,
}

impl MagneticField3 {
    pub fn new(r0: f64, b0: f64, bp0: f64) -> Self {
        Self { r0, b0, bp0 }
    }

    pub fn from_config(config: &TokamakConfig) -> Self {
        Self::new(config.r0, config.b0, config.bp0)
    }
}

impl Default for MagneticField3 {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR_RADIUS, DEFAULT_B0, DEFAULT_BP0)
    }
}

impl FieldModel for MagneticField3 {
    fn evaluate(&self, pos: &Cylindrical3) -> Cylindrical3 {
        b_field_3(pos, self.r0, self.b0, self.bp0)
    }
}

/// Parameters of [`e_field_3`]; defaults to zero amplitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricField3 {
    pub r0: f64,
    pub e0: f64,
    pub ep0: f64,
}

impl ElectricField3 {
    pub fn new(r0: f64, e0: f64, ep0: f64) -> Self {
        Self { r0, e0, ep0 }
    }
}

impl Default for ElectricField3 {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR_RADIUS, 0.0, 0.0)
    }
}

impl FieldModel for ElectricField3 {
    fn evaluate(&self, pos: &Cylindrical3) -> Cylindrical3 {
        e_field_3(pos, self.r0, self.e0, self.ep0)
    }
}

/// Parameters of [`e_field_5`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricField5 {
    /// Major radius of the magnetic axis (m)
    pub r0: f64,
    /// Field magnitude (V/m)
    pub e0: f64,
    /// Unused secondary amplitude, kept for parity with the other models
    pub ep0: f64,
}

impl ElectricField5 {
    pub fn new(r0: f64, e0: f64, ep0: f64) -> Self {
        Self { r0, e0, ep0 }
    }

    pub fn from_config(config: &TokamakConfig) -> Self {
        Self::new(config.r0, config.e0, config.ep0)
    }
}

impl Default for ElectricField5 {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR_RADIUS, DEFAULT_E0, DEFAULT_EP0)
    }
}

impl FieldModel for ElectricField5 {
    fn evaluate(&self, pos: &Cylindrical3) -> Cylindrical3 {
        e_field_5(pos, self.r0, self.e0, self.ep0)
    }
}

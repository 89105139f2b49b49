//! Plasma parameters for a single charged particle

use ndarray::{Array1, ArrayView1};

use crate::constants::{DEFAULT_CHARGE_NUMBER, ELEMENTARY_CHARGE, TAU};

/// Gyration (cyclotron) period of a particle in a magnetic field
///
/// `T = 2π·m / (Z·e·B)`
///
/// # Arguments
///
/// * `mass` - Particle mass in kilograms
/// * `b` - Magnetic field strength in tesla
/// * `charge_number` - Charge state Z of the particle
/// * `elementary_charge` - Value of e in coulombs
///
/// A zero field or charge yields an infinite period.
///
/// # Examples
///
/// ```rust
/// use cylfield::plasma::gyration_time;
///
/// // Proton in a 1 T field: about 65.6 ns
/// let t = gyration_time(1.672_621_924e-27, 1.0, 1, 1.602e-19);
/// assert!((t - 6.56e-8).abs() < 1e-10);
/// ```
pub fn gyration_time(mass: f64, b: f64, charge_number: u32, elementary_charge: f64) -> f64 {
    (mass * TAU) / (charge_number as f64 * elementary_charge * b)
}

/// [`gyration_time`] with Z = 2 and e = 1.602e-19 C
pub fn gyration_time_default(mass: f64, b: f64) -> f64 {
    gyration_time(mass, b, DEFAULT_CHARGE_NUMBER, ELEMENTARY_CHARGE)
}

/// Gyration period for each field strength in `b`
pub fn gyration_times(
    mass: f64,
    b: ArrayView1<'_, f64>,
    charge_number: u32,
    elementary_charge: f64,
) -> Array1<f64> {
    b.mapv(|b| gyration_time(mass, b, charge_number, elementary_charge))
}

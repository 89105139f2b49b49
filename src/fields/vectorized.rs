//! Elementwise field models over `ndarray` position sequences
//!
//! Thin wrappers that evaluate the scalar models of [`crate::fields`] at
//! every index of equal-length arrays. Positions are passed as `(R, φ, Z)`
//! views; results come back as `(F_R, F_φ, F_Z)` component arrays.

use ndarray::{Array1, ArrayView1, Zip};

use super::{ElectricField3, ElectricField5, FieldModel, MagneticField3};
use crate::coordinates::vectorized::{check_lengths, pack, unzip3, Components};
use crate::Result;

/// Elementwise [`b_field_3`](super::b_field_3)
pub fn b_field_3<'a>(
    r: ArrayView1<'a, f64>,
    phi: ArrayView1<'a, f64>,
    z: ArrayView1<'a, f64>,
    r0: f64,
    b0: f64,
    bp0: f64,
) -> Result<Components> {
    MagneticField3::new(r0, b0, bp0).evaluate_many(r, phi, z)
}

/// Elementwise [`e_field_3`](super::e_field_3)
pub fn e_field_3<'a>(
    r: ArrayView1<'a, f64>,
    phi: ArrayView1<'a, f64>,
    z: ArrayView1<'a, f64>,
    r0: f64,
    e0: f64,
    ep0: f64,
) -> Result<Components> {
    ElectricField3::new(r0, e0, ep0).evaluate_many(r, phi, z)
}

/// Elementwise [`e_field_5`](super::e_field_5)
pub fn e_field_5<'a>(
    r: ArrayView1<'a, f64>,
    phi: ArrayView1<'a, f64>,
    z: ArrayView1<'a, f64>,
    r0: f64,
    e0: f64,
    ep0: f64,
) -> Result<Components> {
    ElectricField5::new(r0, e0, ep0).evaluate_many(r, phi, z)
}

/// Elementwise [`b_star`](super::b_star)
///
/// `b` holds the field components at each particle, `r` the particles'
/// major radii and the two velocity arrays their toroidal velocities at the
/// current and previous step. The charge, time step and mass are shared.
pub fn b_star(
    b: &Components,
    r: &Array1<f64>,
    q: f64,
    dt: f64,
    m: f64,
    vphi_current: &Array1<f64>,
    vphi_old: &Array1<f64>,
) -> Result<Components> {
    check_lengths(
        "b_star",
        &[
            b.0.view(),
            b.1.view(),
            b.2.view(),
            r.view(),
            vphi_current.view(),
            vphi_old.view(),
        ],
    )?;
    let fields = pack(b);
    let triples = Zip::from(&fields)
        .and(r)
        .and(vphi_current)
        .and(vphi_old)
        .map_collect(|b, &r, &vc, &vo| super::b_star(b, r, q, dt, m, vc, vo).to_tuple());
    Ok(unzip3(triples))
}

//! Elementwise cylindrical algebra over `ndarray` sequences
//!
//! Each function applies the scalar formula from
//! [`crate::coordinates::cylindrical`] to every index of equal-length
//! one-dimensional arrays. Lengths are checked up front; a mismatch returns
//! [`CylfieldError::ShapeMismatch`] instead of panicking inside `Zip`.

use log::warn;
use ndarray::{Array1, ArrayView1, Zip};

use super::cylindrical::{
    cartesian_to_cylindrical as scalar_to_cylindrical, cylindrical_add as scalar_add,
    cylindrical_cross as scalar_cross, cylindrical_inner as scalar_inner,
    cylindrical_to_cartesian as scalar_to_cartesian, Cylindrical3,
};
use crate::{CylfieldError, Result};

/// Three parallel component arrays, e.g. `(R, φ, Z)` or `(x, y, z)`
pub type Components = (Array1<f64>, Array1<f64>, Array1<f64>);

/// Verifies that every view has the length of the first one
pub(crate) fn check_lengths(
    operation: &'static str,
    views: &[ArrayView1<'_, f64>],
) -> Result<usize> {
    let expected = views.first().map_or(0, |v| v.len());
    for view in views.iter().skip(1) {
        if view.len() != expected {
            warn!(
                "{}: rejecting input of length {} (expected {})",
                operation,
                view.len(),
                expected
            );
            return Err(CylfieldError::ShapeMismatch {
                operation,
                expected,
                actual: view.len(),
            });
        }
    }
    Ok(expected)
}

pub(crate) fn unzip3(triples: Array1<(f64, f64, f64)>) -> Components {
    (
        triples.mapv(|t| t.0),
        triples.mapv(|t| t.1),
        triples.mapv(|t| t.2),
    )
}

/// Elementwise [`cylindrical_to_cartesian`](super::cylindrical::cylindrical_to_cartesian)
pub fn cylindrical_to_cartesian<'a>(
    r: ArrayView1<'a, f64>,
    phi: ArrayView1<'a, f64>,
    z: ArrayView1<'a, f64>,
) -> Result<Components> {
    check_lengths("cylindrical_to_cartesian", &[r, phi, z])?;
    let triples = Zip::from(r)
        .and(phi)
        .and(z)
        .map_collect(|&r, &phi, &z| scalar_to_cartesian(r, phi, z));
    Ok(unzip3(triples))
}

/// Elementwise [`cartesian_to_cylindrical`](super::cylindrical::cartesian_to_cylindrical)
pub fn cartesian_to_cylindrical<'a>(
    x: ArrayView1<'a, f64>,
    y: ArrayView1<'a, f64>,
    z: ArrayView1<'a, f64>,
) -> Result<Components> {
    check_lengths("cartesian_to_cylindrical", &[x, y, z])?;
    let triples = Zip::from(x)
        .and(y)
        .and(z)
        .map_collect(|&x, &y, &z| scalar_to_cylindrical(x, y, z));
    Ok(unzip3(triples))
}

/// Gathers three component arrays into one array of triples
pub(crate) fn pack(components: &Components) -> Array1<Cylindrical3> {
    Zip::from(&components.0)
        .and(&components.1)
        .and(&components.2)
        .map_collect(|&r, &phi, &z| Cylindrical3::new(r, phi, z))
}

/// Applies a binary operation to two equal-length sequences of cylindrical triples
fn zip_pairs<T, F>(
    operation: &'static str,
    a: &Components,
    b: &Components,
    f: F,
) -> Result<Array1<T>>
where
    F: Fn(&Cylindrical3, &Cylindrical3) -> T,
{
    check_lengths(
        operation,
        &[a.0.view(), a.1.view(), a.2.view(), b.0.view(), b.1.view(), b.2.view()],
    )?;
    let (lhs, rhs) = (pack(a), pack(b));
    Ok(Zip::from(&lhs).and(&rhs).map_collect(|a, b| f(a, b)))
}

/// Elementwise [`cylindrical_cross`](super::cylindrical::cylindrical_cross)
pub fn cylindrical_cross(a: &Components, b: &Components) -> Result<Components> {
    let triples = zip_pairs("cylindrical_cross", a, b, |a, b| {
        scalar_cross(a.r, a.phi, a.z, b.r, b.phi, b.z)
    })?;
    Ok(unzip3(triples))
}

/// Elementwise [`cylindrical_inner`](super::cylindrical::cylindrical_inner)
pub fn cylindrical_inner(a: &Components, b: &Components) -> Result<Array1<f64>> {
    zip_pairs("cylindrical_inner", a, b, |a, b| {
        scalar_inner(a.r, a.phi, a.z, b.r, b.phi, b.z)
    })
}

/// Elementwise [`cylindrical_add`](super::cylindrical::cylindrical_add)
pub fn cylindrical_add(a: &Components, b: &Components) -> Result<Components> {
    let triples = zip_pairs("cylindrical_add", a, b, |a, b| {
        scalar_add(a.r, a.phi, a.z, b.r, b.phi, b.z)
    })?;
    Ok(unzip3(triples))
}

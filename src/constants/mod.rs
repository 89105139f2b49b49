//! Physical constants and default model parameters

use std::f64::consts::PI;

// Particle physics
/// Elementary charge in coulombs, to the precision used by the gyration-time model
pub const ELEMENTARY_CHARGE: f64 = 1.602e-19;
/// Proton mass in kilograms
pub const PROTON_MASS: f64 = 1.672_621_924e-27;
/// Alpha particle (He-4 nucleus) mass in kilograms
pub const ALPHA_PARTICLE_MASS: f64 = 6.644_657_335_7e-27;
/// Default charge number used by [`crate::plasma::gyration_time`]
pub const DEFAULT_CHARGE_NUMBER: u32 = 2;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Tokamak field model defaults
/// Default major radius of the magnetic axis in meters
pub const DEFAULT_MAJOR_RADIUS: f64 = 1.0;
/// Default toroidal field amplitude on the magnetic axis in tesla
pub const DEFAULT_B0: f64 = 5.0;
/// Default poloidal field amplitude in tesla
pub const DEFAULT_BP0: f64 = 1.0;
/// Default radial electric field amplitude in V/m
pub const DEFAULT_E0: f64 = 5.0;
/// Default secondary electric field amplitude in V/m
pub const DEFAULT_EP0: f64 = 1.0;

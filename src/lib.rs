//! cylfield: cylindrical vector algebra and tokamak field models
//!
//! This crate provides the coordinate helpers needed to follow a charged
//! particle through a tokamak: conversion between cylindrical and Cartesian
//! coordinates, vector arithmetic expressed directly in cylindrical form,
//! analytic magnetic/electric field models and a few plasma parameters.
//!
//! All operations are pure functions. Scalar forms work on any
//! [`num_traits::Float`]; the `vectorized` modules apply the same formulas
//! elementwise over [`ndarray::Array1`] sequences.

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod fields;
pub mod plasma;

// Re-export commonly used types
pub use config::Config;
pub use coordinates::{Cartesian3, Cylindrical3};

/// Main error type for the cylfield library
#[derive(Debug, Error)]
pub enum CylfieldError {
    #[error("Shape mismatch in {operation}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cylfield operations
pub type Result<T> = std::result::Result<T, CylfieldError>;

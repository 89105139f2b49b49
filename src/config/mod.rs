//! JSON configuration for the field models and the test particle
//!
//! Every key is optional; missing keys fall back to the defaults in
//! [`crate::constants`]. An example file:
//!
//! ```json
//! {
//!   "tokamak": { "r0": 1.0, "b0": 5.0, "bp0": 1.0, "e0": 5.0, "ep0": 1.0 },
//!   "particle": { "mass": 6.6446573357e-27, "charge_number": 2 }
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALPHA_PARTICLE_MASS, DEFAULT_B0, DEFAULT_BP0, DEFAULT_CHARGE_NUMBER, DEFAULT_E0, DEFAULT_EP0,
    DEFAULT_MAJOR_RADIUS,
};
use crate::{CylfieldError, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokamak: TokamakConfig,
    pub particle: ParticleConfig,
}

/// Field model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokamakConfig {
    /// Major radius of the magnetic axis (m)
    pub r0: f64,
    /// Toroidal field on the axis (T)
    pub b0: f64,
    /// Poloidal field amplitude (T)
    pub bp0: f64,
    /// Electric field magnitude (V/m)
    pub e0: f64,
    /// Secondary electric amplitude (V/m)
    pub ep0: f64,
}

impl Default for TokamakConfig {
    fn default() -> Self {
        TokamakConfig {
            r0: DEFAULT_MAJOR_RADIUS,
            b0: DEFAULT_B0,
            bp0: DEFAULT_BP0,
            e0: DEFAULT_E0,
            ep0: DEFAULT_EP0,
        }
    }
}

/// Test particle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particle mass (kg)
    pub mass: f64,
    /// Charge state Z
    pub charge_number: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig {
            mass: ALPHA_PARTICLE_MASS,
            charge_number: DEFAULT_CHARGE_NUMBER,
        }
    }
}

impl Config {
    /// Parses and validates a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads `path` if given, otherwise returns the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Rejects parameters for which the models have no meaning
    ///
    /// Amplitudes may take any finite value, including zero and negative
    /// (reversed field) values.
    pub fn validate(&self) -> Result<()> {
        let t = &self.tokamak;
        if !(t.r0.is_finite() && t.r0 > 0.0) {
            return Err(CylfieldError::Config(format!(
                "tokamak.r0 must be positive and finite, got {}",
                t.r0
            )));
        }
        for (name, value) in [("b0", t.b0), ("bp0", t.bp0), ("e0", t.e0), ("ep0", t.ep0)] {
            if !value.is_finite() {
                return Err(CylfieldError::Config(format!(
                    "tokamak.{} must be finite, got {}",
                    name, value
                )));
            }
        }

        let p = &self.particle;
        if !(p.mass.is_finite() && p.mass > 0.0) {
            return Err(CylfieldError::Config(format!(
                "particle.mass must be positive and finite, got {}",
                p.mass
            )));
        }
        if p.charge_number == 0 {
            return Err(CylfieldError::Config(
                "particle.charge_number must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tokamak.r0, 1.0);
        assert_eq!(config.tokamak.b0, 5.0);
        assert_eq!(config.particle.charge_number, 2);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json_str(r#"{"tokamak": {"r0": 3.0}}"#).unwrap();
        assert_eq!(config.tokamak.r0, 3.0);
        assert_eq!(config.tokamak.bp0, DEFAULT_BP0);
        assert_eq!(config.particle, ParticleConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        for json in [
            r#"{"tokamak": {"r0": 0.0}}"#,
            r#"{"tokamak": {"r0": -1.0}}"#,
            r#"{"particle": {"mass": 0.0}}"#,
            r#"{"particle": {"charge_number": 0}}"#,
        ] {
            let result = Config::from_json_str(json);
            assert!(
                matches!(result, Err(CylfieldError::Config(_))),
                "accepted {}",
                json
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = Config::from_json_str(r#"{"tokamak": {"r0": "big"}}"#);
        assert!(matches!(result, Err(CylfieldError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tokamak": {{"r0": 1.65, "b0": 2.5}}, "particle": {{"mass": 1.0e-27, "charge_number": 1}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.tokamak.r0, 1.65);
        assert_eq!(config.tokamak.b0, 2.5);
        assert_eq!(config.particle.mass, 1.0e-27);
        assert_eq!(config.particle.charge_number, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(CylfieldError::Io(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None::<&Path>).unwrap();
        assert_eq!(config, Config::default());
    }
}

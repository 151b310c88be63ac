//! # Settings
//!
//! User settings, read from an optional TOML file. Every key is optional and
//! falls back to its default:
//!
//! ```toml
//! pi = "standard"                     # or "rational" (22/7)
//! mother_pipe_method = "perimeter"    # or "area"
//! default_material = "mild-steel"
//! store_path = "assets/saved_calcs.json"
//! display_precision = 5
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::config::Settings;
//! use calc_core::constants::PiConstant;
//!
//! let settings = Settings::from_toml_str("pi = \"rational\"").unwrap();
//! assert_eq!(settings.pi, PiConstant::Rational);
//! assert_eq!(settings.display_precision, 5);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{CalcOptions, MotherPipeMethod};
use crate::constants::PiConstant;
use crate::errors::{CalcError, CalcResult};
use crate::file_io::read_to_string;
use crate::materials::Material;

/// Default location of the saved-calculation file
pub const DEFAULT_STORE_PATH: &str = "assets/saved_calcs.json";

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Value of π used everywhere
    pub pi: PiConstant,

    /// Mother pipe sizing rule
    pub mother_pipe_method: MotherPipeMethod,

    /// Material used when no density is given
    pub default_material: Material,

    /// Saved-calculation JSON file
    pub store_path: PathBuf,

    /// Decimals shown for the mother pipe diameter
    pub display_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pi: PiConstant::Standard,
            mother_pipe_method: MotherPipeMethod::Perimeter,
            default_material: Material::MildSteel,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            display_precision: 5,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        toml::from_str(text).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> CalcResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let text = read_to_string(path)?;
        Settings::from_toml_str(&text).map_err(|e| match e {
            CalcError::ConfigError { reason } => {
                CalcError::config(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// The options that affect calculation results
    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            pi: self.pi,
            mother_pipe: self.mother_pipe_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pi, PiConstant::Standard);
        assert_eq!(settings.mother_pipe_method, MotherPipeMethod::Perimeter);
        assert_eq!(settings.default_material.density_kg_m3(), 7850.0);
        assert_eq!(settings.calc_options(), CalcOptions::default());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml_str(
            r#"
            mother_pipe_method = "area"
            default_material = "aluminium"
            "#,
        )
        .unwrap();
        assert_eq!(settings.mother_pipe_method, MotherPipeMethod::Area);
        assert_eq!(settings.default_material, Material::Aluminium);
        assert_eq!(settings.pi, PiConstant::Standard);
        assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let err = Settings::from_toml_str("pi = \"tau\"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("tubeweight.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tubeweight.toml");
        let settings = Settings {
            pi: PiConstant::Rational,
            display_precision: 3,
            ..Settings::default()
        };
        std::fs::write(&path, settings.to_toml_string().unwrap()).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}

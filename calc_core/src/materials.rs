//! # Materials
//!
//! Densities of the metals hollow sections are commonly drawn from. The
//! calculators only ever see a density in kg/m³; a [`Material`] is a named
//! shortcut for one.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::Material;
//!
//! let ms: Material = "mild-steel".parse().unwrap();
//! assert_eq!(ms.density_kg_m3(), 7850.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DENSITY_MILD_STEEL;

/// Tube material with a nominal density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    /// Mild (carbon) steel, 7850 kg/m³
    #[default]
    MildSteel,
    /// Austenitic stainless steel, 8000 kg/m³
    StainlessSteel,
    /// Aluminium alloy, 2700 kg/m³
    Aluminium,
    /// Copper, 8960 kg/m³
    Copper,
    /// Brass, 8500 kg/m³
    Brass,
}

impl Material {
    /// All materials for iteration
    pub const ALL: [Material; 5] = [
        Material::MildSteel,
        Material::StainlessSteel,
        Material::Aluminium,
        Material::Copper,
        Material::Brass,
    ];

    /// Nominal density in kg/m³
    pub fn density_kg_m3(self) -> f64 {
        match self {
            Material::MildSteel => DENSITY_MILD_STEEL,
            Material::StainlessSteel => 8000.0,
            Material::Aluminium => 2700.0,
            Material::Copper => 8960.0,
            Material::Brass => 8500.0,
        }
    }

    /// Identifier used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Material::MildSteel => "mild-steel",
            Material::StainlessSteel => "stainless-steel",
            Material::Aluminium => "aluminium",
            Material::Copper => "copper",
            Material::Brass => "brass",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Material::MildSteel => "Mild Steel",
            Material::StainlessSteel => "Stainless Steel",
            Material::Aluminium => "Aluminium",
            Material::Copper => "Copper",
            Material::Brass => "Brass",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        match wanted.as_str() {
            "ms" | "steel" => return Ok(Material::MildSteel),
            "ss" | "stainless" => return Ok(Material::StainlessSteel),
            "aluminum" | "al" => return Ok(Material::Aluminium),
            _ => {}
        }
        Material::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| format!("unknown material '{}'", s))
    }
}

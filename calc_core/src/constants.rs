//! # Constants
//!
//! Numeric constants shared by every calculator. π is not a literal here:
//! formulas take a [`PiConstant`] so the choice between the library value and
//! the workshop approximation 22/7 is made once, in [`crate::config::Settings`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Density of mild steel (kg/m³), the default material
pub const DENSITY_MILD_STEEL: f64 = 7850.0;

/// Area conversion mm² → m². Multiplying by a density in kg/m³ yields kg per metre.
pub const MM2_TO_M2: f64 = 1e-6;

/// Rational approximation of π used on some shop floors
pub const PI_RATIONAL: f64 = 22.0 / 7.0;

/// Which value of π the formulas use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiConstant {
    /// `std::f64::consts::PI`
    #[default]
    Standard,
    /// 22/7
    Rational,
}

impl PiConstant {
    /// Numeric value of this π variant
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            PiConstant::Standard => std::f64::consts::PI,
            PiConstant::Rational => PI_RATIONAL,
        }
    }
}

impl fmt::Display for PiConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiConstant::Standard => write!(f, "standard"),
            PiConstant::Rational => write!(f, "rational"),
        }
    }
}

impl FromStr for PiConstant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "pi" => Ok(PiConstant::Standard),
            "rational" | "22/7" => Ok(PiConstant::Rational),
            other => Err(format!("unknown pi constant '{}' (expected standard or rational)", other)),
        }
    }
}

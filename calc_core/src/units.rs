//! # Unit Types
//!
//! Type-safe wrappers for the few units this calculator deals in. They are
//! plain f64 newtypes that serialize as bare numbers.
//!
//! ## Fixed Units
//!
//! - Length: millimetres (mm), kept as plain f64 in the formulas
//! - Area: square millimetres (mm²)
//! - Density: kilograms per cubic metre (kg/m³)
//! - Linear mass: kilograms per metre (kg/m)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{linear_mass, KgPerCubicMeter, SquareMillimeters};
//!
//! let mass = linear_mass(SquareMillimeters(100.0), KgPerCubicMeter(7850.0));
//! assert!((mass.0 - 0.785).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MM2_TO_M2;

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Density in kilograms per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCubicMeter(pub f64);

/// Linear mass in kilograms per metre of length
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerMeter(pub f64);

impl fmt::Display for KgPerMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kg/m", self.0)
    }
}

/// Mass per metre of a prismatic member: area (mm²) × 1e-6 × density (kg/m³).
#[inline]
pub fn linear_mass(area: SquareMillimeters, density: KgPerCubicMeter) -> KgPerMeter {
    KgPerMeter(area.0 * MM2_TO_M2 * density.0)
}

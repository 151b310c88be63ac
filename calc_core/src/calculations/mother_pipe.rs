//! # Mother Pipe Estimate
//!
//! Sizes the round stock pipe a section is formed from. The sizing rule is a
//! setting ([`MotherPipeMethod`]) and the result records which rule was used,
//! so saved results from the two rules are never confused.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hollow_section::SectionSpec;
use crate::constants::PiConstant;
use crate::equations::perimeter::{mother_od_from_area, mother_od_from_perimeter};

/// Rule used to size the mother pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotherPipeMethod {
    /// Circumference equals the outer perimeter of the shape, D = P/π
    #[default]
    Perimeter,
    /// Same thickness and wall area, D = A/(π·t) + t
    Area,
}

impl fmt::Display for MotherPipeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotherPipeMethod::Perimeter => write!(f, "perimeter"),
            MotherPipeMethod::Area => write!(f, "area"),
        }
    }
}

impl FromStr for MotherPipeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "perimeter" => Ok(MotherPipeMethod::Perimeter),
            "area" => Ok(MotherPipeMethod::Area),
            other => Err(format!("unknown mother pipe method '{}' (expected perimeter or area)", other)),
        }
    }
}

/// Estimated mother pipe.
///
/// ## JSON Example
///
/// ```json
/// { "method": "perimeter", "od_mm": 31.830988618379067, "id_mm": null }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotherPipe {
    /// Rule that produced this estimate
    pub method: MotherPipeMethod,

    /// Outer diameter (mm)
    pub od_mm: f64,

    /// Inner diameter OD − 2t (mm), reported by the area rule only
    pub id_mm: Option<f64>,
}

/// Estimate the mother pipe for an already validated section.
///
/// A round tube is its own mother pipe under either rule.
pub fn estimate(
    section: &SectionSpec,
    thickness_mm: f64,
    wall_area_mm2: f64,
    method: MotherPipeMethod,
    pi: PiConstant,
) -> MotherPipe {
    let od_mm = match (section, method) {
        (SectionSpec::Circle { od_mm }, _) => *od_mm,
        (_, MotherPipeMethod::Perimeter) => {
            mother_od_from_perimeter(section.outer_perimeter(pi), pi.value())
        }
        (_, MotherPipeMethod::Area) => mother_od_from_area(wall_area_mm2, thickness_mm, pi.value()),
    };

    let id_mm = match method {
        MotherPipeMethod::Perimeter => None,
        MotherPipeMethod::Area => Some(od_mm - 2.0 * thickness_mm),
    };

    MotherPipe {
        method,
        od_mm,
        id_mm,
    }
}

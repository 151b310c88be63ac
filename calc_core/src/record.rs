//! # Saved Calculation Records
//!
//! The flat, storage-facing form of a calculation. Field names match the
//! JSON files written by earlier versions of the calculator, so existing
//! `saved_calcs.json` files load unchanged (records without `id` or
//! `saved_at` get a fresh id and no timestamp).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "id": "5d3c0c7e-8a55-4a5b-9a3e-0c6f1f2b8d11",
//!   "name": "Square | 25 × 25 × t 1 mm",
//!   "shape": "Square",
//!   "inputs": { "OD": 25.0 },
//!   "thickness": 1.0,
//!   "density": 7850.0,
//!   "weight": 0.7536,
//!   "area_mm2": 96.0,
//!   "extra": { "mother_OD": 31.830988618379067 },
//!   "dimensions_str": "25 × 25 × t 1 mm",
//!   "saved_at": "2025-06-01T10:00:00Z"
//! }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{
    HollowSectionInput, HollowSectionResult, MaterialParams, SectionSpec, ShapeExtras, ShapeKind,
};
use crate::errors::{CalcError, CalcResult};

/// A calculation as persisted by a [`crate::store::CalculationStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// Unique record id
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// User label
    #[serde(default)]
    pub name: String,

    /// Shape family (bucket key)
    pub shape: ShapeKind,

    /// Outer dimensions (mm), keyed `OD`, `L`/`W`, `major`/`minor`, `side` or `a`/`b`/`c`
    pub inputs: BTreeMap<String, f64>,

    /// Wall thickness (mm)
    pub thickness: f64,

    /// Density (kg/m³)
    pub density: f64,

    /// Linear mass (kg/m)
    pub weight: f64,

    /// Wall area (mm²)
    pub area_mm2: f64,

    /// `ID`, `mother_OD`, `mother_ID`, `inradius` as applicable
    #[serde(default)]
    pub extra: BTreeMap<String, f64>,

    /// Human-readable dimensions, e.g. `OD 25 × t 1 mm`
    pub dimensions_str: String,

    /// When the record was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedCalculation {
    /// Build a record from a successful calculation.
    ///
    /// A blank or missing `name` falls back to [`default_name`].
    pub fn new(input: &HollowSectionInput, result: &HollowSectionResult, name: Option<&str>) -> Self {
        let dimensions_str = dimensions_label(input);
        let shape = input.section.kind();

        let inputs = input
            .section
            .dimensions()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        let mut extra = BTreeMap::new();
        match result.extras {
            ShapeExtras::InnerDiameter { id_mm } => {
                extra.insert("ID".to_string(), id_mm);
            }
            ShapeExtras::Inradius { inradius_mm } => {
                extra.insert("inradius".to_string(), inradius_mm);
            }
            _ => {}
        }
        extra.insert("mother_OD".to_string(), result.mother_pipe.od_mm);
        if let Some(id) = result.mother_pipe.id_mm {
            extra.insert("mother_ID".to_string(), id);
        }

        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => default_name(shape, &dimensions_str),
        };

        SavedCalculation {
            id: Uuid::new_v4(),
            name,
            shape,
            inputs,
            thickness: input.params.thickness_mm,
            density: input.params.density_kg_m3,
            weight: result.weight_kg_m,
            area_mm2: result.wall_area_mm2,
            extra,
            dimensions_str,
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuild the calculation input so the record can be recalculated.
    pub fn to_input(&self) -> CalcResult<HollowSectionInput> {
        let dim = |key: &str| -> CalcResult<f64> {
            self.inputs.get(key).copied().ok_or_else(|| CalcError::SerializationError {
                reason: format!("{} record '{}' is missing input '{}'", self.shape, self.name, key),
            })
        };

        let section = match self.shape {
            ShapeKind::Circle => SectionSpec::Circle { od_mm: dim("OD")? },
            ShapeKind::Square => SectionSpec::Square { od_mm: dim("OD")? },
            ShapeKind::Rectangle => SectionSpec::Rectangle {
                length_mm: dim("L")?,
                width_mm: dim("W")?,
            },
            ShapeKind::Oval => SectionSpec::Oval {
                major_mm: dim("major")?,
                minor_mm: dim("minor")?,
            },
            ShapeKind::Triangle if self.inputs.contains_key("side") => SectionSpec::TriangleEquilateral {
                side_mm: dim("side")?,
            },
            ShapeKind::Triangle => SectionSpec::TriangleScalene {
                a_mm: dim("a")?,
                b_mm: dim("b")?,
                c_mm: dim("c")?,
            },
        };

        Ok(HollowSectionInput {
            section,
            params: MaterialParams::new(self.thickness, self.density),
        })
    }
}

/// Default record name, `"<shape> | <dimensions>"`
pub fn default_name(shape: ShapeKind, dimensions_str: &str) -> String {
    format!("{} | {}", shape, dimensions_str)
}

/// Human-readable dimension label for a calculation input
pub fn dimensions_label(input: &HollowSectionInput) -> String {
    let t = input.params.thickness_mm;
    match input.section {
        SectionSpec::Circle { od_mm } => format!("OD {} × t {} mm", od_mm, t),
        SectionSpec::Square { od_mm } => format!("{} × {} × t {} mm", od_mm, od_mm, t),
        SectionSpec::Rectangle {
            length_mm,
            width_mm,
        } => format!("{} × {} × t {} mm", length_mm, width_mm, t),
        SectionSpec::Oval { major_mm, minor_mm } => format!("{} × {} × t {} mm", major_mm, minor_mm, t),
        SectionSpec::TriangleEquilateral { side_mm } => format!("Equilateral {} × t {} mm", side_mm, t),
        SectionSpec::TriangleScalene { a_mm, b_mm, c_mm } => {
            format!("Scalene {} × {} × {} × t {} mm", a_mm, b_mm, c_mm, t)
        }
    }
}

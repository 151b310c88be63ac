//! # Hollow Section Weight Calculation
//!
//! Computes the wall area, linear mass and mother pipe of a hollow section.
//!
//! ## Supported Sections
//!
//! - Round tube (outer diameter)
//! - Square tube (outer side)
//! - Rectangular tube (outer length and width)
//! - Oval tube, modelled as an ellipse (outer major and minor axes)
//! - Equilateral triangular tube (outer side)
//! - Scalene triangular tube (three outer sides)
//!
//! ## Failure Order
//!
//! Inputs pass the [validity gate](super::validation) first. For the scalene
//! triangle the checks then run triangle inequality → Heron → inradius →
//! wall area sign, and the first failure is returned.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::hollow_section::{
//!     calculate, CalcOptions, HollowSectionInput, MaterialParams, SectionSpec,
//! };
//!
//! let input = HollowSectionInput {
//!     section: SectionSpec::Circle { od_mm: 25.0 },
//!     params: MaterialParams::new(1.0, 7850.0),
//! };
//!
//! let result = calculate(&input, CalcOptions::default()).unwrap();
//! assert!((result.wall_area_mm2 - 75.398).abs() < 0.001);
//! assert!((result.weight_kg_m - 0.592).abs() < 0.001);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::mother_pipe::{self, MotherPipe, MotherPipeMethod};
use super::validation::validate_input;
use crate::constants::{PiConstant, DENSITY_MILD_STEEL};
use crate::equations::perimeter::{
    ellipse_perimeter_ramanujan, rectangle_perimeter, square_perimeter, triangle_perimeter,
};
use crate::equations::section::{
    equilateral_inner_side, heron_area, hollow_circle_area, hollow_ellipse_area,
    hollow_equilateral_area, hollow_rectangle_area, hollow_square_area, inradius, semiperimeter,
    triangle_offset_wall_area,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::units::{linear_mass, KgPerCubicMeter, KgPerMeter, SquareMillimeters};

/// Shape family, used to label and group saved calculations.
///
/// Both triangle variants share [`ShapeKind::Triangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Oval,
    Triangle,
}

impl ShapeKind {
    /// All shape kinds, in display order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Triangle,
    ];

    /// Name used as the JSON bucket key
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shape '{}'", s))
    }
}

/// Outer geometry of a hollow section. All dimensions in mm.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "rectangle", "length_mm": 40.0, "width_mm": 25.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SectionSpec {
    /// Round tube
    Circle { od_mm: f64 },
    /// Square tube, `od_mm` is the outer side
    Square { od_mm: f64 },
    /// Rectangular tube
    Rectangle { length_mm: f64, width_mm: f64 },
    /// Elliptical tube, full outer axes
    Oval { major_mm: f64, minor_mm: f64 },
    /// Equilateral triangular tube
    TriangleEquilateral { side_mm: f64 },
    /// Triangular tube with three arbitrary sides
    TriangleScalene { a_mm: f64, b_mm: f64, c_mm: f64 },
}

impl SectionSpec {
    /// Shape family of this section
    pub fn kind(&self) -> ShapeKind {
        match self {
            SectionSpec::Circle { .. } => ShapeKind::Circle,
            SectionSpec::Square { .. } => ShapeKind::Square,
            SectionSpec::Rectangle { .. } => ShapeKind::Rectangle,
            SectionSpec::Oval { .. } => ShapeKind::Oval,
            SectionSpec::TriangleEquilateral { .. } | SectionSpec::TriangleScalene { .. } => {
                ShapeKind::Triangle
            }
        }
    }

    /// Outer dimensions as `(name, value)` pairs, in declaration order.
    ///
    /// The names are the keys used in saved records.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SectionSpec::Circle { od_mm } | SectionSpec::Square { od_mm } => vec![("OD", od_mm)],
            SectionSpec::Rectangle {
                length_mm,
                width_mm,
            } => vec![("L", length_mm), ("W", width_mm)],
            SectionSpec::Oval { major_mm, minor_mm } => vec![("major", major_mm), ("minor", minor_mm)],
            SectionSpec::TriangleEquilateral { side_mm } => vec![("side", side_mm)],
            SectionSpec::TriangleScalene { a_mm, b_mm, c_mm } => {
                vec![("a", a_mm), ("b", b_mm), ("c", c_mm)]
            }
        }
    }

    /// Outer perimeter (mm)
    pub fn outer_perimeter(&self, pi: PiConstant) -> f64 {
        match *self {
            SectionSpec::Circle { od_mm } => pi.value() * od_mm,
            SectionSpec::Square { od_mm } => square_perimeter(od_mm),
            SectionSpec::Rectangle {
                length_mm,
                width_mm,
            } => rectangle_perimeter(length_mm, width_mm),
            SectionSpec::Oval { major_mm, minor_mm } => {
                ellipse_perimeter_ramanujan(major_mm / 2.0, minor_mm / 2.0, pi.value())
            }
            SectionSpec::TriangleEquilateral { side_mm } => triangle_perimeter(side_mm, side_mm, side_mm),
            SectionSpec::TriangleScalene { a_mm, b_mm, c_mm } => triangle_perimeter(a_mm, b_mm, c_mm),
        }
    }
}

/// Wall thickness and material density, shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    /// Wall thickness (mm)
    pub thickness_mm: f64,

    /// Material density (kg/m³)
    pub density_kg_m3: f64,
}

impl MaterialParams {
    /// Create parameters from a thickness and an explicit density
    pub fn new(thickness_mm: f64, density_kg_m3: f64) -> Self {
        MaterialParams {
            thickness_mm,
            density_kg_m3,
        }
    }

    /// Create parameters using a named material's density
    pub fn with_material(thickness_mm: f64, material: Material) -> Self {
        MaterialParams::new(thickness_mm, material.density_kg_m3())
    }
}

impl Default for MaterialParams {
    fn default() -> Self {
        MaterialParams::new(1.0, DENSITY_MILD_STEEL)
    }
}

/// Input for a hollow section calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "section": { "shape": "circle", "od_mm": 25.0 },
///   "params": { "thickness_mm": 1.0, "density_kg_m3": 7850.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowSectionInput {
    /// Outer geometry
    pub section: SectionSpec,

    /// Wall thickness and density
    pub params: MaterialParams,
}

/// Options that change numeric results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalcOptions {
    /// Value of π used by every formula
    pub pi: PiConstant,

    /// Mother pipe sizing rule
    pub mother_pipe: MotherPipeMethod,
}

/// Shape-specific by-products of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeExtras {
    /// Round tube inner diameter
    InnerDiameter { id_mm: f64 },
    /// Square or equilateral tube inner side
    InnerSide { side_mm: f64 },
    /// Rectangular tube inner length and width
    InnerRectangle { length_mm: f64, width_mm: f64 },
    /// Oval tube inner axes (full lengths)
    InnerEllipse { major_mm: f64, minor_mm: f64 },
    /// Scalene triangle inradius, the upper bound on wall thickness
    Inradius { inradius_mm: f64 },
}

/// Results from a hollow section calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wall_area_mm2": 75.39822368615503,
///   "weight_kg_m": 0.5918760559363169,
///   "extras": { "kind": "inner_diameter", "id_mm": 23.0 },
///   "mother_pipe": { "method": "perimeter", "od_mm": 25.0, "id_mm": null }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowSectionResult {
    /// Cross-sectional wall area (mm²), never negative
    pub wall_area_mm2: f64,

    /// Mass per metre of length (kg/m)
    pub weight_kg_m: f64,

    /// Inner dimensions or inradius
    pub extras: ShapeExtras,

    /// Equivalent round stock pipe
    pub mother_pipe: MotherPipe,
}

impl HollowSectionResult {
    /// Linear mass as a typed unit
    pub fn linear_mass(&self) -> KgPerMeter {
        KgPerMeter(self.weight_kg_m)
    }
}

/// Calculate wall area, linear mass and mother pipe of a hollow section.
///
/// # Returns
///
/// * `Ok(HollowSectionResult)` - Calculation results
/// * `Err(CalcError::NonPositiveInput)` - A dimension, thickness or density ≤ 0
/// * `Err(CalcError::DegenerateSection)` - The wall swallows the section
/// * `Err(CalcError::InvalidTriangle)` - Sides cannot form a triangle
/// * `Err(CalcError::ThicknessExceedsInradius)` - Scalene wall reaches the incircle
/// * `Err(CalcError::NonFiniteResult)` - Dimensions so large the arithmetic overflowed
pub fn calculate(input: &HollowSectionInput, options: CalcOptions) -> CalcResult<HollowSectionResult> {
    match compute(input, options) {
        Ok(result) => {
            debug!(
                shape = %input.section.kind(),
                area_mm2 = result.wall_area_mm2,
                weight_kg_m = result.weight_kg_m,
                mother_od_mm = result.mother_pipe.od_mm,
                "section calculated"
            );
            Ok(result)
        }
        Err(e) => {
            warn!(shape = %input.section.kind(), code = e.error_code(), "section rejected: {}", e);
            Err(e)
        }
    }
}

fn compute(input: &HollowSectionInput, options: CalcOptions) -> CalcResult<HollowSectionResult> {
    validate_input(input)?;

    let pi = options.pi.value();
    let t = input.params.thickness_mm;

    let (wall_area_mm2, extras) = match input.section {
        SectionSpec::Circle { od_mm } => circle_wall(od_mm, t, pi)?,
        SectionSpec::Square { od_mm } => square_wall(od_mm, t)?,
        SectionSpec::Rectangle {
            length_mm,
            width_mm,
        } => rectangle_wall(length_mm, width_mm, t)?,
        SectionSpec::Oval { major_mm, minor_mm } => oval_wall(major_mm, minor_mm, t, pi)?,
        SectionSpec::TriangleEquilateral { side_mm } => equilateral_wall(side_mm, t)?,
        SectionSpec::TriangleScalene { a_mm, b_mm, c_mm } => scalene_wall(a_mm, b_mm, c_mm, t)?,
    };

    let shape = input.section.kind().as_str();

    // Huge finite inputs overflow the squares; inf - inf is NaN and slips past `< 0.0`.
    if !wall_area_mm2.is_finite() {
        return Err(CalcError::non_finite(shape, "wall area"));
    }
    // Inner dimensions ≥ 0 already imply this; it guards the invariant.
    if wall_area_mm2 < 0.0 {
        return Err(CalcError::degenerate(shape, "wall area", wall_area_mm2));
    }

    let weight = linear_mass(
        SquareMillimeters(wall_area_mm2),
        KgPerCubicMeter(input.params.density_kg_m3),
    );
    if !weight.0.is_finite() {
        return Err(CalcError::non_finite(shape, "weight"));
    }

    let mother_pipe = mother_pipe::estimate(&input.section, t, wall_area_mm2, options.mother_pipe, options.pi);
    if !mother_pipe.od_mm.is_finite() || mother_pipe.id_mm.is_some_and(|id| !id.is_finite()) {
        return Err(CalcError::non_finite(shape, "mother pipe diameter"));
    }

    Ok(HollowSectionResult {
        wall_area_mm2,
        weight_kg_m: weight.0,
        extras,
        mother_pipe,
    })
}

fn circle_wall(od: f64, t: f64, pi: f64) -> CalcResult<(f64, ShapeExtras)> {
    let id = od - 2.0 * t;
    if id < 0.0 {
        return Err(CalcError::degenerate("Circle", "diameter", id));
    }
    Ok((hollow_circle_area(od, id, pi), ShapeExtras::InnerDiameter { id_mm: id }))
}

fn square_wall(od: f64, t: f64) -> CalcResult<(f64, ShapeExtras)> {
    let id = od - 2.0 * t;
    if id < 0.0 {
        return Err(CalcError::degenerate("Square", "side", id));
    }
    Ok((hollow_square_area(od, id), ShapeExtras::InnerSide { side_mm: id }))
}

fn rectangle_wall(length: f64, width: f64, t: f64) -> CalcResult<(f64, ShapeExtras)> {
    let inner_length = length - 2.0 * t;
    let inner_width = width - 2.0 * t;
    if inner_length < 0.0 {
        return Err(CalcError::degenerate("Rectangle", "length", inner_length));
    }
    if inner_width < 0.0 {
        return Err(CalcError::degenerate("Rectangle", "width", inner_width));
    }
    Ok((
        hollow_rectangle_area(length, width, inner_length, inner_width),
        ShapeExtras::InnerRectangle {
            length_mm: inner_length,
            width_mm: inner_width,
        },
    ))
}

fn oval_wall(major: f64, minor: f64, t: f64, pi: f64) -> CalcResult<(f64, ShapeExtras)> {
    let a_outer = major / 2.0;
    let b_outer = minor / 2.0;
    let a_inner = a_outer - t;
    let b_inner = b_outer - t;
    if a_inner < 0.0 {
        return Err(CalcError::degenerate("Oval", "major semi-axis", a_inner));
    }
    if b_inner < 0.0 {
        return Err(CalcError::degenerate("Oval", "minor semi-axis", b_inner));
    }
    Ok((
        hollow_ellipse_area(a_outer, b_outer, a_inner, b_inner, pi),
        ShapeExtras::InnerEllipse {
            major_mm: 2.0 * a_inner,
            minor_mm: 2.0 * b_inner,
        },
    ))
}

fn equilateral_wall(side: f64, t: f64) -> CalcResult<(f64, ShapeExtras)> {
    let inner = equilateral_inner_side(side, t);
    if inner < 0.0 {
        return Err(CalcError::degenerate("Triangle", "side", inner));
    }
    Ok((hollow_equilateral_area(side, inner), ShapeExtras::InnerSide { side_mm: inner }))
}

fn scalene_wall(a: f64, b: f64, c: f64, t: f64) -> CalcResult<(f64, ShapeExtras)> {
    if a + b <= c || b + c <= a || c + a <= b {
        return Err(CalcError::InvalidTriangle { a, b, c });
    }

    let s = semiperimeter(a, b, c);
    let area = heron_area(a, b, c).ok_or(CalcError::InvalidTriangle { a, b, c })?;
    let r = inradius(area, s);

    if t >= r {
        return Err(CalcError::ThicknessExceedsInradius {
            thickness: t,
            inradius: r,
        });
    }

    let wall = triangle_offset_wall_area(t, triangle_perimeter(a, b, c), s, area);
    if wall <= 0.0 {
        return Err(CalcError::degenerate("Triangle", "wall area", wall));
    }

    Ok((wall, ShapeExtras::Inradius { inradius_mm: r }))
}

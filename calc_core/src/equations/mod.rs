//! # Geometry Equations
//!
//! The closed-form formulas behind the calculators, kept free of validation
//! and unit handling so each one can be checked against a hand calculation.
//!
//! ## Modules
//!
//! - [`section`] - Wall areas of hollow sections (round, square, rectangular,
//!   oval, triangular)
//! - [`perimeter`] - Outer perimeters and mother pipe sizing
//!
//! ## Conventions
//!
//! - Lengths in mm, areas in mm²
//! - π is passed in explicitly (see [`crate::constants::PiConstant`])
//! - Functions never clamp: a negative result means the caller skipped a
//!   validity check

pub mod perimeter;
pub mod section;

pub use section::{
    equilateral_inner_side,
    equilateral_triangle_area,
    heron_area,
    heron_radicand,
    hollow_circle_area,
    hollow_ellipse_area,
    hollow_equilateral_area,
    hollow_rectangle_area,
    hollow_square_area,
    inradius,
    semiperimeter,
    triangle_offset_wall_area,
};

pub use perimeter::{
    ellipse_perimeter_ramanujan,
    mother_od_from_area,
    mother_od_from_perimeter,
    rectangle_perimeter,
    square_perimeter,
    triangle_perimeter,
};

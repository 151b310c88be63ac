//! # Perimeters and Mother Pipe Sizing
//!
//! A non-round tube is usually cold-formed from a round "mother pipe". Two
//! sizing rules are provided; they give different diameters and a
//! calculation must use exactly one of them:
//!
//! - **Perimeter equivalence**: the mother pipe's circumference equals the
//!   outer perimeter of the finished shape, D = P/π.
//! - **Area equivalence**: the mother pipe has the same wall thickness and
//!   the same wall area, using the thin-wall annulus A ≈ π·t·(D − t).

/// Outer perimeter of a square tube, 4·OD
#[inline]
pub fn square_perimeter(side: f64) -> f64 {
    4.0 * side
}

/// Outer perimeter of a rectangular tube, 2(L + W)
#[inline]
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

/// Ellipse perimeter, Ramanujan's first approximation
///
/// # Formula
/// P ≈ π·(3(a + b) − √((3a + b)(a + 3b)))
///
/// `a`, `b` are the semi-axes. Exact for a circle (a = b gives 2πa).
///
/// # Example
/// ```rust
/// use calc_core::equations::perimeter::ellipse_perimeter_ramanujan;
/// use std::f64::consts::PI;
///
/// let p = ellipse_perimeter_ramanujan(10.0, 10.0, PI);
/// assert!((p - 20.0 * PI).abs() < 1e-9);
/// ```
#[inline]
pub fn ellipse_perimeter_ramanujan(a: f64, b: f64, pi: f64) -> f64 {
    pi * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// Perimeter of a triangle with sides a, b, c
#[inline]
pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

/// Mother pipe OD whose circumference equals `perimeter`
///
/// # Formula
/// D = P / π
///
/// Returns 0 for a non-positive perimeter.
///
/// # Example
/// ```rust
/// use calc_core::equations::perimeter::mother_od_from_perimeter;
///
/// // 25 × 25 square
/// let d = mother_od_from_perimeter(100.0, std::f64::consts::PI);
/// assert_eq!(format!("{:.5}", d), "31.83099");
/// ```
#[inline]
pub fn mother_od_from_perimeter(perimeter: f64, pi: f64) -> f64 {
    if perimeter <= 0.0 {
        return 0.0;
    }
    perimeter / pi
}

/// Mother pipe OD with the same wall thickness and wall area
///
/// # Formula
/// A = π·t·(OD − t)  ⇒  OD = A/(π·t) + t
///
/// Returns 0 for a non-positive thickness.
#[inline]
pub fn mother_od_from_area(wall_area: f64, thickness: f64, pi: f64) -> f64 {
    if thickness <= 0.0 {
        return 0.0;
    }
    wall_area / (pi * thickness) + thickness
}

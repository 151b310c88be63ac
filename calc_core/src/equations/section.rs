//! # Hollow Section Area Formulas
//!
//! Cross-sectional wall (material) area of hollow sections. Every function
//! here is plain arithmetic on dimensions already known to be valid; the
//! degeneracy checks live in [`crate::calculations::hollow_section`].
//!
//! ## Notation
//!
//! - `OD` = outer diameter / outer side
//! - `ID` = inner diameter / inner side
//! - `t` = wall thickness
//! - `a`, `b` = semi-axes of an ellipse
//! - `s` = semiperimeter of a triangle
//! - `A0` = outer area of a triangle
//!
//! All lengths in mm, all areas in mm².

use std::f64::consts::FRAC_PI_3;

// =============================================================================
// ROUND AND RECTANGULAR TUBES
// =============================================================================

/// Wall area of a round tube
///
/// ```text
///       ╭───────╮
///     ╭─╯ ╭───╮ ╰─╮
///     │   │ID │   │ OD
///     ╰─╮ ╰───╯ ╭─╯
///       ╰───────╯
/// ```
///
/// # Formula
/// A = (π/4)(OD² − ID²)
///
/// # Example
/// ```rust
/// use calc_core::equations::section::hollow_circle_area;
///
/// let area = hollow_circle_area(25.0, 23.0, std::f64::consts::PI);
/// assert!((area - 75.398).abs() < 0.001);
/// ```
#[inline]
pub fn hollow_circle_area(od: f64, id: f64, pi: f64) -> f64 {
    (pi / 4.0) * (od.powi(2) - id.powi(2))
}

/// Wall area of a square tube
///
/// # Formula
/// A = OD² − ID²
#[inline]
pub fn hollow_square_area(od: f64, id: f64) -> f64 {
    od.powi(2) - id.powi(2)
}

/// Wall area of a rectangular tube
///
/// ```text
///     ┌───────────────┐
///     │  ┌─────────┐  │
///   W │  │ Li × Wi │  │
///     │  └─────────┘  │
///     └───────────────┘
///             L
/// ```
///
/// # Formula
/// A = L·W − Li·Wi
#[inline]
pub fn hollow_rectangle_area(length: f64, width: f64, inner_length: f64, inner_width: f64) -> f64 {
    length * width - inner_length * inner_width
}

/// Wall area of an elliptical (oval) tube
///
/// The inner boundary is taken as the ellipse with both semi-axes reduced by
/// `t`. That is not a true constant-thickness offset of the outer ellipse
/// (whose inner curve is not an ellipse), so the result is approximate for
/// strongly eccentric sections.
///
/// # Formula
/// A = π·a_o·b_o − π·a_i·b_i
#[inline]
pub fn hollow_ellipse_area(a_outer: f64, b_outer: f64, a_inner: f64, b_inner: f64, pi: f64) -> f64 {
    pi * a_outer * b_outer - pi * a_inner * b_inner
}

// =============================================================================
// TRIANGULAR TUBES
// =============================================================================

/// Area of an equilateral triangle, (√3/4)·s²
#[inline]
pub fn equilateral_triangle_area(side: f64) -> f64 {
    (3.0_f64.sqrt() / 4.0) * side.powi(2)
}

/// Inner side of an equilateral triangular tube
///
/// # Formula
/// s_i = s_o − 2t / sin(60°)
///
/// May be negative; callers must reject that case.
#[inline]
pub fn equilateral_inner_side(side: f64, thickness: f64) -> f64 {
    side - 2.0 * thickness / FRAC_PI_3.sin()
}

/// Wall area of an equilateral triangular tube
///
/// # Formula
/// A = (√3/4)(s_o² − s_i²)
#[inline]
pub fn hollow_equilateral_area(side: f64, inner_side: f64) -> f64 {
    equilateral_triangle_area(side) - equilateral_triangle_area(inner_side)
}

/// Semiperimeter s = (a + b + c) / 2
#[inline]
pub fn semiperimeter(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 2.0
}

/// Radicand of Heron's formula, s(s−a)(s−b)(s−c).
///
/// Positive exactly when the sides form a non-degenerate triangle.
#[inline]
pub fn heron_radicand(a: f64, b: f64, c: f64) -> f64 {
    let s = semiperimeter(a, b, c);
    s * (s - a) * (s - b) * (s - c)
}

/// Triangle area from its three sides (Heron's formula)
///
/// Returns `None` if the radicand is not positive.
///
/// # Example
/// ```rust
/// use calc_core::equations::section::heron_area;
///
/// assert_eq!(heron_area(3.0, 4.0, 5.0), Some(6.0));
/// assert_eq!(heron_area(1.0, 1.0, 3.0), None);
/// ```
pub fn heron_area(a: f64, b: f64, c: f64) -> Option<f64> {
    let radicand = heron_radicand(a, b, c);
    if radicand > 0.0 {
        Some(radicand.sqrt())
    } else {
        None
    }
}

/// Inradius r = A0 / s
#[inline]
pub fn inradius(area: f64, semiperimeter: f64) -> f64 {
    area / semiperimeter
}

/// Wall area of a triangular tube with constant wall thickness `t`.
///
/// Offsetting a polygon inward by `t` leaves an inner area of
/// `A0 − t·P + t²·Σcot(θᵢ/2)`, and for a triangle `Σcot(θᵢ/2) = s²/A0`, so the
/// wall is
///
/// # Formula
/// A = t·P − t²·(s²/A0)
///
/// Valid only for `t < r`; past the inradius the inner triangle has vanished.
///
/// # Example
/// ```rust
/// use calc_core::equations::section::triangle_offset_wall_area;
///
/// // 3-4-5 triangle: P = 12, s = 6, A0 = 6
/// let wall = triangle_offset_wall_area(0.5, 12.0, 6.0, 6.0);
/// assert!((wall - 4.5).abs() < 1e-12);
/// ```
#[inline]
pub fn triangle_offset_wall_area(thickness: f64, perimeter: f64, semiperimeter: f64, area: f64) -> f64 {
    thickness * perimeter - thickness.powi(2) * (semiperimeter.powi(2) / area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-3;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_hollow_circle_area() {
        // (π/4)(625 − 529) = 24π
        let a = hollow_circle_area(25.0, 23.0, PI);
        assert!(approx_eq(a, 75.398), "A = {} (expected 75.398)", a);

        // With 22/7: 96 × 22/28
        let a = hollow_circle_area(25.0, 23.0, 22.0 / 7.0);
        assert!(approx_eq(a, 75.4286), "A = {} (expected 75.4286)", a);
    }

    #[test]
    fn test_hollow_square_area() {
        // 25² − 23² = 96
        assert_eq!(hollow_square_area(25.0, 23.0), 96.0);
    }

    #[test]
    fn test_hollow_rectangle_area() {
        // 40×25 − 38×23 = 1000 − 874
        assert_eq!(hollow_rectangle_area(40.0, 25.0, 38.0, 23.0), 126.0);
    }

    #[test]
    fn test_hollow_ellipse_area() {
        // Circle as a degenerate ellipse must agree with the round tube
        let ellipse = hollow_ellipse_area(12.5, 12.5, 11.5, 11.5, PI);
        let circle = hollow_circle_area(25.0, 23.0, PI);
        assert!(approx_eq(ellipse, circle), "{} vs {}", ellipse, circle);
    }

    #[test]
    fn test_equilateral_inner_side() {
        // 2t / sin 60° = 2 / 0.8660 = 2.3094
        let s_i = equilateral_inner_side(25.0, 1.0);
        assert!(approx_eq(s_i, 22.6906), "s_i = {}", s_i);
    }

    #[test]
    fn test_equilateral_area() {
        // side 2: √3
        assert!(approx_eq(equilateral_triangle_area(2.0), 3.0_f64.sqrt()));
        let wall = hollow_equilateral_area(25.0, equilateral_inner_side(25.0, 1.0));
        assert!(wall > 0.0);
    }

    #[test]
    fn test_heron_right_triangle() {
        assert_eq!(semiperimeter(3.0, 4.0, 5.0), 6.0);
        assert_eq!(heron_radicand(3.0, 4.0, 5.0), 36.0);
        assert_eq!(heron_area(3.0, 4.0, 5.0), Some(6.0));
        assert_eq!(inradius(6.0, 6.0), 1.0);
    }

    #[test]
    fn test_heron_flat_triangle() {
        // 1 + 2 = 3: zero area
        assert_eq!(heron_area(1.0, 2.0, 3.0), None);
    }

    #[test]
    fn test_offset_identity_matches_equilateral() {
        // For an equilateral triangle the true offset inner side is s − 2√3·t,
        // so the closed form must agree with the direct subtraction.
        let side: f64 = 30.0;
        let t = 1.5;
        let a0 = equilateral_triangle_area(side);
        let inner = equilateral_triangle_area(side - 2.0 * 3.0_f64.sqrt() * t);
        let closed = triangle_offset_wall_area(t, 3.0 * side, 1.5 * side, a0);
        assert!(approx_eq(closed, a0 - inner), "{} vs {}", closed, a0 - inner);
    }
}

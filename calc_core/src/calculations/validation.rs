//! # Input Validity Gate
//!
//! Rejects non-positive or non-finite inputs before any formula runs.
//! Checks run in a fixed order (thickness, density, then each dimension in
//! declaration order) so the reported field is always the first bad one.
//! Shape-specific degeneracy is checked afterwards by the calculators.

use super::hollow_section::{HollowSectionInput, MaterialParams, SectionSpec};
use crate::errors::{CalcError, CalcResult};

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::non_positive(field, value))
    }
}

/// Thickness and density must both be positive
pub fn validate_params(params: &MaterialParams) -> CalcResult<()> {
    require_positive("thickness", params.thickness_mm)?;
    require_positive("density", params.density_kg_m3)
}

/// Every outer dimension must be positive
pub fn validate_section(section: &SectionSpec) -> CalcResult<()> {
    section
        .dimensions()
        .into_iter()
        .try_for_each(|(field, value)| require_positive(field, value))
}

/// Full gate for a calculation input
pub fn validate_input(input: &HollowSectionInput) -> CalcResult<()> {
    validate_params(&input.params)?;
    validate_section(&input.section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_thickness_rejected() {
        let params = MaterialParams::new(0.0, 7850.0);
        assert_eq!(
            validate_params(&params),
            Err(CalcError::non_positive("thickness", 0.0))
        );
    }

    #[test]
    fn test_thickness_reported_before_density() {
        let params = MaterialParams::new(-1.0, -5.0);
        match validate_params(&params) {
            Err(CalcError::NonPositiveInput { field, .. }) => assert_eq!(field, "thickness"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        assert!(validate_params(&MaterialParams::new(f64::NAN, 7850.0)).is_err());
        assert!(validate_params(&MaterialParams::new(1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_first_bad_dimension_reported() {
        let rect = SectionSpec::Rectangle {
            length_mm: 40.0,
            width_mm: -2.0,
        };
        match validate_section(&rect) {
            Err(CalcError::NonPositiveInput { field, value }) => {
                assert_eq!(field, "W");
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_scalene_sides_checked() {
        let tri = SectionSpec::TriangleScalene {
            a_mm: 3.0,
            b_mm: 0.0,
            c_mm: 5.0,
        };
        assert!(validate_section(&tri).is_err());
    }
}

//! # Stress Primitives
//!
//! Average normal and shear stress over a cross-section. Both are pure
//! functions of a force and an area; they differ only in which internal
//! force the caller feeds them.
//!
//! ## Assumptions
//!
//! - Normal stress applies to the central regions of axially loaded bars,
//!   away from localized end distortions, with the load applied along the
//!   centroidal axis of a homogeneous, isotropic section.
//! - Shear stress assumes simple (direct) shear loading, with the internal
//!   resultant shear force determined from equilibrium.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::stress::normal_stress;
//!
//! let sigma = normal_stress(5000.0, 0.25).unwrap();
//! assert_eq!(sigma, 20_000.0);
//! ```

use crate::errors::{CalcError, CalcResult};

/// Average normal stress sigma = P/A (psi).
///
/// `force_lb` is the normal force on the cross-section (negative for
/// compression), `area_in2` the cross-sectional area.
///
/// # Errors
///
/// - `DivisionByZero` if the area is zero
/// - `InvalidInput` if the area is negative
pub fn normal_stress(force_lb: f64, area_in2: f64) -> CalcResult<f64> {
    check_area(area_in2, "normal stress")?;
    Ok(force_lb / area_in2)
}

/// Average shear stress tau = V/A (psi).
///
/// Same contract as [`normal_stress`]; `force_lb` is the internal
/// resultant shear force at the section.
///
/// # Errors
///
/// - `DivisionByZero` if the area is zero
/// - `InvalidInput` if the area is negative
pub fn shear_stress(force_lb: f64, area_in2: f64) -> CalcResult<f64> {
    check_area(area_in2, "shear stress")?;
    Ok(force_lb / area_in2)
}

fn check_area(area_in2: f64, quantity: &str) -> CalcResult<()> {
    if area_in2 == 0.0 {
        return Err(CalcError::division_by_zero(quantity));
    }
    if area_in2 < 0.0 {
        return Err(CalcError::invalid_input(
            "area_in2",
            area_in2.to_string(),
            "Cross-sectional area must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_stress() {
        let sigma = normal_stress(1000.0, 2.0).unwrap();
        assert_eq!(sigma, 500.0);
    }

    #[test]
    fn test_shear_stress_matches_normal() {
        // Same formula, different internal force semantics
        let f = 750.0;
        let a = 0.5;
        assert_eq!(
            normal_stress(f, a).unwrap(),
            shear_stress(f, a).unwrap()
        );
    }

    #[test]
    fn test_compression_is_negative() {
        let sigma = normal_stress(-1000.0, 2.0).unwrap();
        assert_eq!(sigma, -500.0);
    }

    #[test]
    fn test_zero_area_fails() {
        let err = normal_stress(1000.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");

        let err = shear_stress(1000.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_negative_area_fails() {
        let err = normal_stress(1000.0, -2.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}

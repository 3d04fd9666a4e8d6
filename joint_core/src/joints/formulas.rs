//! # Bolted-Joint Formulas
//!
//! The closed-form equations behind the bolted-joint model: recommended
//! preload, installation torque, axial stiffnesses, load-sharing ratio, and
//! service-load capacity. These are the machine-design hand-calculation
//! relations (Shigley-style); the data holders in [`bolt`](super::bolt),
//! [`member`](super::member), and [`joint`](super::joint) chain them
//! together.
//!
//! All formulas take raw f64 quantities in US customary units (lb, in, psi)
//! and report degenerate inputs as [`CalcError`] values instead of returning
//! NaN or infinity.

use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

/// Preload coefficient for a reused (previously tightened) fastener
pub const PRELOAD_COEFF_REUSED: f64 = 0.64;

/// Preload coefficient for a new fastener
pub const PRELOAD_COEFF_NEW: f64 = 0.77;

/// Empirical yield-margin coefficient for the bolt failure force
pub const FAILURE_COEFF: f64 = 0.85;

/// Default torque coefficient (K-factor) for unlubricated steel threads
pub const DEFAULT_K_FACTOR: f64 = 0.2;

/// Recommended preload force Fp (lb).
///
/// Fp = 0.64·Sy·At for a reusable fastener, 0.77·Sy·At for a new one.
/// The coefficients encode empirical fastener-reuse safety factors; a new
/// fastener may be preloaded closer to yield.
pub fn preload_force(yield_psi: f64, stress_area_in2: f64, reuse: bool) -> f64 {
    let coeff = if reuse {
        PRELOAD_COEFF_REUSED
    } else {
        PRELOAD_COEFF_NEW
    };
    coeff * yield_psi * stress_area_in2
}

/// Installation torque T = K·d·Fp (in-lb), the standard bolt-torque relation.
pub fn torque(k_factor: f64, d_nominal_in: f64, preload_lb: f64) -> f64 {
    k_factor * d_nominal_in * preload_lb
}

/// Preload stress Fp/At (psi).
///
/// # Errors
///
/// `DivisionByZero` if the stress area is zero.
pub fn preload_stress(preload_lb: f64, stress_area_in2: f64) -> CalcResult<f64> {
    if stress_area_in2 == 0.0 {
        return Err(CalcError::division_by_zero("preload stress"));
    }
    Ok(preload_lb / stress_area_in2)
}

/// Bolt axial stiffness kb = E·At/l (lb/in), simple axial-rod stiffness
/// over the grip length.
///
/// # Errors
///
/// `DivisionByZero` if the grip length is zero.
pub fn bolt_axial_stiffness(
    modulus_psi: f64,
    stress_area_in2: f64,
    grip_in: f64,
) -> CalcResult<f64> {
    if grip_in == 0.0 {
        return Err(CalcError::division_by_zero("bolt axial stiffness"));
    }
    Ok(modulus_psi * stress_area_in2 / grip_in)
}

/// Bolt failure force Ff = 0.85·Sy·At (lb), the empirical yield-margin
/// failure criterion.
pub fn failure_force(yield_psi: f64, stress_area_in2: f64) -> f64 {
    FAILURE_COEFF * yield_psi * stress_area_in2
}

/// Clamped-member axial stiffness km (lb/in) via the frustum (pressure-cone)
/// approximation:
///
/// km = 0.5574·π·E·d / (2·ln(5·(0.5774·l + 0.5·d) / (0.5774·l + 2.5·d)))
///
/// where l is the member thickness and d the bolt hole diameter. The 0.5774
/// factor is tan(30°) for the standard 30° cone half-angle.
///
/// # Errors
///
/// - `InvalidInput` for non-positive thickness or hole diameter
/// - `InvalidGeometry` when the logarithm argument is ≤ 1, which would make
///   the stiffness non-finite or non-positive
pub fn member_stiffness(
    modulus_psi: f64,
    hole_diameter_in: f64,
    thickness_in: f64,
) -> CalcResult<f64> {
    if thickness_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "thickness_in",
            thickness_in.to_string(),
            "Member thickness must be positive",
        ));
    }
    if hole_diameter_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "hole_diameter_in",
            hole_diameter_in.to_string(),
            "Hole diameter must be positive",
        ));
    }

    let log_arg = 5.0 * (0.5774 * thickness_in + 0.5 * hole_diameter_in)
        / (0.5774 * thickness_in + 2.5 * hole_diameter_in);
    if log_arg <= 1.0 {
        return Err(CalcError::invalid_geometry(format!(
            "frustum logarithm argument {} is not greater than 1",
            log_arg
        )));
    }

    Ok(0.5574 * PI * modulus_psi * hole_diameter_in / (2.0 * log_arg.ln()))
}

/// Joint stiffness constant C = kb/(kb + km), the fraction of external load
/// carried by the bolt rather than the clamped members.
///
/// # Errors
///
/// `DivisionByZero` when both stiffnesses are zero.
pub fn stiffness_constant(k_bolt: f64, k_member: f64) -> CalcResult<f64> {
    let total = k_bolt + k_member;
    if total == 0.0 {
        return Err(CalcError::division_by_zero("stiffness constant"));
    }
    Ok(k_bolt / total)
}

/// Service load P = (Ff − Fp)/(C·FS) (lb): the maximum external load the
/// joint sustains under safety factor FS before the bolt reaches its
/// failure force.
///
/// # Errors
///
/// `DivisionByZero` when the stiffness constant or safety factor is zero.
pub fn service_load(
    failure_lb: f64,
    preload_lb: f64,
    stiffness_const: f64,
    safety_factor: f64,
) -> CalcResult<f64> {
    let denom = stiffness_const * safety_factor;
    if denom == 0.0 {
        return Err(CalcError::division_by_zero("service load"));
    }
    Ok((failure_lb - preload_lb) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preload_coefficients() {
        let reused = preload_force(130_000.0, 0.1419, true);
        let new = preload_force(130_000.0, 0.1419, false);
        assert!((reused - 0.64 * 130_000.0 * 0.1419).abs() < 1e-9);
        assert!((new - 0.77 * 130_000.0 * 0.1419).abs() < 1e-9);
        // A new fastener takes strictly more preload
        assert!(new > reused);
    }

    #[test]
    fn test_worked_example_preload_and_torque() {
        // 1/2-13 bolt, Sy = 130 ksi, At = 0.1419 in^2, K = 0.2
        let fp = preload_force(130_000.0, 0.1419, true);
        assert!((fp - 11_806.08).abs() < 0.5);

        let t = torque(0.2, 0.5, fp);
        assert!((t - 1_180.6).abs() < 0.5);

        // Preload stress collapses to 0.64*Sy for any stress area
        let sigma = preload_stress(fp, 0.1419).unwrap();
        assert!((sigma - 83_200.0).abs() < 1.0);
    }

    #[test]
    fn test_failure_force_exceeds_reused_preload() {
        let sy = 130_000.0;
        let at = 0.1419;
        let ff = failure_force(sy, at);
        assert!((ff - 0.85 * sy * at).abs() < 1e-9);
        assert!(ff > preload_force(sy, at, true));
    }

    #[test]
    fn test_bolt_stiffness() {
        // E*At/l at grip = 1 in
        let kb = bolt_axial_stiffness(29e6, 0.1419, 1.0).unwrap();
        assert!((kb - 4_115_100.0).abs() < 1.0);
    }

    #[test]
    fn test_bolt_stiffness_zero_grip_fails() {
        let err = bolt_axial_stiffness(29e6, 0.1419, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_member_stiffness_worked_example() {
        // 1 in member, 0.5156 in hole, steel
        let km = member_stiffness(29e6, 0.5156, 1.0).unwrap();
        assert!(km.is_finite());
        assert!(km > 0.0);
        assert!((km - 1.626e7).abs() / 1.626e7 < 0.01);
    }

    #[test]
    fn test_member_stiffness_degenerate_geometry_fails() {
        // Zero thickness drives the logarithm argument to 1
        let err = member_stiffness(29e6, 0.5156, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = member_stiffness(29e6, 0.0, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_stiffness_constant_even_split() {
        for k in [1.0, 4_115_100.0, 1e9] {
            assert_eq!(stiffness_constant(k, k).unwrap(), 0.5);
        }
    }

    #[test]
    fn test_stiffness_constant_zero_sum_fails() {
        let err = stiffness_constant(0.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_service_load() {
        let p = service_load(15_679.95, 11_806.08, 0.202, 1.0).unwrap();
        assert!(p.is_finite());
        assert!(p > 0.0);
        assert!((p - (15_679.95 - 11_806.08) / 0.202).abs() < 1e-6);
    }

    #[test]
    fn test_service_load_zero_denominator_fails() {
        assert_eq!(
            service_load(15_000.0, 11_000.0, 0.0, 1.0)
                .unwrap_err()
                .error_code(),
            "DIVISION_BY_ZERO"
        );
        assert_eq!(
            service_load(15_000.0, 11_000.0, 0.2, 0.0)
                .unwrap_err()
                .error_code(),
            "DIVISION_BY_ZERO"
        );
    }
}

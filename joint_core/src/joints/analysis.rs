//! # Joint Analysis
//!
//! Single-call analysis surface following the crate's calculation pattern:
//!
//! - [`JointInput`] - all raw inputs (JSON-serializable)
//! - [`JointSummary`] - flat results (JSON-serializable)
//! - [`calculate`]`(input) -> Result<JointSummary, CalcError>`
//!
//! Internally this composes a [`Bolt`], a [`Member`], and a
//! [`BoltedJoint`](crate::joints::BoltedJoint) and flattens their derived
//! fields into one result struct.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::joints::analysis::{calculate, JointInput};
//!
//! let input = JointInput {
//!     label: "J-1".to_string(),
//!     d_nominal_in: 0.5,
//!     yield_strength_psi: 130_000.0,
//!     stress_area_in2: 0.1419,
//!     reuse: true,
//!     k_factor: 0.2,
//!     grip_in: 1.0,
//!     bolt_modulus_psi: 29e6,
//!     member_thickness_in: 1.0,
//!     hole_diameter_in: 0.5156,
//!     member_modulus_psi: 29e6,
//!     safety_factor: 1.0,
//! };
//!
//! let summary = calculate(&input).unwrap();
//! assert!(summary.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::joints::{Bolt, BoltedJoint, Member};

/// Input parameters for a full bolted-joint analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "J-1",
///   "d_nominal_in": 0.5,
///   "yield_strength_psi": 130000.0,
///   "stress_area_in2": 0.1419,
///   "reuse": true,
///   "k_factor": 0.2,
///   "grip_in": 1.0,
///   "bolt_modulus_psi": 29000000.0,
///   "member_thickness_in": 1.0,
///   "hole_diameter_in": 0.5156,
///   "member_modulus_psi": 29000000.0,
///   "safety_factor": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointInput {
    /// User label for this joint (e.g., "J-1", "Flange Joint")
    pub label: String,

    /// Bolt nominal diameter (in)
    pub d_nominal_in: f64,

    /// Bolt tensile yield strength (psi)
    pub yield_strength_psi: f64,

    /// Bolt tensile stress area (in²)
    pub stress_area_in2: f64,

    /// Whether the fastener will be reused
    pub reuse: bool,

    /// Torque coefficient K
    pub k_factor: f64,

    /// Grip length (in)
    pub grip_in: f64,

    /// Bolt elastic modulus (psi)
    pub bolt_modulus_psi: f64,

    /// Clamped member thickness (in)
    pub member_thickness_in: f64,

    /// Bolt hole diameter in the member (in)
    pub hole_diameter_in: f64,

    /// Member elastic modulus (psi)
    pub member_modulus_psi: f64,

    /// Safety factor on the service load
    pub safety_factor: f64,
}

impl JointInput {
    /// Validate input parameters.
    ///
    /// Construction of the bolt and member re-checks their own inputs; this
    /// catches everything up front so callers get one early, field-named
    /// error.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("d_nominal_in", self.d_nominal_in),
            ("yield_strength_psi", self.yield_strength_psi),
            ("stress_area_in2", self.stress_area_in2),
            ("k_factor", self.k_factor),
            ("grip_in", self.grip_in),
            ("bolt_modulus_psi", self.bolt_modulus_psi),
            ("member_thickness_in", self.member_thickness_in),
            ("hole_diameter_in", self.hole_diameter_in),
            ("member_modulus_psi", self.member_modulus_psi),
            ("safety_factor", self.safety_factor),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Flat results from a bolted-joint analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSummary {
    /// Label copied from the input
    pub label: String,

    /// Recommended preload force (lb)
    pub preload_lb: f64,

    /// Installation torque (in-lb)
    pub torque_inlb: f64,

    /// Preload stress (psi)
    pub preload_stress_psi: f64,

    /// Bolt failure force (lb)
    pub failure_lb: f64,

    /// Bolt axial stiffness (lb/in)
    pub bolt_stiffness_lb_per_in: f64,

    /// Member axial stiffness (lb/in)
    pub member_stiffness_lb_per_in: f64,

    /// Load-sharing ratio C
    pub stiffness_constant: f64,

    /// Service-load capacity (lb)
    pub service_load_lb: f64,

    /// Safety factor the capacity was computed with
    pub safety_factor: f64,
}

impl JointSummary {
    /// Check that the joint has a usable capacity: a finite positive
    /// service load with the load-sharing ratio strictly between 0 and 1.
    pub fn passes(&self) -> bool {
        self.service_load_lb.is_finite()
            && self.service_load_lb > 0.0
            && self.stiffness_constant > 0.0
            && self.stiffness_constant < 1.0
    }
}

/// Run the full preload / stiffness / service-load chain for one joint.
///
/// # Errors
///
/// * `InvalidInput` - a non-positive input field
/// * `InvalidGeometry` - degenerate member geometry
/// * `CalculationFailed` - preload not below the failure force
pub fn calculate(input: &JointInput) -> CalcResult<JointSummary> {
    input.validate()?;

    let bolt = Bolt::builder(
        input.d_nominal_in,
        input.yield_strength_psi,
        input.stress_area_in2,
    )
    .reuse(input.reuse)
    .k_factor(input.k_factor)
    .grip(input.grip_in)
    .modulus(input.bolt_modulus_psi)
    .build()?;

    let member = Member::new(
        input.member_thickness_in,
        input.hole_diameter_in,
        input.member_modulus_psi,
    )?;

    let joint = BoltedJoint::new(bolt, member, input.safety_factor)?;

    Ok(JointSummary {
        label: input.label.clone(),
        preload_lb: joint.bolt.preload_lb,
        torque_inlb: joint.bolt.torque_inlb,
        preload_stress_psi: joint.bolt.preload_stress_psi,
        failure_lb: joint.bolt.failure_lb,
        bolt_stiffness_lb_per_in: joint.bolt.stiffness_lb_per_in,
        member_stiffness_lb_per_in: joint.member.stiffness_lb_per_in,
        stiffness_constant: joint.stiffness_constant,
        service_load_lb: joint.service_load_lb,
        safety_factor: joint.safety_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> JointInput {
        JointInput {
            label: "Test Joint".to_string(),
            d_nominal_in: 0.5,
            yield_strength_psi: 130_000.0,
            stress_area_in2: 0.1419,
            reuse: true,
            k_factor: 0.2,
            grip_in: 1.0,
            bolt_modulus_psi: 29e6,
            member_thickness_in: 1.0,
            hole_diameter_in: 0.5156,
            member_modulus_psi: 29e6,
            safety_factor: 1.0,
        }
    }

    #[test]
    fn test_worked_example_summary() {
        let summary = calculate(&worked_example()).unwrap();

        assert!((summary.preload_lb - 11_806.08).abs() < 0.5);
        assert!((summary.torque_inlb - 1_180.6).abs() < 0.5);
        assert!((summary.preload_stress_psi - 83_200.0).abs() < 1.0);
        assert!((summary.failure_lb - 15_679.95).abs() < 0.5);
        assert!((summary.bolt_stiffness_lb_per_in - 4_115_100.0).abs() < 1.0);
        assert!(
            (summary.member_stiffness_lb_per_in - 1.626e7).abs() / 1.626e7 < 0.01
        );
        assert!((summary.stiffness_constant - 0.202).abs() < 0.005);
        assert!((summary.service_load_lb - 19_177.0).abs() / 19_177.0 < 0.01);
        assert!(summary.passes());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let mut input = worked_example();
        input.grip_in = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_degenerate_member_rejected() {
        let mut input = worked_example();
        input.member_thickness_in = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = worked_example();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: JointInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.grip_in, roundtrip.grip_in);
        assert_eq!(input.safety_factor, roundtrip.safety_factor);

        let summary = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let roundtrip: JointSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}

//! # Bolted Joint
//!
//! Composition of a [`Bolt`] and a [`Member`] into a joint, with the
//! load-sharing ratio and service-load capacity computed at construction.
//!
//! The joint takes its bolt and member by value. Both are fully computed by
//! the time they exist, so the joint can never observe a fastener whose
//! stiffness has not been evaluated.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::joints::{Bolt, BoltedJoint, Member};
//!
//! let bolt = Bolt::builder(0.5, 130_000.0, 0.1419)
//!     .grip(1.0)
//!     .modulus(29e6)
//!     .build()
//!     .unwrap();
//! let member = Member::new(1.0, 0.5156, 29e6).unwrap();
//!
//! let joint = BoltedJoint::new(bolt, member, 1.0).unwrap();
//! assert!(joint.stiffness_constant > 0.0 && joint.stiffness_constant < 1.0);
//! assert!(joint.service_load_lb > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::joints::formulas;
use crate::joints::{Bolt, Member};

/// A bolted joint: one bolt clamping one member stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltedJoint {
    /// The fastener
    pub bolt: Bolt,

    /// The clamped members
    pub member: Member,

    /// Safety factor applied to the service-load capacity
    pub safety_factor: f64,

    /// Load-sharing ratio C = kb/(kb + km)
    pub stiffness_constant: f64,

    /// Maximum external service load (lb) under the safety factor
    pub service_load_lb: f64,
}

impl BoltedJoint {
    /// Compose a joint and compute its load-sharing ratio and service load.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a non-positive safety factor
    /// - `CalculationFailed` if the bolt's preload is not below its failure
    ///   force (the capacity margin would be non-positive)
    /// - `DivisionByZero` propagated from the underlying formulas
    pub fn new(bolt: Bolt, member: Member, safety_factor: f64) -> CalcResult<BoltedJoint> {
        if safety_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "safety_factor",
                safety_factor.to_string(),
                "Safety factor must be positive",
            ));
        }
        if bolt.preload_lb >= bolt.failure_lb {
            return Err(CalcError::calculation_failed(
                "service load",
                "Bolt preload meets or exceeds its failure force",
            ));
        }

        let stiffness_constant =
            formulas::stiffness_constant(bolt.stiffness_lb_per_in, member.stiffness_lb_per_in)?;
        let service_load_lb = formulas::service_load(
            bolt.failure_lb,
            bolt.preload_lb,
            stiffness_constant,
            safety_factor,
        )?;

        Ok(BoltedJoint {
            bolt,
            member,
            safety_factor,
            stiffness_constant,
            service_load_lb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example_joint(safety_factor: f64) -> BoltedJoint {
        let bolt = Bolt::builder(0.5, 130_000.0, 0.1419)
            .grip(1.0)
            .modulus(29e6)
            .build()
            .unwrap();
        let member = Member::new(1.0, 0.5156, 29e6).unwrap();
        BoltedJoint::new(bolt, member, safety_factor).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let joint = worked_example_joint(1.0);

        // The stiff steel members carry most of the load
        assert!(joint.stiffness_constant > 0.0);
        assert!(joint.stiffness_constant < 1.0);
        assert!((joint.stiffness_constant - 0.202).abs() < 0.005);

        assert!(joint.service_load_lb.is_finite());
        assert!(joint.service_load_lb > 0.0);
        assert!((joint.service_load_lb - 19_177.0).abs() / 19_177.0 < 0.01);
    }

    #[test]
    fn test_safety_factor_scales_capacity() {
        let fs1 = worked_example_joint(1.0);
        let fs4 = worked_example_joint(4.0);
        assert!((fs4.service_load_lb - fs1.service_load_lb / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_safety_factor_fails() {
        let bolt = Bolt::builder(0.5, 130_000.0, 0.1419)
            .grip(1.0)
            .modulus(29e6)
            .build()
            .unwrap();
        let member = Member::new(1.0, 0.5156, 29e6).unwrap();
        let err = BoltedJoint::new(bolt, member, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let joint = worked_example_joint(1.0);
        let json = serde_json::to_string_pretty(&joint).unwrap();
        let roundtrip: BoltedJoint = serde_json::from_str(&json).unwrap();
        assert_eq!(joint, roundtrip);
    }
}

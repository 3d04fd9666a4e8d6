//! # Member
//!
//! Clamped-member value with its axial stiffness computed at construction
//! via the frustum (pressure-cone) approximation.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::joints::Member;
//!
//! // 1 in thick steel plate with a 0.5156 in bolt hole
//! let member = Member::new(1.0, 0.5156, 29e6).unwrap();
//! assert!(member.stiffness_lb_per_in > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::joints::formulas;

/// A clamped member (plate stack) in a bolted joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness_in": 1.0,
///   "hole_diameter_in": 0.5156,
///   "modulus_psi": 29000000.0,
///   "stiffness_lb_per_in": 16255795.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Total clamped thickness (in)
    pub thickness_in: f64,

    /// Bolt hole diameter (in)
    pub hole_diameter_in: f64,

    /// Elastic modulus E (psi)
    pub modulus_psi: f64,

    /// Frustum-approximation axial stiffness (lb/in)
    pub stiffness_lb_per_in: f64,
}

impl Member {
    /// Build a member and compute its stiffness.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for non-positive thickness, hole diameter, or modulus
    /// - `InvalidGeometry` if the frustum formula's logarithm argument is
    ///   degenerate (see [`formulas::member_stiffness`])
    pub fn new(
        thickness_in: f64,
        hole_diameter_in: f64,
        modulus_psi: f64,
    ) -> CalcResult<Member> {
        if modulus_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "modulus_psi",
                modulus_psi.to_string(),
                "Elastic modulus must be positive",
            ));
        }

        let stiffness_lb_per_in =
            formulas::member_stiffness(modulus_psi, hole_diameter_in, thickness_in)?;

        Ok(Member {
            thickness_in,
            hole_diameter_in,
            modulus_psi,
            stiffness_lb_per_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example_stiffness() {
        let member = Member::new(1.0, 0.5156, 29e6).unwrap();
        assert!(member.stiffness_lb_per_in.is_finite());
        assert!(member.stiffness_lb_per_in > 0.0);
        // Frustum formula evaluates to about 1.63e7 lb/in for this geometry
        assert!((member.stiffness_lb_per_in - 1.626e7).abs() / 1.626e7 < 0.01);
    }

    #[test]
    fn test_degenerate_geometry_fails() {
        assert!(Member::new(0.0, 0.5156, 29e6).is_err());
        assert!(Member::new(1.0, -0.5, 29e6).is_err());
        assert!(Member::new(1.0, 0.5156, 0.0).is_err());
    }

    #[test]
    fn test_serialization() {
        let member = Member::new(1.0, 0.5156, 29e6).unwrap();
        let json = serde_json::to_string(&member).unwrap();
        let roundtrip: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(member, roundtrip);
    }
}

//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used in bolted-joint
//! hand calculations. These provide compile-time safety against unit
//! confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Bolted-joint analysis uses a small, fixed set of US customary units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units
//!
//! - Length: inches (in)
//! - Area: square inches (in²)
//! - Force: pounds (lb), kips (k = 1000 lb)
//! - Stress/modulus: pounds per square inch (psi), kips per square inch (ksi)
//! - Torque: inch-pounds (in-lb), foot-pounds (ft-lb)
//! - Stiffness: pounds per inch (lb/in), kips per inch (k/in)
//!
//! ## Example
//!
//! ```rust
//! use joint_core::units::{Pounds, Kips, Psi, Ksi};
//!
//! let preload = Pounds(11806.0);
//! let preload_kips: Kips = preload.into();
//! assert!((preload_kips.0 - 11.806).abs() < 1e-9);
//!
//! let yield_strength = Ksi(130.0);
//! let yield_psi: Psi = yield_strength.into();
//! assert_eq!(yield_psi.0, 130_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / 1000.0)
    }
}

impl From<Kips> for Pounds {
    fn from(k: Kips) -> Self {
        Pounds(k.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Torque Units
// ============================================================================

/// Torque in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

/// Torque in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

impl From<InLb> for FtLb {
    fn from(inlb: InLb) -> Self {
        FtLb(inlb.0 / 12.0)
    }
}

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * 12.0)
    }
}

// ============================================================================
// Stiffness Units
// ============================================================================

/// Axial stiffness in pounds per inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerIn(pub f64);

/// Axial stiffness in kips per inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipPerIn(pub f64);

impl From<LbPerIn> for KipPerIn {
    fn from(lbin: LbPerIn) -> Self {
        KipPerIn(lbin.0 / 1000.0)
    }
}

impl From<KipPerIn> for LbPerIn {
    fn from(kin: KipPerIn) -> Self {
        LbPerIn(kin.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kips);
impl_arithmetic!(Psi);
impl_arithmetic!(Ksi);
impl_arithmetic!(InLb);
impl_arithmetic!(FtLb);
impl_arithmetic!(LbPerIn);
impl_arithmetic!(KipPerIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kips() {
        let lb = Pounds(1500.0);
        let k: Kips = lb.into();
        assert_eq!(k.0, 1.5);
    }

    #[test]
    fn test_psi_to_ksi() {
        let psi = Psi(130_000.0);
        let ksi: Ksi = psi.into();
        assert_eq!(ksi.0, 130.0);
    }

    #[test]
    fn test_inlb_to_ftlb() {
        let t = InLb(1180.6);
        let ftlb: FtLb = t.into();
        assert!((ftlb.0 - 98.3833).abs() < 1e-3);
    }

    #[test]
    fn test_stiffness_conversion() {
        let k = LbPerIn(4_115_100.0);
        let kpi: KipPerIn = k.into();
        assert!((kpi.0 - 4115.1).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(100.0);
        let b = Pounds(40.0);
        assert_eq!((a + b).0, 140.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let area = SqIn(0.1419);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "0.1419");

        let roundtrip: SqIn = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);
    }
}

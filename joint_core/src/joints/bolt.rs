//! # Bolt
//!
//! Immutable bolt value with all derived quantities computed at build time.
//!
//! A bolt needs its grip length and elastic modulus before its axial
//! stiffness is defined, so construction goes through [`BoltBuilder`]: the
//! builder will not yield a [`Bolt`] until both are supplied, which makes a
//! half-initialized bolt unrepresentable.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::joints::Bolt;
//!
//! // 1/2-13 bolt, Sy = 130 ksi, At = 0.1419 in^2
//! let bolt = Bolt::builder(0.5, 130_000.0, 0.1419)
//!     .reuse(true)
//!     .k_factor(0.2)
//!     .grip(1.0)
//!     .modulus(29e6)
//!     .build()
//!     .unwrap();
//!
//! assert!(bolt.preload_lb > 11_800.0);
//! assert!(bolt.stiffness_lb_per_in > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::joints::formulas;

/// A fully-formed bolt with its derived preload, torque, stress, failure
/// force, and axial stiffness.
///
/// ## JSON Example
///
/// ```json
/// {
///   "d_nominal_in": 0.5,
///   "yield_strength_psi": 130000.0,
///   "stress_area_in2": 0.1419,
///   "reuse": true,
///   "k_factor": 0.2,
///   "grip_in": 1.0,
///   "modulus_psi": 29000000.0,
///   "preload_lb": 11806.08,
///   "torque_inlb": 1180.6,
///   "preload_stress_psi": 83200.0,
///   "failure_lb": 15679.95,
///   "stiffness_lb_per_in": 4115100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    /// Nominal thread diameter (in)
    pub d_nominal_in: f64,

    /// Tensile yield strength Sy (psi)
    pub yield_strength_psi: f64,

    /// Tensile stress area At (in²)
    pub stress_area_in2: f64,

    /// Whether the fastener will be reused (lowers the recommended preload)
    pub reuse: bool,

    /// Torque coefficient K
    pub k_factor: f64,

    /// Grip length (in)
    pub grip_in: f64,

    /// Elastic modulus E (psi)
    pub modulus_psi: f64,

    /// Recommended preload force Fp (lb)
    pub preload_lb: f64,

    /// Installation torque T = K·d·Fp (in-lb)
    pub torque_inlb: f64,

    /// Preload stress Fp/At (psi)
    pub preload_stress_psi: f64,

    /// Failure force 0.85·Sy·At (lb)
    pub failure_lb: f64,

    /// Axial stiffness E·At/grip (lb/in)
    pub stiffness_lb_per_in: f64,
}

impl Bolt {
    /// Start building a bolt from its nominal diameter, yield strength,
    /// and tensile stress area.
    pub fn builder(
        d_nominal_in: f64,
        yield_strength_psi: f64,
        stress_area_in2: f64,
    ) -> BoltBuilder {
        BoltBuilder {
            d_nominal_in,
            yield_strength_psi,
            stress_area_in2,
            reuse: true,
            k_factor: formulas::DEFAULT_K_FACTOR,
            grip_in: None,
            modulus_psi: None,
        }
    }
}

/// Builder for [`Bolt`].
///
/// Reuse defaults to `true` and the K-factor to 0.2, matching common
/// hand-calculation practice. Grip length and modulus have no sensible
/// defaults and must be supplied before `build()` succeeds.
#[derive(Debug, Clone)]
pub struct BoltBuilder {
    d_nominal_in: f64,
    yield_strength_psi: f64,
    stress_area_in2: f64,
    reuse: bool,
    k_factor: f64,
    grip_in: Option<f64>,
    modulus_psi: Option<f64>,
}

impl BoltBuilder {
    /// Set whether the fastener will be reused (default: true)
    pub fn reuse(mut self, reuse: bool) -> Self {
        self.reuse = reuse;
        self
    }

    /// Set the torque coefficient K (default: 0.2)
    pub fn k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    /// Set the grip length in inches (required)
    pub fn grip(mut self, grip_in: f64) -> Self {
        self.grip_in = Some(grip_in);
        self
    }

    /// Set the elastic modulus in psi (required)
    pub fn modulus(mut self, modulus_psi: f64) -> Self {
        self.modulus_psi = Some(modulus_psi);
        self
    }

    /// Validate inputs and compute every derived quantity.
    ///
    /// # Errors
    ///
    /// - `MissingField` if grip or modulus was never supplied
    /// - `InvalidInput` for non-positive diameter, strength, area, K-factor,
    ///   grip, or modulus
    pub fn build(self) -> CalcResult<Bolt> {
        let grip_in = self.grip_in.ok_or_else(|| CalcError::missing_field("grip_in"))?;
        let modulus_psi = self
            .modulus_psi
            .ok_or_else(|| CalcError::missing_field("modulus_psi"))?;

        let positive = [
            ("d_nominal_in", self.d_nominal_in),
            ("yield_strength_psi", self.yield_strength_psi),
            ("stress_area_in2", self.stress_area_in2),
            ("k_factor", self.k_factor),
            ("grip_in", grip_in),
            ("modulus_psi", modulus_psi),
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

        let preload_lb =
            formulas::preload_force(self.yield_strength_psi, self.stress_area_in2, self.reuse);
        let torque_inlb = formulas::torque(self.k_factor, self.d_nominal_in, preload_lb);
        let preload_stress_psi = formulas::preload_stress(preload_lb, self.stress_area_in2)?;
        let failure_lb = formulas::failure_force(self.yield_strength_psi, self.stress_area_in2);
        let stiffness_lb_per_in =
            formulas::bolt_axial_stiffness(modulus_psi, self.stress_area_in2, grip_in)?;

        Ok(Bolt {
            d_nominal_in: self.d_nominal_in,
            yield_strength_psi: self.yield_strength_psi,
            stress_area_in2: self.stress_area_in2,
            reuse: self.reuse,
            k_factor: self.k_factor,
            grip_in,
            modulus_psi,
            preload_lb,
            torque_inlb,
            preload_stress_psi,
            failure_lb,
            stiffness_lb_per_in,
        })
    }
}

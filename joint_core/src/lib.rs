//! # joint_core - Bolted-Joint Calculation Engine
//!
//! `joint_core` provides closed-form mechanical-engineering hand
//! calculations: average normal/shear stress and a bolted-joint
//! preload/stiffness/service-load model, with a clean JSON-friendly API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions and immutable values computed at
//!   construction - no mutation after build, safe to use from any thread
//!   with its own instances
//! - **JSON-First**: All public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not arithmetic faults - a
//!   zero denominator or degenerate geometry is an `Err`, never a NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use joint_core::joints::{calculate, JointInput};
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
//! println!("Service load: {:.0} lb", summary.service_load_lb);
//! ```
//!
//! ## Modules
//!
//! - [`stress`] - average normal and shear stress primitives
//! - [`joints`] - bolt, member, and joint model with the formula set
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod errors;
pub mod joints;
pub mod stress;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use joints::{Bolt, BoltBuilder, BoltedJoint, JointInput, JointSummary, Member};

//! # Bolted-Joint Model
//!
//! Preload, torque, stiffness, and service-load analysis of a single-bolt
//! joint. The model is a fixed chain of closed-form formulas:
//!
//! 1. [`Bolt`] - preload, torque, preload stress, failure force, axial
//!    stiffness (built through [`BoltBuilder`])
//! 2. [`Member`] - frustum-approximation stiffness of the clamped stack
//! 3. [`BoltedJoint`] - load-sharing ratio and service-load capacity
//!
//! The raw equations live in [`formulas`]; [`analysis`] wraps the whole
//! chain behind a single `JointInput -> JointSummary` call.

pub mod analysis;
pub mod bolt;
pub mod formulas;
pub mod joint;
pub mod member;

// Re-export commonly used types
pub use analysis::{calculate, JointInput, JointSummary};
pub use bolt::{Bolt, BoltBuilder};
pub use joint::BoltedJoint;
pub use member::Member;

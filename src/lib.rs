//! Rust implementation of forward and inverse kinematic solutions for six
//! axis robots with an offset (non spherical) wrist, as found in the
//! Universal Robots family. The last three joint axes of these arms do not
//! intersect in one point; instead the fore arm runs laterally offset from
//! the base axis, which makes the usual spherical wrist decoupling
//! inapplicable. The solver here is purely geometric: a tangent
//! construction around the offset cylinder fixes the base joint, a
//! plane-plane intersection fixes the wrist axis, a circle-circle
//! intersection places the elbow, and the remaining joints are signed
//! angles folded into the chain one at a time.
//!
//! # Features
//!
//! - Forward kinematics returns every joint frame of the chain, not only
//!   the tool pose, so a caller can draw or validate the whole arm.
//! - The inverse solver is closed form (no iteration, no Jacobian), takes
//!   the branch to produce as an explicit [kinematic_traits::Configuration]
//!   (shoulder left/right, wrist up/down, elbow up/down), and can
//!   enumerate every reachable branch of a pose.
//! - Solutions are exact inverses of the forward map; an unreachable
//!   target is reported as a typed error, never as a NaN laden angle
//!   vector.
//! - The robot is described by a plain Denavit-Hartenberg table; tables
//!   for UR3, UR5 and UR10 are built in, others can be loaded from YAML
//!   (feature `allow_filesystem`).
//! - Joint travel limits are deliberately not enforced here: every
//!   returned branch is geometrically valid, and which of them a physical
//!   robot accepts is the caller's policy.
//!
//! # Parameters
//!
//! Fill out a [parameters::ur_kinematics::DhTable] with one row
//! (joint distance d, base joint angle, link length a, link twist alpha)
//! per joint, base to tool. The solver expects the UR twist pattern
//! (+90, 0, 0, +90, -90, 0 degrees); see the built in tables for examples.

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematic_error;
pub mod geometry;
pub mod kinematics_impl;

#[cfg(test)]
mod tests;

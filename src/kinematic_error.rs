//! Failure taxonomy of the solver.

use std::error::Error;
use std::fmt;

/// Which geometric stage rejected the target. All of them mean the same
/// thing to the caller: no joint vector on the requested branch reaches
/// the pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableReason {
    /// The wrist center projects inside the cylinder of radius d2 + d4
    /// around the base axis, where the tangent construction for the base
    /// joint has no solution.
    InsideDeadCylinder,

    /// The upper arm and fore arm circles do not intersect: the elbow
    /// cannot span the distance between the shoulder and the wrist anchor.
    ElbowOutOfSpan,

    /// The target plane is parallel to the shoulder plane, leaving the
    /// wrist axis direction undefined. This also covers the wrist
    /// singularity where the approach axis lines up with the lateral
    /// offset axis of the fore arm.
    WristAxisUndefined,
}

/// The single failure kind the solver reports. Reachability is a static
/// geometric property of the input, so there is nothing to retry and no
/// partial result to return; joint angles outside a physical robot's
/// travel limits are not an error here and are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicError {
    Unreachable(UnreachableReason),
}

impl fmt::Display for KinematicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KinematicError::Unreachable(reason) => match reason {
                UnreachableReason::InsideDeadCylinder =>
                    write!(f, "Target unreachable: wrist center inside the dead cylinder around the base axis"),
                UnreachableReason::ElbowOutOfSpan =>
                    write!(f, "Target unreachable: arm links cannot span the shoulder to wrist distance"),
                UnreachableReason::WristAxisUndefined =>
                    write!(f, "Target unreachable: wrist axis undefined (target plane parallel to the shoulder plane)"),
            },
        }
    }
}

impl Error for KinematicError {}

//! Defines the vocabulary types shared by the chain evaluator and the solver.

use crate::kinematic_error::KinematicError;
use nalgebra::Isometry3;

/// Pose of a joint frame or of the tool: Cartesian position and rotation.
/// The rotation carries the full orthonormal, right-handed basis of the
/// frame; see [crate::geometry] for the axis accessors.
pub type Pose = Isometry3<f64>;

/// Six joint rotations in radians, base joint first.
pub type Joints = [f64; 6];

/// All joints at zero. For UR style robots this is the arm stretched
/// horizontally along the base X axis.
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

/// Multiple joint solutions for the same Cartesian pose, one per reachable
/// branch, in the order of [Configuration::all].
pub type Solutions = Vec<Joints>;

/// Selects one of the up to eight joint space branches that reach the same
/// Cartesian target. The three choices are orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Shoulder on the right or on the left of the target. The left handed
    /// solution turns the base half around and approaches the wrist offset
    /// cylinder from the other tangent.
    pub right_hand: bool,

    /// Of the two antiparallel wrist axis directions, keep the one whose
    /// vertical component is positive (up) or negative (down). A target
    /// whose wrist axis comes out exactly horizontal is not affected by
    /// this flag.
    pub wrist_up: bool,

    /// Which of the two elbow circle intersections to take, after ordering
    /// them by the [ElbowTieBreak] policy.
    pub elbow_up: bool,
}

impl Configuration {
    pub const fn new(right_hand: bool, wrist_up: bool, elbow_up: bool) -> Self {
        Configuration { right_hand, wrist_up, elbow_up }
    }

    /// All eight branch selections, right handed first.
    pub const fn all() -> [Configuration; 8] {
        [
            Configuration::new(true, true, true),
            Configuration::new(true, true, false),
            Configuration::new(true, false, true),
            Configuration::new(true, false, false),
            Configuration::new(false, true, true),
            Configuration::new(false, true, false),
            Configuration::new(false, false, true),
            Configuration::new(false, false, false),
        ]
    }
}

impl Default for Configuration {
    /// Right handed, wrist down, elbow down.
    fn default() -> Self {
        Configuration::new(true, false, false)
    }
}

/// Ordering convention between the two elbow circle intersections before
/// [Configuration::elbow_up] indexes into them. The Z sort matches an
/// upright floor mount; a robot hanging from the ceiling inverts which
/// candidate is physically "up", so the policy is swappable rather than
/// baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElbowTieBreak {
    /// Candidates ordered by ascending world Z (the default).
    #[default]
    LowestZFirst,
    /// Candidates ordered by descending world Z, for inverted mounts.
    HighestZFirst,
}

pub trait Kinematics {
    /// Pose of the tool frame for the given joints.
    fn forward(&self, joints: &Joints) -> Pose;

    /// All frames of the chain in world coordinates: frame 0 is the base
    /// turned by the base joint about its own normal, frames 1..6 are the
    /// successive joint frames.
    fn forward_frames(&self, joints: &Joints) -> [Pose; 7];

    /// The closed form joint solution reaching `pose` on the branch chosen
    /// by `config`, or [KinematicError::Unreachable].
    fn inverse(&self, pose: &Pose, config: Configuration) -> Result<Joints, KinematicError>;

    /// Joint solutions for every reachable branch of `pose`, in the order
    /// of [Configuration::all].
    fn inverse_all(&self, pose: &Pose) -> Solutions;
}

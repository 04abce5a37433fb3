//! Implements the chain evaluator (forward kinematics) and the analytic,
//! closed form inverse solver for six revolute arms with an offset wrist.

use crate::geometry::{
    circle_circle_intersection, dh_transform, normal, plane_intersection_direction, signed_angle,
    x_axis, y_axis,
};
use crate::kinematic_error::{KinematicError, UnreachableReason};
use crate::kinematic_traits::{
    Configuration, ElbowTieBreak, Joints, Kinematics, Pose, Solutions, JOINTS_AT_ZERO,
};
use crate::parameters::ur_kinematics::DhTable;
use crate::utils::{is_valid, normalize_angle};
use nalgebra::{Isometry3, Point3, Unit, Vector3};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Kinematics of one robot: its DH table, its placement in the world and
/// the elbow ordering convention. Every call works on local copies; the
/// struct itself is immutable and safe to share between threads.
#[derive(Debug, Clone)]
pub struct URKinematics {
    table: DhTable,
    base: Pose,
    elbow_tie_break: ElbowTieBreak,
}

impl URKinematics {
    /// Robot standing at the world origin.
    ///
    /// ```
    /// use rs_ur_kinematics::kinematic_traits::{Kinematics, JOINTS_AT_ZERO};
    /// use rs_ur_kinematics::kinematics_impl::URKinematics;
    /// use rs_ur_kinematics::parameters::ur_kinematics::DhTable;
    ///
    /// let robot = URKinematics::new(DhTable::ur5());
    /// let tool = robot.forward(&JOINTS_AT_ZERO);
    /// // Arm stretched along X: a2 + a3 ahead of the base.
    /// assert!((tool.translation.x - 0.81725).abs() < 1e-9);
    /// ```
    pub fn new(table: DhTable) -> Self {
        Self::new_with_base(table, Pose::identity())
    }

    /// Robot placed in the world by `base`. Targets handed to [Kinematics::inverse]
    /// stay world coordinates; they are re-expressed in the base frame
    /// internally.
    pub fn new_with_base(table: DhTable, base: Pose) -> Self {
        URKinematics { table, base, elbow_tie_break: ElbowTieBreak::default() }
    }

    /// Same, with an explicit elbow ordering convention (inverted mounts).
    pub fn new_with_tie_break(table: DhTable, base: Pose, elbow_tie_break: ElbowTieBreak) -> Self {
        URKinematics { table, base, elbow_tie_break }
    }

    pub fn table(&self) -> &DhTable {
        &self.table
    }

    pub fn base(&self) -> &Pose {
        &self.base
    }

    /// The whole solve runs in base coordinates; `target` must already be
    /// re-expressed there. The joint angles are accumulated in a local
    /// array and folded into a running prefix product of the chain, so the
    /// caller's table is never touched.
    fn solve_local(&self, target: &Pose, config: Configuration) -> Result<Joints, KinematicError> {
        let rows = &self.table.rows;
        let offset_radius = self.table.lateral_offset();

        // Wrist center: back off from the tool flange along the approach
        // axis by the tool offset d6.
        let approach = normal(target);
        let wrist_center =
            Point3::from(target.translation.vector - rows[5].joint_distance * approach);

        // Base joint. The wrist center rides on a cylinder of radius
        // d2 + d4 around the base axis, so the shoulder plane must run
        // tangent to that cylinder instead of through the center itself.
        let projection = Vector3::new(wrist_center.x, wrist_center.y, 0.0);
        let reach = projection.norm();
        let ratio = offset_radius / reach;
        if !(ratio.abs() <= 1.0) {
            debug!(offset_radius, reach, "wrist center inside the dead cylinder");
            return Err(KinematicError::Unreachable(UnreachableReason::InsideDeadCylinder));
        }
        let tangent = ratio.asin();
        let heading = projection.y.atan2(projection.x);
        // The left handed branch flips the tangent side and turns the base
        // half around; both adjustments must go together or the handedness
        // comes out inconsistent.
        let mut joints = JOINTS_AT_ZERO;
        joints[0] = if config.right_hand {
            normalize_angle(heading + tangent)
        } else {
            normalize_angle(heading - tangent + PI)
        };
        trace!(joint_0 = joints[0], right_hand = config.right_hand, "base joint resolved");

        // Shoulder frame with the base joint substituted in, and its copy
        // pushed out to the fore arm plane.
        let mut chain = dh_transform(&rows[0], joints[0]);
        let shoulder_axis = normal(&chain);
        let shoulder_offset =
            Point3::from(chain.translation.vector + offset_radius * shoulder_axis);

        // Wrist axis: the target plane cuts the offset shoulder plane in a
        // line; wrist_up picks between its two antiparallel directions by
        // the sign of the vertical component.
        let line = plane_intersection_direction(&approach, &shoulder_axis)
            .ok_or(KinematicError::Unreachable(UnreachableReason::WristAxisUndefined))?;
        let mut wrist_axis = line.into_inner();
        if (config.wrist_up && wrist_axis.z < 0.0) || (!config.wrist_up && wrist_axis.z > 0.0) {
            wrist_axis = -wrist_axis;
        }
        let wrist_anchor = wrist_center + rows[4].joint_distance * wrist_axis;

        // Elbow: intersect the upper arm circle around the offset shoulder
        // with the fore arm circle around the wrist anchor. Both circles
        // lie in the fore arm plane.
        let candidates = circle_circle_intersection(
            &shoulder_offset,
            rows[1].link_length,
            &wrist_anchor,
            rows[2].link_length,
            &Unit::new_normalize(shoulder_axis),
        )
        .ok_or(KinematicError::Unreachable(UnreachableReason::ElbowOutOfSpan))?;
        let elbow = self.select_elbow(candidates, config.elbow_up);
        trace!(elbow_up = config.elbow_up, elbow_z = elbow.z, "elbow candidate selected");

        // Shoulder and elbow joints: signed angles toward the points just
        // constructed, each folded into the chain before the next joint is
        // measured so later angles see the updated frames.
        joints[1] = signed_angle(&x_axis(&chain), &(elbow - shoulder_offset), &shoulder_axis);
        chain = chain * dh_transform(&rows[1], joints[1]);

        joints[2] = signed_angle(&x_axis(&chain), &(wrist_anchor - elbow), &normal(&chain));
        chain = chain * dh_transform(&rows[2], joints[2]);

        // Wrist joints: align the evolving chain with the wrist axis and
        // then with the target orientation, one signed angle at a time.
        joints[3] = signed_angle(&y_axis(&chain), &wrist_axis, &normal(&chain));
        chain = chain * dh_transform(&rows[3], joints[3]);

        joints[4] = signed_angle(&y_axis(&chain), &approach, &normal(&chain));
        chain = chain * dh_transform(&rows[4], joints[4]);

        joints[5] = signed_angle(&x_axis(&chain), &x_axis(target), &normal(&chain));

        debug_assert!(is_valid(&joints));
        Ok(joints)
    }

    fn select_elbow(&self, candidates: (Point3<f64>, Point3<f64>), elbow_up: bool) -> Point3<f64> {
        let (first, second) = match self.elbow_tie_break {
            ElbowTieBreak::LowestZFirst if candidates.0.z <= candidates.1.z => candidates,
            ElbowTieBreak::LowestZFirst => (candidates.1, candidates.0),
            ElbowTieBreak::HighestZFirst if candidates.0.z >= candidates.1.z => candidates,
            ElbowTieBreak::HighestZFirst => (candidates.1, candidates.0),
        };
        if elbow_up { second } else { first }
    }
}

impl Kinematics for URKinematics {
    fn forward(&self, joints: &Joints) -> Pose {
        self.forward_frames(joints)[6]
    }

    fn forward_frames(&self, joints: &Joints) -> [Pose; 7] {
        let mut frames = [Pose::identity(); 7];

        // Frame 0: the base plate spun by the base joint about its normal.
        frames[0] = self.base * Isometry3::rotation(Vector3::z() * joints[0]);

        // Frames 1..6: cumulative product of the row transforms, each with
        // its joint variable added to the row's base angle.
        let mut chain = Pose::identity();
        for (i, row) in self.table.rows.iter().enumerate() {
            chain = chain * dh_transform(row, joints[i]);
            frames[i + 1] = self.base * chain;
        }
        frames
    }

    fn inverse(&self, pose: &Pose, config: Configuration) -> Result<Joints, KinematicError> {
        // Undo the robot placement first so all trigonometry below is base
        // relative.
        let local = self.base.inverse() * pose;
        self.solve_local(&local, config)
    }

    fn inverse_all(&self, pose: &Pose) -> Solutions {
        Configuration::all()
            .iter()
            .filter_map(|config| self.inverse(pose, *config).ok())
            .collect()
    }
}

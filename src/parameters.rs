//! Defines the Denavit-Hartenberg table data structures

pub mod ur_kinematics {
    use crate::utils::deg;

    /// Denavit-Hartenberg parameters of one joint. Lengths are in meters,
    /// angles in radians.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhRow {
        /// d: translation along the previous Z axis.
        pub joint_distance: f64,

        /// Theta: base rotation about the previous Z axis. This is a fixed
        /// offset of the joint zero position; the joint variable is added
        /// to it per call and the table itself is never mutated by a solve.
        pub joint_angle: f64,

        /// a: translation along the new X axis.
        pub link_length: f64,

        /// Alpha: rotation about the new X axis.
        pub link_twist: f64,
    }

    impl DhRow {
        pub const fn new(joint_distance: f64, joint_angle: f64, link_length: f64, link_twist: f64) -> Self {
            DhRow { joint_distance, joint_angle, link_length, link_twist }
        }
    }

    /// The ordered DH chain of a six revolute arm, base to tool. Built once
    /// per robot model and passed by reference into the evaluator and the
    /// solver; see [crate::parameters_robots] for concrete robots.
    ///
    /// The analytic solver expects the UR twist pattern
    /// (+90, 0, 0, +90, -90, 0 degrees): joints 2 and 3 parallel to
    /// joint 1, an offset wrist whose lateral displacement is the sum of
    /// rows 1 and 3 joint distances.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhTable {
        pub rows: [DhRow; 6],
    }

    impl DhTable {
        pub const fn new(rows: [DhRow; 6]) -> Self {
            DhTable { rows }
        }

        /// Lateral displacement d2 + d4 between the base axis and the fore
        /// arm plane. The wrist center can never come closer than this to
        /// the base axis; it is the radius of the dead cylinder.
        pub fn lateral_offset(&self) -> f64 {
            self.rows[1].joint_distance + self.rows[3].joint_distance
        }

        /// Convert to string yaml representation (quick viewing, matches the
        /// format accepted by the file loader).
        pub fn to_yaml(&self) -> String {
            let mut out = String::from("dh_table:\n");
            for row in &self.rows {
                out.push_str(&format!(
                    "  - {{ joint_distance: {}, joint_angle: {}, link_length: {}, link_twist: {} }}\n",
                    row.joint_distance,
                    deg(row.joint_angle),
                    row.link_length,
                    deg(row.link_twist)
                ));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ur_kinematics::DhTable;

    #[test]
    fn test_lateral_offset_is_d2_plus_d4() {
        let table = DhTable::ur5();
        let expected = table.rows[1].joint_distance + table.rows[3].joint_distance;
        assert_eq!(table.lateral_offset(), expected);
        assert!((table.lateral_offset() - 0.11).abs() < 1e-12);
    }

    #[test]
    fn test_to_yaml_lists_all_rows() {
        let yaml = DhTable::ur5().to_yaml();
        assert!(yaml.starts_with("dh_table:"));
        assert_eq!(yaml.matches("joint_distance").count(), 6);
        assert!(yaml.contains("deg(90"));
    }
}

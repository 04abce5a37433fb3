//! Hardcoded DH tables for a few robots

pub mod ur_kinematics {
    use crate::parameters::ur_kinematics::{DhRow, DhTable};
    use std::f64::consts::FRAC_PI_2;

    #[allow(dead_code)]
    impl DhTable {
        /// Universal Robots UR5, calibration used on the teaching cells this
        /// library grew up with. The 110 mm lateral wrist offset is split
        /// 66.3 mm / 43.7 mm between the shoulder and wrist rows; only the
        /// sum matters for reachability, the split places the intermediate
        /// frames. Row 2 link length 392.25 mm is the fore arm link length.
        pub fn ur5() -> Self {
            DhTable::new([
                DhRow::new(0.0892, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.0663, 0.0, 0.425, 0.0),
                DhRow::new(0.0, 0.0, 0.39225, 0.0),
                DhRow::new(0.0437, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.09475, 0.0, 0.0, -FRAC_PI_2),
                DhRow::new(0.0825, 0.0, 0.0, 0.0),
            ])
        }

        /// Universal Robots UR10, published nominal parameters. The whole
        /// lateral offset sits in the shoulder row; distributing it over the
        /// two parallel axis rows is equivalent.
        pub fn ur10() -> Self {
            DhTable::new([
                DhRow::new(0.1273, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.163941, 0.0, 0.612, 0.0),
                DhRow::new(0.0, 0.0, 0.5723, 0.0),
                DhRow::new(0.0, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.1157, 0.0, 0.0, -FRAC_PI_2),
                DhRow::new(0.0922, 0.0, 0.0, 0.0),
            ])
        }

        /// Universal Robots UR3, published nominal parameters.
        pub fn ur3() -> Self {
            DhTable::new([
                DhRow::new(0.1519, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.11235, 0.0, 0.24365, 0.0),
                DhRow::new(0.0, 0.0, 0.21325, 0.0),
                DhRow::new(0.0, 0.0, 0.0, FRAC_PI_2),
                DhRow::new(0.08535, 0.0, 0.0, -FRAC_PI_2),
                DhRow::new(0.0819, 0.0, 0.0, 0.0),
            ])
        }
    }
}

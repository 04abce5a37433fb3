//! Helper functions

use crate::kinematic_traits::{Joints, Pose, Solutions};
use std::f64::consts::PI;

/// Checks if all angles in the solution are finite. The solver never
/// returns anything else; this exists for callers assembling joint vectors
/// from other sources.
pub fn is_valid(joints: &Joints) -> bool {
    joints.iter().all(|j| j.is_finite())
}

/// Wrap an angle into (-pi, pi].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI { wrapped - 2.0 * PI } else { wrapped }
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 6]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row = String::new();
    for joint in joints {
        row.push_str(&format!("{:6.2} ", joint.to_degrees()));
    }
    println!("[{}]", row.trim_end());
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for solution in solutions {
        dump_joints(solution);
    }
}

/// Print the pose as translation plus quaternion.
#[allow(dead_code)]
pub fn dump_pose(pose: &Pose) {
    let translation = pose.translation.vector;
    let rotation = pose.rotation;
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}

/// Formatting for YAML output.
pub(crate) fn deg(angle: f64) -> String {
    if angle == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", angle.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_with_all_finite() {
        let joints = [0.0, 1.0, -1.0, 0.5, -0.5, PI];
        assert!(is_valid(&joints));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let joints = [0.0, f64::NAN, 1.0, -1.0, 0.5, -0.5];
        assert!(!is_valid(&joints));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let joints = [0.0, f64::INFINITY, 1.0, -1.0, 0.5, -0.5];
        assert!(!is_valid(&joints));
    }

    #[test]
    fn test_normalize_angle_wraps_into_half_open_interval() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-12);
        assert!((normalize_angle(-0.25) + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_as_radians() {
        let joints = as_radians([180, -90, 0, 45, 30, -180]);
        assert!((joints[0] - PI).abs() < 1e-12);
        assert!((joints[1] + PI / 2.0).abs() < 1e-12);
        assert_eq!(joints[2], 0.0);
    }
}

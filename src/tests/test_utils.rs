use crate::kinematic_traits::{Joints, Pose, Solutions};
use crate::utils::normalize_angle;
use nalgebra::{Isometry3, Matrix3, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Compare two isometries with separate tolerances.
/// - `trans_tol`: max allowed Euclidean distance in meters
/// - `rot_tol`: max allowed rotation angle difference in radians
pub fn are_isometries_close(a: &Pose, b: &Pose, trans_tol: f64, rot_tol: f64) -> bool {
    let translation = (a.translation.vector - b.translation.vector).norm();
    if translation > trans_tol {
        return false;
    }
    // Relative rotation a⁻¹ ∘ b; tolerate tiny numerical drift near identity.
    let relative = a.rotation.inverse() * b.rotation;
    let mut angle = relative.angle();
    if angle.is_nan() {
        angle = 0.0;
    }
    angle <= rot_tol
}

/// True when every joint matches within `tolerance` radians, accounting
/// for the 2 pi wrap.
pub fn joints_close(a: &Joints, b: &Joints, tolerance: f64) -> bool {
    (0..6).all(|i| normalize_angle(a[i] - b[i]).abs() <= tolerance)
}

/// Index of `expected` within `solutions`, or None if no solution matches.
pub fn found_joints_approx_equal(
    solutions: &Solutions,
    expected: &Joints,
    tolerance: f64,
) -> Option<usize> {
    solutions
        .iter()
        .position(|solution| joints_close(solution, expected, tolerance))
}

/// Build a pose from an origin, a reference (X) direction and an approach
/// (Z) direction. The approach wins; the reference is re-orthogonalized
/// against it and the Y axis completes the right handed basis.
pub fn pose_from_axes(origin: Point3<f64>, x: Vector3<f64>, z: Vector3<f64>) -> Pose {
    let z = z.normalize();
    let x = (x - z * x.dot(&z)).normalize();
    let y = z.cross(&x);
    let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
    Isometry3::from_parts(
        Translation3::new(origin.x, origin.y, origin.z),
        UnitQuaternion::from_rotation_matrix(&rotation),
    )
}

//! Geometric primitives shared by the chain evaluator and the solver:
//! the DH transform, signed angles, plane-plane and circle-circle
//! intersection. Everything is pure and value returning; frames are never
//! mutated in place.

use crate::parameters::ur_kinematics::DhRow;
use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

/// Below this the cross product of two unit normals, or the distance of
/// two circle centers, is treated as degenerate.
const DEGENERACY_EPSILON: f64 = 1e-12;

/// Homogeneous transform of one DH row with the joint variable added to
/// the row's base angle: translate d along the previous Z, rotate
/// theta + joint about the previous Z, translate a along the new X,
/// rotate alpha about the new X.
///
/// Chain composition is a plain isometry product, so a prefix of the
/// chain can be extended one row at a time without recomputing the
/// earlier product; the solver relies on this as it fixes joints one by
/// one.
pub fn dh_transform(row: &DhRow, joint: f64) -> Isometry3<f64> {
    let about_z = Isometry3::from_parts(
        Translation3::new(0.0, 0.0, row.joint_distance),
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), row.joint_angle + joint),
    );
    let about_x = Isometry3::from_parts(
        Translation3::new(row.link_length, 0.0, 0.0),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), row.link_twist),
    );
    about_z * about_x
}

/// X axis of a frame (the reference axis).
pub fn x_axis(frame: &Isometry3<f64>) -> Vector3<f64> {
    frame.rotation * Vector3::x()
}

/// Y axis of a frame.
pub fn y_axis(frame: &Isometry3<f64>) -> Vector3<f64> {
    frame.rotation * Vector3::y()
}

/// Z axis of a frame: its normal, for the tool frame the approach axis.
pub fn normal(frame: &Isometry3<f64>) -> Vector3<f64> {
    frame.rotation * Vector3::z()
}

/// Angle from `a` to `b` measured about `axis`, in (-pi, pi]. The sign
/// follows the right hand rule around `axis`; the inputs need not be unit
/// length but should be perpendicular to `axis` for the angle to be exact.
pub fn signed_angle(a: &Vector3<f64>, b: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    a.cross(b).dot(axis).atan2(a.dot(b))
}

/// Direction of the line in which two planes with unit normals `n1` and
/// `n2` intersect, or None when the planes are parallel.
pub fn plane_intersection_direction(
    n1: &Vector3<f64>,
    n2: &Vector3<f64>,
) -> Option<Unit<Vector3<f64>>> {
    let direction = n1.cross(n2);
    if direction.norm_squared() < DEGENERACY_EPSILON {
        return None;
    }
    Some(Unit::new_normalize(direction))
}

/// Intersection of two coplanar circles in 3D, both lying in the plane
/// through `center_a` with the given unit `normal`. Returns the two
/// intersection points (coincident when the circles touch), or None when
/// the circles are concentric, separated, or one contains the other.
pub fn circle_circle_intersection(
    center_a: &Point3<f64>,
    radius_a: f64,
    center_b: &Point3<f64>,
    radius_b: f64,
    normal: &Unit<Vector3<f64>>,
) -> Option<(Point3<f64>, Point3<f64>)> {
    let axis = center_b - center_a;
    let distance = axis.norm();
    if distance < DEGENERACY_EPSILON {
        return None;
    }
    let along = axis / distance;

    // Distance from center_a to the radical line, then the half chord.
    let to_chord = (distance * distance + radius_a * radius_a - radius_b * radius_b)
        / (2.0 * distance);
    let half_chord_squared = radius_a * radius_a - to_chord * to_chord;
    if half_chord_squared < 0.0 {
        return None;
    }
    let half_chord = half_chord_squared.sqrt();

    let mid = center_a + to_chord * along;
    let across = normal.cross(&along);
    Some((mid + half_chord * across, mid - half_chord * across))
}

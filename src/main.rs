use anyhow::Result;
use nalgebra::{Translation3, UnitQuaternion, Vector3};
use rs_ur_kinematics::kinematic_traits::{Configuration, Kinematics, Pose};
use rs_ur_kinematics::kinematics_impl::URKinematics;
use rs_ur_kinematics::parameters::ur_kinematics::DhTable;
use rs_ur_kinematics::utils::{as_radians, dump_joints, dump_pose, dump_solutions};

/// Usage example.
fn main() -> Result<()> {
    let robot = URKinematics::new(DhTable::ur5());

    let joints = as_radians([20, -50, 70, 30, 60, -40]);
    println!("Initial joints:");
    dump_joints(&joints);

    let pose: Pose = robot.forward(&joints);
    println!("Tool pose:");
    dump_pose(&pose);

    println!("Joint solutions for every branch reaching this pose:");
    let solutions = robot.inverse_all(&pose);
    dump_solutions(&solutions);

    println!("The right handed, wrist down, elbow down branch alone:");
    match robot.inverse(&pose, Configuration::default()) {
        Ok(single) => dump_joints(&single),
        Err(error) => println!("Not reachable on this branch: {}", error),
    }

    // A target straight above the base sits inside the dead cylinder
    // around the base axis and cannot be reached at all.
    let overhead = Pose::from_parts(
        Translation3::new(0.0, 0.0, 0.6),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI),
    );
    match robot.inverse(&overhead, Configuration::default()) {
        Ok(_) => println!("Unexpectedly reachable"),
        Err(error) => println!("As expected: {}", error),
    }

    #[cfg(feature = "allow_filesystem")]
    {
        // The table serializes to the same YAML the file loader accepts.
        let yaml = robot.table().to_yaml();
        let restored = DhTable::from_yaml(&yaml)?;
        println!("Round tripped through YAML:\n{}", restored.to_yaml());
    }
    Ok(())
}

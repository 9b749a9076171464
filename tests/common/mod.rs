extern crate nalgebra as na;

use na::{Vector3,UnitQuaternion};
use std::fs;
use std::path::Path;

use trajectory_eval::Float;
use trajectory_eval::trajectory::PoseTrajectory;

/// Rising spiral, 10 Hz, never collinear
pub fn helix_trajectory(count: usize) -> PoseTrajectory {
    let timestamps = (0..count).map(|i| 100.0 + i as Float*0.1).collect::<Vec<Float>>();
    let positions = (0..count).map(|i| {
        let angle = 0.3*i as Float;
        Vector3::<Float>::new(2.0*angle.cos(), 2.0*angle.sin(), 0.05*i as Float)
    }).collect::<Vec<Vector3<Float>>>();
    let orientations = (0..count).map(|i| {
        UnitQuaternion::<Float>::from_euler_angles(0.01*i as Float, -0.02*i as Float, 0.3*i as Float)
    }).collect::<Vec<UnitQuaternion<Float>>>();

    PoseTrajectory::new(timestamps, positions, orientations).unwrap()
}

/// Ground truth CSV: nanosecond timestamps and a flattened [R|t]
pub fn write_ground_truth(path: &Path, trajectory: &PoseTrajectory) {
    let mut contents = String::new();
    for ((ts, t), q) in trajectory.timestamps().iter().zip(trajectory.positions().iter()).zip(trajectory.orientations().iter()) {
        let r = q.to_rotation_matrix();
        let m = r.matrix();
        let ts_ns = (ts*1e9).round() as i64;
        contents.push_str(&format!("{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            ts_ns,
            m[(0,0)], m[(0,1)], m[(0,2)], t[0],
            m[(1,0)], m[(1,1)], m[(1,2)], t[1],
            m[(2,0)], m[(2,1)], m[(2,2)], t[2]));
    }
    fs::write(path, contents).unwrap();
}

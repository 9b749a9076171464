extern crate nalgebra as na;

mod common;

use approx::assert_relative_eq;
use na::{Vector3,UnitQuaternion,Matrix3};
use std::fs;

use trajectory_eval::Float;
use trajectory_eval::io::{LoadError,loading_parameters::LoadingParameters,pose_matrix_loader,tum_loader};
use trajectory_eval::numerics::pose;

#[test]
fn test_ground_truth_row_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global_pose.csv");
    fs::write(&path, "1403636579763555584,1,0,0,4.5,0,1,0,-2.25,0,0,1,0.75\n").unwrap();

    let trajectory = pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()).unwrap();

    assert_eq!(trajectory.len(), 1);
    assert_relative_eq!(trajectory.timestamps()[0], 1403636579763555584.0*1e-9, epsilon = 1e-6);
    assert_eq!(trajectory.positions()[0], Vector3::<Float>::new(4.5,-2.25,0.75));
    assert_relative_eq!(pose::rotation_angle(&UnitQuaternion::identity(), &trajectory.orientations()[0]), 0.0, epsilon = 1e-12);
}

#[test]
fn test_ground_truth_rotation_round_trip() {
    let rotation = UnitQuaternion::<Float>::from_euler_angles(0.4, -1.1, 2.7);
    let m = rotation.to_rotation_matrix().into_inner();
    let row = format!("2000000000,{},{},{},1,{},{},{},2,{},{},{},3",
        m[(0,0)], m[(0,1)], m[(0,2)],
        m[(1,0)], m[(1,1)], m[(1,2)],
        m[(2,0)], m[(2,1)], m[(2,2)]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    fs::write(&path, row).unwrap();

    let trajectory = pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()).unwrap();
    let recovered: Matrix3<Float> = trajectory.orientations()[0].to_rotation_matrix().into_inner();

    assert_relative_eq!(trajectory.timestamps()[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(recovered, m, epsilon = 1e-9);
    assert_eq!(trajectory.positions()[0], Vector3::<Float>::new(1.0,2.0,3.0));
}

#[test]
fn test_ground_truth_slightly_non_orthogonal_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    fs::write(&path, "0,1.001,0.0005,0,0,-0.0005,0.999,0,0,0,0,1.0002,0\n").unwrap();

    let trajectory = pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()).unwrap();

    assert_relative_eq!(trajectory.orientations()[0].norm(), 1.0, epsilon = 1e-12);
    assert!(pose::rotation_angle(&UnitQuaternion::identity(), &trajectory.orientations()[0]) < 1e-3);
}

#[test]
fn test_ground_truth_helix_file() {
    let reference = common::helix_trajectory(30);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    common::write_ground_truth(&path, &reference);

    let loaded = pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()).unwrap();

    assert_eq!(loaded.len(), reference.len());
    for i in 0..loaded.len() {
        assert_relative_eq!(loaded.timestamps()[i], reference.timestamps()[i], epsilon = 1e-6);
        assert_relative_eq!(loaded.positions()[i], reference.positions()[i], epsilon = 1e-12);
        assert!(pose::rotation_angle(&loaded.orientations()[i], &reference.orientations()[i]) < 1e-9);
    }
}

#[test]
fn test_ground_truth_wrong_column_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    fs::write(&path, "0,1,0,0,0,0,1,0,0,0,0,1,0\n1,1,0,0,0,0,1,0,0,0,0,1\n").unwrap();

    match pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()) {
        Err(LoadError::ColumnCount { line, expected, found }) => {
            assert_eq!(line, 2);
            assert_eq!(expected, 13);
            assert_eq!(found, 12);
        },
        other => panic!("expected column count error, got {:?}", other)
    }
}

#[test]
fn test_ground_truth_non_numeric_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    fs::write(&path, "0,1,0,0,0,0,1,0,abc,0,0,1,0\n").unwrap();

    match pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()) {
        Err(LoadError::Parse { line, column, value, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(column, 8);
            assert_eq!(value, "abc");
        },
        other => panic!("expected parse error, got {:?}", other)
    }
}

#[test]
fn test_non_finite_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let gt_path = dir.path().join("gt.csv");
    fs::write(&gt_path, "0,1,0,0,1,0,1,0,2,0,0,1,3\n1,nan,0,0,1,0,1,0,2,0,0,1,3\n").unwrap();

    match pose_matrix_loader::load(&gt_path, &LoadingParameters::nanoseconds()) {
        Err(LoadError::NonFinite { line, column, value }) => {
            assert_eq!(line, 2);
            assert_eq!(column, 1);
            assert_eq!(value, "nan");
        },
        other => panic!("expected non-finite error, got {:?}", other)
    }

    let est_path = dir.path().join("est.txt");
    fs::write(&est_path, "0.0 1.0 inf 3.0 0 0 0 1\n").unwrap();
    assert!(matches!(tum_loader::load(&est_path, &LoadingParameters::seconds()), Err(LoadError::NonFinite { line: 1, column: 2, .. })));
}

#[test]
fn test_ground_truth_singular_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gt.csv");
    fs::write(&path, "0,0,0,0,1,0,0,0,2,0,0,0,3\n").unwrap();

    assert!(matches!(pose_matrix_loader::load(&path, &LoadingParameters::nanoseconds()), Err(LoadError::InvalidPose { line: 1, .. })));
}

#[test]
fn test_estimate_row_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traj_lidar.txt");
    let half_sqrt = (0.5 as Float).sqrt();
    fs::write(&path, format!("# timestamp x y z qx qy qz qw\n\n  1.5\t1.0 2.0   3.0 0 0 {} {}\n", half_sqrt, half_sqrt)).unwrap();

    let trajectory = tum_loader::load(&path, &LoadingParameters::seconds()).unwrap();

    assert_eq!(trajectory.len(), 1);
    assert_eq!(trajectory.timestamps()[0], 1.5);
    assert_eq!(trajectory.positions()[0], Vector3::<Float>::new(1.0,2.0,3.0));
    let q = trajectory.orientations()[0];
    assert_relative_eq!(q.i, 0.0);
    assert_relative_eq!(q.j, 0.0);
    assert_relative_eq!(q.k, half_sqrt, epsilon = 1e-12);
    assert_relative_eq!(q.w, half_sqrt, epsilon = 1e-12);
}

#[test]
fn test_estimate_zero_quaternion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("est.txt");
    fs::write(&path, "0 1 2 3 0 0 0 1\n1 1 2 3 0 0 0 0\n").unwrap();

    assert!(matches!(tum_loader::load(&path, &LoadingParameters::seconds()), Err(LoadError::InvalidPose { line: 2, .. })));
}

#[test]
fn test_estimate_wrong_column_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("est.txt");
    fs::write(&path, "0 1 2 3 0 0 0 1 7\n").unwrap();

    assert!(matches!(tum_loader::load(&path, &LoadingParameters::seconds()), Err(LoadError::ColumnCount { line: 1, expected: 8, found: 9 })));
}

#[test]
fn test_empty_and_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "# only a header\n\n").unwrap();

    assert!(matches!(tum_loader::load(&path, &LoadingParameters::seconds()), Err(LoadError::Empty { .. })));
    assert!(matches!(tum_loader::load(&dir.path().join("missing.txt"), &LoadingParameters::seconds()), Err(LoadError::Io { .. })));
}

#[test]
fn test_write_estimate_is_loadable() {
    let trajectory = common::helix_trajectory(12);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("aligned.txt");

    tum_loader::write(&path, &trajectory).unwrap();
    let loaded = tum_loader::load(&path, &LoadingParameters::seconds()).unwrap();

    assert_eq!(loaded.len(), trajectory.len());
    assert_relative_eq!(loaded.positions()[7], trajectory.positions()[7], epsilon = 1e-12);
    assert!(pose::rotation_angle(&loaded.orientations()[7], &trajectory.orientations()[7]) < 1e-9);
}

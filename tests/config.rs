use std::fs;
use std::path::{Path,PathBuf};

use trajectory_eval::config::{ConfigError,EvalConfig,load_config};
use trajectory_eval::evaluation::ape_parameters::PoseRelation;
use trajectory_eval::visualize::PlotMode;

#[test]
fn test_minimal_config_uses_defaults() {
    let yaml = "reference_path: /data/DCC01/global_pose.csv\nestimate_path: /tmp/dump/traj_lidar.txt\n";
    let config = EvalConfig::from_yaml_str(yaml, Path::new("inline.yaml")).unwrap();

    assert_eq!(config.reference_path, PathBuf::from("/data/DCC01/global_pose.csv"));
    assert_eq!(config.estimate_path, PathBuf::from("/tmp/dump/traj_lidar.txt"));
    assert!(!config.correct_scale);
    assert!(config.align);
    assert_eq!(config.max_time_difference, 0.1);
    assert_eq!(config.reference_timestamp_scale, 1e-9);
    assert_eq!(config.estimate_timestamp_scale, 1.0);
    assert_eq!(config.pose_relation, PoseRelation::TranslationPart);
    assert_eq!(config.plot_mode, PlotMode::Xy);

    let parameters = config.ape_parameters();
    assert_eq!(parameters.max_time_difference, 0.1);
    assert!(!parameters.correct_scale);
}

#[test]
fn test_full_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eval.yaml");
    fs::write(&path, "\
reference_path: gt.csv
estimate_path: est.txt
correct_scale: true
max_time_difference: 0.02
time_offset: -0.5
pose_relation: rotation_angle_deg
estimate_timestamp_scale: 0.001
plot_mode: xz
output_folder: results
estimate_name: mono
").unwrap();

    let config = load_config(&path).unwrap();

    assert!(config.correct_scale);
    assert_eq!(config.max_time_difference, 0.02);
    assert_eq!(config.time_offset, -0.5);
    assert_eq!(config.pose_relation, PoseRelation::RotationAngleDeg);
    assert_eq!(config.estimate_loading_parameters().timestamp_scale, 0.001);
    assert_eq!(config.plot_mode, PlotMode::Xz);
    assert_eq!(config.output_folder, PathBuf::from("results"));
    assert_eq!(config.ape_parameters().estimate_name, "mono");
}

#[test]
fn test_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(load_config(&dir.path().join("missing.yaml")), Err(ConfigError::Io { .. })));

    let path = dir.path().join("broken.yaml");
    fs::write(&path, "pose_relation: sideways\n").unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Yaml { .. })));
}

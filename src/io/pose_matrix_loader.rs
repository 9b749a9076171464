extern crate nalgebra as na;

use na::{Vector3,UnitQuaternion,Matrix3x4};
use std::path::Path;
use crate::Float;
use crate::io::{LoadError,Record,load_records,is_non_decreasing,loading_parameters::LoadingParameters};
use crate::numerics::pose;
use crate::trajectory::PoseTrajectory;

/// timestamp followed by a row-major 3x4 [R|t] matrix
pub const COLUMNS: usize = 13;

fn split_csv(line: &str) -> Vec<&str> {
    line.split(',').collect::<Vec<&str>>()
}

/**
 * Loads a headerless CSV file with rows [timestamp, r11, r12, r13, tx, r21, r22, r23, ty, r31, r32, r33, tz]
 */
pub fn load(file_path: &Path, parameters: &LoadingParameters) -> Result<PoseTrajectory, LoadError> {
    let records = load_records(file_path, COLUMNS, split_csv)?;
    let mut timestamps = Vec::<Float>::with_capacity(records.len());
    let mut positions = Vec::<Vector3<Float>>::with_capacity(records.len());
    let mut orientations = Vec::<UnitQuaternion<Float>>::with_capacity(records.len());

    for record in records.iter() {
        let (ts, t, quat) = parse_record(record, parameters)?;
        timestamps.push(ts);
        positions.push(t);
        orientations.push(quat);
    }

    if !is_non_decreasing(&timestamps) {
        log::warn!("{}: timestamps are not sorted", file_path.display());
    }
    log::debug!("loaded {} poses from {}", timestamps.len(), file_path.display());

    Ok(PoseTrajectory::new(timestamps, positions, orientations)?)
}

pub fn parse_record(record: &Record, parameters: &LoadingParameters) -> Result<(Float,Vector3<Float>,UnitQuaternion<Float>), LoadError> {
    let values = &record.values;
    let matrix = Matrix3x4::<Float>::from_row_slice(&values[1..COLUMNS]);
    let iso = pose::from_pose_matrix(&matrix).ok_or_else(|| LoadError::InvalidPose {
        line: record.line,
        reason: String::from("rotation block is singular")
    })?;

    Ok((values[0]*parameters.timestamp_scale, Vector3::<Float>::new(values[4],values[8],values[12]), iso.rotation))
}

extern crate nalgebra as na;

use na::{Vector3,Quaternion,UnitQuaternion};
use std::path::Path;
use std::io::Write;
use crate::Float;
use crate::io::{LoadError,WriteError,Record,load_records,create_writer,is_non_decreasing,loading_parameters::LoadingParameters};
use crate::trajectory::PoseTrajectory;

/// timestamp x y z qx qy qz qw
pub const COLUMNS: usize = 8;

const MIN_QUATERNION_NORM: Float = 1e-9;

fn split_whitespace(line: &str) -> Vec<&str> {
    line.split_whitespace().collect::<Vec<&str>>()
}

/**
 * Loads a headerless whitespace separated file with rows [timestamp, x, y, z, qx, qy, qz, qw]
 */
pub fn load(file_path: &Path, parameters: &LoadingParameters) -> Result<PoseTrajectory, LoadError> {
    let records = load_records(file_path, COLUMNS, split_whitespace)?;
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
    let quat = Quaternion::<Float>::new(values[7],values[4],values[5],values[6]);
    if quat.norm() < MIN_QUATERNION_NORM {
        return Err(LoadError::InvalidPose { line: record.line, reason: String::from("quaternion has zero norm") });
    }

    Ok((values[0]*parameters.timestamp_scale, Vector3::<Float>::new(values[1],values[2],values[3]), UnitQuaternion::from_quaternion(quat)))
}

/**
 * Writes `trajectory` as [timestamp, x, y, z, qx, qy, qz, qw] rows, timestamps in seconds
 */
pub fn write(file_path: &Path, trajectory: &PoseTrajectory) -> Result<(), WriteError> {
    let mut writer = create_writer(file_path)?;
    let map_err = |source| WriteError::Io { path: file_path.to_path_buf(), source };

    for ((ts, t), q) in trajectory.timestamps().iter().zip(trajectory.positions().iter()).zip(trajectory.orientations().iter()) {
        writeln!(writer, "{:.9} {} {} {} {} {} {} {}", ts, t[0], t[1], t[2], q.i, q.j, q.k, q.w).map_err(map_err)?;
    }
    writer.flush().map_err(map_err)?;
    log::info!("wrote {} poses to {}", trajectory.len(), file_path.display());
    Ok(())
}

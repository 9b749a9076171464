use crate::{float,Float};
use crate::trajectory::PoseTrajectory;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("found no matching timestamps between reference ({reference} poses) and estimate ({estimate} poses) with max. time diff {max_diff} s and time offset {offset} s")]
    NoMatches { reference: usize, estimate: usize, max_diff: Float, offset: Float }
}

/**
 * Index of the timestamp in `list` closest to `ts`. The first index wins on ties.
 * Returns the index and the absolute difference.
 */
pub fn closest_ts_index(ts: Float, list: &[Float]) -> Option<(usize,Float)> {
    let mut min_delta = float::MAX;
    let mut min_idx = None;

    for (idx, target_ts) in list.iter().enumerate() {
        let delta = (ts-target_ts).abs();
        if delta < min_delta {
            min_delta = delta;
            min_idx = Some(idx);
        }
    }

    min_idx.map(|idx| (idx,min_delta))
}

/**
 * For each reference timestamp finds the nearest estimate timestamp (shifted by `offset`).
 * Pairs further apart than `max_diff` are dropped.
 */
pub fn matching_time_indices(reference_timestamps: &[Float], estimate_timestamps: &[Float], max_diff: Float, offset: Float) -> (Vec<usize>,Vec<usize>) {
    let shifted = estimate_timestamps.iter().map(|ts| ts + offset).collect::<Vec<Float>>();
    let mut reference_indices = Vec::<usize>::with_capacity(reference_timestamps.len());
    let mut estimate_indices = Vec::<usize>::with_capacity(reference_timestamps.len());

    for (ref_idx, &ts) in reference_timestamps.iter().enumerate() {
        match closest_ts_index(ts, &shifted) {
            Some((est_idx, delta)) if delta <= max_diff => {
                reference_indices.push(ref_idx);
                estimate_indices.push(est_idx);
            },
            _ => ()
        }
    }

    (reference_indices,estimate_indices)
}

/**
 * Reduces both trajectories to the associated pairs. The returned trajectories have equal length
 * and index i of both refers to the same instant.
 */
pub fn associate(reference: &PoseTrajectory, estimate: &PoseTrajectory, max_diff: Float, offset: Float) -> Result<(PoseTrajectory,PoseTrajectory), SyncError> {
    let (reference_indices, estimate_indices) = matching_time_indices(reference.timestamps(), estimate.timestamps(), max_diff, offset);

    if reference_indices.is_empty() {
        return Err(SyncError::NoMatches { reference: reference.len(), estimate: estimate.len(), max_diff, offset });
    }

    log::info!("associated {} of {} reference poses (max. time diff {} s)", reference_indices.len(), reference.len(), max_diff);

    Ok((reference.reduce_to_indices(&reference_indices), estimate.reduce_to_indices(&estimate_indices)))
}

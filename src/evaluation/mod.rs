extern crate nalgebra as na;

use std::fmt;
use na::Similarity3;
use serde::Serialize;

use crate::Float;
use crate::config::EvalConfig;
use crate::io::{LoadError,pose_matrix_loader,tum_loader};
use crate::numerics::{pose,statistics::Statistics,umeyama::AlignmentError};
use crate::trajectory::{PoseTrajectory,identity_transform,sync::{self,SyncError}};

pub mod ape_parameters;

use ape_parameters::{ApeParameters,PoseRelation};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("could not load reference trajectory")]
    Reference(#[source] LoadError),

    #[error("could not load estimate trajectory")]
    Estimate(#[source] LoadError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    #[error("no pose pairs to compute statistics from")]
    NoErrors
}

/**
 * Absolute pose error of an estimate against a reference.
 * `reference` and `aligned_estimate` are the associated trajectories the errors were computed on.
 */
#[derive(Debug,Clone)]
pub struct ApeResult {
    pub title: String,
    pub estimate_name: String,
    pub pose_relation: PoseRelation,
    pub statistics: Statistics,
    pub errors: Vec<Float>,
    /// Seconds since the first associated pose
    pub timestamps: Vec<Float>,
    pub alignment: Similarity3<Float>,
    pub reference: PoseTrajectory,
    pub aligned_estimate: PoseTrajectory
}

#[derive(Debug,Clone,Serialize)]
pub struct ApeSummary {
    pub title: String,
    pub estimate_name: String,
    pub pose_relation: PoseRelation,
    pub matched_poses: usize,
    pub statistics: Statistics,
    pub alignment_scale: Float,
    /// w, x, y, z
    pub alignment_rotation: [Float; 4],
    pub alignment_translation: [Float; 3],
    pub reference_path_length: Float,
    pub duration: Float
}

impl ApeResult {
    pub fn summary(&self) -> ApeSummary {
        let rotation = self.alignment.isometry.rotation;
        let translation = self.alignment.isometry.translation.vector;
        ApeSummary {
            title: self.title.clone(),
            estimate_name: self.estimate_name.clone(),
            pose_relation: self.pose_relation,
            matched_poses: self.errors.len(),
            statistics: self.statistics,
            alignment_scale: self.alignment.scaling(),
            alignment_rotation: [rotation.w, rotation.i, rotation.j, rotation.k],
            alignment_translation: [translation[0], translation[1], translation[2]],
            reference_path_length: self.reference.path_length(),
            duration: self.reference.duration()
        }
    }
}

impl fmt::Display for ApeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)
    }
}

pub fn pose_errors(reference: &PoseTrajectory, estimate: &PoseTrajectory, pose_relation: PoseRelation) -> Vec<Float> {
    match pose_relation {
        PoseRelation::TranslationPart => reference.positions().iter().zip(estimate.positions().iter())
            .map(|(r,e)| (r-e).norm()).collect::<Vec<Float>>(),
        PoseRelation::RotationAngleRad => reference.orientations().iter().zip(estimate.orientations().iter())
            .map(|(r,e)| pose::rotation_angle(r, e)).collect::<Vec<Float>>(),
        PoseRelation::RotationAngleDeg => reference.orientations().iter().zip(estimate.orientations().iter())
            .map(|(r,e)| pose::rotation_angle(r, e).to_degrees()).collect::<Vec<Float>>(),
        PoseRelation::FullTransformation => reference.poses().iter().zip(estimate.poses().iter())
            .map(|(r,e)| pose::deviation_from_identity(&pose::relative_pose(r, e))).collect::<Vec<Float>>()
    }
}

/**
 * Associates, aligns and scores `estimate` against `reference`.
 * The alignment is computed once and the aligned trajectory is kept in the result.
 */
pub fn ape(reference: &PoseTrajectory, estimate: &PoseTrajectory, parameters: &ApeParameters) -> Result<ApeResult, EvalError> {
    let (reference_synced, mut estimate_synced) = sync::associate(reference, estimate, parameters.max_time_difference, parameters.time_offset)?;

    let alignment = match parameters.align {
        true => estimate_synced.align(&reference_synced, parameters.correct_scale)?,
        false => identity_transform()
    };

    let errors = pose_errors(&reference_synced, &estimate_synced, parameters.pose_relation);
    let statistics = Statistics::from_errors(&errors).ok_or(EvalError::NoErrors)?;
    let start = reference_synced.timestamps().first().cloned().unwrap_or(0.0);
    let timestamps = reference_synced.timestamps().iter().map(|ts| ts - start).collect::<Vec<Float>>();

    let title = format!("APE w.r.t. {} ({})\n({})", parameters.pose_relation, parameters.pose_relation.unit(), parameters.alignment_description());
    log::info!("{}: rmse {} over {} poses", parameters, statistics.rmse, errors.len());

    Ok(ApeResult {
        title,
        estimate_name: parameters.estimate_name.clone(),
        pose_relation: parameters.pose_relation,
        statistics,
        errors,
        timestamps,
        alignment,
        reference: reference_synced,
        aligned_estimate: estimate_synced
    })
}

/**
 * Loads both trajectories named in `config` and evaluates them.
 */
pub fn evaluate(config: &EvalConfig) -> Result<ApeResult, EvalError> {
    let reference = pose_matrix_loader::load(&config.reference_path, &config.reference_loading_parameters()).map_err(EvalError::Reference)?;
    let estimate = tum_loader::load(&config.estimate_path, &config.estimate_loading_parameters()).map_err(EvalError::Estimate)?;
    ape(&reference, &estimate, &config.ape_parameters())
}

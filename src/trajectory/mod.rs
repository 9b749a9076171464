extern crate nalgebra as na;

use na::{Vector3,UnitQuaternion,Isometry3,Similarity3,Translation3};
use crate::Float;
use crate::numerics::{pose,umeyama::{self,AlignmentError}};

pub mod sync;

#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    #[error("trajectory arrays differ in length: {timestamps} timestamps, {positions} positions, {orientations} orientations")]
    LengthMismatch { timestamps: usize, positions: usize, orientations: usize }
}

/**
 * Timestamped poses stored as parallel arrays. Timestamps are in seconds.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct PoseTrajectory {
    timestamps: Vec<Float>,
    positions: Vec<Vector3<Float>>,
    orientations: Vec<UnitQuaternion<Float>>
}

impl PoseTrajectory {
    pub fn new(timestamps: Vec<Float>, positions: Vec<Vector3<Float>>, orientations: Vec<UnitQuaternion<Float>>) -> Result<PoseTrajectory, TrajectoryError> {
        if timestamps.len() != positions.len() || positions.len() != orientations.len() {
            return Err(TrajectoryError::LengthMismatch {
                timestamps: timestamps.len(),
                positions: positions.len(),
                orientations: orientations.len()
            });
        }

        Ok(PoseTrajectory { timestamps, positions, orientations })
    }

    pub fn timestamps(&self) -> &[Float] {
        &self.timestamps
    }

    pub fn positions(&self) -> &[Vector3<Float>] {
        &self.positions
    }

    pub fn orientations(&self) -> &[UnitQuaternion<Float>] {
        &self.orientations
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn poses(&self) -> Vec<Isometry3<Float>> {
        self.positions.iter().zip(self.orientations.iter()).map(|(t,q)| pose::from_parts(t, q)).collect::<Vec<Isometry3<Float>>>()
    }

    pub fn duration(&self) -> Float {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0
        }
    }

    pub fn path_length(&self) -> Float {
        self.positions.windows(2).fold(0.0, |acc, w| acc + (w[1] - w[0]).norm())
    }

    /**
     * Keeps the poses at `indices`, in that order. Indices may repeat.
     */
    pub fn reduce_to_indices(&self, indices: &[usize]) -> PoseTrajectory {
        PoseTrajectory {
            timestamps: indices.iter().map(|&i| self.timestamps[i]).collect::<Vec<Float>>(),
            positions: indices.iter().map(|&i| self.positions[i]).collect::<Vec<Vector3<Float>>>(),
            orientations: indices.iter().map(|&i| self.orientations[i]).collect::<Vec<UnitQuaternion<Float>>>()
        }
    }

    /**
     * p' = s*R*p + t, q' = R*q
     */
    pub fn transform(&mut self, transform: &Similarity3<Float>) {
        let scale = transform.scaling();
        let rotation = transform.isometry.rotation;
        let translation = transform.isometry.translation.vector;

        for position in self.positions.iter_mut() {
            *position = scale*(rotation*(*position)) + translation;
        }

        for orientation in self.orientations.iter_mut() {
            *orientation = rotation*(*orientation);
        }
    }

    pub fn transformed(&self, transform: &Similarity3<Float>) -> PoseTrajectory {
        let mut copy = self.clone();
        copy.transform(transform);
        copy
    }

    /**
     * Aligns this trajectory onto `reference` in place and returns the applied transform.
     * Both trajectories have to be associated already, i.e. index i refers to the same instant.
     */
    pub fn align(&mut self, reference: &PoseTrajectory, correct_scale: bool) -> Result<Similarity3<Float>, AlignmentError> {
        let transform = umeyama::umeyama(&self.positions, &reference.positions, correct_scale)?;
        self.transform(&transform);
        Ok(transform)
    }
}

pub fn identity_transform() -> Similarity3<Float> {
    Similarity3::<Float>::from_parts(Translation3::identity(), UnitQuaternion::identity(), 1.0)
}

extern crate nalgebra as na;

use na::{Vector3,Matrix3,Similarity3,Translation3,UnitQuaternion,Rotation3};
use crate::{float,Float};
use crate::numerics::smallest_value_index;

pub const MIN_ALIGNMENT_POSES: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("source and target have different lengths: {source_len} vs {target_len}")]
    MismatchedInputLengths { source_len: usize, target_len: usize },

    #[error("alignment needs at least {required} poses, got {found}")]
    NotEnoughPoses { required: usize, found: usize },

    #[error("degenerate covariance rank {rank}, Umeyama alignment is not possible")]
    Degenerate { rank: usize },

    #[error("SVD of the cross covariance failed")]
    Svd
}

/**
 * Least-squares similarity (s,R,t) with target ≈ s*R*source + t.
 * Umeyama, "Least-squares estimation of transformation parameters between two point patterns", PAMI 1991.
 * With `with_scale == false` the scale is fixed to 1.
 */
pub fn umeyama(source: &[Vector3<Float>], target: &[Vector3<Float>], with_scale: bool) -> Result<Similarity3<Float>, AlignmentError> {
    if source.len() != target.len() {
        return Err(AlignmentError::MismatchedInputLengths { source_len: source.len(), target_len: target.len() });
    }
    if source.len() < MIN_ALIGNMENT_POSES {
        return Err(AlignmentError::NotEnoughPoses { required: MIN_ALIGNMENT_POSES, found: source.len() });
    }

    let n = source.len() as Float;
    let mean_source = source.iter().fold(Vector3::<Float>::zeros(), |acc, p| acc + p)/n;
    let mean_target = target.iter().fold(Vector3::<Float>::zeros(), |acc, p| acc + p)/n;

    let sigma_source = source.iter().fold(0.0, |acc, p| acc + (p - mean_source).norm_squared())/n;
    let covariance = source.iter().zip(target.iter()).fold(Matrix3::<Float>::zeros(), |acc, (s, t)| {
        acc + (t - mean_target)*(s - mean_source).transpose()
    })/n;

    let svd = covariance.svd(true,true);
    let u = svd.u.ok_or(AlignmentError::Svd)?;
    let v_t = svd.v_t.ok_or(AlignmentError::Svd)?;
    let singular_values = svd.singular_values;

    let tolerance = singular_values.max()*3.0*float::EPSILON;
    let rank = singular_values.iter().filter(|&&d| d > tolerance).count();
    if rank < 2 {
        return Err(AlignmentError::Degenerate { rank });
    }

    let mut s = Vector3::<Float>::new(1.0,1.0,1.0);
    if u.determinant()*v_t.determinant() < 0.0 {
        s[smallest_value_index(singular_values.as_slice())] = -1.0;
    }

    let rotation = u*Matrix3::from_diagonal(&s)*v_t;
    let scale = match with_scale {
        true => singular_values.dot(&s)/sigma_source,
        false => 1.0
    };
    let translation = mean_target - scale*(rotation*mean_source);

    let quat = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation));
    log::debug!("umeyama: rotation {:?}, translation {:?}, scale {}", quat.euler_angles(), translation.as_slice(), scale);

    Ok(Similarity3::<Float>::from_parts(Translation3::from(translation), quat, scale))
}

extern crate nalgebra as na;

use na::{Vector3,Matrix3,Matrix3x4,Matrix4,UnitQuaternion,Isometry3,Translation3,Rotation3};
use crate::Float;
use crate::numerics::smallest_value_index;

/// Rotation blocks with a smaller determinant are rejected as degenerate
pub const MIN_ROTATION_DETERMINANT: Float = 1e-6;

pub fn from_parts(t: &Vector3<Float>, quat: &UnitQuaternion<Float>) -> Isometry3<Float> {
    Isometry3::<Float>::from_parts(Translation3::from(*t), *quat)
}

/**
 * Pose from a row-major 3x4 [R|t] matrix. The rotation block is projected onto SO(3) first.
 */
pub fn from_pose_matrix(mat: &Matrix3x4<Float>) -> Option<Isometry3<Float>> {
    let t = Vector3::<Float>::new(mat[(0,3)],mat[(1,3)],mat[(2,3)]);
    let rot = mat.fixed_view::<3,3>(0,0).into_owned();
    quaternion_from_rotation_matrix(&rot).map(|quat| from_parts(&t, &quat))
}

pub fn quaternion_from_rotation_matrix(rotation: &Matrix3<Float>) -> Option<UnitQuaternion<Float>> {
    if rotation.determinant().abs() < MIN_ROTATION_DETERMINANT {
        return None;
    }
    let corrected = optimal_correction_of_rotation(rotation)?;
    Some(UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(corrected)))
}

/**
 * Closest rotation in the Frobenius sense - Kanatani, 3D Rotations p.35
 */
pub fn optimal_correction_of_rotation(rotation: &Matrix3<Float>) -> Option<Matrix3<Float>> {
    let svd = rotation.svd(true,true);
    let u = svd.u?;
    let v_t = svd.v_t?;
    let mut diag = Vector3::<Float>::new(1.0,1.0,1.0);
    diag[smallest_value_index(svd.singular_values.as_slice())] = (u*v_t).determinant();
    Some(u*Matrix3::from_diagonal(&diag)*v_t)
}

/**
 * Transform taking a to b, expressed in the frame of a
 */
pub fn relative_pose(a: &Isometry3<Float>, b: &Isometry3<Float>) -> Isometry3<Float> {
    a.inverse()*b
}

/**
 * Angle of the rotation taking a to b, in [0, pi]. atan2 keeps precision near identity where acos(w) does not.
 */
pub fn rotation_angle(a: &UnitQuaternion<Float>, b: &UnitQuaternion<Float>) -> Float {
    let delta = a.inverse()*b;
    2.0*delta.imag().norm().atan2(delta.scalar().abs())
}

/**
 * Frobenius norm of the deviation of a relative pose from identity
 */
pub fn deviation_from_identity(pose: &Isometry3<Float>) -> Float {
    (pose.to_homogeneous() - Matrix4::<Float>::identity()).norm()
}

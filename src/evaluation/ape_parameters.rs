use std::fmt;
use serde::{Serialize,Deserialize};
use crate::{Float,MAX_TIME_DIFFERENCE};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseRelation {
    TranslationPart,
    RotationAngleDeg,
    RotationAngleRad,
    FullTransformation
}

impl PoseRelation {
    pub fn unit(&self) -> &'static str {
        match self {
            PoseRelation::TranslationPart => "m",
            PoseRelation::RotationAngleDeg => "deg",
            PoseRelation::RotationAngleRad => "rad",
            PoseRelation::FullTransformation => "unit-less"
        }
    }
}

impl Default for PoseRelation {
    fn default() -> Self {
        PoseRelation::TranslationPart
    }
}

impl fmt::Display for PoseRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PoseRelation::TranslationPart => "translation part",
            PoseRelation::RotationAngleDeg => "rotation angle in degrees",
            PoseRelation::RotationAngleRad => "rotation angle in radians",
            PoseRelation::FullTransformation => "full transformation"
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug,Clone)]
pub struct ApeParameters {
    pub pose_relation: PoseRelation,
    pub align: bool,
    pub correct_scale: bool,
    pub max_time_difference: Float,
    /// Added to every estimate timestamp before association
    pub time_offset: Float,
    pub estimate_name: String
}

impl Default for ApeParameters {
    fn default() -> Self {
        ApeParameters {
            pose_relation: PoseRelation::TranslationPart,
            align: true,
            correct_scale: false,
            max_time_difference: MAX_TIME_DIFFERENCE,
            time_offset: 0.0,
            estimate_name: String::from("estimated_traj")
        }
    }
}

impl ApeParameters {
    pub fn alignment_description(&self) -> &'static str {
        match (self.align, self.correct_scale) {
            (true, true) => "with Sim(3) Umeyama alignment",
            (true, false) => "with SE(3) Umeyama alignment",
            (false, _) => "not aligned"
        }
    }
}

impl fmt::Display for ApeParameters {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut display = String::from(format!("ape_{:?}_max_diff_{:+e}",self.pose_relation,self.max_time_difference));
        match self.align {
            true => {
                display.push_str("_aligned");
                if self.correct_scale {
                    display.push_str("_scaled");
                }
            },
            false => ()
        }
        if self.time_offset != 0.0 {
            display.push_str(format!("_offset_{:+e}",self.time_offset).as_str());
        }
        write!(f, "{}", display)
    }

}

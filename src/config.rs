use std::path::{Path,PathBuf};
use std::fs;
use serde::{Serialize,Deserialize};

use crate::{Float,MAX_TIME_DIFFERENCE};
use crate::evaluation::ape_parameters::{ApeParameters,PoseRelation};
use crate::io::loading_parameters::LoadingParameters;
use crate::visualize::PlotMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("could not parse config {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error
    }
}

/**
 * Everything one evaluation run needs. Only the two paths are mandatory in YAML.
 */
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub reference_path: PathBuf,
    pub estimate_path: PathBuf,
    pub correct_scale: bool,
    pub align: bool,
    pub max_time_difference: Float,
    pub time_offset: Float,
    pub pose_relation: PoseRelation,
    pub reference_timestamp_scale: Float,
    pub estimate_timestamp_scale: Float,
    pub plot_mode: PlotMode,
    pub output_folder: PathBuf,
    pub estimate_name: String
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            reference_path: PathBuf::new(),
            estimate_path: PathBuf::new(),
            correct_scale: false,
            align: true,
            max_time_difference: MAX_TIME_DIFFERENCE,
            time_offset: 0.0,
            pose_relation: PoseRelation::TranslationPart,
            reference_timestamp_scale: LoadingParameters::nanoseconds().timestamp_scale,
            estimate_timestamp_scale: LoadingParameters::seconds().timestamp_scale,
            plot_mode: PlotMode::Xy,
            output_folder: PathBuf::from("output"),
            estimate_name: String::from("estimated_traj")
        }
    }
}

impl EvalConfig {
    pub fn new(reference_path: &Path, estimate_path: &Path, correct_scale: bool) -> EvalConfig {
        EvalConfig {
            reference_path: reference_path.to_path_buf(),
            estimate_path: estimate_path.to_path_buf(),
            correct_scale,
            ..Default::default()
        }
    }

    pub fn from_yaml_str(contents: &str, path: &Path) -> Result<EvalConfig, ConfigError> {
        serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })
    }

    pub fn reference_loading_parameters(&self) -> LoadingParameters {
        LoadingParameters { timestamp_scale: self.reference_timestamp_scale }
    }

    pub fn estimate_loading_parameters(&self) -> LoadingParameters {
        LoadingParameters { timestamp_scale: self.estimate_timestamp_scale }
    }

    pub fn ape_parameters(&self) -> ApeParameters {
        ApeParameters {
            pose_relation: self.pose_relation,
            align: self.align,
            correct_scale: self.correct_scale,
            max_time_difference: self.max_time_difference,
            time_offset: self.time_offset,
            estimate_name: self.estimate_name.clone()
        }
    }
}

pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let config = EvalConfig::from_yaml_str(&contents, path)?;
    log::debug!("loaded config {}: {:?}", path.display(), config);
    Ok(config)
}

use std::path::{Path,PathBuf};
use std::fs::{self,File};
use std::io::{BufRead,BufReader,BufWriter,Write};
use std::num::ParseFloatError;
use serde::Serialize;

use crate::Float;
use crate::trajectory::TrajectoryError;

pub mod loading_parameters;
pub mod pose_matrix_loader;
pub mod tum_loader;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount { line: usize, expected: usize, found: usize },

    #[error("line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError
    },

    #[error("line {line}, column {column}: '{value}' is not a finite number")]
    NonFinite { line: usize, column: usize, value: String },

    #[error("line {line}: {reason}")]
    InvalidPose { line: usize, reason: String },

    #[error("{} contains no poses", path.display())]
    Empty { path: PathBuf },

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError)
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("could not write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("could not serialize {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error
    }
}

/// One parsed line of a numeric text file. `line` is 1-based.
#[derive(Debug,Clone)]
pub struct Record {
    pub line: usize,
    pub values: Vec<Float>
}

/// nan and inf parse as floats but are rejected
pub fn parse_to_float(string: &str, line: usize, column: usize) -> Result<Float, LoadError> {
    let value = string.trim().parse::<Float>().map_err(|source| LoadError::Parse {
        line,
        column,
        value: String::from(string.trim()),
        source
    })?;
    match value.is_finite() {
        true => Ok(value),
        false => Err(LoadError::NonFinite { line, column, value: String::from(string.trim()) })
    }
}

/**
 * Reads every non-empty, non-comment line of a headerless numeric file.
 * `split` breaks a line into fields, each row must have exactly `columns` fields.
 */
pub fn load_records<F>(file_path: &Path, columns: usize, split: F) -> Result<Vec<Record>, LoadError> where F: Fn(&str) -> Vec<&str> {
    let file = File::open(file_path).map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?;
    let reader = BufReader::new(file);
    let mut records = Vec::<Record>::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let contents = line.map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?;
        let trimmed = contents.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields = split(trimmed);
        if fields.len() != columns {
            return Err(LoadError::ColumnCount { line: line_number, expected: columns, found: fields.len() });
        }

        let values = fields.iter().enumerate()
            .map(|(column, field)| parse_to_float(field, line_number, column))
            .collect::<Result<Vec<Float>, LoadError>>()?;
        records.push(Record { line: line_number, values });
    }

    match records.is_empty() {
        true => Err(LoadError::Empty { path: file_path.to_path_buf() }),
        false => Ok(records)
    }
}

pub fn is_non_decreasing(timestamps: &[Float]) -> bool {
    timestamps.windows(2).all(|w| w[0] <= w[1])
}

pub fn create_writer(file_path: &Path) -> Result<BufWriter<File>, WriteError> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriteError::Io { path: parent.to_path_buf(), source })?;
        }
    }
    let file = File::create(file_path).map_err(|source| WriteError::Io { path: file_path.to_path_buf(), source })?;
    Ok(BufWriter::new(file))
}

pub fn write_yaml<T: Serialize>(value: &T, output_folder: &Path, file_name: &str) -> Result<PathBuf, WriteError> {
    let path = output_folder.join(file_name);
    let serialized = serde_yaml::to_string(value).map_err(|source| WriteError::Yaml { path: path.clone(), source })?;
    let mut writer = create_writer(&path)?;
    writer.write_all(serialized.as_bytes()).map_err(|source| WriteError::Io { path: path.clone(), source })?;
    writer.flush().map_err(|source| WriteError::Io { path: path.clone(), source })?;
    Ok(path)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use poly_regressor::RegressorConfig;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read calibration table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse calibration table {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Coefficient table produced by an offline regression, plus the raw input
/// bounds it was fitted over.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationTable {
    pub terms: Vec<f32>,
    pub min_input_value: i32,
    pub max_input_value: i32,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

fn default_quantity() -> String {
    String::from("Value")
}

impl CalibrationTable {
    // Water level sensor on a 12 bit ADC, output in centimeters
    pub fn water_level() -> Self {
        Self {
            terms: vec![1.0, 29.0, 20.0],
            min_input_value: 200,
            max_input_value: 3800,
            quantity: String::from("Height"),
            unit: String::from("cm"),
        }
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let json = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| TableError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn as_config(&self) -> RegressorConfig<'_> {
        RegressorConfig::new(&self.terms, self.min_input_value, self.max_input_value)
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::water_level()
    }
}

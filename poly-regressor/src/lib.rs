#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod regressor;

pub use config::RegressorConfig;
pub use error::RegressorError;
pub use regressor::PolynomialRegressor;

// Coefficient capacity used when a regressor doesn't specify one, enough for a degree 7 curve
pub const DEFAULT_MAX_TERMS: usize = 8;

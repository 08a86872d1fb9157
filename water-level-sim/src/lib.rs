pub mod simulation;
pub mod table;

pub use simulation::{AdcSimulator, Sample, Simulation};
pub use table::{CalibrationTable, TableError};

use poly_regressor::{PolynomialRegressor, RegressorError};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::CalibrationTable;

/// Stands in for an ADC, producing uniformly distributed raw readings in
/// `[min_input_value, max_input_value)`.
pub struct AdcSimulator {
    rng: StdRng,
    min_input_value: i32,
    max_input_value: i32,
}

impl AdcSimulator {
    pub fn new(min_input_value: i32, max_input_value: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            min_input_value,
            max_input_value,
        }
    }

    pub fn next_reading(&mut self) -> i32 {
        if self.max_input_value <= self.min_input_value {
            return self.min_input_value;
        }

        self.rng.gen_range(self.min_input_value..self.max_input_value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub raw: i32,
    pub value: f32,
}

pub struct Simulation {
    regressor: PolynomialRegressor,
    adc: AdcSimulator,
    quantity: String,
    unit: String,
}

impl Simulation {
    /// Configures a regressor from `table`. Nothing is sampled if the table is
    /// rejected.
    pub fn start(table: &CalibrationTable, seed: Option<u64>) -> Result<Self, RegressorError> {
        let mut regressor = PolynomialRegressor::new();
        regressor.configure(&table.as_config())?;

        Ok(Self {
            regressor,
            adc: AdcSimulator::new(table.min_input_value, table.max_input_value, seed),
            quantity: table.quantity.clone(),
            unit: table.unit.clone(),
        })
    }

    pub fn step(&mut self) -> Sample {
        let raw = self.adc.next_reading();

        Sample {
            raw,
            value: self.regressor.evaluate(raw),
        }
    }

    pub fn describe(&self, sample: &Sample) -> String {
        format!(
            "Simulated ADC: {:4} -> Calculated {}: {:5.2} {}",
            sample.raw, self.quantity, sample.value, self.unit
        )
        .trim_end()
        .to_string()
    }

    pub fn regressor(&self) -> &PolynomialRegressor {
        &self.regressor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_stays_in_range() {
        let mut adc = AdcSimulator::new(200, 3800, Some(7));

        for _ in 0..10_000 {
            let reading = adc.next_reading();
            assert!((200..3800).contains(&reading));
        }
    }

    #[test]
    fn test_adc_seed_is_reproducible() {
        let mut a = AdcSimulator::new(0, 4096, Some(1234));
        let mut b = AdcSimulator::new(0, 4096, Some(1234));

        for _ in 0..64 {
            assert_eq!(a.next_reading(), b.next_reading());
        }
    }

    #[test]
    fn test_adc_empty_range() {
        let mut adc = AdcSimulator::new(5, 5, None);
        assert_eq!(adc.next_reading(), 5);
    }

    #[test]
    fn test_water_level_samples() {
        let mut simulation = Simulation::start(&CalibrationTable::water_level(), Some(42)).unwrap();

        assert!(simulation.regressor().is_initialized());

        for _ in 0..1000 {
            let sample = simulation.step();
            assert_eq!(sample.value, simulation.regressor().evaluate(sample.raw));
            assert!(sample.value >= 1.0 && sample.value <= 50.0);
        }
    }

    #[test]
    fn test_rejected_table() {
        let mut table = CalibrationTable::water_level();
        table.max_input_value = table.min_input_value;

        assert_eq!(
            Simulation::start(&table, None).err(),
            Some(RegressorError::InvalidRange)
        );

        table.terms.clear();
        assert_eq!(
            Simulation::start(&table, None).err(),
            Some(RegressorError::InvalidCoefficients)
        );
    }

    #[test]
    fn test_describe() {
        let simulation = Simulation::start(&CalibrationTable::water_level(), Some(0)).unwrap();
        let sample = Sample {
            raw: 2000,
            value: 20.5,
        };

        assert_eq!(
            simulation.describe(&sample),
            "Simulated ADC: 2000 -> Calculated Height: 20.50 cm"
        );
    }
}

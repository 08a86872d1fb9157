use crate::RegressorError;

// Describes a polynomial calibration curve for a raw sensor input.
// Given in the form: y = terms[0] + terms[1] * x + terms[2] * x^2 + ...
// where x is the raw input rescaled from [min_input_value, max_input_value] into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegressorConfig<'a> {
    pub terms: &'a [f32],
    pub min_input_value: i32,
    pub max_input_value: i32,
}

impl<'a> RegressorConfig<'a> {
    pub const fn new(terms: &'a [f32], min_input_value: i32, max_input_value: i32) -> Self {
        Self {
            terms,
            min_input_value,
            max_input_value,
        }
    }

    pub const fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Checks the table and input bounds. Doesn't know about any regressor's
    /// storage capacity, see [`crate::PolynomialRegressor::configure`].
    pub fn validate(&self) -> Result<(), RegressorError> {
        if self.num_terms() == 0 {
            return Err(RegressorError::InvalidCoefficients);
        }

        if self.min_input_value >= self.max_input_value {
            return Err(RegressorError::InvalidRange);
        }

        Ok(())
    }
}

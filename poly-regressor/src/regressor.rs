use crate::{RegressorConfig, RegressorError, DEFAULT_MAX_TERMS};

/// Converts raw ADC readings into calibrated measurements with a polynomial
/// curve over the normalized input range.
///
/// The regressor starts out unconfigured and evaluates everything to `0.0`
/// until [`configure`](Self::configure) accepts a table. Accepted coefficients
/// are copied into inline storage of `MAX_TERMS` entries, so the caller's
/// table doesn't need to outlive the regressor.
#[derive(Debug, Clone)]
pub struct PolynomialRegressor<const MAX_TERMS: usize = DEFAULT_MAX_TERMS> {
    terms: [f32; MAX_TERMS],
    num_terms: usize,
    min_input_value: i32,
    max_input_value: i32,
    initialized: bool,
}

impl<const MAX_TERMS: usize> PolynomialRegressor<MAX_TERMS> {
    pub const fn new() -> Self {
        Self {
            terms: [0.0; MAX_TERMS],
            num_terms: 0,
            min_input_value: 0,
            max_input_value: 0,
            initialized: false,
        }
    }

    /// Validates `config` and stores a copy of it.
    ///
    /// A rejected config leaves the regressor exactly as it was. Configuring an
    /// already configured regressor replaces the previous curve.
    pub fn configure(&mut self, config: &RegressorConfig) -> Result<(), RegressorError> {
        if let Err(err) = Self::check_config(config) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected regressor config: {}", err);

            return Err(err);
        }

        let num_terms = config.num_terms();

        self.terms = [0.0; MAX_TERMS];
        self.terms[..num_terms].copy_from_slice(config.terms);
        self.num_terms = num_terms;
        self.min_input_value = config.min_input_value;
        self.max_input_value = config.max_input_value;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Regressor configured with {} terms over [{}, {}]",
            num_terms,
            config.min_input_value,
            config.max_input_value
        );

        Ok(())
    }

    /// Returns the calibrated value for `raw_value`, or `0.0` if the regressor
    /// hasn't been configured. Inputs outside the configured bounds are clamped.
    pub fn evaluate(&self, raw_value: i32) -> f32 {
        if !self.initialized {
            return 0.0;
        }

        let span = self.input_span();
        if span == 0 {
            return self.terms[0];
        }

        horner(self.terms(), self.rescale(raw_value, span))
    }

    /// The clamped input rescaled into `[0.0, 1.0]`, i.e. the `x` the curve is
    /// evaluated at. `None` if the regressor hasn't been configured.
    pub fn normalize(&self, raw_value: i32) -> Option<f32> {
        if !self.initialized {
            return None;
        }

        let span = self.input_span();
        if span == 0 {
            return Some(0.0);
        }

        Some(self.rescale(raw_value, span))
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn terms(&self) -> &[f32] {
        &self.terms[..self.num_terms]
    }

    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    pub fn input_range(&self) -> (i32, i32) {
        (self.min_input_value, self.max_input_value)
    }

    pub const fn capacity(&self) -> usize {
        MAX_TERMS
    }

    fn check_config(config: &RegressorConfig) -> Result<(), RegressorError> {
        config.validate()?;

        if config.num_terms() > MAX_TERMS {
            return Err(RegressorError::TooManyTerms);
        }

        Ok(())
    }

    // Widened so bounds at the ends of the i32 range can't overflow
    fn input_span(&self) -> i64 {
        i64::from(self.max_input_value) - i64::from(self.min_input_value)
    }

    fn rescale(&self, raw_value: i32, span: i64) -> f32 {
        let clamped = raw_value.clamp(self.min_input_value, self.max_input_value);
        let offset = i64::from(clamped) - i64::from(self.min_input_value);

        offset as f32 / span as f32
    }
}

impl<const MAX_TERMS: usize> Default for PolynomialRegressor<MAX_TERMS> {
    fn default() -> Self {
        Self::new()
    }
}

// Terms are ordered lowest degree first
fn horner(terms: &[f32], x: f32) -> f32 {
    terms
        .iter()
        .rev()
        .fold(0.0, |result, &term| term + x * result)
}

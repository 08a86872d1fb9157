use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegressorError {
    /// The coefficient table is empty.
    InvalidCoefficients,
    /// `min_input_value` is not strictly below `max_input_value`.
    InvalidRange,
    /// The coefficient table doesn't fit in the regressor's inline storage.
    TooManyTerms,
}

impl RegressorError {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl core::fmt::Display for RegressorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let description = match self {
            RegressorError::InvalidCoefficients => "coefficient table is empty",
            RegressorError::InvalidRange => "minimum input must be strictly below maximum input",
            RegressorError::TooManyTerms => "coefficient table exceeds regressor capacity",
        };

        write!(f, "{} ({})", description, self.as_str())
    }
}

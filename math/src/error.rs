use {std::any::type_name, thiserror::Error};

#[derive(Debug, Error)]
pub enum MathError {
    #[error("failed to parse string `{value}` into {ty}: {reason}")]
    ParseNumber {
        ty: &'static str,
        value: String,
        reason: String,
    },

    #[error("denominator cannot be zero: {numerator}/0")]
    ZeroDenominator { numerator: String },
}

impl MathError {
    pub fn parse_number<T, V, R>(value: V, reason: R) -> Self
    where
        V: ToString,
        R: ToString,
    {
        Self::ParseNumber {
            ty: type_name::<T>(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn zero_denominator(numerator: impl ToString) -> Self {
        Self::ZeroDenominator {
            numerator: numerator.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;

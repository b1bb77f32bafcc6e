use crate::prelude::{Real, Time};
use thiserror::Error;

/// Errors raised while building or driving a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Total population is zero (or not a finite number). Every derivative
    /// divides by it.
    #[error("degenerate model: total population must be positive, got {0}")]
    DegenerateModel(Real),

    /// Negative or non-finite population, non-positive rate or negative
    /// threshold.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: Real },

    /// A step produced NaN or infinite compartment values.
    #[error("non-finite state at t = {time}")]
    NonFinite { time: Time },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Fails with InvalidParameter unless value is finite and strictly positive.
pub(crate) fn check_rate(name: &'static str, value: Real) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(ModelError::InvalidParameter { name, value })
}

/// Fails with InvalidParameter unless value is finite and non-negative.
pub(crate) fn check_non_negative(name: &'static str, value: Real) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ModelError::InvalidParameter { name, value })
}

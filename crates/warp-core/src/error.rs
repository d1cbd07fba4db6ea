use crate::constants::MAX_STAR_COUNT;
use thiserror::Error;

/// Rejected animator or rig configuration.
///
/// Runtime inputs (timestamps, scroll fractions, viewport sizes) are clamped
/// instead of rejected; only configuration is validated up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("star count must be greater than zero")]
    EmptyField,
    #[error("star count must be at most {max}, got {got}")]
    TooManyStars { max: usize, got: usize },
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("timeline out of order: {earlier} ({earlier_ms} ms) after {later} ({later_ms} ms)")]
    Timeline {
        earlier: &'static str,
        earlier_ms: f64,
        later: &'static str,
        later_ms: f64,
    },
    #[error("camera path needs at least {min} points, got {got}")]
    PathTooShort { min: usize, got: usize },
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the comparison and is reported as negative
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

pub(crate) fn ensure_star_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 {
        Err(ConfigError::EmptyField)
    } else if count > MAX_STAR_COUNT {
        Err(ConfigError::TooManyStars {
            max: MAX_STAR_COUNT,
            got: count,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_ordered(
    earlier: (&'static str, f64),
    later: (&'static str, f64),
) -> Result<(), ConfigError> {
    if earlier.1 <= later.1 {
        Ok(())
    } else {
        Err(ConfigError::Timeline {
            earlier: earlier.0,
            earlier_ms: earlier.1,
            later: later.0,
            later_ms: later.1,
        })
    }
}

use thiserror::Error;

/// Raised when a breakpoint or tier configuration violates its invariants.
///
/// Only constructors return this error. A value that was built successfully
/// stays valid for its whole lifetime, so classification itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    /// A threshold was zero, negative or NaN.
    #[error("`{field}` must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// A threshold was infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    /// Two thresholds that must be strictly ascending were not.
    #[error("`{lower}` ({lower_value}) must be less than `{upper}` ({upper_value})")]
    NotAscending {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
}

impl ConfigurationError {
    /// The name of the field the error was reported against.
    pub fn field(&self) -> &'static str {
        match *self {
            ConfigurationError::NonPositive { field, .. }
            | ConfigurationError::NonFinite { field, .. } => field,
            ConfigurationError::NotAscending { lower, .. } => lower,
        }
    }
}

/// Fails unless `value` is a finite number greater than zero. NaN is
/// [`ConfigurationError::NonPositive`].
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_nan() || value <= 0.0 {
        tracing::debug!(field, value, "rejected non-positive threshold");
        return Err(ConfigurationError::NonPositive { field, value });
    }
    if value.is_infinite() {
        tracing::debug!(field, value, "rejected infinite threshold");
        return Err(ConfigurationError::NonFinite { field, value });
    }
    Ok(value)
}

pub(crate) fn ascending(
    (lower, lower_value): (&'static str, f64),
    (upper, upper_value): (&'static str, f64),
) -> Result<(), ConfigurationError> {
    if lower_value.is_nan() || upper_value.is_nan() || lower_value >= upper_value {
        tracing::debug!(
            lower,
            lower_value,
            upper,
            upper_value,
            "rejected thresholds out of ascending order"
        );
        return Err(ConfigurationError::NotAscending {
            lower,
            lower_value,
            upper,
            upper_value,
        });
    }
    Ok(())
}

use crate::errors::{Constraint, KinematicsError};

pub fn require_finite(parameter: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::invalid(parameter, value, Constraint::Finite))
    }
}

/// Finite and `>= 0`. `-0.0` is accepted.
pub fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64, KinematicsError> {
    let value = require_finite(parameter, value)?;
    if value < 0.0 {
        return Err(KinematicsError::invalid(
            parameter,
            value,
            Constraint::NonNegative,
        ));
    }
    Ok(value)
}

/// Rejects a computed value that overflowed despite finite inputs.
pub fn require_finite_result(quantity: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::NonFiniteResult { quantity, value })
    }
}

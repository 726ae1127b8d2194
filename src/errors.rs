use std::{error::Error, fmt};

/// Rule an input quantity has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Finite,
    NonNegative,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Finite => write!(f, "must be a finite number"),
            Constraint::NonNegative => write!(f, "must be non-negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: Constraint,
    },
    FuelExhausted {
        available_kg: f64,
        required_kg: f64,
    },
    /// Finite inputs whose combination overflows `f64`.
    NonFiniteResult {
        quantity: &'static str,
        value: f64,
    },
}

impl KinematicsError {
    pub fn invalid(parameter: &'static str, value: f64, constraint: Constraint) -> Self {
        KinematicsError::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => write!(
                f,
                "invalid parameter `{}` = {}: {}",
                parameter, value, constraint
            ),
            KinematicsError::FuelExhausted {
                available_kg,
                required_kg,
            } => write!(
                f,
                "fuel exhausted: burn requires {} kg but only {} kg is available",
                required_kg, available_kg
            ),
            KinematicsError::NonFiniteResult { quantity, value } => write!(
                f,
                "result `{}` = {} is not finite: inputs are out of range",
                quantity, value
            ),
        }
    }
}

impl Error for KinematicsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(
        KinematicsError::invalid("time_s", -1.0, Constraint::NonNegative),
        "invalid parameter `time_s` = -1: must be non-negative";
        "negative time"
    )]
    #[test_case(
        KinematicsError::invalid("acceleration_ms2", f64::NAN, Constraint::Finite),
        "invalid parameter `acceleration_ms2` = NaN: must be a finite number";
        "nan acceleration"
    )]
    #[test_case(
        KinematicsError::FuelExhausted { available_kg: 1000.0, required_kg: 1800.0 },
        "fuel exhausted: burn requires 1800 kg but only 1000 kg is available";
        "fuel exhausted"
    )]
    #[test_case(
        KinematicsError::NonFiniteResult { quantity: "new_velocity_kmh", value: f64::INFINITY },
        "result `new_velocity_kmh` = inf is not finite: inputs are out of range";
        "overflowing result"
    )]
    fn test_display(error: KinematicsError, expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}

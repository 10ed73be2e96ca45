//! Error types for Wilks calculations.

use thiserror::Error;

use crate::domain::Quantity;

/// Errors that can occur when validating inputs to a Wilks calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WilksError {
    #[error(
        "missing parameter: {0}; please fill in gender, body weight and weight or Wilks score"
    )]
    MissingParameter(&'static str),

    #[error("gender is not valid: {0:?}; select m for male or f for female")]
    InvalidCategory(String),

    #[error("body weight is not valid: {0}")]
    InvalidBodyWeight(f64),

    #[error("{quantity} is not valid: {value}")]
    InvalidMagnitude { quantity: Quantity, value: f64 },

    #[error("unit type is not valid: {0:?}; select metric or imperial")]
    InvalidUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = WilksError::InvalidCategory("x".to_string());
        assert!(err.to_string().contains("\"x\""));

        let err = WilksError::InvalidMagnitude {
            quantity: Quantity::WilksScore,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Wilks score is not valid: -1");

        let err = WilksError::InvalidMagnitude {
            quantity: Quantity::LiftedWeight,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "weight is not valid: NaN");

        let err = WilksError::MissingParameter("body_weight");
        assert!(err.to_string().starts_with("missing parameter: body_weight"));
    }
}

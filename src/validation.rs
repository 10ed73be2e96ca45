//! Input validation shared by every public entry point.
//!
//! Validation runs on the raw values supplied by the caller, before any unit
//! conversion. Checks are ordered and the first failure is returned, so a
//! request with several bad inputs always reports the same error.

use crate::domain::{Category, Quantity, Unit};
use crate::error::WilksError;

/// Checks that the three required inputs were supplied at all.
///
/// An empty category string counts as absent. Returns the unwrapped values.
pub fn require_present(
    category: Option<&str>,
    body_weight: Option<f64>,
    magnitude: Option<f64>,
    quantity: Quantity,
) -> Result<(&str, f64, f64), WilksError> {
    let category = match category {
        Some(c) if !c.is_empty() => c,
        _ => return Err(WilksError::MissingParameter("category")),
    };
    let body_weight = body_weight.ok_or(WilksError::MissingParameter("body_weight"))?;
    let magnitude = magnitude.ok_or(WilksError::MissingParameter(quantity.field_name()))?;

    Ok((category, body_weight, magnitude))
}

/// Validates raw inputs and parses the category and unit tokens.
///
/// Order: category, body weight, magnitude, unit. Weights and scores must be
/// finite and strictly positive. A missing unit means [`Unit::Metric`].
pub fn validate_inputs(
    category: &str,
    body_weight: f64,
    magnitude: f64,
    quantity: Quantity,
    unit: Option<&str>,
) -> Result<(Category, Unit), WilksError> {
    let result = check(category, body_weight, magnitude, quantity, unit);
    if let Err(e) = &result {
        log::debug!("Rejected input: {}", e);
    }
    result
}

fn check(
    category: &str,
    body_weight: f64,
    magnitude: f64,
    quantity: Quantity,
    unit: Option<&str>,
) -> Result<(Category, Unit), WilksError> {
    let category: Category = category.parse()?;

    if !is_positive(body_weight) {
        return Err(WilksError::InvalidBodyWeight(body_weight));
    }

    if !is_positive(magnitude) {
        return Err(WilksError::InvalidMagnitude {
            quantity,
            value: magnitude,
        });
    }

    let unit = match unit {
        Some(u) => u.parse()?,
        None => Unit::default(),
    };

    Ok((category, unit))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

//! Wilks score calculation for powerlifting.
//!
//! The Wilks coefficient normalizes a lifted weight by the lifter's
//! bodyweight using a fixed degree-5 polynomial per category, so lifters of
//! different sizes can be compared. This crate computes the score for a lift
//! and, inversely, the weight required to reach a target score.
//!
//! ```
//! let score = wilks::calculate_wilks_score("m", 90.0, 500.0, None)?;
//! assert!((score - 319.20).abs() < 0.01);
//!
//! let lift_lb = wilks::calculate_weight_to_lift("f", 132.0, 334.31, Some("imperial"))?;
//! assert!((lift_lb - 660.0).abs() < 0.1);
//! # Ok::<(), wilks::WilksError>(())
//! ```
//!
//! Inputs are validated before conversion; see [`validation`] for the rules.
//! Bodyweights far outside the human range are not rejected and may yield
//! non-finite or meaningless results.

pub mod domain;
pub mod error;
pub mod formulas;
pub mod validation;

pub use domain::{Category, LiftRequest, Quantity, ScoreRequest, Unit};
pub use error::WilksError;
pub use formulas::LB_PER_KG;

use crate::validation::{require_present, validate_inputs};

/// Returns the Wilks score for `lifted_weight` at `body_weight`.
///
/// # Arguments
/// * `category` - `"m"` or `"f"`
/// * `body_weight` - Lifter's bodyweight
/// * `lifted_weight` - Weight lifted
/// * `unit` - `"metric"` (default when `None`) or `"imperial"`; applies to both weights
pub fn calculate_wilks_score(
    category: &str,
    body_weight: f64,
    lifted_weight: f64,
    unit: Option<&str>,
) -> Result<f64, WilksError> {
    let (category, body_weight, lifted_weight) = require_present(
        Some(category),
        Some(body_weight),
        Some(lifted_weight),
        Quantity::LiftedWeight,
    )?;
    let (category, unit) = validate_inputs(
        category,
        body_weight,
        lifted_weight,
        Quantity::LiftedWeight,
        unit,
    )?;

    Ok(formulas::wilks_score(category, body_weight, lifted_weight, unit))
}

/// Returns the weight to lift to reach `wilks_score` at `body_weight`.
///
/// The result is in the same unit as `body_weight`.
pub fn calculate_weight_to_lift(
    category: &str,
    body_weight: f64,
    wilks_score: f64,
    unit: Option<&str>,
) -> Result<f64, WilksError> {
    let (category, body_weight, wilks_score) = require_present(
        Some(category),
        Some(body_weight),
        Some(wilks_score),
        Quantity::WilksScore,
    )?;
    let (category, unit) =
        validate_inputs(category, body_weight, wilks_score, Quantity::WilksScore, unit)?;

    Ok(formulas::weight_to_lift(category, body_weight, wilks_score, unit))
}

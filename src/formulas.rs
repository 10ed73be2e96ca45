//! Wilks coefficient and the score/weight transforms built on it.

use crate::domain::{Category, Unit};

/// Pounds per kilogram. Imperial inputs are divided by this before evaluation.
pub const LB_PER_KG: f64 = 2.20462262185;

/// Numerator of the Wilks coefficient.
pub const NORMALIZATION_NUMERATOR: f64 = 500.0;

/// Wilks polynomial coefficients for male lifters, constant term first.
pub const MALE_COEFFICIENTS: [f64; 6] = [
    -216.0475144,
    16.2606339,
    -0.002388645,
    -0.00113732,
    7.01863e-6,
    -1.291e-8,
];

/// Wilks polynomial coefficients for female lifters, constant term first.
pub const FEMALE_COEFFICIENTS: [f64; 6] = [
    594.31747775582,
    -27.23842536447,
    0.82112226871,
    -0.00930733913,
    4.731582e-5,
    -9.054e-8,
];

fn coefficients(category: Category) -> &'static [f64; 6] {
    match category {
        Category::Male => &MALE_COEFFICIENTS,
        Category::Female => &FEMALE_COEFFICIENTS,
    }
}

/// Converts a weight in `unit` to kilograms.
pub fn to_kg(weight: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => weight,
        Unit::Imperial => weight / LB_PER_KG,
    }
}

/// Converts a weight in kilograms to `unit`.
pub fn from_kg(weight_kg: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Metric => weight_kg,
        Unit::Imperial => weight_kg * LB_PER_KG,
    }
}

/// Evaluates the Wilks normalization factor for a bodyweight in kilograms.
///
/// Formula:
/// ```text
/// coeff = 500 / (a + b·bw + c·bw² + d·bw³ + e·bw⁴ + f·bw⁵)
/// ```
///
/// Inputs are not checked. A bodyweight where the polynomial is zero or
/// diverges produces an infinite, NaN or extreme factor, which is returned
/// unchanged.
pub(crate) fn normalization_factor(category: Category, bodyweight_kg: f64) -> f64 {
    let denominator: f64 = coefficients(category)
        .iter()
        .zip(0..)
        .map(|(c, i)| c * bodyweight_kg.powi(i))
        .sum();

    let factor = NORMALIZATION_NUMERATOR / denominator;
    if !factor.is_finite() {
        log::warn!(
            "Wilks coefficient is not finite for {} at {} kg",
            category,
            bodyweight_kg
        );
    }
    log::trace!("Wilks coefficient ({}, {} kg) = {}", category, bodyweight_kg, factor);

    factor
}

/// Returns the Wilks coefficient for a bodyweight given in `unit`.
pub fn wilks_coefficient(category: Category, bodyweight: f64, unit: Unit) -> f64 {
    normalization_factor(category, to_kg(bodyweight, unit))
}

/// Calculates the Wilks score for an already validated lift.
///
/// Both weights are in `unit` and converted to kilograms before scoring.
///
/// # Arguments
/// * `category` - Selects the coefficient table
/// * `bodyweight` - Lifter's bodyweight
/// * `lifted_weight` - Weight lifted (or total)
/// * `unit` - Unit of both weights
///
/// # Returns
/// Wilks score (unitless)
pub fn wilks_score(category: Category, bodyweight: f64, lifted_weight: f64, unit: Unit) -> f64 {
    to_kg(lifted_weight, unit) * wilks_coefficient(category, bodyweight, unit)
}

/// Calculates the weight to lift to reach `target_score` at `bodyweight`.
///
/// The score is unit independent; only bodyweight is converted on the way in,
/// and the result is converted back to `unit`.
pub fn weight_to_lift(category: Category, bodyweight: f64, target_score: f64, unit: Unit) -> f64 {
    let lift_kg = target_score / wilks_coefficient(category, bodyweight, unit);
    from_kg(lift_kg, unit)
}

//! Domain types for Wilks score requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WilksError;
use crate::validation::require_present;

/// Lifter category selecting the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Category {
    /// Returns all category variants.
    pub fn all() -> &'static [Category] {
        &[Category::Male, Category::Female]
    }

    /// Returns the token used to select this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "m",
            Category::Female => "f",
        }
    }
}

impl FromStr for Category {
    type Err = WilksError;

    /// Parses a category token. Matching is exact: `"M"` or `" m"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Category::Male),
            "f" => Ok(Category::Female),
            _ => Err(WilksError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Measurement system for bodyweight and lifted weight.
///
/// `Metric` (kilograms) is native to the coefficient tables. `Imperial`
/// (pounds) values are converted before evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    /// Returns the token used to select this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }
}

impl FromStr for Unit {
    type Err = WilksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Unit::Metric),
            "imperial" => Ok(Unit::Imperial),
            _ => Err(WilksError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The third positional input of a calculation: what is being scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    LiftedWeight,
    WilksScore,
}

impl Quantity {
    /// Returns the request field name carrying this quantity.
    pub fn field_name(&self) -> &'static str {
        match self {
            Quantity::LiftedWeight => "lifted_weight",
            Quantity::WilksScore => "wilks_score",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::LiftedWeight => write!(f, "weight"),
            Quantity::WilksScore => write!(f, "Wilks score"),
        }
    }
}

/// Parameters for a score calculation, as supplied by a host application.
///
/// Every field is optional so that absent inputs surface as
/// [`WilksError::MissingParameter`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRequest {
    pub category: Option<String>,
    pub body_weight: Option<f64>,
    pub lifted_weight: Option<f64>,
    pub unit: Option<String>,
}

impl ScoreRequest {
    /// Creates a request in the default (metric) unit.
    pub fn new(category: impl Into<String>, body_weight: f64, lifted_weight: f64) -> Self {
        Self {
            category: Some(category.into()),
            body_weight: Some(body_weight),
            lifted_weight: Some(lifted_weight),
            unit: None,
        }
    }

    /// Sets the unit token.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Runs the presence check, then computes the Wilks score.
    pub fn evaluate(&self) -> Result<f64, WilksError> {
        let (category, body_weight, lifted_weight) = require_present(
            self.category.as_deref(),
            self.body_weight,
            self.lifted_weight,
            Quantity::LiftedWeight,
        )?;

        crate::calculate_wilks_score(category, body_weight, lifted_weight, self.unit.as_deref())
    }
}

/// Parameters for a weight-to-lift calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftRequest {
    pub category: Option<String>,
    pub body_weight: Option<f64>,
    pub wilks_score: Option<f64>,
    pub unit: Option<String>,
}

impl LiftRequest {
    /// Creates a request in the default (metric) unit.
    pub fn new(category: impl Into<String>, body_weight: f64, wilks_score: f64) -> Self {
        Self {
            category: Some(category.into()),
            body_weight: Some(body_weight),
            wilks_score: Some(wilks_score),
            unit: None,
        }
    }

    /// Sets the unit token.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Runs the presence check, then computes the weight required for the target score.
    pub fn evaluate(&self) -> Result<f64, WilksError> {
        let (category, body_weight, wilks_score) = require_present(
            self.category.as_deref(),
            self.body_weight,
            self.wilks_score,
            Quantity::WilksScore,
        )?;

        crate::calculate_weight_to_lift(category, body_weight, wilks_score, self.unit.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("m".parse::<Category>().unwrap(), Category::Male);
        assert_eq!("f".parse::<Category>().unwrap(), Category::Female);
        assert!(matches!(
            "M".parse::<Category>(),
            Err(WilksError::InvalidCategory(_))
        ));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_roundtrips() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_unit_default_is_metric() {
        assert_eq!(Unit::default(), Unit::Metric);
        assert_eq!("imperial".parse::<Unit>().unwrap(), Unit::Imperial);
        assert!(matches!(
            "foo".parse::<Unit>(),
            Err(WilksError::InvalidUnit(s)) if s == "foo"
        ));
    }

    #[test]
    fn test_score_request_evaluate() {
        let score = ScoreRequest::new("m", 90.0, 500.0).evaluate().unwrap();
        assert!(approx_eq(score, 319.20, 0.01));

        let score = ScoreRequest::new("f", 132.0, 660.0)
            .with_unit("imperial")
            .evaluate()
            .unwrap();
        assert!(approx_eq(score, 334.31, 0.01));
    }

    #[test]
    fn test_empty_request_is_missing_parameter() {
        assert_eq!(
            ScoreRequest::default().evaluate(),
            Err(WilksError::MissingParameter("category"))
        );
        assert_eq!(
            LiftRequest::default().evaluate(),
            Err(WilksError::MissingParameter("category"))
        );
    }

    #[test]
    fn test_missing_magnitude_names_the_field() {
        let request = ScoreRequest {
            category: Some("f".into()),
            body_weight: Some(60.0),
            ..Default::default()
        };
        assert_eq!(
            request.evaluate(),
            Err(WilksError::MissingParameter("lifted_weight"))
        );

        let request = LiftRequest {
            category: Some("f".into()),
            body_weight: Some(60.0),
            ..Default::default()
        };
        assert_eq!(
            request.evaluate(),
            Err(WilksError::MissingParameter("wilks_score"))
        );
    }

    #[test]
    fn test_lift_request_from_json() {
        let request: LiftRequest =
            serde_json::from_str(r#"{"category":"m","body_weight":80,"wilks_score":350}"#)
                .unwrap();
        assert_eq!(request.unit, None);
        let lift = request.evaluate().unwrap();
        assert!(approx_eq(lift, 512.67, 0.01));
    }

    #[test]
    fn test_score_request_from_json_with_bad_unit() {
        let request: ScoreRequest = serde_json::from_str(
            r#"{"category":"f","body_weight":60,"lifted_weight":300,"unit":"string"}"#,
        )
        .unwrap();
        assert_eq!(
            request.evaluate(),
            Err(WilksError::InvalidUnit("string".into()))
        );
    }

    #[test]
    fn test_category_serde_tokens() {
        assert_eq!(serde_json::to_string(&Category::Female).unwrap(), "\"f\"");
        let unit: Unit = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(unit, Unit::Imperial);
    }
}

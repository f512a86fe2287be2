//! Input validation for the recommendation query
//!
//! Validation is strict: missing fields, non-finite numbers and labels
//! outside the accepted enumerations are all rejected. Numeric values are
//! not range-checked.

use crate::errors::InputError;
use crate::health_metrics::{ActivityLevel, BiometricInput, PregnancyStage};
use crate::types::DietQuery;

/// Query parameter names, in the order they are reported when missing
pub const REQUIRED_PARAMETERS: [&str; 5] = ["age", "height", "weight", "preg_stage", "active"];

/// Parse a numeric parameter, accepting only finite values
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Turn a raw query into validated biometric input
///
/// Checks run in order: presence of all five parameters, then the three
/// numbers, then the two enumerations.
pub fn parse_biometric_query(query: &DietQuery) -> Result<BiometricInput, InputError> {
    let fields = [
        present(&query.age),
        present(&query.height),
        present(&query.weight),
        present(&query.preg_stage),
        present(&query.active),
    ];

    let missing: Vec<&'static str> = REQUIRED_PARAMETERS
        .iter()
        .zip(fields.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingParameters(missing));
    }

    let [Some(age), Some(height), Some(weight), Some(stage), Some(active)] = fields else {
        return Err(InputError::MissingParameters(REQUIRED_PARAMETERS.to_vec()));
    };

    let (Some(age), Some(height_m), Some(weight_kg)) =
        (parse_finite(age), parse_finite(height), parse_finite(weight))
    else {
        return Err(InputError::InvalidNumber);
    };

    Ok(BiometricInput {
        age,
        height_m,
        weight_kg,
        pregnancy_stage: stage.parse::<PregnancyStage>()?,
        activity_level: active.parse::<ActivityLevel>()?,
    })
}

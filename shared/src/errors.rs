//! Error types for the Maternal Diet Planner

use thiserror::Error;

/// Rejections produced while turning raw query parameters into a
/// [`BiometricInput`](crate::health_metrics::BiometricInput).
///
/// Every variant is caller-visible and maps to a 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing required query parameters: {}.", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    #[error("Age, height, and weight must be valid numbers.")]
    InvalidNumber,

    #[error("Unknown pregnancy stage '{0}'. Must be one of: FirstTrimester, SecondTrimester, ThirdTrimester")]
    UnknownPregnancyStage(String),

    #[error("Unknown activity level '{0}'. Must be one of: Sedentary, Light Active, Moderately Active, Very Active")]
    UnknownActivityLevel(String),
}

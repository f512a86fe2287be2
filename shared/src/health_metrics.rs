//! Calorie target estimation for pregnant users
//!
//! Provides the daily calorie estimate (Mifflin-St Jeor BMR, an activity
//! multiplier and a trimester supplement) and the coarse low/mid/high
//! classification applied both to the target and to individual foods.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **No clamping**: Inputs are only required to be finite; absurd values
//!    propagate into the arithmetic unchanged
//! 3. **No rounding**: Callers round for display

use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// Pregnancy stage, parsed from the exact labels callers send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PregnancyStage {
    FirstTrimester,
    SecondTrimester,
    ThirdTrimester,
}

impl PregnancyStage {
    pub const ALL: [PregnancyStage; 3] = [
        PregnancyStage::FirstTrimester,
        PregnancyStage::SecondTrimester,
        PregnancyStage::ThirdTrimester,
    ];

    /// Extra daily kcal for this trimester
    pub fn supplement_kcal(&self) -> f64 {
        match self {
            PregnancyStage::FirstTrimester => 85.0,
            PregnancyStage::SecondTrimester => 285.0,
            PregnancyStage::ThirdTrimester => 475.0,
        }
    }

    /// Wire label, as accepted in `preg_stage`
    pub fn label(&self) -> &'static str {
        match self {
            PregnancyStage::FirstTrimester => "FirstTrimester",
            PregnancyStage::SecondTrimester => "SecondTrimester",
            PregnancyStage::ThirdTrimester => "ThirdTrimester",
        }
    }
}

impl FromStr for PregnancyStage {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.label() == trimmed)
            .ok_or_else(|| InputError::UnknownPregnancyStage(trimmed.to_string()))
    }
}

impl fmt::Display for PregnancyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Activity level for the BMR multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightActive => 1.3,
            ActivityLevel::ModeratelyActive => 1.45,
            ActivityLevel::VeryActive => 1.6,
        }
    }

    /// Wire label, as accepted in `active`
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightActive => "Light Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label() == trimmed)
            .ok_or_else(|| InputError::UnknownActivityLevel(trimmed.to_string()))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated biometric input for a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Age in years
    pub age: f64,
    /// Height in meters (the wire unit)
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    pub pregnancy_stage: PregnancyStage,
    pub activity_level: ActivityLevel,
}

// ============================================================================
// Calorie Estimation
// ============================================================================

/// Mifflin-St Jeor BMR for a female adult
///
/// BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age − 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years - 161.0
}

/// Daily calorie target: BMR × activity multiplier + trimester supplement
pub fn estimate_daily_calories(input: &BiometricInput) -> f64 {
    let height_cm = input.height_m * 100.0;
    let bmr = calculate_bmr_mifflin(input.weight_kg, height_cm, input.age);
    bmr * input.activity_level.multiplier() + input.pregnancy_stage.supplement_kcal()
}

// ============================================================================
// Classification
// ============================================================================

/// Upper bound (exclusive) of the `low` band
pub const LOW_CALORIE_CEILING: f64 = 150.0;

/// Upper bound (inclusive) of the `mid` band
pub const MID_CALORIE_CEILING: f64 = 300.0;

/// Coarse calorie band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalorieCategory {
    Low,
    Mid,
    High,
}

impl CalorieCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalorieCategory::Low => "low",
            CalorieCategory::Mid => "mid",
            CalorieCategory::High => "high",
        }
    }
}

impl fmt::Display for CalorieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a calorie value: `< 150` low, `150..=300` mid, `> 300` high
pub fn classify_calories(calories: f64) -> CalorieCategory {
    if calories < LOW_CALORIE_CEILING {
        CalorieCategory::Low
    } else if calories <= MID_CALORIE_CEILING {
        CalorieCategory::Mid
    } else {
        CalorieCategory::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn input(stage: PregnancyStage, level: ActivityLevel) -> BiometricInput {
        BiometricInput {
            age: 28.0,
            height_m: 1.65,
            weight_kg: 60.0,
            pregnancy_stage: stage,
            activity_level: level,
        }
    }

    // =========================================================================
    // Estimator Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        let bmr = calculate_bmr_mifflin(60.0, 165.0, 28.0);
        assert_eq!(bmr, 1330.25);
    }

    #[test]
    fn test_second_trimester_light_active() {
        let calories = estimate_daily_calories(&input(
            PregnancyStage::SecondTrimester,
            ActivityLevel::LightActive,
        ));
        // 1330.25 * 1.3 + 285
        assert!((calories - 2014.325).abs() < 1e-9, "got {}", calories);
        assert_eq!(calories.round(), 2014.0);
        assert_eq!(classify_calories(calories), CalorieCategory::High);
    }

    #[rstest]
    #[case(PregnancyStage::FirstTrimester, 85.0)]
    #[case(PregnancyStage::SecondTrimester, 285.0)]
    #[case(PregnancyStage::ThirdTrimester, 475.0)]
    fn test_trimester_supplement(#[case] stage: PregnancyStage, #[case] expected: f64) {
        let base = calculate_bmr_mifflin(60.0, 165.0, 28.0) * 1.2;
        let calories = estimate_daily_calories(&input(stage, ActivityLevel::Sedentary));
        assert!((calories - base - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let calories = estimate_daily_calories(&BiometricInput {
            age: 200.0,
            height_m: 0.1,
            weight_kg: -10.0,
            pregnancy_stage: PregnancyStage::FirstTrimester,
            activity_level: ActivityLevel::Sedentary,
        });
        // (-100 + 62.5 - 1000 - 161) * 1.2 + 85
        assert!((calories - (-1198.5 * 1.2 + 85.0)).abs() < 1e-9);
    }

    // =========================================================================
    // Label Parsing Tests
    // =========================================================================

    #[rstest]
    #[case("Sedentary", ActivityLevel::Sedentary)]
    #[case("Light Active", ActivityLevel::LightActive)]
    #[case("Moderately Active", ActivityLevel::ModeratelyActive)]
    #[case("Very Active", ActivityLevel::VeryActive)]
    #[case("  Very Active ", ActivityLevel::VeryActive)]
    fn test_activity_level_labels(#[case] raw: &str, #[case] expected: ActivityLevel) {
        assert_eq!(raw.parse::<ActivityLevel>().unwrap(), expected);
    }

    #[rstest]
    #[case("Sprinting")]
    #[case("sedentary")]
    #[case("LightActive")]
    #[case("")]
    fn test_activity_level_rejects_unknown(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<ActivityLevel>(),
            Err(InputError::UnknownActivityLevel(_))
        ));
    }

    #[test]
    fn test_pregnancy_stage_labels() {
        for stage in PregnancyStage::ALL {
            assert_eq!(stage.label().parse::<PregnancyStage>().unwrap(), stage);
        }
        assert_eq!(
            "FourthTrimester".parse::<PregnancyStage>(),
            Err(InputError::UnknownPregnancyStage("FourthTrimester".to_string()))
        );
    }

    // =========================================================================
    // Classifier Tests
    // =========================================================================

    #[rstest]
    #[case(0.0, CalorieCategory::Low)]
    #[case(149.9, CalorieCategory::Low)]
    #[case(150.0, CalorieCategory::Mid)]
    #[case(300.0, CalorieCategory::Mid)]
    #[case(300.1, CalorieCategory::High)]
    #[case(-50.0, CalorieCategory::Low)]
    #[case(2014.325, CalorieCategory::High)]
    fn test_classify_boundaries(#[case] calories: f64, #[case] expected: CalorieCategory) {
        assert_eq!(classify_calories(calories), expected);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&CalorieCategory::Mid).unwrap();
        assert_eq!(json, "\"mid\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: identical inputs always produce identical estimates
        #[test]
        fn prop_estimate_is_pure(
            age in 15.0f64..50.0,
            height in 1.3f64..2.1,
            weight in 35.0f64..150.0,
            stage in 0usize..3,
            level in 0usize..4
        ) {
            let input = BiometricInput {
                age,
                height_m: height,
                weight_kg: weight,
                pregnancy_stage: PregnancyStage::ALL[stage],
                activity_level: ActivityLevel::ALL[level],
            };
            let first = estimate_daily_calories(&input);
            let second = estimate_daily_calories(&input);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        /// Property: later trimesters never lower the target
        #[test]
        fn prop_later_trimester_needs_more(
            age in 15.0f64..50.0,
            height in 1.3f64..2.1,
            weight in 35.0f64..150.0
        ) {
            let mut input = BiometricInput {
                age,
                height_m: height,
                weight_kg: weight,
                pregnancy_stage: PregnancyStage::FirstTrimester,
                activity_level: ActivityLevel::ModeratelyActive,
            };
            let first = estimate_daily_calories(&input);
            input.pregnancy_stage = PregnancyStage::ThirdTrimester;
            let third = estimate_daily_calories(&input);
            prop_assert!(third > first);
        }

        /// Property: the three bands partition the real line
        #[test]
        fn prop_classification_matches_bands(calories in -1000.0f64..5000.0) {
            let expected = if calories < 150.0 {
                CalorieCategory::Low
            } else if calories <= 300.0 {
                CalorieCategory::Mid
            } else {
                CalorieCategory::High
            };
            prop_assert_eq!(classify_calories(calories), expected);
        }
    }
}

//! BMI calculations module
//!
//! Computes Body Mass Index from a height and a weight and maps it onto the
//! WHO adult categories.
//!
//! # Rules
//!
//! 1. **Pure Functions**: no state, no side effects, same input gives the
//!    same bits back
//! 2. **SI Units**: height in meters, weight in kilograms
//! 3. **Classify Unrounded**: the category comes from the raw quotient, the
//!    reported value is rounded to one decimal (half away from zero)

use crate::errors::BmiError;
use crate::validation::{validate_height_m, validate_weight_kg};
use serde::{Deserialize, Serialize};

/// Lower bound of the Normal range (inclusive)
pub const NORMAL_MIN_BMI: f64 = 18.5;
/// Lower bound of the Overweight range (inclusive)
pub const OVERWEIGHT_MIN_BMI: f64 = 25.0;
/// Lower bound of the Obese range (inclusive)
pub const OBESE_MIN_BMI: f64 = 30.0;
/// BMI drawn at the right edge of the result gauge
pub const SCALE_MAX_BMI: f64 = 40.0;

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Get the BMI range for this category as `[low, high)`
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, NORMAL_MIN_BMI),
            BmiCategory::Normal => (NORMAL_MIN_BMI, OVERWEIGHT_MIN_BMI),
            BmiCategory::Overweight => (OVERWEIGHT_MIN_BMI, OBESE_MIN_BMI),
            BmiCategory::Obese => (OBESE_MIN_BMI, f64::INFINITY),
        }
    }

    /// Label shown to users and sent over the wire
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// A validated height/weight pair
///
/// Can only be built through [`Measurement::new`], so holding one means both
/// values are strictly positive and finite and their rounded BMI is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height_m: f64,
    weight_kg: f64,
}

impl Measurement {
    /// Validate and build a measurement
    pub fn new(height_m: f64, weight_kg: f64) -> Result<Self, BmiError> {
        validate_height_m(height_m)?;
        validate_weight_kg(weight_kg)?;
        if !round_one_decimal(calculate_bmi(height_m, weight_kg)).is_finite() {
            return Err(BmiError::invalid("Height and weight are out of range for a BMI"));
        }
        Ok(Self { height_m, weight_kg })
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Compute the BMI result for this measurement
    pub fn bmi(&self) -> BmiResult {
        let raw = calculate_bmi(self.height_m, self.weight_kg);
        BmiResult {
            bmi: round_one_decimal(raw),
            category: classify_bmi(raw),
        }
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// Category of the unrounded BMI
    pub category: BmiCategory,
}

/// Calculate raw BMI from height and weight
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Lower bounds are inclusive, upper bounds exclusive.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_MIN_BMI {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN_BMI {
        BmiCategory::Normal
    } else if bmi < OBESE_MIN_BMI {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Round to one decimal place, halves away from zero
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Validate inputs, then compute the rounded BMI and its category
pub fn compute(height_m: f64, weight_kg: f64) -> Result<BmiResult, BmiError> {
    Ok(Measurement::new(height_m, weight_kg)?.bmi())
}

/// Calculate healthy weight range for a given height
///
/// Based on the Normal band, 18.5 to 25.
pub fn healthy_weight_range_kg(height_m: f64) -> (f64, f64) {
    let height_m_sq = height_m * height_m;
    (NORMAL_MIN_BMI * height_m_sq, OVERWEIGHT_MIN_BMI * height_m_sq)
}

/// Position of a BMI on the result gauge, in percent (0-100)
pub fn scale_percent(bmi: f64) -> f64 {
    (bmi / SCALE_MAX_BMI * 100.0).clamp(0.0, 100.0)
}

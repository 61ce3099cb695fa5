use std::fmt;

use serde::Serialize;

/// BMI classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn label_es(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Bajo peso",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obese => "Obesidad",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived health metrics for one profile.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResult {
    /// Body mass index (kg/m²).
    pub bmi: f64,

    pub bmi_category: BmiCategory,

    /// Basal metabolic rate (kcal/day), before the activity factor.
    pub bmr: f64,

    /// Daily calorie target (kcal/day), truncated.
    pub recommended_calories: u32,
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::metrics::constants::{
    ACTIVE_FACTOR, LIGHT_ACTIVITY_FACTOR, MODERATE_FACTOR, SEDENTARY_FACTOR, SUGGESTION_THRESHOLD,
    VERY_ACTIVE_FACTOR,
};

/// Biological sex, which selects the BMR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Hombre",
            Sex::Female => "Mujer",
        }
    }
}

impl FromStr for Sex {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "hombre" => Ok(Sex::Male),
            "female" | "f" | "mujer" => Ok(Sex::Female),
            other => Err(NutriError::InvalidInput(format!(
                "Unrecognized sex '{}' (expected male/hombre or female/mujer)",
                other
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifestyle activity level, each bound to a fixed BMR multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightActivity,
    Moderate,
    Active,
    VeryActive,
}

/// Accepted spellings per level; the first one is the canonical label.
const ACTIVITY_ALIASES: [(ActivityLevel, &[&str]); 5] = [
    (ActivityLevel::Sedentary, &["sedentario", "sedentary"]),
    (
        ActivityLevel::LightActivity,
        &["actividad ligera", "light activity", "light", "ligera"],
    ),
    (ActivityLevel::Moderate, &["moderado", "moderate"]),
    (ActivityLevel::Active, &["activo", "active"]),
    (ActivityLevel::VeryActive, &["muy activo", "very active"]),
];

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightActivity,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Multiplier from BMR to daily energy expenditure.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_FACTOR,
            ActivityLevel::LightActivity => LIGHT_ACTIVITY_FACTOR,
            ActivityLevel::Moderate => MODERATE_FACTOR,
            ActivityLevel::Active => ACTIVE_FACTOR,
            ActivityLevel::VeryActive => VERY_ACTIVE_FACTOR,
        }
    }

    /// Canonical (Spanish) label, as offered in the selection list.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentario",
            ActivityLevel::LightActivity => "Actividad ligera",
            ActivityLevel::Moderate => "Moderado",
            ActivityLevel::Active => "Activo",
            ActivityLevel::VeryActive => "Muy activo",
        }
    }

    /// Closest known level for a misspelled name, if any is close enough.
    pub fn suggest(input: &str) -> Option<ActivityLevel> {
        let needle = normalize_name(input);
        let needle = needle.as_str();
        ACTIVITY_ALIASES
            .iter()
            .flat_map(|(level, names)| names.iter().map(move |n| (*level, jaro_winkler(n, needle))))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(level, _)| level)
    }
}

/// Lowercase, treat `-`/`_` as spaces and collapse runs of whitespace.
fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for ActivityLevel {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        let name = normalize_name(s);
        let compact = name.replace(' ', "");

        let found = ACTIVITY_ALIASES.iter().find(|(_, names)| {
            names
                .iter()
                .any(|n| *n == name || n.replace(' ', "") == compact)
        });

        if let Some((level, _)) = found {
            return Ok(*level);
        }

        let hint = match ActivityLevel::suggest(s) {
            Some(level) => format!(" (did you mean '{}'?)", level.label()),
            None => String::new(),
        };
        Err(NutriError::InvalidInput(format!(
            "Unrecognized activity level '{}'{}",
            s.trim(),
            hint
        )))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biometric inputs for one health computation. Not retained after use.
#[derive(Debug, Clone, Serialize)]
pub struct BiometricProfile {
    pub sex: Sex,
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

impl BiometricProfile {
    pub fn new(
        sex: Sex,
        age_years: u32,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            sex,
            age_years,
            weight_kg,
            height_cm,
            activity,
        }
    }

    /// Reject values the formulas cannot take: height must be finite and
    /// positive, weight finite and not negative.
    pub fn validate(&self) -> Result<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(NutriError::InvalidInput(format!(
                "Height must be greater than 0 cm, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg < 0.0 {
            return Err(NutriError::InvalidInput(format!(
                "Weight must not be negative, got {} kg",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

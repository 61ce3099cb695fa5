use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use dialoguer::{Input, Select};

use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, BiometricProfile, Sex};

/// Accepted ranges and defaults for interactive entry.
pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;
pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Profile fields already known (e.g. from flags); the rest get prompted.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub sex: Option<Sex>,
    pub age_years: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity: Option<ActivityLevel>,
}

impl PartialProfile {
    /// The full profile, if every field is present.
    pub fn complete(&self) -> Option<BiometricProfile> {
        Some(BiometricProfile::new(
            self.sex?,
            self.age_years?,
            self.weight_kg?,
            self.height_cm?,
            self.activity?,
        ))
    }
}

/// Parse a number typed by the user and check it against an allowed range.
pub fn parse_in_range<T>(input: &str, range: &RangeInclusive<T>, what: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
{
    let value: T = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number for {}", what)))?;

    if !range.contains(&value) {
        return Err(NutriError::InvalidInput(format!(
            "{} must be between {} and {}",
            what,
            range.start(),
            range.end()
        )));
    }

    Ok(value)
}

fn prompt_number<T>(prompt: &str, default: T, range: &RangeInclusive<T>, what: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Display,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_in_range(&input, range, what)
}

/// Prompt for sex.
pub fn prompt_sex() -> Result<Sex> {
    let options = [Sex::Male.label(), Sex::Female.label()];
    let selection = Select::new()
        .with_prompt("Sexo")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_number("Edad (años)", DEFAULT_AGE, &AGE_RANGE, "Age")
}

/// Prompt for height in centimeters.
pub fn prompt_height() -> Result<f64> {
    prompt_number("Altura (cm)", DEFAULT_HEIGHT_CM, &HEIGHT_RANGE_CM, "Height")
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    prompt_number("Peso (kg)", DEFAULT_WEIGHT_KG, &WEIGHT_RANGE_KG, "Weight")
}

/// Prompt for activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} (x{})", level.label(), level.factor()))
        .collect();

    let selection = Select::new()
        .with_prompt("Nivel de actividad física")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or(ActivityLevel::Sedentary))
}

/// Fill in whatever the caller did not supply.
pub fn collect_profile(known: PartialProfile) -> Result<BiometricProfile> {
    if let Some(profile) = known.complete() {
        return Ok(profile);
    }

    let sex = match known.sex {
        Some(s) => s,
        None => prompt_sex()?,
    };
    let age_years = match known.age_years {
        Some(a) => a,
        None => prompt_age()?,
    };
    let height_cm = match known.height_cm {
        Some(h) => h,
        None => prompt_height()?,
    };
    let weight_kg = match known.weight_kg {
        Some(w) => w,
        None => prompt_weight()?,
    };
    let activity = match known.activity {
        Some(a) => a,
        None => prompt_activity()?,
    };

    Ok(BiometricProfile::new(
        sex, age_years, weight_kg, height_cm, activity,
    ))
}

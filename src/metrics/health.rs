use tracing::{debug, warn};

use crate::error::{NutriError, Result};
use crate::metrics::constants::*;
use crate::models::{ActivityLevel, BiometricProfile, BmiCategory, HealthResult, Sex};

/// Basal metabolic rate (Mifflin–St Jeor), in kcal/day.
///
/// `10·kg + 6.25·cm − 5·age + 5` for men, `… − 161` for women.
pub fn compute_bmr(sex: Sex, age_years: u32, weight_kg: f64, height_cm: f64) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm + BMR_AGE_COEF * age_years as f64
        + offset
}

/// Daily calorie target: BMR scaled by the activity factor, truncated.
///
/// Negative products (only possible for nonsensical inputs) become 0.
pub fn recommended_calories(bmr: f64, activity: ActivityLevel) -> u32 {
    let kcal = (bmr * activity.factor()).trunc();
    if kcal <= 0.0 { 0 } else { kcal as u32 }
}

/// Body mass index, `kg / m²`.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "Height must be greater than 0 cm, got {}",
            height_cm
        )));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify a BMI value. Each band includes its lower bound.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute BMI, its category, BMR and the daily calorie target.
///
/// Fails with [`NutriError::InvalidInput`] on non-positive height or weight;
/// no partial result is produced.
pub fn compute_health_metrics(profile: &BiometricProfile) -> Result<HealthResult> {
    if let Err(e) = profile.validate() {
        warn!(error = %e, "rejected biometric profile");
        return Err(e);
    }

    let bmi = compute_bmi(profile.weight_kg, profile.height_cm)?;
    let bmi_category = classify_bmi(bmi);
    let bmr = compute_bmr(
        profile.sex,
        profile.age_years,
        profile.weight_kg,
        profile.height_cm,
    );
    let recommended_calories = recommended_calories(bmr, profile.activity);

    debug!(
        bmi,
        ?bmi_category,
        bmr,
        factor = profile.activity.factor(),
        recommended_calories,
        "health metrics"
    );

    Ok(HealthResult {
        bmi,
        bmi_category,
        bmr,
        recommended_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        // 700 + 1062.5 - 125 + 5
        assert!((compute_bmr(Sex::Male, 25, 70.0, 170.0) - 1642.5).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_sex_difference() {
        let male = compute_bmr(Sex::Male, 40, 82.5, 181.0);
        let female = compute_bmr(Sex::Female, 40, 82.5, 181.0);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_recommended_calories_truncates() {
        // 1642.5 * 1.55 = 2545.875
        assert_eq!(recommended_calories(1642.5, ActivityLevel::Moderate), 2545);
        assert_eq!(recommended_calories(1000.0, ActivityLevel::Sedentary), 1200);
        assert_eq!(recommended_calories(-50.0, ActivityLevel::Active), 0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(24.99), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(29.99), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(55.0), BmiCategory::Obese);
    }

    #[test]
    fn test_compute_bmi_rejects_zero_height() {
        assert!(matches!(
            compute_bmi(70.0, 0.0),
            Err(NutriError::InvalidInput(_))
        ));
        assert!(compute_bmi(70.0, -170.0).is_err());
    }
}

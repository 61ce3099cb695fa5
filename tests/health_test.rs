use assert_float_eq::*;

use nutri_assistant_rs::metrics::{
    BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN, classify_bmi, compute_bmr,
};
use nutri_assistant_rs::{
    ActivityLevel, BiometricProfile, BmiCategory, NutriError, Sex, compute_health_metrics,
};

fn profile(sex: Sex, age: u32, weight: f64, height: f64, activity: ActivityLevel) -> BiometricProfile {
    BiometricProfile::new(sex, age, weight, height, activity)
}

#[test]
fn test_male_moderate_reference() {
    let p = profile(Sex::Male, 25, 70.0, 170.0, ActivityLevel::Moderate);
    let result = compute_health_metrics(&p).unwrap();

    assert_float_absolute_eq!(result.bmr, 1642.5, 1e-9);
    assert_eq!(result.recommended_calories, 2545);
    assert_float_absolute_eq!(result.bmi, 24.2215, 1e-4);
    assert_eq!(result.bmi_category, BmiCategory::Normal);
}

#[test]
fn test_female_sedentary() {
    // 600 + 1031.25 - 150 - 161 = 1320.25; * 1.2 = 1584.3
    let p = profile(Sex::Female, 30, 60.0, 165.0, ActivityLevel::Sedentary);
    let result = compute_health_metrics(&p).unwrap();

    assert_float_absolute_eq!(result.bmr, 1320.25, 1e-9);
    assert_eq!(result.recommended_calories, 1584);
}

#[test]
fn test_activity_factor_table() {
    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
    for (level, factor) in ActivityLevel::ALL.iter().zip(expected) {
        assert_float_absolute_eq!(level.factor(), factor, 1e-12);
    }
}

#[test]
fn test_calories_scale_with_activity() {
    let kcal: Vec<u32> = ActivityLevel::ALL
        .iter()
        .map(|&level| {
            compute_health_metrics(&profile(Sex::Female, 40, 68.0, 160.0, level))
                .unwrap()
                .recommended_calories
        })
        .collect();

    assert!(kcal.windows(2).all(|w| w[0] < w[1]), "{:?}", kcal);
}

#[test]
fn test_male_female_bmr_gap() {
    for (age, weight, height) in [(18, 50.0, 150.0), (45, 95.5, 188.0), (80, 61.0, 158.5)] {
        let male = compute_bmr(Sex::Male, age, weight, height);
        let female = compute_bmr(Sex::Female, age, weight, height);
        assert_float_absolute_eq!(male - female, 166.0, 1e-9);
    }
}

#[test]
fn test_zero_height_is_invalid() {
    let p = profile(Sex::Male, 25, 70.0, 0.0, ActivityLevel::Moderate);
    assert!(matches!(
        compute_health_metrics(&p),
        Err(NutriError::InvalidInput(_))
    ));
}

#[test]
fn test_negative_weight_is_invalid() {
    let p = profile(Sex::Female, 25, -70.0, 170.0, ActivityLevel::Active);
    assert!(matches!(
        compute_health_metrics(&p),
        Err(NutriError::InvalidInput(_))
    ));
}

#[test]
fn test_zero_weight_is_underweight() {
    let p = profile(Sex::Male, 25, 0.0, 170.0, ActivityLevel::Moderate);
    let result = compute_health_metrics(&p).unwrap();
    assert_float_absolute_eq!(result.bmi, 0.0, 1e-12);
    assert_eq!(result.bmi_category, BmiCategory::Underweight);
}

#[test]
fn test_unknown_activity_is_invalid() {
    assert!(matches!(
        "couch potato".parse::<ActivityLevel>(),
        Err(NutriError::InvalidInput(_))
    ));
}

#[test]
fn test_bmi_categories_partition() {
    // Walk [0, 60) in small steps: categories never go backwards and each
    // threshold is the first value of the next band.
    let mut prev = BmiCategory::Underweight;
    let order = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];
    let rank = |c: BmiCategory| order.iter().position(|&o| o == c).unwrap();

    for i in 0..6000 {
        let bmi = i as f64 * 0.01;
        let cat = classify_bmi(bmi);
        assert!(rank(cat) >= rank(prev), "bmi {} went from {:?} to {:?}", bmi, prev, cat);
        prev = cat;
    }

    assert_eq!(classify_bmi(BMI_NORMAL_MIN), BmiCategory::Normal);
    assert_eq!(classify_bmi(BMI_OVERWEIGHT_MIN), BmiCategory::Overweight);
    assert_eq!(classify_bmi(BMI_OBESE_MIN), BmiCategory::Obese);
    assert_eq!(classify_bmi(f64::MAX), BmiCategory::Obese);
}

#[test]
fn test_category_depends_only_on_bmi() {
    // Same BMI (~22.86) reached with different bodies and activity levels.
    let a = compute_health_metrics(&profile(Sex::Male, 20, 70.0, 175.0, ActivityLevel::Active)).unwrap();
    let b = compute_health_metrics(&profile(Sex::Female, 70, 70.0, 175.0, ActivityLevel::Sedentary))
        .unwrap();
    assert_float_absolute_eq!(a.bmi, b.bmi, 1e-12);
    assert_eq!(a.bmi_category, b.bmi_category);
}

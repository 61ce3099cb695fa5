use crate::models::{
    BiometricProfile, HealthResult, MacroBreakdown, MacroExtraction, MacroKind,
};

/// Width of a full (100% share) bar.
const BAR_WIDTH: usize = 40;

/// Render the macro split as a labeled text bar chart.
///
/// Bars show each category's share of the total, like slices of a pie.
/// `fell_back` adds a note that the split is the default, not found values.
pub fn format_macro_chart(macros: &MacroBreakdown, fell_back: bool) -> String {
    let shares = macros.shares();
    let label_width = MacroKind::ALL
        .iter()
        .map(|k| k.label().chars().count())
        .max()
        .unwrap_or(10);

    let mut out = String::new();
    for (kind, share) in MacroKind::ALL.iter().zip(shares) {
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        let pad = label_width - kind.label().chars().count();
        out.push_str(&format!(
            "{}{} |{:<width$}| {:>5.1}%  ({}%)\n",
            kind.label(),
            " ".repeat(pad),
            "#".repeat(filled.min(BAR_WIDTH)),
            share * 100.0,
            macros.get(*kind),
            width = BAR_WIDTH
        ));
    }

    if fell_back {
        out.push_str("(no percentages found in the text; showing the default split)\n");
    }

    out
}

/// Render BMI and calorie target as short summary lines.
pub fn format_health_result(result: &HealthResult) -> String {
    format!(
        "BMI: {:.2} -> {} ({})\nBMR: {:.1} kcal/day\nRecommended calories: {} kcal/day\n",
        result.bmi,
        result.bmi_category.label(),
        result.bmi_category.label_es(),
        result.bmr,
        result.recommended_calories
    )
}

/// Display the macro chart.
pub fn display_macro_chart(extraction: &MacroExtraction) {
    println!();
    println!("=== Macro Split ===");
    println!();
    print!(
        "{}",
        format_macro_chart(&extraction.macros, extraction.fell_back)
    );
    println!();
}

/// Display health metrics for a profile.
pub fn display_health_result(profile: &BiometricProfile, result: &HealthResult) {
    println!();
    println!("=== Health Metrics ===");
    println!();
    println!(
        "{}, {} years, {} kg, {} cm, activity: {} (x{})",
        profile.sex,
        profile.age_years,
        profile.weight_kg,
        profile.height_cm,
        profile.activity,
        profile.activity.factor()
    );
    println!();
    print!("{}", format_health_result(result));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BmiCategory;

    #[test]
    fn test_chart_lines() {
        let chart = format_macro_chart(&MacroBreakdown::new(55, 20, 25), false);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Carbohidratos |"));
        assert!(lines[0].ends_with(" 55.0%  (55%)"));
        assert!(lines[1].starts_with("Proteínas"));
        assert!(lines[2].contains(" 25.0%"));
    }

    #[test]
    fn test_chart_notes_default() {
        let chart = format_macro_chart(&MacroBreakdown::DEFAULT, true);
        assert!(chart.contains("default split"));
    }

    #[test]
    fn test_chart_stated_default_values_have_no_note() {
        let chart = format_macro_chart(&MacroBreakdown::DEFAULT, false);
        assert_eq!(chart.lines().count(), 3);
        assert!(!chart.contains("default split"));
    }

    #[test]
    fn test_chart_share_of_inconsistent_sum() {
        let chart = format_macro_chart(&MacroBreakdown::new(40, 0, 0), false);
        assert!(chart.lines().next().unwrap().contains("100.0%  (40%)"));
    }

    #[test]
    fn test_health_text() {
        let result = HealthResult {
            bmi: 24.221453,
            bmi_category: BmiCategory::Normal,
            bmr: 1642.5,
            recommended_calories: 2545,
        };
        let text = format_health_result(&result);
        assert!(text.contains("BMI: 24.22 -> Normal (Normal)"));
        assert!(text.contains("Recommended calories: 2545 kcal/day"));
    }
}

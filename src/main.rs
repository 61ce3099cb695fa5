use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use nutri_assistant_rs::assistant::{AnalysisKind, recipe_from_ingredients_prompt};
use nutri_assistant_rs::cli::{Cli, Command, OutputFormat};
use nutri_assistant_rs::error::Result;
use nutri_assistant_rs::interface::{
    PartialProfile, collect_profile, display_health_result, display_macro_chart, read_narrative,
};
use nutri_assistant_rs::metrics::{compute_health_metrics, extract_macros_with_source};
use nutri_assistant_rs::models::{ActivityLevel, Sex};

fn main() {
    // Logs go to stderr so stdout stays clean for text/JSON output.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Health {
            sex,
            age,
            weight,
            height,
            activity,
        } => cmd_health(
            PartialProfile {
                sex: sex.as_deref().map(str::parse::<Sex>).transpose()?,
                age_years: age,
                weight_kg: weight,
                height_cm: height,
                activity: activity
                    .as_deref()
                    .map(str::parse::<ActivityLevel>)
                    .transpose()?,
            },
            format,
        ),
        Command::Macros { file } => cmd_macros(file.as_deref(), format),
        Command::Prompt { kind, ingredients } => cmd_prompt(kind, ingredients.as_deref(), format),
    }
}

/// Compute and show health metrics.
fn cmd_health(known: PartialProfile, format: OutputFormat) -> Result<()> {
    let profile = collect_profile(known)?;
    let result = compute_health_metrics(&profile)?;
    info!(bmi = result.bmi, kcal = result.recommended_calories, "computed health metrics");

    match format {
        OutputFormat::Text => display_health_result(&profile, &result),
        OutputFormat::Json => {
            let out = json!({ "profile": profile, "result": result });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

/// Extract and chart the macro split of a narrative.
fn cmd_macros(file: Option<&std::path::Path>, format: OutputFormat) -> Result<()> {
    let narrative = read_narrative(file)?;
    let extraction = extract_macros_with_source(&narrative);
    info!(macros = %extraction.macros, fell_back = extraction.fell_back, "extracted macro split");

    match format {
        OutputFormat::Text => display_macro_chart(&extraction),
        OutputFormat::Json => {
            let out = json!({
                "macros": extraction.macros,
                "shares": extraction.macros.shares(),
                "fell_back": extraction.fell_back,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

/// Print a model prompt.
fn cmd_prompt(
    kind: Option<AnalysisKind>,
    ingredients: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (name, prompt) = match ingredients {
        Some(list) => (
            "recipe_from_ingredients".to_string(),
            recipe_from_ingredients_prompt(list)?,
        ),
        None => {
            let kind = kind.unwrap_or(AnalysisKind::Nutrition);
            (format!("{:?}", kind), kind.prompt().to_string())
        }
    };

    match format {
        OutputFormat::Text => println!("{}", prompt),
        OutputFormat::Json => {
            let out = json!({ "kind": name, "prompt": prompt });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

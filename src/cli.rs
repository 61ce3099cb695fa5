use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::assistant::AnalysisKind;

/// Nutri Assistant — macro split extraction and BMI/calorie metrics for a nutrition chat assistant.
#[derive(Parser, Debug)]
#[command(name = "nutri_assistant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute BMI, its category and the daily calorie target.
    ///
    /// Missing values are asked for interactively.
    Health {
        /// Sex: male/hombre or female/mujer.
        #[arg(long)]
        sex: Option<String>,

        /// Age in years.
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kilograms.
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Height in centimeters.
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Activity level, e.g. "Moderado" or "very active".
        #[arg(long)]
        activity: Option<String>,
    },

    /// Extract the carbs/protein/fat split from a model's nutrition answer.
    Macros {
        /// File holding the narrative (reads stdin if omitted).
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the prompt sent to the model for a dish analysis.
    Prompt {
        /// Which analysis to print.
        #[arg(value_enum, required_unless_present = "ingredients")]
        kind: Option<AnalysisKind>,

        /// Comma-separated ingredients; prints the recipe-creation prompt instead.
        #[arg(long, conflicts_with = "kind")]
        ingredients: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Health {
            sex: None,
            age: None,
            weight: None,
            height: None,
            activity: None,
        }
    }
}

pub mod generator;
pub mod prompts;

pub use generator::{ImagePayload, NutritionAnalysis, TextGenerator, analyze_dish, analyze_nutrition};
pub use prompts::{AnalysisKind, recipe_from_ingredients_prompt};

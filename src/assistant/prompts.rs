use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NutriError, Result};

/// The fixed questions the assistant can ask about a dish photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Dish name, cultural origin and main ingredients.
    DishIdentity,
    /// Step-by-step cooking instructions.
    Recipe,
    /// Nutrition tables plus the carbs/protein/fat percentage split.
    Nutrition,
    /// Vegetarian and non-vegetarian dishes of similar value.
    Alternatives,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::DishIdentity,
        AnalysisKind::Recipe,
        AnalysisKind::Nutrition,
        AnalysisKind::Alternatives,
    ];

    /// Prompt sent to the model alongside the image.
    pub fn prompt(&self) -> &'static str {
        match self {
            AnalysisKind::DishIdentity => {
                "Analiza la imagen cargada del platillo:\n\
                 1. Nombre del platillo y su esencia culinaria.\n\
                 2. Origen cultural o histórico.\n\
                 3. Ingredientes principales."
            }
            AnalysisKind::Recipe => {
                "Como chef experto, proporciona receta paso a paso:\n\
                 1. Selección de ingredientes.\n\
                 2. Preparación (lavado, corte).\n\
                 3. Cocción detallada.\n\
                 4. Consejos del chef."
            }
            AnalysisKind::Nutrition => {
                "Como asesor nutricional:\n\
                 1. Muestra una tabla con calorías, proteínas, grasas y carbohidratos.\n\
                 2. Otra tabla por ingrediente.\n\
                 3. Indica porcentajes de carbohidratos, proteínas y grasas."
            }
            AnalysisKind::Alternatives => {
                "Sugiere:\n\
                 1. 2 platillos vegetarianos con valor nutricional similar.\n\
                 2. 2 platillos no vegetarianos equivalentes."
            }
        }
    }

    /// Whether the user's free-text instruction is forwarded to the model.
    ///
    /// The nutrition prompt is always sent bare so its answer stays parseable.
    pub fn accepts_instruction(&self) -> bool {
        !matches!(self, AnalysisKind::Nutrition)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::DishIdentity => "Nombre e Ingredientes",
            AnalysisKind::Recipe => "Cómo cocinarlo",
            AnalysisKind::Nutrition => "Platómetro",
            AnalysisKind::Alternatives => "Alternativas similares",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnalysisKind {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "dish_identity" | "identity" => Ok(AnalysisKind::DishIdentity),
            "recipe" => Ok(AnalysisKind::Recipe),
            "nutrition" => Ok(AnalysisKind::Nutrition),
            "alternatives" => Ok(AnalysisKind::Alternatives),
            other => Err(NutriError::InvalidInput(format!(
                "Unknown analysis kind '{}'",
                other
            ))),
        }
    }
}

/// Build the "creative chef" prompt for a comma-separated ingredient list.
pub fn recipe_from_ingredients_prompt(ingredients: &str) -> Result<String> {
    let items: Vec<&str> = ingredients
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        return Err(NutriError::InvalidInput(
            "At least one ingredient is required".to_string(),
        ));
    }

    Ok(format!(
        "Actúa como chef creativo. Tienes los siguientes ingredientes: {}.\n\
         Crea una receta completa, indicando:\n\
         1. Nombre del platillo.\n\
         2. Preparación paso a paso.\n\
         3. Tiempo aproximado.\n\
         4. Tips adicionales.",
        items.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_prompt_asks_for_percentages() {
        let p = AnalysisKind::Nutrition.prompt();
        assert!(p.contains("porcentajes de carbohidratos, proteínas y grasas"));
        assert!(!AnalysisKind::Nutrition.accepts_instruction());
        assert!(AnalysisKind::Recipe.accepts_instruction());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "dish-identity".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::DishIdentity
        );
        assert!("dessert".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn test_recipe_prompt_cleans_list() {
        let p = recipe_from_ingredients_prompt(" tomate, , huevo ,cebolla ").unwrap();
        assert!(p.contains("ingredientes: tomate, huevo, cebolla."));
    }

    #[test]
    fn test_recipe_prompt_empty() {
        assert!(recipe_from_ingredients_prompt(" , ").is_err());
        assert!(recipe_from_ingredients_prompt("").is_err());
    }
}

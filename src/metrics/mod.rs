pub mod constants;
pub mod extractor;
pub mod health;

pub use constants::*;
pub use extractor::{extract_macros, extract_macros_with_source, find_macro};
pub use health::{
    classify_bmi, compute_bmi, compute_bmr, compute_health_metrics, recommended_calories,
};

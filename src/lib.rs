pub mod assistant;
pub mod cli;
pub mod error;
pub mod interface;
pub mod metrics;
pub mod models;

pub use error::{NutriError, Result};
pub use metrics::{compute_health_metrics, extract_macros};
pub use models::{
    ActivityLevel, BiometricProfile, BmiCategory, HealthResult, MacroBreakdown, MacroKind, Sex,
};

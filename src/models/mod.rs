mod health;
mod macros;
mod profile;

pub use health::{BmiCategory, HealthResult};
pub use macros::{MacroBreakdown, MacroExtraction, MacroKind};
pub use profile::{ActivityLevel, BiometricProfile, Sex};

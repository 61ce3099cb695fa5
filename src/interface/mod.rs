pub mod input;
pub mod prompts;
pub mod render;

pub use input::read_narrative;
pub use prompts::{
    PartialProfile, collect_profile, parse_in_range, prompt_activity, prompt_age, prompt_height,
    prompt_sex, prompt_weight,
};
pub use render::{
    display_health_result, display_macro_chart, format_health_result, format_macro_chart,
};

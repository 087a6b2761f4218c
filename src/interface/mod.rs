pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_ingredient_matches, parse_date, prompt_date, prompt_excluded_ingredients,
    prompt_max_calories, prompt_meals_per_day, prompt_user_weight, prompt_yes_no,
};
pub use render::{display_diet_plan, display_macro_targets, display_meal_catalog};

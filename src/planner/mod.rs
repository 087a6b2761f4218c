pub mod allocation;
pub mod calculations;
pub mod constants;
pub mod partition;
pub mod ranking;
pub mod schedule;

pub use allocation::generate_daily_plan;
pub use calculations::{NutritionBudget, calculate_macro_targets, nutritional_distance};
pub use constants::*;
pub use partition::{MealsByType, group_meals_by_type};
pub use ranking::{Pick, score_candidate, select_best_fit};
pub use schedule::{PlanRequest, generate_diet_plan, generate_diet_plan_with_usage};

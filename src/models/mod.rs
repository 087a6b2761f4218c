pub mod meal;
pub mod plan;

pub use meal::{Meal, MealType};
pub use plan::{DailyPlan, MacroTargets, SelectedMeal};

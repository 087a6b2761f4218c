mod persistence;
mod usage;

pub use persistence::{load_meals, save_plans_json, write_plans_csv};
pub use usage::IngredientUsage;

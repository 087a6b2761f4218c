mod filter;

pub use filter::MealFilter;

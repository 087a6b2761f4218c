use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Meal, MealType};

/// Daily macro-nutrient targets in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// A catalog meal scaled by a whole number of portions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedMeal {
    pub id: i64,
    pub name: String,
    pub meal_type: MealType,
    pub ingredients: Vec<String>,
    /// Number of portions, always at least 1.
    pub portions: u32,
    pub calories: u32,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl SelectedMeal {
    /// Scale a catalog meal by `portions` (clamped to at least 1).
    pub fn from_meal(meal: &Meal, portions: u32) -> Self {
        let portions = portions.max(1);
        let factor = portions as f64;
        Self {
            id: meal.id,
            name: meal.name.clone(),
            meal_type: meal.meal_type,
            ingredients: meal.ingredients.clone(),
            portions,
            calories: meal.calories * portions,
            protein: meal.protein_g() * factor,
            fat: meal.fat_g() * factor,
            carbs: meal.carbs_g() * factor,
        }
    }
}

/// The meals allocated to one date, with totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub meals: Vec<SelectedMeal>,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_fat: f64,
    pub total_carbs: f64,
}

impl DailyPlan {
    /// Build a plan for `date`, summing totals from the selected meals.
    pub fn new(date: NaiveDate, meals: Vec<SelectedMeal>) -> Self {
        let total_calories = meals.iter().map(|m| m.calories).sum();
        let total_protein = meals.iter().map(|m| m.protein).sum();
        let total_fat = meals.iter().map(|m| m.fat).sum();
        let total_carbs = meals.iter().map(|m| m.carbs).sum();
        Self {
            date,
            meals,
            total_calories,
            total_protein,
            total_fat,
            total_carbs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            id: 1,
            name: "Porridge".to_string(),
            ingredients: vec!["oats".to_string(), "milk".to_string()],
            calories: 250,
            protein: Some(8.0),
            fat: Some(5.5),
            carbs: None,
            meal_type: MealType::Breakfast,
            allergens: Default::default(),
            base_grams: Some(300.0),
        }
    }

    #[test]
    fn test_selected_meal_scales_linearly() {
        let selected = SelectedMeal::from_meal(&sample_meal(), 3);
        assert_eq!(selected.portions, 3);
        assert_eq!(selected.calories, 750);
        assert!((selected.protein - 24.0).abs() < 1e-9);
        assert!((selected.fat - 16.5).abs() < 1e-9);
        assert_eq!(selected.carbs, 0.0);
    }

    #[test]
    fn test_selected_meal_portions_at_least_one() {
        let selected = SelectedMeal::from_meal(&sample_meal(), 0);
        assert_eq!(selected.portions, 1);
        assert_eq!(selected.calories, 250);
    }

    #[test]
    fn test_daily_plan_totals() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let meals = vec![
            SelectedMeal::from_meal(&sample_meal(), 1),
            SelectedMeal::from_meal(&sample_meal(), 2),
        ];
        let plan = DailyPlan::new(date, meals);
        assert_eq!(plan.total_calories, 750);
        assert!((plan.total_protein - 24.0).abs() < 1e-9);
        assert!(!plan.is_empty());

        let empty = DailyPlan::new(date, Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.total_calories, 0);
        assert_eq!(empty.total_fat, 0.0);
    }
}

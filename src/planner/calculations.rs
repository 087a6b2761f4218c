use crate::models::{MacroTargets, Meal};
use crate::planner::constants::*;

/// Derive daily macro targets from a calorie budget.
///
/// Splits calories 20/30/50 between protein, fat and carbs, then converts to
/// grams. `user_weight` is accepted for forward compatibility and does not
/// affect the result. Negative budgets produce negative targets.
pub fn calculate_macro_targets(_user_weight: f64, total_calories: f64) -> MacroTargets {
    MacroTargets {
        protein_g: total_calories * PROTEIN_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN,
        fat_g: total_calories * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT,
        carbs_g: total_calories * CARBS_CALORIE_SHARE / KCAL_PER_GRAM_CARBS,
    }
}

/// Remaining calorie and macro budget for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionBudget {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutritionBudget {
    pub fn new(calories: f64, targets: &MacroTargets) -> Self {
        Self {
            calories,
            protein: targets.protein_g,
            fat: targets.fat_g,
            carbs: targets.carbs_g,
        }
    }

    /// Subtract `portions` of a meal from every component.
    pub fn consume(&mut self, meal: &Meal, portions: u32) {
        let factor = portions as f64;
        self.calories -= meal.calories as f64 * factor;
        self.protein -= meal.protein_g() * factor;
        self.fat -= meal.fat_g() * factor;
        self.carbs -= meal.carbs_g() * factor;
    }
}

/// Sum of absolute differences between the budget and `portions` of a meal.
pub fn nutritional_distance(budget: &NutritionBudget, meal: &Meal, portions: u32) -> f64 {
    let factor = portions as f64;
    (budget.calories - meal.calories as f64 * factor).abs()
        + (budget.protein - meal.protein_g() * factor).abs()
        + (budget.fat - meal.fat_g() * factor).abs()
        + (budget.carbs - meal.carbs_g() * factor).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn sample_meal(cal: u32, p: Option<f64>, f: Option<f64>, c: Option<f64>) -> Meal {
        Meal {
            id: 1,
            name: "Test".to_string(),
            ingredients: vec![],
            calories: cal,
            protein: p,
            fat: f,
            carbs: c,
            meal_type: MealType::Lunch,
            allergens: Default::default(),
            base_grams: None,
        }
    }

    #[test]
    fn test_macro_targets_2000() {
        let targets = calculate_macro_targets(70.0, 2000.0);
        assert!((targets.protein_g - 100.0).abs() < 1e-9);
        assert!((targets.fat_g - 600.0 / 9.0).abs() < 1e-9);
        assert!((targets.carbs_g - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_targets_ignore_weight() {
        let light = calculate_macro_targets(50.0, 1800.0);
        let heavy = calculate_macro_targets(120.0, 1800.0);
        assert_eq!(light, heavy);
    }

    #[test]
    fn test_macro_targets_negative_propagates() {
        let targets = calculate_macro_targets(70.0, -400.0);
        assert!(targets.protein_g < 0.0);
        assert!(targets.fat_g < 0.0);
        assert!(targets.carbs_g < 0.0);
    }

    #[test]
    fn test_distance_exact_match_is_zero() {
        let meal = sample_meal(300, Some(20.0), Some(10.0), Some(30.0));
        let budget = NutritionBudget {
            calories: 600.0,
            protein: 40.0,
            fat: 20.0,
            carbs: 60.0,
        };
        assert!(nutritional_distance(&budget, &meal, 2).abs() < 1e-9);
        assert!((nutritional_distance(&budget, &meal, 1) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_missing_macros_count_as_zero() {
        let meal = sample_meal(100, None, None, None);
        let budget = NutritionBudget {
            calories: 100.0,
            protein: 5.0,
            fat: 5.0,
            carbs: 5.0,
        };
        assert!((nutritional_distance(&budget, &meal, 1) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_consume() {
        let meal = sample_meal(200, Some(10.0), Some(5.0), None);
        let targets = calculate_macro_targets(70.0, 1000.0);
        let mut budget = NutritionBudget::new(1000.0, &targets);
        budget.consume(&meal, 2);
        assert!((budget.calories - 600.0).abs() < 1e-9);
        assert!((budget.protein - 30.0).abs() < 1e-9);
        assert!((budget.carbs - 125.0).abs() < 1e-9);
    }
}

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{DailyPlan, MacroTargets, Meal, SelectedMeal};
use crate::planner::calculations::NutritionBudget;
use crate::planner::constants::slot_layout;
use crate::planner::partition::group_meals_by_type;
use crate::planner::ranking::select_best_fit;
use crate::state::IngredientUsage;

/// Allocate meals to every slot of one day.
///
/// Each slot gets `max_calories * share` and is filled greedily with best-fit
/// picks until its budget is spent or its candidates run out. Picks are scored
/// against what is left of the whole day's calorie and macro budget. Every
/// selected meal bumps the ingredient counts in `usage`, which the caller keeps
/// across days.
pub fn generate_daily_plan(
    date: NaiveDate,
    meals: &[Meal],
    meals_per_day: u32,
    max_calories: f64,
    targets: &MacroTargets,
    usage: &mut IngredientUsage,
) -> DailyPlan {
    let layout = slot_layout(meals_per_day);
    if layout.is_empty() {
        tracing::warn!(meals_per_day, %date, "no slot layout for meals per day");
        return DailyPlan::new(date, Vec::new());
    }

    let meals_by_type = group_meals_by_type(meals);
    let mut remaining = NutritionBudget::new(max_calories, targets);
    let mut used_ids: HashSet<i64> = HashSet::new();
    let mut selected = Vec::new();

    for &(slot, share) in layout {
        let mut pool = meals_by_type.get(&slot).cloned().unwrap_or_default();
        let mut slot_budget = max_calories * share;

        while slot_budget > 0.0 && !pool.is_empty() {
            let Some(pick) = select_best_fit(&pool, &remaining, slot_budget, &used_ids, usage)
            else {
                break;
            };

            tracing::debug!(
                %slot,
                meal_id = pick.meal.id,
                portions = pick.portions,
                score = pick.score,
                "selected meal"
            );

            slot_budget -= pick.calories();
            remaining.consume(pick.meal, pick.portions);

            let scaled = SelectedMeal::from_meal(pick.meal, pick.portions);
            usage.record(&scaled.ingredients);
            used_ids.insert(pick.meal.id);
            pool.retain(|m| m.id != pick.meal.id);
            selected.push(scaled);
        }

        tracing::debug!(%slot, leftover = slot_budget, "slot done");
    }

    DailyPlan::new(date, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use crate::planner::calculations::calculate_macro_targets;

    fn meal(id: i64, meal_type: MealType, cal: u32, ingredients: &[&str]) -> Meal {
        Meal {
            id,
            name: format!("Meal {}", id),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            calories: cal,
            protein: Some(cal as f64 * 0.05),
            fat: Some(cal as f64 * 0.033),
            carbs: Some(cal as f64 * 0.125),
            meal_type,
            allergens: Default::default(),
            base_grams: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_single_dinner_layout() {
        let meals = vec![
            meal(1, MealType::Breakfast, 400, &["oats"]),
            meal(2, MealType::Dinner, 800, &["beef"]),
        ];
        let targets = calculate_macro_targets(70.0, 800.0);
        let mut usage = IngredientUsage::new();

        let plan = generate_daily_plan(date(), &meals, 1, 800.0, &targets, &mut usage);
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].id, 2);
        assert_eq!(plan.meals[0].meal_type, MealType::Dinner);
        assert_eq!(plan.total_calories, 800);
        assert_eq!(usage.count("beef"), 1);
        assert_eq!(usage.count("oats"), 0);
    }

    #[test]
    fn test_slot_fills_with_several_meals() {
        let meals = vec![
            meal(1, MealType::Dinner, 300, &["rice"]),
            meal(2, MealType::Dinner, 250, &["beans"]),
            meal(3, MealType::Dinner, 200, &["corn"]),
        ];
        let targets = calculate_macro_targets(70.0, 1000.0);
        let mut usage = IngredientUsage::new();

        let plan = generate_daily_plan(date(), &meals, 1, 1000.0, &targets, &mut usage);
        assert!(plan.total_calories <= 1000);
        let ids: HashSet<i64> = plan.meals.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), plan.meals.len());
    }

    #[test]
    fn test_unknown_layout_gives_empty_plan() {
        let meals = vec![meal(1, MealType::Dinner, 500, &["fish"])];
        let targets = calculate_macro_targets(70.0, 2000.0);
        let mut usage = IngredientUsage::new();

        for n in [0, 6, 42] {
            let plan = generate_daily_plan(date(), &meals, n, 2000.0, &targets, &mut usage);
            assert!(plan.is_empty());
            assert_eq!(plan.total_calories, 0);
            assert_eq!(plan.total_protein, 0.0);
        }
        assert!(usage.is_empty());
    }

    #[test]
    fn test_missing_slot_type_is_skipped() {
        // Three meals per day has no dinner slot.
        let meals = vec![meal(1, MealType::Dinner, 500, &["fish"])];
        let targets = calculate_macro_targets(70.0, 2000.0);
        let mut usage = IngredientUsage::new();

        let plan = generate_daily_plan(date(), &meals, 3, 2000.0, &targets, &mut usage);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_non_positive_budget_selects_nothing() {
        let meals = vec![meal(1, MealType::Dinner, 100, &["tofu"])];
        let targets = calculate_macro_targets(70.0, -500.0);
        let mut usage = IngredientUsage::new();

        let plan = generate_daily_plan(date(), &meals, 1, -500.0, &targets, &mut usage);
        assert!(plan.is_empty());
    }
}

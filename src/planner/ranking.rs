use std::collections::HashSet;

use crate::models::Meal;
use crate::planner::calculations::{NutritionBudget, nutritional_distance};
use crate::planner::constants::{MAX_PORTIONS, MIN_PORTIONS};
use crate::state::IngredientUsage;

/// A chosen meal with its portion count and the score it won with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    pub meal: &'a Meal,
    pub portions: u32,
    pub score: f64,
}

impl Pick<'_> {
    /// Calories contributed by this pick.
    pub fn calories(&self) -> f64 {
        self.meal.calories as f64 * self.portions as f64
    }
}

/// Score `portions` of a meal against the remaining day budget.
///
/// Lower is better: nutritional distance plus the squared ingredient-usage
/// penalty of the meal.
pub fn score_candidate(
    budget: &NutritionBudget,
    meal: &Meal,
    portions: u32,
    usage: &IngredientUsage,
) -> f64 {
    nutritional_distance(budget, meal, portions) + usage.penalty(&meal.ingredients)
}

/// Choose the meal and portion count that best fits the remaining budget.
///
/// Meals already in `used_ids` are skipped. Portions are tried in increasing
/// order and stop at the first count whose calories exceed `calorie_ceiling`.
/// Ties keep the first candidate seen, so the result is deterministic for a
/// given pool order.
pub fn select_best_fit<'a>(
    pool: &[&'a Meal],
    budget: &NutritionBudget,
    calorie_ceiling: f64,
    used_ids: &HashSet<i64>,
    usage: &IngredientUsage,
) -> Option<Pick<'a>> {
    let mut best: Option<Pick<'a>> = None;

    for &meal in pool {
        if used_ids.contains(&meal.id) {
            continue;
        }

        let penalty = usage.penalty(&meal.ingredients);

        for portions in MIN_PORTIONS..=MAX_PORTIONS {
            if meal.calories as f64 * portions as f64 > calorie_ceiling {
                break;
            }

            let score = nutritional_distance(budget, meal, portions) + penalty;
            tracing::trace!(meal_id = meal.id, portions, score, "scored candidate");

            if best.is_none_or(|b| score < b.score) {
                best = Some(Pick {
                    meal,
                    portions,
                    score,
                });
            }
        }
    }

    best
}

use crate::models::Meal;

/// Constraints applied to the catalog before planning.
///
/// All name comparisons are case-insensitive. Empty lists impose nothing.
#[derive(Debug, Clone, Default)]
pub struct MealFilter {
    /// Drop meals tagged with any of these allergens.
    pub allergens: Vec<String>,
    /// Drop meals containing any of these ingredients.
    pub excluded_ingredients: Vec<String>,
    /// When non-empty, keep only meals containing at least one of these.
    pub preferred_ingredients: Vec<String>,
    /// Drop meals whose single-portion calories exceed this cap.
    pub max_meal_calories: Option<u32>,
}

impl MealFilter {
    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.allergens.is_empty()
            && self.excluded_ingredients.is_empty()
            && self.preferred_ingredients.is_empty()
            && self.max_meal_calories.is_none()
    }

    /// Check one meal against every constraint.
    pub fn accepts(&self, meal: &Meal) -> bool {
        if self.allergens.iter().any(|a| meal.has_allergen(a)) {
            return false;
        }

        if self
            .excluded_ingredients
            .iter()
            .any(|i| meal.contains_ingredient(i))
        {
            return false;
        }

        if !self.preferred_ingredients.is_empty()
            && !self
                .preferred_ingredients
                .iter()
                .any(|i| meal.contains_ingredient(i))
        {
            return false;
        }

        self.max_meal_calories
            .is_none_or(|cap| meal.calories <= cap)
    }

    /// Keep the accepted meals, in catalog order.
    pub fn apply(&self, meals: Vec<Meal>) -> Vec<Meal> {
        if self.is_empty() {
            return meals;
        }

        let before = meals.len();
        let kept: Vec<Meal> = meals.into_iter().filter(|m| self.accepts(m)).collect();
        tracing::debug!(before, after = kept.len(), "filtered catalog");
        kept
    }
}

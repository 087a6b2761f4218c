use std::collections::HashMap;

use crate::models::{Meal, MealType};

/// Catalog meals grouped by slot, each group in catalog order.
pub type MealsByType<'a> = HashMap<MealType, Vec<&'a Meal>>;

/// Group meals by their meal type, preserving first-seen order within a type.
pub fn group_meals_by_type(meals: &[Meal]) -> MealsByType<'_> {
    let mut groups: MealsByType = HashMap::new();
    for meal in meals {
        groups.entry(meal.meal_type).or_default().push(meal);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: i64, meal_type: MealType) -> Meal {
        Meal {
            id,
            name: format!("Meal {}", id),
            ingredients: vec![],
            calories: 100,
            protein: None,
            fat: None,
            carbs: None,
            meal_type,
            allergens: Default::default(),
            base_grams: None,
        }
    }

    #[test]
    fn test_groups_preserve_order() {
        let meals = vec![
            meal(3, MealType::Dinner),
            meal(1, MealType::Breakfast),
            meal(2, MealType::Dinner),
            meal(4, MealType::Default),
            meal(5, MealType::Breakfast),
        ];
        let groups = group_meals_by_type(&meals);

        let dinner: Vec<i64> = groups[&MealType::Dinner].iter().map(|m| m.id).collect();
        let breakfast: Vec<i64> = groups[&MealType::Breakfast].iter().map(|m| m.id).collect();
        assert_eq!(dinner, vec![3, 2]);
        assert_eq!(breakfast, vec![1, 5]);
        assert_eq!(groups[&MealType::Default].len(), 1);
        assert!(!groups.contains_key(&MealType::Lunch));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(group_meals_by_type(&[]).is_empty());
    }
}

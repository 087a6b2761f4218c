use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Meal-type slot a catalog meal belongs to.
///
/// Unset or unrecognized labels fall back to [`MealType::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    AfternoonSnack,
    EveningSnack,
    #[default]
    #[serde(other)]
    Default,
}

impl MealType {
    /// Parse a catalog label (case-insensitive, spaces and dashes allowed).
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "afternoon_snack" => MealType::AfternoonSnack,
            "evening_snack" => MealType::EveningSnack,
            _ => MealType::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::AfternoonSnack => "afternoon_snack",
            MealType::EveningSnack => "evening_snack",
            MealType::Default => "default",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn deserialize_meal_type<'de, D>(deserializer: D) -> Result<MealType, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().map(MealType::from_label).unwrap_or_default())
}

/// A catalog meal with nutritional data.
///
/// Macro fields may be absent in the catalog; the planner reads them as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    pub calories: u32,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_meal_type")]
    pub meal_type: MealType,

    #[serde(default)]
    pub allergens: BTreeSet<String>,

    #[serde(default)]
    pub base_grams: Option<f64>,
}

impl Meal {
    #[inline]
    pub fn protein_g(&self) -> f64 {
        self.protein.unwrap_or(0.0)
    }

    #[inline]
    pub fn fat_g(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }

    #[inline]
    pub fn carbs_g(&self) -> f64 {
        self.carbs.unwrap_or(0.0)
    }

    /// Whether the meal carries the given allergen tag (case-insensitive).
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens
            .iter()
            .any(|a| a.eq_ignore_ascii_case(allergen.trim()))
    }

    /// Whether any ingredient matches the given name (case-insensitive).
    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.trim().eq_ignore_ascii_case(ingredient.trim()))
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "#{} {} [{}]: {} kcal, P:{} F:{} C:{}",
            self.id,
            self.name,
            self.meal_type,
            self.calories,
            self.protein_g(),
            self.fat_g(),
            self.carbs_g()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            id: 7,
            name: "Omelette".to_string(),
            ingredients: vec!["egg".to_string(), "Cheese".to_string()],
            calories: 350,
            protein: Some(25.0),
            fat: None,
            carbs: Some(3.0),
            meal_type: MealType::Breakfast,
            allergens: ["eggs".to_string()].into_iter().collect(),
            base_grams: Some(200.0),
        }
    }

    #[test]
    fn test_missing_macros_read_as_zero() {
        let meal = sample_meal();
        assert_eq!(meal.fat_g(), 0.0);
        assert_eq!(meal.protein_g(), 25.0);
    }

    #[test]
    fn test_meal_type_from_label() {
        assert_eq!(MealType::from_label("Breakfast"), MealType::Breakfast);
        assert_eq!(MealType::from_label("afternoon snack"), MealType::AfternoonSnack);
        assert_eq!(MealType::from_label("evening-snack"), MealType::EveningSnack);
        assert_eq!(MealType::from_label("brunch"), MealType::Default);
        assert_eq!(MealType::from_label(""), MealType::Default);
    }

    #[test]
    fn test_deserialize_null_and_unknown_meal_type() {
        let json = r#"[
            {"id": 1, "name": "A", "calories": 100, "meal_type": null},
            {"id": 2, "name": "B", "calories": 100, "meal_type": "supper"},
            {"id": 3, "name": "C", "calories": 100},
            {"id": 4, "name": "D", "calories": 100, "meal_type": "lunch", "protein": null}
        ]"#;
        let meals: Vec<Meal> = serde_json::from_str(json).unwrap();
        assert_eq!(meals[0].meal_type, MealType::Default);
        assert_eq!(meals[1].meal_type, MealType::Default);
        assert_eq!(meals[2].meal_type, MealType::Default);
        assert_eq!(meals[3].meal_type, MealType::Lunch);
        assert!(meals[3].protein.is_none());
        assert!(meals[2].ingredients.is_empty());
    }

    #[test]
    fn test_contains_ingredient_case_insensitive() {
        let meal = sample_meal();
        assert!(meal.contains_ingredient("cheese"));
        assert!(meal.contains_ingredient(" EGG "));
        assert!(!meal.contains_ingredient("ham"));
        assert!(meal.has_allergen("Eggs"));
    }
}

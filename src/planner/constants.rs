use crate::models::MealType;

// ─────────────────────────────────────────────────────────────────────────────
// Macro ratio policy
// ─────────────────────────────────────────────────────────────────────────────

/// Share of daily calories from protein.
pub const PROTEIN_CALORIE_SHARE: f64 = 0.20;

/// Share of daily calories from fat.
pub const FAT_CALORIE_SHARE: f64 = 0.30;

/// Share of daily calories from carbohydrates.
pub const CARBS_CALORIE_SHARE: f64 = 0.50;

/// Energy density of protein (kcal per gram).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of fat (kcal per gram).
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy density of carbohydrates (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest portion multiplier tried for a meal.
pub const MIN_PORTIONS: u32 = 1;

/// Largest portion multiplier tried for a meal.
pub const MAX_PORTIONS: u32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Slot layouts
// ─────────────────────────────────────────────────────────────────────────────

const ONE_MEAL: &[(MealType, f64)] = &[(MealType::Dinner, 1.0)];

const TWO_MEALS: &[(MealType, f64)] = &[(MealType::Breakfast, 0.3), (MealType::Dinner, 0.7)];

const THREE_MEALS: &[(MealType, f64)] = &[
    (MealType::Breakfast, 0.25),
    (MealType::Lunch, 0.35),
    (MealType::AfternoonSnack, 0.4),
];

const FOUR_MEALS: &[(MealType, f64)] = &[
    (MealType::Breakfast, 0.2),
    (MealType::Lunch, 0.25),
    (MealType::Dinner, 0.35),
    (MealType::AfternoonSnack, 0.2),
];

const FIVE_MEALS: &[(MealType, f64)] = &[
    (MealType::Breakfast, 0.2),
    (MealType::Lunch, 0.2),
    (MealType::Dinner, 0.3),
    (MealType::AfternoonSnack, 0.15),
    (MealType::EveningSnack, 0.15),
];

/// Slots and their calorie shares for a given number of meals per day.
///
/// Each share applies to the full daily calorie ceiling. Values outside 1..=5
/// have no layout and yield an empty slice.
pub fn slot_layout(meals_per_day: u32) -> &'static [(MealType, f64)] {
    match meals_per_day {
        1 => ONE_MEAL,
        2 => TWO_MEALS,
        3 => THREE_MEALS,
        4 => FOUR_MEALS,
        5 => FIVE_MEALS,
        _ => &[],
    }
}

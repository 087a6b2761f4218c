use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DailyPlan, Meal, MealType};

/// Flat CSV row for a catalog meal. List columns are comma-separated.
#[derive(Debug, Deserialize)]
struct MealRecord {
    id: i64,
    name: String,
    #[serde(default)]
    ingredients: String,
    calories: u32,
    #[serde(default)]
    protein: Option<f64>,
    #[serde(default)]
    fat: Option<f64>,
    #[serde(default)]
    carbs: Option<f64>,
    #[serde(default)]
    meal_type: String,
    #[serde(default)]
    allergens: String,
    #[serde(default)]
    base_grams: Option<f64>,
}

fn split_list(field: &str) -> impl Iterator<Item = String> + '_ {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        Meal {
            id: record.id,
            name: record.name,
            ingredients: split_list(&record.ingredients).collect(),
            calories: record.calories,
            protein: record.protein,
            fat: record.fat,
            carbs: record.carbs,
            meal_type: MealType::from_label(&record.meal_type),
            allergens: split_list(&record.allergens).collect(),
            base_grams: record.base_grams,
        }
    }
}

/// Load the meal catalog from a JSON array, or from CSV when the file has a
/// `.csv` extension.
///
/// Deduplicates by id: the last occurrence wins but keeps the position of the
/// first.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let meals: Vec<Meal> = if is_csv {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        reader
            .deserialize::<MealRecord>()
            .map(|row| row.map(Meal::from))
            .collect::<std::result::Result<_, _>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut deduped: Vec<Meal> = Vec::with_capacity(meals.len());
    for meal in meals {
        match positions.get(&meal.id) {
            Some(&idx) => {
                tracing::warn!(id = meal.id, "duplicate meal id in catalog, keeping last");
                deduped[idx] = meal;
            }
            None => {
                positions.insert(meal.id, deduped.len());
                deduped.push(meal);
            }
        }
    }

    tracing::debug!(path = %path.display(), meals = deduped.len(), "loaded catalog");
    Ok(deduped)
}

/// Save daily plans as pretty-printed JSON.
pub fn save_plans_json<P: AsRef<Path>>(path: P, plans: &[DailyPlan]) -> Result<()> {
    let json = serde_json::to_string_pretty(plans)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    date: NaiveDate,
    meal_type: MealType,
    id: i64,
    name: &'a str,
    portions: u32,
    calories: u32,
    protein: f64,
    fat: f64,
    carbs: f64,
}

/// Write daily plans as CSV, one row per selected meal.
pub fn write_plans_csv<P: AsRef<Path>>(path: P, plans: &[DailyPlan]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for plan in plans {
        for meal in &plan.meals {
            writer.serialize(PlanRow {
                date: plan.date,
                meal_type: meal.meal_type,
                id: meal.id,
                name: &meal.name,
                portions: meal.portions,
                calories: meal.calories,
                protein: meal.protein,
                fat: meal.fat,
                carbs: meal.carbs,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

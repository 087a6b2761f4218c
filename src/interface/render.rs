use crate::models::{DailyPlan, MacroTargets, MealType};
use crate::planner::MealsByType;

/// Display order for catalog groups.
const TYPE_ORDER: [MealType; 6] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::AfternoonSnack,
    MealType::EveningSnack,
    MealType::Default,
];

/// Display macro targets.
pub fn display_macro_targets(targets: &MacroTargets, calories: f64) {
    println!("Targets for {:.0} kcal:", calories);
    println!("  Protein: {:>7.1} g", targets.protein_g);
    println!("  Fat:     {:>7.1} g", targets.fat_g);
    println!("  Carbs:   {:>7.1} g", targets.carbs_g);
}

/// Display a multi-day plan, one block per date.
pub fn display_diet_plan(plans: &[DailyPlan], targets: &MacroTargets) {
    if plans.iter().all(DailyPlan::is_empty) {
        println!("No meal plan generated (no meals fit the requested slots).");
        return;
    }

    let max_name_len = plans
        .iter()
        .flat_map(|p| p.meals.iter())
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);

    for plan in plans {
        println!();
        println!("=== {} ===", plan.date.format("%A %Y-%m-%d"));

        if plan.is_empty() {
            println!("  (no meals)");
            continue;
        }

        for meal in &plan.meals {
            println!(
                "  {:<16} {:<width$} x{} - {:>5} kcal | P {:>5.1} F {:>5.1} C {:>5.1}",
                meal.meal_type.as_str(),
                meal.name,
                meal.portions,
                meal.calories,
                meal.protein,
                meal.fat,
                meal.carbs,
                width = max_name_len
            );
        }

        println!(
            "  Total: {} kcal | P {:.1}/{:.1} F {:.1}/{:.1} C {:.1}/{:.1}",
            plan.total_calories,
            plan.total_protein,
            targets.protein_g,
            plan.total_fat,
            targets.fat_g,
            plan.total_carbs,
            targets.carbs_g
        );
    }

    let days = plans.len();
    let meals: usize = plans.iter().map(|p| p.meals.len()).sum();
    let calories: u64 = plans.iter().map(|p| p.total_calories as u64).sum();

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", days);
    println!("Meals selected: {}", meals);
    println!(
        "Average calories per day: {:.0}",
        calories as f64 / days as f64
    );
    println!();
}

/// Display the catalog grouped by meal type.
pub fn display_meal_catalog(groups: &MealsByType) {
    if groups.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    for meal_type in TYPE_ORDER {
        let Some(meals) = groups.get(&meal_type) else {
            continue;
        };

        println!();
        println!("=== {} ({} meals) ===", meal_type, meals.len());
        for meal in meals {
            println!("  {}", meal.debug_string());
        }
    }

    println!();
}

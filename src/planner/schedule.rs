use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{DailyPlan, MacroTargets, Meal};
use crate::planner::allocation::generate_daily_plan;
use crate::planner::calculations::calculate_macro_targets;
use crate::state::IngredientUsage;

/// Parameters of one multi-day plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub start_date: NaiveDate,
    /// Last planned date, inclusive.
    pub end_date: NaiveDate,
    pub meals_per_day: u32,
    /// Daily calorie ceiling the slot shares are applied to.
    pub max_calories: f64,
    /// Accepted for forward compatibility; not used by the macro policy.
    pub user_weight: f64,
    /// Subtracted from `max_calories` before deriving macro targets.
    #[serde(default)]
    pub calorie_deficit: f64,
}

impl PlanRequest {
    /// Macro targets for every day of this request.
    pub fn macro_targets(&self) -> MacroTargets {
        calculate_macro_targets(self.user_weight, self.max_calories - self.calorie_deficit)
    }

    /// Every date from start to end inclusive; empty if the range is inverted.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }
}

/// Generate one daily plan per date with a fresh ingredient-usage table.
pub fn generate_diet_plan(meals: &[Meal], request: &PlanRequest) -> Result<Vec<DailyPlan>> {
    let mut usage = IngredientUsage::new();
    generate_diet_plan_with_usage(meals, request, &mut usage)
}

/// Generate one daily plan per date, threading `usage` through every day.
///
/// Fails with [`PlannerError::EmptyCandidateSet`] before planning anything if
/// `meals` is empty.
pub fn generate_diet_plan_with_usage(
    meals: &[Meal],
    request: &PlanRequest,
    usage: &mut IngredientUsage,
) -> Result<Vec<DailyPlan>> {
    if meals.is_empty() {
        return Err(PlannerError::EmptyCandidateSet);
    }

    let targets = request.macro_targets();
    tracing::info!(
        start = %request.start_date,
        end = %request.end_date,
        meals_per_day = request.meals_per_day,
        max_calories = request.max_calories,
        candidates = meals.len(),
        "generating diet plan"
    );

    let mut plans = Vec::new();
    for date in request.dates() {
        let plan = generate_daily_plan(
            date,
            meals,
            request.meals_per_day,
            request.max_calories,
            &targets,
            usage,
        );
        tracing::info!(
            %date,
            meals = plan.meals.len(),
            calories = plan.total_calories,
            "planned day"
        );
        plans.push(plan);
    }

    Ok(plans)
}

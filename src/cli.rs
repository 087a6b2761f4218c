use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal plan allocator: builds multi-day meal plans that track calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_allocator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog (JSON, or CSV by extension). Overrides the config file.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Path to a TOML config file. Defaults to meal_plan.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a multi-day meal plan.
    Plan(PlanArgs),

    /// List the catalog grouped by meal type.
    Catalog,

    /// Show macro targets for a calorie budget.
    Targets {
        /// Daily calorie budget.
        #[arg(long)]
        calories: f64,

        /// Body weight in kg (currently does not affect targets).
        #[arg(long)]
        weight: Option<f64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlanArgs {
    /// First date to plan (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub start: Option<String>,

    /// Last date to plan, inclusive (YYYY-MM-DD). Defaults to the start date.
    #[arg(long)]
    pub end: Option<String>,

    /// Meals per day (1-5).
    #[arg(short, long)]
    pub meals_per_day: Option<u32>,

    /// Daily calorie ceiling.
    #[arg(long)]
    pub max_calories: Option<f64>,

    /// Calories subtracted from the ceiling before deriving macro targets.
    #[arg(long)]
    pub deficit: Option<f64>,

    /// Body weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Ingredient to exclude (repeatable).
    #[arg(long = "exclude")]
    pub excluded_ingredients: Vec<String>,

    /// Allergen to exclude (repeatable).
    #[arg(long = "allergen")]
    pub allergens: Vec<String>,

    /// Preferred ingredient; meals must contain at least one (repeatable).
    #[arg(long = "prefer")]
    pub preferred_ingredients: Vec<String>,

    /// Drop catalog meals above this many calories per portion.
    #[arg(long)]
    pub max_meal_calories: Option<u32>,

    /// Write the plan as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the plan as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Prompt for missing values and excluded ingredients.
    #[arg(short, long)]
    pub interactive: bool,
}

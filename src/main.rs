use std::collections::BTreeSet;
use std::path::Path;

use chrono::Local;
use clap::Parser;

use meal_plan_allocator::catalog::MealFilter;
use meal_plan_allocator::cli::{Cli, Command, PlanArgs};
use meal_plan_allocator::config::PlannerConfig;
use meal_plan_allocator::error::Result;
use meal_plan_allocator::interface::{
    display_diet_plan, display_macro_targets, display_meal_catalog, parse_date, prompt_date,
    prompt_excluded_ingredients, prompt_max_calories, prompt_meals_per_day, prompt_user_weight,
    prompt_yes_no,
};
use meal_plan_allocator::models::Meal;
use meal_plan_allocator::planner::{
    PlanRequest, calculate_macro_targets, generate_diet_plan, group_meals_by_type,
};
use meal_plan_allocator::state::{load_meals, save_plans_json, write_plans_csv};

/// Where an interactive run saves the plan when no `--json` path was given.
const DEFAULT_PLAN_OUTPUT: &str = "meal_plan.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_deref())?;
    let catalog = cli.catalog.unwrap_or_else(|| config.catalog.clone());
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&catalog, &config, args),
        Command::Catalog => cmd_catalog(&catalog),
        Command::Targets { calories, weight } => {
            let targets = calculate_macro_targets(weight.unwrap_or(config.user_weight), calories);
            display_macro_targets(&targets, calories);
            Ok(())
        }
    }
}

/// Every distinct ingredient in the catalog, sorted.
fn ingredient_vocabulary(meals: &[Meal]) -> Vec<String> {
    meals
        .iter()
        .flat_map(|m| m.ingredients.iter())
        .map(|i| i.trim().to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Generate a multi-day plan from the catalog.
fn cmd_plan(catalog: &Path, config: &PlannerConfig, args: PlanArgs) -> Result<()> {
    if !catalog.exists() {
        eprintln!("Meal catalog not found: {}", catalog.display());
        eprintln!("Pass --catalog or set `catalog` in meal_plan.toml.");
        return Ok(());
    }

    let meals = load_meals(catalog)?;
    println!("Loaded {} meals", meals.len());

    let mut excluded_ingredients = config.excluded_ingredients.clone();
    excluded_ingredients.extend(args.excluded_ingredients.iter().cloned());
    if args.interactive {
        excluded_ingredients.extend(prompt_excluded_ingredients(&ingredient_vocabulary(
            &meals,
        ))?);
    }

    let mut allergens = config.allergens.clone();
    allergens.extend(args.allergens.iter().cloned());

    let filter = MealFilter {
        allergens,
        excluded_ingredients,
        preferred_ingredients: args.preferred_ingredients.clone(),
        max_meal_calories: args.max_meal_calories,
    };
    let meals = filter.apply(meals);
    println!("{} meals match your constraints", meals.len());

    let request = build_request(config, &args)?;
    let plans = generate_diet_plan(&meals, &request)?;

    display_diet_plan(&plans, &request.macro_targets());

    if let Some(path) = &args.json {
        save_plans_json(path, &plans)?;
        println!("Plan saved to {}", path.display());
    } else if args.interactive && prompt_yes_no("Save plan as JSON?", false)? {
        save_plans_json(DEFAULT_PLAN_OUTPUT, &plans)?;
        println!("Plan saved to {}", DEFAULT_PLAN_OUTPUT);
    }

    if let Some(path) = &args.csv {
        write_plans_csv(path, &plans)?;
        println!("Plan exported to {}", path.display());
    }

    Ok(())
}

/// Resolve request parameters: flag, then prompt when interactive, then config.
fn build_request(config: &PlannerConfig, args: &PlanArgs) -> Result<PlanRequest> {
    let today = Local::now().date_naive();

    let start_date = match (&args.start, args.interactive) {
        (Some(s), _) => parse_date(s)?,
        (None, true) => prompt_date("Start date", today)?,
        (None, false) => today,
    };

    let end_date = match (&args.end, args.interactive) {
        (Some(s), _) => parse_date(s)?,
        (None, true) => prompt_date("End date", start_date)?,
        (None, false) => start_date,
    };

    let meals_per_day = match (args.meals_per_day, args.interactive) {
        (Some(n), _) => n,
        (None, true) => prompt_meals_per_day(config.meals_per_day)?,
        (None, false) => config.meals_per_day,
    };

    let max_calories = match (args.max_calories, args.interactive) {
        (Some(c), _) => c,
        (None, true) => prompt_max_calories(config.max_calories)?,
        (None, false) => config.max_calories,
    };

    let user_weight = match (args.weight, args.interactive) {
        (Some(w), _) => w,
        (None, true) => prompt_user_weight(config.user_weight)?,
        (None, false) => config.user_weight,
    };

    Ok(PlanRequest {
        start_date,
        end_date,
        meals_per_day,
        max_calories,
        user_weight,
        calorie_deficit: args.deficit.unwrap_or(config.calorie_deficit),
    })
}

/// List the catalog grouped by meal type.
fn cmd_catalog(catalog: &Path) -> Result<()> {
    if !catalog.exists() {
        eprintln!("Meal catalog not found: {}", catalog.display());
        return Ok(());
    }

    let meals = load_meals(catalog)?;
    println!("Loaded {} meals", meals.len());
    display_meal_catalog(&group_meals_by_type(&meals));
    Ok(())
}

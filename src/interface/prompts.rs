use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};

/// Minimum Jaro-Winkler similarity for a fuzzy ingredient match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PlannerError::InvalidDate(format!("{}: {}", input.trim(), e)))
}

/// Ingredients from `vocabulary` similar to `input`, best first.
pub fn fuzzy_ingredient_matches(input: &str, vocabulary: &[String]) -> Vec<(String, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(String, f64)> = vocabulary
        .iter()
        .map(|v| (v.clone(), jaro_winkler(&v.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Prompt for a date with a default.
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_date(&input)
}

/// Prompt for the number of meals per day.
pub fn prompt_meals_per_day(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many meals per day (1-5)?")
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number of meals".to_string()))
}

/// Prompt for the daily calorie ceiling.
pub fn prompt_max_calories(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your daily calorie limit?")
        .default(format!("{:.0}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for body weight in kg.
pub fn prompt_user_weight(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your weight in kg?")
        .default(format!("{}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for ingredients to exclude, fuzzy-matched against the catalog.
pub fn prompt_excluded_ingredients(vocabulary: &[String]) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an ingredient to exclude (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Exact match first (case-insensitive)
        if let Some(exact) = vocabulary.iter().find(|v| v.eq_ignore_ascii_case(input)) {
            excluded.push(exact.clone());
            println!("Excluded: {}", exact);
            continue;
        }

        let candidates = fuzzy_ingredient_matches(input, vocabulary);

        if candidates.is_empty() {
            println!("No matching ingredient found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = &candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                excluded.push(name.clone());
                println!("Excluded: {}", name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|(name, _)| name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                excluded.push(options[selection].clone());
                println!("Excluded: {}", options[selection]);
            }
        }
    }

    Ok(excluded)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

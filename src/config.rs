//! Planner defaults loaded from a TOML file.
//!
//! Resolution per field: CLI flag > config file > built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "meal_plan.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Meal catalog (JSON, or CSV by extension).
    pub catalog: PathBuf,
    pub meals_per_day: u32,
    pub max_calories: f64,
    /// Subtracted from the calorie ceiling before deriving macro targets.
    pub calorie_deficit: f64,
    pub user_weight: f64,
    pub allergens: Vec<String>,
    pub excluded_ingredients: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("meals.json"),
            meals_per_day: 3,
            max_calories: 2000.0,
            calorie_deficit: 0.0,
            user_weight: 70.0,
            allergens: Vec::new(),
            excluded_ingredients: Vec::new(),
        }
    }
}

impl PlannerConfig {
    /// Parse a config file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `explicit` if given, else `meal_plan.toml` when present, else
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    tracing::debug!(path = DEFAULT_CONFIG_FILE, "using config file");
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

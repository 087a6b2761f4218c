use std::collections::{BTreeMap, HashMap};

/// Tracks how often each ingredient has been used across a multi-day plan.
///
/// One table lives for a single plan request and is threaded by reference
/// through every day's allocation. Counts only ever grow.
#[derive(Debug, Clone, Default)]
pub struct IngredientUsage {
    /// Usage counts keyed by trimmed, lowercase ingredient name.
    counts: HashMap<String, u32>,
}

impl IngredientUsage {
    /// Create an empty usage table.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(ingredient: &str) -> String {
        ingredient.trim().to_lowercase()
    }

    /// Usage count for one ingredient (case-insensitive).
    pub fn count(&self, ingredient: &str) -> u32 {
        self.counts.get(&Self::key(ingredient)).copied().unwrap_or(0)
    }

    /// Squared sum of usage counts over an ingredient list.
    ///
    /// Duplicate ingredients in the list are counted once per occurrence.
    pub fn penalty(&self, ingredients: &[String]) -> f64 {
        let total: f64 = ingredients.iter().map(|i| self.count(i) as f64).sum();
        total * total
    }

    /// Increment the count of every ingredient occurrence in the list.
    pub fn record(&mut self, ingredients: &[String]) {
        for ingredient in ingredients {
            *self.counts.entry(Self::key(ingredient)).or_insert(0) += 1;
        }
    }

    /// Sum of all usage counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Ordered copy of the counts, for display and comparison.
    pub fn snapshot(&self) -> BTreeMap<String, u32> {
        self.counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    /// Number of distinct ingredients seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no ingredient has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

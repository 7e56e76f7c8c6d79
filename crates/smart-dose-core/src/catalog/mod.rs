//! Medicine catalog browsing and search.

mod data;

use std::collections::BTreeSet;

use strsim::{jaro_winkler, normalized_levenshtein};
use tracing::debug;

use crate::models::{Medicine, QuickAddOption};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Minimum similarity for a typo-tolerant match.
const FUZZY_THRESHOLD: f64 = 0.8;

/// Queries shorter than this never fall back to fuzzy matching.
const FUZZY_MIN_QUERY_LEN: usize = 3;

/// Static medicine catalog plus the prescriber's quick-add list.
#[derive(Debug, Clone)]
pub struct MedicineCatalog {
    medicines: Vec<Medicine>,
    quick_add: Vec<QuickAddOption>,
}

impl Default for MedicineCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicineCatalog {
    /// Catalog with the built-in medicines.
    pub fn new() -> Self {
        Self {
            medicines: data::medicines(),
            quick_add: data::quick_add_options(),
        }
    }

    /// Catalog over custom data.
    pub fn from_parts(medicines: Vec<Medicine>, quick_add: Vec<QuickAddOption>) -> Self {
        Self {
            medicines,
            quick_add,
        }
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn get(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Unique medicine categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.medicines
            .iter()
            .map(|m| m.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Search by name, generic name, brand or category within an optional
    /// category. An empty query returns the whole category.
    ///
    /// When a query finds nothing by substring it is retried as a
    /// typo-tolerant match on name and generic name, best match first.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Medicine> {
        let in_category: Vec<&Medicine> = self
            .medicines
            .iter()
            .filter(|m| category_matches(&m.category, category))
            .collect();

        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return in_category;
        }

        let hits: Vec<&Medicine> = in_category
            .iter()
            .copied()
            .filter(|m| m.matches_lowercase(&q))
            .collect();
        if !hits.is_empty() || q.chars().count() < FUZZY_MIN_QUERY_LEN {
            return hits;
        }

        let mut scored: Vec<(f64, &Medicine)> = in_category
            .into_iter()
            .map(|m| {
                let score = similarity(&q, &m.name.to_lowercase())
                    .max(similarity(&q, &m.generic_name.to_lowercase()));
                (score, m)
            })
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        debug!(query = %q, matches = scored.len(), "Fuzzy catalog search");
        scored.into_iter().map(|(_, m)| m).collect()
    }

    pub fn quick_add_options(&self) -> &[QuickAddOption] {
        &self.quick_add
    }

    /// "All" followed by quick-add categories in list order.
    pub fn quick_add_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for option in &self.quick_add {
            if !categories.contains(&option.category) {
                categories.push(option.category.clone());
            }
        }
        categories
    }

    /// Quick-add entries whose name or dosage contains `query`.
    pub fn filter_quick_add(&self, query: &str, category: Option<&str>) -> Vec<&QuickAddOption> {
        let q = query.to_lowercase();
        self.quick_add
            .iter()
            .filter(|o| category_matches(&o.category, category))
            .filter(|o| o.name.to_lowercase().contains(&q) || o.dosage.to_lowercase().contains(&q))
            .collect()
    }
}

fn category_matches(actual: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(c) if c == ALL_CATEGORIES => true,
        Some(c) => actual == c,
    }
}

/// Combined similarity: Jaro-Winkler for typos, Levenshtein for overall shape.
fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

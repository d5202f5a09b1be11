//! Rule and country search
//!
//! Filtering is a stable linear scan: results keep the input order and the
//! input is never modified. An empty result is a normal outcome.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::{Country, KnownCategory, Rule};

/// Label of the catch-all category tab
pub const ALL_CATEGORIES: &str = "All";

/// Category selector for rule queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    /// Every category passes
    #[default]
    All,
    /// Only rules whose category equals this title
    Only(String),
}

impl CategoryFilter {
    pub fn only(title: impl Into<String>) -> Self {
        CategoryFilter::Only(title.into())
    }

    pub fn matches(&self, rule: &Rule) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(title) => rule.category == *title,
        }
    }

    /// Tab label for this filter
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(title) => title,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// "All" in any casing selects everything. Any other text is taken as a
    /// category title verbatim, recognized or not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl From<KnownCategory> for CategoryFilter {
    fn from(category: KnownCategory) -> Self {
        CategoryFilter::Only(category.title().to_string())
    }
}

/// Labels for the category tab strip: "All" followed by each known category
pub fn filter_tabs() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(KnownCategory::ALL.into_iter().map(CategoryFilter::from))
        .collect()
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Free-text search over title and description
pub fn matches_text(rule: &Rule, search_text: &str) -> bool {
    search_text.is_empty()
        || contains_ignore_case(&rule.title, search_text)
        || contains_ignore_case(&rule.description, search_text)
}

/// A search text plus category selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleQuery {
    #[serde(default)]
    pub search_text: String,

    #[serde(default)]
    pub category: CategoryFilter,
}

impl RuleQuery {
    pub fn new(search_text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.into(),
            category,
        }
    }

    /// Both the text and the category predicate must pass
    pub fn matches(&self, rule: &Rule) -> bool {
        matches_text(rule, &self.search_text) && self.category.matches(rule)
    }

    pub fn apply(&self, rules: &[Rule]) -> Vec<Rule> {
        query(rules, &self.search_text, &self.category)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.category == CategoryFilter::All
    }
}

/// Filter rules by search text and category, preserving input order
pub fn query(rules: &[Rule], search_text: &str, category: &CategoryFilter) -> Vec<Rule> {
    let results: Vec<Rule> = rules
        .iter()
        .filter(|rule| matches_text(rule, search_text) && category.matches(rule))
        .cloned()
        .collect();

    debug!(
        search_text,
        category = %category,
        total = rules.len(),
        matched = results.len(),
        "Rule query evaluated"
    );

    results
}

/// Country picker search: case-insensitive substring of the name
pub fn search_countries(countries: &[Country], search_text: &str) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| contains_ignore_case(&c.name, search_text))
        .cloned()
        .collect()
}

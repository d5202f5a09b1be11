//! RuleGo Catalog - Bundled reference data
//!
//! This module provides the static tables the application ships with:
//! countries, travel rules, rule categories, emergency contacts, and the
//! home screen quick-rule preview.
//!
//! # Overview
//!
//! The catalog is compiled in. There is no I/O and no failure mode:
//! - `load_*` functions return fresh owned copies of each table
//! - [`Catalog::shared`] exposes one lazily-built, read-only instance
//!   for the whole process
//!
//! Rules reference categories by title (string equality), not by id.
//! Countries and rules are not linked.

mod model;
mod seed;

use once_cell::sync::Lazy;

pub use model::{
    CategoryId, CategoryTheme, ColorTag, Country, CountryId, EmergencyContact, KnownCategory,
    QuickRule, Rule, RuleCategory, RuleId,
};
pub use seed::{
    load_categories, load_countries, load_emergency_contacts, load_quick_rules, load_rules,
};

static SHARED: Lazy<Catalog> = Lazy::new(Catalog::bundled);

/// All bundled tables, read-only
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    rules: Vec<Rule>,
    categories: Vec<RuleCategory>,
    emergency_contacts: Vec<EmergencyContact>,
    quick_rules: Vec<QuickRule>,
}

impl Catalog {
    /// Build a catalog from the compiled-in tables
    pub fn bundled() -> Self {
        Self {
            countries: load_countries(),
            rules: load_rules(),
            categories: load_categories(),
            emergency_contacts: load_emergency_contacts(),
            quick_rules: load_quick_rules(),
        }
    }

    /// The process-wide catalog instance
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Seed rules, including their initial favorite flags
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn categories(&self) -> &[RuleCategory] {
        &self.categories
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        &self.emergency_contacts
    }

    pub fn quick_rules(&self) -> &[QuickRule] {
        &self.quick_rules
    }

    /// Look up a country by ISO code (case-insensitive)
    pub fn find_country_by_code(&self, iso_code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(iso_code))
    }

    pub fn find_country(&self, id: &CountryId) -> Option<&Country> {
        self.countries.iter().find(|c| &c.id == id)
    }

    pub fn find_rule(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| &r.id == id)
    }

    /// Category entry for a title, if the title is one of the known categories
    pub fn find_category(&self, title: &str) -> Option<&RuleCategory> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// Display theme for a category title, falling back for unknown titles
    pub fn category_theme(&self, title: &str) -> CategoryTheme {
        CategoryTheme::for_title(title)
    }

    /// The first country in the table, used when nothing else is selected
    pub fn default_country(&self) -> &Country {
        &self.countries[0]
    }
}

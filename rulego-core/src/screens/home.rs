use serde::Serialize;

use crate::catalog::{Catalog, Country, EmergencyContact, QuickRule, RuleCategory};
use crate::query::search_countries;

/// Footer shown under the home content
pub const DISCLAIMER: [&str; 2] = [
    "Data sourced from official and trusted sources",
    "RuleGO does not replace official government advice",
];

/// Landing tab: destination picker, quick rules, categories, contacts
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    selected_country: Option<Country>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub tagline: &'static str,
    pub selected_country: Option<Country>,
    /// Empty until a destination is picked
    pub quick_rules: Vec<QuickRule>,
    pub categories: Vec<RuleCategory>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub disclaimer: [&'static str; 2],
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected_country.as_ref()
    }

    pub fn select_country(&mut self, country: Country) {
        tracing::debug!(country = %country.name, "Destination selected");
        self.selected_country = Some(country);
    }

    /// Countries offered by the picker for the typed text
    pub fn country_choices(&self, catalog: &Catalog, search_text: &str) -> Vec<Country> {
        search_countries(catalog.countries(), search_text)
    }

    /// Quick-rule header, e.g. "Quick Rules - 🇹🇷 Turkey"
    pub fn quick_rules_title(&self) -> Option<String> {
        self.selected_country
            .as_ref()
            .map(|c| format!("Quick Rules - {}", c.label()))
    }

    /// The preview is the same for every destination
    pub fn view(&self, catalog: &Catalog) -> HomeView {
        let quick_rules = if self.selected_country.is_some() {
            catalog.quick_rules().to_vec()
        } else {
            Vec::new()
        };

        HomeView {
            tagline: super::TAGLINE,
            selected_country: self.selected_country.clone(),
            quick_rules,
            categories: catalog.categories().to_vec(),
            emergency_contacts: catalog.emergency_contacts().to_vec(),
            disclaimer: DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_quick_rules_without_destination() {
        let view = HomeScreen::new().view(Catalog::shared());
        assert!(view.selected_country.is_none());
        assert!(view.quick_rules.is_empty());
        assert_eq!(view.categories.len(), 6);
        assert_eq!(view.emergency_contacts.len(), 3);
    }

    #[test]
    fn test_quick_rules_ignore_destination() {
        let catalog = Catalog::shared();
        let mut home = HomeScreen::new();

        home.select_country(catalog.find_country_by_code("TR").unwrap().clone());
        let turkey = home.view(catalog).quick_rules;

        home.select_country(catalog.find_country_by_code("GB").unwrap().clone());
        let uk = home.view(catalog).quick_rules;

        assert_eq!(turkey.len(), 4);
        assert_eq!(turkey, uk);
        assert_eq!(
            home.quick_rules_title().as_deref(),
            Some("Quick Rules - 🇬🇧 United Kingdom")
        );
    }

    #[test]
    fn test_country_choices() {
        let home = HomeScreen::new();
        let names: Vec<String> = home
            .country_choices(Catalog::shared(), "ia")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Tunisia"]);
    }
}

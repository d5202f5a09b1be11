use serde::Serialize;
use tracing::debug;

use super::EmptyState;
use crate::catalog::{Country, Rule};
use crate::query::{filter_tabs, CategoryFilter, RuleQuery};
use crate::store::RuleStore;

/// Browse and search every rule
///
/// The selected country only labels the header. It does not narrow the rule
/// set.
#[derive(Debug, Clone)]
pub struct RulesScreen {
    country: Country,
    query: RuleQuery,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesView {
    pub header: String,
    pub flag: String,
    pub subtitle: &'static str,
    pub tabs: Vec<CategoryFilter>,
    pub selected: CategoryFilter,
    pub search_text: String,
    pub rules: Vec<Rule>,
    pub empty_state: Option<EmptyState>,
}

impl RulesScreen {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            query: RuleQuery::default(),
        }
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn query(&self) -> &RuleQuery {
        &self.query
    }

    pub fn set_country(&mut self, country: Country) {
        self.country = country;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        debug!(search_text = %self.query.search_text, "Rules search updated");
    }

    pub fn clear_search(&mut self) {
        self.query.search_text.clear();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!(%category, "Rules category selected");
        self.query.category = category;
    }

    pub fn header(&self) -> String {
        format!("{} Rules", self.country.name)
    }

    pub fn view(&self, store: &RuleStore) -> RulesView {
        let rules = store.query(&self.query);
        let empty_state = if rules.is_empty() {
            Some(if self.query.search_text.is_empty() {
                EmptyState::EmptyCategory
            } else {
                EmptyState::NoSearchResults
            })
        } else {
            None
        };

        RulesView {
            header: self.header(),
            flag: self.country.flag.clone(),
            subtitle: "Know before you go",
            tabs: filter_tabs(),
            selected: self.query.category.clone(),
            search_text: self.query.search_text.clone(),
            rules,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_rules, Catalog};

    fn screen() -> RulesScreen {
        RulesScreen::new(Catalog::shared().default_country().clone())
    }

    #[test]
    fn test_header_names_country() {
        let mut screen = screen();
        assert_eq!(screen.header(), "Turkey Rules");

        let france = Catalog::shared().find_country_by_code("FR").unwrap().clone();
        screen.set_country(france);
        assert_eq!(screen.header(), "France Rules");
    }

    #[test]
    fn test_country_does_not_filter_rules() {
        let store = RuleStore::default();
        let mut screen = screen();
        let turkey_count = screen.view(&store).rules.len();

        let us = Catalog::shared().find_country_by_code("US").unwrap().clone();
        screen.set_country(us);
        assert_eq!(screen.view(&store).rules.len(), turkey_count);
    }

    #[test]
    fn test_empty_state_for_search() {
        let store = RuleStore::default();
        let mut screen = screen();
        screen.set_search_text("zzz-no-match");

        let view = screen.view(&store);
        assert!(view.rules.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::NoSearchResults));

        screen.clear_search();
        assert_eq!(screen.view(&store).empty_state, None);
    }

    #[test]
    fn test_empty_state_for_category() {
        let rules: Vec<_> = load_rules()
            .into_iter()
            .filter(|r| r.category != "Alcohol")
            .collect();
        let store = RuleStore::new(rules);
        let mut screen = screen();
        screen.select_category(CategoryFilter::only("Alcohol"));

        assert_eq!(
            screen.view(&store).empty_state,
            Some(EmptyState::EmptyCategory)
        );
    }

    #[test]
    fn test_tabs_and_selection() {
        let store = RuleStore::default();
        let mut screen = screen();
        screen.select_category(CategoryFilter::only("Photography"));

        let view = screen.view(&store);
        assert_eq!(view.tabs.len(), 7);
        assert_eq!(view.selected, CategoryFilter::only("Photography"));
        assert_eq!(view.rules.len(), 1);
    }
}

use serde::Serialize;

use super::EmptyState;
use crate::catalog::{Rule, RuleId};
use crate::query::matches_text;
use crate::store::RuleStore;

/// Saved rules, searchable by text
#[derive(Debug, Clone, Default)]
pub struct FavoritesScreen {
    search_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesView {
    pub search_text: String,
    pub total_favorites: usize,
    pub rules: Vec<Rule>,
    pub empty_state: Option<EmptyState>,
}

impl FavoritesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Text handed to the share sheet for a saved rule
    ///
    /// Only favorites carry a share action, so anything else yields `None`.
    pub fn share_text(&self, store: &RuleStore, id: &RuleId) -> Option<String> {
        store
            .get(id)
            .filter(|r| r.is_favorite)
            .map(|r| r.title.clone())
    }

    pub fn view(&self, store: &RuleStore) -> FavoritesView {
        let favorites = store.favorites();
        let total_favorites = favorites.len();
        let rules: Vec<Rule> = favorites
            .into_iter()
            .filter(|r| matches_text(r, &self.search_text))
            .collect();

        let empty_state = match (total_favorites, rules.is_empty()) {
            (0, _) => Some(EmptyState::NoFavorites),
            (_, true) => Some(EmptyState::NoFavoriteMatches),
            _ => None,
        };

        FavoritesView {
            search_text: self.search_text.clone(),
            total_favorites,
            rules,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_seeded_favorites() {
        let store = RuleStore::default();
        let view = FavoritesScreen::new().view(&store);
        assert_eq!(view.total_favorites, 3);
        assert_eq!(view.rules.len(), 3);
        assert_eq!(view.empty_state, None);
    }

    #[test]
    fn test_search_within_favorites() {
        let store = RuleStore::default();
        let mut screen = FavoritesScreen::new();
        screen.set_search_text("MOSQUES");

        let view = screen.view(&store);
        let titles: Vec<&str> = view.rules.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dress Code at Religious Sites"]);

        // Seat belt is not a favorite, so it never shows up here
        screen.set_search_text("seat belt");
        let view = screen.view(&store);
        assert!(view.rules.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::NoFavoriteMatches));
    }

    #[test]
    fn test_no_favorites_empty_state() {
        let mut store = RuleStore::default();
        for id in [
            "no-smoking-indoors",
            "highway-speed-limits",
            "religious-site-dress-code",
        ] {
            store.remove_favorite(&RuleId::new(id));
        }

        let mut screen = FavoritesScreen::new();
        screen.set_search_text("anything");
        assert_eq!(
            screen.view(&store).empty_state,
            Some(EmptyState::NoFavorites)
        );
    }

    #[test]
    fn test_share_text_is_the_rule_title() {
        let mut store = RuleStore::default();
        let screen = FavoritesScreen::new();

        assert_eq!(
            screen.share_text(&store, &RuleId::new("religious-site-dress-code")),
            Some("Dress Code at Religious Sites".to_string())
        );
        assert_eq!(screen.share_text(&store, &RuleId::new("no-such-rule")), None);

        // Not starred, so there is no card to share from
        let seat_belt = RuleId::new("seat-belt-required");
        assert_eq!(screen.share_text(&store, &seat_belt), None);
        store.toggle_favorite(&seat_belt);
        assert_eq!(
            screen.share_text(&store, &seat_belt),
            Some("Seat Belt Required".to_string())
        );
    }
}

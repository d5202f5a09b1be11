//! Screen view models
//!
//! Each screen holds only its own interaction state (search text, selected
//! country, toggles). Rule data always comes from the session's
//! [`RuleStore`](crate::store::RuleStore) or the shared catalog, and each
//! `view` call produces a plain value for a front end to render.

mod about;
mod favorites;
mod home;
mod profile;
mod rules;
mod settings;

use serde::Serialize;

pub use about::{AboutView, Feature, SupportContact, APP_BUILD, APP_VERSION, TAGLINE};
pub use favorites::{FavoritesScreen, FavoritesView};
pub use home::{HomeScreen, HomeView, DISCLAIMER};
pub use profile::{ProfileLink, ProfileView};
pub use rules::{RulesScreen, RulesView};
pub use settings::{SettingsState, SettingsToggle, SettingsView};

/// Message shown in place of an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    /// Rules screen, search text present
    NoSearchResults,
    /// Rules screen, no search text: the category is empty
    EmptyCategory,
    /// Favorites screen with nothing marked
    NoFavorites,
    /// Favorites exist but none match the search
    NoFavoriteMatches,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoSearchResults => "No rules found",
            EmptyState::EmptyCategory => "No rules in this category",
            EmptyState::NoFavorites => "No Favorites Yet",
            EmptyState::NoFavoriteMatches => "No Results Found",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoSearchResults | EmptyState::NoFavoriteMatches => {
                "Try a different search term"
            }
            EmptyState::EmptyCategory => "Try selecting a different category",
            EmptyState::NoFavorites => {
                "Start exploring rules and tap the star icon to save your favorites here."
            }
        }
    }
}

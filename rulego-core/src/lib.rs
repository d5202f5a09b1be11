//! RuleGo library exports
//!
//! Bundled travel rules with search, category filtering and in-memory
//! favorites.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod query;
pub mod screens;
pub mod session;
pub mod store;

pub use catalog::{Catalog, Country, EmergencyContact, Rule, RuleCategory, RuleId};
pub use favorites::{list_favorites, remove_favorite, toggle_favorite, FavoriteState};
pub use query::{query, CategoryFilter, RuleQuery};
pub use session::AppSession;
pub use store::RuleStore;

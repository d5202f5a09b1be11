//! Favorite flags
//!
//! Each rule is either `NotFavorite` or `Favorite`. Only explicit user actions
//! move it between the two. Stale ids are ignored rather than reported.

use tracing::debug;

use crate::catalog::{Rule, RuleId};

/// Favorite state of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorite,
    Favorite,
}

impl FavoriteState {
    pub fn of(rule: &Rule) -> Self {
        if rule.is_favorite {
            FavoriteState::Favorite
        } else {
            FavoriteState::NotFavorite
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FavoriteState::NotFavorite => FavoriteState::Favorite,
            FavoriteState::Favorite => FavoriteState::NotFavorite,
        }
    }
}

/// Flip the favorite flag of the rule with `id`
///
/// Returns the new state, or `None` when no rule has that id. A missing id
/// leaves every rule untouched.
pub fn toggle_favorite(rules: &mut [Rule], id: &RuleId) -> Option<FavoriteState> {
    let Some(rule) = rules.iter_mut().find(|r| &r.id == id) else {
        debug!(%id, "Toggle ignored: no rule with this id");
        return None;
    };

    rule.is_favorite = !rule.is_favorite;
    let state = FavoriteState::of(rule);
    debug!(%id, ?state, "Favorite toggled");
    Some(state)
}

/// Clear the favorite flag of the rule with `id`
///
/// The rule stays in the collection. Returns true only if the flag actually
/// changed.
pub fn remove_favorite(rules: &mut [Rule], id: &RuleId) -> bool {
    match rules.iter_mut().find(|r| &r.id == id) {
        Some(rule) if rule.is_favorite => {
            rule.is_favorite = false;
            debug!(%id, "Favorite removed");
            true
        }
        Some(_) => false,
        None => {
            debug!(%id, "Remove ignored: no rule with this id");
            false
        }
    }
}

/// Favorites in their original order
pub fn list_favorites(rules: &[Rule]) -> Vec<Rule> {
    rules.iter().filter(|r| r.is_favorite).cloned().collect()
}

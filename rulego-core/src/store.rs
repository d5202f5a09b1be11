//! Session rule store
//!
//! One store owns the working rule list for a session. Screens read through
//! it and never keep their own copy, so a favorite set on one screen shows up
//! on every other screen.
//!
//! Every mutation that changes a flag bumps the revision and publishes it on
//! a `watch` channel. Mutations that change nothing publish nothing.

use tokio::sync::watch;
use tracing::trace;

use crate::catalog::{load_rules, Rule, RuleId};
use crate::favorites::{self, FavoriteState};
use crate::query::RuleQuery;

/// Monotonic counter of effective mutations
pub type Revision = u64;

#[derive(Debug)]
pub struct RuleStore {
    rules: Vec<Rule>,
    revision: Revision,
    changes: watch::Sender<Revision>,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new(load_rules())
    }
}

impl RuleStore {
    pub fn new(rules: Vec<Rule>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            rules,
            revision: 0,
            changes,
        }
    }

    /// Observe store revisions
    pub fn subscribe(&self) -> watch::Receiver<Revision> {
        self.changes.subscribe()
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| &r.id == id)
    }

    pub fn query(&self, query: &RuleQuery) -> Vec<Rule> {
        query.apply(&self.rules)
    }

    pub fn favorites(&self) -> Vec<Rule> {
        favorites::list_favorites(&self.rules)
    }

    pub fn favorite_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_favorite).count()
    }

    /// Flip a rule's favorite flag; unknown ids are ignored
    pub fn toggle_favorite(&mut self, id: &RuleId) -> Option<FavoriteState> {
        let state = favorites::toggle_favorite(&mut self.rules, id)?;
        self.publish();
        Some(state)
    }

    /// Clear a rule's favorite flag; returns true if it was set
    pub fn remove_favorite(&mut self, id: &RuleId) -> bool {
        let changed = favorites::remove_favorite(&mut self.rules, id);
        if changed {
            self.publish();
        }
        changed
    }

    fn publish(&mut self) {
        self.revision += 1;
        trace!(revision = self.revision, "Rule store changed");
        self.changes.send_replace(self.revision);
    }
}

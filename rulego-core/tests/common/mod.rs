//! Shared helpers for integration tests

use rulego_core::{Rule, RuleId};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Id of the rule with this exact title
pub fn id_of(rules: &[Rule], title: &str) -> RuleId {
    rules
        .iter()
        .find(|r| r.title == title)
        .map(|r| r.id.clone())
        .unwrap_or_else(|| panic!("no rule titled '{title}'"))
}

pub fn titles(rules: &[Rule]) -> Vec<String> {
    rules.iter().map(|r| r.title.clone()).collect()
}

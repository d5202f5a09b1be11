//! Query and favorite behavior over the bundled rule set and generated ones

mod common;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rulego_core::catalog::{load_rules, KnownCategory};
use rulego_core::{list_favorites, query, toggle_favorite, CategoryFilter, Rule, RuleId};

use common::{id_of, init_test_logging, titles};

/// True if `sub` appears in `full` in the same relative order
fn is_ordered_subsequence(sub: &[Rule], full: &[Rule]) -> bool {
    let mut remaining = full.iter();
    sub.iter().all(|s| remaining.any(|f| f == s))
}

#[test]
fn test_identity_case() {
    init_test_logging();
    let rules = load_rules();
    assert_eq!(query(&rules, "", &CategoryFilter::All), rules);
}

#[test]
fn test_case_insensitive_title_match() {
    let rules = load_rules();
    let results = query(&rules, "SMOK", &CategoryFilter::All);
    assert!(titles(&results).contains(&"No Smoking in Public Indoor Spaces".to_string()));
}

#[test]
fn test_driving_category() {
    let rules = load_rules();
    let results = query(&rules, "", &CategoryFilter::only("Driving"));
    assert_eq!(
        titles(&results),
        vec![
            "Speed Limits on Highways",
            "Seat Belt Required",
            "Pedestrian Crossings"
        ]
    );
    assert!(results.iter().all(|r| r.category == "Driving"));
}

#[test]
fn test_no_match_returns_empty() {
    let rules = load_rules();
    assert!(query(&rules, "zzz-no-match", &CategoryFilter::All).is_empty());
}

#[test]
fn test_query_does_not_mutate_input() {
    let rules = load_rules();
    let before = rules.clone();
    let _ = query(&rules, "a", &CategoryFilter::only("Alcohol"));
    assert_eq!(rules, before);
}

#[test]
fn test_favorite_round_trip() {
    init_test_logging();
    let mut rules = load_rules();
    assert_eq!(
        titles(&list_favorites(&rules)),
        vec![
            "No Smoking in Public Indoor Spaces",
            "Speed Limits on Highways",
            "Dress Code at Religious Sites",
        ]
    );

    let seat_belt = id_of(&rules, "Seat Belt Required");
    toggle_favorite(&mut rules, &seat_belt);
    assert!(titles(&list_favorites(&rules)).contains(&"Seat Belt Required".to_string()));

    toggle_favorite(&mut rules, &seat_belt);
    assert!(!titles(&list_favorites(&rules)).contains(&"Seat Belt Required".to_string()));
    assert_eq!(list_favorites(&rules).len(), 3);
}

#[test]
fn test_toggle_unknown_id_changes_nothing() {
    let mut rules = load_rules();
    let flags_before: Vec<bool> = rules.iter().map(|r| r.is_favorite).collect();

    let result = toggle_favorite(&mut rules, &RuleId::new("not-a-rule"));

    assert!(result.is_none());
    let flags_after: Vec<bool> = rules.iter().map(|r| r.is_favorite).collect();
    assert_eq!(flags_before, flags_after);
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(KnownCategory::ALL.to_vec()).prop_map(|c| c.title().to_string()),
        "[A-Za-z ]{1,12}",
    ]
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        "[a-z0-9-]{1,16}",
        "[A-Za-z ]{0,24}",
        "[A-Za-z .]{0,48}",
        arb_category(),
        any::<bool>(),
    )
        .prop_map(|(id, title, description, category, favorite)| {
            let rule = Rule::new(id.as_str(), "star", &title, &description, &category);
            if favorite {
                rule.favorited()
            } else {
                rule
            }
        })
}

fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        arb_category().prop_map(CategoryFilter::Only),
    ]
}

proptest! {
    #[test]
    fn prop_query_is_ordered_subsequence(
        rules in proptest::collection::vec(arb_rule(), 0..20),
        search in "[A-Za-z ]{0,4}",
        filter in arb_filter(),
    ) {
        let results = query(&rules, &search, &filter);
        prop_assert!(results.len() <= rules.len());
        prop_assert!(is_ordered_subsequence(&results, &rules));
    }

    #[test]
    fn prop_query_is_idempotent(
        rules in proptest::collection::vec(arb_rule(), 0..20),
        search in "[A-Za-z ]{0,4}",
        filter in arb_filter(),
    ) {
        let first = query(&rules, &search, &filter);
        let second = query(&rules, &search, &filter);
        prop_assert_eq!(&first, &second);

        // Filtering the result again changes nothing
        prop_assert_eq!(query(&first, &search, &filter), first);
    }

    #[test]
    fn prop_all_empty_is_identity(rules in proptest::collection::vec(arb_rule(), 0..20)) {
        prop_assert_eq!(query(&rules, "", &CategoryFilter::All), rules);
    }

    #[test]
    fn prop_favorites_are_ordered_subsequence(rules in proptest::collection::vec(arb_rule(), 0..20)) {
        let favorites = list_favorites(&rules);
        prop_assert!(favorites.iter().all(|r| r.is_favorite));
        prop_assert!(is_ordered_subsequence(&favorites, &rules));
    }
}

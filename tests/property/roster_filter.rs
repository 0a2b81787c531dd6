//! Property-based tests for roster filtering.
//!
//! Uses proptest to verify:
//! 1. Every returned contact contains the query, ignoring case.
//! 2. Results keep roster order (they are a subsequence of the roster).
//! 3. No matching contact is left out.
//! 4. The empty query returns the whole roster.

use parley_core::contact::{Contact, Roster};
use proptest::prelude::*;

/// Strategy for generating rosters of short, mixed-case names.
fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ]{0,11}", 0..12)
}

/// Strategy for generating queries that are likely to hit something.
fn arb_query() -> impl Strategy<Value = String> {
    "[A-Za-z]{0,3}"
}

fn matches(contact: &Contact, query: &str) -> bool {
    contact.name().to_lowercase().contains(&query.to_lowercase())
}

proptest! {
    #[test]
    fn results_contain_query(names in arb_names(), query in arb_query()) {
        let roster = Roster::new(names);
        for contact in roster.filter(&query) {
            prop_assert!(matches(contact, &query));
        }
    }

    #[test]
    fn results_keep_roster_order(names in arb_names(), query in arb_query()) {
        let roster = Roster::new(names);
        let expected: Vec<&Contact> = roster
            .contacts()
            .iter()
            .filter(|c| matches(c, &query))
            .collect();
        prop_assert_eq!(roster.filter(&query), expected);
    }

    #[test]
    fn empty_query_returns_everything(names in arb_names()) {
        let roster = Roster::new(names);
        let all: Vec<&Contact> = roster.contacts().iter().collect();
        prop_assert_eq!(roster.filter(""), all);
    }

    #[test]
    fn query_case_does_not_matter(names in arb_names(), query in arb_query()) {
        let roster = Roster::new(names);
        prop_assert_eq!(
            roster.filter(&query.to_uppercase()),
            roster.filter(&query.to_lowercase())
        );
    }

    #[test]
    fn roster_names_are_unique(names in arb_names()) {
        let roster = Roster::new(names);
        let mut seen = std::collections::HashSet::new();
        for contact in roster.contacts() {
            prop_assert!(seen.insert(contact.name().to_string()));
        }
    }
}

//! Contact roster and search filtering.

use std::collections::HashSet;
use std::fmt;

/// Contacts used when no roster is configured.
pub const DEFAULT_ROSTER: [&str; 4] = ["Rohit Gupta", "Riya", "Sam", "Sakshi"];

/// A known correspondent, identified by display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
}

impl Contact {
    /// Create a contact with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The contact's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fixed, ordered list of contacts.
///
/// Names are unique. The roster is built once and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    contacts: Vec<Contact>,
}

impl Roster {
    /// Build a roster from display names.
    ///
    /// Blank names are skipped. Exact duplicates keep the first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut contacts = Vec::new();

        for name in names {
            let name: String = name.into();
            let name = name.trim();
            if name.is_empty() {
                tracing::warn!("skipping blank roster entry");
                continue;
            }
            if !seen.insert(name.to_string()) {
                tracing::warn!(contact = %name, "skipping duplicate roster entry");
                continue;
            }
            contacts.push(Contact::new(name));
        }

        Self { contacts }
    }

    /// All contacts in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the roster has no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by exact display name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// Contacts whose name contains `query`, ignoring case, in roster order.
    ///
    /// An empty query matches everything. No match yields an empty list.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Contact> {
        if query.is_empty() {
            return self.contacts.iter().collect();
        }
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }
}

//! Embedded fallback name list.
//!
//! Used whenever the remote provider is absent or unreachable. The pool
//! layer handles uniqueness, so repeats from cycling are acceptable here.

use once_cell::sync::Lazy;

use crate::error::NameSourceError;

use super::NameSource;

const FALLBACK_NAMES: [&str; 30] = [
    "Alex Johnson",
    "Marcus Smith",
    "David Wilson",
    "James Brown",
    "Robert Taylor",
    "Michael Davis",
    "Chris Miller",
    "Daniel Moore",
    "Matthew Jackson",
    "Anthony White",
    "Joshua Harris",
    "Andrew Martin",
    "Kevin Thompson",
    "Brian Garcia",
    "Mark Martinez",
    "Paul Robinson",
    "Steven Clark",
    "Kenneth Rodriguez",
    "Edward Lewis",
    "Jason Lee",
    "Ryan Walker",
    "Jacob Hall",
    "Gary Allen",
    "Nicholas Young",
    "Eric Hernandez",
    "Jonathan King",
    "Stephen Wright",
    "Larry Lopez",
    "Justin Hill",
    "Scott Green",
];

static DEFAULT_NAMES: Lazy<Vec<String>> =
    Lazy::new(|| FALLBACK_NAMES.iter().map(|n| n.to_string()).collect());

/// Static, always-available name source.
#[derive(Debug, Clone)]
pub struct StaticNameList {
    names: Vec<String>,
}

impl StaticNameList {
    pub fn new() -> Self {
        StaticNameList { names: DEFAULT_NAMES.clone() }
    }

    /// Custom list; empty input falls back to the embedded names.
    pub fn with_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            StaticNameList::new()
        } else {
            StaticNameList { names }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Infallible candidate batch, cycling the list as needed.
    pub fn cycle(&self, count: usize) -> Vec<String> {
        self.names.iter().cycle().take(count).cloned().collect()
    }
}

impl Default for StaticNameList {
    fn default() -> Self {
        StaticNameList::new()
    }
}

impl NameSource for StaticNameList {
    fn fetch_names(&self, count: usize) -> Result<Vec<String>, NameSourceError> {
        Ok(self.cycle(count))
    }
}

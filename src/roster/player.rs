use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Normalized display name (e.g., "Ada Lovelace")
    pub name: String,
    /// Normalized names this player must not be teamed with
    pub excludes: Vec<String>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            excludes: Vec::new(),
        }
    }
}

/// Capitalize every whitespace separated word and join with single spaces.
///
/// "  ada   LOVELACE " becomes "Ada Lovelace".
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Symmetric "never on the same team" relation between player names
#[derive(Debug, Clone, Default)]
pub struct ExclusionMap {
    pairs: HashMap<String, HashSet<String>>,
}

impl ExclusionMap {
    /// Record that `a` and `b` must not share a team (in both directions)
    pub fn insert(&mut self, a: &str, b: &str) {
        self.pairs
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.pairs
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    pub fn forbids(&self, a: &str, b: &str) -> bool {
        self.pairs.get(a).is_some_and(|set| set.contains(b))
    }

    /// Whether `name` has at least one exclusion
    pub fn is_restricted(&self, name: &str) -> bool {
        self.pairs.get(name).is_some_and(|set| !set.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

mod player;

#[cfg(test)]
mod tests;

pub use player::{normalize_name, ExclusionMap, Player};

use crate::error::BracketError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Marks the start of an excluded partner on a roster line
pub const EXCLUSION_MARKER: &str = "!!";

/// Ordered list of players as read from a roster file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Parse roster text: one player per line.
    ///
    /// Anything after `!!` on a line names a player that must not be teamed
    /// with the first name on that line:
    ///
    /// ```text
    /// player one !!cant match this player !!or this player
    /// ```
    ///
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, BracketError> {
        let mut players = Vec::new();
        let mut seen = HashSet::new();

        for (idx, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }

            let mut segments = raw.split(EXCLUSION_MARKER);
            let name = segments.next().map(normalize_name).unwrap_or_default();
            if name.is_empty() {
                return Err(BracketError::MalformedLine {
                    line: idx + 1,
                    reason: format!("missing player name before `{}`", EXCLUSION_MARKER),
                });
            }

            let excludes: Vec<String> = segments
                .map(normalize_name)
                .filter(|other| !other.is_empty())
                .collect();

            if !seen.insert(name.clone()) {
                warn!(player = %name, line = idx + 1, "duplicate player in roster");
            }

            players.push(Player { name, excludes });
        }

        debug!(players = players.len(), "parsed roster");
        Ok(Self { players })
    }

    /// Read and parse a roster file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BracketError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BracketError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player names in roster order
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Append a player with no exclusions
    pub fn push(&mut self, name: &str) {
        self.players.push(Player::new(name));
    }

    /// Remove and return the player at `index`.
    ///
    /// Exclusions other players declared against the removed one stay in
    /// place; they simply never match.
    pub fn remove_at(&mut self, index: usize) -> Player {
        self.players.remove(index)
    }

    pub fn has_exclusions(&self) -> bool {
        self.players.iter().any(|p| !p.excludes.is_empty())
    }

    /// Build the symmetric exclusion relation for this roster
    pub fn exclusions(&self) -> ExclusionMap {
        let known: HashSet<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        let mut map = ExclusionMap::default();

        for player in &self.players {
            for other in &player.excludes {
                if !known.contains(other.as_str()) {
                    warn!(player = %player.name, excluded = %other, "exclusion names a player not on the roster");
                }
                map.insert(&player.name, other);
            }
        }

        map
    }

    /// Numbered listing, one `"N. Name"` per line
    pub fn numbered_listing(&self) -> String {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

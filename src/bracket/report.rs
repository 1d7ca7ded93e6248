use super::{Bracket, Matchup};
use crate::teams::TeamSize;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Machine-readable bracket, emitted with `--format json`
#[derive(Debug, Serialize, Deserialize)]
pub struct BracketReport {
    pub generator: String,
    pub generated_at: String,
    /// Seed that reproduces this draw, when one was given
    pub seed: Option<u64>,
    /// SHA-256 of the roster the bracket was drawn from
    pub roster_digest: String,
    pub players_per_team: TeamSize,
    pub matchups: Vec<Matchup>,
}

impl BracketReport {
    pub fn new(bracket: Bracket, roster_names: &[String], seed: Option<u64>) -> Self {
        Self {
            generator: format!("bracket-planner v{}", env!("CARGO_PKG_VERSION")),
            generated_at: Utc::now().to_rfc3339(),
            seed,
            roster_digest: roster_digest(roster_names),
            players_per_team: bracket.team_size,
            matchups: bracket.matchups,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Hex SHA-256 of the names joined by newlines
pub fn roster_digest(names: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(names.join("\n").as_bytes());
    hex::encode(hasher.finalize())
}

// Public API exports
pub mod bracket;
pub mod config;
pub mod error;
pub mod roster;
pub mod shuffler;
pub mod teams;

// Re-export main types for convenience
pub use error::BracketError;
pub use shuffler::{shuffle, shuffle_seeded, RandomSource, RngSource, UnitIntervalSource};

pub use roster::{normalize_name, ExclusionMap, Player, Roster};

pub use teams::{
    chunk, form_pairs_with_exclusions, form_teams, plan_teams, resolve_odd_roster,
    validate_roster, OddRosterPolicy, Team, TeamSize, DEFAULT_MAX_PAIRING_ATTEMPTS, MIN_PLAYERS,
};

pub use bracket::{roster_digest, Bracket, BracketReport, Matchup};

pub use config::{load_settings, OutputFormat, Settings};

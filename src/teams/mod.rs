mod pairing;


pub use pairing::{
    form_pairs_with_exclusions, form_teams, plan_teams, resolve_odd_roster, validate_roster,
    OddRosterPolicy,
};

use crate::error::BracketError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest roster that still yields at least one game
pub const MIN_PLAYERS: usize = 4;

/// Default number of rejected partner draws before pairing gives up
pub const DEFAULT_MAX_PAIRING_ATTEMPTS: u32 = 10;

/// Players per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamSize {
    #[value(name = "1")]
    Solo,
    #[value(name = "2")]
    Pair,
}

impl TeamSize {
    pub fn get(self) -> usize {
        match self {
            TeamSize::Solo => 1,
            TeamSize::Pair => 2,
        }
    }
}

impl TryFrom<u8> for TeamSize {
    type Error = BracketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamSize::Solo),
            2 => Ok(TeamSize::Pair),
            other => Err(BracketError::UnsupportedTeamSize(other)),
        }
    }
}

impl From<TeamSize> for u8 {
    fn from(size: TeamSize) -> Self {
        size.get() as u8
    }
}

/// One or two players competing together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    players: Vec<String>,
}

impl Team {
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.players.join(" & "))
    }
}

/// Split `items` into consecutive groups of `size`.
///
/// Only the last group may be shorter:
///
/// ```
/// use bracket_planner::chunk;
///
/// let groups = chunk(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 2).unwrap();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8], vec![9]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, BracketError> {
    if size == 0 {
        return Err(BracketError::InvalidChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

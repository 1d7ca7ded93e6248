mod report;


pub use report::{roster_digest, BracketReport};

use crate::shuffler::{shuffle, RandomSource};
use crate::teams::{Team, TeamSize};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const RULE_WIDTH: usize = 100;

/// One slot of the first round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matchup {
    /// Two teams play each other
    Game { number: usize, home: Team, away: Team },
    /// Odd team out advances to the second round
    Bye { number: usize, team: Team },
}

impl Matchup {
    pub fn number(&self) -> usize {
        match self {
            Matchup::Game { number, .. } | Matchup::Bye { number, .. } => *number,
        }
    }
}

/// First-round schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub team_size: TeamSize,
    pub matchups: Vec<Matchup>,
}

impl Bracket {
    /// Shuffle the teams and pair them off in order.
    ///
    /// With an odd number of teams the last one gets a bye. Numbers count
    /// every matchup from 1, byes included.
    pub fn draw<S>(mut teams: Vec<Team>, team_size: TeamSize, source: &mut S) -> Self
    where
        S: RandomSource + ?Sized,
    {
        shuffle(&mut teams, source);

        let mut matchups = Vec::with_capacity(teams.len().div_ceil(2));
        let mut remaining = teams.into_iter();
        while let Some(home) = remaining.next() {
            let number = matchups.len() + 1;
            matchups.push(match remaining.next() {
                Some(away) => Matchup::Game { number, home, away },
                None => Matchup::Bye { number, team: home },
            });
        }

        debug!(matchups = matchups.len(), "drew bracket");
        Self {
            team_size,
            matchups,
        }
    }

    pub fn game_count(&self) -> usize {
        self.matchups
            .iter()
            .filter(|m| matches!(m, Matchup::Game { .. }))
            .count()
    }

    pub fn bye(&self) -> Option<&Team> {
        self.matchups.iter().find_map(|m| match m {
            Matchup::Bye { team, .. } => Some(team),
            Matchup::Game { .. } => None,
        })
    }

    /// Plain-text schedule, framed by banner rules
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashes = "-".repeat(RULE_WIDTH);
        let stars = "*".repeat(45);

        writeln!(f, "{}", dashes)?;
        writeln!(f, "{} MATCHES {}", stars, stars)?;
        writeln!(f, "{}", dashes)?;

        for matchup in &self.matchups {
            match matchup {
                Matchup::Game { number, home, away } => {
                    writeln!(f, "Game {}:   {}\t vs.\t {}\n", number, home, away)?;
                }
                Matchup::Bye { team, .. } => {
                    writeln!(f, "Automatically advances to second round: {}", team)?;
                }
            }
        }

        writeln!(f, "{}", dashes)?;
        writeln!(f, "{}", "*".repeat(RULE_WIDTH))?;
        writeln!(f, "{}", dashes)
    }
}

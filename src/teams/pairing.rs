use super::{Team, TeamSize, MIN_PLAYERS};
use crate::error::BracketError;
use crate::roster::Roster;
use crate::shuffler::{shuffle, RandomSource};
use tracing::{debug, info, warn};

/// What to do when pairs are requested from an odd number of players
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OddRosterPolicy {
    /// Fail with the numbered player list
    #[default]
    Reject,
    /// Remove one uniformly chosen player
    DropRandom,
    /// Append the named player
    Add(String),
}

/// Make an odd roster even according to `policy`.
///
/// Only applies to [`TeamSize::Pair`]; otherwise the roster is left alone.
pub fn resolve_odd_roster<S>(
    roster: &mut Roster,
    size: TeamSize,
    policy: &OddRosterPolicy,
    source: &mut S,
) -> Result<(), BracketError>
where
    S: RandomSource + ?Sized,
{
    if size != TeamSize::Pair || roster.len() % 2 == 0 {
        return Ok(());
    }

    match policy {
        OddRosterPolicy::Reject => Err(BracketError::OddPlayerCount {
            count: roster.len(),
            listing: roster.numbered_listing(),
        }),
        OddRosterPolicy::DropRandom => {
            let index = source.index_through(roster.len() - 1);
            let removed = roster.remove_at(index);
            info!(player = %removed.name, "removed random player to even out the roster");
            Ok(())
        }
        OddRosterPolicy::Add(name) => {
            roster.push(name);
            info!(player = %name, "added player to even out the roster");
            Ok(())
        }
    }
}

/// Check the roster can be split into teams of `size` and still play a game
pub fn validate_roster(roster: &Roster, size: TeamSize) -> Result<(), BracketError> {
    if roster.len() < MIN_PLAYERS {
        return Err(BracketError::NotEnoughPlayers {
            found: roster.len(),
            min: MIN_PLAYERS,
        });
    }
    if size == TeamSize::Pair && roster.len() % 2 != 0 {
        return Err(BracketError::OddPlayerCount {
            count: roster.len(),
            listing: roster.numbered_listing(),
        });
    }
    Ok(())
}

/// Shuffle `names` and cut them into teams of `size`
pub fn form_teams<S>(mut names: Vec<String>, size: TeamSize, source: &mut S) -> Vec<Team>
where
    S: RandomSource + ?Sized,
{
    shuffle(&mut names, source);
    names
        .chunks(size.get())
        .map(|group| Team::new(group.to_vec()))
        .collect()
}

/// Pair players at random while honouring the roster's exclusions.
///
/// Restricted players are paired first so the unrestricted ones are left
/// over as flexible partners. Each draw that lands on an excluded partner
/// is redrawn; after `max_attempts` such rejections in total the pairing
/// gives up.
pub fn form_pairs_with_exclusions<S>(
    roster: &Roster,
    source: &mut S,
    max_attempts: u32,
) -> Result<Vec<Team>, BracketError>
where
    S: RandomSource + ?Sized,
{
    let exclusions = roster.exclusions();
    let (mut restricted, mut open): (Vec<String>, Vec<String>) = roster
        .names()
        .into_iter()
        .partition(|name| exclusions.is_restricted(name));

    shuffle(&mut restricted, source);
    shuffle(&mut open, source);
    debug!(
        restricted = restricted.len(),
        open = open.len(),
        "pairing with exclusions"
    );

    // Popped from the back, so restricted players come out first
    let mut pool = open;
    pool.extend(restricted);

    let mut teams = Vec::with_capacity(pool.len() / 2);
    let mut rejected = 0u32;

    while let Some(player) = pool.pop() {
        if !pool
            .iter()
            .any(|candidate| !exclusions.forbids(&player, candidate))
        {
            return Err(BracketError::NoCompatiblePartner(player));
        }

        loop {
            let index = source.index_through(pool.len() - 1);
            let candidate = &pool[index];
            if exclusions.forbids(&player, candidate) {
                rejected += 1;
                debug!(player = %player, excluded = %candidate, "drew an excluded partner, redrawing");
                if rejected >= max_attempts {
                    return Err(BracketError::PairingExhausted { attempts: rejected });
                }
                continue;
            }

            let partner = pool.remove(index);
            teams.push(Team::new(vec![player, partner]));
            break;
        }
    }

    Ok(teams)
}

/// Form teams for the whole roster, picking the exclusion-aware path when
/// pairs are requested and the roster declares exclusions.
pub fn plan_teams<S>(
    roster: &Roster,
    size: TeamSize,
    source: &mut S,
    max_attempts: u32,
) -> Result<Vec<Team>, BracketError>
where
    S: RandomSource + ?Sized,
{
    match size {
        TeamSize::Pair if roster.has_exclusions() => {
            form_pairs_with_exclusions(roster, source, max_attempts)
        }
        _ => {
            if roster.has_exclusions() {
                warn!("exclusions only apply to teams of two; ignoring them");
            }
            Ok(form_teams(roster.names(), size, source))
        }
    }
}

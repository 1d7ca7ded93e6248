use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BracketError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("Unsupported team size {0} (allowed: 1, 2)")]
    UnsupportedTeamSize(u8),

    #[error("There must be at least {min} players, found {found}")]
    NotEnoughPlayers { found: usize, min: usize },

    #[error(
        "There must be an even number of players!\n\nI count {count} players, currently. They are:\n{listing}"
    )]
    OddPlayerCount { count: usize, listing: String },

    #[error("No compatible partner left for {0}")]
    NoCompatiblePartner(String),

    #[error("Gave up pairing after {attempts} rejected draws; try another seed")]
    PairingExhausted { attempts: u32 },
}

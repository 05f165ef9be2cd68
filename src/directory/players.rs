use rand::seq::IteratorRandom;
use rand::Rng;
use std::path::Path;

use tracing::info;

use crate::domain::PlayerRecord;
use crate::error::{NbaBotError, Result};

/// Read-only player list, queried by exact first/last name
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<PlayerRecord>,
}

impl PlayerDirectory {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Load a JSON array of player records
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let players: Vec<PlayerRecord> = serde_json::from_str(&raw)?;
        info!("Loaded {} players from {}", players.len(), path.display());
        Ok(Self::new(players))
    }

    /// A player on a current roster, picked uniformly
    pub fn random_active<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PlayerRecord> {
        self.players.iter().filter(|p| p.is_active).choose(rng)
    }

    /// Find the single player whose lowercased names equal `first` and `last`.
    ///
    /// `last` includes any suffix ("hardaway jr."). More than one match is
    /// reported rather than picking one.
    pub fn find(&self, first: &str, last: &str) -> Result<&PlayerRecord> {
        self.find_matching(first, last, false)
    }

    /// Like [`find`](Self::find), restricted to players on a current roster
    pub fn find_active(&self, first: &str, last: &str) -> Result<&PlayerRecord> {
        self.find_matching(first, last, true)
    }

    fn find_matching(&self, first: &str, last: &str, active_only: bool) -> Result<&PlayerRecord> {
        let first = first.to_lowercase();
        let last = last.to_lowercase();

        let matches: Vec<&PlayerRecord> = self
            .players
            .iter()
            .filter(|p| !active_only || p.is_active)
            .filter(|p| p.first_name.to_lowercase() == first && p.last_name.to_lowercase() == last)
            .collect();

        match matches.as_slice() {
            [player] => Ok(*player),
            [] => Err(NbaBotError::PlayerNotFound {
                name: format!("{first} {last}"),
            }),
            many => Err(NbaBotError::AmbiguousPlayerName {
                name: format!("{first} {last}"),
                matches: many.len(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }
}

//! Collaborator interfaces for the stats backend.
//!
//! Commands only see these traits, so tests can swap the HTTP client for
//! in-memory fixtures.

use async_trait::async_trait;

use crate::domain::{
    DraftPick, GameRecord, PlayerProfile, PlayerRecord, SeasonScope, SeasonType, Standings,
};
use crate::error::Result;

/// Per-player game logs
#[async_trait]
pub trait GameLogProvider: Send + Sync {
    /// Games played by `player_id` in `scope`, newest first
    async fn player_game_log(
        &self,
        player_id: u64,
        scope: &SeasonScope,
        season_type: SeasonType,
    ) -> Result<Vec<GameRecord>>;
}

/// Current team information for a player
#[async_trait]
pub trait PlayerProfileProvider: Send + Sync {
    async fn player_profile(&self, player_id: u64) -> Result<PlayerProfile>;
}

/// League-wide team game logs
#[async_trait]
pub trait LeagueGameLogProvider: Send + Sync {
    /// One row per team per game for the season starting in `season_year`,
    /// newest first
    async fn league_game_log(&self, season_year: i32) -> Result<Vec<GameRecord>>;
}

/// Draft history lookups
#[async_trait]
pub trait DraftProvider: Send + Sync {
    async fn draft_pick(&self, year: &str, overall_pick: u32) -> Result<Option<DraftPick>>;
}

/// Full player list used to build a player directory
#[async_trait]
pub trait PlayerListProvider: Send + Sync {
    async fn all_players(&self) -> Result<Vec<PlayerRecord>>;
}

/// Conference standings
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// East and west tables for the season starting in `season_year`
    async fn standings(&self, season_year: i32) -> Result<Standings>;
}

/// Everything the command layer needs from a stats backend
pub trait StatsProvider:
    GameLogProvider
    + PlayerProfileProvider
    + LeagueGameLogProvider
    + DraftProvider
    + PlayerListProvider
    + StandingsProvider
{
}

impl<T> StatsProvider for T where
    T: GameLogProvider
        + PlayerProfileProvider
        + LeagueGameLogProvider
        + DraftProvider
        + PlayerListProvider
        + StandingsProvider
{
}

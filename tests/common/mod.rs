//! In-memory stats backend shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use nbabot::adapters::{
    DraftProvider, GameLogProvider, LeagueGameLogProvider, PlayerListProvider,
    PlayerProfileProvider, StandingsProvider,
};
use nbabot::domain::{
    DraftPick, GameRecord, PlayerProfile, PlayerRecord, SeasonScope, SeasonType, Standings,
};
use nbabot::{AppConfig, Bot, PlayerDirectory, Result, TeamDirectory};

#[derive(Default)]
pub struct FakeStats {
    pub player_logs: HashMap<(u64, String, SeasonType), Vec<GameRecord>>,
    pub profiles: HashMap<u64, PlayerProfile>,
    pub league_logs: HashMap<i32, Vec<GameRecord>>,
    pub picks: HashMap<(String, u32), DraftPick>,
    pub players: Vec<PlayerRecord>,
    pub standings: Standings,
    pub requests: Mutex<Vec<String>>,
}

impl FakeStats {
    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameLogProvider for FakeStats {
    async fn player_game_log(
        &self,
        player_id: u64,
        scope: &SeasonScope,
        season_type: SeasonType,
    ) -> Result<Vec<GameRecord>> {
        let season = scope.api_param();
        self.record(format!("gamelog {player_id} {season} {season_type}"));
        Ok(self
            .player_logs
            .get(&(player_id, season, season_type))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl PlayerProfileProvider for FakeStats {
    async fn player_profile(&self, player_id: u64) -> Result<PlayerProfile> {
        self.record(format!("profile {player_id}"));
        Ok(self.profiles.get(&player_id).cloned().unwrap_or(PlayerProfile {
            player_id,
            team_abbreviation: String::new(),
            team_city: String::new(),
            team_name: String::new(),
        }))
    }
}

#[async_trait]
impl LeagueGameLogProvider for FakeStats {
    async fn league_game_log(&self, season_year: i32) -> Result<Vec<GameRecord>> {
        self.record(format!("league {season_year}"));
        Ok(self.league_logs.get(&season_year).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl DraftProvider for FakeStats {
    async fn draft_pick(&self, year: &str, overall_pick: u32) -> Result<Option<DraftPick>> {
        self.record(format!("draft {year} {overall_pick}"));
        Ok(self.picks.get(&(year.to_string(), overall_pick)).cloned())
    }
}

#[async_trait]
impl PlayerListProvider for FakeStats {
    async fn all_players(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.players.clone())
    }
}

#[async_trait]
impl StandingsProvider for FakeStats {
    async fn standings(&self, season_year: i32) -> Result<Standings> {
        self.record(format!("standings {season_year}"));
        Ok(self.standings.clone())
    }
}

pub fn profile(player_id: u64, abbr: &str, city: &str, name: &str) -> PlayerProfile {
    PlayerProfile {
        player_id,
        team_abbreviation: abbr.into(),
        team_city: city.into(),
        team_name: name.into(),
    }
}

pub fn player(id: u64, first: &str, last: &str, active: bool) -> PlayerRecord {
    PlayerRecord {
        id,
        full_name: format!("{first} {last}"),
        first_name: first.into(),
        last_name: last.into(),
        is_active: active,
    }
}

pub fn players() -> Vec<PlayerRecord> {
    vec![
        player(201935, "James", "Harden", true),
        player(203501, "Tim", "Hardaway Jr.", true),
        player(947, "Allen", "Iverson", false),
    ]
}

#[allow(clippy::too_many_arguments)]
pub fn game(
    game_id: &str,
    team_id: u64,
    abbr: &str,
    name: &str,
    date: (i32, u32, u32),
    matchup: &str,
    pts: u32,
    shooting: (u32, u32, u32, u32),
) -> GameRecord {
    let (fgm, fga, ftm, fta) = shooting;
    GameRecord {
        game_id: game_id.into(),
        team_id,
        team_abbreviation: abbr.into(),
        team_full_name: name.into(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        matchup: matchup.into(),
        pts,
        min: 36.0,
        fg_made: fgm,
        fg_attempted: fga,
        ft_made: ftm,
        ft_attempted: fta,
        ast: 6,
        reb: 5,
        stl: 1,
        blk: 1,
    }
}

pub fn bot(stats: FakeStats) -> (Bot, Arc<FakeStats>) {
    let stats = Arc::new(stats);
    let bot = Bot::new(
        PlayerDirectory::new(players()),
        TeamDirectory::nba(),
        stats.clone(),
        &AppConfig::default(),
    );
    (bot, stats)
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One team's (or one player's) box-score line for a single game.
///
/// Two records sharing a `game_id` in a league log are the two sides of the
/// same game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub team_id: u64,
    pub team_abbreviation: String,
    pub team_full_name: String,
    pub date: NaiveDate,
    /// e.g. "HOU vs. LAL" (home) or "HOU @ LAL" (away)
    pub matchup: String,
    pub pts: u32,
    pub min: f64,
    pub fg_made: u32,
    pub fg_attempted: u32,
    pub ft_made: u32,
    pub ft_attempted: u32,
    pub ast: u32,
    pub reb: u32,
    pub stl: u32,
    pub blk: u32,
}

impl GameRecord {
    /// Leading three-letter team code of the matchup string
    pub fn matchup_team_code(&self) -> Option<&str> {
        matchup_team_code(&self.matchup)
    }
}

/// Extract the leading 3-character team code from a matchup like "MIA @ BOS".
pub fn matchup_team_code(matchup: &str) -> Option<&str> {
    matchup.get(0..3).filter(|code| code.chars().all(|c| c.is_ascii_alphanumeric()))
}

use chrono::{Local, NaiveDate};
use tracing::info;

use super::{Bot, Embed, Reply};
use crate::adapters::{LeagueGameLogProvider, StandingsProvider};
use crate::directory::TeamDirectory;
use crate::domain::{conference_table, season_year_for_date, GameRecord};
use crate::error::{NbaBotError, Result};
use crate::stats::{games_on_date, last_game_for_team};

const GAMES_COLOR: u32 = 0xBEC0C2;
const TEAMS_COLOR: u32 = 0x3354FF;
const STANDINGS_COLOR: u32 = 0x3DFF33;
const TEAMS_PER_FIELD: usize = 10;

fn team_logo_url(abbreviation: &str) -> String {
    format!(
        "https://a.espncdn.com/i/teamlogos/nba/500/{}.png",
        abbreviation.to_lowercase()
    )
}

impl Bot {
    /// `games [YYYY-MM-DD]`: every final score on a date, today by default
    pub(super) async fn games(&self, date: Option<NaiveDate>) -> Result<Reply> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let season_year = season_year_for_date(date);

        let log = self.provider.league_game_log(season_year).await?;
        let games = games_on_date(&log, date)?;
        info!(%date, games = games.len(), "games on date");

        let day = date.format("%Y-%m-%d").to_string();
        let embed = games.iter().fold(
            Embed::new("Get Games", GAMES_COLOR).description(format!("Games occurring on {day}:")),
            |embed, game| embed.field(game.known.matchup.clone(), game.score()),
        );
        Ok(embed.into())
    }

    /// `last <team name>`: most recent result for a team this season
    pub(super) async fn last(&self, args: &[String]) -> Result<Reply> {
        if args.is_empty() {
            return Err(NbaBotError::InvalidArgument(
                "Please enter a team name, e.g. miami heat.".to_string(),
            ));
        }
        let name = args.join(" ").to_lowercase();
        let team = self.teams.find(&name)?;

        let season_year = i32::from(self.current_season_year()?);
        let log = self.provider.league_game_log(season_year).await?;

        let Some(game) = last_game_for_team(&log, team.id)? else {
            return Ok(Reply::message(format!(
                "The {} have not played this season.",
                team.full_name
            )));
        };

        let known = game.known;
        let opponent = game.opponent;
        let embed = Embed::new(known.date.format("%Y-%m-%d").to_string(), team.color)
            .description(known.matchup.clone())
            .thumbnail(team_logo_url(&team.abbreviation))
            .field(display_team_name(known, &self.teams), known.pts.to_string())
            .field(display_team_name(opponent, &self.teams), opponent.pts.to_string());
        Ok(embed.into())
    }

    /// `standings`: current conference tables
    pub(super) async fn standings(&self) -> Result<Reply> {
        let season_year = i32::from(self.current_season_year()?);
        let standings = self.provider.standings(season_year).await?;
        info!(
            season_year,
            east = standings.east.len(),
            west = standings.west.len(),
            "standings"
        );

        let embed = Embed::new("NBA STANDINGS", STANDINGS_COLOR)
            .field("Western Conference", conference_table(&standings.west))
            .field("Eastern Conference", conference_table(&standings.east));
        Ok(embed.into())
    }

    /// `teams`: every franchise in alphabetical order
    pub(super) fn teams_list(&self) -> Reply {
        let names: Vec<&str> = self
            .teams
            .alphabetical()
            .into_iter()
            .map(|t| t.full_name.as_str())
            .collect();

        names
            .chunks(TEAMS_PER_FIELD)
            .fold(Embed::new("NBA TEAMS", TEAMS_COLOR), |embed, chunk| {
                embed.field("_", chunk.join("\n"))
            })
            .into()
    }
}

/// League rows carry the team name; fall back to the directory otherwise
fn display_team_name(row: &GameRecord, teams: &TeamDirectory) -> String {
    if !row.team_full_name.is_empty() {
        return row.team_full_name.clone();
    }
    teams
        .by_id(row.team_id)
        .map(|t| t.full_name.clone())
        .unwrap_or_else(|| row.team_abbreviation.clone())
}

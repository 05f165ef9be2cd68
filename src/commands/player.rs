use rand::Rng;
use tracing::info;

use super::{Bot, Embed, Reply};
use crate::adapters::GameLogProvider;
use crate::domain::{season_label, PlayerRecord, SeasonScope, SeasonType};
use crate::error::{NbaBotError, Result};
use crate::query::resolve_with_default;
use crate::stats::{aggregate, resolve_team, StatsSummary};

const CAREER_COLOR: u32 = 0x738ADB;
const DID_NOT_PLAY: &str = "Player did not play this season.";

impl Bot {
    /// `season <first> <last> [suffix] [year] [regular|playoffs]`
    pub(super) async fn season(&self, args: &[String]) -> Result<Reply> {
        let query = resolve_with_default(args, &self.current_season)?;
        self.check_season_year(&query.year)?;

        let player = self
            .players
            .find_active(&query.first_name, &query.directory_last_name())?;

        let title = format!(
            "{} {} Season Stats",
            season_label(&query.year),
            query.season_type
        );
        self.season_summary(player, &query.year, query.season_type, title)
            .await
    }

    /// `pull`: current regular season of a random active player
    pub async fn pull_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Reply> {
        let player = self
            .players
            .random_active(rng)
            .ok_or_else(|| NbaBotError::PlayerNotFound {
                name: "any active player".to_string(),
            })?;

        let title = format!("{} Season", season_label(&self.current_season));
        self.season_summary(player, &self.current_season, SeasonType::Regular, title)
            .await
    }

    async fn season_summary(
        &self,
        player: &PlayerRecord,
        year: &str,
        season_type: SeasonType,
        title: String,
    ) -> Result<Reply> {
        let scope = SeasonScope::Year(year.to_string());
        let games = self
            .provider
            .player_game_log(player.id, &scope, season_type)
            .await?;

        let team = resolve_team(
            player,
            year,
            &self.current_season,
            &games,
            self.provider.as_ref(),
            &self.teams,
        )
        .await?;

        if team.is_empty() {
            return Ok(Reply::message(DID_NOT_PLAY));
        }
        let summary = match aggregate(&games) {
            Ok(summary) => summary,
            Err(NbaBotError::EmptyGameLog) => return Ok(Reply::message(DID_NOT_PLAY)),
            Err(e) => return Err(e),
        };

        info!(
            player = %player.full_name,
            year,
            season_type = %season_type,
            games = summary.games_played(),
            "season stats"
        );

        let team_name = team.display_name().unwrap_or_default();
        let color = self
            .teams
            .color(team.abbreviation.as_deref().unwrap_or_default());
        let embed = Embed::new(title, color)
            .description(format!("{}, {}", player.full_name, team_name.to_uppercase()));

        Ok(with_summary(embed, &summary).into())
    }

    /// `career <first> <last> [suffix] [playoffs]`
    pub(super) async fn career(&self, args: &[String]) -> Result<Reply> {
        let query = resolve_with_default(args, &self.current_season)?;
        let player = self
            .players
            .find(&query.first_name, &query.directory_last_name())?;

        let games = self
            .provider
            .player_game_log(player.id, &SeasonScope::AllTime, query.season_type)
            .await?;

        let summary = match aggregate(&games) {
            Ok(summary) => summary,
            Err(NbaBotError::EmptyGameLog) => {
                return Ok(Reply::message(format!(
                    "{} has no {} games on record.",
                    player.full_name,
                    query.season_type.as_str().to_lowercase()
                )))
            }
            Err(e) => return Err(e),
        };

        let title = match query.season_type {
            SeasonType::Regular => "Career Stats".to_string(),
            SeasonType::Playoffs => "Career Playoffs Stats".to_string(),
        };
        let embed = Embed::new(title, CAREER_COLOR).description(player.full_name.clone());
        Ok(with_summary(embed, &summary).into())
    }
}

fn with_summary(embed: Embed, summary: &StatsSummary) -> Embed {
    summary
        .iter()
        .fold(embed, |embed, (name, value)| embed.field(name, value))
}

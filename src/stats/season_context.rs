//! Which team a player was on for a queried season.

use serde::Serialize;
use tracing::debug;

use crate::adapters::PlayerProfileProvider;
use crate::directory::TeamDirectory;
use crate::domain::{GameRecord, PlayerRecord};
use crate::error::Result;

/// Team abbreviation and full name; both absent means no games that season
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamContext {
    pub abbreviation: Option<String>,
    pub full_name: Option<String>,
}

impl TeamContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviation.is_none() && self.full_name.is_none()
    }

    /// Name to show for the team. Franchises that have since moved have
    /// no directory entry, so their code stands in for the name.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().or(self.abbreviation.as_deref())
    }
}

/// Resolve the team for `player` in the season starting `year`.
///
/// The current season is answered by the player's profile, since the game
/// log may still be empty. Past seasons use the team code of the first game
/// in the log; an empty log gives an empty context.
pub async fn resolve_team<P>(
    player: &PlayerRecord,
    year: &str,
    current_season: &str,
    games: &[GameRecord],
    profiles: &P,
    teams: &TeamDirectory,
) -> Result<TeamContext>
where
    P: PlayerProfileProvider + ?Sized,
{
    if year == current_season {
        let profile = profiles.player_profile(player.id).await?;
        let full_name = profile.team_full_name();
        debug!(player = %player.full_name, team = %profile.team_abbreviation, "team from profile");
        return Ok(TeamContext {
            abbreviation: Some(profile.team_abbreviation).filter(|a| !a.is_empty()),
            full_name: Some(full_name).filter(|n| !n.is_empty()),
        });
    }

    Ok(team_from_game_log(games, teams))
}

/// Team of the first game in the log, looked up by matchup code
pub fn team_from_game_log(games: &[GameRecord], teams: &TeamDirectory) -> TeamContext {
    let Some(code) = games.first().and_then(GameRecord::matchup_team_code) else {
        return TeamContext::empty();
    };

    TeamContext {
        abbreviation: Some(code.to_string()),
        full_name: teams.by_abbreviation(code).map(|t| t.full_name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerProfile;
    use crate::error::NbaBotError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProfile {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlayerProfileProvider for FixedProfile {
        async fn player_profile(&self, player_id: u64) -> Result<PlayerProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PlayerProfile {
                player_id,
                team_abbreviation: "HOU".into(),
                team_city: "Houston".into(),
                team_name: "Rockets".into(),
            })
        }
    }

    struct FailingProfile;

    #[async_trait]
    impl PlayerProfileProvider for FailingProfile {
        async fn player_profile(&self, _player_id: u64) -> Result<PlayerProfile> {
            Err(NbaBotError::InvalidResponse("offline".into()))
        }
    }

    fn harden() -> PlayerRecord {
        PlayerRecord {
            id: 201935,
            full_name: "James Harden".into(),
            first_name: "James".into(),
            last_name: "Harden".into(),
            is_active: true,
        }
    }

    fn game(matchup: &str) -> GameRecord {
        GameRecord {
            game_id: "0021200001".into(),
            team_id: 0,
            team_abbreviation: String::new(),
            team_full_name: String::new(),
            date: NaiveDate::from_ymd_opt(2012, 11, 1).unwrap(),
            matchup: matchup.into(),
            pts: 20,
            min: 30.0,
            fg_made: 7,
            fg_attempted: 15,
            ft_made: 4,
            ft_attempted: 5,
            ast: 3,
            reb: 4,
            stl: 1,
            blk: 0,
        }
    }

    #[tokio::test]
    async fn test_current_season_uses_profile() {
        let profiles = FixedProfile {
            calls: AtomicUsize::new(0),
        };
        let ctx = resolve_team(&harden(), "2019", "2019", &[], &profiles, &TeamDirectory::nba())
            .await
            .unwrap();
        assert_eq!(ctx.abbreviation.as_deref(), Some("HOU"));
        assert_eq!(ctx.display_name(), Some("Houston Rockets"));
        assert_eq!(profiles.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_past_season_uses_first_matchup() {
        let games = vec![game("OKC @ LAL"), game("HOU vs. OKC")];
        let ctx = resolve_team(
            &harden(),
            "2011",
            "2019",
            &games,
            &FailingProfile,
            &TeamDirectory::nba(),
        )
        .await
        .unwrap();
        assert_eq!(ctx.abbreviation.as_deref(), Some("OKC"));
        assert_eq!(ctx.display_name(), Some("Oklahoma City Thunder"));
    }

    #[tokio::test]
    async fn test_past_season_without_games_is_empty() {
        let ctx = resolve_team(&harden(), "2005", "2019", &[], &FailingProfile, &TeamDirectory::nba())
            .await
            .unwrap();
        assert!(ctx.is_empty());
        assert_eq!(ctx.display_name(), None);
    }

    #[tokio::test]
    async fn test_profile_failure_propagates() {
        let result =
            resolve_team(&harden(), "2019", "2019", &[], &FailingProfile, &TeamDirectory::nba())
                .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_team_code_has_no_full_name() {
        let ctx = team_from_game_log(&[game("SEA vs. POR")], &TeamDirectory::nba());
        assert_eq!(ctx.abbreviation.as_deref(), Some("SEA"));
        assert!(ctx.full_name.is_none());
        assert!(!ctx.is_empty());
        assert_eq!(ctx.display_name(), Some("SEA"));
    }
}

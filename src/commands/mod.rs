//! Chat command handling.
//!
//! A command line such as `!season tim hardaway jr 2018 playoffs` is split
//! on whitespace, routed by name and answered with a [`Reply`]. Failures a
//! user can act on become plain messages; nothing here renders output.

mod draft;
mod help;
mod player;
pub mod reply;
mod team;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::adapters::StatsProvider;
use crate::config::AppConfig;
use crate::directory::{PlayerDirectory, TeamDirectory};
use crate::error::{NbaBotError, Result};

pub use reply::{Embed, EmbedField, Reply};

/// A parsed command with its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Season(Vec<String>),
    Career(Vec<String>),
    Games(Option<NaiveDate>),
    Last(Vec<String>),
    Teams,
    Standings,
    Pull,
    Draft { year: Option<String>, pick: Option<String> },
    Help,
    PlayerHelp,
    TeamHelp,
}

impl Command {
    pub fn parse(name: &str, args: &[String]) -> Result<Self> {
        let command = match name.to_lowercase().as_str() {
            "season" => Command::Season(args.to_vec()),
            "career" => Command::Career(args.to_vec()),
            "get_games" | "games" => Command::Games(parse_date_arg(args)?),
            "last" => Command::Last(args.to_vec()),
            "teams" => Command::Teams,
            "standings" => Command::Standings,
            "pull" => Command::Pull,
            "draft" => Command::Draft {
                year: args.first().cloned(),
                pick: args.get(1).cloned(),
            },
            "help" => Command::Help,
            "player" => Command::PlayerHelp,
            "team" => Command::TeamHelp,
            other => return Err(NbaBotError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_date_arg(args: &[String]) -> Result<Option<NaiveDate>> {
    if args.is_empty() {
        return Ok(None);
    }
    let raw = args.join(" ");
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| NbaBotError::InvalidDate(raw))
}

/// Split `<prefix><name> args...` into name and arguments.
/// Lines without the prefix are not commands.
pub fn split_command_line(prefix: &str, line: &str) -> Option<(String, Vec<String>)> {
    let rest = line.trim().strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace().map(String::from);
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

/// Command dispatcher holding the injected directories and stats backend
pub struct Bot {
    players: PlayerDirectory,
    teams: TeamDirectory,
    provider: Arc<dyn StatsProvider>,
    prefix: String,
    current_season: String,
    first_season: u16,
}

impl Bot {
    pub fn new(
        players: PlayerDirectory,
        teams: TeamDirectory,
        provider: Arc<dyn StatsProvider>,
        config: &AppConfig,
    ) -> Self {
        Self {
            players,
            teams,
            provider,
            prefix: config.bot.prefix.clone(),
            current_season: config.season.current.clone(),
            first_season: config.season.first,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn teams(&self) -> &TeamDirectory {
        &self.teams
    }

    /// Answer a chat line, or `None` if it is not addressed to the bot
    pub async fn handle_line(&self, line: &str) -> Option<Reply> {
        let (name, args) = split_command_line(&self.prefix, line)?;
        let result = match Command::parse(&name, &args) {
            Ok(command) => self.execute(command).await,
            Err(e) => Err(e),
        };
        Some(result.unwrap_or_else(|e| self.error_reply(&name, e)))
    }

    /// Run a parsed command, turning user-facing failures into messages
    pub async fn respond(&self, command: Command) -> Reply {
        let label = format!("{command:?}");
        self.execute(command)
            .await
            .unwrap_or_else(|e| self.error_reply(&label, e))
    }

    pub async fn execute(&self, command: Command) -> Result<Reply> {
        debug!(?command, "executing command");
        match command {
            Command::Season(args) => self.season(&args).await,
            Command::Career(args) => self.career(&args).await,
            Command::Games(date) => self.games(date).await,
            Command::Last(args) => self.last(&args).await,
            Command::Teams => Ok(self.teams_list()),
            Command::Standings => self.standings().await,
            Command::Pull => {
                let mut rng = StdRng::from_entropy();
                self.pull_with(&mut rng).await
            }
            Command::Draft { year, pick } => self.draft(year, pick).await,
            Command::Help => Ok(help::general(&self.prefix)),
            Command::PlayerHelp => Ok(help::player(&self.prefix, &self.current_season)),
            Command::TeamHelp => Ok(help::team(&self.prefix)),
        }
    }

    fn error_reply(&self, command: &str, err: NbaBotError) -> Reply {
        warn!(command, error = %err, "command failed");
        Reply::message(err.user_message())
    }

    fn current_season_year(&self) -> Result<u16> {
        self.current_season
            .parse()
            .map_err(|_| NbaBotError::InvalidSeasonYear(self.current_season.clone()))
    }

    /// Season years must be 4 digits between the first season and the current one
    fn check_season_year(&self, year: &str) -> Result<()> {
        self.check_year_up_to(year, self.current_season_year()?)
    }

    /// The next draft is held before its season starts, so it may be one
    /// year past the current season
    fn check_draft_year(&self, year: &str) -> Result<()> {
        self.check_year_up_to(year, self.current_season_year()?.saturating_add(1))
    }

    fn check_year_up_to(&self, year: &str, latest: u16) -> Result<()> {
        match year.parse::<u16>() {
            Ok(y) if year.len() == 4 && (self.first_season..=latest).contains(&y) => Ok(()),
            _ => Err(NbaBotError::InvalidSeasonYear(year.to_string())),
        }
    }
}

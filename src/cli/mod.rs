//! nbabot CLI
//!
//! Commands:
//! - `nbabot season` / `nbabot career` / `nbabot pull` - player stats
//! - `nbabot games` / `nbabot last` / `nbabot teams` / `nbabot standings` - team results
//! - `nbabot draft` - draft history
//! - `nbabot shell` - chat-style interactive prompt

pub mod shell;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::Command;

/// NBA stats bot
#[derive(Parser, Debug)]
#[command(name = "nbabot")]
#[command(author, version, about = "NBA player and team stats from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory
    #[arg(short, long, global = true, default_value = "config")]
    pub config: String,

    /// Print replies as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Season averages: <first> <last> [suffix] [year] [regular|playoffs]
    Season {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Career averages: <first> <last> [suffix] [playoffs]
    Career {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Scores of every game on a date (default: today)
    Games {
        /// Date as YYYY-MM-DD
        date: Option<NaiveDate>,
    },
    /// Last game of a team, e.g. `nbabot last miami heat`
    Last {
        #[arg(num_args = 1.., required = true)]
        team: Vec<String>,
    },
    /// Current season stats of a random active player
    Pull,
    /// List all teams
    Teams,
    /// Conference standings for the current season
    Standings,
    /// Draft pick lookup
    Draft {
        /// Draft year (default: current season)
        year: Option<String>,
        /// Overall pick number (default: 1)
        pick: Option<String>,
    },
    /// Interactive prompt accepting chat-style lines like `!season james harden`
    Shell,
}

impl Commands {
    /// Bot command for a one-shot subcommand; `None` for the shell
    pub fn to_command(&self) -> Option<Command> {
        let command = match self {
            Commands::Season { args } => Command::Season(args.clone()),
            Commands::Career { args } => Command::Career(args.clone()),
            Commands::Games { date } => Command::Games(*date),
            Commands::Last { team } => Command::Last(team.clone()),
            Commands::Pull => Command::Pull,
            Commands::Teams => Command::Teams,
            Commands::Standings => Command::Standings,
            Commands::Draft { year, pick } => Command::Draft {
                year: year.clone(),
                pick: pick.clone(),
            },
            Commands::Shell => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_collects_trailing_args() {
        let cli = Cli::try_parse_from(["nbabot", "season", "tim", "hardaway", "jr", "2018"]).unwrap();
        assert_eq!(
            cli.command.to_command(),
            Some(Command::Season(vec![
                "tim".into(),
                "hardaway".into(),
                "jr".into(),
                "2018".into()
            ]))
        );
    }

    #[test]
    fn test_games_parses_date() {
        let cli = Cli::try_parse_from(["nbabot", "--json", "games", "2020-03-11"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command.to_command(),
            Some(Command::Games(NaiveDate::from_ymd_opt(2020, 3, 11)))
        );
        assert!(Cli::try_parse_from(["nbabot", "games", "yesterday"]).is_err());
    }

    #[test]
    fn test_standings_and_pull() {
        let cli = Cli::try_parse_from(["nbabot", "standings"]).unwrap();
        assert_eq!(cli.command.to_command(), Some(Command::Standings));
        let cli = Cli::try_parse_from(["nbabot", "pull"]).unwrap();
        assert_eq!(cli.command.to_command(), Some(Command::Pull));
    }

    #[test]
    fn test_shell_has_no_command() {
        let cli = Cli::try_parse_from(["nbabot", "shell"]).unwrap();
        assert!(cli.command.to_command().is_none());
    }
}

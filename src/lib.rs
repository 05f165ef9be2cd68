pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod stats;

pub use adapters::{NbaStatsClient, StatsProvider};
pub use commands::{Bot, Command, Embed, Reply};
pub use config::AppConfig;
pub use directory::{PlayerDirectory, TeamDirectory};
pub use domain::{GameRecord, PlayerRecord, Query, SeasonType, TeamRecord};
pub use error::{NbaBotError, Result};
pub use query::{classify, resolve, TokenClass};
pub use stats::{aggregate, find_opponent, resolve_team, StatsSummary, TeamContext};

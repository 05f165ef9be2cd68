use clap::Parser;
use nbabot::adapters::{NbaStatsClient, PlayerListProvider};
use nbabot::cli::{shell, Cli};
use nbabot::commands::Bot;
use nbabot::config::AppConfig;
use nbabot::directory::{PlayerDirectory, TeamDirectory};
use nbabot::error::{NbaBotError, Result};
use nbabot::logging::init_logging;
use nbabot::output::{self, OutputMode};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    config
        .validate()
        .map_err(|e| NbaBotError::Other(anyhow::anyhow!(e)))?;
    init_logging(&config.logging);

    let client = Arc::new(NbaStatsClient::from_config(
        &config.stats,
        &config.season.current,
    )?);

    let players = match &config.directory.players_path {
        Some(path) => PlayerDirectory::load_json(path)?,
        None => {
            let players = PlayerDirectory::new(client.all_players().await?);
            info!("Fetched {} players from {}", players.len(), client.base_url());
            players
        }
    };

    let bot = Bot::new(players, TeamDirectory::nba(), client, &config);
    let mode = OutputMode::from_json_flag(cli.json);

    match cli.command.to_command() {
        Some(command) => {
            let reply = bot.respond(command).await;
            output::print_reply(&reply, mode)?;
        }
        None => shell::run(&bot, mode).await?,
    }

    Ok(())
}

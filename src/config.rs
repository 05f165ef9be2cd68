use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub season: SeasonConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Prefix that marks a chat line as a command (e.g. "!season")
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "!".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonConfig {
    /// Starting year of the current season; also the default query year
    #[serde(default = "default_current_season")]
    pub current: String,
    /// Earliest season-start year accepted in queries
    #[serde(default = "default_first_season")]
    pub first: u16,
}

fn default_current_season() -> String {
    crate::query::DEFAULT_SEASON.to_string()
}

fn default_first_season() -> u16 {
    1946
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            current: default_current_season(),
            first: default_first_season(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// stats.nba.com endpoint root
    #[serde(default = "default_stats_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_stats_url() -> String {
    "https://stats.nba.com/stats".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: default_stats_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DirectoryConfig {
    /// JSON player list; fetched from the stats provider when unset
    #[serde(default)]
    pub players_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            season: SeasonConfig::default(),
            stats: StatsConfig::default(),
            directory: DirectoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .set_default("bot.prefix", default_prefix())?
            .set_default("season.current", default_current_season())?
            .set_default("season.first", i64::from(default_first_season()))?
            .set_default("stats.base_url", default_stats_url())?
            .set_default("stats.timeout_secs", default_timeout_secs())?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Environment-specific overrides (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("NBABOT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // NBABOT_STATS__BASE_URL, NBABOT_SEASON__CURRENT, ...
            .add_source(
                Environment::with_prefix("NBABOT")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.bot.prefix.is_empty() {
            return Err("bot.prefix must not be empty".to_string());
        }
        let current: u16 = self
            .season
            .current
            .parse()
            .map_err(|_| format!("season.current must be a year, got {}", self.season.current))?;
        if self.season.current.len() != 4 {
            return Err("season.current must be a 4-digit year".to_string());
        }
        if current < self.season.first {
            return Err("season.current must not precede season.first".to_string());
        }
        if self.stats.timeout_secs == 0 {
            return Err("stats.timeout_secs must be > 0".to_string());
        }
        Ok(())
    }
}

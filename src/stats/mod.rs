//! Stat summaries, season team context and game pairing.

pub mod aggregator;
pub mod game_finder;
pub mod season_context;

pub use aggregator::{aggregate, Metric, StatsSummary, TRACKED_METRICS};
pub use game_finder::{find_opponent, games_on_date, last_game_for_team, Matchup};
pub use season_context::{resolve_team, team_from_game_log, TeamContext};

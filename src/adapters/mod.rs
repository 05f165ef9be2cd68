pub mod nba_stats;
pub mod traits;

pub use nba_stats::{NbaStatsClient, ResultSet};
pub use traits::{
    DraftProvider, GameLogProvider, LeagueGameLogProvider, PlayerListProvider,
    PlayerProfileProvider, StandingsProvider, StatsProvider,
};

//! Per-game averages and shooting percentages over a game log.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::GameRecord;
use crate::error::{NbaBotError, Result};

/// Tracked metrics, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Pts,
    Min,
    FgPct,
    FtPct,
    Ast,
    Reb,
    Stl,
    Blk,
}

pub const TRACKED_METRICS: [Metric; 8] = [
    Metric::Pts,
    Metric::Min,
    Metric::FgPct,
    Metric::FtPct,
    Metric::Ast,
    Metric::Reb,
    Metric::Stl,
    Metric::Blk,
];

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Pts => "PTS",
            Metric::Min => "MIN",
            Metric::FgPct => "FG_PCT",
            Metric::FtPct => "FT_PCT",
            Metric::Ast => "AST",
            Metric::Reb => "REB",
            Metric::Stl => "STL",
            Metric::Blk => "BLK",
        }
    }

    fn value(&self, games: &[GameRecord]) -> String {
        match self {
            Metric::Pts => mean(games, |g| f64::from(g.pts)),
            Metric::Min => mean(games, |g| g.min),
            Metric::FgPct => ratio(games, |g| (g.fg_made, g.fg_attempted)),
            Metric::FtPct => ratio(games, |g| (g.ft_made, g.ft_attempted)),
            Metric::Ast => mean(games, |g| f64::from(g.ast)),
            Metric::Reb => mean(games, |g| f64::from(g.reb)),
            Metric::Stl => mean(games, |g| f64::from(g.stl)),
            Metric::Blk => mean(games, |g| f64::from(g.blk)),
        }
    }
}

/// Display-ready stat values keyed by metric name.
///
/// Always starts with "GP" followed by [`TRACKED_METRICS`] in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary(IndexMap<String, String>);

impl StatsSummary {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn games_played(&self) -> usize {
        self.get("GP").and_then(|gp| gp.parse().ok()).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reduce a non-empty game log into a [`StatsSummary`].
///
/// A zero shooting denominator yields "nan" for that percentage instead of
/// an error.
pub fn aggregate(games: &[GameRecord]) -> Result<StatsSummary> {
    if games.is_empty() {
        return Err(NbaBotError::EmptyGameLog);
    }

    let mut values = IndexMap::with_capacity(TRACKED_METRICS.len() + 1);
    values.insert("GP".to_string(), games.len().to_string());
    for metric in TRACKED_METRICS {
        values.insert(metric.name().to_string(), metric.value(games));
    }
    Ok(StatsSummary(values))
}

fn mean(games: &[GameRecord], stat: impl Fn(&GameRecord) -> f64) -> String {
    let total: f64 = games.iter().map(stat).sum();
    format!("{:.1}", total / games.len() as f64)
}

fn ratio(games: &[GameRecord], stat: impl Fn(&GameRecord) -> (u32, u32)) -> String {
    let (made, attempted) = games
        .iter()
        .map(stat)
        .fold((0u64, 0u64), |(m, a), (gm, ga)| (m + u64::from(gm), a + u64::from(ga)));

    if attempted == 0 {
        return "nan".to_string();
    }
    format!("{:.1}%", made as f64 / attempted as f64 * 100.0)
}

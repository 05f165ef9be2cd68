use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which part of the season statistics are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    Regular,
    Playoffs,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular",
            SeasonType::Playoffs => "Playoffs",
        }
    }

    /// Value of the `SeasonType` query parameter on stats.nba.com
    pub fn api_param(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

impl std::fmt::Display for SeasonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Range of seasons a game log covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonScope {
    /// Single season identified by its starting year (e.g. "2018")
    Year(String),
    AllTime,
}

impl SeasonScope {
    /// Render as the `Season` query parameter: "2018-19" or "ALL"
    pub fn api_param(&self) -> String {
        match self {
            SeasonScope::Year(year) => season_id(year),
            SeasonScope::AllTime => "ALL".to_string(),
        }
    }
}

/// "2018" -> "2018-19". Non-numeric input is passed through unchanged.
pub fn season_id(year: &str) -> String {
    match year.parse::<u32>() {
        Ok(start) => format!("{}-{:02}", start, (start + 1) % 100),
        Err(_) => year.to_string(),
    }
}

/// "2018" -> "2018-2019", used in display titles.
pub fn season_label(year: &str) -> String {
    match year.parse::<u32>() {
        Ok(start) => format!("{}-{}", start, start + 1),
        Err(_) => year.to_string(),
    }
}

/// Starting year of the season a calendar date falls in.
///
/// Seasons start in the autumn: anything after July belongs to the season
/// starting that year, everything else to the one that started the year before.
pub fn season_year_for_date(date: NaiveDate) -> i32 {
    if date.month() > 7 {
        date.year()
    } else {
        date.year() - 1
    }
}

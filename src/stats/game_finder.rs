//! Pairing the two team rows of a game in a league game log.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::GameRecord;
use crate::error::{NbaBotError, Result};

/// Both sides of one game; `known` is the row the lookup started from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup<'a> {
    pub known: &'a GameRecord,
    pub opponent: &'a GameRecord,
}

impl Matchup<'_> {
    /// "112-108" from the known side's point of view
    pub fn score(&self) -> String {
        format!("{}-{}", self.known.pts, self.opponent.pts)
    }
}

/// Find the row of the other team in `game_id`.
///
/// The log must hold exactly two rows for the game, for two different teams,
/// one of them `known`'s team.
pub fn find_opponent<'a>(
    season_log: &'a [GameRecord],
    game_id: &str,
    known: &'a GameRecord,
) -> Result<Matchup<'a>> {
    let rows: Vec<&GameRecord> = season_log.iter().filter(|g| g.game_id == game_id).collect();
    let malformed = || NbaBotError::MalformedGameLog {
        game_id: game_id.to_string(),
        rows: rows.len(),
        teams: rows.iter().map(|g| g.team_id).collect::<HashSet<_>>().len(),
    };

    if rows.len() != 2 || rows[0].team_id == rows[1].team_id {
        return Err(malformed());
    }

    let mut others = rows.iter().filter(|g| g.team_id != known.team_id);
    match (others.next(), others.next()) {
        (Some(&opponent), None) => Ok(Matchup { known, opponent }),
        _ => Err(malformed()),
    }
}

/// Every game played on `date`, once each, in log order
pub fn games_on_date(season_log: &[GameRecord], date: NaiveDate) -> Result<Vec<Matchup<'_>>> {
    let mut seen = HashSet::new();
    let mut games = Vec::new();

    for row in season_log.iter().filter(|g| g.date == date) {
        if seen.insert(row.game_id.as_str()) {
            games.push(find_opponent(season_log, &row.game_id, row)?);
        }
    }
    Ok(games)
}

/// Most recent game of `team_id` in the log, if it played at all
pub fn last_game_for_team(season_log: &[GameRecord], team_id: u64) -> Result<Option<Matchup<'_>>> {
    let latest = season_log
        .iter()
        .filter(|g| g.team_id == team_id)
        .max_by(|a, b| (a.date, &a.game_id).cmp(&(b.date, &b.game_id)));

    latest
        .map(|row| find_opponent(season_log, &row.game_id, row))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(game_id: &str, team_id: u64, abbr: &str, day: u32, pts: u32) -> GameRecord {
        GameRecord {
            game_id: game_id.into(),
            team_id,
            team_abbreviation: abbr.into(),
            team_full_name: abbr.into(),
            date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            matchup: format!("{abbr} vs. XXX"),
            pts,
            min: 240.0,
            fg_made: 40,
            fg_attempted: 85,
            ft_made: 15,
            ft_attempted: 20,
            ast: 25,
            reb: 45,
            stl: 8,
            blk: 5,
        }
    }

    fn season() -> Vec<GameRecord> {
        vec![
            row("G3", 1, "MIA", 11, 109),
            row("G3", 2, "CHA", 11, 98),
            row("G2", 3, "BOS", 10, 104),
            row("G2", 1, "MIA", 10, 101),
            row("G1", 2, "CHA", 8, 90),
            row("G1", 3, "BOS", 8, 99),
        ]
    }

    #[test]
    fn test_find_opponent_either_order() {
        let log = season();
        let m = find_opponent(&log, "G2", &log[3]).unwrap();
        assert_eq!(m.opponent.team_abbreviation, "BOS");
        assert_eq!(m.score(), "101-104");

        let m = find_opponent(&log, "G2", &log[2]).unwrap();
        assert_eq!(m.opponent.team_abbreviation, "MIA");
    }

    #[test]
    fn test_single_row_is_malformed() {
        let log = vec![row("G9", 1, "MIA", 1, 100)];
        let err = find_opponent(&log, "G9", &log[0]).unwrap_err();
        assert!(matches!(err, NbaBotError::MalformedGameLog { rows: 1, teams: 1, .. }));
    }

    #[test]
    fn test_same_team_twice_is_malformed() {
        let log = vec![row("G9", 1, "MIA", 1, 100), row("G9", 1, "MIA", 1, 100)];
        let err = find_opponent(&log, "G9", &log[0]).unwrap_err();
        assert!(matches!(err, NbaBotError::MalformedGameLog { rows: 2, teams: 1, .. }));
    }

    #[test]
    fn test_known_row_from_other_game_is_malformed() {
        let log = season();
        let outsider = row("G7", 9, "UTA", 11, 100);
        assert!(find_opponent(&log, "G3", &outsider).is_err());
    }

    #[test]
    fn test_games_on_date_dedupes() {
        let log = season();
        let date = NaiveDate::from_ymd_opt(2020, 3, 11).unwrap();
        let games = games_on_date(&log, date).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].known.team_abbreviation, "MIA");
        assert_eq!(games[0].score(), "109-98");

        let empty = games_on_date(&log, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_last_game_for_team() {
        let log = season();
        let m = last_game_for_team(&log, 3).unwrap().unwrap();
        assert_eq!(m.known.game_id, "G2");
        assert_eq!(m.opponent.team_abbreviation, "MIA");

        assert!(last_game_for_team(&log, 42).unwrap().is_none());
    }
}

use serde::{Deserialize, Serialize};

/// A team's place in its conference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: u32,
    pub team: String,
}

/// Both conference tables, each ordered by rank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub east: Vec<StandingRow>,
    pub west: Vec<StandingRow>,
}

/// "1. Milwaukee Bucks\n2. Toronto Raptors\n..."
pub fn conference_table(rows: &[StandingRow]) -> String {
    rows.iter()
        .map(|row| format!("{}. {}", row.rank, row.team))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_table_lines() {
        let rows = vec![
            StandingRow {
                rank: 1,
                team: "Milwaukee Bucks".into(),
            },
            StandingRow {
                rank: 2,
                team: "Toronto Raptors".into(),
            },
        ];
        assert_eq!(conference_table(&rows), "1. Milwaukee Bucks\n2. Toronto Raptors");
        assert_eq!(conference_table(&[]), "");
    }
}

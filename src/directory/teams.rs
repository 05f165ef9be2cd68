use crate::domain::TeamRecord;
use crate::error::{NbaBotError, Result};

// (id, abbreviation, full name, nickname, city, primary color)
const NBA_TEAMS: [(u64, &str, &str, &str, &str, u32); 30] = [
    (1610612737, "ATL", "Atlanta Hawks", "Hawks", "Atlanta", 0xE03A3E),
    (1610612738, "BOS", "Boston Celtics", "Celtics", "Boston", 0x007A33),
    (1610612739, "CLE", "Cleveland Cavaliers", "Cavaliers", "Cleveland", 0x860038),
    (1610612740, "NOP", "New Orleans Pelicans", "Pelicans", "New Orleans", 0x0C2340),
    (1610612741, "CHI", "Chicago Bulls", "Bulls", "Chicago", 0xCE1141),
    (1610612742, "DAL", "Dallas Mavericks", "Mavericks", "Dallas", 0x00538C),
    (1610612743, "DEN", "Denver Nuggets", "Nuggets", "Denver", 0x0E2240),
    (1610612744, "GSW", "Golden State Warriors", "Warriors", "Golden State", 0x1D428A),
    (1610612745, "HOU", "Houston Rockets", "Rockets", "Houston", 0xCE1141),
    (1610612746, "LAC", "Los Angeles Clippers", "Clippers", "Los Angeles", 0xC8102E),
    (1610612747, "LAL", "Los Angeles Lakers", "Lakers", "Los Angeles", 0x552583),
    (1610612748, "MIA", "Miami Heat", "Heat", "Miami", 0x98002E),
    (1610612749, "MIL", "Milwaukee Bucks", "Bucks", "Milwaukee", 0x00471B),
    (1610612750, "MIN", "Minnesota Timberwolves", "Timberwolves", "Minnesota", 0x0C2340),
    (1610612751, "BKN", "Brooklyn Nets", "Nets", "Brooklyn", 0x000000),
    (1610612752, "NYK", "New York Knicks", "Knicks", "New York", 0x006BB6),
    (1610612753, "ORL", "Orlando Magic", "Magic", "Orlando", 0x0077C0),
    (1610612754, "IND", "Indiana Pacers", "Pacers", "Indiana", 0x002D62),
    (1610612755, "PHI", "Philadelphia 76ers", "76ers", "Philadelphia", 0x006BB6),
    (1610612756, "PHX", "Phoenix Suns", "Suns", "Phoenix", 0x1D1160),
    (1610612757, "POR", "Portland Trail Blazers", "Trail Blazers", "Portland", 0xE03A3E),
    (1610612758, "SAC", "Sacramento Kings", "Kings", "Sacramento", 0x5A2D81),
    (1610612759, "SAS", "San Antonio Spurs", "Spurs", "San Antonio", 0xC4CED4),
    (1610612760, "OKC", "Oklahoma City Thunder", "Thunder", "Oklahoma City", 0x007AC1),
    (1610612761, "TOR", "Toronto Raptors", "Raptors", "Toronto", 0xCE1141),
    (1610612762, "UTA", "Utah Jazz", "Jazz", "Utah", 0x002B5C),
    (1610612763, "MEM", "Memphis Grizzlies", "Grizzlies", "Memphis", 0x5D76A9),
    (1610612764, "WAS", "Washington Wizards", "Wizards", "Washington", 0x002B5C),
    (1610612765, "DET", "Detroit Pistons", "Pistons", "Detroit", 0xC8102E),
    (1610612766, "CHA", "Charlotte Hornets", "Hornets", "Charlotte", 0x1D1160),
];

/// Read-only team list, queried by abbreviation, id or name
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: Vec<TeamRecord>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self { teams }
    }

    /// The thirty current NBA franchises
    pub fn nba() -> Self {
        let teams = NBA_TEAMS
            .iter()
            .map(|&(id, abbreviation, full_name, nickname, city, color)| TeamRecord {
                id,
                abbreviation: abbreviation.to_string(),
                full_name: full_name.to_string(),
                nickname: nickname.to_string(),
                city: city.to_string(),
                color,
            })
            .collect();
        Self::new(teams)
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&TeamRecord> {
        self.teams
            .iter()
            .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
    }

    pub fn by_id(&self, id: u64) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Match a user-typed team name against full name, abbreviation,
    /// nickname or city, ignoring case
    pub fn find(&self, name: &str) -> Result<&TeamRecord> {
        let name = name.trim();
        self.teams
            .iter()
            .find(|t| {
                t.full_name.eq_ignore_ascii_case(name)
                    || t.abbreviation.eq_ignore_ascii_case(name)
                    || t.nickname.eq_ignore_ascii_case(name)
                    || t.city.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| NbaBotError::TeamNotFound(name.to_string()))
    }

    /// Embed color for a team, neutral grey when unknown
    pub fn color(&self, abbreviation: &str) -> u32 {
        self.by_abbreviation(abbreviation)
            .map(|t| t.color)
            .unwrap_or(0xBEC0C2)
    }

    /// Teams sorted by full name
    pub fn alphabetical(&self) -> Vec<&TeamRecord> {
        let mut teams: Vec<&TeamRecord> = self.teams.iter().collect();
        teams.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

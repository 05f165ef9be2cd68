use serde::{Deserialize, Serialize};

/// Entry of the player directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: u64,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Entry of the team directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: u64,
    pub abbreviation: String,
    pub full_name: String,
    pub nickname: String,
    pub city: String,
    /// Primary team color as 0xRRGGBB, used for embed accents
    pub color: u32,
}

/// Current team of a player, as reported by the profile endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: u64,
    pub team_abbreviation: String,
    pub team_city: String,
    pub team_name: String,
}

impl PlayerProfile {
    /// "Houston" + "Rockets" -> "Houston Rockets"
    pub fn team_full_name(&self) -> String {
        [self.team_city.as_str(), self.team_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A single pick from the draft history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    pub person_id: u64,
    pub player_name: String,
    pub season: String,
    pub round_number: u32,
    pub round_pick: u32,
    pub overall_pick: u32,
    pub team_city: String,
    pub team_name: String,
}

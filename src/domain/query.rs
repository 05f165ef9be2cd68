use serde::{Deserialize, Serialize};

use super::SeasonType;

/// A resolved player stats request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub first_name: String,
    pub last_name: String,
    /// Name suffix; "jr" in any casing is stored as "jr."
    pub suffix: Option<String>,
    /// 4-digit season starting year
    pub year: String,
    pub season_type: SeasonType,
}

impl Query {
    /// Last name as it appears in the player directory ("hardaway jr.")
    pub fn directory_last_name(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{} {}", self.last_name, suffix),
            None => self.last_name.clone(),
        }
    }

    /// Display form of the requested name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.directory_last_name())
    }
}

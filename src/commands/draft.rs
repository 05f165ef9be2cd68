use super::{Bot, Embed, Reply};
use crate::adapters::DraftProvider;
use crate::error::{NbaBotError, Result};

const DRAFT_COLOR: u32 = 0x1D428A;

impl Bot {
    /// `draft [year] [pick]`, defaulting to the current season's first pick
    pub(super) async fn draft(&self, year: Option<String>, pick: Option<String>) -> Result<Reply> {
        let year = year.unwrap_or_else(|| self.current_season.clone());
        self.check_draft_year(&year)?;

        let pick_raw = pick.unwrap_or_else(|| "1".to_string());
        let overall_pick: u32 = pick_raw
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                NbaBotError::InvalidArgument(format!("{pick_raw} is not a draft pick number."))
            })?;

        let pick = self
            .provider
            .draft_pick(&year, overall_pick)
            .await?
            .ok_or_else(|| NbaBotError::DraftPickNotFound {
                year: year.clone(),
                pick: pick_raw.clone(),
            })?;

        let team = format!("{} {}", pick.team_city, pick.team_name);
        let embed = Embed::new(format!("{year} NBA Draft"), DRAFT_COLOR)
            .description(format!("Pick No. {overall_pick}"))
            .field(pick.player_name, team.trim().to_string());
        Ok(embed.into())
    }
}

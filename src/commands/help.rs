use super::{Embed, Reply};

const HELP_COLOR: u32 = 0x0000FF;

pub(super) fn general(prefix: &str) -> Reply {
    Embed::new("NBABot", HELP_COLOR)
        .description("View stats for NBA players and teams.")
        .field(
            "NBA",
            format!(
                "Use **{prefix}player** or **{prefix}team** to find out more about the commands \
                 you can use to get information about both!"
            ),
        )
        .into()
}

pub(super) fn player(prefix: &str, current_season: &str) -> Reply {
    Embed::new("Player Help", HELP_COLOR)
        .description("This is the player help section.")
        .field(
            format!("**{prefix}season**"),
            format!(
                "Use **{prefix}season** followed by the player, year, and playoff condition to \
                 display a player's main stats for a given year. If year or playoff condition is \
                 not entered, the default year is {current_season} and the default season is the \
                 regular season.\nYou should put the starting year of the season, e.g. 2018 for \
                 the 2018-2019 season.\nExample: **{prefix}season james harden 2018 playoffs**"
            ),
        )
        .field(
            format!("**{prefix}pull**"),
            format!(
                "Use **{prefix}pull** to show the {current_season} regular season stats of a \
                 random active player."
            ),
        )
        .field(
            format!("**{prefix}career**"),
            format!(
                "Use **{prefix}career** followed by the player name to display a player's stats \
                 over their career.\nExample: **{prefix}career allen iverson**"
            ),
        )
        .field(
            format!("**{prefix}draft**"),
            format!(
                "Use **{prefix}draft** followed by the year and draft pick number to find the \
                 draft pick for that year. Default year and pick are {current_season} and 1.\n\
                 Example: **{prefix}draft 2019 3**"
            ),
        )
        .into()
}

pub(super) fn team(prefix: &str) -> Reply {
    Embed::new("Teams Help Section", HELP_COLOR)
        .field(
            format!("**{prefix}teams**"),
            format!("Use **{prefix}teams** to get a list of all NBA teams in alphabetical order."),
        )
        .field(
            format!("**{prefix}standings**"),
            format!("Use **{prefix}standings** to get the current standings in each conference."),
        )
        .field(
            format!("**{prefix}get_games**"),
            format!(
                "Use **{prefix}get_games**, followed by an optional date (YYYY-MM-DD), to get all \
                 of the games that occurred on that date. If no date is entered, uses the \
                 current date."
            ),
        )
        .field(
            format!("**{prefix}last**"),
            format!(
                "Use **{prefix}last** followed by the team name to get the last game and score \
                 for the entered team.\nExample: **{prefix}last miami heat**"
            ),
        )
        .into()
}

//! Token classification for command arguments.

use crate::domain::SeasonType;

/// What a single argument token looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Year,
    PlayoffsKeyword,
    RegularKeyword,
    Unrecognized,
}

impl TokenClass {
    /// Season type named by a keyword token, `None` for years and unknown words
    pub fn season_type(self) -> Option<SeasonType> {
        match self {
            TokenClass::PlayoffsKeyword => Some(SeasonType::Playoffs),
            TokenClass::RegularKeyword => Some(SeasonType::Regular),
            TokenClass::Year | TokenClass::Unrecognized => None,
        }
    }
}

const PLAYOFF_KEYWORDS: [&str; 2] = ["playoff", "playoffs"];
const REGULAR_KEYWORDS: [&str; 2] = ["regular", "reg"];

/// Classify one token. Total: every input maps to exactly one class.
pub fn classify(token: &str) -> TokenClass {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return TokenClass::Year;
    }

    let lowercase = token.to_lowercase();
    if PLAYOFF_KEYWORDS.contains(&lowercase.as_str()) {
        TokenClass::PlayoffsKeyword
    } else if REGULAR_KEYWORDS.contains(&lowercase.as_str()) {
        TokenClass::RegularKeyword
    } else {
        TokenClass::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_year() {
        assert_eq!(classify("2020"), TokenClass::Year);
        assert_eq!(classify("18"), TokenClass::Year);
    }

    #[test]
    fn test_classify_keywords_case_insensitive() {
        assert_eq!(classify("Playoffs"), TokenClass::PlayoffsKeyword);
        assert_eq!(classify("PLAYOFF"), TokenClass::PlayoffsKeyword);
        assert_eq!(classify("reg"), TokenClass::RegularKeyword);
        assert_eq!(classify("Regular"), TokenClass::RegularKeyword);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("giannis"), TokenClass::Unrecognized);
        assert_eq!(classify("jr"), TokenClass::Unrecognized);
        assert_eq!(classify(""), TokenClass::Unrecognized);
        assert_eq!(classify("20l9"), TokenClass::Unrecognized);
    }

    #[test]
    fn test_season_type_of_class() {
        assert_eq!(
            TokenClass::PlayoffsKeyword.season_type(),
            Some(SeasonType::Playoffs)
        );
        assert_eq!(TokenClass::Year.season_type(), None);
        assert_eq!(TokenClass::Unrecognized.season_type(), None);
    }
}

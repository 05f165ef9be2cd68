//! Positional resolution of `<first> <last> [suffix] [year] [season type]`.
//!
//! Any trailing field may be omitted, so the resolver walks the tokens with a
//! cursor and decides what each one is from its class and what was already
//! consumed. A name suffix, when present, always comes before the year and
//! the season keyword.

use tracing::debug;

use super::classifier::{classify, TokenClass};
use crate::domain::{Query, SeasonType};
use crate::error::{NbaBotError, Result};

/// Year used when the caller does not name a season
pub const DEFAULT_SEASON: &str = "2019";

/// Cursor over whitespace-split command arguments
pub struct TokenStream<'a, S> {
    tokens: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> TokenStream<'a, S> {
    pub fn new(tokens: &'a [S]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(AsRef::as_ref)
    }

    pub fn peek_class(&self) -> Option<TokenClass> {
        self.peek().map(classify)
    }

    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the next token only if it has the given class
    pub fn consume_if(&mut self, class: TokenClass) -> Option<&'a str> {
        if self.peek_class() == Some(class) {
            self.next_token()
        } else {
            None
        }
    }

    /// Season type named by the next token, without consuming it.
    /// Absent, year-like and unknown tokens all mean the regular season.
    pub fn peek_season_type(&self) -> SeasonType {
        self.peek_class()
            .and_then(TokenClass::season_type)
            .unwrap_or_default()
    }
}

/// Resolve tokens into a query, defaulting the year to [`DEFAULT_SEASON`]
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Query> {
    resolve_with_default(tokens, DEFAULT_SEASON)
}

/// Resolve tokens into a query using `default_year` when no year is given
pub fn resolve_with_default<S: AsRef<str>>(tokens: &[S], default_year: &str) -> Result<Query> {
    if tokens.len() < 2 {
        return Err(NbaBotError::InsufficientArguments {
            needed: 2,
            got: tokens.len(),
        });
    }

    let mut stream = TokenStream::new(tokens);
    let first_name = stream.next_token().unwrap_or_default().to_string();
    let last_name = stream.next_token().unwrap_or_default().to_string();

    let mut suffix = None;
    let mut year = default_year.to_string();
    let mut season_type = SeasonType::Regular;

    match stream.peek_class() {
        Some(TokenClass::Year) => {
            if let Some(token) = stream.next_token() {
                year = token.to_string();
            }
            season_type = stream.peek_season_type();
        }
        Some(TokenClass::Unrecognized) => {
            suffix = stream.next_token().map(normalize_suffix);
            if let Some(token) = stream.consume_if(TokenClass::Year) {
                year = token.to_string();
            }
            season_type = stream.peek_season_type();
        }
        Some(keyword) => {
            season_type = keyword.season_type().unwrap_or_default();
        }
        None => {}
    }

    let query = Query {
        first_name,
        last_name,
        suffix,
        year,
        season_type,
    };
    debug!(?query, "resolved command arguments");
    Ok(query)
}

/// "jr", "Jr", "JR." -> "jr."; other suffixes are kept as typed
fn normalize_suffix(token: &str) -> String {
    if token.trim_end_matches('.').eq_ignore_ascii_case("jr") {
        "jr.".to_string()
    } else {
        token.to_string()
    }
}

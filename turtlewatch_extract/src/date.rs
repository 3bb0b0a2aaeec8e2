//! Resolution of loosely written calendar dates ("2 Mar, 2024",
//! "March 2") into concrete dates.

use chrono::{Datelike, Local, NaiveDate};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// How far back a year-less date may be pushed to find a valid occurrence
/// (29 February needs up to eight years around a skipped century leap day).
const MAX_YEARS_BACK: i32 = 8;

/// Date parser that prefers the past.
///
/// When the text carries no year, the most recent occurrence that is not
/// after `today` is chosen, since posts describe events that already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastBiasedDateParser {
    today: NaiveDate,
}

impl Default for PastBiasedDateParser {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl PastBiasedDateParser {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Resolve `text` to a date, or `None` if it does not name a valid day.
    ///
    /// Accepts a month name or its abbreviation ("mar", "sept") and a day
    /// number in either order, optionally followed by a two- or four-digit
    /// year. Punctuation and ordinal suffixes are ignored.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let mut month = None;
        let mut day = None;
        let mut year = None;

        for token in tokenize(&text.to_lowercase()) {
            match token {
                Token::Word(w) => {
                    if month.is_none() {
                        month = month_from_word(w);
                    }
                }
                Token::Number(n) => match n.len() {
                    1 | 2 if day.is_none() => day = n.parse::<u32>().ok(),
                    2 if year.is_none() => {
                        year = n.parse::<i32>().ok().map(|yy| self.expand_two_digit_year(yy));
                    }
                    4 if year.is_none() => year = n.parse::<i32>().ok(),
                    _ => return None,
                },
            }
        }

        let (month, day) = (month?, day?);
        match year {
            Some(year) => NaiveDate::from_ymd_opt(year, month, day),
            None => self.most_recent(month, day),
        }
    }

    fn most_recent(&self, month: u32, day: u32) -> Option<NaiveDate> {
        let this_year = self.today.year();
        (this_year - MAX_YEARS_BACK..=this_year)
            .rev()
            .filter_map(|y| NaiveDate::from_ymd_opt(y, month, day))
            .find(|d| *d <= self.today)
    }

    fn expand_two_digit_year(&self, yy: i32) -> i32 {
        let this_year = self.today.year();
        let candidate = this_year - this_year.rem_euclid(100) + yy;
        if candidate > this_year {
            candidate - 100
        } else {
            candidate
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut numeric = false;

    for (i, c) in text.char_indices() {
        let is_digit = c.is_ascii_digit();
        let is_alpha = c.is_alphabetic();
        match start {
            Some(_) if (numeric && is_digit) || (!numeric && is_alpha) => {}
            Some(s) => {
                tokens.push(make_token(&text[s..i], numeric));
                start = (is_digit || is_alpha).then_some(i);
                numeric = is_digit;
            }
            None if is_digit || is_alpha => {
                start = Some(i);
                numeric = is_digit;
            }
            None => {}
        }
    }
    if let Some(s) = start {
        tokens.push(make_token(&text[s..], numeric));
    }
    tokens
}

const fn make_token(s: &str, numeric: bool) -> Token<'_> {
    if numeric {
        Token::Number(s)
    } else {
        Token::Word(s)
    }
}

/// Full month names, their three-letter abbreviations and "sept". Other
/// words sharing a prefix ("marine", "decide") are not months.
fn month_from_word(word: &str) -> Option<u32> {
    let word = if word == "sept" { "sep" } else { word };
    MONTHS
        .iter()
        .position(|m| *m == word || (word.len() == 3 && m.starts_with(word)))
        .and_then(|i| u32::try_from(i + 1).ok())
}

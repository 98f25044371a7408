//! Compiled regex patterns for date extraction.
//!
//! Named-month patterns are assembled from the tables in [`crate::names`] so
//! the alternations always stay in sync with the lookup used to number a
//! captured month.

use lazy_static::lazy_static;
use regex::Regex;

use crate::names::{DAYS, MONTHS, ORDINALS, SHORT_DAYS, SHORT_MONTHS};

/// Characters accepted between the numeric day, month, and year groups.
///
/// The day–month and month–year separator runs must use the same character;
/// the regex engine here has no back-references, so one pattern is compiled
/// per candidate and the leftmost match across all of them wins.
pub const NUMERIC_SEPARATORS: [char; 4] = ['.', '-', '/', ' '];

const YEAR_FULL: &str = r"(\d{4})";
const YEAR_SHORT: &str = r"(\d{2})";
// Two-digit years in named-month dates are only accepted with a leading
// apostrophe, e.g. "October 5 '12".
const YEAR_SHORT_APOS: &str = r"'(\d{2})";

fn alternation(words: &[&str]) -> String {
    words.join("|")
}

/// Pattern for `D sep M sep YEAR` with a single fixed separator character.
fn numeric_pattern(separator: char, year: &str) -> Regex {
    let sep = regex::escape(&separator.to_string());
    Regex::new(&format!(r"(\d{{1,2}}){sep}+([01]?\d){sep}+{year}")).unwrap()
}

/// Day-before-month named form: optional weekday, day with optional ordinal
/// suffix and optional "of", month name, optional trailing year.
fn day_first_pattern(year: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)(?:(?:{days}|{short_days})[ ,\-_/]*)?(\d{{1,2}})[ ,\-_/]*(?:{ordinals})?(?:of|[ ,\-_/])*({months}|{short_months})\b(?:[ ,\-_/]+(?:{year}))?",
        days = alternation(&DAYS),
        short_days = alternation(&SHORT_DAYS),
        ordinals = alternation(&ORDINALS),
        months = alternation(&MONTHS),
        short_months = alternation(&SHORT_MONTHS),
    ))
    .unwrap()
}

/// Month-before-day named form: month name, day with optional ordinal
/// suffix, mandatory trailing year.
fn month_first_pattern(year: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)({months}|{short_months})\b[ ,\-_/]*(\d{{1,2}})[ ,\-_/]*(?:{ordinals})?[ ,\-_/]+(?:{year})",
        months = alternation(&MONTHS),
        short_months = alternation(&SHORT_MONTHS),
        ordinals = alternation(&ORDINALS),
    ))
    .unwrap()
}

lazy_static! {
    /// `YYYY<sep>MM<sep>DD`; the two separators may differ, which also
    /// covers directory-like shapes such as `2025-06/17`.
    pub static ref ISO_YMD: Regex = Regex::new(
        r"(\d{4})[.\-/ ](\d{2})[.\-/ ](\d{2})"
    ).unwrap();

    /// Day-first numeric dates with a four-digit year, one pattern per
    /// separator: `01/01/2012`, `10.12.1850`, `1 2 1985`.
    pub static ref NUMERIC_DMY: Vec<Regex> = NUMERIC_SEPARATORS
        .iter()
        .map(|sep| numeric_pattern(*sep, YEAR_FULL))
        .collect();

    /// Day-first numeric dates with a bare two-digit year: `30-12-11`.
    pub static ref NUMERIC_DMY_SHORT_YEAR: Vec<Regex> = NUMERIC_SEPARATORS
        .iter()
        .map(|sep| numeric_pattern(*sep, YEAR_SHORT))
        .collect();

    /// `Sunday 1st of March 2015`, `Sun-1-March-2015`, `8th of October`.
    pub static ref COMPLEX_DAY_FIRST: Regex = day_first_pattern(YEAR_FULL);

    /// Day-first named form accepting an apostrophe year: `1st March '81`.
    pub static ref COMPLEX_DAY_FIRST_SHORT_YEAR: Regex =
        day_first_pattern(YEAR_SHORT_APOS);

    /// `March 1st 2015`, `March-1st-2015`.
    pub static ref COMPLEX_MONTH_FIRST: Regex = month_first_pattern(YEAR_FULL);

    /// Month-first named form accepting an apostrophe year: `October 5 '12`.
    pub static ref COMPLEX_MONTH_FIRST_SHORT_YEAR: Regex =
        month_first_pattern(YEAR_SHORT_APOS);

    /// Any full month name as a whole word.
    pub static ref MONTH_WORD: Regex = Regex::new(
        &format!(r"(?i)\b({})\b", alternation(&MONTHS))
    ).unwrap();

    /// Any abbreviated month name as a whole word.
    pub static ref SHORT_MONTH_WORD: Regex = Regex::new(
        &format!(r"(?i)\b({})\b", alternation(&SHORT_MONTHS))
    ).unwrap();

    /// A day number with an ordinal suffix: `5th`, `1st`.
    pub static ref ORDINAL_DAY: Regex = Regex::new(
        &format!(r"(\d{{1,2}})(?:{})", alternation(&ORDINALS))
    ).unwrap();

    /// Last-resort `YYYY-MM-DD` with punctuation separators only.
    pub static ref COMPACT_YMD: Regex = Regex::new(
        r"\d{4}[.\-/]\d{2}[.\-/]\d{2}"
    ).unwrap();

    /// Last-resort `YYYY-MM` with punctuation separators only.
    pub static ref COMPACT_YM: Regex = Regex::new(
        r"\d{4}[.\-/]\d{2}"
    ).unwrap();

    /// A bare run of exactly four digits.
    pub static ref FOUR_DIGIT_YEAR: Regex = Regex::new(r"\d{4}").unwrap();

    /// A two-digit year introduced by an apostrophe: `'85`.
    pub static ref APOSTROPHE_YEAR: Regex = Regex::new(r"'(\d{2})").unwrap();
}

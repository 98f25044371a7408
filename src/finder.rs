//! The ordered matcher cascade that recovers date fields from text.

use tracing::debug;

use crate::fields::DateFields;
use crate::names::month_number;
use crate::patterns::{
    APOSTROPHE_YEAR, COMPACT_YM, COMPACT_YMD, COMPLEX_DAY_FIRST, COMPLEX_DAY_FIRST_SHORT_YEAR,
    COMPLEX_MONTH_FIRST, COMPLEX_MONTH_FIRST_SHORT_YEAR, FOUR_DIGIT_YEAR, ISO_YMD, MONTH_WORD,
    NUMERIC_DMY, NUMERIC_DMY_SHORT_YEAR, ORDINAL_DAY, SHORT_MONTH_WORD,
};

/// Year form a matcher run is allowed to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearStyle {
    /// Four digits: `1985`, `2025`.
    Full,
    /// Two digits, kept raw rather than expanded: `85`, `'12`.
    Short,
}

/// Extract date fields from an arbitrary string.
///
/// Matchers run in a fixed priority order — ISO numeric, day-first numeric,
/// named month, bare month name, ordinal day, then progressively looser
/// year fallbacks — and the first matcher to populate a field owns it for
/// the rest of the call. Two-digit year forms are only consulted when no
/// four-digit year exists anywhere in the input, so the tail of `2019` is
/// never read as a standalone year `19`.
///
/// Never fails: a string with no recognizable date yields a result with
/// all three fields `None`.
pub fn find(input: &str) -> DateFields {
    let mut fields = iso_date(input);
    if fields.is_empty() {
        fields = numeric_date(input, YearStyle::Full);
    }
    if fields.is_empty() {
        fields = complex_date(input, YearStyle::Full);
    }

    if fields.month.is_none() {
        fields.month = month_word(input);
    }
    if fields.day.is_none() {
        fields.day = ordinal_day(input);
    }

    if fields.is_empty() {
        fields.fill(compact_ymd(input));
    }
    if fields.year.is_none() && fields.month.is_none() {
        fields.fill(compact_ym(input));
    }
    if fields.year.is_none() {
        fields.year = four_digit_year(input);
    }

    if fields.year.is_none() {
        debug!("no four-digit year found, retrying with two-digit year forms");
        let retry = numeric_date(input, YearStyle::Short);
        if retry.is_empty() {
            fields.fill(complex_date(input, YearStyle::Short));
        } else {
            fields.fill(retry);
        }
    }
    if fields.year.is_none() {
        fields.year = apostrophe_year(input);
    }

    debug!("extracted {:?} from {} chars of text", fields, input.len());
    fields
}

/// `YYYY<sep>MM<sep>DD` with independent separators. Fills all three fields
/// at once or none.
fn iso_date(text: &str) -> DateFields {
    let Some(caps) = ISO_YMD.captures(text) else {
        return DateFields::default();
    };
    let year = caps.get(1).and_then(|m| m.as_str().parse().ok());
    let month = caps.get(2).and_then(|m| m.as_str().parse().ok());
    let day = caps.get(3).and_then(|m| m.as_str().parse().ok());
    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => DateFields::new(day, month, year),
        _ => DateFields::default(),
    }
}

/// Day-first numeric date where both separator runs use the same character.
///
/// One compiled pattern per candidate separator; the leftmost match across
/// all of them wins, which keeps `10-12 Marshgate Lane` and the
/// mixed-separator `5 12/85` from being read as dates.
fn numeric_date(text: &str, style: YearStyle) -> DateFields {
    let patterns = match style {
        YearStyle::Full => NUMERIC_DMY.as_slice(),
        YearStyle::Short => NUMERIC_DMY_SHORT_YEAR.as_slice(),
    };
    let Some(caps) = patterns
        .iter()
        .filter_map(|pattern| pattern.captures(text))
        .min_by_key(|caps| caps.get(0).map_or(usize::MAX, |m| m.start()))
    else {
        return DateFields::default();
    };
    let day = caps.get(1).and_then(|m| m.as_str().parse().ok());
    let month = caps.get(2).and_then(|m| m.as_str().parse().ok());
    let year = caps.get(3).and_then(|m| m.as_str().parse().ok());
    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => DateFields::new(day, month, year),
        _ => DateFields::default(),
    }
}

/// Named-month date, day-first form then month-first form.
///
/// The day-first form tolerates a leading weekday and a missing year; the
/// month-first form requires a year and only fills fields the day-first
/// form left open.
fn complex_date(text: &str, style: YearStyle) -> DateFields {
    let (day_first, month_first) = match style {
        YearStyle::Full => (&*COMPLEX_DAY_FIRST, &*COMPLEX_MONTH_FIRST),
        YearStyle::Short => (
            &*COMPLEX_DAY_FIRST_SHORT_YEAR,
            &*COMPLEX_MONTH_FIRST_SHORT_YEAR,
        ),
    };

    let mut fields = DateFields::default();
    if let Some(caps) = day_first.captures(text) {
        fields.day = caps.get(1).and_then(|m| m.as_str().parse().ok());
        fields.month = caps.get(2).and_then(|m| month_number(m.as_str()));
        fields.year = caps.get(3).and_then(|m| m.as_str().parse().ok());
    }
    if let Some(caps) = month_first.captures(text) {
        fields.fill(DateFields {
            day: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            month: caps.get(1).and_then(|m| month_number(m.as_str())),
            year: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        });
    }
    fields
}

/// First month name appearing as a whole word. Full names are scanned
/// before abbreviations so "May" resolves through the full-name table.
fn month_word(text: &str) -> Option<u8> {
    MONTH_WORD
        .find(text)
        .and_then(|m| month_number(m.as_str()))
        .or_else(|| {
            SHORT_MONTH_WORD
                .find(text)
                .and_then(|m| month_number(m.as_str()))
        })
}

/// First day number carrying an ordinal suffix: `5th`, `1st`.
fn ordinal_day(text: &str) -> Option<u8> {
    ORDINAL_DAY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Last-resort `YYYY-MM-DD` rescan, separators normalized to `-`.
fn compact_ymd(text: &str) -> DateFields {
    let Some(m) = COMPACT_YMD.find(text) else {
        return DateFields::default();
    };
    let normalized = m.as_str().replace(['.', '/'], "-");
    let mut parts = normalized.split('-');
    let year = parts.next().and_then(|p| p.parse().ok());
    let month = parts.next().and_then(|p| p.parse().ok());
    let day = parts.next().and_then(|p| p.parse().ok());
    DateFields { day, month, year }
}

/// Last-resort `YYYY-MM` rescan, separators normalized to `-`.
fn compact_ym(text: &str) -> DateFields {
    let Some(m) = COMPACT_YM.find(text) else {
        return DateFields::default();
    };
    let normalized = m.as_str().replace(['.', '/'], "-");
    let mut parts = normalized.split('-');
    let year = parts.next().and_then(|p| p.parse().ok());
    let month = parts.next().and_then(|p| p.parse().ok());
    DateFields {
        day: None,
        month,
        year,
    }
}

/// First run of exactly four digits anywhere in the string.
fn four_digit_year(text: &str) -> Option<u16> {
    FOUR_DIGIT_YEAR.find(text).and_then(|m| m.as_str().parse().ok())
}

/// First apostrophe-introduced two-digit year: `'85`.
fn apostrophe_year(text: &str) -> Option<u16> {
    APOSTROPHE_YEAR
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(day: Option<u8>, month: Option<u8>, year: Option<u16>) -> DateFields {
        DateFields { day, month, year }
    }

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            (
                "this will be achieved before 10/02/2019",
                fields(Some(10), Some(2), Some(2019)),
            ),
            (
                "The painters said they had completed the job on 4th March 2020",
                fields(Some(4), Some(3), Some(2020)),
            ),
            (
                "This building was cleaned on the 8th of October 2006 after a huge storm",
                fields(Some(8), Some(10), Some(2006)),
            ),
            (
                "This building was cleaned on the 8th of October after a huge storm",
                fields(Some(8), Some(10), None),
            ),
            (
                "This building was cleaned at the end of October 1983 after a huge storm",
                fields(None, Some(10), Some(1983)),
            ),
            (
                "HOUSE 34 STREET 1: MONDAY 16th JULY 2018",
                fields(Some(16), Some(7), Some(2018)),
            ),
            ("30-12-11", fields(Some(30), Some(12), Some(11))),
            (
                "uploads/2025-06/example.pdf",
                fields(None, Some(6), Some(2025)),
            ),
            (
                "uploads/2025-06/17/example.pdf",
                fields(Some(17), Some(6), Some(2025)),
            ),
            ("2025-06-17", fields(Some(17), Some(6), Some(2025))),
            ("1 2 1985", fields(Some(1), Some(2), Some(1985))),
            (
                "There were no more than 15. It started on 10.12.1850",
                fields(Some(10), Some(12), Some(1850)),
            ),
            ("10.12.1850", fields(Some(10), Some(12), Some(1850))),
            ("5 12 85", fields(Some(5), Some(12), Some(85))),
            ("5 12/85", fields(None, None, None)),
            ("5-12/85", fields(None, None, None)),
            (
                "Marshgate Business Centre, 10-12 Marshgate Lane",
                fields(None, None, None),
            ),
            ("5 October 2012", fields(Some(5), Some(10), Some(2012))),
            ("October 5 '12", fields(Some(5), Some(10), Some(12))),
            ("MAY 5th 1985", fields(Some(5), Some(5), Some(1985))),
            ("1st March '81", fields(Some(1), Some(3), Some(81))),
            ("March 1st", fields(Some(1), Some(3), None)),
            ("Apr '20", fields(None, Some(4), Some(20))),
            ("Apr 20th", fields(Some(20), Some(4), None)),
            ("Sunday, 24 June", fields(Some(24), Some(6), None)),
            ("Mon 2nd July", fields(Some(2), Some(7), None)),
            (
                "\"There is no date in this string\", said Jane",
                fields(None, None, None),
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(find(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(find(""), DateFields::default());
        assert_eq!(find("   "), DateFields::default());
    }

    #[test]
    fn test_deterministic() {
        let input = "Sunday 1st of March 2015, or thereabouts";
        assert_eq!(find(input), find(input));
        assert_eq!(find(input), fields(Some(1), Some(3), Some(2015)));
    }

    #[test]
    fn test_earlier_matcher_owns_all_fields() {
        // The ISO match fills everything; the named date later in the
        // string must not change any field.
        let result = find("2021-05-04 or 7th of June 1999");
        assert_eq!(result, fields(Some(4), Some(5), Some(2021)));
    }

    #[test]
    fn test_earlier_matcher_owns_month() {
        // The named matcher sets day and month; the year fallback may fill
        // the year but the second month name must not win.
        let result = find("14th of February or maybe October 1999");
        assert_eq!(result, fields(Some(14), Some(2), Some(1999)));
    }

    #[test]
    fn test_mismatched_separators_rejected() {
        assert_eq!(find("5 12/85"), DateFields::default());
        assert_eq!(find("5-12/85"), DateFields::default());
        assert_eq!(find("5.12/85"), DateFields::default());
    }

    #[test]
    fn test_four_digit_year_blocks_two_digit_retry() {
        // A four-digit year anywhere means the quoted short year is never
        // consulted.
        let result = find("final report 1994, drafted '89");
        assert_eq!(result, fields(None, None, Some(1994)));
    }

    #[test]
    fn test_two_digit_year_not_taken_from_four_digit_tail() {
        let result = find("this will be achieved before 10/02/2019");
        assert_eq!(result.year, Some(2019));
    }

    #[test]
    fn test_full_month_name_beats_abbreviation() {
        // "Mar" appears first, but the full-name scan runs before the
        // abbreviation scan.
        let result = find("Mar events planned for May");
        assert_eq!(result.month, Some(5));
    }

    #[test]
    fn test_weekday_never_produces_fields() {
        assert_eq!(find("see you on Tuesday"), DateFields::default());
        assert_eq!(find("Mon and Fri"), DateFields::default());
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        // Extraction, not validation: day 31 in February is returned as
        // matched.
        let result = find("31st of February 2021");
        assert_eq!(result, fields(Some(31), Some(2), Some(2021)));
    }

    #[test]
    fn test_separated_forms_with_punctuation() {
        assert_eq!(find("Sun-1-March-2015"), fields(Some(1), Some(3), Some(2015)));
        assert_eq!(
            find("Sunday, 1 March 2015"),
            fields(Some(1), Some(3), Some(2015))
        );
        assert_eq!(find("March-1st-2015"), fields(Some(1), Some(3), Some(2015)));
    }

    #[test]
    fn test_iso_separators_may_differ() {
        assert_eq!(find("2025.06-17"), fields(Some(17), Some(6), Some(2025)));
        assert_eq!(find("2025 06 17"), fields(Some(17), Some(6), Some(2025)));
    }

    #[test]
    fn test_apostrophe_year_alone() {
        assert_eq!(find("back in '85"), fields(None, None, Some(85)));
    }

    #[test]
    fn test_bare_year_alone() {
        assert_eq!(find("the summer of 1969"), fields(None, None, Some(1969)));
    }
}

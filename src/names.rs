//! Static English month, weekday, and ordinal-suffix tables.

/// Full month names; index + 1 is the month number.
pub const MONTHS: [&str; 12] = [
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

/// Abbreviated month names; index + 1 is the month number.
pub const SHORT_MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Full weekday names. Recognized only to be skipped over; a weekday never
/// contributes a field to the result.
pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Abbreviated weekday names, skipped like the full forms.
pub const SHORT_DAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Ordinal suffixes accepted after a day number.
pub const ORDINALS: [&str; 4] = ["st", "nd", "rd", "th"];

/// Look up a month name, full or abbreviated, case-insensitively.
///
/// The abbreviation table is checked first: the named-month patterns
/// alternate abbreviations and full names together and may capture either
/// form. Returns the 1-based month number.
pub fn month_number(name: &str) -> Option<u8> {
    let lower = name.to_ascii_lowercase();
    SHORT_MONTHS
        .iter()
        .position(|m| *m == lower)
        .or_else(|| MONTHS.iter().position(|m| *m == lower))
        .map(|index| index as u8 + 1)
}

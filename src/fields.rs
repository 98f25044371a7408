//! The partial date result type.

use serde::{Deserialize, Serialize};

/// Date fields recovered from a string, each independently optional.
///
/// Fields are never validated against each other: `day: Some(31)` with
/// `month: Some(2)` is a legitimate result. Numeric values are whatever the
/// matching pattern captured, so a two-digit year stays two digits
/// (`'12` yields `year: Some(12)`, not 2012).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateFields {
    /// Day of month, 1–31 not enforced.
    pub day: Option<u8>,
    /// Month number 1–12, from digits or from a name lookup.
    pub month: Option<u8>,
    /// Year as parsed: four digits, or a raw two-digit value.
    pub year: Option<u16>,
}

impl DateFields {
    /// Create a result with all fields present.
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self {
            day: Some(day),
            month: Some(month),
            year: Some(year),
        }
    }

    /// Merge another result into this one, keeping already-set fields.
    ///
    /// A field set by an earlier matcher is immutable for the rest of the
    /// extraction, so the merge only copies into absent slots.
    pub fn fill(&mut self, other: DateFields) {
        if self.day.is_none() {
            self.day = other.day;
        }
        if self.month.is_none() {
            self.month = other.month;
        }
        if self.year.is_none() {
            self.year = other.year;
        }
    }

    /// True when no field has been found.
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// True when all three fields have been found.
    pub fn is_full(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }
}

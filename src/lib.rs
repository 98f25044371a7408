//! Heuristic extraction of partial calendar dates from unstructured text.
//!
//! This crate provides:
//! - A best-effort scan for day, month, and year in free sentences,
//!   filenames, and directory paths
//! - Partial results: each field is independently optional, and absence of
//!   all three is a normal outcome rather than an error
//! - English month and weekday name recognition, full and abbreviated
//!
//! It is an extractor, not a validator: out-of-range values such as day 31
//! in February are returned as matched, and callers needing calendar
//! validity must check separately.
//!
//! ```
//! use datefind::find;
//!
//! let fields = find("The painters finished on 4th March 2020");
//! assert_eq!(fields.day, Some(4));
//! assert_eq!(fields.month, Some(3));
//! assert_eq!(fields.year, Some(2020));
//! ```

pub mod fields;
pub mod finder;
pub mod names;
pub mod patterns;

pub use fields::DateFields;
pub use finder::find;
pub use names::month_number;

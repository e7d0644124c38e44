//! Date normalization trait

use chrono::NaiveDateTime;

/// Turns stored or user-supplied date strings into comparable values.
///
/// Returns `None` when the input is not a date the parser understands.
pub trait DateParser {
    fn parse_date(&self, raw: &str) -> Option<NaiveDateTime>;
}

impl<T: DateParser + ?Sized> DateParser for &T {
    fn parse_date(&self, raw: &str) -> Option<NaiveDateTime> {
        (**self).parse_date(raw)
    }
}

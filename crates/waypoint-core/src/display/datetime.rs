//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps and history day labels in the
//! system timezone.

use std::fmt;

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Wall-clock time of day (`HH:MM`) in the given timezone.
pub struct LocalTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(self.1.clone()).strftime("%H:%M"))
    }
}

/// Label for a planning-history day relative to `today`.
///
/// `Today`, `Yesterday`, `Mar 4` within the current year, `Mar 4, 2025`
/// otherwise.
pub struct DayLabel {
    pub date: Date,
    pub today: Date,
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.date == self.today {
            return write!(f, "Today");
        }
        if self.today.yesterday().ok() == Some(self.date) {
            return write!(f, "Yesterday");
        }
        write!(f, "{} {}", self.date.strftime("%b"), self.date.day())?;
        if self.date.year() != self.today.year() {
            write!(f, ", {}", self.date.year())?;
        }
        Ok(())
    }
}

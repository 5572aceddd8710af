//! Range strings
//!
//! Education and experience entries carry their period as text, e.g.
//! `August 2023 - Present` or `June 2024 - August 2024`. Each bound is a full
//! English month name and a four-digit year; the end may be `Present`, which
//! stands for the day the range is checked.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Why a range string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    /// Not exactly two parts around `" - "`
    #[error("expected '<Month Year> - <Month Year>' or '<Month Year> - Present'")]
    Separator,

    /// Unknown month name
    #[error("'{0}' is not a month name")]
    Month(String),

    /// Year is not four digits
    #[error("'{0}' is not a four-digit year")]
    Year(String),

    /// A bound is not `<Month> <Year>`
    #[error("'{0}' is not of the form '<Month> <Year>'")]
    Bound(String),

    /// Start falls after end
    #[error("start date is after end date")]
    Inverted,
}

/// End of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// A concrete month
    Month(NaiveDate),
    /// Still ongoing
    Present,
}

/// A parsed `<Month Year> - <Month Year|Present>` interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the starting month
    pub start: NaiveDate,
    /// End bound
    pub end: RangeEnd,
}

impl DateRange {
    /// Parse the syntax of a range string without checking its order
    pub fn parse(text: &str) -> Result<Self, DateRangeError> {
        let parts: Vec<&str> = text.split(" - ").collect();
        let [start, end] = parts.as_slice() else {
            return Err(DateRangeError::Separator);
        };

        let start = parse_month_year(start)?;
        let end = if end.eq_ignore_ascii_case("present") {
            RangeEnd::Present
        } else {
            RangeEnd::Month(parse_month_year(end)?)
        };

        Ok(Self { start, end })
    }

    /// Parse and require `start <= end`, resolving `Present` to `today`
    pub fn parse_ordered(text: &str, today: NaiveDate) -> Result<Self, DateRangeError> {
        let range = Self::parse(text)?;
        if range.is_ordered(today) {
            Ok(range)
        } else {
            Err(DateRangeError::Inverted)
        }
    }

    /// The concrete end date, with `Present` resolved to `today`
    pub fn end_date(&self, today: NaiveDate) -> NaiveDate {
        match self.end {
            RangeEnd::Month(date) => date,
            RangeEnd::Present => today,
        }
    }

    /// True when the range does not run backwards
    pub fn is_ordered(&self, today: NaiveDate) -> bool {
        self.start <= self.end_date(today)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.start.format("%B %Y"))?;
        match self.end {
            RangeEnd::Month(date) => write!(f, "{}", date.format("%B %Y")),
            RangeEnd::Present => f.write_str("Present"),
        }
    }
}

/// True when `text` is a well-formed range whose start is not after its end
pub fn is_valid_range(text: &str, today: NaiveDate) -> bool {
    DateRange::parse_ordered(text, today).is_ok()
}

fn parse_month_year(text: &str) -> Result<NaiveDate, DateRangeError> {
    let Some((month, year)) = text.split_once(char::is_whitespace) else {
        return Err(DateRangeError::Bound(text.to_string()));
    };
    let year = year.trim_start();

    let month = MONTHS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(month))
        .ok_or_else(|| DateRangeError::Month(month.to_string()))?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateRangeError::Year(year.to_string()));
    }
    let year: i32 = match year.parse() {
        Ok(value) if value >= 1 => value,
        _ => return Err(DateRangeError::Year(year.to_string())),
    };

    NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
        .ok_or_else(|| DateRangeError::Bound(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn month(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_parse_closed_range() {
        let range = DateRange::parse("June 2024 - August 2024").unwrap();
        assert_eq!(range.start, month(2024, 6));
        assert_eq!(range.end, RangeEnd::Month(month(2024, 8)));
    }

    #[test]
    fn test_parse_present() {
        let range = DateRange::parse("August 2023 - Present").unwrap();
        assert_eq!(range.end, RangeEnd::Present);
        assert_eq!(range.end_date(today()), today());
        assert!(is_valid_range("August 2023 - Present", today()));
        assert!(is_valid_range("August 2023 - present", today()));
    }

    #[test]
    fn test_whitespace_runs_between_month_and_year() {
        assert!(is_valid_range("August  2023 - Present", today()));
        assert!(is_valid_range("August\t2023 - May 2024", today()));
        assert_eq!(
            DateRange::parse(" August 2023 - Present"),
            Err(DateRangeError::Month(String::new()))
        );
    }

    #[test]
    fn test_year_zero_is_rejected() {
        assert_eq!(
            DateRange::parse("January 0000 - Present"),
            Err(DateRangeError::Year("0000".to_string()))
        );
    }

    #[test]
    fn test_month_names_are_case_insensitive() {
        assert!(is_valid_range("august 2023 - SEPTEMBER 2023", today()));
    }

    #[test]
    fn test_same_month_is_valid() {
        assert!(is_valid_range("May 2020 - May 2020", today()));
    }

    #[test]
    fn test_current_month_to_present_is_valid() {
        assert!(is_valid_range("October 2026 - Present", today()));
    }

    #[test]
    fn test_future_start_to_present_is_invalid() {
        assert!(!is_valid_range("November 2026 - Present", today()));
    }

    #[test]
    fn test_inverted_range() {
        assert_eq!(
            DateRange::parse_ordered("August 2025 - January 2020", today()),
            Err(DateRangeError::Inverted)
        );
    }

    #[test]
    fn test_unparseable_ranges() {
        for text in [
            "13 Month 2023 - Present",
            "2015 - 2019",
            "2020 - Present",
            "Aug 2023 - Present",
            "August 23 - Present",
            "August 2023-Present",
            "August 2023 - May 2024 - Present",
            "August 2023",
            "",
        ] {
            assert!(!is_valid_range(text, today()), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_error_reasons() {
        assert_eq!(
            DateRange::parse("August 2023-Present"),
            Err(DateRangeError::Separator)
        );
        assert_eq!(
            DateRange::parse("Smarch 2023 - Present"),
            Err(DateRangeError::Month("Smarch".to_string()))
        );
        assert_eq!(
            DateRange::parse("March 23 - Present"),
            Err(DateRangeError::Year("23".to_string()))
        );
        assert_eq!(
            DateRange::parse("2015 - 2019"),
            Err(DateRangeError::Bound("2015".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let range = DateRange::parse("august 2023 - present").unwrap();
        assert_eq!(range.to_string(), "August 2023 - Present");
    }
}

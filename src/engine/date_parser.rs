// ==========================================
// PM Scheduling Core - Date Normalization
// ==========================================
// The completion ledger accumulated date text in several shapes over the
// years. Patterns are tried in a fixed priority order so parsing is
// reproducible; the order is part of the contract:
//   1. %Y-%m-%d
//   2. %Y-%m-%d %H:%M:%S   (date part kept, time discarded)
//   3. %m/%d/%Y            (year segment must be exactly 4 digits)
//   4. %m/%d/%y            (two-digit year, configured pivot)
// No state, no I/O; same input always yields the same date.
// ==========================================

use crate::error::ScheduleError;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    /// Two-digit years >= pivot resolve to the 1900s, < pivot to the 2000s.
    pivot_year: i32,
}

impl DateParser {
    pub fn new(pivot_year: i32) -> Self {
        Self { pivot_year }
    }

    /// Normalize a completion-date string to a canonical calendar date.
    ///
    /// Returns `InvalidDateFormat` when no accepted pattern matches.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, ScheduleError> {
        let text = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Ok(dt.date());
        }
        // chrono's %Y also accepts short years ("25" would parse as year
        // 0025), so the four-digit form is gated on segment length and
        // two-digit years always go through the pivot.
        if Self::has_four_digit_year(text) {
            if let Ok(date) = NaiveDate::parse_from_str(text, "%m/%d/%Y") {
                return Ok(date);
            }
        }
        if let Some(date) = self.parse_two_digit_year(text) {
            return Ok(date);
        }

        Err(ScheduleError::InvalidDateFormat(input.to_string()))
    }

    fn has_four_digit_year(text: &str) -> bool {
        text.rsplit('/')
            .next()
            .map_or(false, |y| y.len() == 4 && y.chars().all(|c| c.is_ascii_digit()))
    }

    /// MM/DD/YY with the configured pivot. chrono's %y has its own fixed
    /// pivot, so the century resolution is done by hand here.
    fn parse_two_digit_year(&self, text: &str) -> Option<NaiveDate> {
        let mut parts = text.splitn(3, '/');
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        let year_part = parts.next()?;
        if year_part.len() != 2 || !year_part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let yy: i32 = year_part.parse().ok()?;

        let year = if yy >= self.pivot_year { 1900 + yy } else { 2000 + yy };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn parser() -> DateParser {
        DateParser::new(50)
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parser().parse("2025-02-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_keeps_date_part() {
        assert_eq!(
            parser().parse("2025-02-15 13:45:00").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_us_date() {
        assert_eq!(
            parser().parse("02/15/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_two_digit_year_pivot() {
        // < 50 resolves to the 2000s, >= 50 to the 1900s.
        assert_eq!(
            parser().parse("02/15/25").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
        assert_eq!(
            parser().parse("06/01/99").unwrap(),
            NaiveDate::from_ymd_opt(1999, 6, 1).unwrap()
        );
        assert_eq!(
            parser().parse("06/01/50").unwrap(),
            NaiveDate::from_ymd_opt(1950, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_respects_configured_pivot() {
        let strict = DateParser::new(80);
        assert_eq!(
            strict.parse("06/01/79").unwrap(),
            NaiveDate::from_ymd_opt(2079, 6, 1).unwrap()
        );
        assert_eq!(
            strict.parse("06/01/80").unwrap(),
            NaiveDate::from_ymd_opt(1980, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_two_digit_year_never_taken_literally() {
        // "25" is a pivoted year, not year 0025.
        let date = parser().parse("02/15/25").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
        assert_ne!(date.year(), 25);
    }

    #[test]
    fn test_slash_year_must_be_two_or_four_digits() {
        assert!(parser().parse("02/15/025").is_err());
        assert!(parser().parse("02/15/20255").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parser().parse("not-a-date").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDateFormat(_)));

        assert!(parser().parse("").is_err());
        assert!(parser().parse("15/02/2025").is_err()); // no DD/MM form accepted
        assert!(parser().parse("02/30/2025").is_err()); // impossible calendar day
    }

    #[test]
    fn test_parse_is_deterministic() {
        let p = parser();
        assert_eq!(p.parse("02/15/25").unwrap(), p.parse("02/15/25").unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parser().parse("  2025-02-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }
}

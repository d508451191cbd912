//! Time coordinate construction.

use super::WriteError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format accepted for scaffold date ranges
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Inclusive range of calendar days, each starting at 00:00:00
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `yyyy/mm/dd` start and end dates
    pub fn parse(start: &str, end: &str) -> Result<Self, WriteError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }

    /// Elapsed seconds from `start` for every step up to and including
    /// `end`. An inverted range gives an empty axis.
    pub fn regular_axis(&self, time_step_seconds: i64) -> Result<Vec<f64>, WriteError> {
        if time_step_seconds <= 0 {
            return Err(WriteError::InvalidTimeStep(time_step_seconds));
        }

        let start = self.start_time();
        let end = self.end_time();
        let step = Duration::try_seconds(time_step_seconds)
            .ok_or(WriteError::InvalidTimeStep(time_step_seconds))?;

        let mut times = Vec::new();
        let mut current = start;
        while current <= end {
            times.push(seconds_between(start, current));
            // stepping past the representable calendar ends the axis
            match current.checked_add_signed(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(times)
    }
}

pub fn parse_date(date: &str) -> Result<NaiveDate, WriteError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        WriteError::InvalidDate(format!("{}. Expected: YYYY/MM/DD", date))
    })
}

fn seconds_between(origin: NaiveDateTime, time: NaiveDateTime) -> f64 {
    (time - origin).num_milliseconds() as f64 / 1000.0
}

/// Seconds elapsed since the first timestamp. Irregular spacing is kept.
pub fn elapsed_seconds(times: &[NaiveDateTime]) -> Vec<f64> {
    match times.first() {
        Some(&origin) => times.iter().map(|&t| seconds_between(origin, t)).collect(),
        None => Vec::new(),
    }
}

/// CF units string for a time axis counted in seconds from `origin`
pub fn time_units(origin: NaiveDateTime) -> String {
    format!("seconds since {}", origin.format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_day_hourly_axis() {
        let range = TimeRange::new(date(2020, 3, 1), date(2020, 3, 2));
        let axis = range.regular_axis(3600).unwrap();

        assert_eq!(axis.len(), 25);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[1], 3600.0);
        assert_eq!(axis[24], 86400.0);
    }

    #[test]
    fn test_step_not_dividing_range() {
        let range = TimeRange::new(date(2020, 3, 1), date(2020, 3, 2));
        let axis = range.regular_axis(7 * 3600).unwrap();
        assert_eq!(axis, vec![0.0, 25200.0, 50400.0, 75600.0]);
    }

    #[test]
    fn test_single_day_range() {
        let range = TimeRange::new(date(2020, 3, 1), date(2020, 3, 1));
        assert_eq!(range.regular_axis(1800).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = TimeRange::new(date(2020, 3, 2), date(2020, 3, 1));
        assert!(range.regular_axis(1800).unwrap().is_empty());
    }

    #[test]
    fn test_non_positive_step() {
        let range = TimeRange::new(date(2020, 3, 1), date(2020, 3, 2));
        assert!(matches!(
            range.regular_axis(0),
            Err(WriteError::InvalidTimeStep(0))
        ));
    }

    #[test]
    fn test_step_longer_than_range() {
        let range = TimeRange::new(date(2012, 1, 1), date(2012, 1, 2));
        assert_eq!(range.regular_axis(10_000_000_000_000).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_step_beyond_duration_range() {
        let range = TimeRange::new(date(2012, 1, 1), date(2012, 1, 2));
        assert!(matches!(
            range.regular_axis(i64::MAX),
            Err(WriteError::InvalidTimeStep(i64::MAX))
        ));
    }

    #[test]
    fn test_parse_range() {
        let range = TimeRange::parse("2012/01/01", "2012/12/31").unwrap();
        assert_eq!(range.start, date(2012, 1, 1));
        assert_eq!(range.end, date(2012, 12, 31));
        assert!(TimeRange::parse("2012-01-01", "2012/12/31").is_err());
    }

    #[test]
    fn test_elapsed_seconds_keeps_gaps() {
        let t0 = date(2012, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        let times = [t0, t0 + Duration::seconds(1800), t0 + Duration::seconds(5400)];
        assert_eq!(elapsed_seconds(&times), vec![0.0, 1800.0, 5400.0]);
        assert!(elapsed_seconds(&[]).is_empty());
    }

    #[test]
    fn test_time_units() {
        let t0 = date(2012, 6, 1).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(time_units(t0), "seconds since 2012-06-01 00:00:00");
    }
}

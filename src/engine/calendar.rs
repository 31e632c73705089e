//! Date helpers over a fixed Monday to Friday work week.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LeaveError, Result};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Ascending iterator over an inclusive date range.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.last {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.next {
            Some(next) => (self.last - next).num_days() as usize + 1,
            None => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}

fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if to < from {
        return Err(LeaveError::InvalidRange { from, to });
    }
    Ok(())
}

/// Every date from `from` to `to`, both included. Each call returns a fresh
/// iterator.
pub fn enumerate_days(from: NaiveDate, to: NaiveDate) -> Result<DayRange> {
    ensure_ordered(from, to)?;
    Ok(DayRange {
        next: Some(from),
        last: to,
    })
}

pub fn count_weekdays(from: NaiveDate, to: NaiveDate) -> Result<u32> {
    let weekdays = enumerate_days(from, to)?
        .filter(|day| !is_weekend(*day))
        .count();
    Ok(weekdays as u32)
}

pub fn count_calendar_days(from: NaiveDate, to: NaiveDate) -> Result<u32> {
    ensure_ordered(from, to)?;
    Ok((to - from).num_days() as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        // 2026-03-07 is a Saturday
        assert!(is_weekend(date("2026-03-07")));
        assert!(is_weekend(date("2026-03-08")));
        assert!(!is_weekend(date("2026-03-09")));
        assert!(!is_weekend(date("2026-03-06")));
    }

    #[test]
    fn enumerate_is_inclusive_and_ascending() {
        let days: Vec<_> = enumerate_days(date("2026-02-27"), date("2026-03-02"))
            .unwrap()
            .collect();
        assert_eq!(
            days,
            vec![
                date("2026-02-27"),
                date("2026-02-28"),
                date("2026-03-01"),
                date("2026-03-02"),
            ]
        );
    }

    #[test]
    fn enumerate_single_day() {
        let range = enumerate_days(date("2026-03-02"), date("2026-03-02")).unwrap();
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn enumerate_is_restartable() {
        let range = enumerate_days(date("2026-03-02"), date("2026-03-06")).unwrap();
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn reversed_range_fails() {
        let from = date("2026-03-06");
        let to = date("2026-03-02");
        assert_eq!(
            enumerate_days(from, to).unwrap_err(),
            LeaveError::InvalidRange { from, to }
        );
        assert!(count_weekdays(from, to).is_err());
        assert!(count_calendar_days(from, to).is_err());
    }

    #[test]
    fn counts_across_weekend() {
        // Fri -> Mon
        let from = date("2026-03-06");
        let to = date("2026-03-09");
        assert_eq!(count_calendar_days(from, to).unwrap(), 4);
        assert_eq!(count_weekdays(from, to).unwrap(), 2);
    }

    #[test]
    fn weekend_only_range_has_no_weekdays() {
        assert_eq!(
            count_weekdays(date("2026-03-07"), date("2026-03-08")).unwrap(),
            0
        );
    }

    #[test]
    fn counts_across_leap_day() {
        // 2028-02-28 (Mon) .. 2028-03-01 (Wed)
        assert_eq!(
            count_calendar_days(date("2028-02-28"), date("2028-03-01")).unwrap(),
            3
        );
        assert_eq!(
            count_weekdays(date("2028-02-28"), date("2028-03-01")).unwrap(),
            3
        );
    }
}

//! Day-of-month picker for monthly habits, with a "Last" option.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::PickerResult;
use crate::picker::{Column, ColumnGroup, ColumnSpec, ScrollColumn, WrapMode};

/// A day of the month, or the last day whatever its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfMonth {
    Day(u8),
    Last,
}

impl DayOfMonth {
    /// Every option in column order: 1st through 31st, then Last.
    pub fn all() -> Vec<DayOfMonth> {
        (1..=31).map(DayOfMonth::Day).chain([DayOfMonth::Last]).collect()
    }

    /// Concrete date in the given month. Days past the month's end fall on
    /// its last day.
    pub fn resolve(self, year: i32, month: u32) -> Option<NaiveDate> {
        let last = days_in_month(year, month)?;
        let day = match self {
            DayOfMonth::Day(d) => u32::from(d).min(last),
            DayOfMonth::Last => last,
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOfMonth::Day(d) => write!(f, "{}", ordinal(*d)),
            DayOfMonth::Last => write!(f, "Last"),
        }
    }
}

/// `1st`, `2nd`, `11th`, `23rd`...
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

#[derive(Debug)]
pub struct MonthDatePicker {
    day: ScrollColumn<DayOfMonth>,
}

impl MonthDatePicker {
    pub fn new(spec: ColumnSpec, initial: DayOfMonth) -> PickerResult<Self> {
        Ok(Self {
            day: ScrollColumn::new("day", DayOfMonth::all(), WrapMode::Wrap, spec, Some(&initial))?,
        })
    }

    pub fn set_day(&mut self, day: DayOfMonth) -> bool {
        self.day.select_value(&day, false)
    }

    /// Next date, on or after `today`, that the chosen day falls on.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let day = self.value()?;
        let this_month = day.resolve(today.year(), today.month())?;
        if this_month >= today {
            return Some(this_month);
        }
        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        day.resolve(year, month)
    }
}

impl ColumnGroup for MonthDatePicker {
    type Value = DayOfMonth;

    fn title(&self) -> &'static str {
        "Monthly on"
    }

    fn columns(&self) -> Vec<&dyn Column> {
        vec![&self.day as &dyn Column]
    }

    fn columns_mut(&mut self) -> Vec<&mut dyn Column> {
        vec![&mut self.day as &mut dyn Column]
    }

    fn value(&self) -> Option<DayOfMonth> {
        self.day.current_value().copied()
    }

    fn describe(&self) -> Option<String> {
        self.value().map(|day| match day {
            DayOfMonth::Day(d) => format!("every month on the {}", ordinal(d)),
            DayOfMonth::Last => "every month on the last day".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn test_resolve_clamps_to_month_end() {
        assert_eq!(DayOfMonth::Day(31).resolve(2023, 4), Some(date(2023, 4, 30)));
        assert_eq!(DayOfMonth::Last.resolve(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(DayOfMonth::Day(5).resolve(2024, 2), Some(date(2024, 2, 5)));
    }

    #[test]
    fn test_last_sits_between_31st_and_1st() {
        let picker = MonthDatePicker::new(ColumnSpec::default(), DayOfMonth::Last).unwrap();
        let labels: Vec<String> = picker.columns()[0]
            .row_views()
            .into_iter()
            .map(|row| row.label)
            .collect();
        assert_eq!(labels, vec!["30th", "31st", "Last", "1st", "2nd"]);
        assert_eq!(
            picker.describe().as_deref(),
            Some("every month on the last day")
        );
    }

    #[test]
    fn test_next_occurrence() {
        let mut picker = MonthDatePicker::new(ColumnSpec::default(), DayOfMonth::Day(15)).unwrap();
        assert_eq!(picker.next_occurrence(date(2024, 3, 10)), Some(date(2024, 3, 15)));
        assert_eq!(picker.next_occurrence(date(2024, 12, 20)), Some(date(2025, 1, 15)));
        picker.set_day(DayOfMonth::Last);
        assert_eq!(picker.next_occurrence(date(2024, 1, 31)), Some(date(2024, 1, 31)));
        assert_eq!(picker.describe().as_deref(), Some("every month on the last day"));
    }
}

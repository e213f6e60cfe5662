//! Reminder time: hour, minute and AM/PM columns.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::PickerResult;
use crate::picker::{Column, ColumnGroup, ColumnSpec, ScrollColumn, WrapMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// Minute of the hour, always shown with two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minute(pub u8);

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Split a 24-hour time into its 12-hour parts.
pub fn to_12_hour(time: NaiveTime) -> (u8, Minute, Period) {
    let hour = time.hour() as u8;
    let period = if hour < 12 { Period::Am } else { Period::Pm };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour12, Minute(time.minute() as u8), period)
}

/// Join 12-hour parts into a 24-hour time.
pub fn to_24_hour(hour12: u8, minute: Minute, period: Period) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour12) {
        return None;
    }
    let base = u32::from(hour12 % 12);
    let hour = match period {
        Period::Am => base,
        Period::Pm => base + 12,
    };
    NaiveTime::from_hms_opt(hour, u32::from(minute.0), 0)
}

#[derive(Debug)]
pub struct ReminderTimePicker {
    hour: ScrollColumn<u8>,
    minute: ScrollColumn<Minute>,
    period: ScrollColumn<Period>,
}

impl ReminderTimePicker {
    pub fn new(spec: ColumnSpec, initial: NaiveTime) -> PickerResult<Self> {
        let (hour, minute, period) = to_12_hour(initial);
        Ok(Self {
            hour: ScrollColumn::new("hour", (1..=12).collect(), WrapMode::Wrap, spec, Some(&hour))?,
            minute: ScrollColumn::new(
                "minute",
                (0..60).map(Minute).collect(),
                WrapMode::Wrap,
                spec,
                Some(&minute),
            )?,
            period: ScrollColumn::new(
                "period",
                vec![Period::Am, Period::Pm],
                WrapMode::Fixed,
                spec.with_margin(2),
                Some(&period),
            )?,
        })
    }

    /// Place all columns on `time` without animation.
    pub fn set_time(&mut self, time: NaiveTime) {
        let (hour, minute, period) = to_12_hour(time);
        self.hour.select_value(&hour, false);
        self.minute.select_value(&minute, false);
        self.period.select_value(&period, false);
    }

    #[cfg(test)]
    pub fn period_column_mut(&mut self) -> &mut ScrollColumn<Period> {
        &mut self.period
    }
}

impl ColumnGroup for ReminderTimePicker {
    type Value = NaiveTime;

    fn title(&self) -> &'static str {
        "Reminder time"
    }

    fn columns(&self) -> Vec<&dyn Column> {
        vec![&self.hour as &dyn Column, &self.minute, &self.period]
    }

    fn columns_mut(&mut self) -> Vec<&mut dyn Column> {
        vec![&mut self.hour as &mut dyn Column, &mut self.minute, &mut self.period]
    }

    fn value(&self) -> Option<NaiveTime> {
        to_24_hour(
            *self.hour.current_value()?,
            *self.minute.current_value()?,
            *self.period.current_value()?,
        )
    }

    fn describe(&self) -> Option<String> {
        self.value()
            .map(|time| format!("remind at {}", time.format("%H:%M")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(to_12_hour(time(0, 5)), (12, Minute(5), Period::Am));
        assert_eq!(to_12_hour(time(12, 0)), (12, Minute(0), Period::Pm));
        assert_eq!(to_12_hour(time(21, 30)), (9, Minute(30), Period::Pm));
        assert_eq!(to_24_hour(12, Minute(0), Period::Am), Some(time(0, 0)));
        assert_eq!(to_24_hour(12, Minute(15), Period::Pm), Some(time(12, 15)));
        assert_eq!(to_24_hour(7, Minute(45), Period::Pm), Some(time(19, 45)));
        assert_eq!(to_24_hour(13, Minute(0), Period::Am), None);
    }

    #[test]
    fn test_value_reads_all_columns() {
        let picker = ReminderTimePicker::new(ColumnSpec::default(), time(21, 5)).unwrap();
        assert_eq!(picker.value(), Some(time(21, 5)));
        assert_eq!(picker.describe().as_deref(), Some("remind at 21:05"));
    }

    #[test]
    fn test_period_tap_changes_half_of_day() {
        let mut picker = ReminderTimePicker::new(ColumnSpec::default(), time(9, 0)).unwrap();
        picker.period_column_mut().select_value(&Period::Pm, true);
        for _ in 0..20 {
            picker.tick_all(Duration::from_millis(16));
        }
        assert!(!picker.flush_all());
        assert_eq!(picker.value(), Some(time(21, 0)));
    }

    #[test]
    fn test_set_time_places_columns() {
        let mut picker = ReminderTimePicker::new(ColumnSpec::default(), time(9, 0)).unwrap();
        picker.set_time(time(0, 59));
        assert_eq!(picker.value(), Some(time(0, 59)));
        let labels: Vec<Option<String>> =
            picker.columns().iter().map(|c| c.current_label()).collect();
        assert_eq!(
            labels,
            vec![Some("12".into()), Some("59".into()), Some("AM".into())]
        );
    }
}

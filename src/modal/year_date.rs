//! Month and day columns for yearly habits.
//!
//! The day column follows the month: when the month column settles, the
//! day list is rebuilt for that month and an out-of-range day is clamped.

use std::fmt;

use chrono::Month;

use crate::error::PickerResult;
use crate::picker::{Column, ColumnGroup, ColumnSpec, ScrollColumn, WrapMode};

use super::month_date::days_in_month;

/// Year used for day counts when no year is configured. A leap year, so
/// February 29 stays pickable.
const ANY_YEAR: i32 = 2000;

/// Month shown by its short English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel(pub Month);

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.name()[..3])
    }
}

fn all_months() -> Vec<MonthLabel> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .map(MonthLabel)
        .collect()
}

fn days_for(year: Option<i32>, month: Month) -> Vec<u8> {
    let count = days_in_month(year.unwrap_or(ANY_YEAR), month.number_from_month()).unwrap_or(31);
    (1..=count as u8).collect()
}

#[derive(Debug)]
pub struct YearDatePicker {
    month: ScrollColumn<MonthLabel>,
    day: ScrollColumn<u8>,
    year: Option<i32>,
}

impl YearDatePicker {
    pub fn new(spec: ColumnSpec, year: Option<i32>, month: Month, day: u8) -> PickerResult<Self> {
        let days = days_for(year, month);
        let day = day.clamp(1, days.len() as u8);
        Ok(Self {
            month: ScrollColumn::new(
                "month",
                all_months(),
                WrapMode::Wrap,
                spec,
                Some(&MonthLabel(month)),
            )?,
            day: ScrollColumn::new("day", days, WrapMode::Wrap, spec, Some(&day))?,
            year,
        })
    }

    /// Place both columns without animation.
    pub fn set_date(&mut self, month: Month, day: u8) -> PickerResult<()> {
        self.month.select_value(&MonthLabel(month), false);
        self.day.set_domain(days_for(self.year, month))?;
        self.day.select_value(&day, false);
        Ok(())
    }

    #[cfg(test)]
    pub fn month_column_mut(&mut self) -> &mut ScrollColumn<MonthLabel> {
        &mut self.month
    }

    #[cfg(test)]
    pub fn day_count(&self) -> usize {
        self.day.sequence().domain().len()
    }

    fn sync_days(&mut self) {
        let Some(MonthLabel(month)) = self.month.current_value().copied() else {
            return;
        };
        if let Err(e) = self.day.set_domain(days_for(self.year, month)) {
            crate::log::log(&format!("day column rebuild failed: {}", e));
        }
    }
}

impl ColumnGroup for YearDatePicker {
    type Value = (Month, u8);

    fn title(&self) -> &'static str {
        "Yearly on"
    }

    fn columns(&self) -> Vec<&dyn Column> {
        vec![&self.month as &dyn Column, &self.day]
    }

    fn columns_mut(&mut self) -> Vec<&mut dyn Column> {
        vec![&mut self.month as &mut dyn Column, &mut self.day]
    }

    /// The day list is rebuilt only once the month settles, so a day read
    /// mid-settle is clamped to the month currently shown.
    fn value(&self) -> Option<(Month, u8)> {
        let MonthLabel(month) = *self.month.current_value()?;
        let last = days_for(self.year, month).len() as u8;
        Some((month, (*self.day.current_value()?).min(last)))
    }

    fn describe(&self) -> Option<String> {
        self.value()
            .map(|(month, day)| format!("{:02}-{:02}", month.number_from_month(), day))
    }

    fn column_committed(&mut self, index: usize) {
        if index == 0 {
            self.sync_days();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settle(picker: &mut YearDatePicker) {
        for _ in 0..30 {
            picker.tick_all(Duration::from_millis(16));
        }
        picker.flush_all();
    }

    #[test]
    fn test_month_labels() {
        let labels: Vec<String> = all_months().iter().map(ToString::to_string).collect();
        assert_eq!(labels[0], "Jan");
        assert_eq!(labels[11], "Dec");
    }

    #[test]
    fn test_day_column_follows_month() {
        let mut picker =
            YearDatePicker::new(ColumnSpec::default(), Some(2023), Month::March, 31).unwrap();
        assert_eq!(picker.day_count(), 31);
        assert_eq!(picker.describe().as_deref(), Some("03-31"));

        picker.month_column_mut().step(1);
        settle(&mut picker);
        assert_eq!(picker.day_count(), 30);
        assert_eq!(picker.value(), Some((Month::April, 30)));

        picker.month_column_mut().select_value(&MonthLabel(Month::February), true);
        settle(&mut picker);
        assert_eq!(picker.day_count(), 28);
        assert_eq!(picker.value(), Some((Month::February, 28)));
    }

    #[test]
    fn test_value_mid_settle_is_a_real_date() {
        let mut picker =
            YearDatePicker::new(ColumnSpec::default(), Some(2023), Month::March, 31).unwrap();
        picker.month_column_mut().step(-1);
        for _ in 0..5 {
            picker.tick_all(Duration::from_millis(16));
        }
        assert!(picker.is_animating());
        assert_eq!(picker.day_count(), 31);
        assert_eq!(picker.value(), Some((Month::February, 28)));
        assert_eq!(picker.describe().as_deref(), Some("02-28"));
    }

    #[test]
    fn test_february_29_without_year() {
        let picker = YearDatePicker::new(ColumnSpec::default(), None, Month::February, 29).unwrap();
        assert_eq!(picker.day_count(), 29);
        assert_eq!(picker.describe().as_deref(), Some("02-29"));
    }

    #[test]
    fn test_initial_day_is_clamped() {
        let picker =
            YearDatePicker::new(ColumnSpec::default(), Some(2023), Month::February, 30).unwrap();
        assert_eq!(picker.value(), Some((Month::February, 28)));
    }

    #[test]
    fn test_december_wraps_to_january() {
        let mut picker =
            YearDatePicker::new(ColumnSpec::default(), Some(2024), Month::December, 1).unwrap();
        picker.month_column_mut().step(1);
        settle(&mut picker);
        assert_eq!(picker.value(), Some((Month::January, 1)));
    }
}

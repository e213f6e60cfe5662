//! Pickers composed from scroll columns.
//!
//! Each one owns the meaning of its values (12/24-hour time, days in a
//! month, the "Last" day) and reads its columns through the engine's
//! public contract.

mod month_date;
mod reminder;
mod year_date;

pub use month_date::{DayOfMonth, MonthDatePicker};
pub use reminder::ReminderTimePicker;
pub use year_date::YearDatePicker;

use std::time::{Duration, Instant};

use chrono::{Local, Month, NaiveDate};

use crate::config::{Config, PickerKind};
use crate::error::PickerResult;
use crate::events::Action;
use crate::log;
use crate::modal::{DayOfMonth, MonthDatePicker, ReminderTimePicker, YearDatePicker};
use crate::picker::{Column, ColumnGroup, ColumnSpec, TickOutcome};
use crate::scroll::WheelGesture;
use crate::tui::interaction::InteractionRegistry;

/// Month and day the yearly picker opens on.
const DEFAULT_YEAR_DATE: (Month, u8) = (Month::January, 1);

/// The picker currently on screen.
#[derive(Debug)]
pub enum ActivePicker {
    Time(ReminderTimePicker),
    Month(MonthDatePicker),
    Year(YearDatePicker),
}

impl ActivePicker {
    fn build(kind: PickerKind, config: &Config, spec: ColumnSpec) -> PickerResult<Self> {
        Ok(match kind {
            PickerKind::Time => {
                ActivePicker::Time(ReminderTimePicker::new(spec, config.reminder_time())?)
            }
            PickerKind::Month => {
                ActivePicker::Month(MonthDatePicker::new(spec, DayOfMonth::Day(1))?)
            }
            PickerKind::Year => {
                let (month, day) = DEFAULT_YEAR_DATE;
                ActivePicker::Year(YearDatePicker::new(spec, config.year, month, day)?)
            }
        })
    }

    pub fn kind(&self) -> PickerKind {
        match self {
            ActivePicker::Time(_) => PickerKind::Time,
            ActivePicker::Month(_) => PickerKind::Month,
            ActivePicker::Year(_) => PickerKind::Year,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActivePicker::Time(p) => p.title(),
            ActivePicker::Month(p) => p.title(),
            ActivePicker::Year(p) => p.title(),
        }
    }

    pub fn columns(&self) -> Vec<&dyn Column> {
        match self {
            ActivePicker::Time(p) => p.columns(),
            ActivePicker::Month(p) => p.columns(),
            ActivePicker::Year(p) => p.columns(),
        }
    }

    pub fn columns_mut(&mut self) -> Vec<&mut dyn Column> {
        match self {
            ActivePicker::Time(p) => p.columns_mut(),
            ActivePicker::Month(p) => p.columns_mut(),
            ActivePicker::Year(p) => p.columns_mut(),
        }
    }

    /// Run `f` on column `index`, if it exists.
    pub fn with_column<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut dyn Column) -> R,
    ) -> Option<R> {
        self.columns_mut().into_iter().nth(index).map(f)
    }

    pub fn describe(&self) -> Option<String> {
        match self {
            ActivePicker::Time(p) => p.describe(),
            ActivePicker::Month(p) => p.describe(),
            ActivePicker::Year(p) => p.describe(),
        }
    }

    /// Description for a saved entry. Monthly picks also name the next
    /// date they fall on.
    pub fn summary(&self, today: NaiveDate) -> Option<String> {
        let description = self.describe()?;
        match self {
            ActivePicker::Month(p) => match p.next_occurrence(today) {
                Some(next) => Some(format!("{}, next {}", description, next.format("%Y-%m-%d"))),
                None => Some(description),
            },
            _ => Some(description),
        }
    }

    fn tick_all(&mut self, elapsed: Duration) -> TickOutcome {
        match self {
            ActivePicker::Time(p) => p.tick_all(elapsed),
            ActivePicker::Month(p) => p.tick_all(elapsed),
            ActivePicker::Year(p) => p.tick_all(elapsed),
        }
    }

    fn flush_all(&mut self) -> bool {
        match self {
            ActivePicker::Time(p) => p.flush_all(),
            ActivePicker::Month(p) => p.flush_all(),
            ActivePicker::Year(p) => p.flush_all(),
        }
    }

    fn cancel_all(&mut self) {
        match self {
            ActivePicker::Time(p) => p.cancel_all(),
            ActivePicker::Month(p) => p.cancel_all(),
            ActivePicker::Year(p) => p.cancel_all(),
        }
    }

    /// Put every column back on its starting value without animation.
    fn reset(&mut self, config: &Config) {
        match self {
            ActivePicker::Time(p) => p.set_time(config.reminder_time()),
            ActivePicker::Month(p) => {
                p.set_day(DayOfMonth::Day(1));
            }
            ActivePicker::Year(p) => {
                let (month, day) = DEFAULT_YEAR_DATE;
                if let Err(e) = p.set_date(month, day) {
                    log::log(&format!("reset failed: {}", e));
                }
            }
        }
    }
}

/// A value read from the picker by the save action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub title: &'static str,
    pub description: String,
}

/// Mouse drag in progress on a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub column: usize,
    pub slot: usize,
    pub last_row: u16,
    pub moved: bool,
}

pub struct App {
    pub config: Config,
    pub spec: ColumnSpec,
    pub picker: ActivePicker,
    pub focus: usize,
    pub wheel: WheelGesture,
    pub drag: Option<DragState>,
    pub saved: Vec<SavedEntry>,
    pub status: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub interactions: InteractionRegistry,
}

impl App {
    pub fn new(config: Config) -> PickerResult<Self> {
        let spec = config.column_spec();
        let picker = ActivePicker::build(config.default_picker(), &config, spec)?;
        let wheel = WheelGesture::new(config.wheel_step(), config.wheel_quiet());
        Ok(Self {
            config,
            spec,
            picker,
            focus: 0,
            wheel,
            drag: None,
            saved: Vec::new(),
            status: None,
            show_help: false,
            should_quit: false,
            interactions: InteractionRegistry::new(),
        })
    }

    pub fn column_count(&self) -> usize {
        self.picker.columns().len()
    }

    /// Replace the on-screen picker. Pending corrections of the old one are
    /// discarded.
    pub fn open_picker(&mut self, kind: PickerKind) {
        if self.picker.kind() == kind {
            return;
        }
        match ActivePicker::build(kind, &self.config, self.spec) {
            Ok(picker) => {
                self.picker.cancel_all();
                self.picker = picker;
                self.focus = 0;
                self.drag = None;
                self.wheel.reset();
                log::log_event(&format!("opened {:?} picker", kind));
            }
            Err(e) => self.status = Some(format!("Cannot open picker: {}", e)),
        }
    }

    /// Read every column at once and record the combined value.
    pub fn save(&mut self) {
        self.save_on(Local::now().date_naive());
    }

    fn save_on(&mut self, today: NaiveDate) {
        match self.picker.summary(today) {
            Some(description) => {
                log::log_event(&format!("saved {}", description));
                self.status = Some(format!("Saved: {}", description));
                self.saved.push(SavedEntry {
                    title: self.picker.title(),
                    description,
                });
            }
            None => self.status = Some("Nothing selected".to_string()),
        }
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::OpenPicker(kind) => self.open_picker(kind),
            Action::FocusNext => {
                let count = self.column_count();
                if count > 0 {
                    self.focus = (self.focus + 1) % count;
                }
            }
            Action::FocusPrev => {
                let count = self.column_count();
                if count > 0 {
                    self.focus = self.focus.checked_sub(1).unwrap_or(count - 1);
                }
            }
            Action::Step(steps) => {
                let focus = self.focus;
                self.picker.with_column(focus, |column| column.step(steps));
            }
            Action::Wheel { column, notches } => self.wheel(column, notches, now),
            Action::DragStart { column, slot, row } => {
                self.focus = column;
                self.drag = Some(DragState {
                    column,
                    slot,
                    last_row: row,
                    moved: false,
                });
                self.picker.with_column(column, |c| c.begin_drag());
            }
            Action::DragMove { row } => self.drag_move(row),
            Action::DragEnd => self.drag_end(),
            Action::Save => self.save(),
            Action::Reset => {
                self.picker.cancel_all();
                self.picker.reset(&self.config);
                self.status = Some("Reset".to_string());
            }
        }
    }

    fn wheel(&mut self, column: usize, notches: i32, now: Instant) {
        let update = self.wheel.accumulate(column, notches, now);
        if let Some(previous) = update.release {
            self.picker.with_column(previous, |c| c.release());
        }
        self.focus = column;
        self.picker.with_column(column, |c| {
            if update.begin {
                c.begin_drag();
            }
            c.drag_by(update.delta);
        });
    }

    fn drag_move(&mut self, row: u16) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let rows = f64::from(drag.last_row) - f64::from(row);
        if rows == 0.0 {
            return;
        }
        drag.last_row = row;
        drag.moved = true;
        let column = drag.column;
        self.picker.with_column(column, |c| {
            let delta = rows * c.item_height();
            c.drag_by(delta);
        });
    }

    fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.picker.with_column(drag.column, |c| {
            c.release();
            if !drag.moved {
                c.tap_slot(drag.slot);
            }
        });
    }

    /// Advance animations and end idle wheel gestures.
    pub fn tick(&mut self, elapsed: Duration, now: Instant) -> bool {
        if let Some(column) = self.wheel.poll(now) {
            self.picker.with_column(column, |c| c.release());
        }
        self.picker.tick_all(elapsed).moved
    }

    /// Apply deferred wrap corrections. Call right after a frame is drawn.
    pub fn after_render(&mut self) -> bool {
        self.picker.flush_all()
    }
}

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use closure::closure;
use parking_lot::RwLock;
use tessera_pickers::{
    CallbackWith,
    view::{MeridiemMode, OpenView},
};

/// Picker state owned by the host, shared with the header callbacks.
pub struct PickerState {
    pub date: NaiveDateTime,
    pub open_view: OpenView,
    pub meridiem_mode: MeridiemMode,
}

impl PickerState {
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            date,
            open_view: OpenView::Date,
            meridiem_mode: MeridiemMode::from_hour(date.hour()),
        }
    }

    pub fn open(&mut self, view: OpenView) {
        tracing::info!(from = %self.open_view, to = %view, "switching picker view");
        self.open_view = view;
    }

    /// Moves the date into the other half of the day when the mode changes.
    pub fn set_meridiem(&mut self, mode: MeridiemMode) {
        if mode == self.meridiem_mode {
            return;
        }
        let shift = match mode {
            MeridiemMode::Am => TimeDelta::hours(-12),
            MeridiemMode::Pm => TimeDelta::hours(12),
        };
        self.date += shift;
        self.meridiem_mode = mode;
        tracing::info!(%mode, date = %self.date, "switched meridiem");
    }
}

pub struct AppState {
    pub picker: Arc<RwLock<PickerState>>,
}

impl AppState {
    pub fn new(date: NaiveDateTime) -> Self {
        Self {
            picker: Arc::new(RwLock::new(PickerState::new(date))),
        }
    }

    pub fn on_open_view_change(&self) -> CallbackWith<OpenView> {
        CallbackWith::new(closure!(clone self.picker, |view: OpenView| {
            picker.write().open(view);
        }))
    }

    pub fn on_meridiem_change(&self) -> CallbackWith<MeridiemMode> {
        CallbackWith::new(closure!(clone self.picker, |mode: MeridiemMode| {
            picker.write().set_meridiem(mode);
        }))
    }
}

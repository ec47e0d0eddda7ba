//! Picker headers for the Tessera UI framework.
//!
//! The components in this crate are pure functions from picker props to a
//! [`toolbar::Toolbar`] tree. The host owns the picker state (which view is
//! open, whether AM or PM is active) and reacts to the intents emitted through
//! the callbacks stored on each [`toolbar::ToolbarButton`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tessera_pickers::{
//!     datetime_header::{DateTimePickerHeaderArgsBuilder, date_time_picker_header},
//!     formatter::ChronoFormatter,
//!     theme::PickerTheme,
//!     view::{MeridiemMode, OpenView},
//! };
//!
//! let date = NaiveDate::from_ymd_opt(2020, 3, 14)
//!     .and_then(|d| d.and_hms_opt(9, 30, 0))
//!     .unwrap();
//! let args = DateTimePickerHeaderArgsBuilder::default()
//!     .date(date)
//!     .open_view(OpenView::Hour)
//!     .meridiem_mode(MeridiemMode::Am)
//!     .on_open_view_change(|view: OpenView| println!("open {view}"))
//!     .on_meridiem_change(|mode: MeridiemMode| println!("switch to {mode}"))
//!     .build()
//!     .unwrap();
//!
//! let formatter = ChronoFormatter::default();
//! let toolbar = date_time_picker_header(&args, &formatter, &PickerTheme::default());
//! assert_eq!(toolbar.selected_fields(), vec![OpenView::Hour]);
//! ```

pub mod accessibility;
pub mod alignment;
pub mod datetime_header;
pub mod dp;
pub mod error;
pub mod formatter;
pub mod preview;
pub mod prop;
pub mod theme;
pub mod toolbar;
pub mod view;

pub use dp::Dp;
pub use error::HeaderError;
pub use prop::{Callback, CallbackWith};

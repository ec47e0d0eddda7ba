//! View and meridiem enumerations shared by the picker components.
//!
//! Both types round-trip through the short string names hosts use to persist
//! picker state (`"hours"`, `"pm"`, ...).

use std::{fmt, str::FromStr};

use crate::error::HeaderError;

/// The picker sub-view that is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenView {
    /// Year list.
    Year,
    /// Calendar.
    Date,
    /// Hour clock.
    Hour,
    /// Minute clock.
    Minutes,
    /// Second clock.
    Seconds,
}

impl OpenView {
    /// All views in header order.
    pub const ALL: [OpenView; 5] = [
        OpenView::Year,
        OpenView::Date,
        OpenView::Hour,
        OpenView::Minutes,
        OpenView::Seconds,
    ];

    /// Returns the string name of the view.
    pub fn as_str(self) -> &'static str {
        match self {
            OpenView::Year => "year",
            OpenView::Date => "date",
            OpenView::Hour => "hours",
            OpenView::Minutes => "minutes",
            OpenView::Seconds => "seconds",
        }
    }

    /// Returns true for the views that belong to the clock part of the picker.
    pub fn is_time_view(self) -> bool {
        matches!(self, OpenView::Hour | OpenView::Minutes | OpenView::Seconds)
    }
}

impl fmt::Display for OpenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenView {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpenView::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| HeaderError::UnknownOpenView(s.to_owned()))
    }
}

/// Indicates whether the selected time is before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeridiemMode {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl MeridiemMode {
    /// Returns the mode a 24-hour clock value falls into.
    pub fn from_hour(hour: u32) -> Self {
        if hour % 24 >= 12 {
            MeridiemMode::Pm
        } else {
            MeridiemMode::Am
        }
    }

    /// Returns the string name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MeridiemMode::Am => "am",
            MeridiemMode::Pm => "pm",
        }
    }
}

impl fmt::Display for MeridiemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeridiemMode {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "am" => Ok(MeridiemMode::Am),
            "pm" => Ok(MeridiemMode::Pm),
            other => Err(HeaderError::UnknownMeridiemMode(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_view_parses_host_names() {
        assert_eq!("hours".parse::<OpenView>(), Ok(OpenView::Hour));
        assert_eq!("seconds".parse::<OpenView>(), Ok(OpenView::Seconds));
        assert_eq!(OpenView::Minutes.to_string(), "minutes");
        assert!(OpenView::Seconds.is_time_view());
        assert!(!OpenView::Date.is_time_view());
        assert_eq!(
            "hour".parse::<OpenView>(),
            Err(HeaderError::UnknownOpenView("hour".to_owned()))
        );
    }

    #[test]
    fn meridiem_mode_parses_and_follows_the_clock() {
        assert_eq!("pm".parse::<MeridiemMode>(), Ok(MeridiemMode::Pm));
        assert!("PM".parse::<MeridiemMode>().is_err());
        assert_eq!(MeridiemMode::from_hour(0), MeridiemMode::Am);
        assert_eq!(MeridiemMode::from_hour(11), MeridiemMode::Am);
        assert_eq!(MeridiemMode::from_hour(12), MeridiemMode::Pm);
        assert_eq!(MeridiemMode::from_hour(23), MeridiemMode::Pm);
    }
}

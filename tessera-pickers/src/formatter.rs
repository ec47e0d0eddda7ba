//! Text formatting collaborators for the picker headers.
//!
//! ## Usage
//!
//! Implement [`HeaderFormatter`] to plug a locale-aware date library into the
//! headers, or use [`ChronoFormatter`] for `chrono` date-times.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use derive_builder::Builder;

use crate::{error::HeaderError, view::MeridiemMode};

/// Produces the display strings shown in a date/time picker header.
pub trait HeaderFormatter {
    /// The host's date value.
    type Date;

    /// Year label, e.g. `2020`.
    fn year_text(&self, date: &Self::Date) -> String;

    /// Full date label shown under the year, e.g. `Mar 14`.
    fn date_text(&self, date: &Self::Date) -> String;

    /// Hour label; `am_pm` selects the 12-hour clock.
    fn hour_text(&self, date: &Self::Date, am_pm: bool) -> String;

    /// Minute label.
    fn minute_text(&self, date: &Self::Date) -> String;

    /// Second label.
    fn second_text(&self, date: &Self::Date) -> String;

    /// Label for a meridiem mode.
    fn meridiem_text(&self, mode: MeridiemMode) -> String;
}

/// strftime patterns and labels used by [`ChronoFormatter`].
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(pattern = "owned")]
pub struct ChronoFormatterArgs {
    /// Pattern for the year label.
    #[builder(default = "\"%Y\".to_string()", setter(into))]
    pub year_format: String,
    /// Pattern for the header date label.
    #[builder(default = "\"%b %-d\".to_string()", setter(into))]
    pub date_format: String,
    /// Pattern for the hour label on a 12-hour clock.
    #[builder(default = "\"%I\".to_string()", setter(into))]
    pub hour_12_format: String,
    /// Pattern for the hour label on a 24-hour clock.
    #[builder(default = "\"%H\".to_string()", setter(into))]
    pub hour_24_format: String,
    /// Pattern for the minute label.
    #[builder(default = "\"%M\".to_string()", setter(into))]
    pub minute_format: String,
    /// Pattern for the second label.
    #[builder(default = "\"%S\".to_string()", setter(into))]
    pub second_format: String,
    /// Label for [`MeridiemMode::Am`].
    #[builder(default = "\"AM\".to_string()", setter(into))]
    pub am_label: String,
    /// Label for [`MeridiemMode::Pm`].
    #[builder(default = "\"PM\".to_string()", setter(into))]
    pub pm_label: String,
}

impl Default for ChronoFormatterArgs {
    fn default() -> Self {
        ChronoFormatterArgsBuilder::default()
            .build()
            .expect("builder construction failed")
    }
}

/// [`HeaderFormatter`] for [`NaiveDateTime`] values.
///
/// Zoned values can be formatted through `DateTime::naive_local`.
///
/// ```
/// use chrono::NaiveDate;
/// use tessera_pickers::formatter::{ChronoFormatter, HeaderFormatter};
///
/// let date = NaiveDate::from_ymd_opt(2020, 3, 14)
///     .and_then(|d| d.and_hms_opt(21, 5, 9))
///     .unwrap();
/// let formatter = ChronoFormatter::default();
/// assert_eq!(formatter.date_text(&date), "Mar 14");
/// assert_eq!(formatter.hour_text(&date, true), "09");
/// assert_eq!(formatter.hour_text(&date, false), "21");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChronoFormatter {
    args: ChronoFormatterArgs,
}

impl ChronoFormatter {
    /// Creates a formatter, rejecting patterns chrono cannot render for a
    /// naive date-time.
    pub fn new(args: ChronoFormatterArgs) -> Result<Self, HeaderError> {
        let probe = probe_date_time();
        for pattern in [
            &args.year_format,
            &args.date_format,
            &args.hour_12_format,
            &args.hour_24_format,
            &args.minute_format,
            &args.second_format,
        ] {
            let mut rendered = String::new();
            if write!(rendered, "{}", probe.format(pattern)).is_err() {
                tracing::warn!(pattern = %pattern, "rejecting unrenderable format pattern");
                return Err(HeaderError::InvalidFormat {
                    pattern: pattern.clone(),
                });
            }
        }
        Ok(Self { args })
    }

    /// Returns the patterns in use.
    pub fn args(&self) -> &ChronoFormatterArgs {
        &self.args
    }

    fn render(&self, date: &NaiveDateTime, pattern: &str) -> String {
        date.format(pattern).to_string()
    }
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        Self {
            args: ChronoFormatterArgs::default(),
        }
    }
}

impl HeaderFormatter for ChronoFormatter {
    type Date = NaiveDateTime;

    fn year_text(&self, date: &NaiveDateTime) -> String {
        self.render(date, &self.args.year_format)
    }

    fn date_text(&self, date: &NaiveDateTime) -> String {
        self.render(date, &self.args.date_format)
    }

    fn hour_text(&self, date: &NaiveDateTime, am_pm: bool) -> String {
        let pattern = if am_pm {
            &self.args.hour_12_format
        } else {
            &self.args.hour_24_format
        };
        self.render(date, pattern)
    }

    fn minute_text(&self, date: &NaiveDateTime) -> String {
        self.render(date, &self.args.minute_format)
    }

    fn second_text(&self, date: &NaiveDateTime) -> String {
        self.render(date, &self.args.second_format)
    }

    fn meridiem_text(&self, mode: MeridiemMode) -> String {
        match mode {
            MeridiemMode::Am => self.args.am_label.clone(),
            MeridiemMode::Pm => self.args.pm_label.clone(),
        }
    }
}

fn probe_date_time() -> NaiveDateTime {
    NaiveDateTime::default()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, 14)
            .and_then(|d| d.and_hms_opt(0, 7, 42))
            .unwrap()
    }

    #[test]
    fn default_patterns_render_every_field() {
        let formatter = ChronoFormatter::default();
        let date = sample();
        assert_eq!(formatter.year_text(&date), "2020");
        assert_eq!(formatter.date_text(&date), "Mar 14");
        assert_eq!(formatter.hour_text(&date, true), "12");
        assert_eq!(formatter.hour_text(&date, false), "00");
        assert_eq!(formatter.minute_text(&date), "07");
        assert_eq!(formatter.second_text(&date), "42");
        assert_eq!(formatter.meridiem_text(MeridiemMode::Am), "AM");
        assert_eq!(formatter.meridiem_text(MeridiemMode::Pm), "PM");
    }

    #[test]
    fn custom_patterns_and_labels_are_used() {
        let args = ChronoFormatterArgsBuilder::default()
            .date_format("%a, %d %B")
            .am_label("a.m.")
            .build()
            .unwrap();
        let formatter = ChronoFormatter::new(args).unwrap();
        assert_eq!(formatter.date_text(&sample()), "Sat, 14 March");
        assert_eq!(formatter.meridiem_text(MeridiemMode::Am), "a.m.");
        assert_eq!(formatter.args().year_format, "%Y");
    }

    #[test]
    fn patterns_needing_an_offset_are_rejected() {
        let args = ChronoFormatterArgsBuilder::default()
            .hour_24_format("%H %z")
            .build()
            .unwrap();
        assert_eq!(
            ChronoFormatter::new(args),
            Err(HeaderError::InvalidFormat {
                pattern: "%H %z".to_string()
            })
        );
    }
}

//! Errors raised while assembling picker props.

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Failures surfaced by the picker header APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A required prop was never set on the args builder.
    #[error("missing required prop `{prop}`")]
    InvalidProps { prop: &'static str },
    /// A string did not name any open view.
    #[error("unknown open view `{0}`")]
    UnknownOpenView(String),
    /// A string did not name a meridiem mode.
    #[error("unknown meridiem mode `{0}`")]
    UnknownMeridiemMode(String),
    /// A formatter pattern cannot be rendered for a date-time value.
    #[error("format pattern `{pattern}` cannot be rendered")]
    InvalidFormat { pattern: String },
}

impl From<UninitializedFieldError> for HeaderError {
    fn from(error: UninitializedFieldError) -> Self {
        let prop = error.field_name();
        tracing::warn!(prop, "picker header args are missing a required prop");
        HeaderError::InvalidProps { prop }
    }
}

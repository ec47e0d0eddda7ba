//! Ambient theme values read by the picker headers.
//!
//! Hosts usually build one [`PickerTheme`] per window and pass it to every
//! picker; only the layout direction and the header type scale are consulted.

use crate::Dp;

/// Reading direction of the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Returns true for right-to-left layouts.
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }
}

/// Text roles used by toolbar labels, from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextVariant {
    /// Secondary header text such as the year.
    Subheading,
    /// Medium display text.
    Display1,
    /// Large display text.
    Display2,
}

/// A simple text style used by components to derive font size and line
/// height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in density-independent pixels (dp).
    pub font_size: Dp,
    /// Optional line height override in density-independent pixels (dp).
    pub line_height: Option<Dp>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Dp(16.0),
            line_height: Some(Dp(24.0)),
        }
    }
}

/// Type scale for picker headers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderTypography {
    /// Secondary header text.
    pub subheading: TextStyle,
    /// Medium display text.
    pub display1: TextStyle,
    /// Large display text.
    pub display2: TextStyle,
    /// AM/PM labels next to the clock.
    pub meridiem: TextStyle,
}

impl HeaderTypography {
    /// Resolves the style for a text variant.
    pub fn style(&self, variant: TextVariant) -> TextStyle {
        match variant {
            TextVariant::Subheading => self.subheading,
            TextVariant::Display1 => self.display1,
            TextVariant::Display2 => self.display2,
        }
    }
}

impl Default for HeaderTypography {
    fn default() -> Self {
        Self {
            subheading: TextStyle {
                font_size: Dp(16.0),
                line_height: Some(Dp(24.0)),
            },
            display1: TextStyle {
                font_size: Dp(34.0),
                line_height: Some(Dp(40.0)),
            },
            display2: TextStyle {
                font_size: Dp(45.0),
                line_height: Some(Dp(48.0)),
            },
            meridiem: TextStyle {
                font_size: Dp(18.0),
                line_height: None,
            },
        }
    }
}

/// Theme container consulted by the picker headers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PickerTheme {
    /// Reading direction of the host UI.
    pub direction: LayoutDirection,
    /// Type scale for header labels.
    pub typography: HeaderTypography,
}

impl PickerTheme {
    /// Creates a theme with the given direction and the default type scale.
    pub fn with_direction(direction: LayoutDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }
}

//! # Density-Independent Pixels (Dp)
//!
//! Lengths used by the picker style tables. Values are kept in dp and left to
//! the renderer to scale.

use std::fmt;

/// Density-independent pixels (dp) for UI scaling.
///
/// ```
/// use tessera_pickers::Dp;
///
/// const HEADER_HEIGHT: Dp = Dp::new(65.0);
/// assert_eq!(HEADER_HEIGHT, Dp(65.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// Per-edge lengths, in CSS order (top, right, bottom, left).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    /// Top edge.
    pub top: Dp,
    /// Right edge.
    pub right: Dp,
    /// Bottom edge.
    pub bottom: Dp,
    /// Left edge.
    pub left: Dp,
}

impl EdgeInsets {
    /// No inset on any edge.
    pub const ZERO: EdgeInsets = EdgeInsets::new(Dp::ZERO, Dp::ZERO, Dp::ZERO, Dp::ZERO);

    /// Creates insets from explicit edges.
    pub const fn new(top: Dp, right: Dp, bottom: Dp, left: Dp) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Insets only the left and right edges.
    pub const fn horizontal(left: Dp, right: Dp) -> Self {
        Self::new(Dp::ZERO, right, Dp::ZERO, left)
    }
}

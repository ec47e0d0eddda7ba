//! Defines alignment and flow options for toolbar containers.

/// Specifies how children are placed along the main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAxisAlignment {
    /// Place children at the start (left or top).
    #[default]
    Start,
    /// Center children along the main axis.
    Center,
    /// Place children at the end (right or bottom).
    End,
    /// Evenly distribute children, with no space at the start and end.
    SpaceBetween,
    /// Evenly distribute children, with half-space at the start and end.
    SpaceAround,
}

/// Specifies how children are aligned along the cross axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlignment {
    /// Align children to the start (left or top).
    #[default]
    Start,
    /// Center children along the cross axis.
    Center,
    /// Align children to the end (right or bottom).
    End,
    /// Stretch children to fill the entire cross axis.
    Stretch,
}

/// Direction in which a container flows its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Left to right.
    #[default]
    Row,
    /// Right to left; the first child is placed last.
    RowReverse,
    /// Top to bottom.
    Column,
    /// Bottom to top; the first child is placed last.
    ColumnReverse,
}

impl FlexDirection {
    /// Returns true for the horizontal directions.
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// Returns true when children are placed in reverse declaration order.
    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            FlexDirection::RowReverse | FlexDirection::ColumnReverse
        )
    }
}

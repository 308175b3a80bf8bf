//! Cell positions: grid coordinates, spans, alignment, margins.

use std::fmt;

use gridkit_common::{Insets, Size};

/// How an element is aligned inside its cell box on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Fill the cell box (minus leading/trailing margin).
    #[default]
    Stretched,
    /// Keep the element's own size, at the leading edge.
    Start,
    /// Keep the element's own size, centered. Margins are ignored.
    Center,
    /// Keep the element's own size, at the trailing edge.
    End,
}

/// One axis of the grid.
///
/// Horizontal tracks are columns (widths), vertical tracks are rows
/// (heights).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "column"),
            Axis::Vertical => write!(f, "row"),
        }
    }
}

/// Axis selector for [`Position::align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    Horizontal,
    Vertical,
    Both,
}

impl Axes {
    pub fn covers(&self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Axes::Both, _) | (Axes::Horizontal, Axis::Horizontal) | (Axes::Vertical, Axis::Vertical)
        )
    }
}

/// Whether a hidden element's measured size is excluded from auto-size
/// calculation, independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collapse {
    /// A hidden element still contributes its measured size.
    #[default]
    None,
    /// Exclude the width of hidden elements from auto column sizing.
    Width,
    /// Exclude the height of hidden elements from auto row sizing.
    Height,
    /// Exclude both dimensions.
    Both,
}

impl Collapse {
    pub fn covers(&self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Collapse::Both, _)
                | (Collapse::Width, Axis::Horizontal)
                | (Collapse::Height, Axis::Vertical)
        )
    }
}

/// Stack-shorthand metadata; consumed by [`crate::LayoutSpec::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackAxis {
    #[default]
    None,
    /// Each appended cell creates a new column in row 0.
    Horizontal,
    /// Each appended cell creates a new row in column 0.
    Vertical,
}

/// A cell's grid coordinates, span, alignment, margin, and flags.
///
/// Positions are value-like: every builder method consumes the position and
/// returns a new one, so a position handed to a cell is never mutated in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct Position<T = ()> {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
    pub horizontal: Alignment,
    pub vertical: Alignment,
    pub margin: Insets,
    pub collapse: Collapse,
    /// Replaces the element's measured size during resolution.
    pub fixed_size: Option<Size>,
    /// Keep the element's current size; only its position is written.
    pub no_resize: bool,
    /// Keep the element's current frame entirely (superset of `no_resize`).
    pub no_position: bool,
    /// Arbitrary caller data, carried through for identification/debugging.
    pub tag: Option<T>,
    pub(crate) stack: StackAxis,
    pub(crate) stack_size: Size,
}

impl<T> Position<T> {
    /// A single-span position at `(row, column)` with default alignment.
    pub fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
            horizontal: Alignment::default(),
            vertical: Alignment::default(),
            margin: Insets::zero(),
            collapse: Collapse::None,
            fixed_size: None,
            no_resize: false,
            no_position: false,
            tag: None,
            stack: StackAxis::None,
            stack_size: Size::new(-1.0, -1.0),
        }
    }

    pub(crate) fn stacked(stack: StackAxis, stack_size: Size) -> Self {
        // Row/column are reassigned when the cell is appended to a spec.
        let mut position = Self::at(0, 0);
        position.stack = stack;
        position.stack_size = stack_size;
        position
    }

    pub fn span(mut self, row_span: usize, column_span: usize) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    pub fn col_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    pub fn horizontally(mut self, alignment: Alignment) -> Self {
        self.horizontal = alignment;
        self
    }

    pub fn vertically(mut self, alignment: Alignment) -> Self {
        self.vertical = alignment;
        self
    }

    /// Set the alignment on one or both axes.
    pub fn align(mut self, axes: Axes, alignment: Alignment) -> Self {
        if axes.covers(Axis::Horizontal) {
            self.horizontal = alignment;
        }
        if axes.covers(Axis::Vertical) {
            self.vertical = alignment;
        }
        self
    }

    /// Margin is included in auto-size calculation for auto tracks.
    pub fn margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn margin_all(self, value: f32) -> Self {
        self.margin(Insets::all(value))
    }

    pub fn margin_top(mut self, top: f32) -> Self {
        self.margin = self.margin.with_top(top);
        self
    }

    pub fn margin_left(mut self, left: f32) -> Self {
        self.margin = self.margin.with_left(left);
        self
    }

    pub fn margin_bottom(mut self, bottom: f32) -> Self {
        self.margin = self.margin.with_bottom(bottom);
        self
    }

    pub fn margin_right(mut self, right: f32) -> Self {
        self.margin = self.margin.with_right(right);
        self
    }

    /// Skip a hidden element's measured size when auto-sizing the covered
    /// axes. The element is also left untouched by write-back while hidden.
    pub fn collapse_hidden(mut self, collapse: Collapse) -> Self {
        self.collapse = collapse;
        self
    }

    /// Use `size` instead of the element's measured size.
    pub fn fixed_size(mut self, size: Size) -> Self {
        self.fixed_size = Some(size);
        self
    }

    /// The element keeps its current size; layout only repositions it.
    pub fn no_resize(mut self) -> Self {
        self.no_resize = true;
        self
    }

    /// The element keeps its current frame; layout neither positions nor
    /// sizes it. Useful when the element is placed by other means.
    pub fn no_position(mut self) -> Self {
        self.no_position = true;
        self
    }

    /// Attach caller data to the position.
    pub fn tag(mut self, tag: T) -> Self {
        self.tag = Some(tag);
        self
    }

    pub(crate) fn track(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.column,
            Axis::Vertical => self.row,
        }
    }

    pub(crate) fn span_on(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.column_span,
            Axis::Vertical => self.row_span,
        }
    }

    pub(crate) fn alignment(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub(crate) fn margin_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.margin.horizontal(),
            Axis::Vertical => self.margin.vertical(),
        }
    }

    pub(crate) fn covers_track(&self, axis: Axis, track: usize) -> bool {
        let start = self.track(axis);
        track >= start && track < start + self.span_on(axis)
    }
}

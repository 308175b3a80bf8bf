//! Cells: one element bound to one position.

use gridkit_common::{Insets, Size};
use gridkit_host::ElementId;

use crate::position::{Alignment, Axes, Collapse, Position, StackAxis};

/// One element (or an empty placeholder) bound to a grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<T = ()> {
    /// The element to lay out. `None` is a valid placeholder: the cell
    /// occupies its tracks but is skipped by every resolution phase.
    pub element: Option<ElementId>,
    pub position: Position<T>,
    /// Element size recorded on its first layout pass; the fallback when
    /// the element currently measures zero in both dimensions.
    pub(crate) initial_size: Option<Size>,
}

impl<T> Cell<T> {
    pub fn new(element: ElementId, position: Position<T>) -> Self {
        Self {
            element: Some(element),
            position,
            initial_size: None,
        }
    }

    /// A placeholder cell occupying `position` without an element.
    pub fn empty(position: Position<T>) -> Self {
        Self {
            element: None,
            position,
            initial_size: None,
        }
    }

    /// Shorthand for a single-span cell at `(row, column)`.
    pub fn at(element: ElementId, row: usize, column: usize) -> Self {
        Self::new(element, Position::at(row, column))
    }

    /// Stack shorthand: appending this cell to a spec creates a new
    /// auto-sized column after the last one (and a single auto row if none
    /// exists yet) and places the element there.
    pub fn stack_column(element: ElementId) -> Self {
        Self::stack_column_sized(element, -1.0, -1.0)
    }

    /// Like [`Cell::stack_column`], with explicit track sizes. Negative
    /// values mean auto; the width sizes the new column, the height sizes
    /// the shared row when this cell is the one that creates it.
    pub fn stack_column_sized(element: ElementId, width: f32, height: f32) -> Self {
        Self::new(
            element,
            Position::stacked(StackAxis::Horizontal, Size::new(width, height)),
        )
    }

    /// Stack shorthand: appending this cell to a spec creates a new
    /// auto-sized row after the last one (and a single auto column if none
    /// exists yet) and places the element there.
    pub fn stack_row(element: ElementId) -> Self {
        Self::stack_row_sized(element, -1.0, -1.0)
    }

    /// Like [`Cell::stack_row`], with explicit track sizes.
    pub fn stack_row_sized(element: ElementId, width: f32, height: f32) -> Self {
        Self::new(
            element,
            Position::stacked(StackAxis::Vertical, Size::new(width, height)),
        )
    }

    /// Replace the position, keeping element and recorded size.
    pub fn with_position(mut self, position: Position<T>) -> Self {
        self.position = position;
        self
    }

    // Builder passthroughs, so stack cells (whose coordinates are assigned
    // on append) can still be configured fluently.

    pub fn span(mut self, row_span: usize, column_span: usize) -> Self {
        self.position = self.position.span(row_span, column_span);
        self
    }

    pub fn horizontally(mut self, alignment: Alignment) -> Self {
        self.position = self.position.horizontally(alignment);
        self
    }

    pub fn vertically(mut self, alignment: Alignment) -> Self {
        self.position = self.position.vertically(alignment);
        self
    }

    pub fn align(mut self, axes: Axes, alignment: Alignment) -> Self {
        self.position = self.position.align(axes, alignment);
        self
    }

    pub fn margin(mut self, margin: Insets) -> Self {
        self.position = self.position.margin(margin);
        self
    }

    pub fn margin_all(mut self, value: f32) -> Self {
        self.position = self.position.margin_all(value);
        self
    }

    pub fn collapse_hidden(mut self, collapse: Collapse) -> Self {
        self.position = self.position.collapse_hidden(collapse);
        self
    }

    pub fn fixed_size(mut self, size: Size) -> Self {
        self.position = self.position.fixed_size(size);
        self
    }

    pub fn no_resize(mut self) -> Self {
        self.position = self.position.no_resize();
        self
    }

    pub fn no_position(mut self) -> Self {
        self.position = self.position.no_position();
        self
    }

    pub fn tag(mut self, tag: T) -> Self {
        self.position = self.position.tag(tag);
        self
    }
}

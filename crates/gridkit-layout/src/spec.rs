//! Layout specifications: cells, track definitions, padding, spacing,
//! and the optional activation trigger.

use std::fmt;

use gridkit_common::{Insets, Size};
use gridkit_host::ElementId;

use crate::cell::Cell;
use crate::definition::Definition;
use crate::position::{Alignment, Position, StackAxis};
use crate::ContainerState;

/// Predicate deciding whether a candidate spec is active for the
/// container's current state.
pub type Trigger = Box<dyn Fn(&ContainerState) -> bool>;

/// An ordered collection of cells plus row/column definitions, padding,
/// spacing, and an optional activation trigger.
///
/// Built fluently; every method returns the spec for chaining:
///
/// ```
/// use gridkit_layout::{Cell, LayoutSpec, Position};
/// use gridkit_host::ElementId;
///
/// let element = ElementId::from_raw(1);
/// let spec: LayoutSpec = LayoutSpec::new()
///     .with_columns([-1.0, 0.5, 0.5])
///     .with_rows([44.0])
///     .with_spacing(8.0)
///     .add(Cell::new(element, Position::at(0, 0)));
/// ```
pub struct LayoutSpec<T = ()> {
    pub(crate) cells: Vec<Cell<T>>,
    pub(crate) columns: Vec<Definition>,
    pub(crate) rows: Vec<Definition>,
    pub(crate) padding: Insets,
    pub(crate) spacing: f32,
    pub(crate) trigger: Option<Trigger>,
}

impl<T> LayoutSpec<T> {
    /// A single-cell layout aligning `element` within an area of the given
    /// size. Useful when the element is not nested in a larger grid. The
    /// area must be larger than one pixel per axis (the track encoding
    /// reserves smaller values for percentages).
    pub fn alignment(
        element: ElementId,
        area: Size,
        horizontal: Alignment,
        vertical: Alignment,
    ) -> Self {
        Self::new()
            .with_columns([area.width])
            .with_rows([area.height])
            .add(Cell::new(
                element,
                Position::at(0, 0)
                    .horizontally(horizontal)
                    .vertically(vertical),
            ))
    }

    /// An [`alignment`](Self::alignment) layout centering the element on
    /// both axes.
    pub fn centered(element: ElementId, area: Size) -> Self {
        Self::alignment(element, area, Alignment::Center, Alignment::Center)
    }

    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
            padding: Insets::zero(),
            spacing: 0.0,
            trigger: None,
        }
    }

    /// Replace the column definitions with raw sizes (see [`Definition`]
    /// for the encoding).
    pub fn with_columns(mut self, sizes: impl IntoIterator<Item = f32>) -> Self {
        self.columns = sizes.into_iter().map(Definition::new).collect();
        self
    }

    /// Replace the row definitions with raw sizes.
    pub fn with_rows(mut self, sizes: impl IntoIterator<Item = f32>) -> Self {
        self.rows = sizes.into_iter().map(Definition::new).collect();
        self
    }

    /// Offset of all cells from the container's outer frame.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Offset between tracks. There is no spacing before the first or
    /// after the last track: only between.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Activation predicate; specs without one act as the default layout.
    pub fn with_trigger(mut self, trigger: impl Fn(&ContainerState) -> bool + 'static) -> Self {
        self.trigger = Some(Box::new(trigger));
        self
    }

    /// Append a cell.
    ///
    /// Cells carrying stack metadata (see [`Cell::stack_row`] /
    /// [`Cell::stack_column`]) grow the track lists as they are appended,
    /// so a plain row- or column-stack needs no index bookkeeping.
    pub fn add(mut self, mut cell: Cell<T>) -> Self {
        match cell.position.stack {
            StackAxis::Horizontal => {
                if self.rows.is_empty() {
                    self.rows.push(Definition::new(cell.position.stack_size.height));
                }
                self.columns.push(Definition::new(cell.position.stack_size.width));
                cell.position.row = 0;
                cell.position.column = self.columns.len() - 1;
            }
            StackAxis::Vertical => {
                if self.columns.is_empty() {
                    self.columns.push(Definition::new(cell.position.stack_size.width));
                }
                self.rows.push(Definition::new(cell.position.stack_size.height));
                cell.position.row = self.rows.len() - 1;
                cell.position.column = 0;
            }
            StackAxis::None => {}
        }
        self.cells.push(cell);
        self
    }

    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    pub fn columns(&self) -> &[Definition] {
        &self.columns
    }

    pub fn rows(&self) -> &[Definition] {
        &self.rows
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The position of the cell holding `element`, if any.
    pub fn position_of(&self, element: ElementId) -> Option<&Position<T>> {
        self.cells
            .iter()
            .find(|cell| cell.element == Some(element))
            .map(|cell| &cell.position)
    }

    pub(crate) fn has_trigger(&self) -> bool {
        self.trigger.is_some()
    }

    pub(crate) fn trigger_matches(&self, state: &ContainerState) -> bool {
        match &self.trigger {
            Some(trigger) => trigger(state),
            None => false,
        }
    }

    pub(crate) fn element_ids(&self) -> Vec<ElementId> {
        self.cells.iter().filter_map(|cell| cell.element).collect()
    }
}

impl<T> Default for LayoutSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LayoutSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutSpec")
            .field("cells", &self.cells)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("padding", &self.padding)
            .field("spacing", &self.spacing)
            .field("trigger", &self.trigger.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn element(raw: u64) -> ElementId {
        ElementId::from_raw(raw)
    }

    #[test]
    fn test_with_columns_rows() {
        let spec: LayoutSpec = LayoutSpec::new()
            .with_columns([-1.0, 0.25, 100.0])
            .with_rows([44.0]);

        assert_eq!(spec.columns().len(), 3);
        assert!(spec.columns()[0].is_auto());
        assert_eq!(spec.rows().len(), 1);
        assert_eq!(spec.rows()[0].size(), 44.0);
    }

    #[test]
    fn test_vertical_stack_grows_rows() {
        let spec: LayoutSpec = LayoutSpec::new()
            .add(Cell::stack_row(element(1)))
            .add(Cell::stack_row_sized(element(2), -1.0, 60.0))
            .add(Cell::stack_row(element(3)));

        // One shared auto column, one row per appended cell.
        assert_eq!(spec.columns().len(), 1);
        assert!(spec.columns()[0].is_auto());
        assert_eq!(spec.rows().len(), 3);
        assert!(spec.rows()[0].is_auto());
        assert_eq!(spec.rows()[1].size(), 60.0);

        let positions: Vec<(usize, usize)> = spec
            .cells()
            .iter()
            .map(|cell| (cell.position.row, cell.position.column))
            .collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_horizontal_stack_grows_columns() {
        let spec: LayoutSpec = LayoutSpec::new()
            .add(Cell::stack_column_sized(element(1), 80.0, -1.0))
            .add(Cell::stack_column(element(2)));

        assert_eq!(spec.rows().len(), 1);
        assert_eq!(spec.columns().len(), 2);
        assert_eq!(spec.columns()[0].size(), 80.0);
        assert!(spec.columns()[1].is_auto());

        let positions: Vec<(usize, usize)> = spec
            .cells()
            .iter()
            .map(|cell| (cell.position.row, cell.position.column))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_stack_does_not_touch_explicit_cells() {
        let spec: LayoutSpec = LayoutSpec::new()
            .with_columns([-1.0, -1.0])
            .with_rows([-1.0])
            .add(Cell::at(element(1), 0, 1));

        assert_eq!(spec.columns().len(), 2);
        assert_eq!(spec.cells()[0].position.column, 1);
    }

    #[test]
    fn test_position_of() {
        let spec: LayoutSpec<&str> = LayoutSpec::new()
            .with_columns([-1.0])
            .with_rows([-1.0])
            .add(Cell::new(
                element(9),
                Position::at(0, 0).tag("badge").fixed_size(Size::new(10.0, 10.0)),
            ));

        let position = spec.position_of(element(9)).unwrap();
        assert_eq!(position.tag, Some("badge"));
        assert!(spec.position_of(element(8)).is_none());
    }

    #[test]
    fn test_centered_layout_shape() {
        let spec: LayoutSpec = LayoutSpec::centered(element(4), Size::new(320.0, 240.0));

        assert_eq!(spec.columns()[0].size(), 320.0);
        assert_eq!(spec.rows()[0].size(), 240.0);
        let position = spec.position_of(element(4)).unwrap();
        assert_eq!(position.horizontal, Alignment::Center);
        assert_eq!(position.vertical, Alignment::Center);
    }

    #[test]
    fn test_trigger_matches() {
        let spec: LayoutSpec = LayoutSpec::new().with_trigger(|state| state.is_landscape());
        let landscape = ContainerState {
            size: Size::new(400.0, 300.0),
        };
        let portrait = ContainerState {
            size: Size::new(300.0, 400.0),
        };

        assert!(spec.trigger_matches(&landscape));
        assert!(!spec.trigger_matches(&portrait));
        assert!(!LayoutSpec::<()>::new().trigger_matches(&landscape));
    }
}

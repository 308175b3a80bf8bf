//! # GridKit Layout
//!
//! Constraint-based grid layout engine. Elements are assigned to row/column
//! cells of a [`LayoutSpec`]; a layout pass resolves every track to an
//! absolute size, positions the tracks, aligns each element inside its cell
//! box, and writes the resulting frames back through the host.
//!
//! ## Overview
//!
//! - Mixed track sizing: fixed pixel, percentage-of-remaining, and
//!   auto-measured-from-content tracks
//! - Cells spanning multiple rows/columns, with growth rules that keep
//!   spanned tracks large enough for their content
//! - Per-cell alignment (stretch/start/center/end) and margins
//! - Padding around the grid and spacing between tracks
//! - A stack shorthand for single-row/column layouts
//! - Conditional selection between candidate layouts (responsive triggers)
//! - A bounded fixed-point driver for auto-sized containers
//!
//! A pass runs synchronously: selection, track sizing, track positioning,
//! per-cell alignment, write-back. Logging goes through `tracing`; install
//! a subscriber to see it, otherwise it is a no-op.
//!
//! ## Example
//!
//! ```
//! use gridkit_host::{ElementHost, HeadlessHost};
//! use gridkit_layout::{Cell, GridContainer, LayoutSpec, Position, Rect};
//!
//! let mut host = HeadlessHost::new();
//! let surface = host.create_element(Rect::new(0.0, 0.0, 300.0, 100.0));
//! let left = host.create_sized(50.0, 50.0);
//! let right = host.create_sized(50.0, 50.0);
//!
//! // Fixed 100px column, the rest for the second column.
//! let spec = LayoutSpec::new()
//!     .with_columns([100.0, 1.0])
//!     .with_rows([1.0])
//!     .add(Cell::new(left, Position::at(0, 0)))
//!     .add(Cell::new(right, Position::at(0, 1)));
//!
//! let mut container: GridContainer = GridContainer::new(surface);
//! container.add_layout(spec);
//! container.perform_layout(&mut host).unwrap();
//!
//! assert_eq!(host.frame(left).unwrap(), Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(host.frame(right).unwrap(), Rect::new(100.0, 0.0, 200.0, 100.0));
//! ```

use thiserror::Error;

mod align;
mod cell;
mod container;
mod definition;
mod placement;
mod position;
mod selector;
mod spec;
mod tracks;

pub use cell::Cell;
pub use container::{GridContainer, PassReport, DEFAULT_MAX_LAYOUT_PASSES};
pub use definition::{Definition, SizeClass};
pub use position::{Alignment, Axes, Axis, Collapse, Position};
pub use spec::{LayoutSpec, Trigger};

// Re-export the geometry and host boundary so embedders need only this crate.
pub use gridkit_common::{Insets, Point, Rect, Size};
pub use gridkit_host::{ElementHost, ElementId, HostError};

/// Errors that can occur during a layout pass.
///
/// Configuration errors are raised before any frame is written: a failing
/// pass applies no partial layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(
        "cell at ({row}, {column}) spans {row_span}x{column_span}, outside the {rows}x{columns} grid"
    )]
    CellOutOfBounds {
        row: usize,
        column: usize,
        row_span: usize,
        column_span: usize,
        rows: usize,
        columns: usize,
    },

    #[error("stretched cell on auto-sized {axis} {track} has no sibling with an intrinsic size")]
    StretchedAutoTrack { axis: Axis, track: usize },

    #[error("auto-sized axis: {axis} {track} is not covered by any cell")]
    UnsatisfiableAutoSize { axis: Axis, track: usize },

    #[error("element {0:?} is not placed in any layout")]
    ElementNotPlaced(ElementId),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Container state a layout trigger can inspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerState {
    /// The container's current outer size.
    pub size: Size,
}

impl ContainerState {
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }

    pub fn is_portrait(&self) -> bool {
        !self.is_landscape()
    }
}

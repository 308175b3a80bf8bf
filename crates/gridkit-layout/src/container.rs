//! Container orchestration: one layout pass runs selection, track
//! resolution, positioning, alignment, and write-back, in that order.

use gridkit_common::{Rect, Size};
use gridkit_host::{ElementHost, ElementId};
use tracing::{debug, trace};

use crate::align::{align_axis, AxisSlot};
use crate::cell::Cell;
use crate::placement::{span_extent, track_origins};
use crate::position::{Alignment, Axis, Collapse};
use crate::selector::select_active;
use crate::spec::LayoutSpec;
use crate::tracks::{resolve_axis, AxisCell};
use crate::{ContainerState, LayoutError};

/// Pass cap for [`GridContainer::perform_layout_until_stable`].
pub const DEFAULT_MAX_LAYOUT_PASSES: usize = 10;

/// Completion notification: the container's outer size before and after
/// a pass (or a stabilized run of passes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassReport {
    pub size_before: Size,
    pub size_after: Size,
}

impl PassReport {
    /// Whether the pass changed the container's outer size.
    pub fn resized(&self) -> bool {
        self.size_before != self.size_after
    }
}

/// Element frame and visibility captured at the start of a pass.
#[derive(Debug, Clone, Copy)]
struct CellSnapshot {
    frame: Rect,
    hidden: bool,
}

/// A container element with one or more candidate layouts.
///
/// The active layout is re-selected at the start of every pass, so it can
/// change as the container's own size changes. `auto_width`/`auto_height`
/// size the container from its content on that axis; they must not be
/// combined with percentage definitions on the same axis (the percentage
/// would resolve against a total derived from the other tracks).
#[derive(Debug)]
pub struct GridContainer<T = ()> {
    element: ElementId,
    layouts: Vec<LayoutSpec<T>>,
    pub auto_width: bool,
    pub auto_height: bool,
    active: Option<usize>,
}

impl<T> GridContainer<T> {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            layouts: Vec::new(),
            auto_width: false,
            auto_height: false,
            active: None,
        }
    }

    /// The host element this container lays out into.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Register a candidate layout. Specs without a trigger act as the
    /// default when no trigger matches.
    pub fn add_layout(&mut self, spec: LayoutSpec<T>) {
        self.layouts.push(spec);
    }

    /// Register a candidate layout gated by `trigger`.
    pub fn add_layout_with_trigger(
        &mut self,
        spec: LayoutSpec<T>,
        trigger: impl Fn(&ContainerState) -> bool + 'static,
    ) {
        self.layouts.push(spec.with_trigger(trigger));
    }

    /// The layout selected by the most recent pass.
    pub fn current_layout(&self) -> Option<&LayoutSpec<T>> {
        self.active.and_then(|index| self.layouts.get(index))
    }

    /// Run one layout pass.
    ///
    /// Selection, track resolution, and validation all happen before the
    /// first frame write: a failing pass applies no partial layout.
    pub fn perform_layout<H: ElementHost>(
        &mut self,
        host: &mut H,
    ) -> Result<PassReport, LayoutError> {
        let before = host.frame(self.element)?;
        let state = ContainerState {
            size: before.size(),
        };
        debug!("layout pass for {:?}: size {:?}", self.element, state.size);

        let next = select_active(&self.layouts, &state);
        self.apply_selection(next, host)?;
        let Some(index) = self.active else {
            debug!("no qualifying layout; pass is a no-op");
            return Ok(PassReport {
                size_before: before.size(),
                size_after: before.size(),
            });
        };

        // Snapshot element state once; the rest of the pass is pure math
        // over it. First sight of an element also records its initial
        // size, the fallback for elements that later measure (0, 0).
        let cell_count = self.layouts[index].cells.len();
        let mut snapshots: Vec<Option<CellSnapshot>> = Vec::with_capacity(cell_count);
        for cell_index in 0..cell_count {
            match self.layouts[index].cells[cell_index].element {
                None => snapshots.push(None),
                Some(id) => {
                    let frame = host.frame(id)?;
                    let hidden = !host.is_visible(id)? || host.opacity(id)? <= 0.0;
                    let initial = &mut self.layouts[index].cells[cell_index].initial_size;
                    if initial.is_none() {
                        *initial = Some(frame.size());
                    }
                    snapshots.push(Some(CellSnapshot { frame, hidden }));
                }
            }
        }

        let spec = &self.layouts[index];
        validate_spans(spec)?;
        validate_stretched(spec)?;

        let columns = resolve_axis(
            Axis::Horizontal,
            &spec.columns,
            &axis_cells(spec, &snapshots, Axis::Horizontal),
            spec.padding.left,
            spec.padding.right,
            spec.spacing,
            (!self.auto_width).then_some(before.width),
        )?;
        let rows = resolve_axis(
            Axis::Vertical,
            &spec.rows,
            &axis_cells(spec, &snapshots, Axis::Vertical),
            spec.padding.top,
            spec.padding.bottom,
            spec.spacing,
            (!self.auto_height).then_some(before.height),
        )?;

        let after = Size::new(columns.total, rows.total);
        if after != before.size() {
            debug!("container {:?} resized to {:?}", self.element, after);
            host.set_frame(self.element, before.with_size(after))?;
        }

        let column_origins = track_origins(&columns.sizes, spec.padding.left, spec.spacing);
        let row_origins = track_origins(&rows.sizes, spec.padding.top, spec.spacing);

        for (cell, snapshot) in spec.cells.iter().zip(&snapshots) {
            let (Some(element), Some(snapshot)) = (cell.element, snapshot) else {
                continue;
            };
            if snapshot.hidden && cell.position.collapse != Collapse::None {
                trace!("skipping hidden collapsed cell {:?}", element);
                continue;
            }

            let position = &cell.position;
            let element_size = effective_size(cell, snapshot);
            let horizontal = align_axis(
                position.horizontal,
                AxisSlot {
                    origin: column_origins[position.column],
                    extent: span_extent(
                        &columns.sizes,
                        position.column,
                        position.column_span,
                        spec.spacing,
                    ),
                },
                element_size.width,
                position.margin.left,
                position.margin.right,
            );
            let vertical = align_axis(
                position.vertical,
                AxisSlot {
                    origin: row_origins[position.row],
                    extent: span_extent(&rows.sizes, position.row, position.row_span, spec.spacing),
                },
                element_size.height,
                position.margin.top,
                position.margin.bottom,
            );

            let mut frame = Rect::new(
                horizontal.origin,
                vertical.origin,
                horizontal.extent,
                vertical.extent,
            );
            if position.no_resize {
                frame = frame.with_size(snapshot.frame.size());
            }
            if position.no_position {
                frame = snapshot.frame;
            }
            if frame != snapshot.frame {
                trace!("frame for {:?}: {:?}", element, frame);
                host.set_frame(element, frame)?;
            }
        }

        Ok(PassReport {
            size_before: before.size(),
            size_after: after,
        })
    }

    /// Run passes until the container's outer size stops changing, up to
    /// `max_passes` (see [`DEFAULT_MAX_LAYOUT_PASSES`]).
    ///
    /// An auto-sized container can depend on content that itself depends
    /// on the container's resolved tracks; iterating reaches the fixed
    /// point. Exceeding the cap accepts the last computed size.
    pub fn perform_layout_until_stable<H: ElementHost>(
        &mut self,
        host: &mut H,
        max_passes: usize,
    ) -> Result<PassReport, LayoutError> {
        let mut report = self.perform_layout(host)?;
        let initial = report.size_before;
        let mut passes = 1;
        while report.resized() && passes < max_passes {
            trace!(
                "pass {} changed size {:?} -> {:?}",
                passes,
                report.size_before,
                report.size_after
            );
            report = self.perform_layout(host)?;
            passes += 1;
        }
        Ok(PassReport {
            size_before: initial,
            size_after: report.size_after,
        })
    }

    /// Replace `old` with `new` in every cell that places it, keeping the
    /// layout structure untouched.
    pub fn swap_element<H: ElementHost>(
        &mut self,
        host: &mut H,
        old: ElementId,
        new: ElementId,
    ) -> Result<(), LayoutError> {
        let mut found = false;
        let mut replaced_in_active = false;
        for (index, layout) in self.layouts.iter_mut().enumerate() {
            for cell in &mut layout.cells {
                if cell.element == Some(old) {
                    cell.element = Some(new);
                    cell.initial_size = None;
                    found = true;
                    if Some(index) == self.active {
                        replaced_in_active = true;
                    }
                }
            }
        }
        if !found {
            return Err(LayoutError::ElementNotPlaced(old));
        }
        if replaced_in_active {
            host.detach(old)?;
            host.attach(self.element, new)?;
        }
        debug!("swapped {:?} for {:?}", old, new);
        Ok(())
    }

    /// Attach/detach membership changes when the active layout changes.
    fn apply_selection<H: ElementHost>(
        &mut self,
        next: Option<usize>,
        host: &mut H,
    ) -> Result<(), LayoutError> {
        if next == self.active {
            return Ok(());
        }
        let old: Vec<ElementId> = self
            .active
            .map(|index| self.layouts[index].element_ids())
            .unwrap_or_default();
        let new: Vec<ElementId> = next
            .map(|index| self.layouts[index].element_ids())
            .unwrap_or_default();

        for id in &old {
            if !new.contains(id) {
                host.detach(*id)?;
            }
        }
        for id in &new {
            if !old.contains(id) {
                host.attach(self.element, *id)?;
            }
        }

        debug!("active layout changed: {:?} -> {:?}", self.active, next);
        self.active = next;
        Ok(())
    }
}

/// Every cell must index existing definitions on both axes.
fn validate_spans<T>(spec: &LayoutSpec<T>) -> Result<(), LayoutError> {
    let rows = spec.rows.len();
    let columns = spec.columns.len();
    for cell in &spec.cells {
        let position = &cell.position;
        let row_overflow = position.row_span == 0 || position.row + position.row_span > rows;
        let column_overflow =
            position.column_span == 0 || position.column + position.column_span > columns;
        if row_overflow || column_overflow {
            return Err(LayoutError::CellOutOfBounds {
                row: position.row,
                column: position.column,
                row_span: position.row_span,
                column_span: position.column_span,
                rows,
                columns,
            });
        }
    }
    Ok(())
}

/// A stretched cell has no intrinsic size on that axis, so an auto track
/// it covers needs at least one other cell with one.
fn validate_stretched<T>(spec: &LayoutSpec<T>) -> Result<(), LayoutError> {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let definitions = match axis {
            Axis::Horizontal => &spec.columns,
            Axis::Vertical => &spec.rows,
        };
        for (index, cell) in spec.cells.iter().enumerate() {
            if cell.element.is_none() || cell.position.alignment(axis) != Alignment::Stretched {
                continue;
            }
            let start = cell.position.track(axis);
            for track in start..start + cell.position.span_on(axis) {
                if !definitions[track].is_auto() {
                    continue;
                }
                let has_sizing_sibling = spec.cells.iter().enumerate().any(|(other_index, other)| {
                    other_index != index
                        && other.element.is_some()
                        && other.position.covers_track(axis, track)
                        && other.position.alignment(axis) != Alignment::Stretched
                });
                if !has_sizing_sibling {
                    return Err(LayoutError::StretchedAutoTrack { axis, track });
                }
            }
        }
    }
    Ok(())
}

/// Project every cell of the spec onto one axis.
fn axis_cells<T>(
    spec: &LayoutSpec<T>,
    snapshots: &[Option<CellSnapshot>],
    axis: Axis,
) -> Vec<AxisCell> {
    spec.cells
        .iter()
        .zip(snapshots)
        .map(|(cell, snapshot)| {
            let (extent, eligible) = match snapshot {
                Some(snapshot) => {
                    let size = effective_size(cell, snapshot);
                    let extent = axis_of(size, axis) + cell.position.margin_extent(axis);
                    (extent, !(snapshot.hidden && cell.position.collapse.covers(axis)))
                }
                None => (0.0, false),
            };
            AxisCell {
                track: cell.position.track(axis),
                span: cell.position.span_on(axis),
                extent,
                eligible,
            }
        })
        .collect()
}

fn axis_of(size: Size, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

/// The size alignment works with: fixed override, else the measured
/// frame, else the recorded initial size for a (0, 0) measurement.
fn effective_size<T>(cell: &Cell<T>, snapshot: &CellSnapshot) -> Size {
    if let Some(fixed) = cell.position.fixed_size {
        return fixed;
    }
    let measured = snapshot.frame.size();
    if measured.is_empty() {
        cell.initial_size.unwrap_or(measured)
    } else {
        measured
    }
}

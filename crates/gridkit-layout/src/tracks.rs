//! Track size resolution.
//!
//! Columns and rows are resolved by the same algorithm applied to the
//! transposed axis: measure content into auto tracks, grow spanned tracks
//! to fit spanning cells, derive the container total (when auto-sizing),
//! distribute remaining space to percentage tracks, and clamp everything
//! to the spanning floors.

use tracing::{debug, trace};

use crate::definition::{Definition, SizeClass};
use crate::position::Axis;
use crate::LayoutError;

/// One cell's projection onto a single axis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisCell {
    /// First track covered.
    pub track: usize,
    /// Number of tracks covered (>= 1).
    pub span: usize,
    /// Measured extent on this axis, margin included.
    pub extent: f32,
    /// Whether the cell participates in auto-size calculation on this axis
    /// (element present and not collapsed away while hidden).
    pub eligible: bool,
}

/// Resolved sizes for one axis.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedAxis {
    /// The container extent on this axis (computed when auto-sizing,
    /// otherwise the supplied extent).
    pub total: f32,
    /// Absolute size per track. Never negative.
    pub sizes: Vec<f32>,
}

/// Resolve one axis.
///
/// `extent` is the externally supplied container extent, or `None` to
/// auto-size the axis from content. Every cell of the spec must be
/// projected into `cells`, placeholders included: coverage of an
/// auto-sized axis counts occupied tracks, not measured ones.
pub(crate) fn resolve_axis(
    axis: Axis,
    definitions: &[Definition],
    cells: &[AxisCell],
    leading_padding: f32,
    trailing_padding: f32,
    spacing: f32,
    extent: Option<f32>,
) -> Result<ResolvedAxis, LayoutError> {
    let count = definitions.len();

    // An auto-sized axis is unsatisfiable if some track is covered by no
    // cell at all; surface that instead of silently producing zeros.
    if extent.is_none() {
        for track in 0..count {
            let covered = cells
                .iter()
                .any(|cell| track >= cell.track && track < cell.track + cell.span);
            if !covered {
                return Err(LayoutError::UnsatisfiableAutoSize { axis, track });
            }
        }
    }

    // Measurement pass: single-span cells seed auto tracks with the
    // largest eligible extent.
    let mut auto_sizes = vec![0.0f32; count];
    for cell in cells.iter().filter(|cell| cell.eligible && cell.span == 1) {
        if definitions[cell.track].is_auto() {
            auto_sizes[cell.track] = auto_sizes[cell.track].max(cell.extent);
        }
    }

    // Spanning cells, narrowest span first, establish per-track floors:
    // the spanned range must be able to hold the cell.
    let mut min_sizes = auto_sizes.clone();
    let mut spanning: Vec<&AxisCell> = cells
        .iter()
        .filter(|cell| cell.eligible && cell.span > 1)
        .collect();
    spanning.sort_by_key(|cell| cell.span);

    for cell in spanning {
        let range = cell.track..cell.track + cell.span;
        let current: f32 = min_sizes[range.clone()].iter().sum();
        if current >= cell.extent {
            continue;
        }
        if min_sizes[range.clone()].iter().any(|size| *size == 0.0) {
            // No proportional base: give every spanned track an equal share.
            let share = cell.extent / cell.span as f32;
            for size in &mut min_sizes[range] {
                *size = size.max(share);
            }
        } else {
            // Scale up preserving the tracks' relative ratios.
            let ratio = cell.extent / current;
            for size in &mut min_sizes[range] {
                *size *= ratio;
            }
        }
        trace!(
            "span growth on {} {}..{} to fit {}",
            axis,
            cell.track,
            cell.track + cell.span,
            cell.extent
        );
    }

    // Container total: supplied, or summed from content. The auto total
    // uses the single-span maxima (not the spanning floors), fixed tracks
    // their literal size; spacing appears only between non-zero tracks.
    let total = match extent {
        Some(extent) => extent,
        None => {
            let mut sum = leading_padding + trailing_padding;
            let mut seen_track = false;
            for track in 0..count {
                let contribution = match definitions[track].class() {
                    SizeClass::Fixed => definitions[track].size(),
                    _ => auto_sizes[track],
                };
                if contribution > 0.0 {
                    if seen_track {
                        sum += spacing;
                    }
                    seen_track = true;
                    sum += contribution;
                }
            }
            sum
        }
    };

    // Space remaining for percentage tracks, after fixed tracks, measured
    // auto tracks, padding, and inter-track spacing.
    let fixed_sum: f32 = definitions
        .iter()
        .filter(|definition| definition.class() == SizeClass::Fixed)
        .map(|definition| definition.size())
        .sum();
    let auto_sum: f32 = auto_sizes.iter().sum();
    let spacing_sum = spacing * count.saturating_sub(1) as f32;
    let remaining =
        (total - fixed_sum - auto_sum - leading_padding - trailing_padding - spacing_sum).max(0.0);

    let sizes: Vec<f32> = definitions
        .iter()
        .enumerate()
        .map(|(track, definition)| {
            let size = match definition.class() {
                SizeClass::Fixed => definition.size(),
                SizeClass::Percentage => definition.size() * remaining,
                SizeClass::Auto => auto_sizes[track],
            };
            size.max(min_sizes[track])
        })
        .collect();

    debug!(
        "{} axis resolved: total={}, remaining={}, sizes={:?}",
        axis, total, remaining, sizes
    );

    Ok(ResolvedAxis { total, sizes })
}

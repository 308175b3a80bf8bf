//! Per-axis alignment of an element inside its cell box.

use crate::position::Alignment;

/// A one-dimensional slot: origin and extent on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisSlot {
    pub origin: f32,
    pub extent: f32,
}

/// Resolve one axis of an element's frame from its cell box.
///
/// `element_extent` is the element's effective size on the axis (measured,
/// fixed-size override, or initial-size fallback, decided by the caller).
/// Margin handling follows the alignment mode: Stretched honors both
/// edges, Start/End the leading/trailing edge, Center ignores margin.
pub(crate) fn align_axis(
    alignment: Alignment,
    slot: AxisSlot,
    element_extent: f32,
    leading_margin: f32,
    trailing_margin: f32,
) -> AxisSlot {
    match alignment {
        Alignment::Stretched => AxisSlot {
            origin: slot.origin + leading_margin,
            extent: slot.extent - leading_margin - trailing_margin,
        },
        Alignment::Start => AxisSlot {
            origin: slot.origin + leading_margin,
            extent: element_extent,
        },
        Alignment::Center => AxisSlot {
            origin: slot.origin + slot.extent / 2.0 - element_extent / 2.0,
            extent: element_extent,
        },
        Alignment::End => AxisSlot {
            origin: slot.origin + slot.extent - element_extent - trailing_margin,
            extent: element_extent,
        },
    }
}

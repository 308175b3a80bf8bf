//! Active-layout selection.

use crate::spec::LayoutSpec;
use crate::ContainerState;

/// Pick the active spec for the current container state.
///
/// Triggers are evaluated in registration order; the first match wins.
/// With no match, the first spec without a trigger acts as the default.
/// `None` means no layout qualifies and the pass is a no-op.
pub(crate) fn select_active<T>(specs: &[LayoutSpec<T>], state: &ContainerState) -> Option<usize> {
    specs
        .iter()
        .position(|spec| spec.trigger_matches(state))
        .or_else(|| specs.iter().position(|spec| !spec.has_trigger()))
}

//! # GridKit Host
//!
//! The boundary between the layout engine and the element system that owns
//! the actual views. The engine never touches platform views directly: it
//! reads element frames and visibility through [`ElementHost`] and writes
//! computed geometry back through the same trait.
//!
//! ## Design Goals
//!
//! 1. **Platform independence**: one trait, any view system behind it
//! 2. **Headless operation**: [`HeadlessHost`] runs layout with no windows,
//!    for tests and server-side measurement
//! 3. **Explicit write-back**: every frame change goes through `set_frame`,
//!    so the host decides how to apply it

use std::collections::HashMap;

use gridkit_common::{Rect, Size};
use thiserror::Error;
use tracing::trace;

/// Errors reported by an element host.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("unknown element: {0:?}")]
    UnknownElement(ElementId),
}

/// Opaque handle to a host-owned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Host-side operations the layout engine depends on.
///
/// Contract notes:
/// - `frame` returns the element's current frame; its size doubles as the
///   element's measured extent (`measure` is derived from it unless the
///   host overrides it with a real measurement pass).
/// - An element counts as hidden when `is_visible` is false or `opacity`
///   is not positive.
/// - `attach`/`detach` manage membership of an element under a container;
///   the engine calls them when the active layout changes.
pub trait ElementHost {
    /// Current frame of an element.
    fn frame(&self, id: ElementId) -> Result<Rect, HostError>;

    /// Natural size of an element. Defaults to the current frame size.
    fn measure(&self, id: ElementId) -> Result<Size, HostError> {
        self.frame(id).map(|frame| frame.size())
    }

    /// Whether the element is visible.
    fn is_visible(&self, id: ElementId) -> Result<bool, HostError>;

    /// Current opacity of the element (0.0 - 1.0).
    fn opacity(&self, id: ElementId) -> Result<f32, HostError>;

    /// Write a computed frame back to an element.
    fn set_frame(&mut self, id: ElementId, frame: Rect) -> Result<(), HostError>;

    /// Make `id` a child of `container`.
    fn attach(&mut self, container: ElementId, id: ElementId) -> Result<(), HostError>;

    /// Remove `id` from its current parent, if any.
    fn detach(&mut self, id: ElementId) -> Result<(), HostError>;
}

/// In-memory element host.
///
/// Runs layout without any window system. Perfect for automated testing
/// and for embedders that only need computed geometry.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    elements: HashMap<ElementId, ElementRecord>,
    next_id: u64,
}

#[derive(Debug, Clone)]
struct ElementRecord {
    frame: Rect,
    visible: bool,
    opacity: f32,
    parent: Option<ElementId>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element with the given starting frame.
    pub fn create_element(&mut self, frame: Rect) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(
            id,
            ElementRecord {
                frame,
                visible: true,
                opacity: 1.0,
                parent: None,
            },
        );
        id
    }

    /// Register a new element with the given size at the origin.
    pub fn create_sized(&mut self, width: f32, height: f32) -> ElementId {
        self.create_element(Rect::new(0.0, 0.0, width, height))
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> Result<(), HostError> {
        self.record_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn set_opacity(&mut self, id: ElementId, opacity: f32) -> Result<(), HostError> {
        self.record_mut(id)?.opacity = opacity;
        Ok(())
    }

    /// The parent an element is currently attached to.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id).and_then(|record| record.parent)
    }

    /// Elements currently attached under `container`, in id order.
    pub fn children_of(&self, container: ElementId) -> Vec<ElementId> {
        let mut children: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(_, record)| record.parent == Some(container))
            .map(|(id, _)| *id)
            .collect();
        children.sort_by_key(|id| id.raw());
        children
    }

    fn record(&self, id: ElementId) -> Result<&ElementRecord, HostError> {
        self.elements.get(&id).ok_or(HostError::UnknownElement(id))
    }

    fn record_mut(&mut self, id: ElementId) -> Result<&mut ElementRecord, HostError> {
        self.elements
            .get_mut(&id)
            .ok_or(HostError::UnknownElement(id))
    }
}

impl ElementHost for HeadlessHost {
    fn frame(&self, id: ElementId) -> Result<Rect, HostError> {
        self.record(id).map(|record| record.frame)
    }

    fn is_visible(&self, id: ElementId) -> Result<bool, HostError> {
        self.record(id).map(|record| record.visible)
    }

    fn opacity(&self, id: ElementId) -> Result<f32, HostError> {
        self.record(id).map(|record| record.opacity)
    }

    fn set_frame(&mut self, id: ElementId, frame: Rect) -> Result<(), HostError> {
        trace!("set_frame {:?} -> {:?}", id, frame);
        self.record_mut(id)?.frame = frame;
        Ok(())
    }

    fn attach(&mut self, container: ElementId, id: ElementId) -> Result<(), HostError> {
        trace!("attach {:?} under {:?}", id, container);
        self.record_mut(id)?.parent = Some(container);
        Ok(())
    }

    fn detach(&mut self, id: ElementId) -> Result<(), HostError> {
        trace!("detach {:?}", id);
        self.record_mut(id)?.parent = None;
        Ok(())
    }
}

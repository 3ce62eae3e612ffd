//! Gesture state - the engine's only mutable state.
//!
//! The phases are implied by which optional fields are set rather than by an
//! explicit enum, because a mouse-down can arm a click and a drag at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PotentialClick        (mouse down on an interactive target)
//! Idle -> PotentialDrag         (mouse down inside a draggable)
//! PotentialDrag -> Dragging     (first mouse move after the down)
//! Dragging -> DropTracking      (pointer over a drop zone while dragging)
//!
//! Any -> Idle                   (primary mouse up)
//! ```
//!
//! ## Invariants
//!
//! 1. `current_draggable` is only set between a published drag-start and its
//!    drag-end.
//! 2. `potential_clickable` is cleared on every mouse up.
//! 3. `current_drop_target` is only set while `current_draggable` is.

use super::events::NormalizedTarget;
use crate::types::Point;

/// A draggable armed by mouse-down, waiting for the first move.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialDrag<E> {
    pub target: NormalizedTarget<E>,
    /// Pointer position relative to the draggable's top-left corner
    pub offset: Point,
    /// Container-relative position of the draggable at mouse-down
    pub drag_reference: Point,
}

#[derive(Debug, Clone)]
pub struct GestureState<E> {
    pub potential_clickable: Option<NormalizedTarget<E>>,
    pub potential_draggable: Option<PotentialDrag<E>>,
    pub current_draggable: Option<NormalizedTarget<E>>,
    pub current_drop_target: Option<NormalizedTarget<E>>,
    pub current_drag_offset: Option<Point>,
    pub drag_reference: Option<Point>,
    /// Page position of the container, refreshed on every container update
    pub context_offset: Point,
}

impl<E> GestureState<E> {
    pub fn new(context_offset: Point) -> Self {
        Self {
            potential_clickable: None,
            potential_draggable: None,
            current_draggable: None,
            current_drop_target: None,
            current_drag_offset: None,
            drag_reference: None,
            context_offset,
        }
    }

    /// Returns true once drag-start has been published and drag-end has not
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.current_draggable.is_some()
    }

    /// Returns true when nothing is armed or in progress
    pub fn is_idle(&self) -> bool {
        self.potential_clickable.is_none()
            && self.potential_draggable.is_none()
            && self.current_draggable.is_none()
    }

    /// Promote the armed draggable. Returns the new current draggable, or
    /// `None` when already dragging or nothing is armed.
    pub fn start_drag(&mut self) -> Option<&NormalizedTarget<E>> {
        if self.is_dragging() {
            return None;
        }
        let potential = self.potential_draggable.take()?;
        self.current_drag_offset = Some(potential.offset);
        self.drag_reference = Some(potential.drag_reference);
        self.current_draggable = Some(potential.target);
        self.current_draggable.as_ref()
    }

    /// Clear everything tied to the current drag.
    pub fn end_drag(&mut self) {
        self.current_draggable = None;
        self.current_drop_target = None;
        self.current_drag_offset = None;
        self.drag_reference = None;
    }
}

//! Mouse up handling - finalize the gesture.
//!
//! Publication order is fixed: drop, then drag-end, then click. Drop before
//! drag-end matches native drag-and-drop ordering.

use super::engine::GestureEngine;
use super::events::{GestureEvent, MouseClick};
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::{MouseButton, Point};

impl<S: Surface> GestureEngine<S> {
    /// `click` is the normalized mouse-up, absent when the pointer was
    /// released outside any interactive target.
    pub(super) fn handle_mouse_up(
        &mut self,
        button: MouseButton,
        position: Point,
        click: Option<&MouseClick<'_, S::Element>>,
    ) {
        profile_scope!("handle_mouse_up");

        let potential_clickable = self.state.potential_clickable.take();
        if !Self::is_primary(button) {
            return;
        }
        self.state.potential_draggable = None;

        if let (Some(target), Some(zone)) = (
            self.state.current_draggable.clone(),
            self.state.current_drop_target.clone(),
        ) {
            tracing::debug!(element = ?target.element, dropzone = ?zone.element, "Drop");
            let event = GestureEvent::Drop(self.drop_info(position, target, zone));
            self.bus.publish(&event);
        }

        if let Some(target) = self.state.current_draggable.clone() {
            tracing::debug!(element = ?target.element, "Drag ended");
            let event = GestureEvent::DragEnd(self.drag_info(position, target));
            self.bus.publish(&event);
        }

        if let (Some(click), Some(pressed)) = (click, potential_clickable.as_ref())
            && !self.state.is_dragging()
            && pressed.is_same_element(&click.target)
        {
            tracing::debug!(element = ?click.target.element, id = ?click.target.id, "Click");
            self.bus.publish(&GestureEvent::Click(click.clone()));
        }

        self.state.end_drag();
    }
}

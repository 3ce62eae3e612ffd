//! Mouse move handling - drag promotion, drag updates and drop-zone tracking.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during a drag. Key points:
//! - Early exit when nothing is armed or dragging
//! - One element-stack query per move, only while dragging
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::engine::GestureEngine;
use super::events::{DragInfo, DropInfo, GestureEvent, NormalizedTarget};
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::Point;

impl<S: Surface> GestureEngine<S> {
    pub(super) fn handle_mouse_move(&mut self, position: Point) {
        profile_scope!("handle_mouse_move");

        if !self.state.is_dragging() && self.state.potential_draggable.is_none() {
            return;
        }

        if let Some(target) = self.state.start_drag().cloned() {
            tracing::debug!(element = ?target.element, id = ?target.id, "Drag started");
            let event = GestureEvent::DragStart(self.drag_info(position, target));
            self.bus.publish(&event);
        }

        let Some(target) = self.state.current_draggable.clone() else {
            return;
        };

        tracing::trace!(?position, "Drag");
        let event = GestureEvent::Drag(self.drag_info(position, target.clone()));
        self.bus.publish(&event);

        self.track_drop_zone(position, target);
    }

    pub(super) fn drag_info(
        &self,
        position: Point,
        target: NormalizedTarget<S::Element>,
    ) -> DragInfo<S::Element> {
        DragInfo {
            position,
            target,
            offset: self.state.current_drag_offset,
            drag_reference: self.state.drag_reference,
        }
    }

    /// Re-resolve the drop zone under the pointer and publish enter/over/leave.
    fn track_drop_zone(&mut self, position: Point, target: NormalizedTarget<S::Element>) {
        let zone = self
            .resolver
            .drop_zone_at(&self.surface, position, self.state.context_offset);
        let previous = self.state.current_drop_target.take();

        let event = match (zone, previous) {
            (Some(zone), Some(previous)) if zone.is_same_element(&previous) => {
                self.state.current_drop_target = Some(zone.clone());
                GestureEvent::DragOver(self.drop_info(position, target, zone))
            }
            (Some(zone), _) => {
                tracing::debug!(dropzone = ?zone.element, id = ?zone.id, "Drag entered drop zone");
                self.state.current_drop_target = Some(zone.clone());
                GestureEvent::DragEnter(self.drop_info(position, target, zone))
            }
            (None, Some(previous)) => {
                tracing::debug!(dropzone = ?previous.element, "Drag left drop zone");
                GestureEvent::DragLeave(self.drop_info(position, target, previous))
            }
            (None, None) => return,
        };
        self.bus.publish(&event);
    }

    pub(super) fn drop_info(
        &self,
        position: Point,
        target: NormalizedTarget<S::Element>,
        dropzone: NormalizedTarget<S::Element>,
    ) -> DropInfo<S::Element> {
        DropInfo {
            position,
            target,
            dropzone,
            offset: self.state.current_drag_offset,
        }
    }
}

//! Mouse down handling - arm a potential click and a potential drag.
//!
//! A drag never starts here. Only the first following mouse move promotes it,
//! so a plain press-and-release stays a click.
//!
//! The two are resolved independently: a drag handle without the interactive
//! marker still arms a drag, it just never clicks.

use super::coords::{page_to_container, relative, screen_to_page};
use super::engine::GestureEngine;
use super::events::MouseClick;
use super::native::PointerInput;
use super::state::PotentialDrag;
use crate::profile_scope;
use crate::surface::Surface;

impl<S: Surface> GestureEngine<S> {
    /// `click` is the normalized mouse-down, absent when the raw target has
    /// no interactive ancestor.
    pub(super) fn handle_mouse_down(
        &mut self,
        input: &PointerInput<S::Element>,
        click: Option<&MouseClick<'_, S::Element>>,
    ) {
        profile_scope!("handle_mouse_down");

        if !Self::is_primary(input.button) {
            return;
        }

        self.state.potential_clickable = click.map(|click| click.target.clone());
        self.state.potential_draggable = self.resolve_potential_drag(input);

        if let Some(ref potential) = self.state.potential_draggable {
            tracing::debug!(
                element = ?potential.target.element,
                id = ?potential.target.id,
                offset = ?potential.offset,
                "Potential drag armed"
            );
        }
    }

    /// Find the draggable ancestor of the raw target and capture where the
    /// pointer grabbed it.
    fn resolve_potential_drag(
        &self,
        input: &PointerInput<S::Element>,
    ) -> Option<PotentialDrag<S::Element>> {
        let marker = &self.resolver.markers().draggable;
        let element = self
            .resolver
            .resolve(&self.surface, input.target, input.client, marker, None)?;

        let scroll = self.surface.scroll_offset();
        let element_page = screen_to_page(self.surface.bounding_rect(element)?.origin, scroll);
        let pointer_page = screen_to_page(input.client, scroll);

        Some(PotentialDrag {
            target: self.resolver.normalize_target(&self.surface, element),
            offset: relative(pointer_page, element_page),
            drag_reference: page_to_container(element_page, self.state.context_offset),
        })
    }
}

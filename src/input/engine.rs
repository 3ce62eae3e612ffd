//! The gesture engine: construction, native event dispatch and teardown.
//!
//! The pointer transitions live next door in `mouse_down`, `drag` and
//! `mouse_up`.

use super::coords::screen_to_page;
use super::events::{GestureEvent, Topic};
use super::native::{NativeEvent, NativeEventKind, NativeInput};
use super::normalize::{NormalizeContext, container_update, normalize};
use super::state::GestureState;
use super::target::TargetResolver;
use crate::bus::{EventBus, SubscriptionId};
use crate::error::{GestureError, GestureResult};
use crate::settings::GestureSettings;
use crate::surface::{ListenerContext, ListenerHandle, Surface};
use crate::types::{MouseButton, Platform, Point};

/// Native listeners attached at construction.
const LISTENERS: [(ListenerContext, NativeEventKind); 8] = [
    (ListenerContext::Container, NativeEventKind::MouseDown),
    (ListenerContext::Container, NativeEventKind::ContextMenu),
    (ListenerContext::Container, NativeEventKind::Wheel),
    (ListenerContext::Document, NativeEventKind::MouseMove),
    (ListenerContext::Document, NativeEventKind::MouseUp),
    (ListenerContext::Document, NativeEventKind::KeyDown),
    (ListenerContext::Document, NativeEventKind::KeyUp),
    (ListenerContext::Window, NativeEventKind::Resize),
];

/// One native listener registration, kept only so teardown can undo it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerRegistration {
    pub kind: NativeEventKind,
    pub context: ListenerContext,
    pub handle: ListenerHandle,
}

/// Turns native input into normalized and synthetic events.
///
/// Feed every native event to [`GestureEngine::handle`]; subscribe to topics
/// with [`GestureEngine::subscribe`]. The engine handles each normalized
/// event before publishing it, so synthetic events caused by an input reach
/// subscribers before the normalized input itself.
pub struct GestureEngine<S: Surface> {
    pub(super) surface: S,
    pub(super) container: S::Element,
    pub(super) resolver: TargetResolver<S::Element>,
    pub(super) state: GestureState<S::Element>,
    pub(super) bus: EventBus<S::Element>,
    platform: Platform,
    suppress_default_shortcuts: bool,
    listeners: Vec<ListenerRegistration>,
}

impl<S: Surface> std::fmt::Debug for GestureEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureEngine")
            .field("container", &self.container)
            .field("dragging", &self.state.is_dragging())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: Surface> GestureEngine<S> {
    /// Attach to `container`.
    ///
    /// Fails when `container` is not attached to `surface`.
    pub fn new(mut surface: S, container: S::Element, settings: GestureSettings) -> GestureResult<Self> {
        if !surface.is_attached(container) {
            return Err(GestureError::InvalidContainer(format!("{container:?}")));
        }
        let rect = surface
            .bounding_rect(container)
            .ok_or_else(|| GestureError::InvalidContainer(format!("{container:?}")))?;
        let context_offset = screen_to_page(rect.origin, surface.scroll_offset());

        let listeners = LISTENERS
            .iter()
            .map(|&(context, kind)| ListenerRegistration {
                kind,
                context,
                handle: surface.add_listener(context, kind),
            })
            .collect::<Vec<_>>();

        let platform = settings.platform.unwrap_or_else(|| surface.platform());
        tracing::debug!(
            ?container,
            ?platform,
            listeners = listeners.len(),
            "Gesture engine attached"
        );

        Ok(Self {
            surface,
            container,
            resolver: TargetResolver::new(settings.markers),
            state: GestureState::new(context_offset),
            bus: EventBus::new(),
            platform,
            suppress_default_shortcuts: settings.suppress_default_shortcuts,
            listeners,
        })
    }

    /// Replace the surface's element-stack-at-point query.
    pub fn with_hit_test<F>(mut self, hit_test: F) -> Self
    where
        F: Fn(Point) -> Vec<S::Element> + 'static,
    {
        self.resolver.set_hit_test(Box::new(hit_test));
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn container(&self) -> S::Element {
        self.container
    }

    pub fn subscribe<F>(&mut self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: FnMut(&GestureEvent<'_, S::Element>) + 'static,
    {
        self.bus.subscribe(topic, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Live native listener registrations.
    pub fn listeners(&self) -> &[ListenerRegistration] {
        &self.listeners
    }

    pub fn is_destroyed(&self) -> bool {
        self.listeners.is_empty()
    }

    fn is_listening(&self, kind: NativeEventKind) -> bool {
        self.listeners.iter().any(|l| l.kind == kind)
    }

    pub(super) fn normalize_context(&self) -> NormalizeContext<'_, S> {
        NormalizeContext {
            surface: &self.surface,
            resolver: &self.resolver,
            context_offset: self.state.context_offset,
            platform: self.platform,
            suppress_default_shortcuts: self.suppress_default_shortcuts,
        }
    }

    /// Process one native event, in dispatch order.
    pub fn handle(&mut self, event: &NativeEvent<S::Element>) {
        let kind = event.kind();
        if !self.is_listening(kind) {
            tracing::trace!(?kind, "No listener registered, ignoring native event");
            return;
        }

        let normalized = normalize(&self.normalize_context(), event);

        match (&event.input, &normalized) {
            (NativeInput::MouseDown(input), Some(GestureEvent::MouseDown(click))) => {
                self.handle_mouse_down(input, Some(click));
            }
            // A draggable without the interactive marker still arms a drag.
            (NativeInput::MouseDown(input), None) => self.handle_mouse_down(input, None),
            (_, Some(GestureEvent::MouseMove(movement))) => self.handle_mouse_move(movement.position),
            (_, Some(GestureEvent::MouseUp(click))) => {
                self.handle_mouse_up(click.button, click.position, Some(click));
            }
            // A mouse-up outside any interactive target still ends the gesture.
            (NativeInput::MouseUp(input), None) => {
                let position = self.normalize_context().container_position(input.client);
                self.handle_mouse_up(input.button, position, None);
            }
            _ => {}
        }

        if let Some(normalized) = normalized {
            self.bus.publish(&normalized);
        }
    }

    /// The container may have moved or resized: refresh the cached page
    /// offset and publish a container update.
    pub fn update_container(&mut self) {
        if self.is_destroyed() {
            return;
        }
        let Some(update) = container_update(&self.surface, self.container) else {
            tracing::warn!(container = ?self.container, "Container has no bounding rect, keeping previous offset");
            return;
        };
        self.state.context_offset =
            screen_to_page(update.context_rect.origin, self.surface.scroll_offset());
        tracing::trace!(context_offset = ?self.state.context_offset, "Container updated");
        self.bus.publish(&GestureEvent::ContainerUpdate(update));
    }

    /// Unregister every native listener. Later input is ignored; calling this
    /// again does nothing.
    pub fn destroy(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let count = self.listeners.len();
        for registration in self.listeners.drain(..) {
            self.surface.remove_listener(registration.handle);
        }
        // Release handler captures along with the listeners.
        self.bus.clear();
        tracing::debug!(listeners = count, "Gesture engine destroyed");
    }

    #[inline]
    pub(super) fn is_primary(button: MouseButton) -> bool {
        button == MouseButton::Primary
    }
}

impl<S: Surface> Drop for GestureEngine<S> {
    fn drop(&mut self) {
        if !self.listeners.is_empty() {
            tracing::warn!(
                listeners = self.listeners.len(),
                "Gesture engine dropped without destroy(); native listeners are still registered"
            );
        }
    }
}

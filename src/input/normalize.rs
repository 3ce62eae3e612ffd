//! Native event normalization.
//!
//! One adapter per native event kind. Each either produces a [`GestureEvent`]
//! or returns `None`, meaning the event is not published at all.

use super::coords::{page_to_container, relative, screen_to_page};
use super::events::{
    ContainerUpdate, GestureEvent, Keyboard, MouseClick, PointerMove, Wheel, WindowResize,
};
use super::native::{KeyInput, NativeEvent, NativeInput, PointerInput, WheelInput};
use super::target::TargetResolver;
use crate::constants::{KEY_BACKSPACE, KEY_SELECT_ALL};
use crate::surface::Surface;
use crate::types::{Platform, Point, Size};

/// Everything the adapters read besides the event itself.
pub struct NormalizeContext<'s, S: Surface> {
    pub surface: &'s S,
    pub resolver: &'s TargetResolver<S::Element>,
    /// Page position of the container
    pub context_offset: Point,
    pub platform: Platform,
    pub suppress_default_shortcuts: bool,
}

impl<S: Surface> NormalizeContext<'_, S> {
    /// Viewport position -> container position.
    #[inline]
    pub fn container_position(&self, client: Point) -> Point {
        page_to_container(
            screen_to_page(client, self.surface.scroll_offset()),
            self.context_offset,
        )
    }

    /// Page position of an element's top-left corner.
    pub fn element_page_position(&self, element: S::Element) -> Option<Point> {
        let rect = self.surface.bounding_rect(element)?;
        Some(screen_to_page(rect.origin, self.surface.scroll_offset()))
    }
}

/// Normalize one native event.
pub fn normalize<'a, S: Surface>(
    ctx: &NormalizeContext<'_, S>,
    event: &'a NativeEvent<S::Element>,
) -> Option<GestureEvent<'a, S::Element>> {
    match &event.input {
        NativeInput::MouseMove(input) => Some(GestureEvent::MouseMove(normalize_move(ctx, input, event))),
        NativeInput::MouseDown(input) => normalize_click(ctx, input, event).map(GestureEvent::MouseDown),
        NativeInput::MouseUp(input) => normalize_click(ctx, input, event).map(GestureEvent::MouseUp),
        NativeInput::ContextMenu(input) => {
            normalize_click(ctx, input, event).map(GestureEvent::ContextMenu)
        }
        NativeInput::Wheel(input) => Some(GestureEvent::Wheel(normalize_wheel(ctx, input, event))),
        NativeInput::Resize(size) => Some(GestureEvent::WindowResize(normalize_resize(*size, event))),
        NativeInput::KeyDown(input) => normalize_keyboard(ctx, input, event, true).map(GestureEvent::KeyDown),
        NativeInput::KeyUp(input) => normalize_keyboard(ctx, input, event, false).map(GestureEvent::KeyUp),
    }
}

pub fn normalize_move<'a, S: Surface>(
    ctx: &NormalizeContext<'_, S>,
    input: &PointerInput<S::Element>,
    original: &'a NativeEvent<S::Element>,
) -> PointerMove<'a, S::Element> {
    PointerMove {
        position: ctx.container_position(input.client),
        original,
    }
}

/// mousedown / mouseup / contextmenu. Requires an interactive-marker ancestor;
/// the offset is measured against that ancestor, not the raw target.
pub fn normalize_click<'a, S: Surface>(
    ctx: &NormalizeContext<'_, S>,
    input: &PointerInput<S::Element>,
    original: &'a NativeEvent<S::Element>,
) -> Option<MouseClick<'a, S::Element>> {
    let marker = &ctx.resolver.markers().interactive;
    let Some(element) = ctx
        .resolver
        .resolve(ctx.surface, input.target, input.client, marker, None)
    else {
        tracing::trace!(element = ?input.target, "No interactive target, suppressing pointer event");
        return None;
    };

    let pointer_page = screen_to_page(input.client, ctx.surface.scroll_offset());
    let offset = ctx
        .element_page_position(element)
        .map_or(Point::ZERO, |origin| relative(pointer_page, origin));

    Some(MouseClick {
        button: input.button,
        position: page_to_container(pointer_page, ctx.context_offset),
        offset,
        target: ctx.resolver.normalize_target(ctx.surface, element),
        original,
    })
}

pub fn normalize_wheel<'a, S: Surface>(
    ctx: &NormalizeContext<'_, S>,
    input: &WheelInput<S::Element>,
    original: &'a NativeEvent<S::Element>,
) -> Wheel<'a, S::Element> {
    Wheel {
        delta: input.delta,
        position: ctx.container_position(input.client),
        original,
    }
}

pub fn normalize_resize<E>(size: Size, original: &NativeEvent<E>) -> WindowResize<'_, E> {
    WindowResize { size, original }
}

/// Keyboard events only pass while the editor root itself has focus, so
/// typing into unrelated inputs on the page never reaches the engine.
pub fn normalize_keyboard<'a, S: Surface>(
    ctx: &NormalizeContext<'_, S>,
    input: &KeyInput,
    original: &'a NativeEvent<S::Element>,
    key_down: bool,
) -> Option<Keyboard<'a, S::Element>> {
    let focused = ctx.surface.active_element()?;
    if !ctx.resolver.is_editor_root(ctx.surface, focused) {
        return None;
    }

    let mod_key = input.modifiers.mod_key(ctx.platform);
    if key_down && ctx.suppress_default_shortcuts && is_suppressed_shortcut(&input.key, mod_key) {
        original.prevent_default();
    }

    Some(Keyboard {
        key: input.key.clone(),
        code: input.code.clone(),
        ctrl_key: input.modifiers.ctrl,
        shift_key: input.modifiers.shift,
        meta_key: input.modifiers.meta,
        mod_key,
        original,
    })
}

/// Backspace navigates back and mod+A selects the whole page.
fn is_suppressed_shortcut(key: &str, mod_key: bool) -> bool {
    key == KEY_BACKSPACE || (mod_key && key.eq_ignore_ascii_case(KEY_SELECT_ALL))
}

/// Snapshot the container's bounding rectangle.
pub fn container_update<S: Surface>(surface: &S, container: S::Element) -> Option<ContainerUpdate> {
    surface
        .bounding_rect(container)
        .map(|context_rect| ContainerUpdate { context_rect })
}

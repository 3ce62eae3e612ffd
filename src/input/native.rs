//! Raw input as delivered by the host.

use crate::types::{Modifiers, MouseButton, Point, Size};
use std::cell::Cell;

/// Native event kinds the engine listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeEventKind {
    MouseDown,
    MouseUp,
    MouseMove,
    ContextMenu,
    Wheel,
    KeyDown,
    KeyUp,
    Resize,
}

/// What the platform reported as the event target.
///
/// Some browsers report the document itself, rather than an element, for
/// pointer events fired outside the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget<E> {
    Element(E),
    Document,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput<E> {
    pub target: EventTarget<E>,
    /// Viewport-relative pointer position
    pub client: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelInput<E> {
    pub target: EventTarget<E>,
    pub client: Point,
    pub delta: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyInput {
    pub key: String,
    pub code: String,
    pub modifiers: Modifiers,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NativeInput<E> {
    MouseDown(PointerInput<E>),
    MouseUp(PointerInput<E>),
    MouseMove(PointerInput<E>),
    ContextMenu(PointerInput<E>),
    Wheel(WheelInput<E>),
    KeyDown(KeyInput),
    KeyUp(KeyInput),
    /// New viewport size
    Resize(Size),
}

/// A native event plus its "default prevented" flag.
///
/// Normalized events keep a shared reference to this, so default suppression
/// goes through a `Cell`.
#[derive(Debug)]
pub struct NativeEvent<E> {
    pub input: NativeInput<E>,
    default_prevented: Cell<bool>,
}

impl<E> NativeEvent<E> {
    pub fn new(input: NativeInput<E>) -> Self {
        Self {
            input,
            default_prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> NativeEventKind {
        match self.input {
            NativeInput::MouseDown(_) => NativeEventKind::MouseDown,
            NativeInput::MouseUp(_) => NativeEventKind::MouseUp,
            NativeInput::MouseMove(_) => NativeEventKind::MouseMove,
            NativeInput::ContextMenu(_) => NativeEventKind::ContextMenu,
            NativeInput::Wheel(_) => NativeEventKind::Wheel,
            NativeInput::KeyDown(_) => NativeEventKind::KeyDown,
            NativeInput::KeyUp(_) => NativeEventKind::KeyUp,
            NativeInput::Resize(_) => NativeEventKind::Resize,
        }
    }

    /// Ask the host to skip its default handling of this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    // Convenience constructors, mostly for hosts that translate one event at a time.

    pub fn mouse_down(target: EventTarget<E>, client: Point, button: MouseButton) -> Self {
        Self::new(NativeInput::MouseDown(PointerInput {
            target,
            client,
            button,
            modifiers: Modifiers::NONE,
        }))
    }

    pub fn mouse_up(target: EventTarget<E>, client: Point, button: MouseButton) -> Self {
        Self::new(NativeInput::MouseUp(PointerInput {
            target,
            client,
            button,
            modifiers: Modifiers::NONE,
        }))
    }

    pub fn mouse_move(target: EventTarget<E>, client: Point) -> Self {
        Self::new(NativeInput::MouseMove(PointerInput {
            target,
            client,
            button: MouseButton::Primary,
            modifiers: Modifiers::NONE,
        }))
    }

    pub fn context_menu(target: EventTarget<E>, client: Point) -> Self {
        Self::new(NativeInput::ContextMenu(PointerInput {
            target,
            client,
            button: MouseButton::Secondary,
            modifiers: Modifiers::NONE,
        }))
    }

    pub fn wheel(target: EventTarget<E>, client: Point, delta: Point) -> Self {
        Self::new(NativeInput::Wheel(WheelInput {
            target,
            client,
            delta,
        }))
    }

    pub fn key_down(key: impl Into<String>, code: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::new(NativeInput::KeyDown(KeyInput {
            key: key.into(),
            code: code.into(),
            modifiers,
        }))
    }

    pub fn key_up(key: impl Into<String>, code: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::new(NativeInput::KeyUp(KeyInput {
            key: key.into(),
            code: code.into(),
            modifiers,
        }))
    }

    pub fn resize(size: Size) -> Self {
        Self::new(NativeInput::Resize(size))
    }
}

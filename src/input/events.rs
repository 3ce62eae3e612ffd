//! Normalized and synthetic events published to downstream subscribers.
//!
//! Every variant of [`GestureEvent`] maps to exactly one [`Topic`]. Variants
//! derived from a native event keep a reference to it in `original`, so a
//! subscriber can still call [`NativeEvent::prevent_default`].

use super::native::NativeEvent;
use crate::types::{MouseButton, Point, Rect, Size};

/// The element an event resolved to, plus its id/type marker values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedTarget<E> {
    /// Non-owning handle to the source element
    pub element: E,
    pub id: Option<String>,
    pub kind: Option<String>,
}

impl<E: PartialEq> NormalizedTarget<E> {
    /// Same underlying element, regardless of marker values.
    #[inline]
    pub fn is_same_element(&self, other: &NormalizedTarget<E>) -> bool {
        self.element == other.element
    }
}

#[derive(Clone, Debug)]
pub struct PointerMove<'a, E> {
    /// Container-relative position
    pub position: Point,
    pub original: &'a NativeEvent<E>,
}

/// Payload shared by mousedown, mouseup, contextmenu and click.
#[derive(Clone, Debug)]
pub struct MouseClick<'a, E> {
    pub button: MouseButton,
    pub position: Point,
    /// Pointer position relative to the resolved target's top-left corner
    pub offset: Point,
    pub target: NormalizedTarget<E>,
    pub original: &'a NativeEvent<E>,
}

#[derive(Clone, Debug)]
pub struct Wheel<'a, E> {
    pub delta: Point,
    pub position: Point,
    pub original: &'a NativeEvent<E>,
}

#[derive(Clone, Debug)]
pub struct WindowResize<'a, E> {
    /// Viewport size, not the container's
    pub size: Size,
    pub original: &'a NativeEvent<E>,
}

#[derive(Clone, Debug)]
pub struct Keyboard<'a, E> {
    pub key: String,
    pub code: String,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
    pub mod_key: bool,
    pub original: &'a NativeEvent<E>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerUpdate {
    /// Viewport-relative container rectangle
    pub context_rect: Rect,
}

/// drag-start / drag / drag-end payload.
#[derive(Clone, Debug, PartialEq)]
pub struct DragInfo<E> {
    pub position: Point,
    pub target: NormalizedTarget<E>,
    pub offset: Option<Point>,
    /// Container-relative position of the dragged element at mouse-down.
    /// Captured once: a container update during the drag rebases `position`
    /// but not this.
    pub drag_reference: Option<Point>,
}

/// drag-enter / drag-over / drag-leave / drop payload.
#[derive(Clone, Debug, PartialEq)]
pub struct DropInfo<E> {
    pub position: Point,
    pub target: NormalizedTarget<E>,
    pub dropzone: NormalizedTarget<E>,
    pub offset: Option<Point>,
}

#[derive(Clone, Debug)]
pub enum GestureEvent<'a, E> {
    MouseMove(PointerMove<'a, E>),
    MouseDown(MouseClick<'a, E>),
    MouseUp(MouseClick<'a, E>),
    ContextMenu(MouseClick<'a, E>),
    Click(MouseClick<'a, E>),
    Wheel(Wheel<'a, E>),
    WindowResize(WindowResize<'a, E>),
    KeyDown(Keyboard<'a, E>),
    KeyUp(Keyboard<'a, E>),
    ContainerUpdate(ContainerUpdate),
    DragStart(DragInfo<E>),
    Drag(DragInfo<E>),
    DragEnd(DragInfo<E>),
    DragEnter(DropInfo<E>),
    DragOver(DropInfo<E>),
    DragLeave(DropInfo<E>),
    Drop(DropInfo<E>),
}

impl<E> GestureEvent<'_, E> {
    pub fn topic(&self) -> Topic {
        match self {
            Self::MouseMove(_) => Topic::MouseMove,
            Self::MouseDown(_) => Topic::MouseDown,
            Self::MouseUp(_) => Topic::MouseUp,
            Self::ContextMenu(_) => Topic::ContextMenu,
            Self::Click(_) => Topic::Click,
            Self::Wheel(_) => Topic::Wheel,
            Self::WindowResize(_) => Topic::WindowResize,
            Self::KeyDown(_) => Topic::KeyDown,
            Self::KeyUp(_) => Topic::KeyUp,
            Self::ContainerUpdate(_) => Topic::ContainerUpdate,
            Self::DragStart(_) => Topic::DragStart,
            Self::Drag(_) => Topic::Drag,
            Self::DragEnd(_) => Topic::DragEnd,
            Self::DragEnter(_) => Topic::DragEnter,
            Self::DragOver(_) => Topic::DragOver,
            Self::DragLeave(_) => Topic::DragLeave,
            Self::Drop(_) => Topic::Drop,
        }
    }

    /// Container-relative position, for events that have one.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove(e) => Some(e.position),
            Self::MouseDown(e) | Self::MouseUp(e) | Self::ContextMenu(e) | Self::Click(e) => {
                Some(e.position)
            }
            Self::Wheel(e) => Some(e.position),
            Self::DragStart(e) | Self::Drag(e) | Self::DragEnd(e) => Some(e.position),
            Self::DragEnter(e) | Self::DragOver(e) | Self::DragLeave(e) | Self::Drop(e) => {
                Some(e.position)
            }
            Self::WindowResize(_) | Self::KeyDown(_) | Self::KeyUp(_) | Self::ContainerUpdate(_) => {
                None
            }
        }
    }

    /// Whether this event was produced by gesture synthesis rather than
    /// normalized from a single native event.
    pub fn is_synthetic(&self) -> bool {
        self.topic().is_synthetic()
    }
}

/// Named publish/subscribe topics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    MouseMove,
    MouseDown,
    MouseUp,
    ContextMenu,
    Click,
    Wheel,
    WindowResize,
    KeyDown,
    KeyUp,
    ContainerUpdate,
    DragStart,
    Drag,
    DragEnd,
    DragEnter,
    DragOver,
    DragLeave,
    Drop,
}

impl Topic {
    pub const ALL: [Topic; 17] = [
        Topic::MouseMove,
        Topic::MouseDown,
        Topic::MouseUp,
        Topic::ContextMenu,
        Topic::Click,
        Topic::Wheel,
        Topic::WindowResize,
        Topic::KeyDown,
        Topic::KeyUp,
        Topic::ContainerUpdate,
        Topic::DragStart,
        Topic::Drag,
        Topic::DragEnd,
        Topic::DragEnter,
        Topic::DragOver,
        Topic::DragLeave,
        Topic::Drop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::MouseMove => "mousemove",
            Topic::MouseDown => "mousedown",
            Topic::MouseUp => "mouseup",
            Topic::ContextMenu => "contextmenu",
            Topic::Click => "click",
            Topic::Wheel => "wheel",
            Topic::WindowResize => "resize",
            Topic::KeyDown => "keydown",
            Topic::KeyUp => "keyup",
            Topic::ContainerUpdate => "containerupdate",
            Topic::DragStart => "dragstart",
            Topic::Drag => "drag",
            Topic::DragEnd => "dragend",
            Topic::DragEnter => "dragenter",
            Topic::DragOver => "dragover",
            Topic::DragLeave => "dragleave",
            Topic::Drop => "drop",
        }
    }

    pub fn is_synthetic(self) -> bool {
        matches!(
            self,
            Topic::Click
                | Topic::DragStart
                | Topic::Drag
                | Topic::DragEnd
                | Topic::DragEnter
                | Topic::DragOver
                | Topic::DragLeave
                | Topic::Drop
        )
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| format!("unknown topic: {s}"))
    }
}

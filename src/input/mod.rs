//! Pointer and keyboard input handling for the diagram editor.
//!
//! This module turns native input into the normalized and synthetic event
//! stream consumed by the action dispatcher.
//!
//! ## Architecture
//!
//! ```text
//! NativeEvent -> normalize -> GestureEngine (state) -> EventBus -> subscribers
//! ```
//!
//! Click-vs-drag disambiguation, coordinate conversion and z-ordered drop-zone
//! hit testing are all built from primitive mouse events; native drag-and-drop
//! is not used.
//!
//! ## Modules
//!
//! - `coords` - Coordinate spaces and pure geometry
//! - `native` - Raw input as delivered by the host
//! - `events` - Normalized/synthetic events and topics
//! - `target` - Marker ancestor walk and point hit testing
//! - `normalize` - One adapter per native event kind
//! - `state` - Gesture state
//! - `engine` - Construction, dispatch, teardown
//! - `mouse_down` - Arm potential click/drag
//! - `drag` - Drag promotion, drag updates, drop-zone tracking
//! - `mouse_up` - Drop, drag-end and click

pub mod coords;
mod drag;
mod engine;
mod events;
mod mouse_down;
mod mouse_up;
mod native;
mod normalize;
mod state;
mod target;

pub use engine::{GestureEngine, ListenerRegistration};
pub use events::{
    ContainerUpdate, DragInfo, DropInfo, GestureEvent, Keyboard, MouseClick, NormalizedTarget,
    PointerMove, Topic, Wheel, WindowResize,
};
pub use native::{EventTarget, KeyInput, NativeEvent, NativeEventKind, NativeInput, PointerInput, WheelInput};
pub use normalize::{NormalizeContext, normalize};
pub use target::{HitTestFn, TargetResolver};

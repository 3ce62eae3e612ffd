//! Pointer gesture synthesis for an embeddable diagram editor.
//!
//! The engine listens to primitive mouse, keyboard and resize input on a
//! [`Surface`], normalizes it into container-relative events and synthesizes
//! click and drag-and-drop gestures on top. Everything is published on a
//! named-topic [`EventBus`](bus::EventBus).
//!
//! ```ignore
//! let mut engine = GestureEngine::new(scene, container, GestureSettings::default())?;
//! engine.subscribe(Topic::Drop, |event| { /* ... */ });
//! engine.handle(&NativeEvent::mouse_down(target, client, MouseButton::Primary));
//! ```

pub mod perf;

pub mod bus;
pub mod constants;
pub mod error;
pub mod input;
pub mod scene;
pub mod settings;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use bus::{EventBus, SubscriptionId};
pub use error::{GestureError, GestureResult};
pub use input::{EventTarget, GestureEngine, GestureEvent, NativeEvent, Topic};
pub use scene::{ElementId, ElementSpec, Scene};
pub use settings::{GestureSettings, MarkerAttributes};
pub use surface::{ListenerContext, ListenerHandle, Surface};
pub use types::{Modifiers, MouseButton, Platform, Point, Rect, Size};

//! Element capability interface.
//!
//! [`Surface`] is everything the gesture engine needs from whatever renders the
//! diagram: attribute reads, parent links, bounding rectangles, viewport and
//! scroll queries, a z-ordered element stack at a point, and native listener
//! registration. A browser host implements it over the DOM; [`crate::scene::Scene`]
//! implements it in memory.

use crate::input::NativeEventKind;
use crate::types::{Platform, Point, Rect, Size};
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Where a native listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerContext {
    /// The editor's root container element
    Container,
    /// The whole document, so drags keep tracking outside the container
    Document,
    /// The browser window (resize)
    Window,
}

/// Opaque token returned by [`Surface::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

pub trait Surface {
    /// Non-owning element handle. Lookups through a handle whose element has
    /// gone away must fail softly (return `None`/`false`).
    type Element: Copy + Eq + Hash + Debug;

    /// Whether the element is currently part of the rendered tree.
    fn is_attached(&self, element: Self::Element) -> bool;

    fn attribute(&self, element: Self::Element, name: &str) -> Option<Cow<'_, str>>;

    fn has_attribute(&self, element: Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Viewport-relative bounding rectangle (`getBoundingClientRect`).
    fn bounding_rect(&self, element: Self::Element) -> Option<Rect>;

    /// The document's root element (`<html>` in a browser).
    fn document_root(&self) -> Self::Element;

    /// The focused element, if any.
    fn active_element(&self) -> Option<Self::Element>;

    fn scroll_offset(&self) -> Point;

    fn viewport_size(&self) -> Size;

    fn platform(&self) -> Platform {
        Platform::Other
    }

    /// Elements under a screen point, topmost first. `None` when the
    /// capability is unavailable.
    fn elements_from_point(&self, point: Point) -> Option<Vec<Self::Element>>;

    /// Older equivalent of [`Surface::elements_from_point`].
    fn legacy_elements_from_point(&self, _point: Point) -> Option<Vec<Self::Element>> {
        None
    }

    fn add_listener(&mut self, context: ListenerContext, kind: NativeEventKind) -> ListenerHandle;

    fn remove_listener(&mut self, handle: ListenerHandle);
}

//! Target resolution - marker ancestor walk and z-ordered point hit testing.
//!
//! ## Performance Notes
//!
//! The ancestor walk is O(depth). The point hit test is one element-stack
//! query plus a linear scan; it runs on every mouse move during a drag.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::coords::{CoordinateContext, CoordinateConverter, point_in_rect};
use super::events::NormalizedTarget;
use super::native::EventTarget;
use crate::profile_scope;
use crate::settings::MarkerAttributes;
use crate::surface::Surface;
use crate::types::{Point, Rect};

/// Injected replacement for the surface's element-stack-at-point query.
pub type HitTestFn<E> = Box<dyn Fn(Point) -> Vec<E>>;

pub struct TargetResolver<E> {
    markers: MarkerAttributes,
    hit_test: Option<HitTestFn<E>>,
}

impl<E: Copy + Eq> TargetResolver<E> {
    pub fn new(markers: MarkerAttributes) -> Self {
        Self {
            markers,
            hit_test: None,
        }
    }

    /// Use `hit_test` instead of the surface's own element-stack query.
    pub fn with_hit_test(mut self, hit_test: HitTestFn<E>) -> Self {
        self.set_hit_test(hit_test);
        self
    }

    pub fn set_hit_test(&mut self, hit_test: HitTestFn<E>) {
        self.hit_test = Some(hit_test);
    }

    pub fn markers(&self) -> &MarkerAttributes {
        &self.markers
    }

    /// Walk from `target` up the parent chain to the first element bearing
    /// `marker` (and, if given, carrying exactly `value`).
    ///
    /// A document-level target reported for a pointer outside the viewport is
    /// remapped to the document root, which is accepted without a marker.
    pub fn resolve<S>(
        &self,
        surface: &S,
        target: EventTarget<E>,
        client: Point,
        marker: &str,
        value: Option<&str>,
    ) -> Option<E>
    where
        S: Surface<Element = E>,
    {
        let mut current = match target {
            EventTarget::Element(element) => element,
            EventTarget::Document => {
                let viewport = Rect::from_origin_size(Point::ZERO, surface.viewport_size());
                if point_in_rect(client, &viewport) {
                    return None;
                }
                return Some(surface.document_root());
            }
        };

        loop {
            if Self::bears_marker(surface, current, marker, value) {
                return Some(current);
            }
            current = surface.parent(current)?;
        }
    }

    fn bears_marker<S>(surface: &S, element: E, marker: &str, value: Option<&str>) -> bool
    where
        S: Surface<Element = E>,
    {
        match (surface.attribute(element, marker), value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Build the normalized target for an element from its id/type markers.
    pub fn normalize_target<S>(&self, surface: &S, element: E) -> NormalizedTarget<E>
    where
        S: Surface<Element = E>,
    {
        NormalizedTarget {
            element,
            id: surface
                .attribute(element, &self.markers.id)
                .map(|v| v.into_owned()),
            kind: surface
                .attribute(element, &self.markers.type_)
                .map(|v| v.into_owned()),
        }
    }

    /// Keyboard guard: the element itself must carry the editor-root marker.
    pub fn is_editor_root<S>(&self, surface: &S, element: E) -> bool
    where
        S: Surface<Element = E>,
    {
        surface.has_attribute(element, &self.markers.root)
    }

    /// Elements under a screen point, topmost first.
    ///
    /// Tries the injected strategy, then the surface's standard query, then
    /// its legacy one. With none available the stack is empty.
    pub fn elements_at<S>(&self, surface: &S, screen: Point) -> Vec<E>
    where
        S: Surface<Element = E>,
    {
        if let Some(ref hit_test) = self.hit_test {
            return hit_test(screen);
        }
        surface
            .elements_from_point(screen)
            .or_else(|| surface.legacy_elements_from_point(screen))
            .unwrap_or_default()
    }

    /// Topmost drop zone under a container-relative position.
    ///
    /// During a drag the native target is the dragged visual itself, so this
    /// looks at the whole stack rather than walking ancestors.
    pub fn drop_zone_at<S>(
        &self,
        surface: &S,
        position: Point,
        context_offset: Point,
    ) -> Option<NormalizedTarget<E>>
    where
        S: Surface<Element = E>,
    {
        profile_scope!("drop_zone_at");

        let ctx = CoordinateContext::new(surface.scroll_offset(), context_offset);
        let screen = CoordinateConverter::container_to_screen(position, &ctx);
        self.elements_at(surface, screen)
            .into_iter()
            .find(|&element| surface.has_attribute(element, &self.markers.dropzone))
            .map(|element| self.normalize_target(surface, element))
    }
}

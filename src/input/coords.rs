//! Coordinate conversion utilities for pointer interactions.
//!
//! Four coordinate spaces are involved:
//!
//! - **Screen**: viewport-relative (`clientX/clientY`).
//! - **Page**: document-relative, screen plus scroll.
//! - **Container**: page minus the container's page position.
//! - **Workspace**: container adjusted by pan/zoom. Owned by whoever keeps the
//!   pan/zoom state; nothing here converts into it.
//!
//! All functions are pure.

use crate::types::{Point, Rect};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinateContext {
    /// Document scroll position
    pub scroll: Point,
    /// Page position of the container's top-left corner
    pub context_offset: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(scroll: Point, context_offset: Point) -> Self {
        Self {
            scroll,
            context_offset,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to container position
    #[inline]
    pub fn screen_to_container(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        page_to_container(screen_to_page(screen_pos, ctx.scroll), ctx.context_offset)
    }

    /// Convert container position to screen position
    #[inline]
    pub fn container_to_screen(container_pos: Point, ctx: &CoordinateContext) -> Point {
        page_to_screen(container_to_page(container_pos, ctx.context_offset), ctx.scroll)
    }
}

/// `a + b`.
#[inline]
pub fn add(a: Point, b: Point) -> Point {
    a + b
}

/// `a` relative to `b`, i.e. `a - b`. Order matters.
#[inline]
pub fn relative(a: Point, b: Point) -> Point {
    a - b
}

#[inline]
pub fn screen_to_page(screen_pos: Point, scroll: Point) -> Point {
    add(screen_pos, scroll)
}

#[inline]
pub fn page_to_screen(page_pos: Point, scroll: Point) -> Point {
    relative(page_pos, scroll)
}

#[inline]
pub fn page_to_container(page_pos: Point, context_offset: Point) -> Point {
    relative(page_pos, context_offset)
}

#[inline]
pub fn container_to_page(container_pos: Point, context_offset: Point) -> Point {
    add(container_pos, context_offset)
}

/// Point at `t = 0.5` on the quadratic Bézier `p0 -> control -> p2`.
#[inline]
pub fn quadratic_bezier_center(p0: Point, control: Point, p2: Point) -> Point {
    p0 * 0.25 + control * 0.5 + p2 * 0.25
}

/// Main axis of a curved edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Where an S-shaped edge between `start` and `end` switches curvature.
#[inline]
pub fn inflection_point(start: Point, end: Point) -> Point {
    Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0)
}

/// Control points of the two quadratic segments forming an S-shaped edge.
///
/// The first segment runs `start -> first -> inflection`, the second
/// `inflection -> second -> end`, so the edge leaves and enters along the
/// flow axis.
pub fn curve_controls(start: Point, end: Point, direction: FlowDirection) -> (Point, Point) {
    let mid = inflection_point(start, end);
    match direction {
        FlowDirection::Horizontal => (Point::new(mid.x, start.y), Point::new(mid.x, end.y)),
        FlowDirection::Vertical => (Point::new(start.x, mid.y), Point::new(end.x, mid.y)),
    }
}

/// Closed-interval containment: points on any edge count as inside.
#[inline]
pub fn point_in_rect(p: Point, rect: &Rect) -> bool {
    p.x >= rect.min_x() && p.x <= rect.max_x() && p.y >= rect.min_y() && p.y <= rect.max_y()
}

/// Position closest to `inner.origin` such that `inner`, grown by `margin` on
/// every side, stays within `outer`.
///
/// When the grown rectangle cannot fit on an axis, it is centred in `outer`
/// along that axis.
pub fn constrain_rect_within_rect(inner: &Rect, outer: &Rect, margin: f32) -> Point {
    Point::new(
        clamp_axis(
            inner.origin.x,
            outer.min_x() + margin,
            outer.max_x() - inner.size.width - margin,
        ),
        clamp_axis(
            inner.origin.y,
            outer.min_y() + margin,
            outer.max_y() - inner.size.height - margin,
        ),
    )
}

#[inline]
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) / 2.0
    } else {
        // Not f32::clamp: a NaN bound must not panic.
        value.max(min).min(max)
    }
}

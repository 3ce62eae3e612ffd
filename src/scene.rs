//! In-memory retained element tree implementing [`Surface`].
//!
//! Lets non-browser hosts (native canvases, headless tests) drive the gesture
//! engine. Elements are laid out in page coordinates; [`Surface::bounding_rect`]
//! reports them viewport-relative like `getBoundingClientRect`.
//!
//! Stacking: a higher `z_index` paints above a lower one; within the same
//! `z_index`, later insertions paint above earlier ones. The document root is
//! always the bottom of every hit-test stack.

use crate::input::NativeEventKind;
use crate::spatial_index::SpatialIndex;
use crate::surface::{ListenerContext, ListenerHandle, Surface};
use crate::types::{Platform, Point, Rect, Size};
use std::borrow::Cow;
use std::collections::HashMap;

/// Handle to a scene element. Stays valid as a value after the element is
/// removed; lookups through it then fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// Description of an element to insert.
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    pub rect: Rect,
    pub z_index: i32,
    pub attributes: Vec<(String, String)>,
}

impl ElementSpec {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[derive(Debug)]
struct Node {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: HashMap<String, String>,
    /// Page coordinates
    rect: Rect,
    z_index: i32,
    paint_order: u64,
}

pub struct Scene {
    nodes: HashMap<ElementId, Node>,
    root: ElementId,
    index: SpatialIndex,
    next_id: u64,
    scroll: Point,
    viewport: Size,
    platform: Platform,
    focused: Option<ElementId>,
    listeners: HashMap<ListenerHandle, (ListenerContext, NativeEventKind)>,
    next_listener: u64,
    legacy_only: bool,
}

impl Scene {
    pub fn new(viewport: Size) -> Self {
        let root = ElementId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                parent: None,
                children: Vec::new(),
                attributes: HashMap::new(),
                rect: Rect::from_origin_size(Point::ZERO, viewport),
                z_index: 0,
                paint_order: 0,
            },
        );
        Self {
            nodes,
            root,
            index: SpatialIndex::new(),
            next_id: 1,
            scroll: Point::ZERO,
            viewport,
            platform: Platform::Other,
            focused: None,
            listeners: HashMap::new(),
            next_listener: 0,
            legacy_only: false,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Answer hit tests only through the legacy query, as older engines do.
    pub fn with_legacy_hit_testing(mut self) -> Self {
        self.legacy_only = true;
        self
    }

    /// Insert a new element under `parent`. Returns `None` if `parent` is gone.
    pub fn try_insert(&mut self, parent: ElementId, spec: ElementSpec) -> Option<ElementId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;

        self.index.insert(id.0, &spec.rect);
        self.nodes.insert(
            id,
            Node {
                parent: Some(parent),
                children: Vec::new(),
                attributes: spec.attributes.into_iter().collect(),
                rect: spec.rect,
                z_index: spec.z_index,
                paint_order: id.0,
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        Some(id)
    }

    /// Insert a new element under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` has been removed.
    pub fn insert(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        match self.try_insert(parent, spec) {
            Some(id) => id,
            None => panic!("parent {parent:?} is not in the scene"),
        }
    }

    /// Remove an element and its whole subtree. The root cannot be removed.
    pub fn remove(&mut self, element: ElementId) -> bool {
        if element == self.root {
            return false;
        }
        let Some(node) = self.nodes.remove(&element) else {
            return false;
        };
        self.index.remove(element.0);
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|&c| c != element);
        }
        if self.focused == Some(element) {
            self.focused = None;
        }
        for child in node.children {
            self.remove(child);
        }
        true
    }

    /// Move/resize an element (page coordinates).
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if element == self.root {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&element) {
            node.rect = rect;
            self.index.insert(element.0, &rect);
        }
    }

    pub fn set_attribute(&mut self, element: ElementId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.insert(name.into(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, element: ElementId, name: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.attributes.remove(name);
        }
    }

    pub fn focus(&mut self, element: Option<ElementId>) {
        self.focused = element.filter(|e| self.nodes.contains_key(e));
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        if let Some(root) = self.nodes.get_mut(&self.root) {
            root.rect.size = viewport;
        }
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(&element)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Whether any live listener is registered for `kind`.
    pub fn is_listening(&self, kind: NativeEventKind) -> bool {
        self.listeners.values().any(|&(_, k)| k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn stack_at(&self, screen: Point) -> Vec<ElementId> {
        let page = screen + self.scroll;
        let mut hits: Vec<(i32, u64, ElementId)> = self
            .index
            .query_point(page)
            .into_iter()
            .filter_map(|key| {
                let id = ElementId(key);
                self.nodes.get(&id).map(|n| (n.z_index, n.paint_order, id))
            })
            .collect();
        hits.sort_unstable_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));

        let mut stack: Vec<ElementId> = hits.into_iter().map(|(_, _, id)| id).collect();
        stack.push(self.root);
        stack
    }
}

impl Surface for Scene {
    type Element = ElementId;

    fn is_attached(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<Cow<'_, str>> {
        self.nodes
            .get(&element)?
            .attributes
            .get(name)
            .map(|v| Cow::Borrowed(v.as_str()))
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element)?.parent
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let rect = self.nodes.get(&element)?.rect;
        Some(Rect::from_origin_size(rect.origin - self.scroll, rect.size))
    }

    fn document_root(&self) -> ElementId {
        self.root
    }

    fn active_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn elements_from_point(&self, point: Point) -> Option<Vec<ElementId>> {
        if self.legacy_only {
            return None;
        }
        Some(self.stack_at(point))
    }

    fn legacy_elements_from_point(&self, point: Point) -> Option<Vec<ElementId>> {
        Some(self.stack_at(point))
    }

    fn add_listener(&mut self, context: ListenerContext, kind: NativeEventKind) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(handle, (context, kind));
        handle
    }

    fn remove_listener(&mut self, handle: ListenerHandle) {
        self.listeners.remove(&handle);
    }
}

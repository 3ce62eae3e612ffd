//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder for a scene with a container, nodes and drop zones
//! - `TestEditor` - Engine harness that picks native targets by hit testing
//! - `EventLog` - Records every published event as a short description

use diagram_gestures::input::{GestureEvent, NormalizedTarget};
use diagram_gestures::{
    ElementId, ElementSpec, EventTarget, GestureEngine, GestureSettings, MouseButton, NativeEvent,
    Point, Rect, Scene, Size, Surface, Topic,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const VIEWPORT: Size = Size::new(1024.0, 768.0);

/// Page rectangle of the editor container.
pub const CONTAINER: Rect = Rect::new(40.0, 20.0, 800.0, 600.0);

/// Route engine logs to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TestEditorBuilder
// ============================================================================

/// Builder for a scene holding one editor container.
///
/// # Example
/// ```ignore
/// let mut editor = TestEditorBuilder::new()
///     .with_node("a", (100.0, 100.0, 80.0, 40.0), true)
///     .with_dropzone("zone-1", (100.0, 300.0, 200.0, 150.0))
///     .build();
/// ```
pub struct TestEditorBuilder {
    nodes: Vec<(String, Rect, bool)>,
    handles: Vec<(String, Rect)>,
    dropzones: Vec<(String, Rect)>,
    scene: Scene,
    settings: GestureSettings,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            handles: Vec::new(),
            dropzones: Vec::new(),
            scene: Scene::new(VIEWPORT),
            settings: GestureSettings::default(),
        }
    }

    /// Add an interactive node. Page coordinates.
    pub fn with_node(mut self, id: &str, rect: (f32, f32, f32, f32), draggable: bool) -> Self {
        self.nodes.push((id.to_string(), Rect::new(rect.0, rect.1, rect.2, rect.3), draggable));
        self
    }

    /// Add a drag handle: draggable, but without the interactive marker.
    pub fn with_handle(mut self, id: &str, rect: (f32, f32, f32, f32)) -> Self {
        self.handles.push((id.to_string(), Rect::new(rect.0, rect.1, rect.2, rect.3)));
        self
    }

    pub fn with_dropzone(mut self, id: &str, rect: (f32, f32, f32, f32)) -> Self {
        self.dropzones.push((id.to_string(), Rect::new(rect.0, rect.1, rect.2, rect.3)));
        self
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    pub fn with_settings(mut self, settings: GestureSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> TestEditor {
        init_tracing();

        let mut scene = self.scene;
        let root = scene.document_root();
        let container = scene.insert(
            root,
            ElementSpec::new(CONTAINER).attr("data-editor-root", ""),
        );

        let mut ids = HashMap::new();
        for (id, rect) in self.dropzones {
            let zone = scene.insert(
                container,
                ElementSpec::new(rect)
                    .attr("data-dropzone", "")
                    .attr("data-id", id.as_str())
                    .attr("data-type", "group"),
            );
            ids.insert(id, zone);
        }
        for (id, rect, draggable) in self.nodes {
            let mut spec = ElementSpec::new(rect)
                .attr("data-interactive", "")
                .attr("data-id", id.as_str())
                .attr("data-type", "node");
            if draggable {
                spec = spec.attr("data-draggable", "");
            }
            ids.insert(id, scene.insert(container, spec));
        }
        for (id, rect) in self.handles {
            let handle = scene.insert(
                container,
                ElementSpec::new(rect)
                    .attr("data-draggable", "")
                    .attr("data-id", id.as_str()),
            );
            ids.insert(id, handle);
        }

        let mut engine = GestureEngine::new(scene, container, self.settings)
            .expect("container is attached");
        let log = EventLog::attach(&mut engine);
        TestEditor { engine, log, ids }
    }
}

// ============================================================================
// TestEditor
// ============================================================================

pub struct TestEditor {
    pub engine: GestureEngine<Scene>,
    pub log: EventLog,
    ids: HashMap<String, ElementId>,
}

impl TestEditor {
    pub fn element(&self, id: &str) -> ElementId {
        self.ids[id]
    }

    pub fn container(&self) -> ElementId {
        self.engine.container()
    }

    /// Topmost element under a viewport point, as a browser would report it.
    pub fn target_at(&self, client: (f32, f32)) -> EventTarget<ElementId> {
        let surface = self.engine.surface();
        surface
            .legacy_elements_from_point(Point::from(client))
            .and_then(|stack| stack.first().copied())
            .map_or(EventTarget::Document, EventTarget::Element)
    }

    pub fn press(&mut self, client: (f32, f32)) {
        self.press_button(client, MouseButton::Primary);
    }

    pub fn press_button(&mut self, client: (f32, f32), button: MouseButton) {
        let target = self.target_at(client);
        self.engine
            .handle(&NativeEvent::mouse_down(target, Point::from(client), button));
    }

    pub fn move_to(&mut self, client: (f32, f32)) {
        let target = self.target_at(client);
        self.engine
            .handle(&NativeEvent::mouse_move(target, Point::from(client)));
    }

    pub fn release(&mut self, client: (f32, f32)) {
        self.release_button(client, MouseButton::Primary);
    }

    pub fn release_button(&mut self, client: (f32, f32), button: MouseButton) {
        let target = self.target_at(client);
        self.engine
            .handle(&NativeEvent::mouse_up(target, Point::from(client), button));
    }

    /// Release with a document-level target, as reported when the pointer
    /// leaves the window.
    pub fn release_on_document(&mut self, client: (f32, f32)) {
        self.engine.handle(&NativeEvent::mouse_up(
            EventTarget::Document,
            Point::from(client),
            MouseButton::Primary,
        ));
    }

    /// Drain the log, joined one event per line.
    pub fn take_log(&self) -> String {
        self.log.take().join("\n")
    }
}

impl Drop for TestEditor {
    fn drop(&mut self) {
        self.engine.destroy();
    }
}

// ============================================================================
// EventLog
// ============================================================================

/// Shared record of published events, one short line each.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    /// Subscribe to every topic.
    pub fn attach(engine: &mut GestureEngine<Scene>) -> Self {
        let log = Self::default();
        for topic in Topic::ALL {
            let sink = log.clone();
            engine.subscribe(topic, move |event| sink.0.borrow_mut().push(describe(event)));
        }
        log
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn topics(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(|line| line.split(' ').next().unwrap_or_default().to_string())
            .collect()
    }
}

fn id_of(target: &NormalizedTarget<ElementId>) -> &str {
    target.id.as_deref().unwrap_or("-")
}

/// `topic [target] [dropzone]`
pub fn describe(event: &GestureEvent<'_, ElementId>) -> String {
    let topic = event.topic();
    match event {
        GestureEvent::MouseDown(e)
        | GestureEvent::MouseUp(e)
        | GestureEvent::ContextMenu(e)
        | GestureEvent::Click(e) => format!("{topic} {}", id_of(&e.target)),
        GestureEvent::DragStart(e) | GestureEvent::Drag(e) | GestureEvent::DragEnd(e) => {
            format!("{topic} {}", id_of(&e.target))
        }
        GestureEvent::DragEnter(e)
        | GestureEvent::DragOver(e)
        | GestureEvent::DragLeave(e)
        | GestureEvent::Drop(e) => format!("{topic} {} {}", id_of(&e.target), id_of(&e.dropzone)),
        GestureEvent::KeyDown(e) | GestureEvent::KeyUp(e) => format!("{topic} {}", e.key),
        _ => topic.to_string(),
    }
}

/// Editor with draggable `a`, static `b` and two side-by-side drop zones.
pub fn standard_editor() -> TestEditor {
    TestEditorBuilder::new()
        .with_dropzone("zone-1", (100.0, 300.0, 200.0, 150.0))
        .with_dropzone("zone-2", (400.0, 300.0, 200.0, 150.0))
        .with_node("a", (100.0, 100.0, 80.0, 40.0), true)
        .with_node("b", (300.0, 100.0, 80.0, 40.0), false)
        .build()
}

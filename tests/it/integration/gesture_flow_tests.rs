//! Click and drag-and-drop synthesis, driven through full pointer sequences.

use crate::helpers::{EventLog, TestEditorBuilder, VIEWPORT, standard_editor};
use diagram_gestures::input::DragInfo;
use diagram_gestures::{
    ElementId, ElementSpec, GestureEngine, GestureEvent, GestureSettings, MouseButton, NativeEvent,
    Point, Rect, Scene, Surface, Topic,
};
use insta::assert_snapshot;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_click_is_published_before_mouseup() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.release((120.0, 110.0));

    assert_snapshot!(editor.take_log(), @r"
    mousedown a
    click a
    mouseup a
    ");
}

#[test]
fn test_click_on_static_node_survives_pointer_jitter() {
    let mut editor = standard_editor();
    editor.press((320.0, 110.0));
    editor.move_to((330.0, 120.0));
    editor.release((330.0, 120.0));

    assert_snapshot!(editor.take_log(), @r"
    mousedown b
    mousemove
    click b
    mouseup b
    ");
}

#[test]
fn test_release_on_other_target_is_not_a_click() {
    let mut editor = standard_editor();
    editor.press((320.0, 110.0));
    editor.release((120.0, 110.0));

    assert_snapshot!(editor.take_log(), @r"
    mousedown b
    mouseup a
    ");
}

#[test]
fn test_unmarked_elements_publish_nothing() {
    let mut editor = standard_editor();
    editor.press((600.0, 500.0));
    editor.release((600.0, 500.0));
    let target = editor.target_at((600.0, 500.0));
    editor
        .engine
        .handle(&NativeEvent::context_menu(target, Point::new(600.0, 500.0)));

    assert_eq!(editor.take_log(), "");
}

#[test]
fn test_context_menu_on_node() {
    let mut editor = standard_editor();
    let target = editor.target_at((120.0, 110.0));
    editor
        .engine
        .handle(&NativeEvent::context_menu(target, Point::new(120.0, 110.0)));

    assert_eq!(editor.take_log(), "contextmenu a");
}

#[test]
fn test_secondary_button_never_clicks_or_drags() {
    let mut editor = standard_editor();
    editor.press_button((120.0, 110.0), MouseButton::Secondary);
    editor.move_to((130.0, 120.0));
    editor.release_button((130.0, 120.0), MouseButton::Secondary);

    assert_snapshot!(editor.take_log(), @r"
    mousedown a
    mousemove
    mouseup a
    ");
}

#[test]
fn test_press_and_release_without_move_never_drags() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.release((120.0, 110.0));
    editor.log.take();

    editor.move_to((150.0, 350.0));
    assert_eq!(editor.log.topics(), vec!["mousemove"]);
}

#[test]
fn test_full_drag_and_drop_sequence() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.move_to((130.0, 120.0));
    editor.move_to((150.0, 350.0));
    editor.move_to((160.0, 360.0));
    editor.move_to((450.0, 350.0));
    editor.move_to((700.0, 200.0));
    editor.move_to((150.0, 350.0));
    editor.release((150.0, 350.0));

    assert_snapshot!(editor.take_log(), @r"
    mousedown a
    dragstart a
    drag a
    mousemove
    drag a
    dragenter a zone-1
    mousemove
    drag a
    dragover a zone-1
    mousemove
    drag a
    dragenter a zone-2
    mousemove
    drag a
    dragleave a zone-2
    mousemove
    drag a
    dragenter a zone-1
    mousemove
    drop a zone-1
    dragend a
    ");
}

#[test]
fn test_release_outside_drop_zone_only_ends_drag() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.move_to((125.0, 115.0));
    editor.log.take();

    editor.release((125.0, 115.0));
    assert_snapshot!(editor.take_log(), @r"
    dragend a
    mouseup a
    ");

    // The gesture is over.
    editor.move_to((150.0, 350.0));
    assert_eq!(editor.take_log(), "mousemove");
}

#[test]
fn test_drag_payload_offsets() {
    let mut editor = standard_editor();
    let starts: Rc<RefCell<Vec<DragInfo<ElementId>>>> = Rc::default();
    let sink = starts.clone();
    editor.engine.subscribe(Topic::DragStart, move |event| {
        if let GestureEvent::DragStart(info) = event {
            sink.borrow_mut().push(info.clone());
        }
    });

    editor.press((120.0, 110.0));
    editor.move_to((130.0, 125.0));

    let starts = starts.borrow();
    assert_eq!(starts.len(), 1);
    let info = &starts[0];
    assert_eq!(info.target.id.as_deref(), Some("a"));
    assert_eq!(info.target.kind.as_deref(), Some("node"));
    assert_eq!(info.position, Point::new(90.0, 105.0));
    assert_eq!(info.offset, Some(Point::new(20.0, 10.0)));
    assert_eq!(info.drag_reference, Some(Point::new(60.0, 80.0)));
}

#[test]
fn test_positions_are_scroll_invariant() {
    let mut editor = standard_editor();
    let positions: Rc<RefCell<Vec<Point>>> = Rc::default();
    let sink = positions.clone();
    editor.engine.subscribe(Topic::MouseDown, move |event| {
        sink.borrow_mut().extend(event.position());
    });

    editor.engine.surface_mut().set_scroll(Point::new(0.0, 50.0));
    editor.press((120.0, 60.0));

    assert_eq!(*positions.borrow(), vec![Point::new(80.0, 90.0)]);
    assert_eq!(editor.take_log(), "mousedown a");
}

#[test]
fn test_release_outside_viewport_drops_and_ends_drag() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.log.take();

    editor.release_on_document((-20.0, 900.0));
    assert_snapshot!(editor.take_log(), @r"
    drop a zone-1
    dragend a
    mouseup -
    ");
}

#[test]
fn test_document_release_inside_viewport_still_ends_drag() {
    let mut editor = standard_editor();
    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.log.take();

    editor.release_on_document((500.0, 500.0));
    assert_snapshot!(editor.take_log(), @r"
    drop a zone-1
    dragend a
    ");

    editor.move_to((160.0, 360.0));
    assert_eq!(editor.take_log(), "mousemove");
}

#[test]
fn test_topmost_drop_zone_wins() {
    let mut editor = TestEditorBuilder::new()
        .with_dropzone("outer", (100.0, 300.0, 400.0, 200.0))
        .with_dropzone("inner", (150.0, 350.0, 100.0, 100.0))
        .with_node("a", (100.0, 100.0, 80.0, 40.0), true)
        .build();

    editor.press((120.0, 110.0));
    editor.move_to((120.0, 320.0));
    editor.move_to((200.0, 400.0));
    editor.move_to((120.0, 320.0));

    let log = editor.take_log();
    let zones: Vec<&str> = log.lines().filter(|l| l.starts_with("dragenter")).collect();
    assert_eq!(zones, vec!["dragenter a outer", "dragenter a inner", "dragenter a outer"]);
}

#[test]
fn test_legacy_hit_testing_still_tracks_drop_zones() {
    let mut editor = TestEditorBuilder::new()
        .with_scene(Scene::new(VIEWPORT).with_legacy_hit_testing())
        .with_dropzone("zone-1", (100.0, 300.0, 200.0, 150.0))
        .with_node("a", (100.0, 100.0, 80.0, 40.0), true)
        .build();

    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.release((150.0, 350.0));

    let log = editor.take_log();
    assert!(log.contains("dragenter a zone-1"));
    assert!(log.contains("drop a zone-1"));
}

#[test]
fn test_injected_hit_test_replaces_surface_query() {
    let mut scene = Scene::new(VIEWPORT);
    let root = scene.document_root();
    let container = scene.insert(root, ElementSpec::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
    let zone = scene.insert(
        container,
        ElementSpec::new(Rect::new(600.0, 400.0, 100.0, 100.0))
            .attr("data-dropzone", "")
            .attr("data-id", "far-zone"),
    );
    let node = scene.insert(
        container,
        ElementSpec::new(Rect::new(10.0, 10.0, 50.0, 50.0))
            .attr("data-interactive", "")
            .attr("data-draggable", "")
            .attr("data-id", "a"),
    );

    let mut engine = GestureEngine::new(scene, container, GestureSettings::default())
        .unwrap()
        .with_hit_test(move |_| vec![zone]);
    let log = EventLog::attach(&mut engine);

    let target = diagram_gestures::EventTarget::Element(node);
    engine.handle(&NativeEvent::mouse_down(target, Point::new(20.0, 20.0), MouseButton::Primary));
    engine.handle(&NativeEvent::mouse_move(target, Point::new(25.0, 25.0)));
    engine.handle(&NativeEvent::mouse_up(target, Point::new(25.0, 25.0), MouseButton::Primary));
    engine.destroy();

    assert_snapshot!(log.take().join("\n"), @r"
    mousedown a
    dragstart a
    drag a
    dragenter a far-zone
    mousemove
    drop a far-zone
    dragend a
    mouseup a
    ");
}

#[test]
fn test_destroy_stops_all_publication() {
    let mut editor = standard_editor();
    editor.engine.destroy();
    assert_eq!(editor.engine.surface().listener_count(), 0);

    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.release((150.0, 350.0));
    editor
        .engine
        .handle(&NativeEvent::resize(diagram_gestures::Size::new(640.0, 480.0)));
    editor.engine.update_container();

    assert_eq!(editor.take_log(), "");
}

#[test]
fn test_drag_handle_without_interactive_marker() {
    let mut editor = TestEditorBuilder::new()
        .with_dropzone("zone-2", (400.0, 300.0, 200.0, 150.0))
        .with_handle("h", (500.0, 100.0, 40.0, 40.0))
        .build();

    editor.press((510.0, 110.0));
    editor.move_to((520.0, 120.0));
    editor.move_to((450.0, 350.0));
    editor.release((450.0, 350.0));

    assert_snapshot!(editor.take_log(), @r"
    dragstart h
    drag h
    mousemove
    drag h
    dragenter h zone-2
    mousemove
    drop h zone-2
    dragend h
    ");
}

#[test]
fn test_secondary_release_clears_pending_click() {
    let mut editor = standard_editor();
    editor.press((320.0, 110.0));
    editor.release_button((320.0, 110.0), MouseButton::Secondary);
    editor.release((320.0, 110.0));

    assert_snapshot!(editor.take_log(), @r"
    mousedown b
    mouseup b
    mouseup b
    ");
}

#[test]
fn test_drop_zone_marker_removed_mid_drag() {
    let mut editor = standard_editor();
    let zone = editor.element("zone-1");
    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.log.take();

    editor.engine.surface_mut().remove_attribute(zone, "data-dropzone");
    editor.move_to((160.0, 360.0));
    editor.engine.surface_mut().set_attribute(zone, "data-dropzone", "");
    editor.move_to((170.0, 370.0));
    editor.release((170.0, 370.0));

    assert_snapshot!(editor.take_log(), @r"
    drag a
    dragleave a zone-1
    mousemove
    drag a
    dragenter a zone-1
    mousemove
    drop a zone-1
    dragend a
    ");
}

#[test]
fn test_viewport_shrink_moves_the_outside_boundary() {
    let mut editor = standard_editor();
    editor
        .engine
        .surface_mut()
        .set_viewport(diagram_gestures::Size::new(400.0, 300.0));
    editor.press((120.0, 110.0));
    editor.move_to((150.0, 350.0));
    editor.log.take();

    // Inside the original viewport, outside the shrunken one.
    editor.release_on_document((500.0, 500.0));
    assert_snapshot!(editor.take_log(), @r"
    drop a zone-1
    dragend a
    mouseup -
    ");
}

#[test]
fn test_container_update_mid_drag_keeps_drag_reference() {
    let mut editor = standard_editor();
    let drags: Rc<RefCell<Vec<DragInfo<ElementId>>>> = Rc::default();
    let sink = drags.clone();
    editor.engine.subscribe(Topic::Drag, move |event| {
        if let GestureEvent::Drag(info) = event {
            sink.borrow_mut().push(info.clone());
        }
    });

    editor.press((120.0, 110.0));
    editor.move_to((130.0, 125.0));

    let container = editor.container();
    editor
        .engine
        .surface_mut()
        .set_rect(container, Rect::new(140.0, 20.0, 700.0, 600.0));
    editor.engine.update_container();
    editor.move_to((130.0, 125.0));

    let drags = drags.borrow();
    assert_eq!(drags.len(), 2);
    assert_eq!(drags[0].position, Point::new(90.0, 105.0));
    assert_eq!(drags[1].position, Point::new(-10.0, 105.0));
    assert_eq!(drags[0].drag_reference, Some(Point::new(60.0, 80.0)));
    assert_eq!(drags[1].drag_reference, drags[0].drag_reference);
}

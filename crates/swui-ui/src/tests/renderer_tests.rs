use super::*;
use swui_testing::{drag_event_with, CallLog};

fn sample_screen(clicks: &CallLog<()>) -> View<StackContent, LayoutBundle> {
    let record = clicks.recorder();
    vstack![
        Text("Title").font_size("20px"),
        Button(move || record(()), Text("Press")),
    ]
}

#[test]
fn rebuild_mounts_the_whole_tree() {
    let clicks = CallLog::new();
    let screen = sample_screen(&clicks);
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&screen);

    assert_eq!(renderer.root(), Some(root));
    // stack, two keyed wrappers, title, button, button label
    assert_eq!(renderer.arena().len(), 6);
    assert_eq!(
        renderer.dump_tree(),
        "[0] <div>\n  [1] <div>\n    [2] <span> \"Title\"\n  [3] <div>\n    [4] <button>\n      [5] <span> \"Press\"\n"
    );
}

#[test]
fn rebuild_assigns_node_refs() {
    let title = Text("Title");
    let screen = vstack![title.clone()];
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&screen);

    assert_eq!(screen.node_ref().get(), Some(root));
    let title_id = title.node_ref().get();
    assert_eq!(title_id, renderer.find_by_text("Title"));
}

#[test]
fn node_refs_are_left_alone_when_disabled() {
    let title = Text("Title");
    let options = RendererOptions {
        assign_node_refs: false,
        ..RendererOptions::default()
    };
    let mut renderer = HeadlessRenderer::with_options(options);
    renderer.rebuild(&title);
    assert!(!title.node_ref().is_mounted());
    assert!(renderer.find_by_text("Title").is_some());
}

#[test]
fn rebuild_replaces_the_previous_tree() {
    let first = Text("first");
    let mut renderer = HeadlessRenderer::new();
    renderer.rebuild(&first);
    assert!(first.node_ref().is_mounted());

    renderer.rebuild(&Text("second"));
    assert_eq!(renderer.arena().len(), 1);
    assert!(!first.node_ref().is_mounted());
    assert!(renderer.find_by_text("first").is_none());
}

#[test]
fn click_reaches_the_button_action() {
    let clicks = CallLog::new();
    let screen = sample_screen(&clicks);
    let mut renderer = HeadlessRenderer::new();
    renderer.rebuild(&screen);

    let buttons = renderer.find_all_by_tag("button");
    assert_eq!(buttons.len(), 1);
    assert_eq!(renderer.click(buttons[0]), Ok(true));
    assert_eq!(clicks.len(), 1);
}

#[test]
fn click_without_handler_reports_false() {
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&Text("inert"));
    assert_eq!(renderer.click(root), Ok(false));
}

#[test]
fn dispatch_to_missing_node_fails() {
    let renderer = HeadlessRenderer::new();
    assert_eq!(renderer.click(7), Err(NodeError::Missing { id: 7 }));
    assert_eq!(renderer.dump_tree(), "(no root)\n");
}

#[test]
fn handlers_may_update_their_own_view() {
    let counter = Text("count");
    let target = counter.clone();
    let counter = counter.on_click(move || {
        target.clone().opacity(0.5);
    });
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&counter);

    assert_eq!(renderer.click(root), Ok(true));
    assert_eq!(
        counter.style_value("opacity").map(|value| value.to_string()).as_deref(),
        Some("0.5")
    );
}

#[test]
fn drop_handlers_receive_dragged_data() {
    let dropped: CallLog<String> = CallLog::new();
    let record = dropped.recorder();
    let target = RoundedRectangle().on_drop(move |data: &str| record(data.to_owned()));
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&target);

    let mut event = drag_event_with("card-1");
    assert_eq!(renderer.dispatch(root, EventSlot::Drop, &mut event), Ok(true));
    assert_eq!(dropped.calls(), vec!["card-1".to_owned()]);
}

#[test]
fn node_lookup_returns_mounted_content() {
    let mut renderer = HeadlessRenderer::new();
    let root = renderer.rebuild(&Text("hello").tag("greeting"));
    let node = renderer.node(root).map(|node| node.attribute("data-tag").map(str::to_owned));
    assert_eq!(node, Ok(Some("greeting".to_owned())));
}

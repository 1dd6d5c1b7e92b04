use super::*;
use crate::bundle::{CoreBundle, LayoutBundle, TextBundle};
use crate::hover::HoverEffect;
use std::cell::Cell;
use std::rc::Rc;
use swui_core::{EventSlot, Keyboard, KeyEvent, Value};
use swui_graphics::{
    Color, FontStyle, FontWeight, Gradient, Paint, TextAlign, TextCase, TextDecoration, TruncationMode,
};
use swui_layout::{Axis, Distribution, HorizontalAlignment, VerticalAlignment};
use swui_testing::{
    drag_event, drag_event_with, pointer_event, probe_view, touches, CallLog,
};

fn text(view: &impl Modifiable, key: &str) -> Option<String> {
    view.shared_state()
        .borrow()
        .style
        .get(key)
        .map(|value| value.to_string())
}

#[test]
fn chaining_returns_the_same_view() {
    let view = probe_view(CoreBundle);
    let chained = view
        .clone()
        .opacity(0.5)
        .padding(EdgeInsets::all("2px"))
        .clipped();
    assert!(chained.ptr_eq(&view));
    assert_eq!(text(&view, "opacity").as_deref(), Some("0.5"));
    assert_eq!(text(&view, "overflow").as_deref(), Some("hidden"));
}

#[test]
fn later_modifiers_observe_earlier_writes() {
    let view = probe_view(CoreBundle).scale_effect(2.0).offset(3.0, 4.0);
    assert_eq!(text(&view, "transform").as_deref(), Some("translate(3px, 4px)"));
}

#[test]
fn solid_background_sets_only_background_color() {
    let view = probe_view(CoreBundle).background(Color::RED);
    let state = view.state();
    assert_eq!(state.style.len(), 1);
    assert_eq!(state.style["background-color"], "#ff0000");
}

#[test]
fn gradient_background_sets_only_background_image() {
    let gradient = Gradient::linear(90.0, [Color::RED, Color::BLUE]);
    let view = probe_view(CoreBundle).background(gradient);
    let state = view.state();
    assert!(!state.style.contains_key("background-color"));
    assert_eq!(
        state.style["background-image"],
        "linear-gradient(90deg, #ff0000, #0000ff)"
    );
}

#[test]
fn gradient_foreground_clips_to_text() {
    let gradient = Gradient::linear(45.0, [Color::RED, Color::GREEN]);
    let view = probe_view(CoreBundle).foreground_style(gradient);
    let state = view.state();
    assert_eq!(state.style.len(), 8);
    assert_eq!(state.style["color"], "transparent");
    assert_eq!(state.style["-webkit-background-clip"], "text");
    assert_eq!(state.style["-moz-text-fill-color"], "transparent");

    let solid = probe_view(CoreBundle).foreground_style(Color::rgba(0, 0, 0, 0.5));
    assert_eq!(text(&solid, "color").as_deref(), Some("rgba(0, 0, 0, 0.5)"));
    assert_eq!(solid.state().style.len(), 1);
}

#[test]
fn lazy_paint_is_resolved_on_every_call() {
    let flips = Rc::new(Cell::new(false));
    let source = Rc::clone(&flips);
    let paint: Value<Paint> = Value::lazy(move || {
        Paint::from(if source.get() { Color::BLUE } else { Color::RED })
    });
    let view = probe_view(CoreBundle).background(paint.clone());
    assert_eq!(text(&view, "background-color").as_deref(), Some("#ff0000"));
    flips.set(true);
    assert_eq!(text(&view, "background-color").as_deref(), Some("#ff0000"));
    let view = view.background(paint);
    assert_eq!(text(&view, "background-color").as_deref(), Some("#0000ff"));
}

#[test]
fn missing_inset_sides_default_to_zero() {
    let view = probe_view(CoreBundle).margin(EdgeInsets::new().top("4px"));
    assert_eq!(text(&view, "margin").as_deref(), Some("4px 0px 0px 0px"));

    let view = view.padding(EdgeInsets::new().left("").right(Value::lazy(|| "1em".to_owned())));
    assert_eq!(text(&view, "padding").as_deref(), Some("0px 1em 0px 0px"));
}

#[test]
fn lazy_insets_record_is_resolved() {
    let view = probe_view(CoreBundle).padding(Value::lazy(|| EdgeInsets::symmetric("1px", "2px")));
    assert_eq!(text(&view, "padding").as_deref(), Some("1px 2px 1px 2px"));
}

#[test]
fn frame_always_writes_both_dimensions() {
    let view = probe_view(CoreBundle).frame(FrameSize::new().width("10px"));
    assert_eq!(text(&view, "width").as_deref(), Some("10px"));
    assert_eq!(text(&view, "height").as_deref(), Some("0px"));
}

#[test]
fn border_resolves_each_field() {
    let border = Border::new(
        Value::lazy(|| "2px".to_owned()),
        Value::lazy(|| BorderStyle::Dashed),
        Color::BLACK,
    );
    let view = probe_view(CoreBundle).border(Value::lazy(move || border.clone()));
    assert_eq!(text(&view, "border").as_deref(), Some("2px dashed #000000"));
}

#[test]
fn click_handler_is_replaced_not_accumulated() {
    let log = CallLog::new();
    let first = log.clone();
    let second = log.clone();
    let view = probe_view(CoreBundle)
        .on_click(move || first.record("first"))
        .on_click(move || second.record("second"));

    let events = view.state().events.clone();
    assert_eq!(events.len(), 1);
    events.dispatch(EventSlot::Click, &mut pointer_event());
    assert_eq!(log.calls(), vec!["second"]);
}

#[test]
fn scalar_effects_write_one_key_each() {
    let view = probe_view(CoreBundle)
        .rotation_effect("45deg")
        .clip_shape("8px")
        .shadow(1.0, 2.0, 3.0, Color::BLACK)
        .z_index(3)
        .blend_mode("multiply")
        .allows_hit_testing(false)
        .flips_for_right_to_left_layout_direction()
        .blur(4.0)
        .aspect_ratio(1.5)
        .hidden(true)
        .preferred_content_size_category("20px")
        .text_case(TextCase::Uppercase)
        .multiline_text_alignment(TextAlign::Justify);

    assert_eq!(text(&view, "transform").as_deref(), Some("rotate(45deg)"));
    assert_eq!(text(&view, "border-radius").as_deref(), Some("8px"));
    assert_eq!(text(&view, "box-shadow").as_deref(), Some("1px 2px 3px #000000"));
    assert_eq!(view.style_value("z-index").and_then(|value| value.as_number()), Some(3.0));
    assert_eq!(text(&view, "mix-blend-mode").as_deref(), Some("multiply"));
    assert_eq!(text(&view, "pointer-events").as_deref(), Some("none"));
    assert_eq!(text(&view, "direction").as_deref(), Some("rtl"));
    assert_eq!(text(&view, "filter").as_deref(), Some("blur(4px)"));
    assert_eq!(text(&view, "aspect-ratio").as_deref(), Some("1.5"));
    assert_eq!(text(&view, "display").as_deref(), Some("none"));
    assert_eq!(text(&view, "font-size").as_deref(), Some("20px"));
    assert_eq!(text(&view, "text-transform").as_deref(), Some("uppercase"));
    assert_eq!(text(&view, "text-align").as_deref(), Some("justify"));
}

#[test]
fn filters_overwrite_each_other() {
    let view = probe_view(CoreBundle).saturation(50.0).contrast(120.0);
    assert_eq!(text(&view, "filter").as_deref(), Some("contrast(120%)"));
    let view = view.brightness(80.0);
    assert_eq!(text(&view, "filter").as_deref(), Some("brightness(80%)"));
}

#[test]
fn positioning_modifiers() {
    let view = probe_view(CoreBundle).position(25.0, 75.0);
    assert_eq!(text(&view, "position").as_deref(), Some("absolute"));
    assert_eq!(text(&view, "transform").as_deref(), Some("translate(-50%, -50%)"));
    assert_eq!(text(&view, "top").as_deref(), Some("75%"));
    assert_eq!(text(&view, "left").as_deref(), Some("25%"));

    let full = probe_view(CoreBundle).edges_ignoring_safe_area();
    for edge in ["top", "right", "bottom", "left"] {
        assert_eq!(text(&full, edge).as_deref(), Some("0"));
    }

    let rotated = probe_view(CoreBundle).rotation_3d_effect("30deg", 1.0, 0.0, 0.5);
    assert_eq!(
        text(&rotated, "transform").as_deref(),
        Some("rotate3d(1, 0, 0.5, 30deg)")
    );
}

#[test]
fn property_modifiers_do_not_touch_style() {
    let view = probe_view(CoreBundle)
        .tag("hero")
        .text_content_type("email")
        .focusable(false);
    assert!(view.state().style.is_empty());
    assert_eq!(view.property("data-tag").as_deref(), Some("hero"));
    assert_eq!(view.property("autocomplete").as_deref(), Some("email"));
    assert_eq!(view.property("tabindex").as_deref(), Some("-1"));
    let view = view.focusable(true);
    assert_eq!(view.property("tabindex").as_deref(), Some("0"));
}

#[test]
fn font_and_truncation() {
    let view = probe_view(CoreBundle)
        .font("Inter", "14px")
        .truncation_mode(TruncationMode::Ellipsis);
    assert_eq!(text(&view, "font-family").as_deref(), Some("Inter"));
    assert_eq!(text(&view, "font-size").as_deref(), Some("14px"));
    assert_eq!(text(&view, "white-space").as_deref(), Some("nowrap"));
    assert_eq!(text(&view, "text-overflow").as_deref(), Some("ellipsis"));

    let clip = probe_view(CoreBundle).truncation_mode(TruncationMode::Clip);
    assert_eq!(clip.state().style.len(), 1);
    assert_eq!(text(&clip, "overflow").as_deref(), Some("hidden"));
}

#[test]
fn custom_styles_merge_with_last_write_winning() {
    let view = probe_view(CoreBundle)
        .opacity(1.0)
        .custom([("opacity", "0.2"), ("cursor", "pointer")])
        .custom([("cursor", "grab")]);
    assert_eq!(text(&view, "opacity").as_deref(), Some("0.2"));
    assert_eq!(text(&view, "cursor").as_deref(), Some("grab"));
}

#[test]
fn unknown_keys_pass_through() {
    let view = probe_view(CoreBundle).custom([("-x-made-up", "1")]).opacity(-3.0);
    assert_eq!(text(&view, "-x-made-up").as_deref(), Some("1"));
    assert_eq!(text(&view, "opacity").as_deref(), Some("-3"));
}

#[test]
fn overlay_is_positioned_and_rendered_last() {
    let badge = probe_view(CoreBundle).tag("badge");
    let view = probe_view(CoreBundle).overlay(badge.clone());
    assert_eq!(text(&view, "position").as_deref(), Some("relative"));
    assert_eq!(text(&badge, "position").as_deref(), Some("absolute"));
    assert_eq!(text(&badge, "bottom").as_deref(), Some("0"));

    let node = view.render();
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].attribute("data-tag"), Some("badge"));
}

#[test]
fn view_cannot_overlay_itself() {
    let view = probe_view(CoreBundle);
    let same = view.clone().overlay(view.clone());
    assert!(same.ptr_eq(&view));
    assert!(view.state().overlays.is_empty());
    assert!(!view.state().style.contains_key("position"));
    assert!(view.render().children.is_empty());
}

#[test]
fn small_and_fractional_numbers_pass_through() {
    let view = probe_view(CoreBundle).opacity(0.123456);
    assert_eq!(text(&view, "opacity").as_deref(), Some("0.123456"));

    let view = view.scale_effect(0.00004);
    assert_eq!(text(&view, "transform").as_deref(), Some("scale(0.00004)"));

    let view = view.blur(0.00001);
    assert_eq!(text(&view, "filter").as_deref(), Some("blur(0.00001px)"));

    let view = view.offset(-0.0, 1.25);
    assert_eq!(text(&view, "transform").as_deref(), Some("translate(0px, 1.25px)"));
}

#[test]
fn hover_effect_applies_and_reverts_preset() {
    let view = probe_view(CoreBundle).hover_effect(HoverEffect::default());
    let events = view.state().events.clone();

    events.dispatch(EventSlot::MouseEnter, &mut pointer_event());
    assert_eq!(text(&view, "transform").as_deref(), Some("translateY(-2px)"));
    assert_eq!(
        text(&view, "box-shadow").as_deref(),
        Some("0 4px 6px rgba(0, 0, 0, 0.1)")
    );

    events.dispatch(EventSlot::MouseLeave, &mut pointer_event());
    assert_eq!(text(&view, "transform").as_deref(), Some("none"));
    assert_eq!(text(&view, "box-shadow").as_deref(), Some("none"));
}

#[test]
fn hover_presets() {
    for (effect, transform) in [
        (HoverEffect::Lift, "translateY(-5px)"),
        (HoverEffect::Highlight, "scale(1.05)"),
        (HoverEffect::Scale, "scale(1.1)"),
    ] {
        let view = probe_view(CoreBundle).hover_effect(effect);
        let events = view.state().events.clone();
        events.dispatch(EventSlot::MouseEnter, &mut pointer_event());
        assert_eq!(text(&view, "transform").as_deref(), Some(transform));
    }
}

#[test]
fn hover_handlers_do_not_keep_view_alive() {
    let view = probe_view(CoreBundle).hover_effect(HoverEffect::Lift);
    let events = view.state().events.clone();
    drop(view);
    assert!(events.dispatch(EventSlot::MouseEnter, &mut pointer_event()));
}

#[test]
fn drag_and_drop_round_trip_payload() {
    let source = probe_view(CoreBundle).on_drag("card-7");
    assert_eq!(source.property("draggable").as_deref(), Some("true"));

    let mut event = drag_event();
    source
        .state()
        .events
        .dispatch(EventSlot::DragStart, &mut event);
    assert_eq!(
        event.as_drag().and_then(|drag| drag.data_transfer.get_data("text/plain")),
        Some("card-7")
    );

    let dropped = CallLog::new();
    let recorder = dropped.clone();
    let target = probe_view(CoreBundle).on_drop(move |data| recorder.record(data.to_owned()));
    let events = target.state().events.clone();

    let mut over = drag_event();
    events.dispatch(EventSlot::DragOver, &mut over);
    assert!(over.as_drag().map_or(false, |drag| drag.is_default_prevented()));

    events.dispatch(EventSlot::Drop, &mut event);
    assert!(event.as_drag().map_or(false, |drag| drag.is_default_prevented()));
    assert_eq!(dropped.calls(), vec!["card-7".to_owned()]);

    events.dispatch(EventSlot::Drop, &mut drag_event());
    assert_eq!(dropped.last().as_deref(), Some(""));
}

#[test]
fn drop_reads_prefilled_payload() {
    let dropped = CallLog::new();
    let recorder = dropped.clone();
    let target = probe_view(CoreBundle).on_drop(move |data| recorder.record(data.to_owned()));
    target
        .state()
        .events
        .dispatch(EventSlot::Drop, &mut drag_event_with("hello"));
    assert_eq!(dropped.calls(), vec!["hello".to_owned()]);
}

#[test]
fn scale_gesture_reports_distance_ratio() {
    let scales: CallLog<f64> = CallLog::new();
    let view = probe_view(CoreBundle).on_scale(scales.recorder());
    let events = view.state().events.clone();

    events.dispatch(EventSlot::TouchStart, &mut touches(&[(0.0, 0.0), (100.0, 0.0)]));
    events.dispatch(EventSlot::TouchMove, &mut touches(&[(0.0, 0.0), (150.0, 0.0)]));
    assert_eq!(scales.calls(), vec![1.5]);
}

#[test]
fn gestures_ignore_single_touches() {
    let scales: CallLog<f64> = CallLog::new();
    let view = probe_view(CoreBundle).on_scale(scales.recorder());
    let events = view.state().events.clone();

    events.dispatch(EventSlot::TouchStart, &mut touches(&[(0.0, 0.0)]));
    events.dispatch(EventSlot::TouchMove, &mut touches(&[(10.0, 0.0)]));
    events.dispatch(EventSlot::TouchMove, &mut touches(&[(0.0, 0.0), (10.0, 0.0)]));
    assert!(scales.is_empty());
}

#[test]
fn rotate_gesture_reports_relative_angle() {
    let angles: CallLog<f64> = CallLog::new();
    let view = probe_view(CoreBundle).on_rotate(angles.recorder());
    let events = view.state().events.clone();

    events.dispatch(EventSlot::TouchStart, &mut touches(&[(0.0, 0.0), (10.0, 0.0)]));
    events.dispatch(EventSlot::TouchMove, &mut touches(&[(0.0, 0.0), (10.0, 10.0)]));
    events.dispatch(EventSlot::TouchMove, &mut touches(&[(0.0, 0.0)]));

    let calls = angles.calls();
    assert_eq!(calls.len(), 1);
    assert!((calls[0] - 45.0).abs() < 1e-9);
}

#[test]
fn keyboard_shortcut_lives_as_long_as_its_subscription() {
    let keyboard = Keyboard::new();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let view = probe_view(CoreBundle);
    let subscription = view.keyboard_shortcut(&keyboard, "s", move || counter.set(counter.get() + 1));

    keyboard.dispatch(&KeyEvent::new("s"));
    keyboard.dispatch(&KeyEvent::new("x"));
    assert_eq!(hits.get(), 1);

    drop(subscription);
    keyboard.dispatch(&KeyEvent::new("s"));
    assert_eq!(hits.get(), 1);
    assert_eq!(keyboard.listener_count(), 0);
}

#[test]
fn accessibility_fields_reach_the_node() {
    let view = probe_view(CoreBundle)
        .accessibility_label("Close")
        .accessibility_role("button")
        .class_name("icon")
        .class_name("small");
    let node = view.render();
    assert_eq!(node.attribute("aria-label"), Some("Close"));
    assert_eq!(node.attribute("role"), Some("button"));
    assert_eq!(node.attribute("class"), Some("icon small"));
}

#[test]
fn text_modifiers_write_typography() {
    let view = probe_view(TextBundle)
        .font_size("18px")
        .font_weight(700_u16)
        .text_align(TextAlign::Center)
        .font_style(FontStyle::Italic)
        .text_decoration(TextDecoration::Underline);
    assert_eq!(text(&view, "font-size").as_deref(), Some("18px"));
    assert_eq!(
        view.style_value("font-weight").and_then(|value| value.as_number()),
        Some(700.0)
    );
    assert_eq!(text(&view, "text-align").as_deref(), Some("center"));
    assert_eq!(text(&view, "font-style").as_deref(), Some("italic"));
    assert_eq!(text(&view, "text-decoration").as_deref(), Some("underline"));

    let bold = view.font_weight(FontWeight::Bold);
    assert_eq!(text(&bold, "font-weight").as_deref(), Some("bold"));
}

#[test]
fn layout_modifiers_write_flex_tokens() {
    let view = probe_view(LayoutBundle)
        .spacing(8.0)
        .alignment(HorizontalAlignment::Leading)
        .distribution(Distribution::SpaceBetween)
        .axis(Axis::Horizontal)
        .wrap(true);
    assert_eq!(text(&view, "gap").as_deref(), Some("8px"));
    assert_eq!(text(&view, "align-items").as_deref(), Some("flex-start"));
    assert_eq!(text(&view, "justify-content").as_deref(), Some("space-between"));
    assert_eq!(text(&view, "flex-direction").as_deref(), Some("row"));
    assert_eq!(text(&view, "flex-wrap").as_deref(), Some("wrap"));

    let view = view.alignment(VerticalAlignment::Bottom).wrap(false);
    assert_eq!(text(&view, "align-items").as_deref(), Some("flex-end"));
    assert_eq!(text(&view, "flex-wrap").as_deref(), Some("nowrap"));
}

#[test]
fn core_modifiers_work_on_every_bundle_set() {
    let text_view = probe_view(TextBundle).opacity(0.3);
    let layout_view = probe_view(LayoutBundle).opacity(0.3);
    assert_eq!(text(&text_view, "opacity"), text(&layout_view, "opacity"));
}

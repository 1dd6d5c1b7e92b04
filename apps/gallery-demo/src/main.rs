use std::cell::Cell;
use std::rc::Rc;

use swui_ui::prelude::*;
use swui_ui::{log_tree_summary, Event, EventSlot, KeyEvent, Keyboard, NodeError, StackContent};

const PHOTOS: &[&str] = &["Harbor", "Ridge", "Meadow"];

fn gallery(likes: &Rc<Cell<u32>>) -> View<StackContent, LayoutBundle> {
    let counter = Rc::clone(likes);
    let bump = Rc::clone(likes);

    let title = Text("Gallery")
        .font_size("28px")
        .font_weight(FontWeight::Bold)
        .foreground_style(Gradient::linear(90.0, [Color::rgb(255, 94, 58), Color::rgb(255, 149, 0)]))
        .accessibility_role("heading");

    let photos = ForEach(PHOTOS.iter().copied(), |name: &&str, index| {
        vstack![
            RoundedRectangle()
                .frame(FrameSize::new().width("120px").height("80px"))
                .background(Color::rgb(200, 200, 210))
                .clip_shape("8px")
                .on_drag(*name),
            Text(format!("{}. {}", index + 1, name)).font_size("12px"),
        ]
        .hover_effect(HoverEffect::Lift)
        .tag(*name)
    })
    .spacing(16.0)
    .axis(Axis::Horizontal)
    .wrap(true);

    let like = Button(move || bump.set(bump.get() + 1), Text("Like"))
        .padding(EdgeInsets::symmetric("6px", "12px"))
        .border(Border::new("1px", BorderStyle::Solid, Color::BLACK))
        .accessibility_label("Like the gallery");

    vstack![
        title,
        photos,
        hstack![
            Text(Value::lazy(move || format!("{} likes", counter.get()))),
            Spacer(),
            like
        ]
        .spacing(8.0),
    ]
    .padding(EdgeInsets::all("24px"))
    .background(Color::WHITE)
}

fn main() {
    env_logger::init();

    let likes = Rc::new(Cell::new(0));
    let screen = gallery(&likes);
    let mut renderer = HeadlessRenderer::with_options(RendererOptions {
        log_tree: true,
        ..RendererOptions::default()
    });
    let root = renderer.rebuild(&screen);

    println!("=== swui gallery ===");
    println!("{screen}");
    println!();
    println!("{}", renderer.dump_tree());

    let keyboard = Keyboard::new();
    let shortcut_likes = Rc::clone(&likes);
    let shortcut = screen.keyboard_shortcut(&keyboard, "l", move || {
        shortcut_likes.set(shortcut_likes.get() + 1);
    });

    for id in renderer.find_all_by_tag("button") {
        report(renderer.click(id));
    }
    let fired = keyboard.dispatch(&KeyEvent::new("l"));
    log::debug!("shortcut reached {fired} listener(s)");

    // Ids past the end of the arena were never mounted.
    let stale = root + renderer.arena().len();
    report(renderer.dispatch(stale, EventSlot::Click, &mut Event::Pointer(Default::default())));

    renderer.rebuild(&screen);
    if let Some(text) = renderer.find_by_text(&format!("{} likes", likes.get())) {
        log::info!("likes label mounted at node {text}");
    }
    if let Ok(node) = renderer.node(root) {
        log_tree_summary(node);
    }
    println!("likes: {}", likes.get());

    shortcut.cancel();
}

fn report(result: Result<bool, NodeError>) {
    match result {
        Ok(true) => log::info!("click handled"),
        Ok(false) => log::info!("click had no handler"),
        Err(err) => log::warn!("dispatch failed: {err}"),
    }
}

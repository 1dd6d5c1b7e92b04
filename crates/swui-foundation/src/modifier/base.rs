use std::cell::Cell;
use std::rc::Rc;

use swui_core::{
    AnyView, EventSlot, Keyboard, StyleMap, StyleValue, Subscription, TouchEvent, Value,
};
use swui_graphics::{format_number, percent, px, Paint, TextAlign, TextCase, TruncationMode};

use super::args::{Border, EdgeInsets, FrameSize};
use super::Modifiable;
use crate::gestures::{two_point_angle, two_point_distance};
use crate::hover::HoverEffect;

const TEXT_PLAIN: &str = "text/plain";

fn insert(style: &mut StyleMap, key: &str, value: impl Into<StyleValue>) {
    style.insert(key.to_owned(), value.into());
}

/// Modifiers every view supports.
///
/// Each call writes into the view's state and returns the same handle.
/// Nothing here validates its input; out-of-range numbers and unknown
/// keys are passed through to the renderer as given.
pub trait CoreModifiers: Modifiable {
    fn on_click(self, handler: impl Fn() + 'static) -> Self {
        self.update(|state| state.events.set_fn(EventSlot::Click, move |_| handler()))
    }

    fn on_mouse_enter(self, handler: impl Fn() + 'static) -> Self {
        self.update(|state| state.events.set_fn(EventSlot::MouseEnter, move |_| handler()))
    }

    fn on_mouse_leave(self, handler: impl Fn() + 'static) -> Self {
        self.update(|state| state.events.set_fn(EventSlot::MouseLeave, move |_| handler()))
    }

    /// Paints the foreground. A gradient is clipped to the text, with the
    /// fill made transparent so the gradient shows through.
    fn foreground_style(self, paint: impl Into<Value<Paint>>) -> Self {
        let paint = paint.into().resolve();
        let css = paint.to_string();
        self.update(|state| {
            let style = &mut state.style;
            if paint.is_gradient() {
                insert(style, "background-image", css);
                for key in [
                    "background-clip",
                    "-webkit-background-clip",
                    "-moz-background-clip",
                ] {
                    insert(style, key, "text");
                }
                for key in [
                    "text-fill-color",
                    "-webkit-text-fill-color",
                    "-moz-text-fill-color",
                    "color",
                ] {
                    insert(style, key, "transparent");
                }
            } else {
                insert(style, "color", css);
            }
        })
    }

    fn background(self, paint: impl Into<Value<Paint>>) -> Self {
        let paint = paint.into().resolve();
        let key = if paint.is_gradient() {
            "background-image"
        } else {
            "background-color"
        };
        self.set_style(key, paint.to_string())
    }

    fn margin(self, insets: impl Into<Value<EdgeInsets>>) -> Self {
        let shorthand = insets.into().resolve().shorthand();
        self.set_style("margin", shorthand)
    }

    fn padding(self, insets: impl Into<Value<EdgeInsets>>) -> Self {
        let shorthand = insets.into().resolve().shorthand();
        self.set_style("padding", shorthand)
    }

    /// Writes both `width` and `height`; a missing side becomes `0px`.
    fn frame(self, size: impl Into<Value<FrameSize>>) -> Self {
        let (width, height) = size.into().resolve().resolve();
        self.update(|state| {
            insert(&mut state.style, "width", width);
            insert(&mut state.style, "height", height);
        })
    }

    fn border(self, border: impl Into<Value<Border>>) -> Self {
        let shorthand = border.into().resolve().shorthand();
        self.set_style("border", shorthand)
    }

    fn opacity(self, opacity: f64) -> Self {
        self.set_style("opacity", opacity)
    }

    fn rotation_effect(self, angle: impl Into<Value<String>>) -> Self {
        let angle = angle.into().resolve();
        self.set_style("transform", format!("rotate({angle})"))
    }

    fn clip_shape(self, radius: impl Into<Value<String>>) -> Self {
        self.set_style("border-radius", radius.into().resolve())
    }

    /// Stacks `overlay` over this view. The overlay is rendered as this
    /// view's last child, absolutely positioned to cover it.
    ///
    /// A view cannot overlay itself; such a call is logged and ignored.
    /// Overlay chains must not loop back to a view further up, since every
    /// render walks them.
    fn overlay<V>(self, overlay: V) -> Self
    where
        V: Modifiable + Into<AnyView>,
    {
        if Rc::ptr_eq(overlay.shared_state(), self.shared_state()) {
            log::warn!("overlay: a view cannot overlay itself; ignored");
            return self;
        }
        overlay.shared_state().borrow_mut().style.extend(
            [
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("right", "0"),
                ("bottom", "0"),
            ]
            .map(|(key, value)| (key.to_owned(), StyleValue::from(value))),
        );
        let overlay = overlay.into();
        self.update(|state| {
            insert(&mut state.style, "position", "relative");
            state.overlays.push(overlay);
        })
    }

    fn scale_effect(self, factor: f64) -> Self {
        self.set_style("transform", format!("scale({})", format_number(factor)))
    }

    fn shadow(self, x: f64, y: f64, blur: f64, color: impl Into<Value<Paint>>) -> Self {
        let color = color.into().resolve();
        self.set_style(
            "box-shadow",
            format!("{} {} {} {color}", px(x), px(y), px(blur)),
        )
    }

    fn z_index(self, z: i32) -> Self {
        self.set_style("z-index", z)
    }

    fn offset(self, x: f64, y: f64) -> Self {
        self.set_style("transform", format!("translate({}, {})", px(x), px(y)))
    }

    fn blend_mode(self, mode: impl Into<Value<String>>) -> Self {
        self.set_style("mix-blend-mode", mode.into().resolve())
    }

    fn allows_hit_testing(self, enabled: bool) -> Self {
        self.set_style("pointer-events", if enabled { "auto" } else { "none" })
    }

    fn edges_ignoring_safe_area(self) -> Self {
        self.update(|state| {
            let style = &mut state.style;
            insert(style, "position", "absolute");
            for edge in ["top", "right", "bottom", "left"] {
                insert(style, edge, "0");
            }
        })
    }

    fn flips_for_right_to_left_layout_direction(self) -> Self {
        self.set_style("direction", "rtl")
    }

    fn focusable(self, focusable: bool) -> Self {
        self.set_property("tabindex", if focusable { "0" } else { "-1" })
    }

    /// Centers the view on (`x`%, `y`%) of its container.
    fn position(self, x: f64, y: f64) -> Self {
        self.update(|state| {
            let style = &mut state.style;
            insert(style, "position", "absolute");
            insert(style, "transform", "translate(-50%, -50%)");
            insert(style, "top", percent(y));
            insert(style, "left", percent(x));
        })
    }

    fn clipped(self) -> Self {
        self.set_style("overflow", "hidden")
    }

    fn saturation(self, amount: f64) -> Self {
        self.set_style("filter", format!("saturate({})", percent(amount)))
    }

    fn brightness(self, amount: f64) -> Self {
        self.set_style("filter", format!("brightness({})", percent(amount)))
    }

    fn contrast(self, amount: f64) -> Self {
        self.set_style("filter", format!("contrast({})", percent(amount)))
    }

    fn blur(self, radius: f64) -> Self {
        self.set_style("filter", format!("blur({})", px(radius)))
    }

    fn aspect_ratio(self, ratio: f64) -> Self {
        self.set_style("aspect-ratio", ratio)
    }

    fn font(self, family: impl Into<Value<String>>, size: impl Into<Value<String>>) -> Self {
        let family = family.into().resolve();
        let size = size.into().resolve();
        self.update(|state| {
            insert(&mut state.style, "font-family", family);
            insert(&mut state.style, "font-size", size);
        })
    }

    fn hidden(self, hidden: bool) -> Self {
        self.set_style("display", if hidden { "none" } else { "block" })
    }

    /// Runs `action` whenever `key` is dispatched on `keyboard`, for as long
    /// as the returned subscription is kept.
    fn keyboard_shortcut(
        &self,
        keyboard: &Keyboard,
        key: impl Into<String>,
        action: impl Fn() + 'static,
    ) -> Subscription {
        keyboard.subscribe(key, action)
    }

    /// Applies `effect` on mouse enter and clears `transform` and
    /// `box-shadow` on mouse leave. Replaces both mouse handlers.
    fn hover_effect(self, effect: HoverEffect) -> Self {
        let enter = Rc::downgrade(self.shared_state());
        let leave = enter.clone();
        self.update(|state| {
            state.events.set_fn(EventSlot::MouseEnter, move |_| {
                if let Some(state) = enter.upgrade() {
                    effect.apply(&mut state.borrow_mut().style);
                }
            });
            state.events.set_fn(EventSlot::MouseLeave, move |_| {
                if let Some(state) = leave.upgrade() {
                    HoverEffect::revert(&mut state.borrow_mut().style);
                }
            });
        })
    }

    /// Merges arbitrary style entries; later keys win.
    fn custom<I, K, V>(self, styles: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        self.update(|state| {
            state
                .style
                .extend(styles.into_iter().map(|(key, value)| (key.into(), value.into())));
        })
    }

    fn multiline_text_alignment(self, alignment: TextAlign) -> Self {
        self.set_style("text-align", alignment.as_str())
    }

    /// Marks the view draggable with `data` as its `text/plain` payload.
    fn on_drag(self, data: impl Into<String>) -> Self {
        let data = data.into();
        self.set_property("draggable", "true").update(|state| {
            state.events.set_fn(EventSlot::DragStart, move |event| {
                if let Some(drag) = event.as_drag_mut() {
                    drag.data_transfer.set_data(TEXT_PLAIN, data.clone());
                }
            });
        })
    }

    /// Accepts drops, handing `handler` the dropped `text/plain` payload
    /// (empty when there is none).
    fn on_drop(self, handler: impl Fn(&str) + 'static) -> Self {
        self.update(|state| {
            state.events.set_fn(EventSlot::Drop, move |event| {
                if let Some(drag) = event.as_drag_mut() {
                    drag.prevent_default();
                    let data = drag.data_transfer.get_data(TEXT_PLAIN).unwrap_or_default();
                    handler(data);
                }
            });
            state.events.set_fn(EventSlot::DragOver, |event| {
                if let Some(drag) = event.as_drag_mut() {
                    drag.prevent_default();
                }
            });
        })
    }

    /// Two-finger rotation. `handler` receives the angle in degrees relative
    /// to where the fingers were when the gesture started.
    fn on_rotate(self, handler: impl Fn(f64) + 'static) -> Self {
        let initial = Rc::new(Cell::new(0.0_f64));
        let start = Rc::clone(&initial);
        self.update(|state| {
            state.events.set_fn(EventSlot::TouchStart, move |event| {
                match event.as_touch().and_then(TouchEvent::pair) {
                    Some((first, second)) => start.set(two_point_angle(first, second)),
                    None => log::trace!("on_rotate: touch start without two touches ignored"),
                }
            });
            state.events.set_fn(EventSlot::TouchMove, move |event| {
                if let Some((first, second)) = event.as_touch().and_then(TouchEvent::pair) {
                    handler(two_point_angle(first, second) - initial.get());
                }
            });
        })
    }

    /// Two-finger pinch. `handler` receives the current finger distance
    /// divided by the distance at gesture start.
    fn on_scale(self, handler: impl Fn(f64) + 'static) -> Self {
        let initial = Rc::new(Cell::new(0.0_f64));
        let start = Rc::clone(&initial);
        self.update(|state| {
            state.events.set_fn(EventSlot::TouchStart, move |event| {
                match event.as_touch().and_then(TouchEvent::pair) {
                    Some((first, second)) => start.set(two_point_distance(first, second)),
                    None => log::trace!("on_scale: touch start without two touches ignored"),
                }
            });
            state.events.set_fn(EventSlot::TouchMove, move |event| {
                let Some((first, second)) = event.as_touch().and_then(TouchEvent::pair) else {
                    return;
                };
                let initial = initial.get();
                if initial == 0.0 {
                    log::trace!("on_scale: no starting distance recorded");
                    return;
                }
                handler(two_point_distance(first, second) / initial);
            });
        })
    }

    fn preferred_content_size_category(self, size: impl Into<Value<String>>) -> Self {
        self.set_style("font-size", size.into().resolve())
    }

    fn rotation_3d_effect(self, angle: impl Into<Value<String>>, x: f64, y: f64, z: f64) -> Self {
        let angle = angle.into().resolve();
        self.set_style(
            "transform",
            format!(
                "rotate3d({}, {}, {}, {angle})",
                format_number(x),
                format_number(y),
                format_number(z)
            ),
        )
    }

    fn tag(self, tag: impl Into<String>) -> Self {
        self.set_property("data-tag", tag)
    }

    fn text_case(self, case: TextCase) -> Self {
        self.set_style("text-transform", case.as_str())
    }

    fn text_content_type(self, content_type: impl Into<String>) -> Self {
        self.set_property("autocomplete", content_type)
    }

    fn truncation_mode(self, mode: TruncationMode) -> Self {
        self.update(|state| {
            let style = &mut state.style;
            if mode == TruncationMode::Ellipsis {
                insert(style, "white-space", "nowrap");
                insert(style, "text-overflow", "ellipsis");
            }
            insert(style, "overflow", "hidden");
        })
    }

    fn accessibility_label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.update(|state| state.accessibility_label = Some(label))
    }

    fn accessibility_role(self, role: impl Into<String>) -> Self {
        let role = role.into();
        self.update(|state| state.accessibility_role = Some(role))
    }

    fn class_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|state| state.class_names.push(name))
    }
}

impl<M: Modifiable> CoreModifiers for M {}

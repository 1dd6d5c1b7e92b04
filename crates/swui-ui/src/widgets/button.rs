//! Button widget implementation

#![allow(non_snake_case)]

use std::rc::Rc;

use swui_core::{create_view, AnyView, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::CoreBundle;

use crate::adapters;

pub struct ButtonContent {
    pub action: Rc<dyn Fn()>,
    pub label: AnyView,
}

impl ViewKind for ButtonContent {
    const NAME: &'static str = "Button";
}

/// A button running `action` when clicked and showing `label` inside.
///
/// The action is bound to the click slot at render time, so it wins over any
/// `on_click` registered on the button itself.
pub fn Button(
    action: impl Fn() + 'static,
    label: impl Into<AnyView>,
) -> View<ButtonContent, CoreBundle> {
    create_view(
        RenderStrategy::new(adapters::render_button),
        ButtonContent {
            action: Rc::new(action),
            label: label.into(),
        },
        ViewOverrides::new(),
        CoreBundle,
    )
}

//! Text widget implementation

#![allow(non_snake_case)]

use swui_core::{create_view, RenderStrategy, Value, View, ViewKind, ViewOverrides};
use swui_foundation::TextBundle;

use crate::adapters;

/// Fields of a text view. A lazy text is re-read on every render.
pub struct TextContent {
    pub text: Value<String>,
}

impl ViewKind for TextContent {
    const NAME: &'static str = "Text";
}

pub fn Text(text: impl Into<Value<String>>) -> View<TextContent, TextBundle> {
    create_view(
        RenderStrategy::new(adapters::render_text),
        TextContent { text: text.into() },
        ViewOverrides::new(),
        TextBundle,
    )
}

#![allow(non_snake_case)]

use swui_core::{create_view, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::CoreBundle;

use crate::adapters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    RoundedRectangle,
    Circle,
}

pub struct ShapeContent {
    pub shape: Shape,
}

impl ViewKind for ShapeContent {
    const NAME: &'static str = "Shape";
}

/// An empty box. Size it with `frame`, round it with `clip_shape`.
pub fn RoundedRectangle() -> View<ShapeContent, CoreBundle> {
    create_view(
        RenderStrategy::new(adapters::render_shape),
        ShapeContent {
            shape: Shape::RoundedRectangle,
        },
        ViewOverrides::new(),
        CoreBundle,
    )
}

pub fn Circle() -> View<ShapeContent, CoreBundle> {
    create_view(
        RenderStrategy::new(adapters::render_shape),
        ShapeContent {
            shape: Shape::Circle,
        },
        ViewOverrides::new().style("border-radius", "50%"),
        CoreBundle,
    )
}

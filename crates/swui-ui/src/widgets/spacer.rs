//! Spacer widget implementation

#![allow(non_snake_case)]

use swui_core::{create_view, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::CoreBundle;

use crate::adapters;

pub struct SpacerContent;

impl ViewKind for SpacerContent {
    const NAME: &'static str = "Spacer";
}

/// Takes up the free space along its stack's axis.
pub fn Spacer() -> View<SpacerContent, CoreBundle> {
    create_view(
        RenderStrategy::new(adapters::render_spacer),
        SpacerContent,
        ViewOverrides::new().style("flex", 1),
        CoreBundle,
    )
}

#![allow(non_snake_case)]

use swui_core::{create_view, AnyView, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::CoreBundle;

use crate::adapters;

pub struct GroupContent {
    pub children: Vec<AnyView>,
}

impl ViewKind for GroupContent {
    const NAME: &'static str = "Group";
}

/// Groups views without imposing layout; children render directly inside.
pub fn Group(children: Vec<AnyView>) -> View<GroupContent, CoreBundle> {
    create_view(
        RenderStrategy::new(adapters::render_group),
        GroupContent { children },
        ViewOverrides::new(),
        CoreBundle,
    )
}

//! Conditional view building.

use swui_core::{AnyView, BundleSet, Renderable, UiNode, View, ViewKind};

/// What a [`view_builder`] block returns: one view or several.
pub enum Built {
    One(AnyView),
    Many(Vec<AnyView>),
}

impl<K: ViewKind, B: BundleSet> From<View<K, B>> for Built {
    fn from(view: View<K, B>) -> Self {
        Built::One(view.into_any())
    }
}

impl From<AnyView> for Built {
    fn from(view: AnyView) -> Self {
        Built::One(view)
    }
}

impl From<Vec<AnyView>> for Built {
    fn from(views: Vec<AnyView>) -> Self {
        Built::Many(views)
    }
}

/// Runs `block` against `conditions` and renders whatever it returns.
pub fn view_builder<C, R>(conditions: C, block: impl FnOnce(C) -> R) -> Vec<UiNode>
where
    R: Into<Built>,
{
    match block(conditions).into() {
        Built::One(view) => vec![view.render()],
        Built::Many(views) => views.iter().map(Renderable::render).collect(),
    }
}

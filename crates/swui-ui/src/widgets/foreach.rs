//! Repeated-item list

#![allow(non_snake_case)]

use std::rc::Rc;

use swui_core::{create_view, AnyView, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::LayoutBundle;

use crate::adapters;

pub struct ForEachContent<T> {
    pub data: Vec<T>,
    pub builder: Rc<dyn Fn(&T, usize) -> AnyView>,
}

impl<T: 'static> ViewKind for ForEachContent<T> {
    const NAME: &'static str = "ForEach";
}

/// One child per item of `data`, built by `builder(item, index)` each time
/// the list renders.
pub fn ForEach<T, V, F>(
    data: impl IntoIterator<Item = T>,
    builder: F,
) -> View<ForEachContent<T>, LayoutBundle>
where
    T: 'static,
    V: Into<AnyView>,
    F: Fn(&T, usize) -> V + 'static,
{
    create_view(
        RenderStrategy::new(adapters::render_for_each::<T>),
        ForEachContent {
            data: data.into_iter().collect(),
            builder: Rc::new(move |item: &T, index: usize| -> AnyView {
                builder(item, index).into()
            }),
        },
        ViewOverrides::new(),
        LayoutBundle,
    )
}

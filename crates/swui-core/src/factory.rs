//! Assembles view records from a render strategy, kind fields and bundles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::style::{PropertyMap, StyleMap, StyleValue};
use crate::view::{RenderStrategy, View, ViewKind, ViewRecord, ViewState};

/// Modifier groups a view can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bundle {
    Core,
    Text,
    Layout,
}

impl Bundle {
    pub fn name(self) -> &'static str {
        match self {
            Bundle::Core => "core",
            Bundle::Text => "text",
            Bundle::Layout => "layout",
        }
    }
}

/// Compile-time marker naming the bundles a view kind opts into.
pub trait BundleSet: 'static {
    const BUNDLES: &'static [Bundle];
}

/// Base field overrides applied on top of the empty defaults.
#[derive(Clone, Debug, Default)]
pub struct ViewOverrides {
    pub style: StyleMap,
    pub properties: PropertyMap,
    pub accessibility_label: Option<String>,
    pub accessibility_role: Option<String>,
    pub class_names: Vec<String>,
}

impl ViewOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn accessibility_role(mut self, role: impl Into<String>) -> Self {
        self.accessibility_role = Some(role.into());
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    fn apply(self, state: &mut ViewState) {
        state.style.extend(self.style);
        state.properties.extend(self.properties);
        if self.accessibility_label.is_some() {
            state.accessibility_label = self.accessibility_label;
        }
        if self.accessibility_role.is_some() {
            state.accessibility_role = self.accessibility_role;
        }
        state.class_names.extend(self.class_names);
    }
}

/// Builds a view of kind `K` exposing the modifier bundles named by `B`.
///
/// The record starts from empty style, event and property maps; `overrides`
/// are merged over them with later keys winning. The core bundle is always
/// recorded first, followed by `B::BUNDLES` in order without duplicates.
pub fn create_view<K: ViewKind, B: BundleSet>(
    render: RenderStrategy<K>,
    fields: K,
    overrides: ViewOverrides,
    _bundles: B,
) -> View<K, B> {
    let mut state = ViewState::default();
    overrides.apply(&mut state);

    let mut bundles = vec![Bundle::Core];
    for bundle in B::BUNDLES {
        if !bundles.contains(bundle) {
            bundles.push(*bundle);
        }
    }
    log::trace!(
        "create_view: {} with bundles {:?}",
        K::NAME,
        bundles.iter().map(|bundle| bundle.name()).collect::<Vec<_>>()
    );

    View::wrap(ViewRecord {
        state: Rc::new(RefCell::new(state)),
        fields,
        render,
        bundles,
    })
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;

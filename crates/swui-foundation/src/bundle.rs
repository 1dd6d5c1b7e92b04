//! Bundle-set markers handed to `create_view`.

use swui_core::{Bundle, BundleSet};

/// Views with only the universal modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoreBundle;

/// Text views: core plus [`TextModifiers`](crate::TextModifiers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBundle;

/// Stack and list views: core plus [`LayoutModifiers`](crate::LayoutModifiers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutBundle;

impl BundleSet for CoreBundle {
    const BUNDLES: &'static [Bundle] = &[Bundle::Core];
}

impl BundleSet for TextBundle {
    const BUNDLES: &'static [Bundle] = &[Bundle::Core, Bundle::Text];
}

impl BundleSet for LayoutBundle {
    const BUNDLES: &'static [Bundle] = &[Bundle::Core, Bundle::Layout];
}

/// Bundle sets that include the text modifiers.
pub trait HasText: BundleSet {}

/// Bundle sets that include the layout modifiers.
pub trait HasLayout: BundleSet {}

impl HasText for TextBundle {}

impl HasLayout for LayoutBundle {}

//! Treating views polymorphically: render, erase, stringify.

use std::fmt;
use std::rc::Rc;

use crate::factory::BundleSet;
use crate::node::UiNode;
use crate::view::{View, ViewKind};

/// Anything that can produce a platform node on demand.
pub trait Renderable {
    fn render(&self) -> UiNode;
}

impl Renderable for UiNode {
    fn render(&self) -> UiNode {
        self.clone()
    }
}

impl<K: ViewKind, B: BundleSet> Renderable for View<K, B> {
    fn render(&self) -> UiNode {
        View::render(self)
    }
}

/// A type-erased view, as held by stacks, groups and overlays.
#[derive(Clone)]
pub struct AnyView(Rc<dyn Renderable>);

impl AnyView {
    pub fn new(view: impl Renderable + 'static) -> Self {
        Self(Rc::new(view))
    }
}

impl Renderable for AnyView {
    fn render(&self) -> UiNode {
        self.0.render()
    }
}

impl<K: ViewKind, B: BundleSet> From<View<K, B>> for AnyView {
    fn from(view: View<K, B>) -> Self {
        AnyView::new(view)
    }
}

impl<K: ViewKind, B: BundleSet> From<&View<K, B>> for AnyView {
    fn from(view: &View<K, B>) -> Self {
        AnyView::new(view.clone())
    }
}

impl From<UiNode> for AnyView {
    fn from(node: UiNode) -> Self {
        AnyView::new(node)
    }
}

impl<K: ViewKind, B: BundleSet> From<&View<K, B>> for UiNode {
    fn from(view: &View<K, B>) -> Self {
        view.render()
    }
}

impl<K: ViewKind, B: BundleSet> fmt::Display for View<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

impl fmt::Display for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyView(..)")
    }
}

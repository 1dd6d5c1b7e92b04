//! The view entity: a shared handle to one mutable record.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::event::EventHandlers;
use crate::factory::{Bundle, BundleSet};
use crate::intercept::{AnyView, Renderable};
use crate::node::{NodeRef, UiNode};
use crate::style::{PropertyMap, StyleMap, StyleValue};

/// Kind-specific fields of a view, e.g. the text of a text view.
pub trait ViewKind: 'static {
    /// Type discriminator reported by [`View::kind`].
    const NAME: &'static str;
}

/// The mutable part every view carries regardless of kind.
#[derive(Debug, Default)]
pub struct ViewState {
    pub style: StyleMap,
    pub events: EventHandlers,
    pub properties: PropertyMap,
    pub accessibility_label: Option<String>,
    pub accessibility_role: Option<String>,
    pub class_names: Vec<String>,
    /// Rendered after the kind's own children, in attach order.
    pub overlays: Vec<AnyView>,
    node_ref: NodeRef,
}

impl ViewState {
    pub fn node_ref(&self) -> &NodeRef {
        &self.node_ref
    }
}

pub type SharedState = Rc<RefCell<ViewState>>;

/// Turns a view's fields and final state into a platform node.
pub struct RenderStrategy<K>(Rc<dyn Fn(&K, &ViewState) -> UiNode>);

impl<K> RenderStrategy<K> {
    pub fn new(render: impl Fn(&K, &ViewState) -> UiNode + 'static) -> Self {
        Self(Rc::new(render))
    }

    pub fn apply(&self, fields: &K, state: &ViewState) -> UiNode {
        (self.0)(fields, state)
    }
}

impl<K> Clone for RenderStrategy<K> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<K> fmt::Debug for RenderStrategy<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderStrategy(..)")
    }
}

pub(crate) struct ViewRecord<K> {
    pub(crate) state: SharedState,
    pub(crate) fields: K,
    pub(crate) render: RenderStrategy<K>,
    pub(crate) bundles: Vec<Bundle>,
}

/// A view of kind `K` whose modifier traits are selected by the bundle set `B`.
///
/// Cloning is cheap and every clone refers to the same record, so a modifier
/// applied through any handle shows up in every later [`View::render`].
pub struct View<K: ViewKind, B: BundleSet> {
    record: Rc<ViewRecord<K>>,
    _bundles: PhantomData<fn() -> B>,
}

impl<K: ViewKind, B: BundleSet> View<K, B> {
    pub(crate) fn wrap(record: ViewRecord<K>) -> Self {
        Self {
            record: Rc::new(record),
            _bundles: PhantomData,
        }
    }

    /// Runs the render strategy against the current state.
    ///
    /// Overlays are appended as the node's last children and the node is
    /// tagged with this view's [`NodeRef`].
    pub fn render(&self) -> UiNode {
        let state = self.record.state.borrow();
        let mut node = self.record.render.apply(&self.record.fields, &state);
        for overlay in &state.overlays {
            node.children.push(overlay.render());
        }
        node.node_ref = Some(state.node_ref.clone());
        node
    }

    pub fn shared_state(&self) -> &SharedState {
        &self.record.state
    }

    pub fn state(&self) -> Ref<'_, ViewState> {
        self.record.state.borrow()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut *self.record.state.borrow_mut())
    }

    pub fn fields(&self) -> &K {
        &self.record.fields
    }

    pub fn kind(&self) -> &'static str {
        K::NAME
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.record.bundles
    }

    pub fn supports(&self, bundle: Bundle) -> bool {
        self.record.bundles.contains(&bundle)
    }

    /// Whether both handles refer to the same view.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }

    pub fn node_ref(&self) -> NodeRef {
        self.record.state.borrow().node_ref.clone()
    }

    pub fn style_value(&self, key: &str) -> Option<StyleValue> {
        self.record.state.borrow().style.get(key).cloned()
    }

    pub fn property(&self, key: &str) -> Option<String> {
        self.record.state.borrow().properties.get(key).cloned()
    }

    pub fn into_any(self) -> AnyView {
        AnyView::new(self)
    }
}

impl<K: ViewKind, B: BundleSet> Clone for View<K, B> {
    fn clone(&self) -> Self {
        Self {
            record: Rc::clone(&self.record),
            _bundles: PhantomData,
        }
    }
}

impl<K: ViewKind, B: BundleSet> fmt::Debug for View<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("kind", &K::NAME)
            .field("bundles", &self.record.bundles)
            .field("state", &*self.record.state.borrow())
            .finish()
    }
}

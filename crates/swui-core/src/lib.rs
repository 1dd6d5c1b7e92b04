//! Core view model for swui.
//!
//! A [`View`] is a shared handle to one record holding the view's style,
//! event and property maps plus the render strategy of its kind. Views are
//! assembled by [`create_view`] and rendered into [`UiNode`] trees, which a
//! host can mount into a retained [`NodeArena`].

mod arena;
mod event;
mod factory;
mod intercept;
mod keyboard;
mod node;
mod style;
mod value;
mod view;

pub use arena::{MountedNode, NodeArena, NodeError};
pub use event::{
    DataTransfer, DragEvent, Event, EventHandler, EventHandlers, EventSlot, PointerEvent,
    TouchEvent, TouchPoint,
};
pub use factory::{create_view, Bundle, BundleSet, ViewOverrides};
pub use intercept::{AnyView, Renderable};
pub use keyboard::{KeyEvent, Keyboard, Subscription};
pub use node::{NodeId, NodeRef, UiNode};
pub use style::{PropertyMap, StyleMap, StyleValue};
pub use value::Value;
pub use view::{RenderStrategy, SharedState, View, ViewKind, ViewState};

pub mod prelude {
    pub use crate::factory::{create_view, Bundle, BundleSet, ViewOverrides};
    pub use crate::intercept::{AnyView, Renderable};
    pub use crate::node::UiNode;
    pub use crate::value::Value;
    pub use crate::view::{RenderStrategy, View, ViewKind};
}

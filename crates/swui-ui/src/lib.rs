//! High level UI primitives built on top of the swui core view model.
//!
//! Constructors such as [`Text`], [`VStack`] and [`ForEach`] assemble views
//! through [`create_view`](swui_core::create_view); the adapters in this
//! crate turn each kind into [`UiNode`]s, and [`HeadlessRenderer`] mounts
//! those into a retained arena for inspection and event dispatch.

mod adapters;
mod debug;
mod renderer;
pub mod widgets;

pub use swui_core::{
    AnyView, Event, EventSlot, KeyEvent, Keyboard, NodeArena, NodeError, NodeId, NodeRef,
    Renderable, Subscription, UiNode, Value, View,
};
pub use swui_foundation::{
    Border, BorderStyle, CoreBundle, CoreModifiers, EdgeInsets, FrameSize, HoverEffect,
    LayoutBundle, LayoutModifiers, TextBundle, TextModifiers,
};
pub use swui_graphics::{Color, Gradient, Paint};
pub use swui_layout::{Axis, Distribution, HorizontalAlignment, VerticalAlignment};

pub use renderer::{HeadlessRenderer, RendererOptions};
pub use widgets::*;

// Debug utilities
pub use debug::{format_node_tree, log_node_tree, log_tree_summary, tag_counts};

pub mod prelude {
    pub use crate::renderer::{HeadlessRenderer, RendererOptions};
    pub use crate::widgets::*;
    pub use crate::{hstack, vstack};
    pub use swui_core::prelude::*;
    pub use swui_foundation::prelude::*;
    pub use swui_graphics::prelude::*;
    pub use swui_layout::prelude::*;
}

#[cfg(test)]
#[path = "tests/primitives_tests.rs"]
mod primitives_tests;

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod renderer_tests;

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod debug_tests;

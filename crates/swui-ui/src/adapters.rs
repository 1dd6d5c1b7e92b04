//! Rendering adapters: one per view kind, mapping a finished view to a node.
//!
//! Every adapter starts from [`UiNode::for_view`], so style, event handlers,
//! properties and accessibility fields carry over the same way for all kinds.

use std::rc::Rc;

use swui_core::{AnyView, EventSlot, Renderable, UiNode, ViewState};

use crate::widgets::{
    ButtonContent, ForEachContent, GroupContent, ShapeContent, SpacerContent, StackContent,
    TextContent,
};

/// Wraps a child so the host can track it across renders by position.
fn keyed(index: usize, child: UiNode) -> UiNode {
    UiNode::new("div")
        .with_attribute("data-key", index.to_string())
        .with_child(child)
}

pub(crate) fn render_text(content: &TextContent, state: &ViewState) -> UiNode {
    UiNode::for_view("span", state).with_text(content.text.resolve())
}

pub(crate) fn render_button(content: &ButtonContent, state: &ViewState) -> UiNode {
    let mut node = UiNode::for_view("button", state).with_child(content.label.render());
    let action = Rc::clone(&content.action);
    node.events.set_fn(EventSlot::Click, move |_| action());
    node
}

pub(crate) fn render_stack(content: &StackContent, state: &ViewState) -> UiNode {
    UiNode::for_view("div", state).with_children(
        content
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| keyed(index, child.render())),
    )
}

pub(crate) fn render_for_each<T>(content: &ForEachContent<T>, state: &ViewState) -> UiNode {
    UiNode::for_view("div", state).with_children(
        content
            .data
            .iter()
            .enumerate()
            .map(|(index, item)| keyed(index, (content.builder)(item, index).render())),
    )
}

pub(crate) fn render_group(content: &GroupContent, state: &ViewState) -> UiNode {
    UiNode::for_view("div", state).with_children(content.children.iter().map(AnyView::render))
}

pub(crate) fn render_shape(_content: &ShapeContent, state: &ViewState) -> UiNode {
    UiNode::for_view("div", state)
}

pub(crate) fn render_spacer(_content: &SpacerContent, state: &ViewState) -> UiNode {
    UiNode::for_view("div", state)
}

//! Platform UI nodes produced by rendering a view.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::event::EventHandlers;
use crate::style::{PropertyMap, StyleMap, StyleValue};
use crate::view::ViewState;

pub type NodeId = usize;

/// Handle through which a view learns where its node was mounted.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub fn set(&self, id: Option<NodeId>) {
        self.0.set(id);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get().is_some()
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

/// One element of the tree handed to the host renderer.
#[derive(Clone, Debug, Default)]
pub struct UiNode {
    pub tag: String,
    pub text: Option<String>,
    pub style: StyleMap,
    pub attributes: PropertyMap,
    pub events: EventHandlers,
    pub children: Vec<UiNode>,
    pub node_ref: Option<NodeRef>,
}

impl UiNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Starts a node carrying a view's style, events and attributes.
    ///
    /// Properties become attributes verbatim; the accessibility label and
    /// role map to `aria-label` and `role`, class names to `class`.
    pub fn for_view(tag: impl Into<String>, state: &ViewState) -> Self {
        let mut attributes = state.properties.clone();
        if let Some(label) = &state.accessibility_label {
            attributes.insert("aria-label".to_owned(), label.clone());
        }
        if let Some(role) = &state.accessibility_role {
            attributes.insert("role".to_owned(), role.clone());
        }
        if !state.class_names.is_empty() {
            attributes.insert("class".to_owned(), state.class_names.join(" "));
        }
        Self {
            tag: tag.into(),
            text: None,
            style: state.style.clone(),
            attributes,
            events: state.events.clone(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn style_value(&self, key: &str) -> Option<&StyleValue> {
        self.style.get(key)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Depth-first search including `self`.
    pub fn find(&self, predicate: &dyn Fn(&UiNode) -> bool) -> Option<&UiNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find(predicate))
    }

    /// Number of nodes in this subtree, `self` included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(UiNode::count).sum::<usize>()
    }
}

/// Structural equality. Handlers compare by which slots are bound and node
/// refs are ignored.
impl PartialEq for UiNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.text == other.text
            && self.style == other.style
            && self.attributes == other.attributes
            && self.events.registered().eq(other.events.registered())
            && self.children == other.children
    }
}

/// Markup rendering, e.g. `<span style="color: #ff0000" onclick>Hi</span>`.
impl fmt::Display for UiNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.style.is_empty() {
            f.write_str(" style=\"")?;
            for (index, (key, value)) in self.style.iter().enumerate() {
                if index > 0 {
                    f.write_str("; ")?;
                }
                write!(f, "{key}: {}", escape(&value.to_string()))?;
            }
            f.write_str("\"")?;
        }
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", escape(value))?;
        }
        for slot in self.events.registered() {
            write!(f, " on{}", slot.name())?;
        }
        f.write_str(">")?;
        if let Some(text) = &self.text {
            f.write_str(&escape(text))?;
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

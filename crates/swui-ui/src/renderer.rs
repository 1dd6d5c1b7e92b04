use swui_core::{
    Event, EventSlot, NodeArena, NodeError, NodeId, PointerEvent, Renderable, UiNode,
};

use crate::debug::log_node_tree;

/// Options for [`HeadlessRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererOptions {
    /// Tell each view's `NodeRef` where its node was mounted.
    pub assign_node_refs: bool,
    /// Log every rebuilt tree at debug level.
    pub log_tree: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            assign_node_refs: true,
            log_tree: false,
        }
    }
}

/// A renderer without a screen: mounts node trees into a [`NodeArena`] where
/// they can be inspected and receive events.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    arena: NodeArena,
    root: Option<NodeId>,
    options: RendererOptions,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RendererOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Renders `root` and replaces whatever was mounted before.
    pub fn rebuild(&mut self, root: &dyn Renderable) -> NodeId {
        self.arena.clear();
        let mut node = root.render();
        if !self.options.assign_node_refs {
            strip_node_refs(&mut node);
        }
        if self.options.log_tree {
            log_node_tree(&node);
        }
        let id = self.arena.mount(node);
        log::debug!("headless renderer mounted {} nodes", self.arena.len());
        self.root = Some(id);
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn options(&self) -> RendererOptions {
        self.options
    }

    pub fn node(&self, id: NodeId) -> Result<&UiNode, NodeError> {
        self.arena.get(id).map(|mounted| &mounted.node)
    }

    pub fn dispatch(
        &self,
        id: NodeId,
        slot: EventSlot,
        event: &mut Event,
    ) -> Result<bool, NodeError> {
        self.arena.dispatch(id, slot, event)
    }

    pub fn click(&self, id: NodeId) -> Result<bool, NodeError> {
        self.dispatch(id, EventSlot::Click, &mut Event::Pointer(PointerEvent::default()))
    }

    /// First mounted node whose own text equals `text`.
    pub fn find_by_text(&self, text: &str) -> Option<NodeId> {
        self.arena.find(|node| node.text.as_deref() == Some(text))
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.arena.find_all(|node| node.tag == tag)
    }

    pub fn dump_tree(&self) -> String {
        self.arena.dump_tree(self.root)
    }
}

fn strip_node_refs(node: &mut UiNode) {
    node.node_ref = None;
    for child in &mut node.children {
        strip_node_refs(child);
    }
}

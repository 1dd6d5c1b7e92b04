//! Retained storage for mounted node trees.

use crate::event::{Event, EventSlot};
use crate::node::{NodeId, UiNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
        }
    }
}

impl std::error::Error for NodeError {}

/// A node as stored in the arena. `node.children` is always empty; the
/// mounted children are referenced by id instead.
#[derive(Debug, Clone)]
pub struct MountedNode {
    pub node: UiNode,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Option<MountedNode>>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Mounts `node` and its subtree, returning the id of the subtree root.
    ///
    /// Each node carrying a [`NodeRef`](crate::NodeRef) is told its id.
    pub fn mount(&mut self, node: UiNode) -> NodeId {
        self.mount_under(node, None)
    }

    fn mount_under(&mut self, mut node: UiNode, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let children = std::mem::take(&mut node.children);
        if let Some(node_ref) = &node.node_ref {
            node_ref.set(Some(id));
        }
        self.nodes.push(Some(MountedNode {
            node,
            parent,
            children: Vec::with_capacity(children.len()),
        }));
        let child_ids: Vec<NodeId> = children
            .into_iter()
            .map(|child| self.mount_under(child, Some(id)))
            .collect();
        if let Some(Some(mounted)) = self.nodes.get_mut(id) {
            mounted.children = child_ids;
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Result<&MountedNode, NodeError> {
        self.nodes
            .get(id)
            .ok_or(NodeError::Missing { id })?
            .as_ref()
            .ok_or(NodeError::Missing { id })
    }

    pub fn with_node<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut MountedNode) -> R,
    ) -> Result<R, NodeError> {
        let slot = self
            .nodes
            .get_mut(id)
            .ok_or(NodeError::Missing { id })?
            .as_mut()
            .ok_or(NodeError::Missing { id })?;
        Ok(f(slot))
    }

    /// Removes `id` and everything below it, unmounting their node refs.
    pub fn remove(&mut self, id: NodeId) -> Result<(), NodeError> {
        let (children, parent) = {
            let mounted = self.get(id)?;
            (mounted.children.clone(), mounted.parent)
        };

        for child_id in children {
            // Already-removed children are fine here.
            let _ = self.remove(child_id);
        }

        if let Some(parent_id) = parent {
            if let Some(Some(parent)) = self.nodes.get_mut(parent_id) {
                parent.children.retain(|child| *child != id);
            }
        }

        let slot = self.nodes.get_mut(id).ok_or(NodeError::Missing { id })?;
        if let Some(mounted) = slot.take() {
            if let Some(node_ref) = mounted.node.node_ref {
                node_ref.set(None);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        for mounted in self.nodes.drain(..).flatten() {
            if let Some(node_ref) = mounted.node.node_ref {
                node_ref.set(None);
            }
        }
    }

    /// Runs the handler bound to `slot` on node `id`. Returns whether one ran.
    pub fn dispatch(
        &self,
        id: NodeId,
        slot: EventSlot,
        event: &mut Event,
    ) -> Result<bool, NodeError> {
        let handler = self.get(id)?.node.events.get(slot);
        Ok(match handler {
            Some(handler) => {
                log::trace!("dispatching {} to node {id}", slot.name());
                handler(event);
                true
            }
            None => false,
        })
    }

    /// First live node, in mount order, matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&UiNode) -> bool) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(id, slot)| match slot {
            Some(mounted) if predicate(&mounted.node) => Some(id),
            _ => None,
        })
    }

    pub fn find_all(&self, predicate: impl Fn(&UiNode) -> bool) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| match slot {
                Some(mounted) if predicate(&mounted.node) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn dump_tree(&self, root: Option<NodeId>) -> String {
        let mut output = String::new();
        if let Some(root_id) = root {
            self.dump_node(&mut output, root_id, 0);
        } else {
            output.push_str("(no root)\n");
        }
        output
    }

    fn dump_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        if let Some(Some(mounted)) = self.nodes.get(id) {
            let node = &mounted.node;
            output.push_str(&format!("{}[{}] <{}>", indent, id, node.tag));
            if let Some(text) = &node.text {
                output.push_str(&format!(" {:?}", text));
            }
            output.push('\n');
            for child_id in &mounted.children {
                self.dump_node(output, *child_id, depth + 1);
            }
        } else {
            output.push_str(&format!("{}[{}] (missing)\n", indent, id));
        }
    }
}

impl std::fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeArena")
            .field("live", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/arena_tests.rs"]
mod tests;

//! Debug helpers for inspecting rendered trees.

use indexmap::IndexMap;
use swui_core::UiNode;

/// Indented outline of `node`, one line per node: tag, text, then style.
pub fn format_node_tree(node: &UiNode) -> String {
    let mut output = String::new();
    format_node(&mut output, node, 0);
    output
}

fn format_node(output: &mut String, node: &UiNode, depth: usize) {
    let indent = "  ".repeat(depth);
    output.push_str(&format!("{}<{}>", indent, node.tag));
    if let Some(text) = &node.text {
        output.push_str(&format!(" {:?}", text));
    }
    if !node.style.is_empty() {
        let style: Vec<String> = node
            .style
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        output.push_str(&format!(" [{}]", style.join("; ")));
    }
    output.push('\n');
    for child in &node.children {
        format_node(output, child, depth + 1);
    }
}

pub fn log_node_tree(node: &UiNode) {
    log::debug!("node tree:\n{}", format_node_tree(node));
}

/// Number of nodes per tag, in first-seen order.
pub fn tag_counts(node: &UiNode) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    count_tags(node, &mut counts);
    counts
}

fn count_tags(node: &UiNode, counts: &mut IndexMap<String, usize>) {
    *counts.entry(node.tag.clone()).or_insert(0) += 1;
    for child in &node.children {
        count_tags(child, counts);
    }
}

pub fn log_tree_summary(node: &UiNode) {
    let summary: Vec<String> = tag_counts(node)
        .iter()
        .map(|(tag, count)| format!("{tag}={count}"))
        .collect();
    log::info!("{} nodes ({})", node.count(), summary.join(", "));
}

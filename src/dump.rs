// src/dump.rs
//! Text and JSON views of a laid-out tree.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use trellis_core::{LayoutTree, LayoutType, NodeId};

/// Indented hierarchy, one node per line:
///
/// ```text
/// window#0 VerticalFlow pos:(0,0) size:(800,600)
/// ├── header#1 Stack pos:(0,0) size:(800,40)
/// └── body#2 HorizontalFlow pos:(0,40) size:(800,560)
/// ```
pub fn tree_text(tree: &LayoutTree) -> String {
    let mut output = String::new();
    match tree.root() {
        Some(root) => write_node(&mut output, tree, root, "", None),
        None => output.push_str("No root node\n"),
    }
    output
}

// `last` is None for the root, which gets no connector.
fn write_node(output: &mut String, tree: &LayoutTree, id: NodeId, prefix: &str, last: Option<bool>) {
    let Some(node) = tree.get(id) else {
        return;
    };

    let connector = match last {
        None => "",
        Some(true) => "└── ",
        Some(false) => "├── ",
    };
    let _ = write!(
        output,
        "{}{}{} {:?} pos:({:.0},{:.0}) size:({:.0},{:.0})",
        prefix,
        connector,
        node.label(),
        node.layout_type,
        node.position.x,
        node.position.y,
        node.actual_size.x,
        node.actual_size.y
    );
    if node.flex.x > 0.0 || node.flex.y > 0.0 {
        let _ = write!(output, " flex:({},{})", node.flex.x, node.flex.y);
    }
    if node.exclude_from_layout {
        output.push_str(" [excluded]");
    }
    output.push('\n');

    let child_prefix = match last {
        None => prefix.to_string(),
        Some(true) => format!("{}    ", prefix),
        Some(false) => format!("{}│   ", prefix),
    };
    let count = node.child_count();
    for (i, child) in node.children().iter().enumerate() {
        write_node(output, tree, *child, &child_prefix, Some(i + 1 == count));
    }
}

#[derive(Debug, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub layout: LayoutType,
    pub position: [f32; 2],
    pub size: [f32; 2],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub excluded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

pub fn snapshot(tree: &LayoutTree, id: NodeId) -> Result<NodeSnapshot> {
    let node = tree.node(id)?;
    let children = node
        .children()
        .iter()
        .map(|child| snapshot(tree, *child))
        .collect::<Result<Vec<_>>>()?;

    Ok(NodeSnapshot {
        id,
        name: node.name.clone(),
        layout: node.layout_type,
        position: node.position.to_array(),
        size: node.actual_size.to_array(),
        excluded: node.exclude_from_layout,
        children,
    })
}

pub fn tree_json(tree: &LayoutTree) -> Result<String> {
    let root = tree.root().context("Tree has no root node")?;
    let snapshot = snapshot(tree, root)?;
    serde_json::to_string_pretty(&snapshot).context("Failed to serialize tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trellis_core::Node;
    use trellis_layout::{run_layout, LayoutConfig};

    fn laid_out() -> LayoutTree {
        let mut tree = LayoutTree::new();
        let root = tree
            .insert_root(
                Node::new()
                    .with_name("window")
                    .with_size(100.0, 60.0)
                    .with_layout(LayoutType::VerticalFlow),
            )
            .unwrap();
        let body = tree
            .insert(root, Node::new().with_name("body").with_flex(1.0, 1.0))
            .unwrap();
        tree.insert(body, Node::new().with_name("leaf")).unwrap();
        tree.insert(root, Node::new().with_name("note").excluded(true))
            .unwrap();
        run_layout(&mut tree, root, &LayoutConfig::default()).unwrap();
        tree
    }

    #[test]
    fn test_tree_text() {
        let text = tree_text(&laid_out());
        let expected = "\
window#0 VerticalFlow pos:(0,0) size:(100,60)
├── body#1 Stack pos:(0,0) size:(100,60) flex:(1,1)
│   └── leaf#2 Stack pos:(0,0) size:(0,0)
└── note#3 Stack pos:(0,0) size:(0,0) [excluded]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_tree_text() {
        assert_eq!(tree_text(&LayoutTree::new()), "No root node\n");
    }

    #[test]
    fn test_json_nests_children() {
        let json = tree_json(&laid_out()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "window");
        assert_eq!(value["layout"], "vertical_flow");
        assert_eq!(value["children"][0]["size"][0], 100.0);
        assert_eq!(value["children"][0]["children"][0]["name"], "leaf");
        assert_eq!(value["children"][1]["excluded"], true);
        assert!(value["children"][0].get("excluded").is_none());
    }
}

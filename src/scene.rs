// src/scene.rs
//! JSON scene descriptions.
//!
//! A scene is a nested description of nodes. Every field is optional and an
//! omitted field keeps the node default, so the smallest valid scene is
//! `{"root": {}}`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trellis_core::{Align, LayoutTree, LayoutType, Node, NodeId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub title: Option<String>,
    pub root: SceneNode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneNode {
    pub name: Option<String>,
    pub layout: LayoutType,

    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub pref_width: f32,
    pub pref_height: f32,
    pub flex_width: f32,
    pub flex_height: f32,

    pub padding: f32,
    pub padding_top: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub gap: f32,

    pub h_align: Align,
    pub v_align: Align,
    /// Initial position, kept as-is when the node is excluded from layout.
    pub x: f32,
    pub y: f32,
    pub exclude: bool,

    pub children: Vec<SceneNode>,
}

impl SceneNode {
    fn to_node(&self) -> Node {
        let mut node = Node::new()
            .with_layout(self.layout)
            .with_min_width(self.min_width)
            .with_min_height(self.min_height)
            .with_max_width(self.max_width)
            .with_max_height(self.max_height)
            .with_size(self.width, self.height)
            .with_pref_width(self.pref_width)
            .with_pref_height(self.pref_height)
            .with_flex(self.flex_width, self.flex_height)
            .with_padding(self.padding)
            .with_gap(self.gap)
            .with_h_align(self.h_align)
            .with_v_align(self.v_align)
            .with_position(self.x, self.y)
            .excluded(self.exclude);

        if let Some(name) = &self.name {
            node = node.with_name(name.clone());
        }
        if let Some(top) = self.padding_top {
            node = node.with_padding_top(top);
        }
        if let Some(right) = self.padding_right {
            node = node.with_padding_right(right);
        }
        if let Some(bottom) = self.padding_bottom {
            node = node.with_padding_bottom(bottom);
        }
        if let Some(left) = self.padding_left {
            node = node.with_padding_left(left);
        }
        node
    }
}

impl Scene {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse scene JSON")
    }

    /// Build a fresh tree. Ids are handed out in depth-first order starting at
    /// the root.
    pub fn build_tree(&self) -> Result<LayoutTree> {
        let mut tree = LayoutTree::new();
        let root = tree
            .insert_root(self.root.to_node())
            .context("Failed to insert scene root")?;
        insert_children(&mut tree, root, &self.root)?;
        Ok(tree)
    }
}

fn insert_children(tree: &mut LayoutTree, parent: NodeId, desc: &SceneNode) -> Result<()> {
    for child in &desc.children {
        let id = tree
            .insert(parent, child.to_node())
            .with_context(|| format!("Failed to insert child of node {}", parent))?;
        insert_children(tree, id, child)?;
    }
    Ok(())
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
    Scene::from_json(&text).with_context(|| format!("Invalid scene file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_minimal_scene() {
        let scene = Scene::from_json(r#"{"root": {}}"#).unwrap();
        let tree = scene.build_tree().unwrap();

        assert_eq!(tree.len(), 1);
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.layout_type, LayoutType::Stack);
        assert_eq!(root.actual_size, Vec2::ZERO);
    }

    #[test]
    fn test_fields_map_onto_nodes() {
        let scene = Scene::from_json(
            r#"{
                "title": "fields",
                "root": {
                    "name": "window",
                    "layout": "horizontal_flow",
                    "width": 300, "height": 120,
                    "padding": 4, "padding_left": 10,
                    "gap": 2,
                    "h_align": "center",
                    "children": [
                        {"name": "side", "width": 500, "max_width": 80},
                        {"name": "fill", "flex_width": 2, "flex_height": 1},
                        {"name": "float", "x": 7, "y": 9, "exclude": true}
                    ]
                }
            }"#,
        )
        .unwrap();
        let tree = scene.build_tree().unwrap();

        let window = tree.node(tree.find_by_name("window").unwrap()).unwrap();
        assert_eq!(window.layout_type, LayoutType::HorizontalFlow);
        assert_eq!(window.actual_size, Vec2::new(300.0, 120.0));
        assert_eq!(window.padding.left(), 10.0);
        assert_eq!(window.padding.right(), 4.0);
        assert_eq!(window.gap, 2.0);
        assert_eq!(window.h_align, Align::Center);

        let side = tree.node(tree.find_by_name("side").unwrap()).unwrap();
        assert_eq!(side.actual_size.x, 80.0);

        let fill = tree.node(tree.find_by_name("fill").unwrap()).unwrap();
        assert_eq!(fill.flex, Vec2::new(2.0, 1.0));

        let float = tree.node(tree.find_by_name("float").unwrap()).unwrap();
        assert!(float.exclude_from_layout);
        assert_eq!(float.position, Vec2::new(7.0, 9.0));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Scene::from_json(r#"{"root": {"widht": 10}}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("widht"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read scene file"));
    }
}

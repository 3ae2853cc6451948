//! Retained scene + pointer protocol for interactive hosts.
//!
//! Layout and SVG emission are headless; a host that can deliver pointer
//! events drives this module instead. [`TreeViewer`] is the host context:
//! it owns the scene and the single tooltip, and replaces both wholesale on
//! every render, so repeated renders cannot accumulate stale interactive
//! state. Event handling is synchronous, one event at a time.

use crate::layout::layout_tree;
use crate::model::{EdgeLayout, TreeLayout};
use merkviz_core::{MerkleTree, TreeRenderConfig};

/// Offset of the tooltip from the pointer while hovering.
const TOOLTIP_OFFSET_X: f64 = 20.0;
const TOOLTIP_OFFSET_Y: f64 = -25.0;

/// One hit-testable node with its current (possibly highlighted) styling.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub level: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub font_color: String,
    pub font_size: f64,
    pub bold: bool,
    pub label: String,
    pub hash: String,
}

impl SceneNode {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// The floating element showing the full hash. At most one exists per
/// viewer; [`TreeViewer::render`] destroys the old one before creating the
/// next.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl Tooltip {
    fn hidden() -> Self {
        Self {
            text: String::new(),
            x: 0.0,
            y: 0.0,
            visible: false,
        }
    }
}

/// Retained visual elements of one rendered tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeScene {
    pub width: f64,
    pub height: f64,
    pub edges: Vec<EdgeLayout>,
    pub nodes: Vec<SceneNode>,
}

impl TreeScene {
    pub fn from_layout(layout: &TreeLayout, config: &TreeRenderConfig) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|n| SceneNode {
                level: n.level,
                index: n.index,
                x: n.x,
                y: n.y,
                radius: n.radius,
                fill: n.fill.clone(),
                stroke: config.node_stroke.clone(),
                stroke_width: config.node_stroke_width,
                font_color: n.font_color.clone(),
                font_size: n.font_size,
                bold: n.bold,
                label: n.label.clone(),
                hash: n.hash.clone(),
            })
            .collect();
        Self {
            width: layout.width,
            height: layout.height,
            edges: layout.edges.clone(),
            nodes,
        }
    }

    /// Index of the node under the pointer; the last drawn node wins when
    /// circles overlap.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.nodes.iter().rposition(|n| n.contains(x, y))
    }
}

/// Host context for interactive rendering.
///
/// Owns the scene and the tooltip singleton and dispatches the hover
/// protocol: enter highlights the node border and shows the tooltip with
/// the full hash, move lets the tooltip follow the pointer, leave restores
/// the border and hides the tooltip.
#[derive(Debug, Clone, Default)]
pub struct TreeViewer {
    config: TreeRenderConfig,
    scene: Option<TreeScene>,
    tooltip: Option<Tooltip>,
    hovered: Option<usize>,
}

impl TreeViewer {
    pub fn new(config: TreeRenderConfig) -> Self {
        Self {
            config,
            scene: None,
            tooltip: None,
            hovered: None,
        }
    }

    pub fn scene(&self) -> Option<&TreeScene> {
        self.scene.as_ref()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Currently hovered node, as an index into the scene's node list.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Full redraw: replaces the prior scene and tooltip with fresh ones.
    ///
    /// An empty tree is a strict no-op, exactly like handing the renderer
    /// nothing: prior contents stay on screen untouched.
    pub fn render(&mut self, tree: &MerkleTree) {
        let Some(layout) = layout_tree(tree, &self.config) else {
            return;
        };
        // Old tooltip goes away before the new one exists; there is never
        // more than one.
        self.tooltip = None;
        self.hovered = None;
        self.scene = Some(TreeScene::from_layout(&layout, &self.config));
        self.tooltip = Some(Tooltip::hidden());
    }

    /// Convenience over [`render`](Self::render) for raw JSON input; a
    /// value that is not a level structure is the same no-op.
    pub fn render_value(&mut self, value: &serde_json::Value) {
        if let Some(tree) = MerkleTree::from_value(value) {
            self.render(&tree);
        }
    }

    /// Pointer moved to (x, y) in scene coordinates. Handles enter, move
    /// and leave transitions, including leaving one node directly into
    /// another.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let hit = self.scene.as_ref().and_then(|s| s.hit_test(x, y));
        match (self.hovered, hit) {
            (Some(prev), Some(cur)) if prev == cur => self.on_hover_move(x, y),
            (Some(prev), Some(cur)) => {
                self.on_hover_leave(prev);
                self.on_hover_enter(cur, x, y);
            }
            (Some(prev), None) => self.on_hover_leave(prev),
            (None, Some(cur)) => self.on_hover_enter(cur, x, y),
            (None, None) => {}
        }
        self.hovered = hit;
    }

    /// Pointer left the diagram entirely.
    pub fn pointer_left(&mut self) {
        if let Some(prev) = self.hovered.take() {
            self.on_hover_leave(prev);
        }
    }

    fn on_hover_enter(&mut self, node: usize, x: f64, y: f64) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(n) = scene.nodes.get_mut(node) else {
            return;
        };
        n.stroke = self.config.hover_stroke.clone();
        n.stroke_width = self.config.hover_stroke_width;
        let hash = n.hash.clone();
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.text = hash;
            tooltip.x = x + TOOLTIP_OFFSET_X;
            tooltip.y = y + TOOLTIP_OFFSET_Y;
            tooltip.visible = true;
        }
    }

    fn on_hover_move(&mut self, x: f64, y: f64) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.x = x + TOOLTIP_OFFSET_X;
            tooltip.y = y + TOOLTIP_OFFSET_Y;
        }
    }

    fn on_hover_leave(&mut self, node: usize) {
        if let Some(n) = self
            .scene
            .as_mut()
            .and_then(|scene| scene.nodes.get_mut(node))
        {
            n.stroke = self.config.node_stroke.clone();
            n.stroke_width = self.config.node_stroke_width;
        }
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.visible = false;
        }
    }
}

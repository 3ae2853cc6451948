use serde::Serialize;

/// Axis-aligned bounds of a laid-out diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// One positioned node with its resolved styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeLayout {
    pub level: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: String,
    pub font_color: String,
    pub font_size: f64,
    pub bold: bool,
    /// Truncated hash shown inside the node.
    pub label: String,
    /// Full untruncated hash, surfaced on hover.
    pub hash: String,
}

/// Edge from a child node up to its parent. Endpoints are already pulled
/// inward by the node radius so drawn nodes occlude them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeLayout {
    pub from_level: usize,
    pub from_index: usize,
    pub to_level: usize,
    pub to_index: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Complete laid-out tree. Edges precede nodes in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLayout {
    pub bounds: Bounds,
    pub width: f64,
    pub height: f64,
    pub level_count: usize,
    pub edges: Vec<EdgeLayout>,
    pub nodes: Vec<NodeLayout>,
}

impl TreeLayout {
    pub fn node(&self, level: usize, index: usize) -> Option<&NodeLayout> {
        self.nodes
            .iter()
            .find(|n| n.level == level && n.index == index)
    }
}

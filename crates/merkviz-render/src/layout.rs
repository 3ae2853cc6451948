use crate::model::{Bounds, EdgeLayout, NodeLayout, TreeLayout};
use merkviz_core::{MerkleTree, TreeRenderConfig, theme};

/// Lays out a level structure on a fixed-width canvas, root level at the
/// top. Returns `None` for a tree with no levels; callers render nothing.
pub fn layout_tree(tree: &MerkleTree, config: &TreeRenderConfig) -> Option<TreeLayout> {
    if tree.is_empty() {
        return None;
    }

    let level_count = tree.level_count();
    let width = config.width;
    let height = config.level_height * level_count as f64 + config.bottom_padding;

    // Positions first; every edge references both of its endpoints.
    let mut positions: Vec<Vec<(f64, f64)>> = Vec::with_capacity(level_count);
    for (l, level) in tree.levels().iter().enumerate() {
        let y = (level_count - l - 1) as f64 * config.level_height + config.top_offset;
        let step = width / (level.len() as f64 + 1.0);
        positions.push(
            (0..level.len())
                .map(|i| (step * (i + 1) as f64, y))
                .collect(),
        );
    }

    let inset = config.node_radius - config.edge_inset;
    let mut edges = Vec::new();
    for l in 0..level_count.saturating_sub(1) {
        for (i, &(x, y)) in positions[l].iter().enumerate() {
            let parent = MerkleTree::parent_index(i);
            // A parent index past the end of the upper level means the input
            // does not follow the doubling relationship; such children just
            // have no edge.
            let Some(&(px, py)) = positions[l + 1].get(parent) else {
                continue;
            };
            edges.push(EdgeLayout {
                from_level: l,
                from_index: i,
                to_level: l + 1,
                to_index: parent,
                x1: x,
                y1: y - inset,
                x2: px,
                y2: py + inset,
            });
        }
    }

    let mut nodes = Vec::with_capacity(tree.node_count());
    for (l, level) in tree.levels().iter().enumerate() {
        let fill = theme::level_color(l);
        let font_color = theme::text_color(fill);
        let root_level = l == level_count - 1;
        let font_size = config.font_size
            + if root_level {
                config.root_font_size_bump
            } else {
                0.0
            };
        for (i, hash) in level.iter().enumerate() {
            let (x, y) = positions[l][i];
            nodes.push(NodeLayout {
                level: l,
                index: i,
                x,
                y,
                radius: config.node_radius,
                fill: fill.to_string(),
                font_color: font_color.to_string(),
                font_size,
                bold: root_level,
                label: truncate_label(hash, config.label_prefix_len),
                hash: hash.clone(),
            });
        }
    }

    Some(TreeLayout {
        bounds: Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        },
        width,
        height,
        level_count,
        edges,
        nodes,
    })
}

/// First `prefix_len` characters of the hash plus an ellipsis. Hashes
/// shorter than the prefix keep what they have; the ellipsis is always
/// appended.
fn truncate_label(hash: &str, prefix_len: usize) -> String {
    let mut label: String = hash.chars().take(prefix_len).collect();
    label.push('…');
    label
}

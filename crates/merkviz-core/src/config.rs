use crate::{Error, Result};
use serde_json::{Map, Value};

/// JSON-backed configuration overrides, addressed by dotted paths under the
/// `tree` namespace (e.g. `tree.width`, `tree.nodeRadius`).
#[derive(Debug, Clone, PartialEq)]
pub struct VizConfig(Value);

impl Default for VizConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl VizConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        cur.as_f64()
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        cur.as_str()
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        // Callers can construct a `VizConfig` from any JSON value via
        // `from_value`. Configs are objects; coerce non-objects so this API
        // never panics on user input.
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

/// Resolved layout and styling constants for one render.
///
/// Defaults reproduce the fixed-canvas visual: nodes on a 650px-wide canvas,
/// 90px between levels, root at the top in bold.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRenderConfig {
    /// Canvas width; per-level horizontal steps divide this.
    pub width: f64,
    /// Vertical distance between adjacent levels.
    pub level_height: f64,
    pub node_radius: f64,
    /// Distance from the canvas top to the root level's center.
    pub top_offset: f64,
    /// Extra canvas height below the leaf level.
    pub bottom_padding: f64,
    /// How far edge endpoints reach into the node circle before the node is
    /// drawn over them.
    pub edge_inset: f64,
    /// Number of hash characters kept in the node label before the ellipsis.
    pub label_prefix_len: usize,
    pub font_size: f64,
    /// Added to `font_size` on the root level, which also renders bold.
    pub root_font_size_bump: f64,
    pub node_stroke: String,
    pub node_stroke_width: f64,
    pub hover_stroke: String,
    pub hover_stroke_width: f64,
    pub edge_stroke: String,
    pub edge_stroke_width: f64,
    pub edge_opacity: f64,
}

impl Default for TreeRenderConfig {
    fn default() -> Self {
        Self {
            width: 650.0,
            level_height: 90.0,
            node_radius: 27.0,
            top_offset: 40.0,
            bottom_padding: 30.0,
            edge_inset: 3.0,
            label_prefix_len: 7,
            font_size: 13.0,
            root_font_size_bump: 3.0,
            node_stroke: "#fff".to_string(),
            node_stroke_width: 2.0,
            hover_stroke: "#ffb200".to_string(),
            hover_stroke_width: 4.0,
            edge_stroke: "#888".to_string(),
            edge_stroke_width: 3.0,
            edge_opacity: 0.22,
        }
    }
}

impl TreeRenderConfig {
    /// Applies `tree.*` overrides from a [`VizConfig`] onto the defaults.
    ///
    /// Dimension overrides must be finite and positive; styling strings are
    /// taken as-is.
    pub fn resolve(config: &VizConfig) -> Result<Self> {
        let mut out = Self::default();

        for (path, slot) in [
            ("tree.width", &mut out.width),
            ("tree.levelHeight", &mut out.level_height),
            ("tree.nodeRadius", &mut out.node_radius),
            ("tree.topOffset", &mut out.top_offset),
            ("tree.bottomPadding", &mut out.bottom_padding),
            ("tree.edgeInset", &mut out.edge_inset),
            ("tree.fontSize", &mut out.font_size),
        ] {
            if let Some(v) = config.get_f64(path) {
                if !v.is_finite() || v <= 0.0 {
                    return Err(Error::InvalidConfig {
                        path: path.to_string(),
                        message: format!("expected a finite positive number, got {v}"),
                    });
                }
                *slot = v;
            }
        }

        if let Some(v) = config.get_f64("tree.labelPrefixLen") {
            if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
                return Err(Error::InvalidConfig {
                    path: "tree.labelPrefixLen".to_string(),
                    message: format!("expected a non-negative integer, got {v}"),
                });
            }
            out.label_prefix_len = v as usize;
        }

        for (path, slot) in [
            ("tree.nodeStroke", &mut out.node_stroke),
            ("tree.hoverStroke", &mut out.hover_stroke),
            ("tree.edgeStroke", &mut out.edge_stroke),
        ] {
            if let Some(v) = config.get_str(path) {
                *slot = v.to_string();
            }
        }

        Ok(out)
    }
}

#![forbid(unsafe_code)]

//! `merkviz` renders pre-built Merkle tree level structures as diagrams.
//!
//! The input is the level structure itself, leaves first and root last;
//! building trees and computing hashes are the caller's business. Anything
//! that is not a level structure renders nothing.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering and the interactive scene
//!   (`merkviz::render`)

pub use merkviz_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use merkviz_render::layout_tree;
    pub use merkviz_render::model::{Bounds, EdgeLayout, NodeLayout, TreeLayout};
    pub use merkviz_render::scene::{SceneNode, Tooltip, TreeScene, TreeViewer};
    pub use merkviz_render::svg::{SvgRenderOptions, render_tree_svg};

    use merkviz_core::{MerkleTree, Result, TreeRenderConfig, VizConfig};
    use serde_json::Value;

    /// Converts an arbitrary string into a conservative SVG `id` token
    /// suitable for embedding multiple diagrams in the same UI tree.
    ///
    /// The root `<svg id="...">` value scopes the embedded stylesheet; if
    /// several inlined SVGs share an id, their hover rules collide.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `t-` when
    ///   needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "t-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "t-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "t" {
            return "t-untitled".to_string();
        }
        out.to_string()
    }

    /// Synchronous layout helper (executor-free).
    pub fn layout_value_sync(value: &Value, config: &TreeRenderConfig) -> Option<TreeLayout> {
        let tree = MerkleTree::from_value(value)?;
        layout_tree(&tree, config)
    }

    pub async fn layout_value(value: &Value, config: &TreeRenderConfig) -> Option<TreeLayout> {
        layout_value_sync(value, config)
    }

    /// Convenience wrapper bundling config overrides and SVG options.
    ///
    /// This is intended for UI integrations where passing separate
    /// parameters per call is noisy. It stays runtime-agnostic: all work is
    /// CPU-bound and does not perform I/O.
    #[derive(Debug, Clone, Default)]
    pub struct Renderer {
        pub config: VizConfig,
        pub svg: SvgRenderOptions,
    }

    impl Renderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_config(mut self, config: VizConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_diagram_id(mut self, diagram_id: &str) -> Self {
            self.svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            self
        }

        /// Resolves the effective layout constants for this renderer.
        pub fn resolved_config(&self) -> Result<TreeRenderConfig> {
            TreeRenderConfig::resolve(&self.config)
        }

        /// Lays out a JSON level structure. `Ok(None)` means "nothing to
        /// render" (absent, empty or malformed tree).
        pub fn layout_sync(&self, value: &Value) -> Result<Option<TreeLayout>> {
            let config = self.resolved_config()?;
            Ok(layout_value_sync(value, &config))
        }

        /// Renders a JSON level structure to an SVG string. `Ok(None)` means
        /// "nothing to render".
        pub fn render_svg_sync(&self, value: &Value) -> Result<Option<String>> {
            let config = self.resolved_config()?;
            let Some(layout) = layout_value_sync(value, &config) else {
                return Ok(None);
            };
            Ok(Some(render_tree_svg(&layout, &config, &self.svg)))
        }

        pub async fn render_svg(&self, value: &Value) -> Result<Option<String>> {
            self.render_svg_sync(value)
        }

        /// An interactive viewer sharing this renderer's configuration.
        pub fn viewer(&self) -> Result<TreeViewer> {
            Ok(TreeViewer::new(self.resolved_config()?))
        }
    }
}

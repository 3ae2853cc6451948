#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for Merkle level structures, plus a
//! retained scene for hosts that deliver pointer events.
//!
//! Layout and SVG emission are pure functions of the tree and the resolved
//! config; the only mutable state in the crate lives in
//! [`scene::TreeViewer`].

pub mod layout;
pub mod model;
pub mod scene;
pub mod svg;

pub use layout::layout_tree;
pub use model::{Bounds, EdgeLayout, NodeLayout, TreeLayout};
pub use scene::{SceneNode, Tooltip, TreeScene, TreeViewer};
pub use svg::{SvgRenderOptions, render_tree_svg};

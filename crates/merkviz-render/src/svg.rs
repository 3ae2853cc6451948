//! SVG emission for laid-out trees.
//!
//! The output is self-contained: per-diagram-id stylesheet, edges first so
//! nodes occlude their endpoints, and a `<title>` child per node carrying
//! the full hash (the static analog of the hover tooltip). Hover highlight
//! lives in the stylesheet, so the same markup works with or without a
//! scripting host.

use crate::model::TreeLayout;
use merkviz_core::TreeRenderConfig;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Diagram id used as the root `<svg>` id and CSS scope. Embedding
    /// several diagrams in one page needs distinct ids.
    pub diagram_id: Option<String>,
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            viewbox_padding: 0.0,
        }
    }
}

pub fn render_tree_svg(
    layout: &TreeLayout,
    config: &TreeRenderConfig,
    options: &SvgRenderOptions,
) -> String {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("merkviz");
    let diagram_id_esc = escape_xml(diagram_id);

    let pad = options.viewbox_padding.max(0.0);
    let vb_min_x = layout.bounds.min_x - pad;
    let vb_min_y = layout.bounds.min_y - pad;
    let vb_w = (layout.bounds.max_x - layout.bounds.min_x + pad * 2.0).max(1.0);
    let vb_h = (layout.bounds.max_y - layout.bounds.min_y + pad * 2.0).max(1.0);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {w} {h}" style="max-width: {max_w}px;" role="graphics-document document" aria-roledescription="merkleTree">"#,
        id = diagram_id_esc,
        min_x = fmt(vb_min_x),
        min_y = fmt(vb_min_y),
        w = fmt(vb_w),
        h = fmt(vb_h),
        max_w = fmt(vb_w),
    );

    let _ = write!(&mut out, r#"<style>{}</style>"#, tree_css(diagram_id, config));

    out.push_str(r#"<g class="edges">"#);
    for edge in &layout.edges {
        let _ = write!(
            &mut out,
            r#"<line class="treeEdge" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#,
            x1 = fmt(edge.x1),
            y1 = fmt(edge.y1),
            x2 = fmt(edge.x2),
            y2 = fmt(edge.y2),
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in &layout.nodes {
        out.push_str(r#"<g class="merkleNode">"#);
        let _ = write!(
            &mut out,
            r#"<title>{hash}</title>"#,
            hash = escape_xml(&node.hash)
        );
        let _ = write!(
            &mut out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#,
            cx = fmt(node.x),
            cy = fmt(node.y),
            r = fmt(node.radius),
            fill = escape_xml(&node.fill),
        );
        let weight = if node.bold { r#" font-weight="bold""# } else { "" };
        let _ = write!(
            &mut out,
            r#"<text x="{x}" y="{y}" font-size="{size}"{weight} fill="{fill}">{label}</text>"#,
            x = fmt(node.x),
            y = fmt(node.y + 5.0),
            size = fmt(node.font_size),
            weight = weight,
            fill = escape_xml(&node.font_color),
            label = escape_xml(&node.label),
        );
        out.push_str("</g>");
    }
    out.push_str("</g>");

    out.push_str("</svg>\n");
    out
}

fn tree_css(diagram_id: &str, config: &TreeRenderConfig) -> String {
    let id = escape_xml(diagram_id);
    let font = r#""trebuchet ms",verdana,arial,sans-serif"#;
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"#{id} .treeEdge{{stroke:{edge_stroke};stroke-width:{edge_width};opacity:{edge_opacity};}}#{id} .merkleNode circle{{stroke:{stroke};stroke-width:{stroke_width};}}#{id} .merkleNode:hover circle{{stroke:{hover};stroke-width:{hover_width};}}#{id} .merkleNode text{{text-anchor:middle;font-family:{font};}}"#,
        id = id,
        edge_stroke = escape_xml(&config.edge_stroke),
        edge_width = fmt(config.edge_stroke_width),
        edge_opacity = fmt_opacity(config.edge_opacity),
        stroke = escape_xml(&config.node_stroke),
        stroke_width = fmt(config.node_stroke_width),
        hover = escape_xml(&config.hover_stroke),
        hover_width = fmt(config.hover_stroke_width),
        font = font,
    );
    out
}

fn fmt(v: f64) -> String {
    // JS-like stringification for SVG attributes: round-trippable decimal
    // form, no `-0`, no tiny float noise from our own arithmetic.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn fmt_opacity(v: f64) -> String {
    // Opacities are fractional on purpose; only clamp and drop `-0`.
    let v = v.clamp(0.0, 1.0);
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

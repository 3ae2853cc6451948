//! Level palette and text-contrast rules for tree nodes.

/// Node fill per level, leaves first, root last. Trees deeper than the
/// palette fall back to [`FALLBACK_NODE_COLOR`] for the extra levels.
pub const LEVEL_COLORS: [&str; 5] = [
    "#e5f4fa", // leaves
    "#b8e5f8",
    "#6fc7ea",
    "#004372",
    "#62ad37", // root
];

pub const FALLBACK_NODE_COLOR: &str = "#bbb";

pub const DARK_TEXT_COLOR: &str = "#222";
pub const LIGHT_TEXT_COLOR: &str = "#fff";

/// Backgrounds brighter than this carry dark text; at or below, light text.
const TEXT_LUMINANCE_THRESHOLD: f64 = 160.0;

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

fn parse_hex_rgb(s: &str) -> Option<Rgb> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    Some(Rgb { r, g, b })
}

/// Perceptual brightness of a `#rgb`/`#rrggbb` color on a 0-255 scale, using
/// the Rec. 601 weights (0.299 R + 0.587 G + 0.114 B).
///
/// Unparseable colors read as black, so they pick up light text.
pub fn luminance(color: &str) -> f64 {
    let Some(Rgb { r, g, b }) = parse_hex_rgb(color) else {
        return 0.0;
    };
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Picks the readable text color for the given background fill.
pub fn text_color(background: &str) -> &'static str {
    if luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        DARK_TEXT_COLOR
    } else {
        LIGHT_TEXT_COLOR
    }
}

/// Node fill for a level index, falling back beyond the palette.
pub fn level_color(level: usize) -> &'static str {
    LEVEL_COLORS.get(level).copied().unwrap_or(FALLBACK_NODE_COLOR)
}

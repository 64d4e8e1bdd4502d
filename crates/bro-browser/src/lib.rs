//! Pipeline orchestration for the bro renderer: wires HTML parsing, CSS
//! parsing, style resolution, layout, and painting into a single
//! `html + css -> PNG` call, plus the `Canvas` abstraction painting
//! targets.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document loading** — turning source strings into a rendered PNG
//! - **The `Canvas` trait** — the abstract bitmap sink the painter draws to
//! - **`ImageCanvas`** — the only implementation, backed by `image::RgbaImage`
//!
//! # Not yet implemented
//!
//! - Fetching remote documents (HTML/CSS are supplied as in-memory strings)
//! - Inline text layout, floats, scripting

pub mod canvas;
pub mod error;

pub use bro_css::{CssParseError, Stylesheet};
pub use bro_html::HtmlParseError;
pub use canvas::{Canvas, ImageCanvas};
pub use error::BroError;

use std::path::Path;

/// The initial containing block's width, in pixels, used when no
/// viewport is otherwise specified. Matches the conventional default
/// viewport width used by minimal browser engines in this lineage.
const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;

/// The non-fatal diagnostics collected while rendering: parse errors
/// that were recovered from rather than treated as fatal.
#[derive(Debug, Default)]
pub struct RenderOutput {
    /// Recoverable HTML parse errors, in encounter order.
    pub html_errors: Vec<HtmlParseError>,
    /// Recoverable CSS parse errors, in encounter order.
    pub css_errors: Vec<CssParseError>,
}

/// Render `html` (and optionally `css`) to a PNG at `output_path`.
///
/// Clears the process-global warning-dedup set first, so repeated
/// library calls (as in tests) don't suppress warnings that are
/// genuinely new to this call.
///
/// # Errors
///
/// Returns [`BroError`] if the layout tree's root cannot be laid out,
/// or if writing the output file fails.
pub fn render_to_png(html: &str, css: Option<&str>, output_path: &Path) -> Result<RenderOutput, BroError> {
    bro_common::clear_warnings();

    let page = bro_html::parse(html);

    let (stylesheet, css_errors) = match css {
        Some(source) => {
            let out = bro_css::parse_stylesheet(source);
            (out.stylesheet, out.errors)
        }
        None => (Stylesheet::default(), Vec::new()),
    };

    let styled = bro_css::generate_style_tree(&page.dom, page.root, &stylesheet);

    let mut layout_root = bro_css::generate_layout_tree(&styled).ok_or(BroError::RootDisplayNone)?;
    if !matches!(layout_root.box_type, bro_css::BoxType::Block) {
        return Err(BroError::UnimplementedBoxType);
    }

    let viewport = bro_css::Dimensions {
        content: bro_css::Rect { x: 0.0, y: 0.0, width: DEFAULT_VIEWPORT_WIDTH, height: 0.0 },
        ..bro_css::Dimensions::default()
    };
    bro_css::layout(&mut layout_root, viewport);

    let display_list = bro_css::build_display_list(&layout_root);

    let width = layout_root.dimensions.content.width.max(1.0) as u32;
    let height = layout_root.dimensions.content.height.max(1.0) as u32;
    let mut canvas = ImageCanvas::new(width, height);
    paint_to_canvas(&mut canvas, &display_list);
    canvas.save(output_path)?;

    Ok(RenderOutput { html_errors: page.errors, css_errors })
}

fn paint_to_canvas(canvas: &mut impl Canvas, display_list: &bro_css::DisplayList) {
    for command in display_list.commands() {
        let bro_css::DisplayCommand::SolidColor(color, rect) = command;
        canvas.set_color(*color);
        canvas.rect(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32);
    }
}

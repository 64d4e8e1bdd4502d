//! Fatal pipeline/CLI-level errors.

/// A fatal error from the rendering pipeline. Recoverable parse issues
/// (`bro_html::HtmlParseError`, `bro_css::CssParseError`) are reported
/// separately through [`crate::RenderOutput`]; this enum is only for
/// conditions that stop the pipeline outright.
#[derive(Debug, thiserror::Error)]
pub enum BroError {
    /// Reading an input file failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or writing the output PNG failed.
    #[error("failed to write PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// The layout tree produced a box type this engine cannot lay out
    /// (an inline box at the tree's root).
    #[error("layout reached an unimplemented box type")]
    UnimplementedBoxType,

    /// The root element is `display: none`; there is nothing to render.
    #[error("root element has display: none; nothing to render")]
    RootDisplayNone,
}

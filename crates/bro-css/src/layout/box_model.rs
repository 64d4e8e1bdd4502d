//! The CSS box model: content, padding, border, and margin rectangles.

/// An axis-aligned rectangle in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Grow this rectangle outward by `edge` on every side.
    #[must_use]
    pub fn expanded_by(self, edge: EdgeSizes) -> Self {
        Self {
            x: self.x - edge.left,
            y: self.y - edge.top,
            width: self.width + edge.left + edge.right,
            height: self.height + edge.top + edge.bottom,
        }
    }
}

/// Widths of the four edges of a box (padding, border, or margin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeSizes {
    /// Top edge width.
    pub top: f32,
    /// Right edge width.
    pub right: f32,
    /// Bottom edge width.
    pub bottom: f32,
    /// Left edge width.
    pub left: f32,
}

/// The four nested boxes of the CSS box model for one layout box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// The content rectangle, relative to the page origin.
    pub content: Rect,
    /// Padding widths.
    pub padding: EdgeSizes,
    /// Border widths.
    pub border: EdgeSizes,
    /// Margin widths.
    pub margin: EdgeSizes,
}

impl Dimensions {
    /// Content area plus padding.
    #[must_use]
    pub fn padding_box(self) -> Rect {
        self.content.expanded_by(self.padding)
    }

    /// Content area plus padding plus border.
    #[must_use]
    pub fn border_box(self) -> Rect {
        self.padding_box().expanded_by(self.border)
    }

    /// Content area plus padding plus border plus margin.
    #[must_use]
    pub fn margin_box(self) -> Rect {
        self.border_box().expanded_by(self.margin)
    }

    /// The content rectangle itself.
    #[must_use]
    pub fn content_box(self) -> Rect {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_by_grows_on_every_side() {
        let rect = Rect { x: 10.0, y: 10.0, width: 100.0, height: 50.0 };
        let edge = EdgeSizes { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 };
        let grown = rect.expanded_by(edge);
        assert_eq!(grown, Rect { x: 6.0, y: 9.0, width: 106.0, height: 54.0 });
    }

    #[test]
    fn box_model_nesting_matches_css2() {
        let mut dims = Dimensions { content: Rect { x: 0.0, y: 0.0, width: 100.0, height: 50.0 }, ..Dimensions::default() };
        dims.padding = EdgeSizes { top: 5.0, right: 5.0, bottom: 5.0, left: 5.0 };
        dims.border = EdgeSizes { top: 1.0, right: 1.0, bottom: 1.0, left: 1.0 };
        dims.margin = EdgeSizes { top: 2.0, right: 2.0, bottom: 2.0, left: 2.0 };

        assert_eq!(dims.padding_box(), Rect { x: -5.0, y: -5.0, width: 110.0, height: 60.0 });
        assert_eq!(dims.border_box(), Rect { x: -6.0, y: -6.0, width: 112.0, height: 62.0 });
        assert_eq!(dims.margin_box(), Rect { x: -8.0, y: -8.0, width: 116.0, height: 66.0 });
    }
}

//! CSS2 block-formatting-context layout: turning a style tree into a tree
//! of positioned, sized boxes.

pub mod box_model;

pub use box_model::{Dimensions, EdgeSizes, Rect};

use crate::cascade::{Display, StyledNode};
use crate::value::{Unit, Value};

/// What kind of formatting context a layout box participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxType {
    /// A block-level box: participates in vertical stacking.
    Block,
    /// An inline-level box. Inline layout is out of scope for this
    /// engine; [`layout`] panics if it ever reaches one.
    Inline,
    /// A synthetic wrapper created to hold inline-level children that
    /// are siblings of block-level boxes.
    AnonymousBlock,
}

/// One box in the layout tree: its type, its computed box-model
/// dimensions, the style node it was generated from (`None` for
/// anonymous boxes), and its children.
#[derive(Debug)]
pub struct LayoutBox<'a> {
    /// The formatting-context role of this box.
    pub box_type: BoxType,
    /// The computed content/padding/border/margin rectangles.
    pub dimensions: Dimensions,
    /// The style this box was generated from. `None` for anonymous
    /// block boxes, which own no styling of their own.
    pub styled_node: Option<&'a StyledNode>,
    /// Child boxes, in layout order.
    pub children: Vec<LayoutBox<'a>>,
}

impl<'a> LayoutBox<'a> {
    fn new(box_type: BoxType, styled_node: Option<&'a StyledNode>) -> Self {
        Self { box_type, dimensions: Dimensions::default(), styled_node, children: Vec::new() }
    }

    fn get_style_node(&self) -> &'a StyledNode {
        self.styled_node.expect("anonymous and inline boxes carry no style node")
    }

    /// The last child if it's an anonymous block, else a freshly pushed
    /// one — used to collect runs of inline children under a block
    /// parent without ever constructing an unwrapped inline run.
    fn inline_container(&mut self) -> &mut Self {
        if !matches!(self.box_type, BoxType::Block) {
            return self;
        }
        let needs_new = !matches!(self.children.last(), Some(b) if b.box_type == BoxType::AnonymousBlock);
        if needs_new {
            self.children.push(Self::new(BoxType::AnonymousBlock, None));
        }
        self.children.last_mut().expect("just pushed or already present")
    }
}

/// Build the layout tree for `style_node` and its descendants.
/// `display: none` subtrees are pruned entirely and produce no box.
#[must_use]
pub fn generate_layout_tree(style_node: &StyledNode) -> Option<LayoutBox<'_>> {
    let box_type = match style_node.display() {
        Display::Block => BoxType::Block,
        Display::Inline => BoxType::Inline,
        Display::None => return None,
    };

    let mut root = LayoutBox::new(box_type, Some(style_node));

    for child in &style_node.children {
        match child.display() {
            Display::Block => {
                if let Some(child_box) = generate_layout_tree(child) {
                    root.children.push(child_box);
                }
            }
            Display::Inline => {
                if let Some(child_box) = generate_layout_tree(child) {
                    root.inline_container().children.push(child_box);
                }
            }
            Display::None => {}
        }
    }

    Some(root)
}

/// Lay out `root` (and its subtree) within `containing_block`.
///
/// # Panics
///
/// Panics if `root` is an `Inline` or `AnonymousBlock` box: tree
/// construction never leaves an inline run unwrapped or produces an
/// inline-typed root, so reaching this case means the layout tree was
/// built incorrectly upstream.
pub fn layout(root: &mut LayoutBox<'_>, containing_block: Dimensions) {
    match root.box_type {
        BoxType::Block => root.layout_block(containing_block),
        BoxType::Inline | BoxType::AnonymousBlock => {
            panic!("layout() reached a {:?} box; inline layout is not implemented", root.box_type)
        }
    }
}

/// `property`'s value, falling back to the `shorthand` property, falling
/// back to `0px` if neither is specified. Mirrors the margin/border/padding
/// shorthand fallback chain every CSS2 box-model property follows.
fn value_or_shorthand(style: &StyledNode, property: &str, shorthand: &str) -> Value {
    style
        .value(property)
        .or_else(|| style.value(shorthand))
        .cloned()
        .unwrap_or(Value::Length(0.0, Unit::Px))
}

impl LayoutBox<'_> {
    fn layout_block(&mut self, containing_block: Dimensions) {
        self.calculate_width(containing_block);
        self.calculate_position(containing_block);
        self.layout_block_children();
        self.calculate_height();
    }

    /// CSS2 §10.3.3: solve for `width`/`margin-left`/`margin-right`
    /// given the other box-model properties and the containing block's
    /// content width.
    fn calculate_width(&mut self, containing_block: Dimensions) {
        let style = self.get_style_node();
        let auto = Value::Keyword("auto".to_string());

        let mut width = style.value("width").cloned().unwrap_or_else(|| auto.clone());
        let mut margin_left = value_or_shorthand(style, "margin-left", "margin");
        let mut margin_right = value_or_shorthand(style, "margin-right", "margin");

        let border_left = value_or_shorthand(style, "border-left-width", "border-width").to_px();
        let border_right = value_or_shorthand(style, "border-right-width", "border-width").to_px();
        let padding_left = value_or_shorthand(style, "padding-left", "padding").to_px();
        let padding_right = value_or_shorthand(style, "padding-right", "padding").to_px();

        let total = margin_left.to_px()
            + margin_right.to_px()
            + border_left
            + border_right
            + padding_left
            + padding_right
            + width.to_px();

        // Over-constrained: a fixed width plus fixed margins exceeds the
        // containing block. Auto margins are forced to zero first so the
        // underflow calculation below absorbs the excess into width.
        if !width.is_auto() && total > f64::from(containing_block.content.width) {
            if margin_left.is_auto() {
                margin_left = Value::Length(0.0, Unit::Px);
            }
            if margin_right.is_auto() {
                margin_right = Value::Length(0.0, Unit::Px);
            }
        }

        let underflow = f64::from(containing_block.content.width) - total;

        match (width.is_auto(), margin_left.is_auto(), margin_right.is_auto()) {
            (false, false, false) => {
                margin_right = Value::Length(margin_right.to_px() + underflow, Unit::Px);
            }
            (false, false, true) => margin_right = Value::Length(underflow, Unit::Px),
            (false, true, false) => margin_left = Value::Length(underflow, Unit::Px),
            (false, true, true) => {
                margin_left = Value::Length(underflow / 2.0, Unit::Px);
                margin_right = Value::Length(underflow / 2.0, Unit::Px);
            }
            (true, _, _) => {
                if margin_left.is_auto() {
                    margin_left = Value::Length(0.0, Unit::Px);
                }
                if margin_right.is_auto() {
                    margin_right = Value::Length(0.0, Unit::Px);
                }
                if underflow >= 0.0 {
                    width = Value::Length(underflow, Unit::Px);
                } else {
                    width = Value::Length(0.0, Unit::Px);
                    margin_right = Value::Length(margin_right.to_px() + underflow, Unit::Px);
                }
            }
        }

        let d = &mut self.dimensions;
        d.content.width = width.to_px() as f32;
        d.padding.left = padding_left as f32;
        d.padding.right = padding_right as f32;
        d.border.left = border_left as f32;
        d.border.right = border_right as f32;
        d.margin.left = margin_left.to_px() as f32;
        d.margin.right = margin_right.to_px() as f32;
    }

    fn calculate_position(&mut self, containing_block: Dimensions) {
        let style = self.get_style_node();
        let d = &mut self.dimensions;

        d.margin.top = value_or_shorthand(style, "margin-top", "margin").to_px() as f32;
        d.margin.bottom = value_or_shorthand(style, "margin-bottom", "margin").to_px() as f32;
        d.border.top = value_or_shorthand(style, "border-top-width", "border-width").to_px() as f32;
        d.border.bottom = value_or_shorthand(style, "border-bottom-width", "border-width").to_px() as f32;
        d.padding.top = value_or_shorthand(style, "padding-top", "padding").to_px() as f32;
        d.padding.bottom = value_or_shorthand(style, "padding-bottom", "padding").to_px() as f32;

        d.content.x = containing_block.content.x + d.margin.left + d.border.left + d.padding.left;
        // Stacks below everything already placed in the containing block.
        d.content.y =
            containing_block.content.y + containing_block.content.height + d.margin.top + d.border.top + d.padding.top;
    }

    fn layout_block_children(&mut self) {
        for child in &mut self.children {
            layout(child, self.dimensions);
            self.dimensions.content.height += child.dimensions.margin_box().height;
        }
    }

    fn calculate_height(&mut self) {
        if let Some(Value::Length(height, Unit::Px)) = self.get_style_node().value("height") {
            self.dimensions.content.height = *height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::generate_style_tree;
    use crate::parser::parse_stylesheet;

    fn root_box_dims(html: &str, css: &str, containing_width: f32) -> Dimensions {
        let page = bro_html::parse(html);
        let sheet = parse_stylesheet(css).stylesheet;
        let styled = generate_style_tree(&page.dom, page.root, &sheet);
        let mut layout_root = generate_layout_tree(&styled).expect("root is not display:none");
        let body = &mut layout_root.children[1];
        let target = &mut body.children[0];
        let containing = Dimensions {
            content: Rect { x: 0.0, y: 0.0, width: containing_width, height: 0.0 },
            ..Dimensions::default()
        };
        layout(target, containing);
        target.dimensions
    }

    #[test]
    fn auto_width_fills_the_containing_block() {
        let dims = root_box_dims("<div>x</div>", "div { }", 200.0);
        assert_eq!(dims.content.width, 200.0);
    }

    #[test]
    fn fixed_width_with_unspecified_margins_is_left_aligned() {
        // Unspecified margin-left/margin-right fall back to the `margin`
        // shorthand, then to 0px -- not `auto` -- so the leftover space is
        // absorbed entirely into margin-right.
        let dims = root_box_dims("<div>x</div>", "div { width: 100px; }", 200.0);
        assert_eq!(dims.content.width, 100.0);
        assert_eq!(dims.margin.left, 0.0);
        assert_eq!(dims.margin.right, 100.0);
    }

    #[test]
    fn margin_auto_shorthand_centers_a_fixed_width_box() {
        let dims = root_box_dims("<div>x</div>", "div { width: 100px; margin: auto; }", 200.0);
        assert_eq!(dims.content.width, 100.0);
        assert_eq!(dims.margin.left, 50.0);
        assert_eq!(dims.margin.right, 50.0);
    }

    #[test]
    fn border_width_and_padding_shorthands_apply_to_both_sides() {
        let dims = root_box_dims("<div>x</div>", "div { width: 100px; border-width: 2px; padding: 3px; }", 200.0);
        assert_eq!(dims.border.left, 2.0);
        assert_eq!(dims.border.right, 2.0);
        assert_eq!(dims.padding.left, 3.0);
        assert_eq!(dims.padding.right, 3.0);
    }

    #[test]
    fn fixed_width_and_left_margin_solves_right_margin() {
        let dims = root_box_dims("<div>x</div>", "div { width: 100px; margin-left: 20px; }", 200.0);
        assert_eq!(dims.margin.left, 20.0);
        assert_eq!(dims.margin.right, 80.0);
    }

    #[test]
    fn over_constrained_fixed_margins_ignore_margin_right() {
        let dims = root_box_dims(
            "<div>x</div>",
            "div { width: 150px; margin-left: 40px; margin-right: 40px; }",
            200.0,
        );
        assert_eq!(dims.content.width, 150.0);
        assert_eq!(dims.margin.left, 40.0);
        // margin-right absorbs the (negative) underflow: 200 - (40+40+150) = -30
        assert_eq!(dims.margin.right, 10.0);
    }

    #[test]
    fn negative_underflow_floors_auto_width_to_zero() {
        let dims = root_box_dims("<div>x</div>", "div { margin-left: 250px; }", 200.0);
        assert_eq!(dims.content.width, 0.0);
    }

    #[test]
    fn block_children_stack_vertically_by_margin_box_height() {
        let page = bro_html::parse("<div><p>a</p><p>b</p></div>");
        let sheet =
            parse_stylesheet("div { width: 100px; } p { height: 20px; margin-bottom: 5px; }").stylesheet;
        let styled = generate_style_tree(&page.dom, page.root, &sheet);
        let mut layout_root = generate_layout_tree(&styled).unwrap();
        let body = &mut layout_root.children[1];
        let div = &mut body.children[0];
        let containing = Dimensions { content: Rect { x: 0.0, y: 0.0, width: 200.0, height: 0.0 }, ..Dimensions::default() };
        layout(div, containing);

        assert_eq!(div.children[0].dimensions.content.y, 0.0);
        // second <p> starts after the first's 20px content + 5px margin-bottom.
        assert_eq!(div.children[1].dimensions.content.y, 25.0);
        assert_eq!(div.dimensions.content.height, 50.0);
    }
}

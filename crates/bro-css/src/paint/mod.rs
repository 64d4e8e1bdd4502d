//! Painting: walking a layout tree into a flat display list.

pub mod display_list;

pub use display_list::{DisplayCommand, DisplayList};

use crate::layout::{LayoutBox, Rect};
use crate::value::{Color, Value};

/// Build the display list for `layout_root` and its subtree, pre-order:
/// a box's own background and border paint before its children's.
#[must_use]
pub fn build_display_list(layout_root: &LayoutBox<'_>) -> DisplayList {
    let mut list = DisplayList::new();
    render_layout_box(&mut list, layout_root);
    list
}

fn render_layout_box(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    render_background(list, layout_box);
    render_borders(list, layout_box);
    for child in &layout_box.children {
        render_layout_box(list, child);
    }
}

fn get_color(layout_box: &LayoutBox<'_>, name: &str) -> Option<Color> {
    let style = layout_box.styled_node?;
    match style.value(name) {
        Some(Value::Color(color)) => Some(*color),
        _ => None,
    }
}

fn render_background(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    if let Some(color) = get_color(layout_box, "background-color") {
        list.push(DisplayCommand::SolidColor(color, layout_box.dimensions.border_box()));
    }
}

/// Borders are painted as four filled strips, since this engine has no
/// notion of a stroked rectangle.
fn render_borders(list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    let Some(color) = get_color(layout_box, "border-color") else { return };
    let d = layout_box.dimensions;
    let border_box = d.border_box();

    list.push(DisplayCommand::SolidColor(
        color,
        Rect { x: border_box.x, y: border_box.y, width: d.border.left, height: border_box.height },
    ));
    list.push(DisplayCommand::SolidColor(
        color,
        Rect {
            x: border_box.x + border_box.width - d.border.right,
            y: border_box.y,
            width: d.border.right,
            height: border_box.height,
        },
    ));
    list.push(DisplayCommand::SolidColor(
        color,
        Rect { x: border_box.x, y: border_box.y, width: border_box.width, height: d.border.top },
    ));
    list.push(DisplayCommand::SolidColor(
        color,
        Rect {
            x: border_box.x,
            y: border_box.y + border_box.height - d.border.bottom,
            width: border_box.width,
            height: d.border.bottom,
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::generate_style_tree;
    use crate::layout::{generate_layout_tree, layout, Dimensions};
    use crate::parser::parse_stylesheet;

    fn paint(html: &str, css: &str) -> DisplayList {
        let page = bro_html::parse(html);
        let sheet = parse_stylesheet(css).stylesheet;
        let styled = generate_style_tree(&page.dom, page.root, &sheet);
        let mut layout_root = generate_layout_tree(&styled).expect("not display:none");
        let containing = Dimensions { content: Rect { x: 0.0, y: 0.0, width: 200.0, height: 0.0 }, ..Dimensions::default() };
        layout(&mut layout_root, containing);
        build_display_list(&layout_root)
    }

    #[test]
    fn background_color_paints_the_border_box() {
        let list = paint("<div>x</div>", "div { background-color: blue; width: 50px; }");
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, DisplayCommand::SolidColor(color, _) if *color == Color::opaque(0, 0, 255))));
    }

    #[test]
    fn border_color_produces_four_strips() {
        let list = paint(
            "<div>x</div>",
            "div { border-color: black; border-top-width: 1px; border-bottom-width: 1px; border-left-width: 1px; border-right-width: 1px; }",
        );
        let border_strips: Vec<_> =
            list.commands().iter().filter(|c| matches!(c, DisplayCommand::SolidColor(color, _) if *color == Color::opaque(0,0,0))).collect();
        assert_eq!(border_strips.len(), 4);
    }

    #[test]
    fn no_background_or_border_means_no_commands() {
        let list = paint("<div>x</div>", "div { }");
        assert!(list.is_empty());
    }
}

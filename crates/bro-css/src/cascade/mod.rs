//! Style resolution: matching rules against the DOM and building the
//! cascaded `StyledNode` tree.

use std::collections::HashMap;

use bro_dom::{Dom, NodeId};

use crate::selector::{matches, Specificity};
use crate::stylesheet::{Rule, Stylesheet};
use crate::value::Value;

/// The cascaded property map for one element: property name to its
/// winning value.
pub type PropertyMap = HashMap<String, Value>;

/// The `display` property, reduced to the three values this engine acts
/// on for layout-tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// `display: block` or the default for any element without a more
    /// specific value.
    #[default]
    Block,
    /// `display: inline`.
    Inline,
    /// `display: none`: the element and its subtree are not laid out.
    None,
}

/// A node plus the declarations that won the cascade for it, recursively
/// mirroring the DOM subtree rooted at `node`.
///
/// This is an owned recursive tree rather than a second arena: a
/// `StyledNode` only ever needs to be walked top-down by the layout
/// builder, so there is no cyclic-reference problem to design around.
#[derive(Debug, Clone)]
pub struct StyledNode {
    /// The DOM node this style applies to.
    pub node: NodeId,
    /// The winning declarations, keyed by property name.
    pub specified_values: PropertyMap,
    /// Styled children, in DOM source order.
    pub children: Vec<StyledNode>,
}

impl StyledNode {
    /// Look up a cascaded property value by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.specified_values.get(name)
    }

    /// The effective `display` value for this node.
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(k)) if k == "inline" => Display::Inline,
            Some(Value::Keyword(k)) if k == "none" => Display::None,
            _ => Display::Block,
        }
    }
}

struct MatchedRule<'a> {
    specificity: Specificity,
    rule: &'a Rule,
}

/// Find every rule in `stylesheet` that matches `node`, along with the
/// specificity each contributes to the cascade.
///
/// A rule's specificity for this match is the specificity of the *first*
/// selector in its list that matches — not the maximum across all of the
/// rule's selectors.
fn matching_rules<'a>(dom: &Dom, node: NodeId, stylesheet: &'a Stylesheet) -> Vec<MatchedRule<'a>> {
    stylesheet
        .rules
        .iter()
        .filter_map(|rule| {
            rule.selectors
                .iter()
                .find(|selector| matches(dom, node, selector))
                .map(|selector| MatchedRule { specificity: selector.specificity(), rule })
        })
        .collect()
}

/// Compute the cascaded property map for `node`: matching rules are
/// stable-sorted ascending by specificity (source order breaks ties),
/// then applied in that order so a later declaration of the same
/// property wins.
fn specified_values(dom: &Dom, node: NodeId, stylesheet: &Stylesheet) -> PropertyMap {
    let mut rules = matching_rules(dom, node, stylesheet);
    rules.sort_by_key(|m| m.specificity);

    let mut values = PropertyMap::new();
    for matched in rules {
        for declaration in &matched.rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    values
}

/// Build the cascaded style tree for the subtree rooted at `root`.
#[must_use]
pub fn generate_style_tree(dom: &Dom, root: NodeId, stylesheet: &Stylesheet) -> StyledNode {
    let specified_values = if dom.is_element(root) {
        specified_values(dom, root, stylesheet)
    } else {
        PropertyMap::new()
    };

    let children = dom.children(root).map(|child| generate_style_tree(dom, child, stylesheet)).collect();

    StyledNode { node: root, specified_values, children }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_stylesheet;
    use bro_html::parse;

    fn style(html: &str, css: &str) -> (Dom, StyledNode) {
        let page = parse(html);
        let sheet = parse_stylesheet(css).stylesheet;
        let styled = generate_style_tree(&page.dom, page.root, &sheet);
        (page.dom, styled)
    }

    #[test]
    fn s1_single_tag_selector_wins() {
        let (_dom, styled) = style("<p>hi</p>", "p { color: red; }");
        // styled root is <html>; body is its second child; <p> is body's first child.
        let body = &styled.children[1];
        let p = &body.children[0];
        assert_eq!(p.value("color"), Some(&Value::Color(crate::value::Color::opaque(255, 0, 0))));
    }

    #[test]
    fn s2_higher_specificity_wins_regardless_of_order() {
        let (_dom, styled) = style(
            "<p class=\"k\">hi</p>",
            "p { color: red; } .k { color: blue; }",
        );
        let body = &styled.children[1];
        let p = &body.children[0];
        assert_eq!(p.value("color"), Some(&Value::Color(crate::value::Color::opaque(0, 0, 255))));
    }

    #[test]
    fn later_declaration_of_equal_specificity_wins() {
        let (_dom, styled) = style("<p>hi</p>", "p { color: red; } p { color: blue; }");
        let body = &styled.children[1];
        let p = &body.children[0];
        assert_eq!(p.value("color"), Some(&Value::Color(crate::value::Color::opaque(0, 0, 255))));
    }

    #[test]
    fn display_defaults_to_block() {
        let (_dom, styled) = style("<p>hi</p>", "");
        let body = &styled.children[1];
        let p = &body.children[0];
        assert_eq!(p.display(), Display::Block);
    }

    #[test]
    fn display_none_is_honored() {
        let (_dom, styled) = style("<p>hi</p>", "p { display: none; }");
        let body = &styled.children[1];
        let p = &body.children[0];
        assert_eq!(p.display(), Display::None);
    }
}

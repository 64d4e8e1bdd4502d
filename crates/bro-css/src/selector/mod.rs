//! Simple selectors and CSS2 specificity.

use bro_dom::{Dom, NodeId};

/// A simple selector: an optional tag name, an optional id, and a set of
/// classes, all of which must hold for a match (see [`matches`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// `None` if unconstrained; `Some("*")` for the universal wildcard.
    pub tag_name: Option<String>,
    /// The required `id`, if any.
    pub id: Option<String>,
    /// Classes that must all be present.
    pub classes: Vec<String>,
}

impl Selector {
    /// A selector is universal if all three fields are empty/absent.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.tag_name.is_none() && self.id.is_none() && self.classes.is_empty()
    }

    /// CSS2 specificity: A = id present?, B = class count, C = tag
    /// present? (cardinal counts, not string lengths).
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        Specificity {
            a: u32::from(self.id.is_some()),
            b: u32::try_from(self.classes.len()).unwrap_or(u32::MAX),
            c: u32::from(self.tag_name.as_deref().is_some_and(|t| t != "*")),
        }
    }
}

/// The (A, B, C) specificity triple, compared lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    /// 1 if an id is present, else 0.
    pub a: u32,
    /// Number of required classes.
    pub b: u32,
    /// 1 if a real tag name is present (not `*`), else 0.
    pub c: u32,
}

/// Does `selector` match `node` in `dom`?
///
/// The `*` wildcard matches immediately, even if the same selector also
/// names an id or classes — this mirrors the lenient behavior this engine
/// intentionally preserves (see the design ledger) rather than a stricter
/// standards-conformant narrowing.
#[must_use]
pub fn matches(dom: &Dom, node: NodeId, selector: &Selector) -> bool {
    let Some(element) = dom.as_element(node) else { return false };

    if selector.tag_name.as_deref() == Some("*") {
        return true;
    }

    if let Some(tag) = &selector.tag_name {
        if tag != &element.tag_name {
            return false;
        }
    }

    if let Some(id) = &selector.id {
        if element.id() != Some(id.as_str()) {
            return false;
        }
    }

    let node_classes = element.classes();
    selector.classes.iter().all(|class| node_classes.contains(class.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bro_dom::{AttributesMap, ElementData, NodeType};

    fn dom_with_element(tag: &str, id: Option<&str>, classes: &[&str]) -> (Dom, NodeId) {
        let mut attrs = AttributesMap::new();
        if let Some(id) = id {
            let _ = attrs.insert("id".to_string(), id.to_string());
        }
        if !classes.is_empty() {
            let _ = attrs.insert("class".to_string(), classes.join(" "));
        }
        let mut dom = Dom::new();
        let node = dom.alloc(NodeType::Element(ElementData { tag_name: tag.to_string(), attrs }));
        (dom, node)
    }

    #[test]
    fn specificity_orders_id_over_class_over_tag() {
        let tag = Selector { tag_name: Some("p".to_string()), id: None, classes: vec![] };
        let class = Selector { tag_name: None, id: None, classes: vec!["k".to_string()] };
        let id = Selector { tag_name: None, id: Some("i".to_string()), classes: vec![] };
        assert!(tag.specificity() < class.specificity());
        assert!(class.specificity() < id.specificity());
    }

    #[test]
    fn universal_matches_even_with_other_constraints() {
        let (dom, node) = dom_with_element("p", None, &[]);
        let selector = Selector { tag_name: Some("*".to_string()), id: Some("x".to_string()), classes: vec![] };
        assert!(matches(&dom, node, &selector));
    }

    #[test]
    fn all_present_fields_must_match() {
        let (dom, node) = dom_with_element("a", Some("i"), &["k"]);
        let ok = Selector { tag_name: Some("a".to_string()), id: Some("i".to_string()), classes: vec!["k".to_string()] };
        assert!(matches(&dom, node, &ok));

        let wrong_tag = Selector { tag_name: Some("div".to_string()), id: None, classes: vec![] };
        assert!(!matches(&dom, node, &wrong_tag));

        let missing_class = Selector { tag_name: None, id: None, classes: vec!["missing".to_string()] };
        assert!(!matches(&dom, node, &missing_class));
    }
}

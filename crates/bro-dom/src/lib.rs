//! An arena-backed DOM tree.
//!
//! Nodes live in a single [`Dom`]'s backing `Vec`, addressed by [`NodeId`].
//! Parent, first-child, last-child and sibling links are therefore plain
//! indices rather than `Rc`/`Weak` pointers, which sidesteps the cyclic
//! ownership that a parent/sibling/child graph would otherwise require.

use std::collections::HashMap;

/// Attribute name → attribute value. Attribute names are unique within a
/// node; insertion order carries no semantics.
pub type AttributesMap = HashMap<String, String>;

/// An index into a [`Dom`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The id of the first node allocated in a tree. The HTML parser
    /// always allocates the synthetic `<html>` root first, so this is
    /// conventionally the tree root.
    pub const ROOT: Self = Self(0);
}

/// The kind of a DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// An element with a lower-case tag name and its attributes.
    Element(ElementData),
    /// A run of text.
    Text(String),
    /// An HTML comment. Carries no rendering semantics; dropped by the
    /// style resolver.
    Comment(String),
    /// A parser-recovery placeholder produced when a node could not
    /// otherwise be constructed. Carries the literal text that triggered
    /// the error. Dropped by the style resolver, like `Comment`.
    Error(String),
}

/// Per-element data: tag name and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    /// Lower-case tag name.
    pub tag_name: String,
    /// Attribute name → value.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// The `id` attribute, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// The `class` attribute split on ASCII whitespace, as a set.
    #[must_use]
    pub fn classes(&self) -> std::collections::HashSet<&str> {
        self.attrs
            .get("class")
            .map(|classes| classes.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

/// One node in a [`Dom`] arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// The node's kind and payload.
    pub node_type: NodeType,
    /// Non-owning back-reference to the parent, or `None` for the root.
    pub parent: Option<NodeId>,
    /// First child in source order, or `None` if childless.
    pub first_child: Option<NodeId>,
    /// Last child in source order, or `None` if childless.
    pub last_child: Option<NodeId>,
    /// Previous sibling, or `None` if this is the first child of its parent.
    pub prev_sibling: Option<NodeId>,
    /// Next sibling, or `None` if this is the last child of its parent.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// An arena of DOM nodes, built up during parsing and treated as
/// immutable once parsing completes.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new, parentless, childless node and return its id.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(node_type));
        id
    }

    /// Look up a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Mutably look up a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Append `child` as the last child of `parent`, per the sibling-list
    /// linker: if `parent` has no children yet, `child` becomes both
    /// first and last; otherwise `child` is threaded onto the end of the
    /// existing sibling list. Always sets `child.parent = parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        let prev_last = self.nodes[parent.0].last_child;
        match prev_last {
            None => {
                self.nodes[parent.0].first_child = Some(child);
                self.nodes[parent.0].last_child = Some(child);
            }
            Some(last) => {
                self.nodes[child.0].prev_sibling = Some(last);
                self.nodes[last.0].next_sibling = Some(child);
                self.nodes[parent.0].last_child = Some(child);
            }
        }
    }

    /// Iterate the children of `id` in source order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        ChildrenIter { dom: self, next: self.nodes[id.0].first_child }
    }

    /// `true` if `id` names an `Element` node.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].node_type, NodeType::Element(_))
    }

    /// The `ElementData` of `id`, if it is an `Element` node.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        }
    }

    /// The text content of `id`, if it is a `Text` node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].node_type {
            NodeType::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Pre-order depth-first traversal of `id` and all its descendants
    /// (`id` itself is yielded first).
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        DescendantsIter { dom: self, stack: vec![id] }
    }
}

struct ChildrenIter<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl Iterator for ChildrenIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.dom.nodes[current.0].next_sibling;
        Some(current)
    }
}

struct DescendantsIter<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        let mut children: Vec<NodeId> = self.dom.children(current).collect();
        children.reverse();
        self.stack.extend(children);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(tag: &str) -> NodeType {
        NodeType::Element(ElementData { tag_name: tag.to_string(), attrs: AttributesMap::new() })
    }

    #[test]
    fn append_child_links_first_and_last() {
        let mut dom = Dom::new();
        let parent = dom.alloc(elem("div"));
        let a = dom.alloc(elem("p"));
        let b = dom.alloc(elem("p"));

        dom.append_child(parent, a);
        dom.append_child(parent, b);

        assert_eq!(dom.get(parent).first_child, Some(a));
        assert_eq!(dom.get(parent).last_child, Some(b));
        assert_eq!(dom.get(a).next_sibling, Some(b));
        assert_eq!(dom.get(b).prev_sibling, Some(a));
        assert_eq!(dom.get(a).prev_sibling, None);
        assert_eq!(dom.get(b).next_sibling, None);
        assert_eq!(dom.get(a).parent, Some(parent));
        assert_eq!(dom.get(b).parent, Some(parent));
    }

    #[test]
    fn children_iterates_in_source_order() {
        let mut dom = Dom::new();
        let parent = dom.alloc(elem("ul"));
        let ids: Vec<NodeId> = (0..3).map(|_| dom.alloc(elem("li"))).collect();
        for id in &ids {
            dom.append_child(parent, *id);
        }
        let collected: Vec<NodeId> = dom.children(parent).collect();
        assert_eq!(collected, ids);
    }

    #[test]
    fn descendants_are_pre_order() {
        let mut dom = Dom::new();
        let root = dom.alloc(elem("html"));
        let head = dom.alloc(elem("head"));
        let body = dom.alloc(elem("body"));
        dom.append_child(root, head);
        dom.append_child(root, body);
        let p = dom.alloc(elem("p"));
        dom.append_child(body, p);

        let order: Vec<NodeId> = dom.descendants(root).collect();
        assert_eq!(order, vec![root, head, body, p]);
    }

    #[test]
    fn element_classes_split_on_whitespace() {
        let mut attrs = AttributesMap::new();
        let _ = attrs.insert("class".to_string(), "a  b\tc".to_string());
        let data = ElementData { tag_name: "div".to_string(), attrs };
        let classes = data.classes();
        assert!(classes.contains("a") && classes.contains("b") && classes.contains("c"));
    }
}

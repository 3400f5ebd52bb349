//! In-memory scene graph
//!
//! A small element tree with ids, classes and attributes. It understands
//! the three selector forms the playback code uses for roots: `#id`,
//! `.class` and a bare tag name.

use std::collections::BTreeMap;

use super::{Scene, SceneError};

/// Handle to a node in a `MemoryScene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    namespace: Option<String>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    inner_html: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MemoryScene {
    nodes: Vec<Node>,
}

impl MemoryScene {
    /// Empty scene holding only a `body` node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                ..Node::default()
            }],
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new element under `parent`
    pub fn add_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.push(tag, None);
        self.attach(parent, id);
        id
    }

    /// Append a new element with an `id` attribute under `parent`
    pub fn add_element_with_id(&mut self, parent: NodeId, tag: &str, element_id: &str) -> NodeId {
        let id = self.add_element(parent, tag);
        self.nodes[id.0].attributes.insert("id".to_string(), element_id.to_string());
        id
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn namespace(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].namespace.as_deref()
    }

    /// Attribute value; `class` reflects the current class list
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let node = &self.nodes[node.0];
        if name == "class" {
            return (!node.classes.is_empty()).then(|| node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].inner_html.as_deref()
    }

    /// Every attached node carrying `class`, anywhere in the scene
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    /// First node matching `selector`, in document order
    pub fn find(&self, selector: &str) -> Option<NodeId> {
        std::iter::once(self.body())
            .chain(self.descendants(self.body()))
            .find(|&id| self.matches(id, selector))
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.nodes[node.0].attributes.get("id").map(String::as_str) == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.has_class(node, class)
        } else {
            self.nodes[node.0].tag == selector
        }
    }

    /// Pre-order descendants of `node`, excluding `node` itself
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn push(&mut self, tag: &str, namespace: Option<&str>) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_string(),
            namespace: namespace.map(str::to_string),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn check(&self, node: NodeId) -> Result<(), SceneError> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::Operation(format!("unknown node {}", node.0)))
        }
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MemoryScene {
    type Element = NodeId;

    fn surface(&self, root_selector: &str) -> Option<NodeId> {
        let root = self.find(root_selector)?;
        self.descendants(root).into_iter().find(|&id| self.tag(id) == "svg")
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(&format!("#{}", id))
    }

    fn query_class(&self, root_selector: &str, class: &str) -> Vec<NodeId> {
        match self.find(root_selector) {
            Some(root) => self
                .descendants(root)
                .into_iter()
                .filter(|&id| self.has_class(id, class))
                .collect(),
            None => Vec::new(),
        }
    }

    fn create_svg_element(&mut self, tag: &str) -> Result<NodeId, SceneError> {
        Ok(self.push(tag, Some(super::SVG_NAMESPACE)))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), SceneError> {
        self.check(*parent)?;
        self.check(*child)?;
        if parent == child || self.descendants(*child).contains(parent) {
            return Err(SceneError::Operation("cannot append a node to its own subtree".to_string()));
        }
        self.attach(*parent, *child);
        Ok(())
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) -> Result<(), SceneError> {
        self.check(*element)?;
        let node = &mut self.nodes[element.0];
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<(), SceneError> {
        self.check(*element)?;
        let classes = &mut self.nodes[element.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) -> Result<(), SceneError> {
        self.check(*element)?;
        self.nodes[element.0].classes.retain(|c| c != class);
        Ok(())
    }

    fn set_inner_html(&mut self, element: &NodeId, html: &str) -> Result<(), SceneError> {
        self.check(*element)?;
        // Markup replaces any children
        for child in std::mem::take(&mut self.nodes[element.0].children) {
            self.nodes[child.0].parent = None;
        }
        self.nodes[element.0].inner_html = Some(html.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tune_scene() -> (MemoryScene, NodeId, NodeId) {
        let mut scene = MemoryScene::new();
        let body = scene.body();
        let paper = scene.add_element_with_id(body, "div", "tune1");
        let svg = scene.add_element(paper, "svg");
        (scene, paper, svg)
    }

    #[test]
    fn test_find_by_id_class_and_tag() {
        let (mut scene, paper, svg) = tune_scene();
        let note = scene.add_element(svg, "path");
        scene.add_class(&note, "abcjs-note").unwrap();

        assert_eq!(scene.find("#tune1"), Some(paper));
        assert_eq!(scene.find("svg"), Some(svg));
        assert_eq!(scene.find(".abcjs-note"), Some(note));
        assert_eq!(scene.find("#missing"), None);
    }

    #[test]
    fn test_surface_is_scoped_to_root() {
        let (mut scene, _, svg) = tune_scene();
        let body = scene.body();
        let other = scene.add_element_with_id(body, "div", "tune2");
        let other_svg = scene.add_element(other, "svg");

        assert_eq!(scene.surface("#tune1"), Some(svg));
        assert_eq!(scene.surface("#tune2"), Some(other_svg));
        assert_eq!(scene.surface("#tune3"), None);
    }

    #[test]
    fn test_class_attribute_reflects_class_list() {
        let (mut scene, _, svg) = tune_scene();
        scene.set_attribute(&svg, "class", "a  b").unwrap();
        scene.add_class(&svg, "c").unwrap();
        scene.add_class(&svg, "a").unwrap();
        scene.remove_class(&svg, "b").unwrap();

        assert_eq!(scene.attribute(svg, "class").as_deref(), Some("a c"));
    }

    #[test]
    fn test_append_moves_node_and_rejects_cycles() {
        let (mut scene, paper, svg) = tune_scene();
        let line = scene.create_svg_element("line").unwrap();
        assert_eq!(scene.parent(line), None);

        scene.append_child(&svg, &line).unwrap();
        scene.append_child(&paper, &line).unwrap();
        assert_eq!(scene.parent(line), Some(paper));
        assert!(!scene.children(svg).contains(&line));

        assert!(scene.append_child(&svg, &paper).is_err());
    }

    #[test]
    fn test_inner_html_detaches_children() {
        let (mut scene, paper, svg) = tune_scene();
        scene.set_inner_html(&paper, "<a>midi</a>").unwrap();

        assert_eq!(scene.inner_html(paper), Some("<a>midi</a>"));
        assert!(scene.children(paper).is_empty());
        assert_eq!(scene.parent(svg), None);
        assert_eq!(scene.surface("#tune1"), None);
    }
}

//! Arena-backed node tree that renderers write into.

use std::collections::BTreeMap;

/// Handle to a node inside a [`Document`].
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its document's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A regular element, e.g. `div`, `pre` or `img`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes other than `class`
    pub attributes: BTreeMap<String, String>,
    /// Class list, in insertion order
    pub classes: Vec<String>,
}

impl Element {
    /// Create an element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
        }
    }

    /// Set an attribute (builder pattern).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a class (builder pattern).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Check whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A script node.
///
/// Scripts produced by markup parsing are inert (`executable == false`); the
/// host only runs scripts that were constructed as executable nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptNode {
    pub attributes: BTreeMap<String, String>,
    pub body: String,
    pub executable: bool,
}

impl ScriptNode {
    /// Create an inert script with the given body.
    pub fn inert(body: impl Into<String>) -> Self {
        Self {
            attributes: BTreeMap::new(),
            body: body.into(),
            executable: false,
        }
    }

    /// Set an attribute (builder pattern).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element(Element),
    Text(String),
    Script(ScriptNode),
}

/// An owned, detached subtree.
///
/// Collaborators (ANSI formatter, markup parser) hand back fragments which
/// the renderers then insert with [`Document::insert_fragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Element {
        element: Element,
        children: Vec<Fragment>,
    },
    Script(ScriptNode),
}

impl Fragment {
    /// A text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// An element fragment with children.
    pub fn element(element: Element, children: Vec<Fragment>) -> Self {
        Fragment::Element { element, children }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The node tree.
///
/// Nodes are never freed; detaching a node only unlinks it from its parent.
/// Methods taking a [`NodeId`] panic if the id was not created by this
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes ever created in this document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node was ever created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Create a detached script node.
    pub fn create_script(&mut self, script: ScriptNode) -> NodeId {
        self.push(NodeKind::Script(script))
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn script(&self, id: NodeId) -> Option<&ScriptNode> {
        match &self.nodes[id.0].kind {
            NodeKind::Script(script) => Some(script),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Unlink `child` from its current parent, if any.
    pub fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes[child.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != child);
        }
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    /// elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Put `new` at the position of `old` under `parent` and detach `old`.
    ///
    /// Returns `false` (and changes nothing) if `old` is not a child of
    /// `parent`.
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> bool {
        let Some(pos) = self.nodes[parent.0].children.iter().position(|c| *c == old) else {
            return false;
        };
        self.detach(new);
        // `new` may have been an earlier sibling; look the slot up again.
        let pos = self.nodes[parent.0]
            .children
            .iter()
            .position(|c| *c == old)
            .unwrap_or(pos);
        self.nodes[parent.0].children[pos] = new;
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;
        true
    }

    /// Detach every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.nodes[parent.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
    }

    /// Set an attribute on an element or script node. `class` is routed to
    /// the class list for elements. Text nodes are left alone.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(element) if name == "class" => {
                element.classes = value
                    .into()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
            }
            NodeKind::Element(element) => {
                element.attributes.insert(name.to_string(), value.into());
            }
            NodeKind::Script(script) => {
                script.attributes.insert(name.to_string(), value.into());
            }
            NodeKind::Text(_) => {}
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => element.attributes.get(name).map(String::as_str),
            NodeKind::Script(script) => script.attributes.get(name).map(String::as_str),
            NodeKind::Text(_) => None,
        }
    }

    /// Add a class to an element. No-op for other node kinds.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// All nodes below `root` in document order, excluding `root`.
    ///
    /// The result is a snapshot; mutating the tree afterwards does not
    /// change it.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Concatenated text of every text and script node below `root`.
    pub fn text_content(&self, root: NodeId) -> String {
        let mut text = String::new();
        let mut nodes = vec![root];
        nodes.extend(self.descendants(root));
        for id in nodes {
            match &self.nodes[id.0].kind {
                NodeKind::Text(t) => text.push_str(t),
                NodeKind::Script(s) => text.push_str(&s.body),
                NodeKind::Element(_) => {}
            }
        }
        text
    }

    /// Materialise `fragment` and append it to `parent`. Returns the id of
    /// the fragment's root node.
    pub fn insert_fragment(&mut self, parent: NodeId, fragment: Fragment) -> NodeId {
        let id = self.build_fragment(fragment);
        self.append_child(parent, id);
        id
    }

    fn build_fragment(&mut self, fragment: Fragment) -> NodeId {
        match fragment {
            Fragment::Text(text) => self.create_text(text),
            Fragment::Script(script) => self.create_script(script),
            Fragment::Element { element, children } => {
                let id = self.push(NodeKind::Element(element));
                for child in children {
                    let child_id = self.build_fragment(child);
                    self.append_child(id, child_id);
                }
                id
            }
        }
    }
}

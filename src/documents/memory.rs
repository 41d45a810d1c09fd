//! In-memory document tree for testing and development.
//!
//! An arena-backed tree with interior mutability: appends notify
//! mutation subscribers the way a live page's observer would, and the
//! hidden flag models the visual suppression toggle. Nodes are never
//! removed, so `NodeId` handles stay valid for the document's lifetime.

use std::collections::HashMap;
use std::sync::RwLock;

use tokio::sync::mpsc;

use crate::traits::document::{FeedDocument, Marker, Mutation, NodeId, Scope};

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    hidden: bool,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            hidden: false,
        }
    }

    fn matches(&self, marker: &Marker) -> bool {
        match marker {
            Marker::Tag(name) => self.tag == *name,
            Marker::ClassEquals(token) => self.classes.iter().any(|c| c == token),
            Marker::ClassContains(fragment) => self.classes.join(" ").contains(fragment.as_str()),
            Marker::AttrPresent(name) => self.attrs.contains_key(name),
            Marker::AttrEquals(name, value) => self.attrs.get(name) == Some(value),
            Marker::AttrContains(name, fragment) => self
                .attrs
                .get(name)
                .is_some_and(|v| v.contains(fragment.as_str())),
        }
    }
}

/// Mutable in-memory document implementing [`FeedDocument`].
///
/// Not a real DOM: just enough structure (tags, classes, attributes,
/// text, parent/child links) for the engine's typed selectors.
pub struct MemoryDocument {
    nodes: RwLock<Vec<NodeData>>,
    subscribers: RwLock<Vec<mpsc::UnboundedSender<Mutation>>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document holding only a `body` root.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(vec![NodeData::new("body")]),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element under `parent` and notify subscribers.
    pub fn append(&self, parent: NodeId, tag: &str) -> NodeId {
        let id = {
            let mut nodes = self.nodes.write().unwrap();
            let id = NodeId(nodes.len());
            let mut data = NodeData::new(tag);
            data.parent = Some(parent);
            nodes.push(data);
            nodes[parent.0].children.push(id);
            id
        };
        self.notify(Mutation { parent });
        id
    }

    /// Add a class token to a node.
    pub fn add_class(&self, id: NodeId, class: &str) {
        self.nodes.write().unwrap()[id.0]
            .classes
            .push(class.to_string());
    }

    /// Set an attribute on a node.
    pub fn set_attr(&self, id: NodeId, name: &str, value: &str) {
        self.nodes.write().unwrap()[id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    /// Set a node's own text content.
    pub fn set_text(&self, id: NodeId, text: &str) {
        self.nodes.write().unwrap()[id.0].text = text.to_string();
    }

    /// Subscribe to append notifications.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Mutation> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.write().unwrap().push(tx);
        rx
    }

    fn notify(&self, mutation: Mutation) {
        self.subscribers
            .write()
            .unwrap()
            .retain(|tx| tx.send(mutation).is_ok());
    }

    fn collect_descendants(nodes: &[NodeData], id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &nodes[id.0].children {
            out.push(child);
            Self::collect_descendants(nodes, child, out);
        }
    }

    fn collect_text(nodes: &[NodeData], id: NodeId, out: &mut Vec<String>) {
        let data = &nodes[id.0];
        if !data.text.is_empty() {
            out.push(data.text.clone());
        }
        for &child in &data.children {
            Self::collect_text(nodes, child, out);
        }
    }
}

impl FeedDocument for MemoryDocument {
    fn select(&self, scope: Scope, marker: &Marker) -> Vec<NodeId> {
        let nodes = self.nodes.read().unwrap();
        let pool: Vec<NodeId> = match scope {
            Scope::Document => (0..nodes.len()).map(NodeId).collect(),
            Scope::Subtree(root) => {
                let mut out = Vec::new();
                Self::collect_descendants(&nodes, root, &mut out);
                out
            }
        };
        pool.into_iter()
            .filter(|id| nodes[id.0].matches(marker))
            .collect()
    }

    fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.read().unwrap()[id.0].children.clone()
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.read().unwrap()[id.0].parent
    }

    fn matches(&self, id: NodeId, marker: &Marker) -> bool {
        self.nodes.read().unwrap()[id.0].matches(marker)
    }

    fn text(&self, id: NodeId) -> String {
        let nodes = self.nodes.read().unwrap();
        let mut parts = Vec::new();
        Self::collect_text(&nodes, id, &mut parts);
        parts.join(" ")
    }

    fn set_hidden(&self, id: NodeId, hidden: bool) {
        self.nodes.write().unwrap()[id.0].hidden = hidden;
    }

    fn is_hidden(&self, id: NodeId) -> bool {
        self.nodes.read().unwrap()[id.0].hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_class_and_attr() {
        let doc = MemoryDocument::new();
        let card = doc.append(doc.root(), "div");
        doc.add_class(card, "feed-shared-update-v2");
        doc.set_attr(card, "data-urn", "urn:li:activity:42");
        let other = doc.append(doc.root(), "div");
        doc.add_class(other, "sidebar");

        assert_eq!(
            doc.select(Scope::Document, &Marker::class_contains("feed-shared")),
            vec![card]
        );
        assert_eq!(
            doc.select(Scope::Document, &Marker::attr_contains("data-urn", "activity")),
            vec![card]
        );
        assert!(doc
            .select(Scope::Document, &Marker::attr_present("data-missing"))
            .is_empty());
    }

    #[test]
    fn test_subtree_scope_excludes_root() {
        let doc = MemoryDocument::new();
        let outer = doc.append(doc.root(), "div");
        doc.add_class(outer, "wrapper");
        let inner = doc.append(outer, "div");
        doc.add_class(inner, "wrapper");

        assert_eq!(
            doc.select(Scope::Subtree(outer), &Marker::class_equals("wrapper")),
            vec![inner]
        );
    }

    #[test]
    fn test_subtree_text_is_space_joined() {
        let doc = MemoryDocument::new();
        let post = doc.append(doc.root(), "div");
        let header = doc.append(post, "div");
        doc.set_text(header, "Jane Doe likes this");
        let body = doc.append(post, "p");
        doc.set_text(body, "Great news!");

        assert_eq!(doc.text(post), "Jane Doe likes this Great news!");
    }

    #[test]
    fn test_append_notifies_subscribers() {
        let doc = MemoryDocument::new();
        let mut rx = doc.subscribe();

        let parent = doc.append(doc.root(), "div");
        let event = rx.try_recv().unwrap();
        assert_eq!(event.parent, doc.root());

        doc.append(parent, "span");
        let event = rx.try_recv().unwrap();
        assert_eq!(event.parent, parent);
    }

    #[test]
    fn test_hidden_toggle() {
        let doc = MemoryDocument::new();
        let node = doc.append(doc.root(), "div");

        assert!(!doc.is_hidden(node));
        doc.set_hidden(node, true);
        assert!(doc.is_hidden(node));
        doc.set_hidden(node, false);
        assert!(!doc.is_hidden(node));
    }
}

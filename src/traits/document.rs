//! The host document seam.
//!
//! The feed page's tree is an external, untrusted collaborator: markup
//! changes without notice and regions the engine expects may simply not
//! exist. This trait is the narrow read/annotate view the engine needs.
//! Queries run against the live tree, may return nothing, and never
//! fail. The only mutation the engine performs is the visibility
//! toggle; classification state lives in the scanner's own map, not on
//! the document.

/// Opaque handle to one node in the host tree.
///
/// Handles stay valid for the page session: the host appends and
/// rewrites but the engine never observes node destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Typed structural selector.
///
/// A small vocabulary instead of CSS strings: enough to express every
/// marker the heuristics use, and cheap for any document impl to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Element tag name (`span`, `div`, ...).
    Tag(String),

    /// Exact class token is present.
    ClassEquals(String),

    /// The joined class attribute contains this substring
    /// (CSS `[class*=...]` semantics).
    ClassContains(String),

    /// Attribute is present, any value.
    AttrPresent(String),

    /// Attribute equals this value exactly.
    AttrEquals(String, String),

    /// Attribute value contains this substring.
    AttrContains(String, String),
}

impl Marker {
    pub fn tag(name: impl Into<String>) -> Self {
        Marker::Tag(name.into())
    }

    pub fn class_equals(token: impl Into<String>) -> Self {
        Marker::ClassEquals(token.into())
    }

    pub fn class_contains(fragment: impl Into<String>) -> Self {
        Marker::ClassContains(fragment.into())
    }

    pub fn attr_present(name: impl Into<String>) -> Self {
        Marker::AttrPresent(name.into())
    }

    pub fn attr_equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Marker::AttrEquals(name.into(), value.into())
    }

    pub fn attr_contains(name: impl Into<String>, fragment: impl Into<String>) -> Self {
        Marker::AttrContains(name.into(), fragment.into())
    }
}

/// Where a query looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole document.
    Document,

    /// Descendants of this node (the node itself excluded).
    Subtree(NodeId),
}

/// Notification that the host added nodes somewhere under `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub parent: NodeId,
}

/// Read/annotate view of the live host tree.
///
/// All methods are synchronous: the host dispatches everything on one
/// loop, so reads see a consistent tree for the duration of a scan.
pub trait FeedDocument: Send + Sync {
    /// All nodes in `scope` matching `marker`, in document order.
    fn select(&self, scope: Scope, marker: &Marker) -> Vec<NodeId>;

    /// Direct children, in order.
    fn children(&self, id: NodeId) -> Vec<NodeId>;

    /// Parent node, if any.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Does this node match the marker?
    fn matches(&self, id: NodeId, marker: &Marker) -> bool;

    /// Subtree text content, space-joined.
    fn text(&self, id: NodeId) -> String;

    /// Toggle the node's visual suppression state.
    fn set_hidden(&self, id: NodeId, hidden: bool);

    /// Is the node currently suppressed?
    fn is_hidden(&self, id: NodeId) -> bool;
}

impl<D: FeedDocument + ?Sized> FeedDocument for std::sync::Arc<D> {
    fn select(&self, scope: Scope, marker: &Marker) -> Vec<NodeId> {
        (**self).select(scope, marker)
    }

    fn children(&self, id: NodeId) -> Vec<NodeId> {
        (**self).children(id)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        (**self).parent(id)
    }

    fn matches(&self, id: NodeId, marker: &Marker) -> bool {
        (**self).matches(id, marker)
    }

    fn text(&self, id: NodeId) -> String {
        (**self).text(id)
    }

    fn set_hidden(&self, id: NodeId, hidden: bool) {
        (**self).set_hidden(id, hidden)
    }

    fn is_hidden(&self, id: NodeId) -> bool {
        (**self).is_hidden(id)
    }
}

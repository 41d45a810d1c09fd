//! Test utilities: feed-page scaffolding and item builders.
//!
//! Builds the markup shapes the heuristics look for without hand-wiring
//! [`MemoryDocument`] nodes in every test.
//!
//! [`MemoryDocument`]: crate::documents::MemoryDocument

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::discovery::SCROLL_CONTAINER_CLASS;
use crate::documents::MemoryDocument;
use crate::traits::document::{FeedDocument, Mutation, NodeId};

/// Declarative description of one feed item.
///
/// `new()` produces a recognizable feed card (primary class present);
/// `anonymous()` produces a bare div only discoverable through the
/// positional fallback.
#[derive(Debug, Clone, Default)]
pub struct FeedItemBuilder {
    card_class: bool,
    attrs: Vec<(String, String)>,
    spans: Vec<String>,
    sub_description: Option<String>,
    header: Option<String>,
    body: Option<String>,
    poll: bool,
    ad_banner: bool,
    follow_widget: bool,
}

impl FeedItemBuilder {
    /// A standard feed card.
    pub fn new() -> Self {
        Self {
            card_class: true,
            ..Default::default()
        }
    }

    /// A card without any recognizable class or attribute.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set an attribute on the item node.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add an inline span with the given text.
    pub fn span(mut self, text: impl Into<String>) -> Self {
        self.spans.push(text.into());
        self
    }

    /// Add the standalone "Promoted" label span.
    pub fn promoted_label(self) -> Self {
        self.span("Promoted")
    }

    /// Add the standalone "Suggested" label span.
    pub fn suggested_label(self) -> Self {
        self.span("Suggested")
    }

    /// Set the actor sub-description region text.
    pub fn sub_description(mut self, text: impl Into<String>) -> Self {
        self.sub_description = Some(text.into());
        self
    }

    /// Set the header region text.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Set the body region text.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(text.into());
        self
    }

    /// Add poll markup.
    pub fn poll(mut self) -> Self {
        self.poll = true;
        self
    }

    /// Add the ad-banner marker.
    pub fn ad_banner(mut self) -> Self {
        self.ad_banner = true;
        self
    }

    /// Add a follow-recommendation widget.
    pub fn follow_widget(mut self) -> Self {
        self.follow_widget = true;
        self
    }

    fn build(self, doc: &MemoryDocument, parent: NodeId) -> NodeId {
        let item = doc.append(parent, "div");
        if self.card_class {
            doc.add_class(item, "feed-shared-update-v2");
        }
        for (name, value) in &self.attrs {
            doc.set_attr(item, name, value);
        }
        if let Some(text) = &self.sub_description {
            let sub = doc.append(item, "span");
            doc.add_class(sub, "update-components-actor__sub-description");
            doc.set_text(sub, text);
        }
        if let Some(text) = &self.header {
            let header = doc.append(item, "div");
            doc.add_class(header, "update-components-header");
            doc.set_text(header, text);
        }
        if let Some(text) = &self.body {
            let body = doc.append(item, "div");
            doc.add_class(body, "feed-shared-update-v2__description");
            doc.set_text(body, text);
        }
        for text in &self.spans {
            let span = doc.append(item, "span");
            doc.set_text(span, text);
        }
        if self.poll {
            let poll = doc.append(item, "div");
            doc.add_class(poll, "feed-shared-poll");
        }
        if self.ad_banner {
            let banner = doc.append(item, "div");
            doc.set_attr(banner, "data-ad-banner-identifier", "1");
        }
        if self.follow_widget {
            let widget = doc.append(item, "div");
            doc.add_class(widget, "follow-recommendation-list");
        }
        item
    }
}

/// A feed page scaffold: `role=main` landmark containing the
/// infinite-scroll container, with each pushed item wrapped the way the
/// host nests its cards.
pub struct FeedPage {
    doc: Arc<MemoryDocument>,
    container: NodeId,
}

impl Default for FeedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedPage {
    pub fn new() -> Self {
        let doc = Arc::new(MemoryDocument::new());
        let main = doc.append(doc.root(), "div");
        doc.set_attr(main, "role", "main");
        let container = doc.append(main, "div");
        doc.add_class(container, SCROLL_CONTAINER_CLASS);
        Self { doc, container }
    }

    /// Shared handle to the underlying document.
    pub fn doc(&self) -> Arc<MemoryDocument> {
        Arc::clone(&self.doc)
    }

    /// The scroll container node.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Subscribe to mutation notifications, as the watcher does.
    pub fn mutations(&self) -> mpsc::UnboundedReceiver<Mutation> {
        self.doc.subscribe()
    }

    /// Append one feed item (inside its wrapper div) and return the
    /// item node.
    pub fn push(&self, item: FeedItemBuilder) -> NodeId {
        let wrapper = self.doc.append(self.container, "div");
        item.build(&self.doc, wrapper)
    }

    /// Append a sidebar premium-upsell region outside the feed.
    pub fn sidebar_upsell(&self) -> NodeId {
        let aside = self.doc.append(self.doc.root(), "aside");
        let upsell = self.doc.append(aside, "div");
        self.doc.add_class(upsell, "premium-upsell");
        upsell
    }

    /// Is the item's hideable wrapper (direct child of the container)
    /// currently suppressed?
    pub fn is_item_hidden(&self, item: NodeId) -> bool {
        let mut node = item;
        while let Some(parent) = self.doc.parent(node) {
            if parent == self.container {
                return self.doc.is_hidden(node);
            }
            node = parent;
        }
        self.doc.is_hidden(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::document::{Marker, Scope};

    #[test]
    fn test_page_scaffold_shape() {
        let page = FeedPage::new();
        let doc = page.doc();

        let main = doc.parent(page.container()).unwrap();
        assert!(doc.matches(main, &Marker::attr_equals("role", "main")));
        assert!(doc.matches(
            page.container(),
            &Marker::class_equals(SCROLL_CONTAINER_CLASS)
        ));
    }

    #[test]
    fn test_pushed_item_is_wrapped() {
        let page = FeedPage::new();
        let item = page.push(FeedItemBuilder::new());

        let wrapper = page.doc().parent(item).unwrap();
        assert_eq!(page.doc().parent(wrapper), Some(page.container()));
    }

    #[test]
    fn test_builder_emits_expected_markup() {
        let page = FeedPage::new();
        let item = page.push(
            FeedItemBuilder::new()
                .sub_description("Promoted")
                .header("header text")
                .body("body text")
                .poll(),
        );

        let doc = page.doc();
        assert!(!doc
            .select(
                Scope::Subtree(item),
                &Marker::class_contains("update-components-actor__sub-description")
            )
            .is_empty());
        assert!(!doc
            .select(Scope::Subtree(item), &Marker::class_contains("poll"))
            .is_empty());
        assert_eq!(doc.text(item), "Promoted header text body text");
    }
}

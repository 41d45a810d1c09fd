//! The feed scanner: discovery, classification, hide/reveal.
//!
//! The scanner owns all classification state in an identity-keyed map
//! (node handle to item state) rather than writing flags into the host
//! tree. An item enters the map before its rules run, so each node is
//! evaluated at most once per configuration epoch no matter how often
//! mutation and timer callbacks fire.

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::classifier::classify;
use crate::discovery::{self, SCROLL_CONTAINER_CLASS};
use crate::traits::document::{FeedDocument, Marker, NodeId, Scope};
use crate::types::{FilterConfig, HideReason};

/// Classification state for one discovered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemState {
    /// Why the item was hidden, if it was.
    reason: Option<HideReason>,

    /// The ancestor actually hidden (a direct child of the feed
    /// container), when `reason` is set.
    target: Option<NodeId>,
}

/// Counters for one scan pass. Observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Items newly classified this pass.
    pub examined: usize,

    /// Items newly hidden this pass.
    pub hidden: usize,

    /// Running hidden count since the last configuration reset.
    pub removed_total: u64,

    /// When the pass ran.
    pub at: DateTime<Utc>,
}

/// Scans the feed, hides matches, and remembers what it did so a
/// configuration change can undo all of it.
pub struct FeedScanner {
    items: IndexMap<NodeId, ItemState>,
    sidebar: IndexSet<NodeId>,
    removed: u64,
}

impl Default for FeedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedScanner {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            sidebar: IndexSet::new(),
            removed: 0,
        }
    }

    /// Items hidden since the last reset.
    pub fn removed_count(&self) -> u64 {
        self.removed
    }

    /// Has this node already been through the rule chain this epoch?
    pub fn is_classified(&self, id: NodeId) -> bool {
        self.items.contains_key(&id)
    }

    /// The tag a node was hidden under, if any.
    pub fn hide_reason(&self, id: NodeId) -> Option<HideReason> {
        if self.sidebar.contains(&id) {
            return Some(HideReason::SidebarAd);
        }
        self.items.get(&id).and_then(|state| state.reason)
    }

    /// One full pass: classify fresh candidates, hide matches, sweep
    /// sidebar noise. Safe to call repeatedly; cost is bounded by newly
    /// discovered nodes.
    pub fn scan<D: FeedDocument>(&mut self, doc: &D, config: &FilterConfig) -> ScanOutcome {
        let known = &self.items;
        let fresh = discovery::find_candidates(doc, |id| known.contains_key(&id));

        let examined = fresh.len();
        let mut hidden = 0;

        for item in fresh {
            // Mark before evaluating: re-entrant discovery must never
            // process the same node twice.
            self.items.insert(
                item,
                ItemState {
                    reason: None,
                    target: None,
                },
            );

            let snapshot = discovery::capture_snapshot(doc, item);
            if let Some(reason) = classify(&snapshot, config) {
                let target = hide_target(doc, item);
                doc.set_hidden(target, true);
                self.items.insert(
                    item,
                    ItemState {
                        reason: Some(reason),
                        target: Some(target),
                    },
                );
                self.removed += 1;
                hidden += 1;
                debug!(reason = %reason, "hid feed item");
            }
        }

        self.sweep_sidebar(doc);

        ScanOutcome {
            examined,
            hidden,
            removed_total: self.removed,
            at: Utc::now(),
        }
    }

    /// Hide peripheral promotional regions, every pass, regardless of
    /// per-category configuration. See DESIGN.md on why this sweep is
    /// not gated by the ads toggle.
    fn sweep_sidebar<D: FeedDocument>(&mut self, doc: &D) {
        let markers = [
            Marker::class_equals("ad-banner-container"),
            Marker::attr_present("data-ad-banner-identifier"),
            Marker::class_contains("ad-banner"),
            Marker::class_equals("premium-upsell"),
        ];

        for marker in &markers {
            for id in doc.select(Scope::Document, marker) {
                // Feed items matched here were already handled by the
                // rule chain; the sweep covers everything else.
                if self.items.contains_key(&id) {
                    continue;
                }
                doc.set_hidden(id, true);
                self.sidebar.insert(id);
            }
        }
    }

    /// Reveal everything and forget all classification state.
    ///
    /// Called on configuration change so the next scan re-evaluates the
    /// whole document under the new rules. The removed count reads zero
    /// until that scan hides something.
    pub fn reset<D: FeedDocument>(&mut self, doc: &D) {
        for state in self.items.values() {
            if let Some(target) = state.target {
                doc.set_hidden(target, false);
            }
        }
        for &id in &self.sidebar {
            doc.set_hidden(id, false);
        }
        self.items.clear();
        self.sidebar.clear();
        self.removed = 0;
    }
}

/// Walk up from `item` to the node that should actually be hidden: the
/// nearest ancestor (possibly `item` itself) whose parent is the feed
/// scroll container or the main-content landmark. Stops at the root if
/// neither exists.
fn hide_target<D: FeedDocument>(doc: &D, item: NodeId) -> NodeId {
    let container = Marker::class_equals(SCROLL_CONTAINER_CLASS);
    let main = Marker::attr_equals("role", "main");

    let mut target = item;
    while let Some(parent) = doc.parent(target) {
        if doc.matches(parent, &container) || doc.matches(parent, &main) {
            break;
        }
        target = parent;
    }
    target
}

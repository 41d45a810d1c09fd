//! Candidate discovery and snapshot capture.
//!
//! The host rewrites its markup often, so discovery unions several
//! alternative structural queries instead of trusting any single one.
//! Every call recomputes the candidate list from the live tree; nothing
//! is cached across calls.

use std::collections::HashSet;

use crate::traits::document::{FeedDocument, Marker, NodeId, Scope};
use crate::types::{ItemSnapshot, StructuralMarkers};

/// Class token on the infinite-scroll feed container.
pub const SCROLL_CONTAINER_CLASS: &str = "scaffold-finite-scroll__content";

fn candidate_markers() -> [Marker; 2] {
    [
        // Exact token: `class_contains` would also pull in inner
        // regions like `feed-shared-update-v2__description`.
        Marker::class_equals("feed-shared-update-v2"),
        Marker::attr_contains("data-urn", "activity"),
    ]
}

/// Find feed items not yet classified, in document order.
///
/// Three fallback queries tolerate markup variation: the primary feed
/// card class, the activity-urn attribute, and grandchildren of the
/// scroll container. Already-classified nodes (per `is_classified`) are
/// skipped so repeated scans only pay for new content.
pub fn find_candidates<D, F>(doc: &D, is_classified: F) -> Vec<NodeId>
where
    D: FeedDocument,
    F: Fn(NodeId) -> bool,
{
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    let mut push = |id: NodeId| {
        if !is_classified(id) && seen.insert(id) {
            candidates.push(id);
        }
    };

    for marker in candidate_markers() {
        for id in doc.select(Scope::Document, &marker) {
            push(id);
        }
    }

    // Positional fallback: direct grandchild divs of the scroll
    // container.
    let div = Marker::tag("div");
    for container in doc.select(Scope::Document, &Marker::class_equals(SCROLL_CONTAINER_CLASS)) {
        for child in doc.children(container) {
            if !doc.matches(child, &div) {
                continue;
            }
            for grandchild in doc.children(child) {
                if doc.matches(grandchild, &div) {
                    push(grandchild);
                }
            }
        }
    }

    candidates
}

/// First non-empty subtree text among the given markers.
fn first_text<D: FeedDocument>(doc: &D, item: NodeId, markers: &[Marker]) -> String {
    for marker in markers {
        for id in doc.select(Scope::Subtree(item), marker) {
            let text = doc.text(id).trim().to_string();
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

fn any_match<D: FeedDocument>(doc: &D, item: NodeId, markers: &[Marker]) -> bool {
    markers
        .iter()
        .any(|m| !doc.select(Scope::Subtree(item), m).is_empty())
}

/// Capture one candidate's text and structural markers.
///
/// Every region is optional in the host markup: whatever is absent
/// comes back empty, never as an error.
pub fn capture_snapshot<D: FeedDocument>(doc: &D, item: NodeId) -> ItemSnapshot {
    let inline_labels = doc
        .select(Scope::Subtree(item), &Marker::tag("span"))
        .into_iter()
        .map(|id| doc.text(id).trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let actor_sub_description = first_text(
        doc,
        item,
        &[
            Marker::class_contains("feed-shared-actor__sub-description"),
            Marker::class_contains("update-components-actor__sub-description"),
            Marker::attr_present("data-ad-banner-identifier"),
        ],
    );

    let header_text = first_text(
        doc,
        item,
        &[
            Marker::class_contains("update-components-header"),
            Marker::attr_contains("data-urn", "header"),
            Marker::class_contains("feed-shared-header"),
        ],
    );

    let body_text = first_text(
        doc,
        item,
        &[
            Marker::class_contains("feed-shared-update-v2__description"),
            Marker::class_contains("update-components-text"),
            Marker::class_contains("break-words"),
            Marker::class_contains("feed-shared-text"),
        ],
    );

    let markers = StructuralMarkers {
        ad_banner: any_match(
            doc,
            item,
            &[
                Marker::attr_present("data-ad-banner-identifier"),
                Marker::class_contains("ad-banner"),
            ],
        ),
        poll: any_match(
            doc,
            item,
            &[
                Marker::class_contains("feed-shared-poll"),
                Marker::class_contains("poll"),
                Marker::attr_contains("data-urn", "poll"),
            ],
        ),
        follow_widget: any_match(doc, item, &[Marker::class_contains("follow-recommendation")]),
    };

    ItemSnapshot {
        inline_labels,
        actor_sub_description,
        header_text,
        body_text,
        full_text: doc.text(item).trim().to_string(),
        markers,
    }
}

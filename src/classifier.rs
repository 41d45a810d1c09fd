//! Ordered rule-chain classification.
//!
//! The priority contract: structural signals (promoted, suggested, ad,
//! follow-rec, poll, reaction) outrank keyword categories, and within
//! each group order is fixed. Evaluation short-circuits on the first
//! rule whose category is enabled and whose predicate matches, so every
//! hidden item carries exactly one tag.

use crate::patterns::{
    matches_any, ANNIVERSARY, CELEBRATION, EVENT, FOLLOW_PHRASES, NEWSLETTER,
    PROMOTED_LABELS, REACTION_HEADER, SUGGESTED_LABELS,
};
use crate::types::{FilterCategory, FilterConfig, HideReason, ItemSnapshot};

/// One entry in the rule chain: the category that gates it, the tag it
/// yields, and a pure predicate over the item snapshot.
struct Rule {
    category: FilterCategory,
    tag: HideReason,
    matches: fn(&ItemSnapshot) -> bool,
}

/// The chain, highest priority first. Order is part of the contract.
static RULES: &[Rule] = &[
    Rule {
        category: FilterCategory::Promoted,
        tag: HideReason::Promoted,
        matches: is_promoted,
    },
    Rule {
        category: FilterCategory::Suggested,
        tag: HideReason::Suggested,
        matches: is_suggested,
    },
    Rule {
        category: FilterCategory::Ads,
        tag: HideReason::Ad,
        matches: |s| s.markers.ad_banner,
    },
    Rule {
        category: FilterCategory::FollowRecommendations,
        tag: HideReason::FollowRec,
        matches: |s| s.markers.follow_widget || matches_any(&s.full_text, &FOLLOW_PHRASES),
    },
    Rule {
        category: FilterCategory::Polls,
        tag: HideReason::Poll,
        matches: |s| s.markers.poll,
    },
    Rule {
        category: FilterCategory::Reactions,
        tag: HideReason::Reaction,
        matches: |s| !s.header_text.is_empty() && matches_any(&s.header_text, &REACTION_HEADER),
    },
    Rule {
        category: FilterCategory::Anniversaries,
        tag: HideReason::Anniversary,
        matches: |s| matches_any(&s.aggregated_text(), &ANNIVERSARY),
    },
    Rule {
        category: FilterCategory::Celebrations,
        tag: HideReason::Celebration,
        matches: |s| matches_any(&s.aggregated_text(), &CELEBRATION),
    },
    Rule {
        category: FilterCategory::Newsletters,
        tag: HideReason::Newsletter,
        matches: |s| matches_any(&s.aggregated_text(), &NEWSLETTER),
    },
    Rule {
        category: FilterCategory::Events,
        tag: HideReason::Event,
        matches: |s| matches_any(&s.aggregated_text(), &EVENT),
    },
];

fn is_promoted(s: &ItemSnapshot) -> bool {
    let sub = s.actor_sub_description.to_lowercase();
    if sub.contains("promoted") || sub.contains("sponsorizzat") {
        return true;
    }
    s.inline_labels
        .iter()
        .any(|label| PROMOTED_LABELS.iter().any(|&p| label.eq_ignore_ascii_case(p)))
}

fn is_suggested(s: &ItemSnapshot) -> bool {
    s.inline_labels
        .iter()
        .any(|label| SUGGESTED_LABELS.iter().any(|&p| label.eq_ignore_ascii_case(p)))
}

/// Classify one item snapshot under the given configuration.
///
/// Returns the first matching enabled rule's tag, or `None` when the
/// item should stay visible. Pure: same snapshot and config, same
/// answer.
pub fn classify(snapshot: &ItemSnapshot, config: &FilterConfig) -> Option<HideReason> {
    RULES
        .iter()
        .find(|rule| config.enabled(rule.category) && (rule.matches)(snapshot))
        .map(|rule| rule.tag)
}

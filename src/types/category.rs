//! Filter categories and hide reasons.

use serde::{Deserialize, Serialize};

/// One of the 11 fixed filter types a user can toggle.
///
/// Every category has a stable storage key (the camelCase name the
/// settings surface persists) and a human-readable label. `GroupPosts`
/// ships with a toggle but no detection heuristic yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    Anniversaries,
    Celebrations,
    Ads,
    Suggested,
    Polls,
    Promoted,
    FollowRecommendations,
    Reactions,
    GroupPosts,
    Newsletters,
    Events,
}

impl FilterCategory {
    /// All categories, in declaration order.
    pub const ALL: [FilterCategory; 11] = [
        FilterCategory::Anniversaries,
        FilterCategory::Celebrations,
        FilterCategory::Ads,
        FilterCategory::Suggested,
        FilterCategory::Polls,
        FilterCategory::Promoted,
        FilterCategory::FollowRecommendations,
        FilterCategory::Reactions,
        FilterCategory::GroupPosts,
        FilterCategory::Newsletters,
        FilterCategory::Events,
    ];

    /// Storage key used by the persisted settings record.
    pub fn key(&self) -> &'static str {
        match self {
            FilterCategory::Anniversaries => "anniversaries",
            FilterCategory::Celebrations => "celebrations",
            FilterCategory::Ads => "ads",
            FilterCategory::Suggested => "suggested",
            FilterCategory::Polls => "polls",
            FilterCategory::Promoted => "promoted",
            FilterCategory::FollowRecommendations => "followRecommendations",
            FilterCategory::Reactions => "reactions",
            FilterCategory::GroupPosts => "groupPosts",
            FilterCategory::Newsletters => "newsletters",
            FilterCategory::Events => "events",
        }
    }

    /// Look up a category by its storage key.
    ///
    /// Unknown keys return `None`; callers ignore them so a newer
    /// settings surface never breaks an older engine.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Human-readable label for settings surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Anniversaries => "Work anniversaries",
            FilterCategory::Celebrations => "Celebrations & new jobs",
            FilterCategory::Ads => "Ads",
            FilterCategory::Suggested => "Suggested posts",
            FilterCategory::Polls => "Polls",
            FilterCategory::Promoted => "Promoted posts",
            FilterCategory::FollowRecommendations => "Follow suggestions & upsells",
            FilterCategory::Reactions => "Liked / commented by others",
            FilterCategory::GroupPosts => "Group posts",
            FilterCategory::Newsletters => "Newsletters",
            FilterCategory::Events => "Events",
        }
    }
}

/// Why a node was hidden.
///
/// Exactly one reason per hidden item; the classifier's first matching
/// rule wins. `SidebarAd` is reserved for the unconditional sidebar
/// sweep and never comes out of the rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HideReason {
    Promoted,
    Suggested,
    Ad,
    FollowRec,
    Poll,
    Reaction,
    Anniversary,
    Celebration,
    Newsletter,
    Event,
    SidebarAd,
}

impl HideReason {
    /// Stable tag string, suitable for annotations and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            HideReason::Promoted => "promoted",
            HideReason::Suggested => "suggested",
            HideReason::Ad => "ad",
            HideReason::FollowRec => "follow-rec",
            HideReason::Poll => "poll",
            HideReason::Reaction => "reaction",
            HideReason::Anniversary => "anniversary",
            HideReason::Celebration => "celebration",
            HideReason::Newsletter => "newsletter",
            HideReason::Event => "event",
            HideReason::SidebarAd => "sidebar-ad",
        }
    }

    /// The user-toggleable category this reason belongs to, if any.
    pub fn category(&self) -> Option<FilterCategory> {
        match self {
            HideReason::Promoted => Some(FilterCategory::Promoted),
            HideReason::Suggested => Some(FilterCategory::Suggested),
            HideReason::Ad => Some(FilterCategory::Ads),
            HideReason::FollowRec => Some(FilterCategory::FollowRecommendations),
            HideReason::Poll => Some(FilterCategory::Polls),
            HideReason::Reaction => Some(FilterCategory::Reactions),
            HideReason::Anniversary => Some(FilterCategory::Anniversaries),
            HideReason::Celebration => Some(FilterCategory::Celebrations),
            HideReason::Newsletter => Some(FilterCategory::Newsletters),
            HideReason::Event => Some(FilterCategory::Events),
            HideReason::SidebarAd => None,
        }
    }
}

impl std::fmt::Display for HideReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in FilterCategory::ALL {
            assert_eq!(FilterCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(FilterCategory::from_key("darkMode"), None);
    }

    #[test]
    fn test_reason_tags() {
        assert_eq!(HideReason::FollowRec.as_str(), "follow-rec");
        assert_eq!(HideReason::SidebarAd.as_str(), "sidebar-ad");
        assert_eq!(HideReason::SidebarAd.category(), None);
        assert_eq!(
            HideReason::Anniversary.category(),
            Some(FilterCategory::Anniversaries)
        );
    }
}

//! Active filter configuration and merge semantics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::category::FilterCategory;

/// Partial persisted settings: storage key to enabled flag.
///
/// This is the shape the external store hands back. Keys may be missing
/// (filled from defaults) or unknown (ignored).
pub type SettingsPatch = HashMap<String, bool>;

/// The active configuration: one enabled flag per category.
///
/// Invariant: every category always has a value. Partial persisted
/// state is merged over [`FilterConfig::default`], so the mapping is
/// total no matter what the store returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub anniversaries: bool,
    pub celebrations: bool,
    pub ads: bool,
    pub suggested: bool,
    pub polls: bool,
    pub promoted: bool,
    pub follow_recommendations: bool,
    pub reactions: bool,
    pub group_posts: bool,
    pub newsletters: bool,
    pub events: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            anniversaries: true,
            celebrations: true,
            ads: true,
            suggested: true,
            polls: true,
            promoted: true,
            follow_recommendations: true,
            reactions: true,
            group_posts: false,
            newsletters: true,
            events: true,
        }
    }
}

impl FilterConfig {
    /// Is the given category enabled?
    pub fn enabled(&self, category: FilterCategory) -> bool {
        match category {
            FilterCategory::Anniversaries => self.anniversaries,
            FilterCategory::Celebrations => self.celebrations,
            FilterCategory::Ads => self.ads,
            FilterCategory::Suggested => self.suggested,
            FilterCategory::Polls => self.polls,
            FilterCategory::Promoted => self.promoted,
            FilterCategory::FollowRecommendations => self.follow_recommendations,
            FilterCategory::Reactions => self.reactions,
            FilterCategory::GroupPosts => self.group_posts,
            FilterCategory::Newsletters => self.newsletters,
            FilterCategory::Events => self.events,
        }
    }

    /// Set a single category flag.
    pub fn set(&mut self, category: FilterCategory, enabled: bool) {
        match category {
            FilterCategory::Anniversaries => self.anniversaries = enabled,
            FilterCategory::Celebrations => self.celebrations = enabled,
            FilterCategory::Ads => self.ads = enabled,
            FilterCategory::Suggested => self.suggested = enabled,
            FilterCategory::Polls => self.polls = enabled,
            FilterCategory::Promoted => self.promoted = enabled,
            FilterCategory::FollowRecommendations => self.follow_recommendations = enabled,
            FilterCategory::Reactions => self.reactions = enabled,
            FilterCategory::GroupPosts => self.group_posts = enabled,
            FilterCategory::Newsletters => self.newsletters = enabled,
            FilterCategory::Events => self.events = enabled,
        }
    }

    /// Builder-style flag override.
    pub fn with(mut self, category: FilterCategory, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    /// Defaults with every persisted key applied over them.
    ///
    /// Known keys override the default; unknown keys are ignored;
    /// anything absent stays at its default value.
    pub fn merged(patch: &SettingsPatch) -> Self {
        let mut config = Self::default();
        for (key, &enabled) in patch {
            if let Some(category) = FilterCategory::from_key(key) {
                config.set(category, enabled);
            }
        }
        config
    }

    /// Complete 11-key state, the full-replacement record a settings
    /// surface writes back to the store.
    pub fn as_patch(&self) -> SettingsPatch {
        FilterCategory::ALL
            .iter()
            .map(|&c| (c.key().to_string(), self.enabled(c)))
            .collect()
    }
}

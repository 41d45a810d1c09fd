//! Shared contract with the settings surface.
//!
//! The surface itself (checkboxes, rendering) lives outside this crate;
//! what is shared is the grouping of categories into sections and the
//! rule that every write replaces the complete record.

use crate::error::Result;
use crate::traits::store::SettingsStore;
use crate::types::{FilterCategory, FilterConfig};

/// One informational group of toggles on the settings surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub categories: &'static [FilterCategory],
}

/// The three sections, in display order.
pub const SECTIONS: &[SettingsSection] = &[
    SettingsSection {
        title: "Clutter",
        categories: &[
            FilterCategory::Ads,
            FilterCategory::Promoted,
            FilterCategory::Suggested,
            FilterCategory::FollowRecommendations,
        ],
    },
    SettingsSection {
        title: "Social noise",
        categories: &[
            FilterCategory::Anniversaries,
            FilterCategory::Celebrations,
            FilterCategory::Reactions,
        ],
    },
    SettingsSection {
        title: "Content types",
        categories: &[
            FilterCategory::Polls,
            FilterCategory::Newsletters,
            FilterCategory::Events,
            FilterCategory::GroupPosts,
        ],
    },
];

/// Persist the complete current selection.
///
/// Always a full 11-key replacement, never a partial patch: the engine
/// merges whatever comes back over defaults, so full writes keep both
/// sides convergent.
pub async fn write_selection<S: SettingsStore>(store: &S, config: &FilterConfig) -> Result<()> {
    store.save(&config.as_patch()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemorySettingsStore;

    #[test]
    fn test_sections_cover_every_category_once() {
        let mut seen = Vec::new();
        for section in SECTIONS {
            for &category in section.categories {
                assert!(!seen.contains(&category), "{:?} listed twice", category);
                seen.push(category);
            }
        }
        assert_eq!(seen.len(), FilterCategory::ALL.len());
    }

    #[tokio::test]
    async fn test_write_selection_is_full_replacement() {
        let store = MemorySettingsStore::new();
        let config = FilterConfig::default().with(FilterCategory::Events, false);

        write_selection(&store, &config).await.unwrap();

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored.len(), 11);
        assert_eq!(stored.get("events"), Some(&false));
        assert_eq!(stored.get("ads"), Some(&true));
    }
}

//! Text/structure snapshot of one candidate feed item.

/// Structural markers observed on a candidate item.
///
/// Non-text signals the classifier keys on. Absent markup simply reads
/// as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralMarkers {
    /// Ad-banner identifier or ad-banner class fragment present.
    pub ad_banner: bool,

    /// Poll markup present.
    pub poll: bool,

    /// Follow-recommendation widget present.
    pub follow_widget: bool,
}

/// Everything the classifier needs to know about one item, captured at
/// scan time.
///
/// The snapshot decouples classification from the live tree: rules are
/// pure functions over this value, so they are deterministic with
/// respect to the item's state at capture. Regions missing from the
/// host markup come through as empty strings, never as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSnapshot {
    /// Trimmed text of every inline label (span) in the item.
    pub inline_labels: Vec<String>,

    /// Actor sub-description region text, or empty.
    pub actor_sub_description: String,

    /// Header region text ("X liked this" lives here), or empty.
    pub header_text: String,

    /// Body/description region text, or empty.
    pub body_text: String,

    /// Full subtree text, used for phrase sweeps over the whole item.
    pub full_text: String,

    /// Structural markers present on the item.
    pub markers: StructuralMarkers,
}

impl ItemSnapshot {
    /// Body and header text space-joined: the input for the keyword
    /// categories (anniversary, celebration, newsletter, event).
    pub fn aggregated_text(&self) -> String {
        format!("{} {}", self.body_text, self.header_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregated_text_tolerates_missing_regions() {
        let snapshot = ItemSnapshot {
            header_text: "Jane Doe likes this".to_string(),
            ..Default::default()
        };
        assert_eq!(snapshot.aggregated_text(), " Jane Doe likes this");

        let empty = ItemSnapshot::default();
        assert_eq!(empty.aggregated_text(), " ");
    }
}

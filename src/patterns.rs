//! Pattern library: fixed, ordered text heuristics per category.
//!
//! Pure data shipped with the engine, not user-configurable. Each list
//! covers English plus Italian variants. All patterns are
//! case-insensitive and match anywhere in the input.

use regex::Regex;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("static pattern must compile"))
        .collect()
}

/// Work-anniversary phrasings.
pub static ANNIVERSARY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"work anniversary",
        r"anniversary at",
        r"celebrating.*year",
        r"\d+\s*(?:year|yr)s?\s*at\s",
        r"anniversario",
        r"anni presso",
    ])
});

/// New-position / congratulation phrasings.
pub static CELEBRATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"started a new position",
        r"new job",
        r"new role",
        r"just joined",
        r"happy to share",
        r"excited to announce",
        r"i'm happy to announce",
        r"promoted to",
        r"congrats",
        r"congratulations",
        r"birthday",
        r"kudos",
        r"ha iniziato",
        r"nuovo ruolo",
        r"nuova posizione",
    ])
});

/// Newsletter publication phrasings.
pub static NEWSLETTER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"published a newsletter",
        r"newsletter:",
        r"subscribe to",
        r"ha pubblicato una newsletter",
    ])
});

/// Event announcement phrasings.
pub static EVENT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"is attending",
        r"is hosting",
        r"upcoming event",
        r"virtual event",
        r"register now",
        r"parteciper",
    ])
});

/// Header phrasings for posts surfaced by someone else's reaction.
pub static REACTION_HEADER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"likes?\s+this",
        r"commented\s+on\s+this",
        r"reacted\s+to\s+this",
        r"finds\s+this",
        r"loves?\s+this",
        r"celebrates?\s+this",
        r"supports?\s+this",
        r"piace a",
        r"ha commentato",
        r"ha reagito",
    ])
});

/// Follow-recommendation and upsell phrasings, swept over the whole
/// item text.
pub static FOLLOW_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"people you may know",
        r"try linkedin premium",
        r"people also viewed",
        r"add to your feed",
        r"persone che potresti conoscere",
        r"prova linkedin premium",
    ])
});

/// Inline labels that mark a promoted post when they are the entire
/// trimmed content of an element.
pub const PROMOTED_LABELS: &[&str] = &["promoted", "sponsorizzato", "sponsorizzata"];

/// Inline labels that mark an algorithmically suggested post.
pub const SUGGESTED_LABELS: &[&str] = &["suggested", "consigliato", "consigliata"];

/// True iff any pattern in the list matches anywhere in `text`.
pub fn matches_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anniversary_variants() {
        assert!(matches_any("Celebrating my work anniversary!", &ANNIVERSARY));
        assert!(matches_any("3 years at Acme Corp", &ANNIVERSARY));
        assert!(matches_any("1 yr at Initech", &ANNIVERSARY));
        assert!(matches_any("Buon anniversario di lavoro", &ANNIVERSARY));
        assert!(!matches_any("We shipped a new feature", &ANNIVERSARY));
    }

    #[test]
    fn test_celebration_variants() {
        assert!(matches_any("Excited to announce my new chapter", &CELEBRATION));
        assert!(matches_any("I just started a NEW POSITION", &CELEBRATION));
        assert!(matches_any("Maria ha iniziato un nuovo ruolo", &CELEBRATION));
        assert!(!matches_any("Quarterly results are out", &CELEBRATION));
    }

    #[test]
    fn test_newsletter_and_event() {
        assert!(matches_any("Ann published a newsletter", &NEWSLETTER));
        assert!(matches_any("Newsletter: weekly roundup", &NEWSLETTER));
        assert!(matches_any("Bob is attending Tech Summit", &EVENT));
        assert!(matches_any("Register now for our virtual event", &EVENT));
        assert!(!matches_any("Lunch was great", &EVENT));
    }

    #[test]
    fn test_reaction_headers() {
        assert!(matches_any("Jane Doe likes this", &REACTION_HEADER));
        assert!(matches_any("John commented on this", &REACTION_HEADER));
        assert!(matches_any("A Luca piace a questo post", &REACTION_HEADER));
        assert!(!matches_any("Jane Doe posted this", &REACTION_HEADER));
    }

    #[test]
    fn test_follow_phrases() {
        assert!(matches_any("People you may know in Tech", &FOLLOW_PHRASES));
        assert!(matches_any("Try LinkedIn Premium for free", &FOLLOW_PHRASES));
        assert!(!matches_any("People I met yesterday", &FOLLOW_PHRASES));
    }
}

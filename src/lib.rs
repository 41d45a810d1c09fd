//! Heuristic feed-filtering engine for infinite-scroll social feeds.
//!
//! The engine watches a live, externally-mutated document tree,
//! classifies each top-level feed item exactly once per configuration
//! epoch against an ordered set of heuristics (keyword patterns plus
//! structural markers), hides matches, and reacts to persisted-settings
//! changes by revealing everything and re-scanning.
//!
//! # Design
//!
//! - The host tree and the settings store are external collaborators
//!   behind the [`traits::FeedDocument`] and [`traits::SettingsStore`]
//!   seams. Both are untrusted: missing markup under-matches and a
//!   failed settings load falls back to defaults. Nothing in the scan
//!   path can fail.
//! - Classification is an explicit ordered rule chain
//!   ([`classifier::classify`]) over a pure text/structure snapshot,
//!   first enabled match wins.
//! - The [`scanner::FeedScanner`] keeps classification state in its own
//!   identity-keyed map instead of annotating host nodes.
//! - One task drives everything ([`session::FilterSession::run`]):
//!   mutation notifications, a periodic fallback sweep, and settings
//!   changes are merged into a single consumer, so scans never
//!   interleave.
//!
//! # Usage
//!
//! ```rust,ignore
//! use feedsift::{FilterSession, MemorySettingsStore};
//! use tokio_util::sync::CancellationToken;
//!
//! let mutations = document.subscribe();
//! let mut session = FilterSession::new(document, store);
//! session.run(mutations, CancellationToken::new()).await?;
//! ```

pub mod classifier;
pub mod discovery;
pub mod documents;
pub mod error;
pub mod patterns;
pub mod scanner;
pub mod session;
pub mod settings;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;
pub mod watcher;

// Re-export core types at crate root
pub use error::{Result, SiftError};
pub use traits::{
    document::{FeedDocument, Marker, Mutation, NodeId, Scope},
    store::SettingsStore,
};
pub use types::{
    category::{FilterCategory, HideReason},
    config::{FilterConfig, SettingsPatch},
    snapshot::{ItemSnapshot, StructuralMarkers},
};

// Re-export the engine pieces
pub use classifier::classify;
pub use discovery::{capture_snapshot, find_candidates};
pub use scanner::{FeedScanner, ScanOutcome};
pub use session::{FilterSession, SessionOptions};
pub use settings::{write_selection, SettingsSection, SECTIONS};
pub use watcher::{trigger_stream, ScanTrigger, DEFAULT_SWEEP_INTERVAL};

// Re-export collaborator implementations
pub use documents::MemoryDocument;
pub use stores::MemorySettingsStore;

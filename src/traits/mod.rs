//! Trait seams to the engine's external collaborators.

pub mod document;
pub mod store;

pub use document::{FeedDocument, Marker, Mutation, NodeId, Scope};
pub use store::SettingsStore;

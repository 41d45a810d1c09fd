//! Data types for the filtering engine.

pub mod category;
pub mod config;
pub mod snapshot;

pub use category::{FilterCategory, HideReason};
pub use config::{FilterConfig, SettingsPatch};
pub use snapshot::{ItemSnapshot, StructuralMarkers};

//! The persisted-settings seam.
//!
//! The settings surface and the engine share one synchronized
//! key-value record. The engine treats the stored value as an opaque
//! partial mapping and always merges it over hard-coded defaults, so a
//! missing, stale, or partially-written record can only ever
//! under-filter.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::types::SettingsPatch;

/// Asynchronous access to the persisted settings record, plus a change
/// feed.
///
/// Change notifications deliver the full replacement value the
/// settings surface wrote, never a delta.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the persisted record. `None` when nothing was ever saved.
    async fn load(&self) -> Result<Option<SettingsPatch>>;

    /// Replace the persisted record.
    async fn save(&self, patch: &SettingsPatch) -> Result<()>;

    /// Subscribe to replacement writes.
    ///
    /// Each subscription gets every change made after it was created.
    fn changes(&self) -> mpsc::UnboundedReceiver<SettingsPatch>;
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    async fn load(&self) -> Result<Option<SettingsPatch>> {
        (**self).load().await
    }

    async fn save(&self, patch: &SettingsPatch) -> Result<()> {
        (**self).save(patch).await
    }

    fn changes(&self) -> mpsc::UnboundedReceiver<SettingsPatch> {
        (**self).changes()
    }
}

//! In-memory settings store for testing and development.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::traits::store::SettingsStore;
use crate::types::SettingsPatch;

/// In-memory synchronized key-value record.
///
/// Holds the persisted value as opaque JSON, the way the real store
/// does, and fans out replacement writes to subscribers. Data is lost
/// on drop; use for tests and development only.
pub struct MemorySettingsStore {
    value: RwLock<Option<Value>>,
    subscribers: RwLock<Vec<mpsc::UnboundedSender<SettingsPatch>>>,
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySettingsStore {
    /// Create an empty store (nothing persisted yet).
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Seed the store with a raw JSON value, bypassing notification.
    ///
    /// Lets tests model records written by older or foreign versions
    /// of the settings surface.
    pub fn with_raw_value(value: Value) -> Self {
        Self {
            value: RwLock::new(Some(value)),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    fn decode(value: &Value) -> Result<SettingsPatch> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> Result<Option<SettingsPatch>> {
        match &*self.value.read().unwrap() {
            Some(value) => Ok(Some(Self::decode(value)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, patch: &SettingsPatch) -> Result<()> {
        let value = serde_json::to_value(patch)?;
        *self.value.write().unwrap() = Some(value);
        self.subscribers
            .write()
            .unwrap()
            .retain(|tx| tx.send(patch.clone()).is_ok());
        Ok(())
    }

    fn changes(&self) -> mpsc::UnboundedReceiver<SettingsPatch> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.write().unwrap().push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_empty() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemorySettingsStore::new();
        let patch = SettingsPatch::from([("ads".to_string(), false)]);

        store.save(&patch).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(patch));
    }

    #[tokio::test]
    async fn test_save_notifies_subscribers() {
        let store = MemorySettingsStore::new();
        let mut changes = store.changes();

        let patch = SettingsPatch::from([("polls".to_string(), false)]);
        store.save(&patch).await.unwrap();

        assert_eq!(changes.try_recv().unwrap(), patch);
    }

    #[tokio::test]
    async fn test_malformed_raw_value_is_an_error() {
        let store = MemorySettingsStore::with_raw_value(serde_json::json!("not an object"));
        assert!(store.load().await.is_err());
    }
}

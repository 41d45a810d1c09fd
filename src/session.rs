//! The filter session: configuration bridge plus scan loop.
//!
//! Owns the active configuration as a plain value, replaced wholesale
//! whenever the settings store reports a change. All scans and
//! configuration swaps happen on the one task driving [`run`], matching
//! the host page's single-threaded dispatch model.
//!
//! [`run`]: FilterSession::run

use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::scanner::{FeedScanner, ScanOutcome};
use crate::traits::document::{FeedDocument, Mutation};
use crate::traits::store::SettingsStore;
use crate::types::{FilterConfig, SettingsPatch};
use crate::watcher::{self, ScanTrigger, DEFAULT_SWEEP_INTERVAL};

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Fallback sweep interval for the periodic trigger.
    pub sweep_every: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            sweep_every: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

/// Ties the document, the settings store, and the scanner together for
/// the lifetime of a page session.
///
/// # Example
///
/// ```rust,ignore
/// let session = FilterSession::new(document, store);
/// session.run(mutations, shutdown).await?;
/// ```
pub struct FilterSession<D: FeedDocument, S: SettingsStore> {
    doc: D,
    store: S,
    scanner: FeedScanner,
    config: FilterConfig,
    options: SessionOptions,
}

impl<D: FeedDocument, S: SettingsStore> FilterSession<D, S> {
    pub fn new(doc: D, store: S) -> Self {
        Self::with_options(doc, store, SessionOptions::default())
    }

    pub fn with_options(doc: D, store: S, options: SessionOptions) -> Self {
        Self {
            doc,
            store,
            scanner: FeedScanner::new(),
            config: FilterConfig::default(),
            options,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Items hidden since the last configuration change.
    pub fn removed_count(&self) -> u64 {
        self.scanner.removed_count()
    }

    /// Read-only access to the scanner's classification state.
    pub fn scanner(&self) -> &FeedScanner {
        &self.scanner
    }

    /// Load persisted settings merged over defaults.
    ///
    /// A store failure leaves the defaults in effect: the degraded mode
    /// is under-filtering, never a dead page.
    pub async fn load_config(&mut self) {
        match self.store.load().await {
            Ok(Some(patch)) => {
                self.config = FilterConfig::merged(&patch);
                info!("loaded persisted filter settings");
            }
            Ok(None) => {
                self.config = FilterConfig::default();
                debug!("no persisted settings, using defaults");
            }
            Err(error) => {
                self.config = FilterConfig::default();
                warn!(%error, "settings load failed, using defaults");
            }
        }
    }

    /// Run one scan pass under the current configuration.
    pub fn scan_once(&mut self) -> ScanOutcome {
        self.scanner.scan(&self.doc, &self.config)
    }

    /// React to a replacement settings write: swap the configuration,
    /// reveal and forget everything hidden, then re-scan immediately so
    /// relaxed filters show items promptly and tightened ones
    /// re-evaluate the whole feed.
    pub fn apply_settings(&mut self, patch: &SettingsPatch) -> ScanOutcome {
        self.config = FilterConfig::merged(patch);
        self.scanner.reset(&self.doc);
        info!("filter settings changed, re-scanning feed");
        self.scan_once()
    }

    /// Drive the session until `shutdown` fires: load configuration,
    /// scan on startup, then on every mutation, tick, and settings
    /// change.
    pub async fn run(
        &mut self,
        mutations: mpsc::UnboundedReceiver<Mutation>,
        shutdown: CancellationToken,
    ) -> Result<()> {
        // Subscribe before the initial load so a write landing in
        // between is not lost.
        let mut changes = self.store.changes();
        let mut changes_open = true;

        self.load_config().await;

        let triggers =
            watcher::trigger_stream(mutations, self.options.sweep_every, shutdown.clone());
        tokio::pin!(triggers);

        loop {
            tokio::select! {
                trigger = triggers.next() => match trigger {
                    Some(trigger) => {
                        let outcome = self.scan_once();
                        if outcome.hidden > 0 || trigger == ScanTrigger::Startup {
                            debug!(
                                ?trigger,
                                examined = outcome.examined,
                                hidden = outcome.hidden,
                                removed_total = outcome.removed_total,
                                "scan pass complete"
                            );
                        }
                    }
                    None => break,
                },
                patch = changes.recv(), if changes_open => match patch {
                    Some(patch) => {
                        self.apply_settings(&patch);
                    }
                    // Store gone: keep filtering under the last known
                    // configuration.
                    None => changes_open = false,
                },
            }
        }

        Ok(())
    }
}

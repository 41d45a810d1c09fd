//! End-to-end session tests: live document, settings store, and the
//! full run loop reacting to mutations, timer sweeps, and settings
//! changes.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use feedsift::testing::{FeedItemBuilder, FeedPage};
use feedsift::{
    FeedDocument, FilterCategory, FilterConfig, FilterSession, MemorySettingsStore, SettingsStore,
};

/// Poll until `cond` holds or the budget runs out. Paused-clock sleeps
/// auto-advance, so this is cheap.
async fn wait_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached in time");
}

#[tokio::test(start_paused = true)]
async fn full_session_lifecycle() {
    let page = FeedPage::new();
    let promoted = page.push(FeedItemBuilder::new().promoted_label());
    let clean = page.push(FeedItemBuilder::new().body("weekly engineering notes"));

    let store = Arc::new(MemorySettingsStore::new());
    let mutations = page.mutations();
    let shutdown = CancellationToken::new();

    let mut session = FilterSession::new(page.doc(), store.clone());
    let handle = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            session.run(mutations, shutdown).await.unwrap();
            session
        })
    };

    // Startup scan hides the promoted item only.
    wait_until(|| page.is_item_hidden(promoted)).await;
    assert!(!page.is_item_hidden(clean));

    // Infinite scroll appends a reaction post; the mutation trigger
    // picks it up.
    let reaction = page.push(FeedItemBuilder::new().header("Ann Smith commented on this"));
    wait_until(|| page.is_item_hidden(reaction)).await;

    // The settings surface turns promoted and reactions off: hidden
    // items reappear after the reset-and-rescan.
    let relaxed = FilterConfig::default()
        .with(FilterCategory::Promoted, false)
        .with(FilterCategory::Reactions, false)
        .as_patch();
    store.save(&relaxed).await.unwrap();
    wait_until(|| !page.is_item_hidden(promoted) && !page.is_item_hidden(reaction)).await;
    assert!(!page.is_item_hidden(clean));

    // Tightening back re-evaluates the whole feed within one pass.
    store.save(&FilterConfig::default().as_patch()).await.unwrap();
    wait_until(|| page.is_item_hidden(promoted) && page.is_item_hidden(reaction)).await;

    shutdown.cancel();
    let session = handle.await.unwrap();
    assert!(session.config().promoted);
    assert_eq!(session.removed_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn timer_sweep_catches_unnotified_content() {
    let page = FeedPage::new();
    let store = Arc::new(MemorySettingsStore::new());
    let shutdown = CancellationToken::new();

    // No mutation feed at all: drop the receiver's sender side by
    // subscribing on a throwaway channel.
    let (_tx, mutations) = tokio::sync::mpsc::unbounded_channel();

    let mut session = FilterSession::new(page.doc(), store.clone());
    let handle = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            session.run(mutations, shutdown).await.unwrap();
            session
        })
    };

    // Appended after startup, never announced: only the 2s fallback
    // sweep can find it.
    let poll = page.push(FeedItemBuilder::new().poll());
    wait_until(|| page.is_item_hidden(poll)).await;

    shutdown.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn store_failure_degrades_to_defaults() {
    let page = FeedPage::new();
    let promoted = page.push(FeedItemBuilder::new().promoted_label());

    // A persisted record the engine cannot decode.
    let store = Arc::new(MemorySettingsStore::with_raw_value(serde_json::json!(42)));
    let mutations = page.mutations();
    let shutdown = CancellationToken::new();

    let mut session = FilterSession::new(page.doc(), store.clone());
    let handle = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            session.run(mutations, shutdown).await.unwrap();
            session
        })
    };

    // Defaults stay in effect: filtering still works.
    wait_until(|| page.is_item_hidden(promoted)).await;

    shutdown.cancel();
    let session = handle.await.unwrap();
    assert_eq!(session.config(), &FilterConfig::default());
}

#[tokio::test(start_paused = true)]
async fn sidebar_sweep_is_unconditional() {
    let page = FeedPage::new();
    let upsell = page.sidebar_upsell();

    // Ads toggled off in persisted settings; the sidebar sweep is not
    // gated by it.
    let store = Arc::new(MemorySettingsStore::new());
    store
        .save(&FilterConfig::default().with(FilterCategory::Ads, false).as_patch())
        .await
        .unwrap();

    let mutations = page.mutations();
    let shutdown = CancellationToken::new();
    let mut session = FilterSession::new(page.doc(), store.clone());
    let handle = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            session.run(mutations, shutdown).await.unwrap();
            session
        })
    };

    wait_until(|| page.doc().is_hidden(upsell)).await;

    shutdown.cancel();
    let session = handle.await.unwrap();
    assert_eq!(session.removed_count(), 0);
}

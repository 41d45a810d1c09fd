//! Scan triggers: document mutations merged with a periodic sweep.
//!
//! Three producers can request a scan: session startup, a mutation
//! notification from the host tree (infinite scroll appending posts),
//! and a fixed-interval timer covering mutations the notification path
//! misses. They are merged into one stream consumed by a single task,
//! which is what keeps scans from ever interleaving mid-item.

use std::time::Duration;

use async_stream::stream;
use futures::Stream;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::traits::document::Mutation;

/// Default fallback sweep interval.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(2);

/// Why a scan is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTrigger {
    /// First scan after configuration load.
    Startup,

    /// The host tree changed.
    Mutation,

    /// Periodic fallback sweep.
    Tick,
}

enum Step {
    Emit(ScanTrigger),
    MutationsClosed,
    Stop,
}

/// Merge mutation notifications and the periodic timer into one
/// trigger stream.
///
/// Emits `Startup` once, then `Mutation`/`Tick` until the cancellation
/// token fires. A closed mutation channel degrades to timer-only
/// operation; the stream itself only ends on cancellation.
pub fn trigger_stream(
    mut mutations: mpsc::UnboundedReceiver<Mutation>,
    every: Duration,
    shutdown: CancellationToken,
) -> impl Stream<Item = ScanTrigger> {
    stream! {
        yield ScanTrigger::Startup;

        let mut ticks = tokio::time::interval(every);
        ticks.tick().await; // Skip first immediate tick

        let mut mutations_open = true;
        loop {
            let step = if mutations_open {
                tokio::select! {
                    _ = shutdown.cancelled() => Step::Stop,
                    _ = ticks.tick() => Step::Emit(ScanTrigger::Tick),
                    event = mutations.recv() => match event {
                        Some(_) => Step::Emit(ScanTrigger::Mutation),
                        None => Step::MutationsClosed,
                    },
                }
            } else {
                tokio::select! {
                    _ = shutdown.cancelled() => Step::Stop,
                    _ = ticks.tick() => Step::Emit(ScanTrigger::Tick),
                }
            };

            match step {
                Step::Emit(trigger) => {
                    trace!(?trigger, "scan trigger");
                    yield trigger;
                }
                Step::MutationsClosed => mutations_open = false,
                Step::Stop => break,
            }
        }
    }
}

//! Async event loop driving a registry from a channel of host events.
//!
//! The loop sleeps until either the next event arrives or the earliest
//! pending geometry recompute is due. Everything runs on the calling task,
//! so the registry never needs to be `Send`.

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::time::{self, Instant as TokioInstant};

use crate::input::HostEvent;
use crate::registry::SliderRegistry;

/// Counters reported when the event channel closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Events received.
    pub events: usize,
    /// Debounced recomputes run.
    pub recomputes: usize,
}

fn now() -> Instant {
    TokioInstant::now().into_std()
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(TokioInstant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Process events until every sender is dropped.
///
/// Recomputes still pending when the channel closes are abandoned, as they
/// would be when the page unloads.
pub async fn run(
    registry: &mut SliderRegistry,
    mut events: mpsc::UnboundedReceiver<HostEvent>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    loop {
        let deadline = registry.next_deadline();
        tokio::select! {
            received = events.recv() => {
                let Some(event) = received else {
                    break;
                };
                summary.events += 1;
                let current = now();
                summary.recomputes += registry.poll(current);
                registry.dispatch(&event, current);
            }
            _ = wait_until(deadline) => {
                summary.recomputes += registry.poll(now());
            }
        }
    }

    log::debug!(
        "Slider event loop finished: {} event(s), {} recompute(s)",
        summary.events,
        summary.recomputes
    );
    summary
}

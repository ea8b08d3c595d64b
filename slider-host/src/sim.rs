//! Deterministic replay of a scripted event sequence against a page.
//!
//! Time is virtual: each scripted event is delivered at `start + at_ms`, and
//! debounced recomputes run whenever the virtual clock passes their deadline.

use std::time::{Duration, Instant};

use slider_core::SliderConfig;

use crate::document::{SharedDocument, classes};
use crate::dom::RootId;
use crate::fixture::{PageFixture, Script};
use crate::input::HostEvent;
use crate::registry::SliderRegistry;

/// Outcome of a replay.
#[derive(Debug)]
pub struct Replay {
    /// Registry in its final state.
    pub registry: SliderRegistry,
    /// Sum of controllers reached by each event.
    pub delivered: usize,
    /// Debounced recomputes run.
    pub recomputes: usize,
}

/// Replay `script` against a fresh copy of `page`.
pub fn replay(page: &PageFixture, script: &Script, config: SliderConfig) -> Replay {
    let document = page.document().into_shared();
    let roots = document.borrow().query_all(classes::ROOT);
    let mut registry = SliderRegistry::bootstrap(document.clone(), config);

    let start = Instant::now();
    let mut clock = start;
    let mut delivered = 0;
    let mut recomputes = 0;

    for scripted in script.ordered() {
        clock = start + Duration::from_millis(scripted.at_ms);
        recomputes += registry.poll(clock);

        let root = scripted.slider.and_then(|ordinal| {
            let root = roots.get(ordinal).copied().map(RootId);
            if root.is_none() {
                log::warn!("Script targets slider {} but the page has {}", ordinal, roots.len());
            }
            root
        });

        if let Some(width) = scripted.viewport_width {
            resize_viewports(&document, &registry, root, width);
        }

        log::debug!("t={}ms {}", scripted.at_ms, scripted.input.name());
        let event = HostEvent {
            root,
            event: scripted.input.clone(),
        };
        delivered += registry.dispatch(&event, clock).delivered;
    }

    // Let any trailing resize settle.
    while let Some(deadline) = registry.next_deadline() {
        clock = clock.max(deadline);
        recomputes += registry.poll(clock);
    }

    Replay {
        registry,
        delivered,
        recomputes,
    }
}

fn resize_viewports(
    document: &SharedDocument,
    registry: &SliderRegistry,
    root: Option<RootId>,
    width: f32,
) {
    let targets = match root {
        Some(root) => vec![root],
        None => registry.roots(),
    };
    let mut document = document.borrow_mut();
    for target in targets {
        if let Some(viewport) = document.query_within(target.0, classes::VIEWPORT) {
            document.set_width(viewport, width);
        }
    }
}

//! Registry of slider controllers keyed by root, plus page bootstrap.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use slider_core::{Control, Lifecycle, SliderConfig, SliderController};

use crate::document::{SharedDocument, classes};
use crate::dom::{DomRoot, DomSurface, RootId};
use crate::input::{self, HostEvent, Scope};

/// Controller bound to a page surface.
pub type DomSlider = SliderController<DomSurface>;

/// Result of routing one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Controllers the event reached.
    pub delivered: usize,
    /// Whether the host should suppress the platform default action.
    pub prevent_default: bool,
}

/// Point-in-time view of one slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSnapshot {
    /// Slider root.
    pub root: RootId,
    /// Controller lifecycle.
    pub lifecycle: Lifecycle,
    /// Index of the first visible card.
    pub current_index: usize,
    /// Largest reachable index.
    pub max_index: usize,
    /// Card width plus gap.
    pub card_step: f32,
    /// Whole cards in view.
    pub visible_count: usize,
    /// Offset currently written to the track.
    pub offset_px: f32,
    /// Previous control disabled.
    pub previous_disabled: bool,
    /// Next control disabled.
    pub next_disabled: bool,
}

impl fmt::Display for SliderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:?} index {}/{} step {}px visible {} offset {}px prev {} next {}",
            self.root,
            self.lifecycle,
            self.current_index,
            self.max_index,
            self.card_step,
            self.visible_count,
            self.offset_px,
            if self.previous_disabled { "disabled" } else { "enabled" },
            if self.next_disabled { "disabled" } else { "enabled" },
        )
    }
}

/// Every slider controller on one page.
#[derive(Debug)]
pub struct SliderRegistry {
    document: SharedDocument,
    sliders: BTreeMap<RootId, DomSlider>,
    skipped: Vec<RootId>,
}

impl SliderRegistry {
    /// Discover every slider root on the page and start one controller per
    /// root. Roots missing required markup are skipped.
    pub fn bootstrap(document: SharedDocument, config: SliderConfig) -> Self {
        let roots = document.borrow().query_all(classes::ROOT);
        let mut sliders = BTreeMap::new();
        let mut skipped = Vec::new();

        for node in roots {
            let root = DomRoot::new(document.clone(), node);
            let id = root.id();
            match DomSlider::initialize(root, config) {
                Some(controller) => {
                    sliders.insert(id, controller);
                }
                None => {
                    log::warn!("{} is missing required markup; left static", id);
                    skipped.push(id);
                }
            }
        }

        log::info!(
            "Bootstrapped {} slider(s), skipped {}",
            sliders.len(),
            skipped.len()
        );

        Self {
            document,
            sliders,
            skipped,
        }
    }

    /// Shared page document.
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Route an event to its slider, or to every slider for window-level
    /// events.
    pub fn dispatch(&mut self, host_event: &HostEvent, now: Instant) -> DispatchOutcome {
        let event = &host_event.event;
        let mut delivered = 0;

        match (event.scope(), host_event.root) {
            (Scope::Window, _) => {
                for controller in self.sliders.values_mut() {
                    input::apply(controller, event, now);
                    delivered += 1;
                }
            }
            (Scope::Slider, Some(root)) => {
                if let Some(controller) = self.sliders.get_mut(&root) {
                    input::apply(controller, event, now);
                    delivered = 1;
                } else {
                    log::trace!("Dropping {} for unknown {}", event.name(), root);
                }
            }
            (Scope::Slider, None) => {
                log::trace!("Dropping untargeted {}", event.name());
            }
        }

        DispatchOutcome {
            delivered,
            prevent_default: delivered > 0 && event.prevents_default(),
        }
    }

    /// Run every debounced recompute that is due. Returns how many ran.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut ran = 0;
        for controller in self.sliders.values_mut() {
            if controller.poll(now) {
                ran += 1;
            }
        }
        ran
    }

    /// Earliest pending recompute across all sliders.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sliders
            .values()
            .filter_map(DomSlider::next_deadline)
            .min()
    }

    /// Stop controlling a root, e.g. when it is removed from the page.
    pub fn remove(&mut self, root: RootId) -> Option<DomSlider> {
        let mut controller = self.sliders.remove(&root)?;
        controller.dispose();
        log::debug!("Disposed {}", root);
        Some(controller)
    }

    /// Controller for `root`.
    pub fn get(&self, root: RootId) -> Option<&DomSlider> {
        self.sliders.get(&root)
    }

    /// Mutable controller for `root`.
    pub fn get_mut(&mut self, root: RootId) -> Option<&mut DomSlider> {
        self.sliders.get_mut(&root)
    }

    /// Controlled roots in document order.
    pub fn roots(&self) -> Vec<RootId> {
        self.sliders.keys().copied().collect()
    }

    /// Roots left alone because their markup was incomplete.
    pub fn skipped(&self) -> &[RootId] {
        &self.skipped
    }

    /// Number of controlled sliders, inert ones included.
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Whether no slider is controlled.
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Current state of one slider.
    pub fn snapshot(&self, root: RootId) -> Option<SliderSnapshot> {
        let controller = self.sliders.get(&root)?;
        let surface = controller.surface();
        let [previous_disabled, next_disabled] =
            Control::ALL.map(|control| surface.is_control_disabled(control));

        Some(SliderSnapshot {
            root,
            lifecycle: controller.lifecycle(),
            current_index: controller.current_index(),
            max_index: controller.max_index(),
            card_step: controller.card_step(),
            visible_count: controller.visible_count(),
            offset_px: surface.track_offset().unwrap_or(0.0),
            previous_disabled,
            next_disabled,
        })
    }

    /// Snapshots in document order.
    pub fn snapshots(&self) -> Vec<SliderSnapshot> {
        self.sliders
            .keys()
            .filter_map(|root| self.snapshot(*root))
            .collect()
    }
}

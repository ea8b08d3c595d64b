//! Recording surface for exercising controllers without a renderer.
//!
//! Geometry is scripted through public fields; every write is appended to
//! `calls` so tests can assert on exact side effects.

use crate::error::MissingPart;
use crate::surface::{Control, SliderRoot, SliderSurface, Transition};

/// One side effect written by a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum SurfaceCall {
    Offset { px: f32, transition: Transition },
    Transition(Transition),
    Disabled { control: Control, disabled: bool },
}

/// Scripted geometry plus a log of every write.
#[derive(Debug, Clone, Default)]
pub struct FakeSurface {
    /// Cards in the track.
    pub card_count: usize,
    /// Width of every card.
    pub card_width: f32,
    /// Inter-card gap.
    pub gap: f32,
    /// Viewport width.
    pub viewport_width: f32,
    /// Writes in the order they happened.
    pub calls: Vec<SurfaceCall>,
}

impl FakeSurface {
    /// Surface with no recorded writes.
    pub fn new(card_count: usize, card_width: f32, gap: f32, viewport_width: f32) -> Self {
        Self {
            card_count,
            card_width,
            gap,
            viewport_width,
            calls: Vec::new(),
        }
    }

    /// Last offset write, if any.
    pub fn offset_px(&self) -> Option<f32> {
        self.last_offset().map(|(px, _)| px)
    }

    /// Transition most recently set, by an offset write or on its own.
    pub fn transition(&self) -> Option<Transition> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Offset { transition, .. } | SurfaceCall::Transition(transition) => {
                Some(*transition)
            }
            SurfaceCall::Disabled { .. } => None,
        })
    }

    /// Last disabled state written for a control, if any.
    pub fn is_disabled(&self, control: Control) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Disabled {
                control: written,
                disabled,
            } if *written == control => Some(*disabled),
            _ => None,
        })
    }

    /// Number of offset writes so far.
    pub fn offset_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Offset { .. }))
            .count()
    }

    /// Forget recorded writes.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn last_offset(&self) -> Option<(f32, Transition)> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Offset { px, transition } => Some((*px, *transition)),
            _ => None,
        })
    }
}

impl SliderSurface for FakeSurface {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn track_gap(&self) -> f32 {
        self.gap
    }

    fn first_card_width(&self) -> f32 {
        self.card_width
    }

    fn card_count(&self) -> usize {
        self.card_count
    }

    fn set_track_offset(&mut self, offset_px: f32, transition: Transition) {
        self.calls.push(SurfaceCall::Offset {
            px: offset_px,
            transition,
        });
    }

    fn set_track_transition(&mut self, transition: Transition) {
        self.calls.push(SurfaceCall::Transition(transition));
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        self.calls.push(SurfaceCall::Disabled { control, disabled });
    }
}

/// A root that resolves to a [`FakeSurface`] unless a part is marked missing.
#[derive(Debug, Clone, Default)]
pub struct FakeRoot {
    /// Surface handed out on resolve.
    pub surface: FakeSurface,
    /// Part reported missing on resolve.
    pub missing: Option<MissingPart>,
}

impl FakeRoot {
    /// Root that resolves to `surface`.
    pub fn complete(surface: FakeSurface) -> Self {
        Self {
            surface,
            missing: None,
        }
    }

    /// Root that fails to resolve with `part`.
    pub fn without(part: MissingPart) -> Self {
        Self {
            surface: FakeSurface::default(),
            missing: Some(part),
        }
    }
}

impl SliderRoot for FakeRoot {
    type Surface = FakeSurface;

    fn resolve(self) -> Result<FakeSurface, MissingPart> {
        match self.missing {
            Some(part) => Err(part),
            None => Ok(self.surface),
        }
    }
}

//! Slider roots and surfaces backed by the shared page document.

use std::fmt;

use slider_core::geometry::resolve_gap;
use slider_core::{Control, MissingPart, SliderRoot, SliderSurface, Transition};

use crate::css;
use crate::document::{NodeId, SharedDocument, classes, styles};

/// Identifies a slider by its root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RootId(pub NodeId);

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slider#{}", self.0)
    }
}

/// A root container found on the page, not yet resolved.
#[derive(Debug, Clone)]
pub struct DomRoot {
    document: SharedDocument,
    root: NodeId,
}

impl DomRoot {
    /// Wrap `root` of `document`.
    pub fn new(document: SharedDocument, root: NodeId) -> Self {
        Self { document, root }
    }

    /// Root identifier.
    pub fn id(&self) -> RootId {
        RootId(self.root)
    }
}

impl SliderRoot for DomRoot {
    type Surface = DomSurface;

    fn resolve(self) -> Result<DomSurface, MissingPart> {
        let (viewport, track, previous, next) = {
            let document = self.document.borrow();
            let find = |class: &str| document.query_within(self.root, class);
            (
                find(classes::VIEWPORT).ok_or(MissingPart::Viewport)?,
                find(classes::TRACK).ok_or(MissingPart::Track)?,
                find(classes::PREVIOUS).ok_or(MissingPart::PreviousControl)?,
                find(classes::NEXT).ok_or(MissingPart::NextControl)?,
            )
        };

        Ok(DomSurface {
            document: self.document,
            root: self.root,
            viewport,
            track,
            previous,
            next,
        })
    }
}

/// Surface reading layout from, and writing styles to, one slider's nodes.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: SharedDocument,
    root: NodeId,
    viewport: NodeId,
    track: NodeId,
    previous: NodeId,
    next: NodeId,
}

impl DomSurface {
    /// Root this surface belongs to.
    pub fn root(&self) -> RootId {
        RootId(self.root)
    }

    /// Viewport node.
    pub fn viewport(&self) -> NodeId {
        self.viewport
    }

    /// Track node.
    pub fn track(&self) -> NodeId {
        self.track
    }

    /// Node of the given navigation control.
    pub fn control(&self, control: Control) -> NodeId {
        match control {
            Control::Previous => self.previous,
            Control::Next => self.next,
        }
    }

    /// Cards currently inside the track, in document order.
    pub fn cards(&self) -> Vec<NodeId> {
        self.document
            .borrow()
            .query_all_within(self.track, classes::CARD)
    }

    /// Offset currently written to the track's `transform`, if any.
    pub fn track_offset(&self) -> Option<f32> {
        self.document
            .borrow()
            .style(self.track, styles::TRANSFORM)
            .and_then(css::parse_translate_x)
    }

    /// Transition currently written to the track, if any.
    pub fn track_transition(&self) -> Option<String> {
        self.document
            .borrow()
            .style(self.track, styles::TRANSITION)
            .map(str::to_owned)
    }

    /// Whether the control is currently disabled.
    pub fn is_control_disabled(&self, control: Control) -> bool {
        self.document.borrow().is_disabled(self.control(control))
    }
}

impl SliderSurface for DomSurface {
    fn viewport_width(&self) -> f32 {
        self.document.borrow().width(self.viewport)
    }

    fn track_gap(&self) -> f32 {
        let document = self.document.borrow();
        resolve_gap(
            document.style(self.track, styles::COLUMN_GAP),
            document.style(self.track, styles::GAP),
        )
    }

    fn first_card_width(&self) -> f32 {
        let document = self.document.borrow();
        document
            .query_within(self.track, classes::CARD)
            .map_or(0.0, |card| document.width(card))
    }

    fn card_count(&self) -> usize {
        self.cards().len()
    }

    fn set_track_offset(&mut self, offset_px: f32, transition: Transition) {
        let mut document = self.document.borrow_mut();
        document.set_style(self.track, styles::TRANSITION, css::transition(transition));
        document.set_style(self.track, styles::TRANSFORM, css::translate_x(offset_px));
    }

    fn set_track_transition(&mut self, transition: Transition) {
        self.document
            .borrow_mut()
            .set_style(self.track, styles::TRANSITION, css::transition(transition));
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        let node = self.control(control);
        self.document.borrow_mut().set_disabled(node, disabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, NodeSpec};
    use std::time::Duration;

    fn first_root(document: &SharedDocument) -> DomRoot {
        let root = document.borrow().query_all(classes::ROOT)[0];
        DomRoot::new(document.clone(), root)
    }

    #[test]
    fn resolves_complete_markup() {
        let document = Document::from_specs(&[NodeSpec::slider(5, 180.0, "20px", 600.0)]).into_shared();
        let surface = first_root(&document).resolve().expect("complete markup");

        assert_eq!(surface.viewport_width(), 600.0);
        assert_eq!(surface.track_gap(), 20.0);
        assert_eq!(surface.first_card_width(), 180.0);
        assert_eq!(surface.card_count(), 5);
    }

    #[test]
    fn reports_first_missing_part() {
        let markup = NodeSpec::new(classes::ROOT)
            .child(NodeSpec::new(classes::VIEWPORT).child(NodeSpec::new(classes::TRACK)))
            .child(NodeSpec::new(classes::PREVIOUS));
        let document = Document::from_specs(&[markup]).into_shared();

        assert_eq!(
            first_root(&document).resolve().err(),
            Some(MissingPart::NextControl)
        );
    }

    #[test]
    fn gap_falls_back_to_gap_property() {
        let markup = NodeSpec::new(classes::ROOT)
            .child(
                NodeSpec::new(classes::VIEWPORT)
                    .child(NodeSpec::new(classes::TRACK).style(styles::GAP, "12px")),
            )
            .child(NodeSpec::new(classes::PREVIOUS))
            .child(NodeSpec::new(classes::NEXT));
        let document = Document::from_specs(&[markup]).into_shared();
        let surface = first_root(&document).resolve().expect("complete markup");

        assert_eq!(surface.track_gap(), 12.0);
        assert_eq!(surface.first_card_width(), 0.0);
    }

    #[test]
    fn writes_styles_and_disabled_state() {
        let document = Document::from_specs(&[NodeSpec::slider(2, 100.0, "0", 100.0)]).into_shared();
        let mut surface = first_root(&document).resolve().expect("complete markup");

        surface.set_track_offset(100.0, Transition::Instant);
        surface.set_control_disabled(Control::Next, true);

        assert_eq!(surface.track_offset(), Some(100.0));
        assert_eq!(surface.track_transition().as_deref(), Some("none"));
        assert!(surface.is_control_disabled(Control::Next));
        assert!(!surface.is_control_disabled(Control::Previous));
    }

    #[test]
    fn transition_change_keeps_transform() {
        let document = Document::from_specs(&[NodeSpec::slider(4, 100.0, "0", 100.0)]).into_shared();
        let mut surface = first_root(&document).resolve().expect("complete markup");

        surface.set_track_offset(200.0, Transition::Animated(Duration::from_millis(350)));
        surface.set_track_transition(Transition::Instant);

        assert_eq!(surface.track_offset(), Some(200.0));
        assert_eq!(surface.track_transition().as_deref(), Some("none"));
    }
}

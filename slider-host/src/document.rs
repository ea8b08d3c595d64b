//! In-memory page model carrying the slider markup contract.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Queries walk the
//! tree in document order starting from the top-level nodes, so detached
//! nodes drop out of every query.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Index of a node in its [`Document`].
pub type NodeId = usize;

/// A document shared between every slider surface on the page.
pub type SharedDocument = Rc<RefCell<Document>>;

/// Class names making up the slider markup contract.
pub mod classes {
    /// Slider root container.
    pub const ROOT: &str = "articles-slider";
    /// Clipping viewport.
    pub const VIEWPORT: &str = "articles-slider__slider";
    /// Translated strip holding the cards.
    pub const TRACK: &str = "articles-slider__track";
    /// Previous control.
    pub const PREVIOUS: &str = "articles-slider__arrow--prev";
    /// Next control.
    pub const NEXT: &str = "articles-slider__arrow--next";
    /// One card.
    pub const CARD: &str = "articles-slider__card";
}

/// Style property names read and written by the slider.
pub mod styles {
    /// Column gap longhand.
    pub const COLUMN_GAP: &str = "column-gap";
    /// Shorthand: `<row> <column>`.
    pub const GAP: &str = "gap";
    /// Track translation.
    pub const TRANSFORM: &str = "transform";
    /// Track easing.
    pub const TRANSITION: &str = "transition";
}

/// One element of the page.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Class list.
    pub classes: Vec<String>,
    /// Rendered width in px.
    pub width: f32,
    /// Inline style properties by name.
    pub styles: BTreeMap<String, String>,
    /// Disabled flag, used by controls.
    pub disabled: bool,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attached children in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// `None` for top-level and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Declarative node description, as written in page fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeSpec {
    /// Space-separated class list.
    pub class: String,
    /// Rendered width in px.
    pub width: f32,
    /// Inline style properties.
    pub style: BTreeMap<String, String>,
    /// Initial disabled flag.
    pub disabled: bool,
    /// Number of identical siblings to create from this spec.
    #[serde(skip_serializing_if = "is_one")]
    pub repeat: Option<usize>,
    /// Child nodes.
    pub children: Vec<NodeSpec>,
}

fn is_one(value: &Option<usize>) -> bool {
    matches!(value, None | Some(1))
}

impl NodeSpec {
    /// Element with the given class list.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    /// Set the rendered width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set an inline style property.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Emit `count` copies of this node.
    pub fn repeat(mut self, count: usize) -> Self {
        self.repeat = Some(count);
        self
    }

    /// Append a child spec.
    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Complete slider markup: viewport, track with `cards` cards, and both
    /// controls.
    pub fn slider(cards: usize, card_width: f32, gap: &str, viewport_width: f32) -> Self {
        let mut track = NodeSpec::new(classes::TRACK).style(styles::COLUMN_GAP, gap);
        if cards > 0 {
            track = track.child(NodeSpec::new(classes::CARD).width(card_width).repeat(cards));
        }
        NodeSpec::new(classes::ROOT)
            .child(NodeSpec::new(classes::VIEWPORT).width(viewport_width).child(track))
            .child(NodeSpec::new(classes::PREVIOUS))
            .child(NodeSpec::new(classes::NEXT))
    }
}

/// In-memory page: a forest of [`Node`]s.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    top: Vec<NodeId>,
}

impl Document {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from top-level specs.
    pub fn from_specs(specs: &[NodeSpec]) -> Self {
        let mut document = Self::new();
        for spec in specs {
            document.append(None, spec);
        }
        document
    }

    /// Wrap for sharing between surfaces.
    pub fn into_shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    /// Append a spec (and its `repeat` copies) under `parent`, or at the top
    /// level. Returns the ids of the created nodes.
    pub fn append(&mut self, parent: Option<NodeId>, spec: &NodeSpec) -> Vec<NodeId> {
        let count = spec.repeat.unwrap_or(1);
        (0..count).map(|_| self.append_one(parent, spec)).collect()
    }

    fn append_one(&mut self, parent: Option<NodeId>, spec: &NodeSpec) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            classes: spec.class.split_whitespace().map(str::to_owned).collect(),
            width: spec.width,
            styles: spec.style.clone(),
            disabled: spec.disabled,
            children: Vec::new(),
            parent,
        });
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.top.push(id),
        }
        for child in &spec.children {
            self.append(Some(id), child);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        match node.parent.take() {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|child| *child != id);
                }
            }
            None => self.top.retain(|top| *top != id),
        }
    }

    /// Node by id, detached ones included.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Every attached node with `class`, in document order.
    pub fn query_all(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        for &top in &self.top {
            self.collect(top, class, true, &mut found);
        }
        found
    }

    /// First descendant of `scope` with `class`.
    pub fn query_within(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.query_all_within(scope, class).into_iter().next()
    }

    /// Every descendant of `scope` with `class`, in document order.
    pub fn query_all_within(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        if self.nodes.get(scope).is_some() {
            self.collect(scope, class, false, &mut found);
        }
        found
    }

    fn collect(&self, id: NodeId, class: &str, include_self: bool, found: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if include_self && node.has_class(class) {
            found.push(id);
        }
        for &child in &node.children {
            self.collect(child, class, true, found);
        }
    }

    /// Rendered width, 0 for unknown nodes.
    pub fn width(&self, id: NodeId) -> f32 {
        self.nodes.get(id).map_or(0.0, |node| node.width)
    }

    /// Set a node's rendered width.
    pub fn set_width(&mut self, id: NodeId, width: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.width = width;
        }
    }

    /// Inline style property, if set.
    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.styles.get(name))
            .map(String::as_str)
    }

    /// Set an inline style property on a node.
    pub fn set_style(&mut self, id: NodeId, name: &str, value: String) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.styles.insert(name.to_owned(), value);
        }
    }

    /// Disabled flag of a node.
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.disabled)
    }

    /// Set a node's disabled flag.
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.disabled = disabled;
        }
    }
}

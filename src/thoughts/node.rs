use std::collections::BTreeSet;
use std::fmt;

use eframe::egui::{Pos2, Vec2, pos2};

/// Stable identity of a thought. Joins the node collection to its scene circle.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// One thought living in the layout.
///
/// Ownership of the fields is split between two writers that never run at the
/// same time: the force simulation integrates `x`/`y` (and the private
/// previous position) during a step, and the layout controller owns
/// everything else. The controller only touches `x`/`y` to project a node back
/// into its containment region after a step, or to follow the pointer while
/// the node is being dragged.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub thought: Option<String>,
    pub tags: BTreeSet<String>,
    pub x: f32,
    pub y: f32,
    pub(crate) px: f32,
    pub(crate) py: f32,
    pub(crate) placed: bool,
    pub fixed: bool,
    /// Cached label measurement (`dx`, `dy`) used to center text on the circle.
    pub label_offset: Option<Vec2>,
}

impl Node {
    pub fn new(id: NodeId, thought: Option<String>, tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            id,
            thought,
            tags: tags.into_iter().collect(),
            x: 0.0,
            y: 0.0,
            px: 0.0,
            py: 0.0,
            placed: false,
            fixed: false,
            label_offset: None,
        }
    }

    pub fn pos(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    pub fn text(&self) -> &str {
        self.thought.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the simulation has assigned a spawn point yet.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Places the node at `pos` with zero velocity.
    pub(crate) fn place(&mut self, pos: Pos2) {
        self.x = pos.x;
        self.y = pos.y;
        self.px = pos.x;
        self.py = pos.y;
        self.placed = true;
    }

    /// Moves the current position without touching the previous one, so the
    /// verlet velocity is kept.
    pub(crate) fn project(&mut self, pos: Pos2) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

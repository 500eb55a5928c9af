use std::collections::HashMap;

use eframe::egui::{Pos2, Vec2};

use crate::thoughts::NodeId;

/// Shape drawn behind the nodes. Clicking it clears the selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    Planet { center: Pos2, radius: f32 },
    Background { size: Vec2 },
}

impl Backdrop {
    pub fn contains(self, point: Pos2) -> bool {
        match self {
            Self::Planet { center, radius } => point.distance(center) <= radius,
            Self::Background { size } => {
                (0.0..=size.x).contains(&point.x) && (0.0..=size.y).contains(&point.y)
            }
        }
    }
}

/// Visual element for one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
    pub selected: bool,
    pub hovered: bool,
}

/// Retained drawing surface: one circle per live node id, in container-local
/// coordinates. The egui view paints it every frame.
#[derive(Debug)]
pub struct Scene {
    size: Vec2,
    backdrop: Backdrop,
    circles: HashMap<NodeId, Circle>,
}

impl Scene {
    pub fn new(size: Vec2, backdrop: Backdrop) -> Self {
        Self {
            size,
            backdrop,
            circles: HashMap::new(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    pub fn resize(&mut self, size: Vec2, backdrop: Backdrop) {
        self.size = size;
        self.backdrop = backdrop;
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.circles.contains_key(id)
    }

    pub fn circle(&self, id: &NodeId) -> Option<&Circle> {
        self.circles.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.circles.keys()
    }

    /// Appends a circle for `id` at `center`. Returns `false` if one already exists.
    pub fn create(&mut self, id: NodeId, center: Pos2, radius: f32) -> bool {
        if self.circles.contains_key(&id) {
            return false;
        }
        self.circles.insert(
            id,
            Circle {
                center,
                radius,
                selected: false,
                hovered: false,
            },
        );
        true
    }

    /// Removes every circle whose id fails `keep`, returning how many went away.
    pub fn retain(&mut self, mut keep: impl FnMut(&NodeId) -> bool) -> usize {
        let before = self.circles.len();
        self.circles.retain(|id, _| keep(id));
        before - self.circles.len()
    }

    pub fn set_position(&mut self, id: &NodeId, center: Pos2) {
        if let Some(circle) = self.circles.get_mut(id) {
            circle.center = center;
        }
    }

    pub fn mark_selected(&mut self, mut selected: impl FnMut(&NodeId) -> bool) {
        for (id, circle) in &mut self.circles {
            circle.selected = selected(id);
        }
    }

    pub fn mark_hovered(&mut self, mut hovered: impl FnMut(&NodeId) -> bool) {
        for (id, circle) in &mut self.circles {
            circle.hovered = hovered(id);
        }
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.circles
            .iter()
            .filter(|(_, circle)| circle.selected)
            .map(|(id, _)| id)
    }

    pub fn hovered_id(&self) -> Option<&NodeId> {
        self.circles
            .iter()
            .find(|(_, circle)| circle.hovered)
            .map(|(id, _)| id)
    }
}

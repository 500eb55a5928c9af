//! Layout controller: owns the thought collection, keeps one scene circle per
//! live thought, drives the force simulation, and mediates pointer and
//! address interactions.

mod error;
mod geometry;
mod location;
mod panel;
mod scene;
mod variant;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use eframe::egui::{Pos2, Vec2};
use tracing::{debug, info, warn};

use crate::physics::ForceLayout;
use crate::thoughts::{
    Node, NodeId, ThoughtSeed, extract_hashtags, ids_with_tag, matching_ids, tag_counts,
};
use crate::util::{ID_DIGITS, random_digits};
pub use error::LayoutError;
pub use geometry::{Containment, centered_square};
pub use location::{Location, decode_fragment, encode_fragment};
pub use panel::ContentPanel;
pub use scene::{Backdrop, Circle, Scene};
use variant::Bounds;
pub use variant::{Variant, VariantConfig};

/// Circles created and removed by one [`LayoutController::synchronize`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub removed: usize,
}

impl SyncReport {
    pub fn is_noop(self) -> bool {
        self.created == 0 && self.removed == 0
    }
}

pub struct LayoutController {
    variant: Variant,
    config: VariantConfig,
    container: Vec2,
    bounds: Bounds,
    nodes: Vec<Node>,
    scene: Scene,
    simulation: ForceLayout,
    panel: ContentPanel,
    location: Location,
    hovered: Option<NodeId>,
}

fn usable_container(container: Vec2) -> bool {
    container.x.is_finite() && container.y.is_finite() && container.x > 0.0 && container.y > 0.0
}

impl LayoutController {
    /// Builds the layout for `container`, seeds it, and honors whatever the
    /// location already addresses.
    pub fn new(
        variant: Variant,
        container: Vec2,
        seeds: Vec<ThoughtSeed>,
        location: Location,
    ) -> Result<Self, LayoutError> {
        if !usable_container(container) {
            return Err(LayoutError::EmptyContainer {
                width: container.x,
                height: container.y,
            });
        }

        let config = variant.config();
        let bounds = Bounds::measure(variant, container);
        let nodes = seed_nodes(seeds)?;

        let mut controller = Self {
            variant,
            config,
            container,
            bounds,
            nodes,
            scene: Scene::new(bounds.size, bounds.backdrop),
            simulation: ForceLayout::new(config.forces, bounds.size),
            panel: ContentPanel::default(),
            location,
            hovered: None,
        };

        let report = controller.synchronize();
        controller.on_url_change();
        info!(
            variant = %variant,
            thoughts = report.created,
            width = bounds.size.x,
            height = bounds.size.y,
            "layout initialized"
        );

        Ok(controller)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> VariantConfig {
        self.config
    }

    pub fn container(&self) -> Vec2 {
        self.container
    }

    pub fn containment(&self) -> Containment {
        self.bounds.containment
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.find_node_index(id).map(|index| &self.nodes[index])
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn panel(&self) -> &ContentPanel {
        &self.panel
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    fn find_node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == *id)
    }

    /// The node addressed by the location fragment, if it is still live.
    pub fn selected_node(&self) -> Option<&Node> {
        let id = self.location.selected_id();
        if id.is_empty() {
            return None;
        }
        self.node(&id)
    }

    pub fn is_selected(&self) -> bool {
        self.selected_node().is_some()
    }

    /// Reconciles scene circles with the node collection by id, then restarts
    /// the simulation. Matched circles keep their position.
    pub fn synchronize(&mut self) -> SyncReport {
        let live = self.nodes.iter().map(|node| &node.id).collect::<HashSet<_>>();
        let removed = self.scene.retain(|id| live.contains(id));

        self.simulation.start(&mut self.nodes);

        let mut created = 0;
        for node in &self.nodes {
            if self
                .scene
                .create(node.id.clone(), node.pos(), self.config.item_radius)
            {
                created += 1;
            }
        }

        let report = SyncReport { created, removed };
        debug!(
            created = report.created,
            removed = report.removed,
            circles = self.scene.len(),
            "synchronized scene"
        );
        report
    }

    /// Projects every node into the containment region and moves its circle there.
    pub fn on_tick(&mut self) {
        let containment = self.bounds.containment;
        let item_radius = self.config.item_radius;

        for node in &mut self.nodes {
            let clamped = containment.clamp(node.pos(), item_radius);
            if clamped != node.pos() {
                node.project(clamped);
            }
            self.scene.set_position(&node.id, clamped);
        }
    }

    /// Advances the simulation by one tick. Returns whether it is still running.
    pub fn tick(&mut self) -> bool {
        let ticked = self.simulation.step(&mut self.nodes);
        if ticked {
            self.on_tick();
        }
        ticked
    }

    fn fresh_id(&self) -> NodeId {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = random_digits(&mut rng, ID_DIGITS);
            if self.find_node_index(&candidate).is_none() {
                return NodeId::new(candidate);
            }
        }
    }

    /// Adds a thought under a fresh id. Without explicit tags, the thought's
    /// `#hashtags` become its tags.
    pub fn add_thought(&mut self, text: &str, tags: Option<Vec<String>>) -> NodeId {
        let id = self.fresh_id();
        let tags = tags.unwrap_or_else(|| extract_hashtags(text));
        self.nodes
            .push(Node::new(id.clone(), Some(text.to_owned()), tags));
        info!(id = %id, "added thought");

        self.synchronize();
        id
    }

    /// Removes the thought with `id`. Unknown ids are ignored.
    pub fn remove_thought(&mut self, id: &str) -> bool {
        let Some(index) = self.find_node_index(id) else {
            debug!(id, "remove ignored, no such thought");
            return false;
        };

        let removed = self.nodes.remove(index);
        info!(id = %removed.id, "removed thought");
        self.synchronize();

        if self.hovered.as_ref() == Some(&removed.id) {
            self.on_hover_end();
        }
        if self.location.selected_id() == removed.id.as_str() {
            self.on_url_change();
        }
        true
    }

    /// Selects `id` by writing it into the location fragment. Unknown ids
    /// clear the selection instead.
    pub fn on_select(&mut self, id: &str) {
        let Some(index) = self.find_node_index(id) else {
            debug!(id, "select of unknown thought, clearing");
            self.on_clear();
            return;
        };

        let target = self.nodes[index].id.clone();
        self.scene.mark_selected(|id| *id == target);
        if self.location.select(target.as_str()) {
            self.on_url_change();
        }
    }

    pub fn on_hover(&mut self, id: &str) {
        let Some(index) = self.find_node_index(id) else {
            return;
        };

        let target = self.nodes[index].id.clone();
        self.scene.mark_hovered(|id| *id == target);
        self.hovered = Some(target);

        if !self.is_selected() {
            self.panel.show(self.nodes[index].text());
        }
    }

    pub fn on_hover_end(&mut self) {
        self.scene.mark_hovered(|_| false);
        self.hovered = None;

        if !self.is_selected() {
            self.panel.hide();
        }
    }

    /// Background click: drop the selection and reset the fragment.
    pub fn on_clear(&mut self) {
        self.scene.mark_selected(|_| false);
        if self.location.clear() {
            self.on_url_change();
        }
    }

    /// Re-derives selection from the fragment. Unknown ids read as "nothing selected".
    pub fn on_url_change(&mut self) {
        let id = self.location.selected_id();
        let index = if id.is_empty() {
            None
        } else {
            self.find_node_index(&id)
        };

        match index {
            Some(index) => {
                let target = self.nodes[index].id.clone();
                self.scene.mark_selected(|id| *id == target);
                self.panel.show(self.nodes[index].text());
                debug!(id = %target, "fragment selects thought");
            }
            None => {
                if !id.is_empty() {
                    debug!(id, "fragment names no live thought");
                }
                self.scene.mark_selected(|_| false);
                self.panel.hide();
            }
        }
    }

    /// External navigation to `fragment` (address bar, deep link).
    pub fn navigate(&mut self, fragment: &str) {
        if self.location.replace_fragment(fragment) {
            self.on_url_change();
        }
    }

    /// Refits the layout to a new container size and resumes the simulation
    /// with positions intact.
    pub fn on_resize(&mut self, container: Vec2) {
        if !usable_container(container) {
            warn!(
                width = container.x,
                height = container.y,
                "ignoring resize to an empty container"
            );
            return;
        }
        if container == self.container {
            return;
        }

        self.container = container;
        self.bounds = Bounds::measure(self.variant, container);
        self.scene.resize(self.bounds.size, self.bounds.backdrop);
        self.simulation.set_size(self.bounds.size);
        self.simulation.resume();
        self.on_tick();
        debug!(
            width = self.bounds.size.x,
            height = self.bounds.size.y,
            "layout resized"
        );
    }

    /// Marks exactly the thoughts tagged `tag`. Returns how many matched.
    pub fn highlight_by_tag(&mut self, tag: &str) -> usize {
        let ids = ids_with_tag(&self.nodes, tag);
        self.scene.mark_selected(|id| ids.contains(id));
        debug!(tag, matched = ids.len(), "highlighted tag");
        ids.len()
    }

    pub fn tag_cloud(&self) -> Vec<(String, usize)> {
        tag_counts(&self.nodes)
    }

    pub fn search(&self, query: &str) -> HashSet<NodeId> {
        matching_ids(&self.nodes, query)
    }

    /// Pins `id` under the pointer. Only draggable variants honor it.
    pub fn drag_start(&mut self, id: &str) -> bool {
        if !self.config.draggable {
            return false;
        }
        let Some(index) = self.find_node_index(id) else {
            return false;
        };

        let node = &mut self.nodes[index];
        node.fixed = true;
        let pos = node.pos();
        node.place(pos);
        true
    }

    pub fn drag_to(&mut self, id: &str, pos: Pos2) {
        let Some(index) = self.find_node_index(id) else {
            return;
        };
        if !self.nodes[index].fixed {
            return;
        }

        let pos = self
            .bounds
            .containment
            .clamp(pos, self.config.item_radius);
        let node = &mut self.nodes[index];
        node.place(pos);
        self.scene.set_position(&node.id, pos);
        self.simulation.resume();
    }

    pub fn drag_end(&mut self, id: &str) {
        if let Some(index) = self.find_node_index(id) {
            self.nodes[index].fixed = false;
        }
    }

    /// Caches the measured label offset for `id`.
    pub fn set_label_offset(&mut self, id: &str, offset: Vec2) {
        if let Some(index) = self.find_node_index(id) {
            self.nodes[index].label_offset = Some(offset);
        }
    }
}

fn seed_nodes(seeds: Vec<ThoughtSeed>) -> Result<Vec<Node>, LayoutError> {
    let mut taken = HashSet::new();
    for id in seeds.iter().filter_map(|seed| seed.id.as_deref()) {
        if id.is_empty() || id.trim() != id {
            return Err(LayoutError::UnaddressableId(id.to_owned()));
        }
        if !taken.insert(id.to_owned()) {
            return Err(LayoutError::DuplicateId(id.to_owned()));
        }
    }

    let mut rng = rand::thread_rng();
    let nodes = seeds
        .into_iter()
        .map(|seed| {
            let id = match seed.id {
                Some(id) => id,
                None => loop {
                    let candidate = random_digits(&mut rng, ID_DIGITS);
                    if taken.insert(candidate.clone()) {
                        break candidate;
                    }
                },
            };
            let tags = match seed.tags {
                Some(tags) => tags,
                None => seed
                    .thought
                    .as_deref()
                    .map(extract_hashtags)
                    .unwrap_or_default(),
            };
            Node::new(NodeId::new(id), seed.thought, tags)
        })
        .collect();

    Ok(nodes)
}

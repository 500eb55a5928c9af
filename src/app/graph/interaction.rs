use eframe::egui::{self, Pos2};

use crate::controller::Scene;
use crate::thoughts::{Node, NodeId};

use super::super::ViewModel;
use super::super::render_utils::screen_to_local;

/// Closest circle containing `pointer`, in node order so ties favour the
/// node painted last.
pub(super) fn node_under_pointer(
    nodes: &[Node],
    scene: &Scene,
    origin: Pos2,
    pointer: Pos2,
) -> Option<NodeId> {
    let local = screen_to_local(origin, pointer);
    nodes
        .iter()
        .rev()
        .filter_map(|node| {
            let circle = scene.circle(&node.id)?;
            let distance = circle.center.distance(local);
            (distance <= circle.radius).then_some((&node.id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id.clone())
}

impl ViewModel {
    /// Feeds pointer activity over the scene into the controller: hover
    /// transitions, clicks on circles or on the backdrop, and drags.
    pub(in crate::app) fn handle_scene_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        origin: Pos2,
    ) {
        let pointer = response.hover_pos();
        let under_pointer = pointer.and_then(|pointer| {
            node_under_pointer(
                self.controller.nodes(),
                self.controller.scene(),
                origin,
                pointer,
            )
        });

        if under_pointer.is_some() || self.dragging.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = if self.dragging.is_some() {
                    egui::CursorIcon::Grabbing
                } else {
                    egui::CursorIcon::PointingHand
                };
            });
        }

        self.handle_drag(ui, response, origin, under_pointer.as_ref());

        if self.dragging.is_none() && under_pointer.as_ref() != self.controller.hovered() {
            match &under_pointer {
                Some(id) => self.controller.on_hover(id.as_str()),
                None => self.controller.on_hover_end(),
            }
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            match (&under_pointer, pointer) {
                (Some(id), _) => self.controller.on_select(id.as_str()),
                (None, Some(pointer)) => {
                    let local = screen_to_local(origin, pointer);
                    if self.controller.scene().backdrop().contains(local) {
                        self.controller.on_clear();
                    }
                }
                (None, None) => {}
            }
            self.sync_address();
        }
    }

    fn handle_drag(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        origin: Pos2,
        under_pointer: Option<&NodeId>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(id) = under_pointer
            && self.controller.drag_start(id.as_str())
        {
            self.dragging = Some(id.clone());
        }

        let Some(id) = self.dragging.clone() else {
            return;
        };

        if response.drag_stopped() || self.controller.node(id.as_str()).is_none() {
            self.controller.drag_end(id.as_str());
            self.dragging = None;
            return;
        }

        if response.dragged_by(egui::PointerButton::Primary)
            && let Some(pointer) = ui.input(|input| input.pointer.interact_pos())
        {
            self.controller
                .drag_to(id.as_str(), screen_to_local(origin, pointer));
        }
    }
}

use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2, vec2};

use crate::controller::{Variant, centered_square};
use crate::physics::quadtree_cells;
use crate::thoughts::NodeId;
use crate::util::short_text;

use super::super::ViewModel;
use super::super::render_utils::{
    HOVER_COLOR, MATCH_COLOR, NODE_COLOR, SELECTED_COLOR, blend_color, centered_label_offset,
    dim_color, draw_backdrop, draw_background, local_to_screen,
};

const LABEL_CHARS: usize = 48;
const LABEL_FONT_SIZE: f32 = 13.0;

impl ViewModel {
    /// Screen rectangle the scene's local coordinates map onto.
    fn scene_rect(&self, rect: Rect) -> Rect {
        match self.controller.variant() {
            Variant::Planet => {
                let side = self.controller.scene().size().x;
                centered_square(rect, side)
            }
            Variant::Universe => Rect::from_min_size(rect.min, self.controller.scene().size()),
        }
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.controller.on_resize(rect.size());

        let physics_moving = self.live_physics && self.controller.tick();
        if physics_moving || self.dragging.is_some() {
            ui.ctx().request_repaint();
        }

        let origin = self.scene_rect(rect).min;
        self.handle_scene_pointer(ui, &response, origin);

        let painter = ui.painter_at(rect);
        draw_background(&painter, rect);
        draw_backdrop(&painter, origin, self.controller.scene().backdrop());

        if self.show_quadtree_overlay {
            self.draw_quadtree_overlay(&painter, origin);
        }

        if self.controller.nodes().is_empty() {
            draw_empty_hint(&painter, rect);
        }

        let matches = self.search_matches();
        self.draw_circles(ui, &painter, origin, matches.as_ref());

        if self.controller.config().labels {
            self.draw_labels(&painter, origin);
        }

        if self.controller.variant() == Variant::Universe
            && let Some(pointer) = response.hover_pos()
        {
            self.draw_hover_menu(&painter, pointer);
        }
    }

    fn search_matches(&self) -> Option<HashSet<NodeId>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }
        Some(self.controller.search(query))
    }

    fn draw_quadtree_overlay(&mut self, painter: &egui::Painter, origin: Pos2) {
        quadtree_cells(self.controller.nodes(), &mut self.quadtree_cells);
        for cell in &self.quadtree_cells {
            let extent = vec2(cell.half_extent, cell.half_extent);
            let min = local_to_screen(origin, (cell.center - extent).to_pos2());
            let max = local_to_screen(origin, (cell.center + extent).to_pos2());

            let alpha = if cell.is_leaf { 110 } else { 55 };
            let line_width: f32 = (1.4_f32 - (cell.depth as f32 * 0.09_f32)).clamp(0.45, 1.4);
            painter.rect_stroke(
                Rect::from_min_max(min, max),
                0.0,
                Stroke::new(line_width, Color32::from_rgba_unmultiplied(106, 198, 255, alpha)),
                egui::StrokeKind::Middle,
            );
        }
    }

    fn draw_circles(
        &self,
        ui: &Ui,
        painter: &egui::Painter,
        origin: Pos2,
        matches: Option<&HashSet<NodeId>>,
    ) {
        let scene = self.controller.scene();
        for node in self.controller.nodes() {
            let Some(circle) = scene.circle(&node.id) else {
                continue;
            };
            let center = local_to_screen(origin, circle.center);

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("thought-selection", node.id.as_str())),
                circle.selected,
            );
            let mut fill = blend_color(NODE_COLOR, SELECTED_COLOR, selection_mix);
            if circle.hovered {
                fill = blend_color(fill, HOVER_COLOR, 0.65);
            }

            let matched = matches.map(|matches| matches.contains(&node.id));
            if matched == Some(false) {
                fill = dim_color(fill, 0.35);
            }

            painter.circle_filled(center, circle.radius, fill);
            if matched == Some(true) {
                painter.circle_stroke(center, circle.radius + 2.5, Stroke::new(2.0, MATCH_COLOR));
            }
            if circle.selected {
                painter.circle_stroke(
                    center,
                    circle.radius + 1.0,
                    Stroke::new(1.5, Color32::from_rgb(255, 239, 186)),
                );
            }
        }
    }

    /// Paints each thought's text centered on its circle. Offsets are
    /// measured once per node and cached on the node.
    fn draw_labels(&mut self, painter: &egui::Painter, origin: Pos2) {
        let font = FontId::proportional(LABEL_FONT_SIZE);
        let mut measured: Vec<(NodeId, Vec2)> = Vec::new();

        let scene = self.controller.scene();
        for node in self.controller.nodes() {
            let Some(circle) = scene.circle(&node.id) else {
                continue;
            };
            let label = short_text(node.text(), LABEL_CHARS);
            let galley = painter.layout_no_wrap(label, font.clone(), Color32::from_rgb(232, 237, 242));

            let offset = node.label_offset.unwrap_or_else(|| {
                let offset = centered_label_offset(galley.size());
                measured.push((node.id.clone(), offset));
                offset
            });

            let anchor = local_to_screen(origin, circle.center) + offset;
            painter.galley(anchor, galley, Color32::from_rgb(232, 237, 242));
        }

        for (id, offset) in measured {
            self.controller.set_label_offset(id.as_str(), offset);
        }
    }

    fn draw_hover_menu(&self, painter: &egui::Painter, pointer: Pos2) {
        let Some(id) = self.controller.hovered() else {
            return;
        };
        let Some(node) = self.controller.node(id.as_str()) else {
            return;
        };

        let mut lines = vec![short_text(node.text(), 80)];
        if !node.tags.is_empty() {
            lines.push(node.tags.iter().cloned().collect::<Vec<_>>().join(" "));
        }
        if self.controller.config().draggable {
            lines.push("drag to move, click to open".to_owned());
        }

        let text = lines.join("\n");
        let font = FontId::proportional(12.0);
        let galley = painter.layout_no_wrap(text, font, Color32::from_rgb(226, 232, 240));
        let anchor = pointer + vec2(14.0, 14.0);
        let frame = Rect::from_min_size(anchor, galley.size()).expand(6.0);

        painter.rect_filled(frame, 4.0, Color32::from_rgba_unmultiplied(24, 30, 38, 230));
        painter.rect_stroke(
            frame,
            4.0,
            Stroke::new(1.0, Color32::from_rgb(72, 84, 98)),
            egui::StrokeKind::Inside,
        );
        painter.galley(anchor, galley, Color32::from_rgb(226, 232, 240));
    }
}

fn draw_empty_hint(painter: &egui::Painter, rect: Rect) {
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "No thoughts yet. Add one from the left panel.",
        FontId::proportional(14.0),
        Color32::from_gray(160),
    );
}

use eframe::egui::{self, RichText, Ui};
use tracing::debug;

use crate::thoughts::extract_hashtags;
use crate::util::short_text;

use super::super::ViewModel;

const TAG_CLOUD_HEIGHT: f32 = 220.0;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_salt("controls_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.draw_add_form(ui);
                ui.separator();
                self.draw_search(ui);
                ui.separator();
                self.draw_tag_cloud(ui);
                ui.separator();
                self.draw_simulation_controls(ui);
            });
    }

    fn draw_add_form(&mut self, ui: &mut Ui) {
        ui.heading("Add a thought");
        ui.add(
            egui::TextEdit::multiline(&mut self.draft)
                .hint_text("What's on your mind? #tags work too")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        let text = self.draft.trim().to_owned();
        let hashtags = extract_hashtags(&text);
        if !hashtags.is_empty() {
            ui.small(format!("tags: {}", hashtags.join(" ")));
        }

        if ui
            .add_enabled(!text.is_empty(), egui::Button::new("Add"))
            .clicked()
        {
            let id = self.controller.add_thought(&text, None);
            debug!(%id, "thought added from the form");
            self.draft.clear();
        }
    }

    fn draw_search(&mut self, ui: &mut Ui) {
        ui.heading("Search");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.search)
                    .hint_text("fuzzy match text or tags")
                    .desired_width(200.0),
            );
            if ui.button("Clear").clicked() {
                self.search.clear();
            }
        });

        let query = self.search.trim();
        if query.is_empty() {
            return;
        }
        let matches = self.controller.search(query);
        ui.small(format!("{} matching", matches.len()));

        let mut open = None;
        for node in self.controller.nodes() {
            if !matches.contains(&node.id) {
                continue;
            }
            let label = short_text(node.text(), 40);
            if ui.link(label).on_hover_text(node.id.as_str()).clicked() {
                open = Some(node.id.clone());
            }
        }
        if let Some(id) = open {
            self.controller.on_select(id.as_str());
            self.sync_address();
        }
    }

    fn draw_tag_cloud(&mut self, ui: &mut Ui) {
        ui.heading("Tags");
        let cloud = self.controller.tag_cloud();
        if cloud.is_empty() {
            ui.label("No tags yet.");
            return;
        }

        let max_count = cloud.iter().map(|(_, count)| *count).max().unwrap_or(1);
        let mut picked = None;
        egui::ScrollArea::vertical()
            .id_salt("tag_cloud_scroll")
            .max_height(TAG_CLOUD_HEIGHT)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (tag, count) in &cloud {
                        let size = 12.0 + 8.0 * (*count as f32 / max_count as f32);
                        let active = self.active_tag.as_deref() == Some(tag.as_str());
                        let text = RichText::new(format!("{tag} ({count})")).size(size);
                        if ui.selectable_label(active, text).clicked() {
                            picked = Some(tag.clone());
                        }
                    }
                });
            });

        if let Some(tag) = picked {
            let marked = self.controller.highlight_by_tag(&tag);
            debug!(%tag, marked, "tag highlighted");
            self.active_tag = Some(tag);
        }

        if self.active_tag.is_some() && ui.button("Clear highlight").clicked() {
            self.active_tag = None;
            self.controller.on_url_change();
        }
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.heading("Simulation");
        ui.checkbox(&mut self.live_physics, "Live physics");
        ui.checkbox(&mut self.show_quadtree_overlay, "Show quadtree overlay");

        let status = if self.controller.is_running() {
            "settling"
        } else {
            "at rest"
        };
        ui.small(format!("layout: {status}"));

        if ui.button("Restart layout").clicked() {
            let report = self.controller.synchronize();
            debug!(?report, "layout restarted");
        }
    }
}

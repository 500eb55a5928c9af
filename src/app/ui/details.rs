use eframe::egui::{self, RichText, Ui};

use super::super::ViewModel;

impl ViewModel {
    /// Right panel: the content panel text plus actions on the selection.
    pub(in crate::app) fn draw_content(&mut self, ui: &mut Ui) {
        ui.heading("Thought");
        ui.add_space(6.0);

        let Some(text) = self.controller.panel().text() else {
            ui.label("Hover or click a thought to read it.");
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("thought_text_scroll")
            .max_height(280.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.label(RichText::new(text).size(15.0));
            });

        let Some(node) = self.controller.selected_node() else {
            ui.add_space(6.0);
            ui.small("Click the thought to keep it open.");
            return;
        };

        let id = node.id.clone();
        let tags: Vec<String> = node.tags.iter().cloned().collect();

        ui.separator();
        ui.small(format!("id: {id}"));
        if !tags.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for tag in &tags {
                    if ui.link(tag.as_str()).clicked() {
                        self.controller.highlight_by_tag(tag);
                        self.active_tag = Some(tag.clone());
                    }
                }
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Close").clicked() {
                self.controller.on_clear();
                self.sync_address();
            }
            if ui.button("Remove thought").clicked() {
                self.controller.remove_thought(id.as_str());
                self.sync_address();
            }
        });
    }
}

use eframe::egui::{self, Align, Context, Key, Layout};

use crate::controller::{LayoutController, encode_fragment};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(controller: LayoutController) -> Self {
        let address = controller.location().selected_id();
        Self {
            controller,
            draft: String::new(),
            search: String::new(),
            address,
            active_tag: None,
            live_physics: true,
            show_quadtree_overlay: false,
            dragging: None,
            quadtree_cells: Vec::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui));

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("content")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_content(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_graph(ui));
    }

    fn draw_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("thought-planet");
            ui.separator();
            ui.label(format!("view: {}", self.controller.variant()));
            ui.label(format!("thoughts: {}", self.controller.nodes().len()));
            ui.separator();

            ui.label("#");
            let field = ui.add(
                egui::TextEdit::singleline(&mut self.address)
                    .hint_text("thought id")
                    .desired_width(200.0),
            );
            let submitted =
                field.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
            if submitted || ui.button("Go").clicked() {
                self.submit_address();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.monospace(self.controller.location().href());
            });
        });
    }

    /// Navigates to the id typed in the address field. The field holds a
    /// decoded id, so it is re-encoded before it becomes the fragment.
    pub(in crate::app) fn submit_address(&mut self) {
        let fragment = encode_fragment(self.address.trim());
        self.controller.navigate(&fragment);
        self.sync_address();
    }

    /// Mirrors the current fragment into the editable address field.
    pub(in crate::app) fn sync_address(&mut self) {
        self.address = self.controller.location().selected_id();
    }
}

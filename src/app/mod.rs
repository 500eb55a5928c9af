use eframe::egui::{self, Context};
use tracing::{error, info};

use crate::controller::{LayoutController, Location, Variant};
use crate::physics::QuadtreeCell;
use crate::thoughts::{NodeId, ThoughtSeed};

mod graph;
mod render_utils;
mod ui;

pub struct ThoughtsApp {
    variant: Variant,
    seeds: Vec<ThoughtSeed>,
    location: Location,
    state: AppState,
}

enum AppState {
    /// Waiting for the first frame to tell how large the container is.
    Measuring,
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    controller: LayoutController,
    draft: String,
    search: String,
    address: String,
    active_tag: Option<String>,
    live_physics: bool,
    show_quadtree_overlay: bool,
    dragging: Option<NodeId>,
    quadtree_cells: Vec<QuadtreeCell>,
}

impl ThoughtsApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        variant: Variant,
        seeds: Vec<ThoughtSeed>,
        location: Location,
    ) -> Self {
        Self {
            variant,
            seeds,
            location,
            state: AppState::Measuring,
        }
    }

    fn build_layout(&self, container: egui::Vec2) -> AppState {
        match LayoutController::new(
            self.variant,
            container,
            self.seeds.clone(),
            self.location.clone(),
        ) {
            Ok(controller) => {
                info!(address = controller.location().href(), "view ready");
                AppState::Ready(Box::new(ViewModel::new(controller)))
            }
            Err(error) => {
                error!(%error, "failed to build the layout");
                AppState::Error(error.to_string())
            }
        }
    }
}

impl eframe::App for ThoughtsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if matches!(self.state, AppState::Measuring) {
            let container = egui::CentralPanel::default()
                .show(ctx, |ui| ui.available_size())
                .inner;
            self.state = self.build_layout(container);
            ctx.request_repaint();
            return;
        }

        let mut transition = None;

        match &mut self.state {
            AppState::Measuring => {}
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to lay out the thoughts");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(AppState::Measuring);
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
            ctx.request_repaint();
        }
    }
}

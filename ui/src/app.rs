use std::time::Duration;

use userdesk_business::{ListUsersCompute, LoadUsersCommand};

use crate::{pages, state::State, widgets};

const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct UserdeskApp {
    state: State,
}

impl UserdeskApp {
    /// Called once before the first frame. Queues the initial users fetch; it is spawned at the
    /// end of the first frame.
    pub fn new(mut state: State) -> Self {
        state.ctx.enqueue_command::<LoadUsersCommand>();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for UserdeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply command results, then bring the table view up to date for this frame
        self.state.ctx.sync_computes();
        self.state.ctx.run_computed();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::users_page(&mut self.state, ui);
        });

        // Spawn commands queued by this frame, then recompute what the frame's input changed
        self.state.ctx.flush_commands();
        self.state.ctx.run_computed();

        let in_flight = self.state.ctx.task_count() > 0
            || self.state.ctx.compute::<ListUsersCompute>().is_loading();
        if in_flight {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}

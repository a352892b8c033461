use client_core::ViewSnapshot;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Align, Layout, RichText};
use tokio::sync::watch;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{events::UiEvent, orchestration::dispatch_backend_command},
    ui::{board, theme},
};

pub struct OthelloApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view_rx: watch::Receiver<ViewSnapshot>,
    snapshot: ViewSnapshot,
    /// Problems on the UI side of the bridge, shown above the game message.
    local_status: Option<String>,
}

impl OthelloApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        view_rx: watch::Receiver<ViewSnapshot>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            view_rx,
            snapshot: ViewSnapshot::default(),
            local_status: None,
        }
    }

    fn process_ui_events(&mut self) {
        if self.view_rx.has_changed().unwrap_or(false) {
            self.snapshot = self.view_rx.borrow_and_update().clone();
        }
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendFailed(reason) => {
                    self.local_status = Some(reason);
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.local_status);
    }

    fn show_score_bar(&self, ctx: &egui::Context) -> Option<BackendCommand> {
        let mut requested = None;
        egui::TopBottomPanel::top("score_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.snapshot.view {
                    Some(view) => {
                        score_card(ui, "Black", view.scores.black, view.scores.black_active);
                        score_card(ui, "White", view.scores.white, view.scores.white_active);
                        ui.separator();
                        ui.label(RichText::new(view.banner.to_string()).strong());
                    }
                    None => {
                        ui.label("Waiting for game state...");
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("New Game").clicked() {
                        requested = Some(BackendCommand::Reset);
                    }
                    if ui.button("Refresh").clicked() {
                        requested = Some(BackendCommand::Refresh);
                    }
                });
            });
        });
        requested
    }

    fn show_message_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("message_bar").show(ctx, |ui| {
            if let Some(status) = &self.local_status {
                ui.colored_label(theme::ERROR_TEXT, status.as_str());
            }
            match &self.snapshot.message {
                Some(message) => {
                    ui.colored_label(theme::message_color(message.severity), message.text.as_str());
                }
                None => {
                    ui.label("");
                }
            }
        });
    }

    fn show_board(&self, ctx: &egui::Context) -> Option<BackendCommand> {
        let mut requested = None;
        egui::CentralPanel::default().show(ctx, |ui| match &self.snapshot.view {
            Some(view) => {
                ui.vertical_centered(|ui| {
                    if let Some(coord) = board::board_widget(ui, view) {
                        requested = Some(BackendCommand::Activate { coord });
                    }
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
        });
        requested
    }
}

fn score_card(ui: &mut egui::Ui, label: &str, score: u32, active: bool) {
    let text = RichText::new(format!("{label}: {score}")).size(18.0);
    let text = if active {
        text.strong().color(theme::ACCENT)
    } else {
        text
    };
    ui.label(text);
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let from_scores = self.show_score_bar(ctx);
        self.show_message_bar(ctx);
        let from_board = self.show_board(ctx);

        for cmd in [from_scores, from_board].into_iter().flatten() {
            self.dispatch(cmd);
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

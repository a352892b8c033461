mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{load_settings, parse_server_url, ViewSnapshot};
use crossbeam_channel::bounded;
use eframe::egui;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    controller::events::UiEvent,
    ui::OthelloApp,
};

#[derive(Parser, Debug)]
#[command(about = "Desktop client for an Othello game server")]
struct Args {
    /// Overrides the server url from othello_client.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings();

    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server_url = parse_server_url(args.server_url.as_deref().unwrap_or(&settings.server_url))?;
    tracing::info!(%server_url, "using game server");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let (view_tx, view_rx) = watch::channel(ViewSnapshot::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Othello")
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            runtime::launch(server_url, cmd_rx, ui_tx, view_tx, move || {
                egui_ctx.request_repaint()
            });
            Ok(Box::new(OthelloApp::new(cmd_tx, ui_rx, view_rx)))
        }),
    )
    .map_err(|err| anyhow!("failed to run the desktop window: {err}"))
}

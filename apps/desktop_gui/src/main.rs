use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{config::SETTINGS_FILE, load_settings_from};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::FormSchema;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the server url from the settings file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = SETTINGS_FILE)]
    config: PathBuf,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    tracing::info!(server_url = %settings.server_url, "starting risk prediction gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cardiovascular Risk Prediction")
            .with_inner_size([560.0, 820.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cardiovascular Risk Prediction",
        options,
        Box::new(|_cc| {
            Ok(Box::new(ui::RiskFormApp::new(
                cmd_tx,
                ui_rx,
                FormSchema::cardio(),
            )))
        }),
    )
}

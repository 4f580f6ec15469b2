mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::Language;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::{labels::APP_NAME, NeedhiApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "needhi", about = "Bilingual legal assistant desktop client")]
struct Args {
    /// Backend base URL; overrides needhi.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Initial language mode (`en` or `ta`).
    #[arg(long, default_value = "en")]
    language: Language,
    /// Directory complaint PDFs are saved to.
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    if let Some(download_dir) = args.download_dir {
        settings.download_dir = Some(download_dir);
    }
    tracing::info!(api_url = %settings.api_url, language = args.language.code(), "starting needhi");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let startup = StartupConfig {
        language: args.language,
        api_url: settings.api_url.clone(),
    };
    runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(NeedhiApp::bootstrap(cc, cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}

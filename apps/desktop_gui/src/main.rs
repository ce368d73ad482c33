use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use directory_core::config::load_settings;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{DirectoryApp, StartupConfig};

/// Browse, search and filter the doctor roster.
#[derive(Parser, Debug)]
#[command(name = "doctor-directory")]
struct Args {
    /// Page URL to open; its query restores search, mode, specialties and sort.
    #[arg(long)]
    url: Option<String>,
    /// Roster endpoint returning a JSON array of doctors.
    #[arg(long)]
    roster_url: Option<String>,
    /// Read the roster from a local JSON file instead of the endpoint.
    #[arg(long)]
    roster_file: Option<PathBuf>,
    /// Settings file (defaults to ./doctor_directory.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref()).context("loading settings")?;
    if let Some(roster_url) = args.roster_url {
        settings.roster_url = roster_url;
        settings.roster_file = None;
    }
    if let Some(roster_file) = args.roster_file {
        settings.roster_file = Some(roster_file);
    }
    let startup =
        StartupConfig::resolve(&settings, args.url.as_deref()).context("resolving page url")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Doctor Listing")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Doctor Listing",
        options,
        Box::new(|_cc| Ok(Box::new(DirectoryApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}

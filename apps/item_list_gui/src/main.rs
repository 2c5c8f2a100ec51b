mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, NamePolicy};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{controller::events::UiEvent, ui::ItemListApp};

#[derive(Parser, Debug)]
#[command(about = "Show the item list grouped by list id")]
struct Args {
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    name_policy: Option<NamePolicy>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings =
        load_settings().with_overrides(args.endpoint, args.timeout_secs, args.name_policy);

    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Item List")
            .with_inner_size([640.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Item List",
        options,
        Box::new(move |cc| {
            backend_bridge::runtime::launch(settings, ui_tx, cc.egui_ctx.clone());
            Ok(Box::new(ItemListApp::new(ui_rx)))
        }),
    )
}

mod app;
mod colors;
mod config;
mod game_ui;
mod menu_ui;
mod offline;
mod replay_playback;

use std::path::PathBuf;

use clap::Parser;
use common::logger::init_logger;
use eframe::egui;

use app::SosApp;

#[derive(Parser)]
#[command(name = "sos_game_client", about = "Desktop client for the SOS board game")]
struct Args {
    /// Open this replay file straight into playback
    #[arg(long)]
    replay: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("SOS"),
        ..Default::default()
    };

    eframe::run_native(
        "SOS",
        options,
        Box::new(move |_cc| Ok(Box::new(SosApp::new(args.replay)))),
    )?;

    Ok(())
}

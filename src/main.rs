//! Omok GUI
//!
//! Two players share one window; set `RUST_LOG=debug` to trace moves.

use clap::Parser;
use omok::config::{WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};
use omok::ui::OmokApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player five-in-a-row with a 30 second move clock", long_about = None)]
struct Args {
    /// Seed for the random stones placed when a player runs out of time
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(move |cc| Ok(Box::new(OmokApp::new(cc, args.seed)))),
    )
}

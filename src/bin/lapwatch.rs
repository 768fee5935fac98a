use lapwatch::{
    cli::Arguments,
    gui::{Gui, Theme},
};

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use log::debug;

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(arguments.log_filter()),
    )
    .init();

    debug!("Starting with {:?}", arguments);

    let tick_period = arguments.tick_period();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stopwatch")
            .with_inner_size([arguments.width, arguments.height]),
        ..Default::default()
    };

    eframe::run_native(
        "lapwatch",
        native_options,
        Box::new(move |cc| Box::new(Gui::new(cc, tick_period, Theme::default()))),
    )
    .map_err(|e| anyhow!("Failed to run stopwatch window: {}", e))
}

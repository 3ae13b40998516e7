//! Pente GUI
//!
//! One human against the computer. `PENTE_SEED` fixes the random choices,
//! `PENTE_HUMAN=white|black` fixes the human's first colour, `RUST_LOG`
//! controls logging (default `pente=info`).

use pente::game::MatchConfig;
use pente::ui::PenteApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pente=info")),
        )
        .init();

    let config = MatchConfig::from_env();
    tracing::info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1050.0, 780.0])
            .with_min_inner_size([820.0, 620.0])
            .with_title("Pente"),
        ..Default::default()
    };

    eframe::run_native(
        "Pente",
        options,
        Box::new(move |cc| Ok(Box::new(PenteApp::new(cc, config)))),
    )
}

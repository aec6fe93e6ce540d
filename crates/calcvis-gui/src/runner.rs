use crate::app::CalcvisApp;
use anyhow::{anyhow, Context};
use calcvis_color::ColorScheme;
use calcvis_oracle::Analyzer;

pub const APP_NAME: &str = "calcvis";

/// Open the desktop window and block until it is closed.
pub fn run_native(analyzer: Analyzer, scheme: ColorScheme) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calculus Image Generator")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(CalcvisApp::new(runtime, analyzer, scheme)))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}

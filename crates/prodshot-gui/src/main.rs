mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use prodshot_core::client::GeminiClient;
use prodshot_core::config::{Credential, Settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // A missing key is fatal before any window opens.
    let credential = Credential::from_env()?;
    let settings = Settings::default();
    let client = GeminiClient::new(settings.clone(), credential.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Prodshot")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Prodshot",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ProdshotApp::new(
                &cc.egui_ctx,
                client,
                credential,
                settings,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

use std::time::Instant;

use prodshot_core::busy::BusyTicker;

/// Spinner plus the rotating progress message.
pub fn show(ui: &mut egui::Ui, ticker: &BusyTicker) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label(ticker.message_at(Instant::now()));
        ui.add_space(40.0);
    });
}

use crate::app::ProdshotApp;

pub fn show(ctx: &egui::Context, app: &mut ProdshotApp) {
    show_notice(ctx, app);
    show_about(ctx, app);
}

/// Modal notice for rejected uploads. Blocks the rest of the UI until dismissed.
fn show_notice(ctx: &egui::Context, app: &mut ProdshotApp) {
    let Some(notice) = app.ui_state.notice.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("upload_notice")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading("Notice");
        ui.add_space(6.0);
        ui.label(&notice);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("OK").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        app.ui_state.notice = None;
    }
}

fn show_about(ctx: &egui::Context, app: &mut ProdshotApp) {
    if !app.ui_state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Prodshot");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(4.0);
            ui.label("Turns a casual product photo into a studio shot.");
            ui.label(format!("Model: {}", app.settings.model));
        });
    app.ui_state.show_about = open;
}

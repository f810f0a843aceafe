use prodshot_core::session::AppStatus;

use crate::app::ProdshotApp;
use crate::panels::menu_bar::open_file;

const DROP_ZONE_HEIGHT: f32 = 220.0;

/// Upload prompt shown while no original image is loaded.
pub fn show(ui: &mut egui::Ui, app: &mut ProdshotApp) {
    let enabled = app.session.can_upload();
    let hover = app.ui_state.drop_hover;

    let stroke_color = if hover {
        ui.visuals().selection.stroke.color
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let frame = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .inner_margin(egui::Margin::same(24));

    let inner = frame.show(ui, |ui| {
        ui.set_min_size(egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT));
        ui.vertical_centered(|ui| {
            ui.add_space(DROP_ZONE_HEIGHT / 4.0);
            ui.heading("Upload a product photo");
            ui.add_space(6.0);
            if app.session.status() == AppStatus::Uploading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Reading image...");
                });
            } else {
                ui.label("Click to browse, or drop an image here");
                ui.small("PNG, JPG or WEBP");
            }
        });
    });

    let response = inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if enabled && response.clicked() {
        open_file(app);
    }
}

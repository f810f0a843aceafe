pub mod dialogs;
pub mod loader;
pub mod menu_bar;
pub mod status;
pub mod uploader;
pub mod workspace;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Paint a texture scaled to fit the available width, keeping its aspect ratio.
pub(crate) fn fitted_image(ui: &mut egui::Ui, texture: &egui::TextureHandle, max_height: f32) {
    let size = texture.size_vec2();
    let scale = (ui.available_width() / size.x)
        .min(max_height / size.y)
        .min(1.0);
    ui.add(egui::Image::new((texture.id(), size * scale)));
}

use prodshot_core::session::AppStatus;

use crate::app::ProdshotApp;
use crate::panels::menu_bar::save_result;
use crate::panels::{fitted_image, loader, section_header, uploader};

const IMAGE_MAX_HEIGHT: f32 = 420.0;

pub fn show(ctx: &egui::Context, app: &mut ProdshotApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        header(ui);
        ui.add_space(12.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            if app.session.original().is_none() {
                uploader::show(ui, app);
                return;
            }

            ui.columns(2, |cols| {
                original_column(&mut cols[0], app);
                result_column(&mut cols[1], app);
            });

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.link("Start over with a new image").clicked() {
                    app.start_over();
                }
            });
        });
    });
}

fn header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading("Professional Product Photo Generator");
        ui.label("Upload a product photo, describe the scene, and get a studio-quality shot.");
    });
}

fn original_column(ui: &mut egui::Ui, app: &mut ProdshotApp) {
    section_header(ui, "Original", app.session.original().map(|i| i.name()));
    ui.separator();

    match app.previews.original {
        Some(ref texture) => fitted_image(ui, texture, IMAGE_MAX_HEIGHT),
        None => {
            ui.label("(preview unavailable)");
        }
    }

    ui.add_space(8.0);
    let processing = app.session.is_processing();

    ui.label("Describe the setting:");
    let mut prompt = app.session.prompt().to_string();
    let edit = egui::TextEdit::multiline(&mut prompt)
        .desired_rows(3)
        .desired_width(f32::INFINITY)
        .hint_text(app.session.default_prompt());
    if ui.add_enabled(!processing, edit).changed() {
        app.session.set_prompt(prompt);
    }

    ui.add_space(6.0);
    let label = if processing {
        "Processing..."
    } else {
        "Generate Professional Photo"
    };
    let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0));
    if ui.add_enabled(app.session.can_generate(), button).clicked() {
        app.generate();
    }
}

fn result_column(ui: &mut egui::Ui, app: &mut ProdshotApp) {
    section_header(ui, "Result", None);
    ui.separator();

    // A replacement upload keeps the previous result on screen.
    match app.session.settled_status() {
        AppStatus::Processing => {
            if let Some(ref ticker) = app.ui_state.busy {
                loader::show(ui, ticker);
            }
        }
        AppStatus::Error => {
            let message = app.session.error().unwrap_or_default();
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
        AppStatus::Success => {
            match app.previews.generated {
                Some(ref texture) => fitted_image(ui, texture, IMAGE_MAX_HEIGHT),
                None => {
                    ui.label("(preview unavailable)");
                }
            }
            if let Some(advisory) = app.session.advisory() {
                ui.small(advisory);
            }
            ui.add_space(6.0);
            let button =
                egui::Button::new("Download Image").min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add_enabled(app.session.can_download(), button).clicked() {
                save_result(app);
            }
        }
        AppStatus::Idle | AppStatus::Uploading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.weak("Your professional photo will appear here.");
                ui.add_space(40.0);
            });
        }
    }
}

use prodshot_core::config::Settings;

use crate::app::ProdshotApp;
use crate::messages::{WorkerCommand, WorkerResult};

pub fn show(ctx: &egui::Context, app: &mut ProdshotApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                let open = egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut));
                if ui.add_enabled(app.session.can_upload(), open).clicked() {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let save = egui::Button::new("Save Result As...").shortcut_text(ctx.format_shortcut(&save_shortcut));
                if ui.add_enabled(app.session.can_download(), save).clicked() {
                    ui.close();
                    save_result(app);
                }

                ui.separator();

                if ui
                    .add_enabled(!app.session.is_processing(), egui::Button::new("Import Settings..."))
                    .clicked()
                {
                    ui.close();
                    import_settings(app);
                }

                if ui.button("Export Settings...").clicked() {
                    ui.close();
                    export_settings(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Start Over").clicked() {
                    ui.close();
                    app.start_over();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O)))
            && app.session.can_upload()
        {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S)))
            && app.session.can_download()
        {
            save_result(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &ProdshotApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FilePicked { path });
        }
    });
}

pub(crate) fn save_result(app: &ProdshotApp) {
    let Some(download) = app.session.download() else {
        return;
    };
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(&download.file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveDownload { download, path });
        }
    });
}

fn import_settings(app: &ProdshotApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let result = match Settings::load(&path) {
            Ok(settings) => WorkerResult::SettingsImported { settings },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
    });
}

fn export_settings(app: &ProdshotApp) {
    let settings = app.settings.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("prodshot.toml")
            .save_file()
        {
            let written = settings
                .to_toml()
                .and_then(|content| std::fs::write(&path, content).map_err(Into::into));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Settings exported: {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to export {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
        }
    });
}

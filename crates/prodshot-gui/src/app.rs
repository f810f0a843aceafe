use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use prodshot_core::busy::BusyTicker;
use prodshot_core::client::GeminiClient;
use prodshot_core::config::{Credential, Settings};
use prodshot_core::error::UploadError;
use prodshot_core::io::media::media_type_from_bytes;
use prodshot_core::io::upload::{payload_from_bytes, screen_upload};
use prodshot_core::session::Session;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{PreviewState, UIState};
use crate::worker;

pub struct ProdshotApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub settings: Settings,
    pub ui_state: UIState,
    pub previews: PreviewState,
}

impl ProdshotApp {
    pub fn new(
        ctx: &egui::Context,
        client: GeminiClient,
        credential: Credential,
        settings: Settings,
    ) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(client, credential, result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(settings.default_prompt.clone()),
            settings,
            ui_state: UIState::default(),
            previews: PreviewState::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FilePicked { path } => self.accept_path(path),
                WorkerResult::Uploaded { image, preview } => {
                    self.ui_state
                        .add_log(format!("Opened: {} ({})", image.name(), image.media_type()));
                    self.session.image_uploaded(image);
                    self.previews.generated = None;
                    self.previews.original =
                        preview.map(|p| ctx.load_texture("original", p, egui::TextureOptions::LINEAR));
                }
                WorkerResult::UploadFailed { notice, detail } => {
                    self.session.upload_failed();
                    self.ui_state.add_log(format!("ERROR: {detail}"));
                    self.ui_state.notice = Some(notice);
                }
                WorkerResult::GenerationFinished {
                    job_id,
                    result,
                    preview,
                } => {
                    if self.session.pending_job() != Some(job_id) {
                        // Abandoned by start over; a newer attempt may be running.
                        tracing::debug!(job_id, "ignoring stale generation result");
                        continue;
                    }
                    self.ui_state.busy = None;
                    match &result {
                        Ok(outcome) => self.ui_state.add_log(format!(
                            "Generated {} ({} bytes)",
                            outcome.image.media_type(),
                            outcome.image.len()
                        )),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                    self.session.generation_finished(job_id, result);
                    self.previews.generated = preview
                        .map(|p| ctx.load_texture("generated", p, egui::TextureOptions::LINEAR));
                }
                WorkerResult::DownloadSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::SettingsImported { settings } => self.apply_settings(settings),
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Validate a picked or dropped path, then hand the read to the worker.
    pub fn accept_path(&mut self, path: PathBuf) {
        if !self.session.can_upload() {
            return;
        }
        // Missing or unreadable files pass and fail in the worker.
        if let Err(e) = screen_upload(&path) {
            self.reject_upload(e);
            return;
        }
        self.session.begin_upload();
        self.send_command(WorkerCommand::ReadUpload { path });
    }

    fn accept_dropped(&mut self, file: egui::DroppedFile) {
        if let Some(path) = file.path {
            self.accept_path(path);
            return;
        }
        let Some(bytes) = file.bytes else {
            return;
        };
        if !self.session.can_upload() {
            return;
        }

        let media_type = if file.mime.is_empty() {
            media_type_from_bytes(&bytes).unwrap_or_default().to_string()
        } else {
            file.mime.clone()
        };
        match payload_from_bytes(&file.name, &media_type, bytes) {
            Ok(image) => {
                self.session.begin_upload();
                self.send_command(WorkerCommand::PreviewUpload { image });
            }
            Err(e) => self.reject_upload(e),
        }
    }

    fn reject_upload(&mut self, error: UploadError) {
        tracing::info!("rejected upload: {error}");
        self.ui_state.add_log(format!("Rejected upload: {error}"));
        self.ui_state.notice = Some(error.notice().to_string());
    }

    pub fn generate(&mut self) {
        if let Some(job) = self.session.request_generation() {
            self.previews.generated = None;
            self.ui_state.busy = Some(BusyTicker::start());
            self.ui_state.add_log("Generating professional photo...".into());
            self.send_command(WorkerCommand::Generate { job });
        }
    }

    pub fn start_over(&mut self) {
        self.session.start_over();
        self.previews.clear();
        self.ui_state.busy = None;
        self.ui_state.add_log("Started over".into());
    }

    fn apply_settings(&mut self, settings: Settings) {
        if self.session.is_processing() {
            self.ui_state
                .add_log("ERROR: settings can't change while a request is pending".into());
            return;
        }
        self.session = Session::new(settings.default_prompt.clone());
        self.previews.clear();
        self.send_command(WorkerCommand::ApplySettings {
            settings: settings.clone(),
        });
        self.settings = settings;
        self.ui_state.add_log("Settings imported; session reset".into());
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });

        // Drops only count while the upload area is on screen.
        let accepting = self.session.original().is_none() && self.session.can_upload();
        self.ui_state.drop_hover = hovering && accepting;
        if accepting {
            if let Some(file) = dropped.into_iter().next() {
                self.accept_dropped(file);
            }
        }
    }
}

impl eframe::App for ProdshotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::workspace::show(ctx, self);
        panels::dialogs::show(ctx, self);

        if let Some(ref busy) = self.ui_state.busy {
            ctx.request_repaint_after(busy.next_change_in(Instant::now()));
        }
    }
}

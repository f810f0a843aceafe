use std::path::Path;
use std::sync::mpsc;

use prodshot_core::client::{GeminiClient, GenerationClient};
use prodshot_core::config::Credential;
use prodshot_core::io::download::{save_download, Download};
use prodshot_core::io::upload::load_upload;
use prodshot_core::session::GenerationJob;

use crate::convert::payload_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    client: GeminiClient,
    credential: Credential,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    let spawned = std::thread::Builder::new()
        .name("prodshot-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, client, credential);
        });
    if let Err(e) = spawned {
        // The receiver is dropped with the closure, so every send reports failure.
        tracing::error!("failed to spawn worker thread: {e}");
    }

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    mut client: GeminiClient,
    credential: Credential,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::ReadUpload { path } => handle_read_upload(&path, &tx, &ctx),
            WorkerCommand::PreviewUpload { image } => {
                let preview = payload_to_color_image(&image);
                send(&tx, &ctx, WorkerResult::Uploaded { image, preview });
            }
            WorkerCommand::Generate { job } => handle_generate(&client, job, &tx, &ctx),
            WorkerCommand::SaveDownload { download, path } => {
                handle_save_download(&download, &path, &tx, &ctx)
            }
            WorkerCommand::ApplySettings { settings } => {
                match GeminiClient::new(settings, credential.clone()) {
                    Ok(rebuilt) => {
                        client = rebuilt;
                        send(
                            &tx,
                            &ctx,
                            WorkerResult::Log {
                                message: format!("Using model {}", client.name()),
                            },
                        );
                    }
                    Err(e) => send_error(&tx, &ctx, e.to_string()),
                }
            }
        }
    }
}

fn handle_read_upload(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match load_upload(path) {
        Ok(image) => {
            let preview = payload_to_color_image(&image);
            send(tx, ctx, WorkerResult::Uploaded { image, preview });
        }
        Err(e) => {
            tracing::error!("error reading upload: {e}");
            send(
                tx,
                ctx,
                WorkerResult::UploadFailed {
                    notice: e.notice().to_string(),
                    detail: e.to_string(),
                },
            );
        }
    }
}

fn handle_generate(
    client: &dyn GenerationClient,
    job: GenerationJob,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = client.generate(&job.image, &job.prompt);
    let preview = result
        .as_ref()
        .ok()
        .and_then(|outcome| payload_to_color_image(&outcome.image));
    send(
        tx,
        ctx,
        WorkerResult::GenerationFinished {
            job_id: job.id,
            result,
            preview,
        },
    );
}

fn handle_save_download(
    download: &Download,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_download(download, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::DownloadSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use prodshot_core::busy::BusyTicker;
use prodshot_core::client::{GeminiClient, GenerationClient, GenerationOutcome};
use prodshot_core::config::Settings;
use prodshot_core::error::Result as CoreResult;
use prodshot_core::io::download::{download_path, save_download, Download};
use prodshot_core::io::upload::load_upload;
use prodshot_core::session::{AppStatus, GenerationJob, Session};

const SPINNER_TICK: Duration = Duration::from_millis(100);

#[derive(Args)]
pub struct GenerateArgs {
    /// Product photo (PNG, JPG or WEBP)
    pub file: PathBuf,

    /// Styling instruction, e.g. "on a wooden table with plants behind"
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Output file or directory (defaults to professional_<name>.png here)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let settings = if let Some(ref config_path) = args.config {
        Settings::load(config_path)
            .with_context(|| format!("Failed to read settings {}", config_path.display()))?
    } else {
        Settings::default()
    };
    tracing::debug!(?settings, "settings resolved");

    let client = GeminiClient::from_env(settings.clone())?;
    let mut session = Session::new(settings.default_prompt.clone());

    session.begin_upload();
    match load_upload(&args.file) {
        Ok(image) => session.image_uploaded(image),
        Err(e) => {
            session.upload_failed();
            eprintln!("{}", e.notice());
            return Err(e).with_context(|| format!("Rejected {}", args.file.display()));
        }
    }
    if let Some(ref prompt) = args.prompt {
        session.set_prompt(prompt.as_str());
    }

    crate::summary::print_generate_summary(&session, &settings);

    let job = session
        .request_generation()
        .context("No image loaded to generate from")?;
    let started = Instant::now();
    let job_id = job.id;
    let result = generate_with_spinner(&client, job)?;
    session.generation_finished(job_id, result);

    match session.status() {
        AppStatus::Success => {
            let download = session
                .download()
                .context("Generation succeeded without an image")?;
            let path = resolve_output(args.output.as_deref(), &download);
            save_download(&download, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            crate::summary::print_result_summary(&session, &path, started.elapsed());
            Ok(())
        }
        _ => bail!(
            "{}",
            session.error().unwrap_or("An unknown error occurred.")
        ),
    }
}

/// Run the request on a worker thread while the spinner cycles busy messages.
fn generate_with_spinner(
    client: &dyn GenerationClient,
    job: GenerationJob,
) -> Result<CoreResult<GenerationOutcome>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.enable_steady_tick(SPINNER_TICK);

    let ticker = BusyTicker::start();
    let (tx, rx) = mpsc::channel();

    let result = std::thread::scope(|scope| {
        scope.spawn(move || {
            let _ = tx.send(client.generate(&job.image, &job.prompt));
        });

        loop {
            pb.set_message(ticker.message());
            match rx.recv_timeout(SPINNER_TICK) {
                Ok(result) => break Ok(result),
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    break Err(anyhow::anyhow!("Generation worker stopped without a result"))
                }
            }
        }
    });

    pb.finish_and_clear();
    result
}

fn resolve_output(output: Option<&Path>, download: &Download) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => download_path(path, download),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&download.file_name),
    }
}

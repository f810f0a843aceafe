mod common;

use prodshot_core::client::GenerationClient;
use prodshot_core::consts::{DEFAULT_PROMPT, GENERATED_IMAGE_NAME, NO_IMAGE_MESSAGE};
use prodshot_core::error::{GenerationError, ProdshotError};
use prodshot_core::payload::ImagePayload;
use prodshot_core::session::{AppStatus, Session};

use common::{image_response, sample_original, text_only_response, CannedClient, PNG_BASE64};

/// Run the pending job through `client` the way a front end would.
fn run_attempt(session: &mut Session, client: &dyn GenerationClient) {
    let job = session.request_generation().expect("job should start");
    let result = client.generate(&job.image, &job.prompt);
    session.generation_finished(job.id, result);
}

// ---------------------------------------------------------------------------
// Initial state and uploads
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_is_blank() {
    let session = Session::default();
    assert_eq!(session.status(), AppStatus::Idle);
    assert!(session.original().is_none());
    assert!(session.generated().is_none());
    assert!(session.error().is_none());
    assert_eq!(session.prompt(), DEFAULT_PROMPT);
    assert!(!session.can_generate());
    assert!(!session.can_download());
}

#[test]
fn test_upload_sets_original_and_clears_result() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(&mut session, &CannedClient::new(text_only_response("no")));
    assert_eq!(session.status(), AppStatus::Error);

    let replacement = ImagePayload::new(vec![9u8; 4], "image/webp", "bag.webp");
    session.image_uploaded(replacement.clone());

    assert_eq!(session.status(), AppStatus::Idle);
    assert_eq!(session.original(), Some(&replacement));
    assert!(session.generated().is_none());
    assert!(session.error().is_none());
}

#[test]
fn test_failed_upload_restores_previous_status() {
    let mut session = Session::default();
    assert!(session.begin_upload());
    assert_eq!(session.status(), AppStatus::Uploading);
    assert!(!session.can_upload());

    session.upload_failed();
    assert_eq!(session.status(), AppStatus::Idle);
    assert!(session.original().is_none());
}

#[test]
fn test_generate_refused_while_replacement_is_read() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(&mut session, &CannedClient::new(image_response("image/png", PNG_BASE64)));

    assert!(session.begin_upload());
    assert!(!session.can_generate());
    assert!(session.request_generation().is_none());
    assert_eq!(session.status(), AppStatus::Uploading);
    assert_eq!(session.settled_status(), AppStatus::Success);
    assert!(session.generated().is_some());
}

#[test]
fn test_failed_upload_after_success_keeps_result() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(&mut session, &CannedClient::new(image_response("image/png", PNG_BASE64)));

    assert!(session.begin_upload());
    session.upload_failed();
    assert_eq!(session.status(), AppStatus::Success);
    assert!(session.can_download());
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn test_generation_without_image_is_noop() {
    let mut session = Session::default();
    assert!(session.request_generation().is_none());
    assert_eq!(session.status(), AppStatus::Idle);
}

#[test]
fn test_second_request_refused_while_processing() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());

    let job = session.request_generation();
    assert!(job.is_some());
    assert_eq!(session.status(), AppStatus::Processing);
    assert!(!session.can_generate());
    assert!(session.request_generation().is_none());

    // Uploads and prompt edits are frozen too.
    assert!(!session.begin_upload());
    session.set_prompt("something else");
    assert_eq!(session.prompt(), DEFAULT_PROMPT);
    session.image_uploaded(ImagePayload::new(vec![1u8], "image/png", "other.png"));
    assert_eq!(session.original().map(|o| o.name()), Some("mug.png"));
}

#[test]
fn test_job_carries_current_prompt() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    session.set_prompt("on a wooden table with plants behind");

    let client = CannedClient::new(image_response("image/png", PNG_BASE64));
    run_attempt(&mut session, &client);

    assert_eq!(client.calls(), 1);
    assert_eq!(
        client.last_prompt().as_deref(),
        Some("on a wooden table with plants behind")
    );
}

#[test]
fn test_image_response_sets_success() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(&mut session, &CannedClient::new(image_response("image/jpeg", PNG_BASE64)));

    assert_eq!(session.status(), AppStatus::Success);
    let generated = session.generated().expect("generated image");
    assert_eq!(generated.to_base64(), PNG_BASE64);
    assert_eq!(generated.media_type(), "image/jpeg");
    assert_eq!(generated.name(), GENERATED_IMAGE_NAME);
    assert!(session.error().is_none());
}

#[test]
fn test_text_only_response_sets_error() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(
        &mut session,
        &CannedClient::new(text_only_response("I cannot edit this image.")),
    );

    assert_eq!(session.status(), AppStatus::Error);
    assert!(session.generated().is_none());
    let error = session.error().expect("error message");
    assert!(!error.is_empty());
    assert_eq!(error, format!("Failed to generate photo: {NO_IMAGE_MESSAGE}"));
}

#[test]
fn test_transport_error_is_wrapped() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    let job = session.request_generation().unwrap();
    session.generation_finished(job.id, Err(ProdshotError::Generation(GenerationError::Api {
        status: 503,
        message: "overloaded".into(),
    })));

    assert_eq!(session.status(), AppStatus::Error);
    assert_eq!(
        session.error(),
        Some("Failed to generate photo: API error: 503 - overloaded")
    );
}

#[test]
fn test_retry_clears_previous_error() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    run_attempt(&mut session, &CannedClient::new(text_only_response("nope")));
    assert!(session.error().is_some());

    session.request_generation().unwrap();
    assert!(session.error().is_none());
    assert_eq!(session.status(), AppStatus::Processing);
}

#[test]
fn test_result_without_pending_request_is_dropped() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    let outcome = CannedClient::new(image_response("image/png", PNG_BASE64))
        .generate(&sample_original(), "x")
        .unwrap();
    session.generation_finished(1, Ok(outcome));

    assert_eq!(session.status(), AppStatus::Idle);
    assert!(session.generated().is_none());
}

#[test]
fn test_abandoned_result_does_not_land_on_new_attempt() {
    let client = CannedClient::new(image_response("image/png", PNG_BASE64));
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    let first = session.request_generation().unwrap();

    session.start_over();
    let replacement = ImagePayload::new(vec![9u8; 4], "image/webp", "bag.webp");
    session.image_uploaded(replacement);
    let second = session.request_generation().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(session.pending_job(), Some(second.id));

    let stale = client.generate(&first.image, &first.prompt);
    session.generation_finished(first.id, stale);
    assert_eq!(session.status(), AppStatus::Processing);
    assert!(session.generated().is_none());
    assert!(session.download().is_none());

    let fresh = client.generate(&second.image, &second.prompt);
    session.generation_finished(second.id, fresh);
    assert_eq!(session.status(), AppStatus::Success);
    assert_eq!(session.pending_job(), None);
    let download = session.download().expect("download for the new attempt");
    assert_eq!(download.file_name, "professional_bag.webp.png");
}

#[test]
fn test_ids_stay_unique_across_fresh_sessions() {
    let mut a = Session::default();
    a.image_uploaded(sample_original());
    let mut b = Session::default();
    b.image_uploaded(sample_original());

    let job_a = a.request_generation().unwrap();
    let job_b = b.request_generation().unwrap();
    assert_ne!(job_a.id, job_b.id);

    b.generation_finished(job_a.id, Err(ProdshotError::Generation(GenerationError::Api {
        status: 500,
        message: "late".into(),
    })));
    assert_eq!(b.status(), AppStatus::Processing);
}

// ---------------------------------------------------------------------------
// Start over and download
// ---------------------------------------------------------------------------

#[test]
fn test_start_over_resets_everything() {
    let mut session = Session::new("custom default");
    session.image_uploaded(sample_original());
    session.set_prompt("edited");
    run_attempt(&mut session, &CannedClient::new(image_response("image/png", PNG_BASE64)));

    session.start_over();

    assert_eq!(session.status(), AppStatus::Idle);
    assert!(session.original().is_none());
    assert!(session.generated().is_none());
    assert!(session.error().is_none());
    assert!(session.advisory().is_none());
    assert_eq!(session.prompt(), "custom default");
    assert_eq!(session.default_prompt(), "custom default");
}

#[test]
fn test_download_only_after_success() {
    let mut session = Session::default();
    assert!(session.download().is_none());

    session.image_uploaded(sample_original());
    assert!(session.download().is_none());

    run_attempt(&mut session, &CannedClient::new(text_only_response("no image")));
    assert!(session.download().is_none());

    run_attempt(&mut session, &CannedClient::new(image_response("image/webp", PNG_BASE64)));
    let download = session.download().expect("download after success");
    assert_eq!(download.file_name, "professional_mug.png.png");
    assert_eq!(download.bytes(), &common::PNG_BYTES[..]);
}

#[test]
fn test_advisory_kept_on_success() {
    let mut session = Session::default();
    session.image_uploaded(sample_original());
    let body = common::response_with_parts(&format!(
        r#"[{{"text": "Here is your photo."}}, {{"inlineData": {{"mimeType": "image/png", "data": "{PNG_BASE64}"}}}}]"#
    ));
    run_attempt(&mut session, &CannedClient::new(body));

    assert_eq!(session.status(), AppStatus::Success);
    assert_eq!(session.advisory(), Some("Here is your photo."));
}

#[test]
fn test_status_display() {
    assert_eq!(AppStatus::Idle.to_string(), "Idle");
    assert_eq!(AppStatus::Processing.to_string(), "Processing");
    assert_eq!(AppStatus::default(), AppStatus::Idle);
}

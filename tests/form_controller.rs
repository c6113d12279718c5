//! Form controller flows against a mock backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client, dead_base_url, temp_pdf};
use parking_lot::Mutex;
use std::sync::Arc;
use summarizer::api::{
    InputMode, ProgressCallback, StatusMarker, SummaryResult, MAX_PDF_BYTES,
};
use summarizer::ui::form::{FormController, FormIntent, FormState, Notice, RequestPhase};
use tempfile::TempDir;

fn assert_settled(state: &FormState) {
    assert_eq!(state.phase, RequestPhase::Settled);
    assert!(!state.is_loading());
    assert_eq!(state.progress, 0);
}

#[tokio::test]
async fn test_text_summary_success() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::summary("A short summary."))
        .await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("A long article body.".into()));
    let result = form.summarize(&client(&mock.base_url()), None).await;

    assert_eq!(result, Some(SummaryResult::success("A short summary.")));
    assert_eq!(form.state().summary(), Some("A short summary."));
    assert_settled(form.state());

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/summarize/text");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({ "text": "A long article body." })
    );
}

#[tokio::test]
async fn test_blank_text_sends_nothing() {
    let mock = MockBackend::start().await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("   \n ".into()));
    let result = form.summarize(&client(&mock.base_url()), None).await;

    assert!(result.is_none());
    assert!(mock.captured_requests().await.is_empty());
    assert_eq!(
        form.state().notice,
        Some(Notice::Warning(
            "Please provide valid input for the selected mode.".into()
        ))
    );
    assert_eq!(form.state().phase, RequestPhase::Idle);
}

#[tokio::test]
async fn test_pdf_mode_without_file_sends_nothing() {
    let mock = MockBackend::start().await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("text in another mode".into()));
    form.dispatch(FormIntent::SwitchMode(InputMode::Pdf));
    assert!(form
        .summarize(&client(&mock.base_url()), None)
        .await
        .is_none());
    assert!(mock.captured_requests().await.is_empty());
}

#[test]
fn test_oversized_pdf_is_rejected_at_selection() {
    let dir = TempDir::new().unwrap();
    let big = temp_pdf(&dir, "huge.pdf", (MAX_PDF_BYTES + 1024 * 1024) as usize);

    let mut form = FormController::new();
    form.dispatch(FormIntent::SwitchMode(InputMode::Pdf));
    assert!(!form.select_file(&big));
    assert!(form.state().file.is_none());
    assert_eq!(
        form.state().notice.as_ref().map(Notice::message),
        Some("File too large. Please upload a PDF smaller than 10 MB.")
    );
}

#[tokio::test]
async fn test_pdf_upload_is_multipart_with_progress() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::summary("PDF summary")).await;

    let dir = TempDir::new().unwrap();
    let path = temp_pdf(&dir, "report.pdf", 300 * 1024);

    let mut form = FormController::new();
    form.dispatch(FormIntent::SwitchMode(InputMode::Pdf));
    assert!(form.select_file(&path));
    assert_eq!(form.state().file.as_ref().map(|f| f.size_kb()), Some(300));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let observer: ProgressCallback = Arc::new(move |pct| sink.lock().push(pct));

    let result = form
        .summarize(&client(&mock.base_url()), Some(observer))
        .await;

    assert_eq!(result, Some(SummaryResult::success("PDF summary")));
    assert_settled(form.state());

    let seen = seen.lock().clone();
    assert!(!seen.is_empty());
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "progress went backwards: {:?}", seen);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/summarize/pdf");
    let content_type = requests[0].header("content-type").unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);
    let body = requests[0].body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="report.pdf""#));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("%PDF-1.4"));
}

#[tokio::test]
async fn test_backend_error_with_detail() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"error": "bad input", "detail": "empty text"}"#,
    ))
    .await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));
    let result = form
        .summarize(&client(&mock.base_url()), None)
        .await
        .unwrap();

    assert_eq!(
        result,
        SummaryResult::BackendError {
            error: "bad input".into(),
            detail: Some("empty text".into()),
        }
    );
    assert_eq!(result.status_line(), "⚠️ bad input");
    assert_eq!(result.output_text(), "empty text");
    assert_settled(form.state());
}

#[tokio::test]
async fn test_structured_error_on_400_is_honored() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(
        400,
        "No text provided",
        "Request body must include 'text'",
    ))
    .await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));
    let result = form
        .summarize(&client(&mock.base_url()), None)
        .await
        .unwrap();

    assert_eq!(result.marker(), StatusMarker::Warning);
    assert_eq!(result.status_text(), "No text provided");
}

#[tokio::test]
async fn test_unstructured_500_is_unreachable() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::raw(500, "Internal Server Error"))
        .await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));
    let result = form
        .summarize(&client(&mock.base_url()), None)
        .await
        .unwrap();

    assert!(matches!(result, SummaryResult::Unreachable { .. }));
    assert_settled(form.state());
}

#[tokio::test]
async fn test_malformed_body() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"foo": 1}"#)).await;

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));
    let result = form
        .summarize(&client(&mock.base_url()), None)
        .await
        .unwrap();

    assert_eq!(result, SummaryResult::Malformed);
    assert_eq!(result.status_line(), "⚠️ Unknown response.");
    assert_eq!(result.output_text(), "");
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));
    let result = form.summarize(&client(&dead_base_url()), None).await.unwrap();

    assert!(matches!(result, SummaryResult::Unreachable { .. }));
    assert_eq!(result.marker(), StatusMarker::Failure);
    assert_eq!(result.status_line(), "❌ Error: Could not reach backend.");
    assert_ne!(result.marker(), SummaryResult::Malformed.marker());
    assert_settled(form.state());
}

#[tokio::test]
async fn test_youtube_mode_sends_video_url_and_mood() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"summary": "video summary", "mood_intervals": [{"start": 0, "end": 30, "mood": "positive", "score": 0.8}]}"#,
    ))
    .await;

    let mut form = FormController::new().with_mood_analysis(true);
    form.dispatch(FormIntent::SwitchMode(InputMode::Youtube));
    form.dispatch(FormIntent::SetYoutubeUrl(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into(),
    ));
    let result = form
        .summarize(&client(&mock.base_url()), None)
        .await
        .unwrap();

    assert_eq!(result.summary(), Some("video summary"));
    assert_eq!(result.mood_intervals().len(), 1);
    assert_eq!(result.mood_intervals()[0].mood, "positive");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/summarize/youtube");
    assert_eq!(requests[0].query.as_deref(), Some("mood=true"));
    assert_eq!(
        requests[0].json(),
        serde_json::json!({ "video_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" })
    );
}

#[tokio::test]
async fn test_clear_all_after_mode_switches() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::summary("done")).await;

    let dir = TempDir::new().unwrap();
    let path = temp_pdf(&dir, "a.pdf", 2048);

    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("text".into()));
    form.dispatch(FormIntent::SwitchMode(InputMode::Pdf));
    assert!(form.select_file(&path));
    form.dispatch(FormIntent::SwitchMode(InputMode::Youtube));
    form.dispatch(FormIntent::SetYoutubeUrl("https://youtu.be/dQw4w9WgXcQ".into()));
    form.dispatch(FormIntent::SwitchMode(InputMode::Text));
    form.summarize(&client(&mock.base_url()), None).await;
    assert!(form.state().result.is_some());

    form.clear_all();

    let state = form.state();
    assert!(state.text.is_empty());
    assert!(state.file.is_none());
    assert!(state.youtube_url.is_empty());
    assert!(state.result.is_none());
    assert!(state.notice.is_none());
    assert_eq!(state.progress, 0);
    assert_eq!(state.mode, InputMode::Text);
}

#[tokio::test]
async fn test_summaries_can_be_repeated() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::summary("first")).await;
    mock.enqueue_response(MockResponse::summary("second")).await;

    let client = client(&mock.base_url());
    let mut form = FormController::new();
    form.dispatch(FormIntent::SetText("x".into()));

    form.summarize(&client, None).await;
    assert_eq!(form.state().summary(), Some("first"));
    form.summarize(&client, None).await;
    assert_eq!(form.state().summary(), Some("second"));
    assert_eq!(mock.captured_requests().await.len(), 2);
}

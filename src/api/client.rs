//! HTTP client for the summarization backend.
//!
//! One method per concern: `send` does the mode-specific encoding and
//! transport, `summarize` wraps it with classification and logging.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::config::BackendConfig;

use super::error::ApiError;
use super::progress::{ProgressCallback, ProgressStream};
use super::result::{classify, SummaryResult};
use super::types::{InputMode, PdfFile, SummaryRequest, MAX_PDF_BYTES};

/// Client for the `/summarize/*` endpoints.
#[derive(Clone)]
pub struct SummaryClient {
    client: Client,
    config: BackendConfig,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct YoutubeBody<'a> {
    video_url: &'a str,
}

impl SummaryClient {
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL of the endpoint serving `mode`.
    pub fn endpoint(&self, mode: InputMode) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            mode.endpoint_path()
        )
    }

    /// Total request timeout for `mode`.
    pub fn timeout(&self, mode: InputMode) -> Duration {
        let secs = match mode {
            InputMode::Text => self.config.text_timeout_seconds,
            InputMode::Pdf => self.config.pdf_timeout_seconds,
            InputMode::Youtube => self.config.youtube_timeout_seconds,
        };
        Duration::from_secs(secs)
    }

    /// Send `request` and classify whatever comes back.
    ///
    /// Never fails: transport problems become `SummaryResult::Unreachable`.
    pub async fn summarize(
        &self,
        request: &SummaryRequest,
        on_progress: Option<ProgressCallback>,
    ) -> SummaryResult {
        let request_id = Uuid::new_v4();
        let mode = request.mode();

        tracing::info!(
            request_id = %request_id,
            mode = mode.as_str(),
            endpoint = %self.endpoint(mode),
            "Sending summarization request"
        );

        let result = classify(self.send(request, on_progress).await);

        tracing::info!(
            request_id = %request_id,
            mode = mode.as_str(),
            outcome = result.kind(),
            "Summarization request settled"
        );

        result
    }

    /// Encode and send `request`, returning the decoded JSON body.
    ///
    /// A non-2xx reply that still carries an `error` field is returned as
    /// `Ok` so the structured message reaches the user.
    pub async fn send(
        &self,
        request: &SummaryRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<Value, ApiError> {
        let mode = request.mode();
        let timeout = self.timeout(mode);
        let mut endpoint = self.endpoint(mode);

        let builder = match request {
            SummaryRequest::Text(text) => self
                .client
                .post(&endpoint)
                .timeout(timeout)
                .json(&TextBody { text }),
            SummaryRequest::Pdf(file) => {
                let form = pdf_form(file, on_progress).await?;
                self.client.post(&endpoint).timeout(timeout).multipart(form)
            }
            SummaryRequest::Youtube {
                video_url,
                analyze_mood,
            } => {
                if *analyze_mood {
                    endpoint.push_str("?mood=true");
                }
                self.client
                    .post(&endpoint)
                    .timeout(timeout)
                    .json(&YoutubeBody { video_url })
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&endpoint, timeout, e))?;

        read_body(&endpoint, timeout, response).await
    }

    /// `GET /` on the backend; returns its `message` field.
    pub async fn health(&self) -> Result<String, ApiError> {
        let endpoint = format!("{}/", self.config.base_url.trim_end_matches('/'));
        let timeout = self.config.connect_timeout();

        let response = self
            .client
            .get(&endpoint)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| transport_error(&endpoint, timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = read_body(&endpoint, timeout, response).await?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| body.to_string()))
    }
}

/// Build the multipart form for a PDF, streaming the bytes through a
/// progress-reporting body.
async fn pdf_form(file: &PdfFile, on_progress: Option<ProgressCallback>) -> Result<Form, ApiError> {
    let data = tokio::fs::read(&file.path)
        .await
        .map_err(|source| ApiError::File {
            path: file.path.clone(),
            source,
        })?;

    let length = data.len() as u64;
    if length > MAX_PDF_BYTES {
        return Err(ApiError::InvalidRequest(format!(
            "'{}' is {} bytes, larger than the {} byte limit",
            file.name, length, MAX_PDF_BYTES
        )));
    }

    let stream = ProgressStream::new(data, on_progress);
    let part = Part::stream_with_length(Body::wrap_stream(stream), length)
        .file_name(file.name.clone())
        .mime_str("application/pdf")
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    Ok(Form::new().part("file", part))
}

async fn read_body(endpoint: &str, timeout: Duration, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(endpoint, timeout, e))?;

    if !status.is_success() {
        if let Ok(body) = serde_json::from_str::<Value>(&text) {
            if body.get("error").is_some() {
                tracing::debug!(status = %status, "Structured error on non-success status");
                return Ok(body);
            }
        }
        tracing::error!(status = %status, endpoint = %endpoint, "Backend returned error status");
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }

    Ok(serde_json::from_str(&text)?)
}

fn transport_error(endpoint: &str, timeout: Duration, source: reqwest::Error) -> ApiError {
    if source.is_timeout() {
        ApiError::Timeout {
            endpoint: endpoint.to_string(),
            seconds: timeout.as_secs(),
        }
    } else {
        ApiError::Connection {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base_url: &str) -> SummaryClient {
        SummaryClient::new(BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = client_with_base("http://localhost:5000/");
        assert_eq!(
            client.endpoint(InputMode::Text),
            "http://localhost:5000/summarize/text"
        );
    }

    #[test]
    fn timeouts_follow_mode() {
        let client = client_with_base("http://localhost:5000");
        assert_eq!(client.timeout(InputMode::Text), Duration::from_secs(120));
        assert_eq!(client.timeout(InputMode::Pdf), Duration::from_secs(180));
        assert_eq!(client.timeout(InputMode::Youtube), Duration::from_secs(180));
    }

    #[tokio::test]
    async fn missing_pdf_is_a_file_error() {
        let client = client_with_base("http://localhost:5000");
        let request = SummaryRequest::Pdf(PdfFile {
            name: "gone.pdf".into(),
            path: "/definitely/not/here/gone.pdf".into(),
            size: 10,
        });
        match client.send(&request, None).await {
            Err(ApiError::File { path, .. }) => {
                assert!(path.ends_with("gone.pdf"));
            }
            other => panic!("Expected File error, got {:?}", other),
        }
    }
}

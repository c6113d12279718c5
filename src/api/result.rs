//! Response classification shared by the form and popup controllers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// One mood window returned when the backend runs sentiment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInterval {
    pub start: f64,
    pub end: f64,
    pub mood: String,
    #[serde(default)]
    pub score: f64,
}

/// Outcome of a single summarization request.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResult {
    /// Backend produced a non-empty summary.
    Success {
        summary: String,
        mood_intervals: Vec<MoodInterval>,
    },

    /// Backend replied with `{error, detail?}`.
    BackendError {
        error: String,
        detail: Option<String>,
    },

    /// Body decoded but carried neither `summary` nor `error`.
    Malformed,

    /// Network failure, timeout, bad status, or undecodable body.
    Unreachable { reason: String },
}

/// Visual marker prefixed to every status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    Success,
    Warning,
    Failure,
}

impl StatusMarker {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusMarker::Success => "✅",
            StatusMarker::Warning => "⚠️",
            StatusMarker::Failure => "❌",
        }
    }
}

impl SummaryResult {
    pub fn success(summary: impl Into<String>) -> Self {
        SummaryResult::Success {
            summary: summary.into(),
            mood_intervals: Vec::new(),
        }
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        SummaryResult::Unreachable {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success { .. })
    }

    /// The summary text, only for successful results.
    pub fn summary(&self) -> Option<&str> {
        match self {
            SummaryResult::Success { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn mood_intervals(&self) -> &[MoodInterval] {
        match self {
            SummaryResult::Success { mood_intervals, .. } => mood_intervals,
            _ => &[],
        }
    }

    pub fn marker(&self) -> StatusMarker {
        match self {
            SummaryResult::Success { .. } => StatusMarker::Success,
            SummaryResult::BackendError { .. } | SummaryResult::Malformed => StatusMarker::Warning,
            SummaryResult::Unreachable { .. } => StatusMarker::Failure,
        }
    }

    /// Status text without the marker glyph.
    pub fn status_text(&self) -> &str {
        match self {
            SummaryResult::Success { .. } => "Summary generated!",
            SummaryResult::BackendError { error, .. } => error,
            SummaryResult::Malformed => "Unknown response.",
            SummaryResult::Unreachable { .. } => "Error: Could not reach backend.",
        }
    }

    /// Full status line, e.g. `⚠️ bad input`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.marker().glyph(), self.status_text())
    }

    /// Text for the result region: the summary, or the error detail.
    pub fn output_text(&self) -> &str {
        match self {
            SummaryResult::Success { summary, .. } => summary,
            SummaryResult::BackendError { detail, .. } => detail.as_deref().unwrap_or(""),
            SummaryResult::Malformed | SummaryResult::Unreachable { .. } => "",
        }
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryResult::Success { .. } => "success",
            SummaryResult::BackendError { .. } => "backend_error",
            SummaryResult::Malformed => "malformed",
            SummaryResult::Unreachable { .. } => "unreachable",
        }
    }
}

/// Map a decoded backend body, or the transport failure that replaced it,
/// to a `SummaryResult`.
pub fn classify(outcome: Result<Value, ApiError>) -> SummaryResult {
    let body = match outcome {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(
                error = %err,
                error_type = err.error_type(),
                "Summarization backend unreachable"
            );
            return SummaryResult::unreachable(err.to_string());
        }
    };

    if let Some(summary) = body.get("summary").and_then(Value::as_str) {
        if !summary.is_empty() {
            let mood_intervals = body
                .get("mood_intervals")
                .cloned()
                .and_then(|v| serde_json::from_value::<Vec<MoodInterval>>(v).ok())
                .unwrap_or_default();
            return SummaryResult::Success {
                summary: summary.to_string(),
                mood_intervals,
            };
        }
    }

    if let Some(error) = body.get("error").filter(|v| is_truthy(v)) {
        let error = value_text(error);
        let detail = body
            .get("detail")
            .filter(|v| !v.is_null())
            .map(value_text);
        tracing::warn!(error = %error, detail = ?detail, "Backend returned structured error");
        return SummaryResult::BackendError { error, detail };
    }

    tracing::warn!(body = %body, "Backend response has neither summary nor error");
    SummaryResult::Malformed
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

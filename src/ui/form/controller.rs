//! Form controller: owns `FormState` and drives one summarize cycle.
//!
//! The TUI splits a cycle into `begin_summarize` / `settle` around a
//! spawned task; headless callers use `summarize`, which does both and
//! forwards upload progress into the state while the request runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{ProgressCallback, SummaryClient, SummaryRequest, SummaryResult};
use crate::clipboard::ClipboardSink;
use crate::ui::mvi::Reducer;

use super::file::inspect_pdf;
use super::intent::FormIntent;
use super::reducer::FormReducer;
use super::state::{FormState, Notice};

pub const COPIED_NOTICE: &str = "Summary copied to clipboard.";
pub const NOTHING_TO_COPY: &str = "No summary to copy yet.";

#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    analyze_mood: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request mood intervals on YouTube submissions.
    pub fn with_mood_analysis(mut self, enabled: bool) -> Self {
        self.analyze_mood = enabled;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Select a PDF. Oversized or unreadable files clear the selection and
    /// leave a warning.
    pub fn select_file(&mut self, path: &Path) -> bool {
        match inspect_pdf(path) {
            Ok(file) => {
                tracing::debug!(name = %file.name, size = file.size, "PDF selected");
                self.dispatch(FormIntent::FileSelected(file));
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "PDF rejected");
                self.dispatch(FormIntent::FileRejected {
                    reason: err.to_string(),
                });
                false
            }
        }
    }

    /// Validate and enter the requesting phase.
    ///
    /// Returns the request to send, or `None` when the trigger is disabled
    /// or the input is invalid (which leaves a warning).
    pub fn begin_summarize(&mut self) -> Option<SummaryRequest> {
        if self.state.is_loading() {
            return None;
        }
        let Some(request) = self.state.request(self.analyze_mood) else {
            tracing::debug!(mode = self.state.mode.as_str(), "Submit rejected: invalid input");
            self.dispatch(FormIntent::SubmitRejected);
            return None;
        };
        self.dispatch(FormIntent::Submit);
        Some(request)
    }

    pub fn report_progress(&mut self, pct: u8) {
        self.dispatch(FormIntent::Progress(pct));
    }

    pub fn settle(&mut self, result: SummaryResult) {
        self.dispatch(FormIntent::Settled(result));
    }

    /// Run a full summarize cycle against `client`.
    ///
    /// Returns `None` when nothing was sent. `observer`, if given, sees the
    /// same progress values the state does.
    pub async fn summarize(
        &mut self,
        client: &SummaryClient,
        observer: Option<ProgressCallback>,
    ) -> Option<SummaryResult> {
        let request = self.begin_summarize()?;

        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let callback: ProgressCallback = Arc::new(move |pct| {
            if let Some(observer) = &observer {
                observer(pct);
            }
            let _ = tx.send(pct);
        });

        let send = client.summarize(&request, Some(callback));
        tokio::pin!(send);

        let result = loop {
            tokio::select! {
                result = &mut send => break result,
                Some(pct) = rx.recv() => self.report_progress(pct),
            }
        };

        self.settle(result.clone());
        Some(result)
    }

    pub fn clear_all(&mut self) {
        self.dispatch(FormIntent::ClearAll);
    }

    /// Copy the current summary. Leaves a notice either way.
    pub fn copy_summary(&mut self, clipboard: &mut dyn ClipboardSink) -> bool {
        let Some(summary) = self.state.summary().map(str::to_owned) else {
            self.dispatch(FormIntent::Notify(Notice::Warning(NOTHING_TO_COPY.into())));
            return false;
        };

        match clipboard.set_text(&summary) {
            Ok(()) => {
                self.dispatch(FormIntent::Notify(Notice::Info(COPIED_NOTICE.into())));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.dispatch(FormIntent::Notify(Notice::Warning(err)));
                false
            }
        }
    }

    /// Write the current summary as UTF-8 text to `dir/file_name`.
    pub fn download_summary(&mut self, dir: &Path, file_name: &str) -> Option<PathBuf> {
        let Some(summary) = self.state.summary().map(str::to_owned) else {
            self.dispatch(FormIntent::Notify(Notice::Warning(
                "No summary to download yet.".into(),
            )));
            return None;
        };

        let path = dir.join(file_name);
        match std::fs::write(&path, summary.as_bytes()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Summary downloaded");
                self.dispatch(FormIntent::Notify(Notice::Info(format!(
                    "Saved to {}",
                    path.display()
                ))));
                Some(path)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Summary download failed");
                self.dispatch(FormIntent::Notify(Notice::Warning(format!(
                    "Could not save {}: {}",
                    path.display(),
                    err
                ))));
                None
            }
        }
    }
}

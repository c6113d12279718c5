use std::path::PathBuf;

use crate::api::{InputMode, SummaryRequest, SummaryResult};
use crate::clipboard::ClipboardSink;
use crate::config::OutputConfig;
use crate::ui::form::{FormController, FormIntent, FormState};

pub struct App {
    should_quit: bool,
    form: FormController,
    /// Path typed in PDF mode, not yet selected.
    pdf_path: String,
    clipboard: Box<dyn ClipboardSink>,
    output: OutputConfig,
    base_url: String,
    animation_tick: u8,
}

impl App {
    pub fn new(
        form: FormController,
        clipboard: Box<dyn ClipboardSink>,
        output: OutputConfig,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            form,
            pdf_path: String::new(),
            clipboard,
            output,
            base_url: base_url.into(),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        self.form.state()
    }

    pub fn mode(&self) -> InputMode {
        self.form.state().mode
    }

    pub fn pdf_path(&self) -> &str {
        &self.pdf_path
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.form.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn switch_mode(&mut self, mode: InputMode) {
        self.form.dispatch(FormIntent::SwitchMode(mode));
    }

    pub fn insert_char(&mut self, ch: char) {
        match self.mode() {
            InputMode::Pdf => self.pdf_path.push(ch),
            _ => self.form.dispatch(FormIntent::InsertChar(ch)),
        }
    }

    pub fn backspace(&mut self) {
        match self.mode() {
            InputMode::Pdf => {
                self.pdf_path.pop();
            }
            _ => self.form.dispatch(FormIntent::Backspace),
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.mode() {
            // Pasted paths often arrive quoted or with a trailing newline
            InputMode::Pdf => self
                .pdf_path
                .push_str(text.trim().trim_matches(|c| c == '\'' || c == '"')),
            _ => self.form.dispatch(FormIntent::InsertStr(text.to_string())),
        }
    }

    /// Select the typed PDF path.
    pub fn select_typed_file(&mut self) -> bool {
        let path = self.pdf_path.trim();
        if path.is_empty() {
            return false;
        }
        let path = PathBuf::from(path);
        self.form.select_file(&path)
    }

    pub fn remove_file(&mut self) {
        self.form.dispatch(FormIntent::RemoveFile);
    }

    /// Start a summarize cycle; returns the request for the caller to send.
    pub fn submit(&mut self) -> Option<SummaryRequest> {
        let request = self.form.begin_summarize();
        if request.is_some() {
            self.animation_tick = 0;
        }
        request
    }

    pub fn on_progress(&mut self, pct: u8) {
        self.form.report_progress(pct);
    }

    pub fn on_settled(&mut self, result: SummaryResult) {
        self.form.settle(result);
    }

    pub fn clear_all(&mut self) {
        self.pdf_path.clear();
        self.form.clear_all();
    }

    pub fn copy_summary(&mut self) -> bool {
        self.form.copy_summary(self.clipboard.as_mut())
    }

    pub fn download_summary(&mut self) -> Option<PathBuf> {
        let dir = self.output.resolved_download_dir();
        self.form.download_summary(&dir, &self.output.file_name)
    }

    pub fn dismiss_notice(&mut self) {
        self.form.dispatch(FormIntent::DismissNotice);
    }
}

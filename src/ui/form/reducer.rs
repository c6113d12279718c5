//! Reducer for the summarization form.

use crate::api::InputMode;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, Notice, RequestPhase};

pub const INVALID_INPUT_WARNING: &str = "Please provide valid input for the selected mode.";

/// Reducer for form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SwitchMode(mode) => {
                state.mode = mode;
                state
            }

            FormIntent::InsertChar(ch) => {
                if let Some(buffer) = active_buffer(&mut state) {
                    buffer.push(ch);
                }
                state
            }

            FormIntent::InsertStr(text) => {
                if let Some(buffer) = active_buffer(&mut state) {
                    buffer.push_str(&text);
                }
                state
            }

            FormIntent::Backspace => {
                if let Some(buffer) = active_buffer(&mut state) {
                    buffer.pop();
                }
                state
            }

            FormIntent::SetText(text) => {
                state.text = text;
                state
            }

            FormIntent::SetYoutubeUrl(url) => {
                state.youtube_url = url;
                state
            }

            FormIntent::FileSelected(file) => {
                state.file = Some(file);
                state.notice = None;
                state
            }

            FormIntent::FileRejected { reason } => {
                state.file = None;
                state.notice = Some(Notice::Warning(reason));
                state
            }

            FormIntent::RemoveFile => {
                state.file = None;
                state
            }

            FormIntent::SubmitRejected => {
                state.notice = Some(Notice::Warning(INVALID_INPUT_WARNING.to_string()));
                state
            }

            FormIntent::Submit => {
                // Trigger is disabled while loading.
                if state.is_loading() {
                    return state;
                }
                state.phase = RequestPhase::Requesting;
                state.result = None;
                state.progress = 0;
                state.notice = None;
                state
            }

            FormIntent::Progress(pct) => {
                if state.is_loading() {
                    state.progress = pct.min(100);
                }
                state
            }

            FormIntent::Settled(result) => {
                state.phase = RequestPhase::Settled;
                state.progress = 0;
                state.result = Some(result);
                state
            }

            FormIntent::Notify(notice) => {
                state.notice = Some(notice);
                state
            }

            FormIntent::DismissNotice => {
                state.notice = None;
                state
            }

            FormIntent::ClearAll => FormState {
                mode: state.mode,
                // An outstanding request still settles later.
                phase: if state.is_loading() {
                    RequestPhase::Requesting
                } else {
                    RequestPhase::Idle
                },
                ..FormState::default()
            },
        }
    }
}

/// Editable text buffer for the active mode. PDF mode has none.
fn active_buffer(state: &mut FormState) -> Option<&mut String> {
    match state.mode {
        InputMode::Text => Some(&mut state.text),
        InputMode::Youtube => Some(&mut state.youtube_url),
        InputMode::Pdf => None,
    }
}

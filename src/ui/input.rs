use crate::api::{InputMode, SummaryRequest};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Send this request in the background.
    Submit(SummaryRequest),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let KeyCode::Char(ch) = key.code else {
            return InputAction::None;
        };
        match ch.to_ascii_lowercase() {
            'q' => app.request_quit(),
            't' => app.switch_mode(InputMode::Text),
            'p' => app.switch_mode(InputMode::Pdf),
            'y' => app.switch_mode(InputMode::Youtube),
            's' => {
                if let Some(request) = app.submit() {
                    return InputAction::Submit(request);
                }
            }
            'l' => app.clear_all(),
            'o' => {
                app.copy_summary();
            }
            'd' => {
                app.download_summary();
            }
            'r' => app.remove_file(),
            _ => {}
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => app.dismiss_notice(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => match app.mode() {
            InputMode::Text => app.insert_char('\n'),
            InputMode::Pdf => {
                app.select_typed_file();
            }
            InputMode::Youtube => {}
        },
        KeyCode::Char(ch) => app.insert_char(ch),
        _ => {}
    }
    InputAction::None
}

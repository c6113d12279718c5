use crate::api::InputMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    mode: InputMode,
}

impl Footer {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            InputMode::Pdf => " ^T/^P/^Y: Mode │ Enter: Select │ ^R: Remove │ ^S: Summarize │ ^O: Copy │ ^D: Download │ ^L: Clear │ ^Q: Quit",
            _ => " ^T/^P/^Y: Mode │ ^S: Summarize │ ^O: Copy │ ^D: Download │ ^L: Clear │ Esc: Dismiss │ ^Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

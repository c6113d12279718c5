use crate::api::InputMode;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Mode tabs plus the backend the form talks to.
pub struct Header<'a> {
    active: InputMode,
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(active: InputMode, base_url: &'a str) -> Self {
        Self { active, base_url }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, mode) in InputMode::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if *mode == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(self.base_url.to_string(), separator_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

use crate::api::{InputMode, MoodInterval, StatusMarker, SummaryResult};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{FormState, Notice};
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, HEADER_SEPARATOR, HEADER_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CURSOR: &str = "█";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.form();

    frame.render_widget(Header::new(state.mode, app.base_url()).widget(), header);
    frame.render_widget(Clear, body);

    let input_height = match state.mode {
        InputMode::Text => body.height / 2,
        InputMode::Pdf => 4,
        InputMode::Youtube => 3,
    };
    let (input_area, status_area, summary_area) = body_regions(body, input_height);

    frame.render_widget(input_widget(app), input_area);

    let (status, color) = status_line(state, app.animation_tick());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(color),
        ))),
        status_area,
    );

    frame.render_widget(summary_widget(state), summary_area);
    frame.render_widget(Footer::new(state.mode).widget(footer), footer);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn input_widget(app: &App) -> Paragraph<'static> {
    let state = app.form();
    let text_style = Style::default().fg(HEADER_TEXT);
    let hint_style = Style::default().fg(HEADER_SEPARATOR);

    match state.mode {
        InputMode::Text => {
            let mut lines: Vec<Line> = state
                .text
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), text_style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(CURSOR, hint_style));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(panel("Text to summarize"))
        }
        InputMode::Pdf => {
            let file_line = match &state.file {
                Some(file) => Line::from(vec![
                    Span::styled("Selected: ", hint_style),
                    Span::styled(file_info(&file.name, file.size_kb()), text_style),
                ]),
                None => Line::from(Span::styled("No file selected", hint_style)),
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled("Path: ", hint_style),
                    Span::styled(app.pdf_path().to_string(), text_style),
                    Span::styled(CURSOR, hint_style),
                ]),
                file_line,
            ];
            Paragraph::new(lines).block(panel("PDF"))
        }
        InputMode::Youtube => Paragraph::new(Line::from(vec![
            Span::styled("URL: ", hint_style),
            Span::styled(state.youtube_url.clone(), text_style),
            Span::styled(CURSOR, hint_style),
        ]))
        .block(panel("YouTube")),
    }
}

/// `name (N KB)` label for a selected PDF.
pub fn file_info(name: &str, size_kb: u64) -> String {
    format!("{} ({} KB)", name, size_kb)
}

/// Text and colour of the single status line under the input.
///
/// In-flight requests win over notices, notices over the last result.
pub fn status_line(state: &FormState, animation_tick: u8) -> (String, Color) {
    if state.is_loading() {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        let text = if state.progress > 0 {
            format!("{} Uploading: {}%", spinner, state.progress)
        } else {
            format!("{} Summarizing... (please wait)", spinner)
        };
        return (text, STATUS_OK);
    }

    if let Some(notice) = &state.notice {
        return match notice {
            Notice::Info(message) => (message.clone(), STATUS_OK),
            Notice::Warning(message) => (
                format!("{} {}", StatusMarker::Warning.glyph(), message),
                STATUS_WARN,
            ),
        };
    }

    match &state.result {
        Some(result) => (result.status_line(), marker_color(result.marker())),
        None => ("Ready".to_string(), HEADER_SEPARATOR),
    }
}

fn marker_color(marker: StatusMarker) -> Color {
    match marker {
        StatusMarker::Success => STATUS_OK,
        StatusMarker::Warning => STATUS_WARN,
        StatusMarker::Failure => STATUS_ERROR,
    }
}

fn summary_widget(state: &FormState) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines: Vec<Line> = Vec::new();

    if let Some(result) = &state.result {
        lines.extend(
            result
                .output_text()
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), text_style))),
        );
        if let SummaryResult::Success { mood_intervals, .. } = result {
            if !mood_intervals.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Mood",
                    Style::default().fg(ACCENT),
                )));
                lines.extend(mood_intervals.iter().map(mood_line));
            }
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Summary"))
}

fn mood_line(interval: &MoodInterval) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:>7.1}s - {:>7.1}s  ", interval.start, interval.end),
            Style::default().fg(HEADER_SEPARATOR),
        ),
        Span::styled(
            format!("{} ({:.2})", interval.mood, interval.score),
            Style::default().fg(HEADER_TEXT),
        ),
    ])
}

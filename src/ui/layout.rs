use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into input area, status line and summary panel.
pub fn body_regions(body: Rect, input_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area_without_overlap() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn body_split_keeps_status_line() {
        let (input, status, summary) = body_regions(Rect::new(0, 3, 80, 18), 6);
        assert_eq!(input.height, 6);
        assert_eq!(status.height, 1);
        assert_eq!(summary.height, 11);
    }
}

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct StudyLayout {
    pub header_area: Rect,
    pub feedback_area: Rect,
    pub card_area: Rect,
    pub progress_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    StudyLayout {
        header_area: chunks[0],
        feedback_area: chunks[1],
        card_area: chunks[2],
        progress_area: chunks[3],
        help_area: chunks[4],
    }
}

/// A centered rectangle for overlays, sized as a percentage of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_study_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.feedback_area.height, 1);
        assert_eq!(layout.progress_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        // margin 1 leaves 38 rows, 11 of them fixed
        assert_eq!(layout.card_area.height, 27);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 50, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 25);
        assert!(rect.x >= 19 && rect.x <= 21);
    }
}

use crate::app::App;
use crate::ui::layout::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn draw_upload(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let input_width = chunks[0].width.saturating_sub(2) as usize;
    let before_cursor: String = app.input_buffer.chars().take(app.cursor_position).collect();
    let cursor_col = before_cursor.width();
    let scroll_x = cursor_col.saturating_sub(input_width.saturating_sub(1));

    let content = if app.input_buffer.is_empty() {
        Line::from(Span::styled(
            "[Path to a .csv file...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input_buffer.as_str())
    };
    let input = Paragraph::new(content)
        .scroll((0, scroll_x as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Upload CSV"),
        );
    f.render_widget(input, chunks[0]);
    f.set_cursor_position((
        chunks[0].x + 1 + (cursor_col - scroll_x) as u16,
        chunks[0].y + 1,
    ));

    let status = match &app.upload_error {
        Some(error) => Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new("Two columns per row: question,answer. No header row.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(
        status
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Load  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Cancel"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

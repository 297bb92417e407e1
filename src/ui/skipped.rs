use crate::app::App;
use crate::ui::layout::centered_rect;
use crate::utils::{first_line, truncate_string};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn draw_skipped(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let skipped = app.session.skipped_in_display_order();
    let cards = app.active().map(|set| set.cards.as_slice()).unwrap_or(&[]);
    let text_width = (chunks[0].width as usize).saturating_sub(10);

    let items: Vec<ListItem> = if skipped.is_empty() {
        vec![ListItem::new("No skipped cards").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        skipped
            .iter()
            .enumerate()
            .filter_map(|(i, &index)| {
                let card = cards.get(index)?;
                let style = if i == app.skipped_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let text = format!(
                    "{}. {}",
                    index + 1,
                    truncate_string(first_line(&card.question), text_width)
                );
                Some(ListItem::new(text).style(style))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!("Skipped ({})", skipped.len())),
    );
    f.render_widget(list, chunks[0]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Jump  "),
        Span::styled(
            "c",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Clear all  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Close"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

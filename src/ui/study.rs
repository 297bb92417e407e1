use crate::app::App;
use crate::ui::layout::calculate_study_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_study(f: &mut Frame, app: &App) {
    let layout = calculate_study_chunks(f.area());

    let title = match app.active() {
        Some(set) => set.name.to_uppercase(),
        None => "NO SET SELECTED".to_string(),
    };
    let shuffle = if app.session.is_shuffled() {
        "  [shuffle]"
    } else {
        ""
    };
    let header = Paragraph::new(format!("{}{}", title, shuffle))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    if let Some((label, _)) = app.feedback {
        let feedback = Paragraph::new(label)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(feedback, layout.feedback_area);
    }

    let Some(card) = app.current_card() else {
        draw_empty(f, layout.card_area);
        return;
    };

    let skipped = app.session.is_current_skipped();
    let (side, body, color) = if app.session.is_flipped() {
        ("Answer", card.answer.as_str(), Color::Green)
    } else {
        ("Question", card.question.as_str(), Color::White)
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    for line in body.lines() {
        text.push_line(Line::from(Span::styled(
            line,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    if !app.session.is_flipped() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "See answer",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut title = side.to_string();
    if skipped {
        title.push_str(" [skipped]");
    }
    let border = if skipped {
        Style::default().fg(Color::Yellow)
    } else if app.session.is_flipped() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let card_widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        );
    f.render_widget(card_widget, layout.card_area);

    let total = app.session.len();
    let position = app.session.cursor() + 1;
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Indexed(62)))
        .ratio(position as f64 / total as f64)
        .label(format!("{} / {}", position, total));
    f.render_widget(progress, layout.progress_area);

    let help_text = vec![
        Line::from(vec![
            key_span("Space"),
            Span::from(" Flip  "),
            key_span("←/→"),
            Span::from(" Navigate  "),
            key_span("s"),
            Span::from(" Skip  "),
            key_span("r"),
            Span::from(" Restart  "),
            key_span("x"),
            Span::from(" Shuffle"),
        ]),
        Line::from(vec![
            key_span("m"),
            Span::from(" Sets  "),
            key_span("k"),
            Span::from(format!(" Skipped ({})  ", app.session.skipped().len())),
            key_span("u"),
            Span::from(" Upload  "),
            key_span("q"),
            Span::from(" Quit"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_empty(f: &mut Frame, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let text = Text::from(vec![
        Line::from(""),
        Line::from("No flashcards found."),
        Line::from(""),
        Line::from(vec![
            Span::from("Press "),
            key_span("m"),
            Span::from(" to open the menu or "),
            key_span("u"),
            Span::from(" to upload a CSV"),
        ]),
    ]);
    let message = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[0]);

    let help = Paragraph::new(Line::from(vec![key_span("q"), Span::from(" Quit")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

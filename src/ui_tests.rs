#[cfg(test)]
mod ui_render_tests {
    use crate::app::App;
    use crate::config::StudyConfig;
    use crate::models::{AppState, CsvSource};
    use crate::session::Intent;
    use crate::ui::draw;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn create_test_app(content: &str) -> App {
        let config = StudyConfig {
            flip_delay: Duration::ZERO,
            ..StudyConfig::default()
        };
        let mut app = App::with_rng(&config, StdRng::seed_from_u64(11));
        app.add_sources(vec![CsvSource {
            name: "geography".to_string(),
            content: content.to_string(),
        }]);
        app
    }

    /// Render and flatten the screen into one string per row.
    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_question_face_up() {
        let app = create_test_app("What is the capital of France?,Paris\nCapital of Peru?,Lima\n");
        let screen = render(&app);
        assert!(screen.contains("GEOGRAPHY"));
        assert!(screen.contains("What is the capital of France?"));
        assert!(!screen.contains("Paris"));
        assert!(screen.contains("1 / 2"));
    }

    #[test]
    fn test_answer_after_flip() {
        let mut app = create_test_app("What is 2+2?,4\nWhat is the capital of France?,Paris\n");
        app.dispatch(Intent::Flip, Instant::now());
        let screen = render(&app);
        assert!(screen.contains("Answer"));
        assert!(!screen.contains("What is 2+2?"));
    }

    #[test]
    fn test_progress_follows_cursor() {
        let mut app = create_test_app("Q1,A1\nQ2,A2\nQ3,A3\n");
        app.dispatch(Intent::Next, Instant::now());
        app.dispatch(Intent::Next, Instant::now());
        let screen = render(&app);
        assert!(screen.contains("3 / 3"));
        assert!(screen.contains("Q3"));
    }

    #[test]
    fn test_skipped_card_is_marked() {
        let mut app = create_test_app("Q1,A1\nQ2,A2\n");
        app.dispatch(Intent::Skip, Instant::now());
        app.dispatch(Intent::Previous, Instant::now());
        let screen = render(&app);
        assert!(screen.contains("[skipped]"));
        assert!(screen.contains("Skipped (1)"));
    }

    #[test]
    fn test_empty_state() {
        let config = StudyConfig::default();
        let app = App::with_rng(&config, StdRng::seed_from_u64(0));
        let screen = render(&app);
        assert!(screen.contains("NO SET SELECTED"));
        assert!(screen.contains("No flashcards found."));
    }

    #[test]
    fn test_menu_lists_sets_with_counts() {
        let mut app = create_test_app("Q1,A1\nQ2,A2\n");
        app.add_sources(vec![CsvSource {
            name: "history".to_string(),
            content: "When?,1066\n".to_string(),
        }]);
        app.state = AppState::Menu;
        let screen = render(&app);
        assert!(screen.contains("Your Sets"));
        assert!(screen.contains("geography  (2)"));
        assert!(screen.contains("history  (1)"));
    }

    #[test]
    fn test_skipped_panel_lists_questions() {
        let mut app = create_test_app("First question,A1\nSecond question,A2\nThird question,A3\n");
        app.dispatch(Intent::Next, Instant::now());
        app.dispatch(Intent::Skip, Instant::now());
        app.state = AppState::Skipped;
        let screen = render(&app);
        assert!(screen.contains("2. Second question"));
        assert!(!screen.contains("1. First question"));
    }

    #[test]
    fn test_upload_prompt_shows_error() {
        let mut app = create_test_app("Q1,A1\n");
        app.state = AppState::Upload;
        app.upload_error = Some("empty contains no valid cards".to_string());
        let screen = render(&app);
        assert!(screen.contains("Upload CSV"));
        assert!(screen.contains("empty contains no valid cards"));
    }

    #[test]
    fn test_feedback_label_rendered() {
        let mut app = create_test_app("Q1,A1\nQ2,A2\n");
        app.dispatch(Intent::Next, Instant::now());
        let screen = render(&app);
        assert!(screen.contains("Next"));
    }
}

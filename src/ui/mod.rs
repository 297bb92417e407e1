pub mod layout;
mod menu;
mod skipped;
mod study;
mod upload;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub use layout::{calculate_study_chunks, centered_rect};
pub use menu::draw_set_menu;
pub use skipped::draw_skipped;
pub use study::draw_study;
pub use upload::draw_upload;

/// Draw the study view with the overlay for the current state on top.
pub fn draw(f: &mut Frame, app: &App) {
    draw_study(f, app);
    match app.state {
        AppState::Study => {}
        AppState::Menu => draw_set_menu(f, app),
        AppState::Upload => draw_upload(f, app),
        AppState::Skipped => draw_skipped(f, app),
    }
}

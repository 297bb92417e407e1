pub mod app;
pub mod config;
pub mod csv;
pub mod error;
pub mod loader;
pub mod logger;
pub mod models;
pub mod server;
pub mod session;
pub mod source;
pub mod ui;
pub mod utils;

mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use config::{Cli, Command, StudyConfig};
pub use csv::parse_cards;
pub use error::SourceError;
pub use models::{AppState, Card, CsvSource, FlashcardSet};
pub use session::{Intent, StudySession, shuffle, transition};
pub use source::{list_sources, read_upload};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct FlashcardSet {
    pub id: String,
    pub name: String,
    pub cards: Vec<Card>,
}

/// A named blob of raw CSV text, as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvSource {
    pub name: String,
    pub content: String,
}

/// A single user-selected file, read whole.
#[derive(Debug, Clone)]
pub struct Upload {
    pub id: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Study,
    Menu,
    Upload,
    Skipped,
}

impl FlashcardSet {
    /// Directory sets are keyed by their file stem.
    pub fn from_source(source: &CsvSource) -> Self {
        Self {
            id: source.name.clone(),
            name: source.name.clone(),
            cards: crate::csv::parse_cards(&source.content),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

use crate::config::{FEEDBACK_DURATION, StudyConfig};
use crate::csv::parse_cards;
use crate::error::SourceError;
use crate::models::{AppState, Card, CsvSource, FlashcardSet};
use crate::session::{Intent, StudySession};
use crate::source::read_upload;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::{Duration, Instant};

/// A cursor move waiting for the flip-back animation to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub target: usize,
    pub due: Instant,
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub sets: Vec<FlashcardSet>,
    pub active_set: Option<usize>,
    pub session: StudySession,
    pub menu_selected: usize,
    pub skipped_selected: usize,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub upload_error: Option<String>,
    /// View to return to when the upload prompt is cancelled.
    pub upload_return: AppState,
    pub feedback: Option<(&'static str, Instant)>,
    pub pending: Option<PendingMove>,
    pub flip_delay: Duration,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(config: &StudyConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &StudyConfig, mut rng: StdRng) -> Self {
        let session = StudySession::new(0, config.shuffle, &mut rng);
        Self {
            state: AppState::Study,
            sets: Vec::new(),
            active_set: None,
            session,
            menu_selected: 0,
            skipped_selected: 0,
            input_buffer: String::new(),
            cursor_position: 0,
            upload_error: None,
            upload_return: AppState::Study,
            feedback: None,
            pending: None,
            flip_delay: config.flip_delay,
            should_quit: false,
            rng,
        }
    }

    pub fn active(&self) -> Option<&FlashcardSet> {
        self.active_set.and_then(|i| self.sets.get(i))
    }

    pub fn current_card(&self) -> Option<&Card> {
        let set = self.active()?;
        set.cards.get(self.session.current()?)
    }

    /// Add sets found by the startup load. The first one becomes active if
    /// nothing is selected yet.
    pub fn add_sources(&mut self, sources: Vec<CsvSource>) {
        for source in &sources {
            let set = FlashcardSet::from_source(source);
            tracing::debug!("loaded set '{}' with {} cards", set.name, set.len());
            self.sets.push(set);
        }
        if self.active_set.is_none() && !self.sets.is_empty() {
            self.select_set(0);
        }
    }

    pub fn select_set(&mut self, index: usize) {
        let Some(set) = self.sets.get(index) else {
            return;
        };
        let count = set.len();
        tracing::info!("selected set '{}'", set.name);
        self.active_set = Some(index);
        self.pending = None;
        self.feedback = None;
        self.skipped_selected = 0;
        self.session.load(count, &mut self.rng);
    }

    /// Read, parse and activate a user-selected CSV file.
    ///
    /// A file that yields no cards is rejected and leaves the current set
    /// active.
    pub fn upload(&mut self, path: &Path) -> Result<(), SourceError> {
        let upload = read_upload(path)?;
        let cards = parse_cards(&upload.content);
        if cards.is_empty() {
            return Err(SourceError::Empty { name: upload.name });
        }

        let id = self.unique_id(upload.id);
        tracing::info!("uploaded set '{}' with {} cards", upload.name, cards.len());
        self.sets.push(FlashcardSet {
            id,
            name: upload.name,
            cards,
        });
        self.select_set(self.sets.len() - 1);
        Ok(())
    }

    /// `base` if unused, otherwise the first free `base-n`.
    fn unique_id(&self, base: String) -> String {
        let taken = |id: &str| self.sets.iter().any(|s| s.id == id);
        if !taken(base.as_str()) {
            return base;
        }
        let mut n = 1;
        loop {
            let id = format!("{}-{}", base, n);
            if !taken(id.as_str()) {
                return id;
            }
            n += 1;
        }
    }

    /// Apply an intent to the session. Any move still waiting is committed
    /// first.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) {
        self.settle_pending();

        if self.active_set.is_none() {
            return;
        }

        let target = self.session.apply(intent, &mut self.rng);
        match feedback_label(intent, &self.session, target.is_some()) {
            Some(label) => self.feedback = Some((label, now + FEEDBACK_DURATION)),
            None if intent == Intent::Restart => self.feedback = None,
            None => {}
        }

        if let Some(target) = target {
            if self.flip_delay.is_zero() {
                self.session.settle(target);
            } else {
                self.pending = Some(PendingMove {
                    target,
                    due: now + self.flip_delay,
                });
            }
        }
    }

    fn settle_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.session.settle(pending.target);
        }
    }

    /// Advance timers: commit a due cursor move and expire feedback.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.is_some_and(|p| p.due <= now) {
            self.settle_pending();
        }
        if self.feedback.is_some_and(|(_, until)| until <= now) {
            self.feedback = None;
        }
    }

    /// Time until the next timer fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        let pending = self.pending.map(|p| p.due);
        let feedback = self.feedback.map(|(_, until)| until);
        match (pending, feedback) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Study => self.handle_study_key(key, now),
            AppState::Menu => self.handle_menu_key(key),
            AppState::Upload => self.handle_upload_key(key),
            AppState::Skipped => self.handle_skipped_key(key, now),
        }
    }

    fn handle_study_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => self.dispatch(Intent::Flip, now),
            KeyCode::Right => self.dispatch(Intent::Next, now),
            KeyCode::Left => self.dispatch(Intent::Previous, now),
            KeyCode::Char('s') => self.dispatch(Intent::Skip, now),
            KeyCode::Char('r') => self.dispatch(Intent::Restart, now),
            KeyCode::Char('x') => self.dispatch(Intent::ToggleShuffle, now),
            KeyCode::Char('m') => {
                self.menu_selected = self.active_set.unwrap_or(0);
                self.state = AppState::Menu;
            }
            KeyCode::Char('k') => {
                self.skipped_selected = 0;
                self.state = AppState::Skipped;
            }
            KeyCode::Char('u') => self.open_upload(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.menu_selected = self.menu_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.menu_selected < self.sets.len().saturating_sub(1) {
                    self.menu_selected += 1;
                }
            }
            KeyCode::Enter => {
                if self.menu_selected < self.sets.len() {
                    self.select_set(self.menu_selected);
                    self.state = AppState::Study;
                }
            }
            KeyCode::Char('u') => self.open_upload(),
            KeyCode::Esc | KeyCode::Char('m') => self.state = AppState::Study,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn open_upload(&mut self) {
        self.upload_return = self.state;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.upload_error = None;
        self.state = AppState::Upload;
    }

    fn handle_upload_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.upload_error = None;
                self.state = self.upload_return;
            }
            KeyCode::Enter => {
                let path = self.input_buffer.trim().to_string();
                if path.is_empty() {
                    return;
                }
                match self.upload(Path::new(&path)) {
                    Ok(()) => {
                        self.input_buffer.clear();
                        self.cursor_position = 0;
                        self.upload_error = None;
                        self.state = AppState::Study;
                    }
                    Err(e) => {
                        tracing::warn!("upload failed: {}", e);
                        self.upload_error = Some(e.to_string());
                    }
                }
            }
            KeyCode::Char(c) => {
                let byte_pos = byte_offset(&self.input_buffer, self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = byte_offset(&self.input_buffer, self.cursor_position);
                    self.input_buffer.remove(byte_pos);
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_skipped_key(&mut self, key: KeyEvent, now: Instant) {
        let skipped = self.session.skipped_in_display_order();
        match key.code {
            KeyCode::Up => {
                self.skipped_selected = self.skipped_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.skipped_selected < skipped.len().saturating_sub(1) {
                    self.skipped_selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(&index) = skipped.get(self.skipped_selected) {
                    self.dispatch(Intent::JumpToSkipped(index), now);
                    self.state = AppState::Study;
                }
            }
            KeyCode::Char('c') => {
                self.dispatch(Intent::ClearSkipped, now);
                self.skipped_selected = 0;
            }
            KeyCode::Esc | KeyCode::Char('k') => self.state = AppState::Study,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

fn feedback_label(intent: Intent, session: &StudySession, moved: bool) -> Option<&'static str> {
    match intent {
        Intent::Next if moved => Some("Next"),
        Intent::Previous if moved => Some("Previous"),
        Intent::Skip if !session.skipped().is_empty() => Some("Skipped"),
        Intent::ToggleShuffle if session.is_shuffled() => Some("Shuffle on"),
        Intent::ToggleShuffle => Some("Shuffle off"),
        _ => None,
    }
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// A user intent that changes study state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Flip,
    Next,
    Previous,
    Restart,
    Skip,
    ToggleShuffle,
    /// Jump to a skipped card by its original index.
    JumpToSkipped(usize),
    ClearSkipped,
}

/// A uniformly random permutation of `0..n`.
pub fn shuffle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Study state for the active set.
///
/// `display_order` maps display position to original card index and
/// `skipped` holds original indices, so skips survive a reshuffle of the
/// same set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    display_order: Vec<usize>,
    cursor: usize,
    flipped: bool,
    skipped: BTreeSet<usize>,
    shuffle: bool,
}

impl StudySession {
    pub fn new<R: Rng + ?Sized>(card_count: usize, shuffle_on: bool, rng: &mut R) -> Self {
        let display_order = if shuffle_on {
            shuffle(card_count, rng)
        } else {
            identity(card_count)
        };
        Self {
            display_order,
            cursor: 0,
            flipped: false,
            skipped: BTreeSet::new(),
            shuffle: shuffle_on,
        }
    }

    /// Start over on a (possibly different) set, keeping the shuffle mode.
    pub fn load<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        *self = Self::new(card_count, self.shuffle, rng);
    }

    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.display_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display_order.is_empty()
    }

    /// Original index of the card under the cursor.
    pub fn current(&self) -> Option<usize> {
        self.display_order.get(self.cursor).copied()
    }

    pub fn is_current_skipped(&self) -> bool {
        self.current().is_some_and(|i| self.skipped.contains(&i))
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.display_order.len()
    }

    /// Skipped original indices in the order they appear while studying.
    pub fn skipped_in_display_order(&self) -> Vec<usize> {
        self.display_order
            .iter()
            .copied()
            .filter(|i| self.skipped.contains(i))
            .collect()
    }

    /// Apply an intent.
    ///
    /// Cursor moves that follow a flip-back are deferred: the target position
    /// is returned and the caller passes it to [`settle`](Self::settle) once
    /// the flip animation has had time to play.
    pub fn apply<R: Rng + ?Sized>(&mut self, intent: Intent, rng: &mut R) -> Option<usize> {
        match intent {
            Intent::Flip => {
                if self.current().is_some() {
                    self.flipped = !self.flipped;
                }
                None
            }
            Intent::Next => {
                if self.is_empty() || self.is_at_end() {
                    return None;
                }
                self.flipped = false;
                Some(self.cursor + 1)
            }
            Intent::Previous => {
                if self.cursor == 0 {
                    return None;
                }
                self.flipped = false;
                Some(self.cursor - 1)
            }
            Intent::Restart => {
                self.flipped = false;
                if self.shuffle {
                    self.display_order = shuffle(self.display_order.len(), rng);
                }
                Some(0)
            }
            Intent::Skip => {
                let index = self.current()?;
                self.skipped.insert(index);
                self.flipped = false;
                if self.is_at_end() {
                    None
                } else {
                    Some(self.cursor + 1)
                }
            }
            Intent::ToggleShuffle => {
                let count = self.display_order.len();
                *self = Self::new(count, !self.shuffle, rng);
                None
            }
            Intent::JumpToSkipped(index) => {
                if !self.skipped.contains(&index) {
                    return None;
                }
                self.flipped = false;
                self.cursor = self
                    .display_order
                    .iter()
                    .position(|&i| i == index)
                    .unwrap_or(0);
                None
            }
            Intent::ClearSkipped => {
                self.skipped.clear();
                None
            }
        }
    }

    /// Commit a deferred cursor move, clamped to the current order.
    pub fn settle(&mut self, target: usize) {
        self.cursor = target.min(self.display_order.len().saturating_sub(1));
    }
}

/// Apply an intent and settle any deferred move immediately.
pub fn transition<R: Rng + ?Sized>(
    mut session: StudySession,
    intent: Intent,
    rng: &mut R,
) -> StudySession {
    if let Some(target) = session.apply(intent, rng) {
        session.settle(target);
    }
    session
}

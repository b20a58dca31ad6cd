//! The pairing engine: turns two independently-arriving headline batches
//! into a sequence of guess-rounds and scores the responses.
//!
//! The engine performs no I/O and has no failure modes of its own; empty or
//! short batches simply exhaust earlier. Batch arrival and guess submission
//! are its only inputs, both through `&mut self`.

use rand::Rng;

use crate::model::{BatchKind, CurrentPair, GameSettings, HeadlineItem, Side};
use crate::score::ScoreState;
use crate::traits::RawHeadline;

/// Lifecycle of one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first arrival of each batch kind. Guesses are
    /// ignored here.
    AwaitingBatches,
    /// A pair is on display and guesses are scored.
    Ready,
    /// A batch ran out. Terminal; guesses are ignored again.
    Exhausted,
}

/// Outcome of a pair advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A new pair is on display.
    Next(CurrentPair),
    /// The headline supply is depleted. The previous pair is left on
    /// display; the caller is expected to leave the screen.
    Exhausted,
}

/// Outcome of a scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Whether the picked side held the fake headline.
    pub correct: bool,
    /// Score after this guess.
    pub score: ScoreState,
    /// Accuracy display after this guess, two decimal places.
    pub percentage_display: String,
}

/// Source of the uniform fake-side draw. Injected so tests can script the
/// sequence of sides.
pub trait SidePicker: Send {
    fn pick(&mut self) -> Side;
}

/// Uniform 50/50 draw from the thread-local generator.
#[derive(Debug, Default)]
pub struct UniformSidePicker;

impl SidePicker for UniformSidePicker {
    fn pick(&mut self) -> Side {
        if rand::rng().random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// The pairing engine. Construct one per game session.
pub struct PairingEngine {
    settings: GameSettings,
    real_batch: Vec<HeadlineItem>,
    fake_batch: Vec<HeadlineItem>,
    // Each cursor is the index of the next not-yet-shown item in its batch.
    real_cursor: usize,
    fake_cursor: usize,
    real_seen: bool,
    fake_seen: bool,
    phase: Phase,
    current: Option<CurrentPair>,
    score: ScoreState,
    picker: Box<dyn SidePicker>,
}

impl PairingEngine {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_picker(settings, Box::new(UniformSidePicker))
    }

    pub fn with_picker(settings: GameSettings, picker: Box<dyn SidePicker>) -> Self {
        Self {
            settings,
            real_batch: Vec::new(),
            fake_batch: Vec::new(),
            real_cursor: 0,
            fake_cursor: 0,
            real_seen: false,
            fake_seen: false,
            phase: Phase::AwaitingBatches,
            current: None,
            score: ScoreState::new(),
            picker,
        }
    }

    /// Record the arrival of one batch of headlines.
    ///
    /// Titles are normalized and appended in feed order; existing items are
    /// never replaced or reordered. The first time both kinds have arrived,
    /// the engine becomes ready and advances to the first pair. Later
    /// arrivals (additional pages) only grow the batches.
    pub fn on_batch_arrived(&mut self, kind: BatchKind, items: Vec<RawHeadline>) {
        let appended = items.len();
        let batch = match kind {
            BatchKind::Real => &mut self.real_batch,
            BatchKind::Fake => &mut self.fake_batch,
        };
        batch.extend(items.iter().map(HeadlineItem::from_raw));

        match kind {
            BatchKind::Real => self.real_seen = true,
            BatchKind::Fake => self.fake_seen = true,
        }
        tracing::debug!(
            %kind,
            appended,
            real_total = self.real_batch.len(),
            fake_total = self.fake_batch.len(),
            "batch arrived"
        );

        if self.phase == Phase::AwaitingBatches && self.real_seen && self.fake_seen {
            self.phase = Phase::Ready;
            self.advance_pair();
        }
    }

    /// Move to the next pair.
    ///
    /// When either cursor has reached its batch length the result is
    /// [`Advance::Exhausted`]: no cursor mutation, the previous pair stays
    /// on display unchanged, and a ready engine transitions to the terminal
    /// [`Phase::Exhausted`]. Repeated calls after exhaustion stay no-ops.
    pub fn advance_pair(&mut self) -> Advance {
        if self.phase == Phase::Exhausted {
            return Advance::Exhausted;
        }
        if self.fake_cursor >= self.fake_batch.len() || self.real_cursor >= self.real_batch.len() {
            if self.phase == Phase::Ready {
                tracing::debug!(
                    shown = self.real_cursor,
                    "headline supply depleted"
                );
                self.phase = Phase::Exhausted;
            }
            return Advance::Exhausted;
        }

        let fake = self.fake_batch[self.fake_cursor].clone();
        let real = self.real_batch[self.real_cursor].clone();
        let fake_side = self.picker.pick();
        let pair = match fake_side {
            Side::Left => CurrentPair {
                left: fake,
                right: real,
                fake_side,
            },
            Side::Right => CurrentPair {
                left: real,
                right: fake,
                fake_side,
            },
        };
        self.fake_cursor += 1;
        self.real_cursor += 1;
        self.current = Some(pair.clone());
        Advance::Next(pair)
    }

    /// Score a guess against the current pair, then advance to the next
    /// round.
    ///
    /// Returns `None` unless a pair is on display: taps before both batches
    /// have arrived and taps after exhaustion are silently ignored. After a
    /// scored guess, check [`Self::phase`] to see whether the trailing
    /// advance depleted the supply.
    pub fn submit_guess(&mut self, side: Side) -> Option<GuessResult> {
        if self.phase != Phase::Ready {
            return None;
        }
        let pair = self.current.as_ref()?;
        let correct = side == pair.fake_side;
        self.score.record(correct);
        let result = GuessResult {
            correct,
            score: self.score,
            percentage_display: self.score.percentage_display(),
        };
        self.advance_pair();
        Some(result)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_pair(&self) -> Option<&CurrentPair> {
        self.current.as_ref()
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Rounds still available before the shorter batch runs out.
    pub fn remaining(&self) -> usize {
        let real_left = self.real_batch.len() - self.real_cursor;
        let fake_left = self.fake_batch.len() - self.fake_cursor;
        real_left.min(fake_left)
    }
}

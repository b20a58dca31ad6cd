//! Per-session score tracking and accuracy display.

use serde::{Deserialize, Serialize};

/// Running score for one session.
///
/// Both counters are monotonically non-decreasing and `correct <= guessed`
/// always holds; [`ScoreState::record`] is the only mutator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Total guesses scored.
    pub guessed: u32,
    /// Guesses that identified the fake headline.
    pub correct: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one guess.
    pub fn record(&mut self, correct: bool) {
        self.guessed += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Accuracy as a fraction in `[0, 1]`, or `None` before the first guess.
    pub fn accuracy(&self) -> Option<f64> {
        if self.guessed == 0 {
            None
        } else {
            Some(self.correct as f64 / self.guessed as f64)
        }
    }

    /// Accuracy formatted for display.
    ///
    /// `"x%"` before the first guess, then a percentage with exactly two
    /// decimal places (e.g. `"66.67%"`).
    pub fn percentage_display(&self) -> String {
        match self.accuracy() {
            None => "x%".to_string(),
            Some(fraction) => format!("{:.2}%", fraction * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_before_first_guess() {
        assert_eq!(ScoreState::new().percentage_display(), "x%");
    }

    #[test]
    fn display_has_two_decimal_places() {
        let mut score = ScoreState::new();
        score.record(true);
        assert_eq!(score.percentage_display(), "100.00%");

        score.record(false);
        assert_eq!(score.percentage_display(), "50.00%");

        score.record(false);
        assert_eq!(score.percentage_display(), "33.33%");
    }

    #[test]
    fn display_rounds_repeating_fractions() {
        let mut score = ScoreState::new();
        score.record(true);
        score.record(true);
        score.record(false);
        assert_eq!(score.guessed, 3);
        assert_eq!(score.correct, 2);
        assert_eq!(score.percentage_display(), "66.67%");
    }

    #[test]
    fn correct_never_exceeds_guessed() {
        let mut score = ScoreState::new();
        for i in 0..100 {
            score.record(i % 3 == 0);
            assert!(score.correct <= score.guessed);
        }
        assert_eq!(score.guessed, 100);
    }

    #[test]
    fn all_misses_is_zero_percent() {
        let mut score = ScoreState::new();
        score.record(false);
        score.record(false);
        assert_eq!(score.percentage_display(), "0.00%");
        assert_eq!(score.accuracy(), Some(0.0));
    }
}

//! Game session orchestration.
//!
//! A [`GameSession`] wires one [`PairingEngine`] to its collaborators: a
//! headline source for supply, a notifier for transient messages, and an
//! audio surface for guess feedback. The engine stays pure; everything
//! asynchronous happens here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{GuessResult, PairingEngine, Phase, SidePicker, UniformSidePicker};
use crate::model::{BatchKind, CurrentPair, GameSettings, Side};
use crate::score::ScoreState;
use crate::traits::{AudioSurface, Cue, HeadlineSource, Notifier, NoticePosition};

/// Notice shown once when the headline supply runs out.
pub const EXHAUSTED_NOTICE: &str =
    "All headlines used! Adjust the settings and play again to keep going.";

const GUESS_NOTICE_DURATION: Duration = Duration::from_millis(2500);
const EXHAUSTED_NOTICE_DURATION: Duration = Duration::from_millis(8000);

/// One completed round, kept for the end-of-session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The pair that was on display.
    pub pair: CurrentPair,
    /// The side the player picked.
    pub guessed_side: Side,
    /// Whether the pick found the fake headline.
    pub correct: bool,
    /// Accuracy display after this round.
    pub percentage_display: String,
}

/// One screen-lifetime of the game.
pub struct GameSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    engine: PairingEngine,
    notifier: Arc<dyn Notifier>,
    audio: Arc<dyn AudioSurface>,
    rounds: Vec<RoundRecord>,
}

impl GameSession {
    /// Start a session: preload the audio cues, fetch both feeds
    /// concurrently, and feed arrivals to the engine in completion order.
    ///
    /// Audio preload failures are logged and ignored; a fetch failure is
    /// returned to the caller. If the feeds come back empty the exhaustion
    /// notice fires here and the session is already over.
    pub async fn begin(
        source: Arc<dyn HeadlineSource>,
        settings: GameSettings,
        notifier: Arc<dyn Notifier>,
        audio: Arc<dyn AudioSurface>,
    ) -> Result<Self> {
        Self::begin_with_picker(source, settings, notifier, audio, Box::new(UniformSidePicker))
            .await
    }

    /// [`Self::begin`] with an injected side picker, for deterministic play.
    pub async fn begin_with_picker(
        source: Arc<dyn HeadlineSource>,
        settings: GameSettings,
        notifier: Arc<dyn Notifier>,
        audio: Arc<dyn AudioSurface>,
        picker: Box<dyn SidePicker>,
    ) -> Result<Self> {
        let mut session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            engine: PairingEngine::with_picker(settings, picker),
            notifier,
            audio,
            rounds: Vec::new(),
        };
        tracing::info!(
            session = %session.id,
            source = source.name(),
            bank_size = session.engine.settings().bank_size,
            sort_by = %session.engine.settings().sort_by,
            "starting game session"
        );

        session.preload_cues().await;
        session.load_batches(source).await?;

        if session.engine.phase() == Phase::Exhausted {
            session.notify_exhausted();
        }
        Ok(session)
    }

    async fn preload_cues(&self) {
        for cue in [Cue::Ding, Cue::Buzz] {
            if let Err(e) = self.audio.preload(cue, cue.asset_path()).await {
                tracing::warn!("failed to preload {cue:?}: {e:#}");
            }
        }
    }

    async fn load_batches(&mut self, source: Arc<dyn HeadlineSource>) -> Result<()> {
        let mut fetches = FuturesUnordered::new();
        for kind in [BatchKind::Real, BatchKind::Fake] {
            let source = Arc::clone(&source);
            let settings = self.engine.settings().clone();
            fetches.push(async move {
                let items = source.fetch(kind, &settings).await;
                (kind, items)
            });
        }

        while let Some((kind, result)) = fetches.next().await {
            let items = result
                .with_context(|| format!("fetching {kind} headlines via {}", source.name()))?;
            self.engine.on_batch_arrived(kind, items);
        }
        Ok(())
    }

    /// Score a guess and fire the round's side effects.
    ///
    /// Returns `None` when the engine ignored the guess (nothing on display
    /// or already exhausted). The notice is shown synchronously; the audio
    /// cue is a spawned task the session never awaits.
    pub fn submit_guess(&mut self, side: Side) -> Option<GuessResult> {
        let pair = self.engine.current_pair().cloned()?;
        let result = self.engine.submit_guess(side)?;

        let message = if result.correct { "Correct!" } else { "Incorrect!" };
        self.notifier
            .show(message, GUESS_NOTICE_DURATION, NoticePosition::Top);

        let cue = if result.correct { Cue::Ding } else { Cue::Buzz };
        let audio = Arc::clone(&self.audio);
        tokio::spawn(async move {
            if let Err(e) = audio.play(cue).await {
                tracing::warn!("failed to play {cue:?}: {e:#}");
            }
        });

        self.rounds.push(RoundRecord {
            pair,
            guessed_side: side,
            correct: result.correct,
            percentage_display: result.percentage_display.clone(),
        });

        if self.engine.phase() == Phase::Exhausted {
            self.notify_exhausted();
        }
        Some(result)
    }

    fn notify_exhausted(&self) {
        tracing::info!(session = %self.id, rounds = self.rounds.len(), "headline supply exhausted");
        self.notifier.show(
            EXHAUSTED_NOTICE,
            EXHAUSTED_NOTICE_DURATION,
            NoticePosition::Bottom,
        );
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn current_pair(&self) -> Option<&CurrentPair> {
        self.engine.current_pair()
    }

    pub fn score(&self) -> ScoreState {
        self.engine.score()
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Rounds still available before the supply runs out.
    pub fn remaining(&self) -> usize {
        self.engine.remaining()
    }

    /// True once the supply is depleted; the caller's loop should exit.
    pub fn is_over(&self) -> bool {
        self.engine.phase() == Phase::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RawHeadline;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticSource {
        real: Vec<RawHeadline>,
        fake: Vec<RawHeadline>,
    }

    impl StaticSource {
        fn with_titles(real: &[&str], fake: &[&str]) -> Arc<Self> {
            let to_raw = |titles: &[&str]| {
                titles
                    .iter()
                    .map(|t| RawHeadline {
                        title: t.to_string(),
                        thumbnail_url: String::new(),
                    })
                    .collect()
            };
            Arc::new(Self {
                real: to_raw(real),
                fake: to_raw(fake),
            })
        }
    }

    #[async_trait]
    impl HeadlineSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch(
            &self,
            kind: BatchKind,
            _settings: &GameSettings,
        ) -> Result<Vec<RawHeadline>> {
            Ok(match kind {
                BatchKind::Real => self.real.clone(),
                BatchKind::Fake => self.fake.clone(),
            })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl HeadlineSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(
            &self,
            _kind: BatchKind,
            _settings: &GameSettings,
        ) -> Result<Vec<RawHeadline>> {
            anyhow::bail!("connection refused")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(String, Duration, NoticePosition)>>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, message: &str, duration: Duration, position: NoticePosition) {
            self.notices
                .lock()
                .unwrap()
                .push((message.to_string(), duration, position));
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        preloads: Mutex<Vec<(Cue, String)>>,
        plays: Mutex<Vec<Cue>>,
    }

    #[async_trait]
    impl AudioSurface for RecordingAudio {
        async fn preload(&self, cue: Cue, asset_path: &str) -> Result<()> {
            self.preloads
                .lock()
                .unwrap()
                .push((cue, asset_path.to_string()));
            Ok(())
        }

        async fn play(&self, cue: Cue) -> Result<()> {
            self.plays.lock().unwrap().push(cue);
            Ok(())
        }
    }

    struct BrokenAudio;

    #[async_trait]
    impl AudioSurface for BrokenAudio {
        async fn preload(&self, _cue: Cue, _asset_path: &str) -> Result<()> {
            anyhow::bail!("no audio device")
        }

        async fn play(&self, _cue: Cue) -> Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    /// Always puts the fake headline on the left.
    struct FakeLeft;

    impl SidePicker for FakeLeft {
        fn pick(&mut self) -> Side {
            Side::Left
        }
    }

    async fn session_with(
        source: Arc<dyn HeadlineSource>,
        notifier: Arc<RecordingNotifier>,
        audio: Arc<RecordingAudio>,
    ) -> GameSession {
        GameSession::begin_with_picker(
            source,
            GameSettings::default(),
            notifier,
            audio,
            Box::new(FakeLeft),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn begin_preloads_cues_and_presents_first_pair() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&["real a"], &["fake x"]);
        let session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;

        assert!(!session.is_over());
        assert_eq!(session.current_pair().unwrap().left.text, "fake x");

        let preloads = audio.preloads.lock().unwrap();
        assert_eq!(preloads.len(), 2);
        assert!(preloads.contains(&(Cue::Ding, "assets/sfx/ding.mp3".to_string())));
        assert!(preloads.contains(&(Cue::Buzz, "assets/sfx/buzz.mp3".to_string())));
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn scored_guess_notifies_and_plays_cue() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&["real a", "real b"], &["fake x", "fake y"]);
        let mut session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;

        let result = session.submit_guess(Side::Left).unwrap();
        assert!(result.correct);

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, "Correct!");
        assert_eq!(notices[0].1, Duration::from_millis(2500));
        assert_eq!(notices[0].2, NoticePosition::Top);
        drop(notices);

        // The cue plays on a spawned task; give it a moment.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*audio.plays.lock().unwrap(), vec![Cue::Ding]);
    }

    #[tokio::test]
    async fn incorrect_guess_plays_buzz() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&["real a", "real b"], &["fake x", "fake y"]);
        let mut session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;

        let result = session.submit_guess(Side::Right).unwrap();
        assert!(!result.correct);
        assert_eq!(notifier.notices.lock().unwrap()[0].0, "Incorrect!");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*audio.plays.lock().unwrap(), vec![Cue::Buzz]);
    }

    #[tokio::test]
    async fn exhaustion_notice_fires_exactly_once() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&["real a"], &["fake x"]);
        let mut session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;

        session.submit_guess(Side::Left).unwrap();
        assert!(session.is_over());

        // The last pair stays on display.
        assert!(session.current_pair().is_some());

        // A late tap changes nothing.
        assert!(session.submit_guess(Side::Left).is_none());

        let notices = notifier.notices.lock().unwrap();
        let exhausted: Vec<_> = notices
            .iter()
            .filter(|(m, _, _)| m == EXHAUSTED_NOTICE)
            .collect();
        assert_eq!(exhausted.len(), 1);
        assert_eq!(exhausted[0].1, Duration::from_millis(8000));
        assert_eq!(exhausted[0].2, NoticePosition::Bottom);
    }

    #[tokio::test]
    async fn empty_feed_is_over_at_begin() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&[], &[]);
        let mut session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;

        assert!(session.is_over());
        assert!(session.current_pair().is_none());
        assert!(session.submit_guess(Side::Left).is_none());

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, EXHAUSTED_NOTICE);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_with_context() {
        let result = GameSession::begin(
            Arc::new(FailingSource),
            GameSettings::default(),
            Arc::new(RecordingNotifier::default()),
            Arc::new(RecordingAudio::default()),
        )
        .await;

        let err = format!("{:#}", result.err().unwrap());
        assert!(err.contains("via failing"), "unexpected error: {err}");
        assert!(err.contains("connection refused"), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn broken_audio_never_blocks_play() {
        let notifier = Arc::new(RecordingNotifier::default());
        let source = StaticSource::with_titles(&["real a", "real b"], &["fake x", "fake y"]);
        let mut session = GameSession::begin_with_picker(
            source,
            GameSettings::default(),
            Arc::<RecordingNotifier>::clone(&notifier),
            Arc::new(BrokenAudio),
            Box::new(FakeLeft),
        )
        .await
        .unwrap();

        let result = session.submit_guess(Side::Left).unwrap();
        assert!(result.correct);
        assert_eq!(session.score().guessed, 1);
    }

    #[tokio::test]
    async fn rounds_transcript_follows_play() {
        let notifier = Arc::new(RecordingNotifier::default());
        let audio = Arc::new(RecordingAudio::default());
        let source = StaticSource::with_titles(&["real a", "real b"], &["fake x", "fake y"]);
        let mut session = session_with(source, Arc::clone(&notifier), Arc::clone(&audio)).await;
        assert_eq!(session.remaining(), 1);

        session.submit_guess(Side::Left).unwrap();
        session.submit_guess(Side::Right).unwrap();

        let rounds = session.rounds();
        assert_eq!(rounds.len(), 2);
        assert!(rounds[0].correct);
        assert_eq!(rounds[0].pair.left.text, "fake x");
        assert_eq!(rounds[0].percentage_display, "100.00%");
        assert!(!rounds[1].correct);
        assert_eq!(rounds[1].guessed_side, Side::Right);
        assert_eq!(rounds[1].percentage_display, "50.00%");
    }
}

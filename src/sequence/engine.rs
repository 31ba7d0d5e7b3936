//! Sequence-memory engine.
//!
//! ## Round loop
//!
//! 1. `start_game` resets everything and extends the sequence by one signal.
//! 2. Every extension replays the *whole* sequence from the start. While
//!    the playback runs, player input is rejected.
//! 3. The player repeats the sequence with `submit_signal`. A wrong signal
//!    ends the game. A complete correct replay scores a point and, after
//!    the round pause, extends the sequence again.
//!
//! Playback is a chain of timeline events: `Show(i)` after the playback
//! gap, `Hide(i)` after the signal-on time, then `Show(i + 1)`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ConfigError, GameRng, SequenceConfig, Timeline};
use crate::rules::GameEngine;

use super::signal::SignalId;

/// Lifecycle of a sequence game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceStatus {
    /// No game started yet.
    #[default]
    NotStarted,
    /// A game is running.
    Playing,
    /// The player submitted a wrong signal. Only `start_game` leaves this.
    GameOver,
}

/// Whether the sequence is currently being shown to the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// What a submitted signal did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalOutcome {
    /// Input was not accepted (no game, playback running, between rounds,
    /// game over, or the id is outside the alphabet).
    Ignored,
    /// Correct signal; the round continues.
    Accepted,
    /// Correct signal that completed the round.
    RoundComplete,
    /// Wrong signal; the game is over.
    GameOver,
}

/// Inbound intents for the sequence game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceIntent {
    /// Start (or restart) a game.
    Start,
    /// The player pressed a signal.
    Tap(SignalId),
}

/// Read-only projection for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceView {
    pub score: u32,
    pub active_signal: Option<SignalId>,
    pub is_playing: bool,
    pub is_showing_sequence: bool,
    pub is_game_over: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SequenceTimer {
    /// Light up the signal at this sequence index.
    Show(usize),
    /// Turn off the signal at this sequence index.
    Hide(usize),
    /// Round pause over; extend the sequence.
    NextRound,
    /// Player-press highlight over.
    ClearFlash(SignalId),
}

/// Sequence-memory game engine.
#[derive(Clone, Debug)]
pub struct SequenceEngine {
    config: SequenceConfig,
    rng: GameRng,
    timeline: Timeline<SequenceTimer>,

    sequence: Vec<SignalId>,
    progress: Vec<SignalId>,
    score: u32,

    status: SequenceStatus,
    playback: PlaybackState,
    /// Between a completed round and the next playback.
    round_pending: bool,
    active_signal: Option<SignalId>,
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::from_valid(SequenceConfig::default())
    }
}

impl SequenceEngine {
    /// Create an engine. No game runs until `start_game`.
    pub fn new(config: SequenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SequenceConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        Self {
            config,
            rng,
            timeline: Timeline::new(),
            sequence: Vec::new(),
            progress: Vec::new(),
            score: 0,
            status: SequenceStatus::NotStarted,
            playback: PlaybackState::Idle,
            round_pending: false,
            active_signal: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// The target sequence.
    #[must_use]
    pub fn sequence(&self) -> &[SignalId] {
        &self.sequence
    }

    /// What the player has entered so far this round.
    #[must_use]
    pub fn player_progress(&self) -> &[SignalId] {
        &self.progress
    }

    /// Completed rounds.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> SequenceStatus {
        self.status
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn active_signal(&self) -> Option<SignalId> {
        self.active_signal
    }

    /// Current engine time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Whether `submit_signal` would currently be considered.
    #[must_use]
    pub fn is_accepting_input(&self) -> bool {
        self.status == SequenceStatus::Playing
            && self.playback == PlaybackState::Idle
            && !self.round_pending
    }

    // === Operations ===

    /// Reset the game and start the first round.
    ///
    /// Supersedes any timer of a previous game.
    pub fn start_game(&mut self) {
        self.timeline.reset();
        self.sequence.clear();
        self.progress.clear();
        self.score = 0;
        self.round_pending = false;
        self.active_signal = None;
        self.playback = PlaybackState::Idle;
        self.status = SequenceStatus::Playing;

        debug!(seed = self.rng.seed(), "sequence game started");
        self.extend_sequence();
    }

    /// Append one random signal and replay the whole sequence.
    fn extend_sequence(&mut self) {
        let next = self.rng.gen_index(usize::from(self.config.signal_count));
        // signal_count is a u8, so the index always fits
        self.sequence.push(SignalId(next as u8));
        debug!(length = self.sequence.len(), "sequence extended");
        self.play_sequence();
    }

    fn play_sequence(&mut self) {
        if self.sequence.is_empty() {
            self.playback = PlaybackState::Idle;
            return;
        }
        self.playback = PlaybackState::Playing;
        self.active_signal = None;
        self.timeline
            .schedule(self.config.playback_gap(), SequenceTimer::Show(0));
    }

    /// Submit the player's next signal.
    pub fn submit_signal(&mut self, signal: SignalId) -> SignalOutcome {
        if !self.is_accepting_input() {
            trace!(%signal, status = ?self.status, playback = ?self.playback, "signal ignored");
            return SignalOutcome::Ignored;
        }
        if signal.0 >= self.config.signal_count {
            trace!(%signal, "signal outside alphabet ignored");
            return SignalOutcome::Ignored;
        }

        let index = self.progress.len();
        self.progress.push(signal);

        if self.sequence.get(index) != Some(&signal) {
            self.status = SequenceStatus::GameOver;
            self.timeline.reset();
            self.active_signal = None;
            debug!(score = self.score, at = index, "sequence game over");
            return SignalOutcome::GameOver;
        }

        self.active_signal = Some(signal);
        self.timeline
            .schedule(self.config.press_flash(), SequenceTimer::ClearFlash(signal));

        if self.progress.len() == self.sequence.len() {
            self.score += 1;
            self.progress.clear();
            self.round_pending = true;
            self.timeline
                .schedule(self.config.round_pause(), SequenceTimer::NextRound);
            debug!(score = self.score, "round complete");
            SignalOutcome::RoundComplete
        } else {
            SignalOutcome::Accepted
        }
    }

    /// Advance the engine clock, firing every due timer in order.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.timeline.now().saturating_add(elapsed);
        while let Some(event) = self.timeline.pop_due(target) {
            self.fire(event);
        }
        self.timeline.settle(target);
    }

    /// Run until the current playback pass (if any) has finished.
    pub fn finish_playback(&mut self) {
        while self.playback == PlaybackState::Playing {
            let Some(due) = self.timeline.next_due() else {
                break;
            };
            let step = due.saturating_sub(self.timeline.now());
            self.advance(step);
        }
    }

    fn fire(&mut self, event: SequenceTimer) {
        match event {
            SequenceTimer::Show(index) => match self.sequence.get(index) {
                Some(&signal) => {
                    self.active_signal = Some(signal);
                    self.timeline
                        .schedule(self.config.signal_on(), SequenceTimer::Hide(index));
                }
                None => self.playback = PlaybackState::Idle,
            },
            SequenceTimer::Hide(index) => {
                self.active_signal = None;
                if index + 1 < self.sequence.len() {
                    self.timeline
                        .schedule(self.config.playback_gap(), SequenceTimer::Show(index + 1));
                } else {
                    self.playback = PlaybackState::Idle;
                    trace!(length = self.sequence.len(), "playback finished");
                }
            }
            SequenceTimer::NextRound => {
                self.round_pending = false;
                if self.status == SequenceStatus::Playing {
                    self.extend_sequence();
                }
            }
            SequenceTimer::ClearFlash(signal) => {
                if self.playback == PlaybackState::Idle && self.active_signal == Some(signal) {
                    self.active_signal = None;
                }
            }
        }
    }

    /// Current projection.
    #[must_use]
    pub fn view(&self) -> SequenceView {
        SequenceView {
            score: self.score,
            active_signal: self.active_signal,
            is_playing: self.status == SequenceStatus::Playing,
            is_showing_sequence: self.playback == PlaybackState::Playing,
            is_game_over: self.status == SequenceStatus::GameOver,
        }
    }
}

impl GameEngine for SequenceEngine {
    type Intent = SequenceIntent;
    type View = SequenceView;

    fn handle(&mut self, intent: SequenceIntent) -> bool {
        match intent {
            SequenceIntent::Start => {
                self.start_game();
                true
            }
            SequenceIntent::Tap(signal) => self.submit_signal(signal) != SignalOutcome::Ignored,
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        SequenceEngine::advance(self, elapsed);
    }

    fn view(&self) -> SequenceView {
        SequenceEngine::view(self)
    }

    fn is_finished(&self) -> bool {
        self.status == SequenceStatus::GameOver
    }
}

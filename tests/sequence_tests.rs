//! Sequence-memory game scenarios.
//!
//! These tests drive the engine the way a renderer would: through the
//! `GameEngine` trait, advancing time between intents.

use std::time::Duration;

use mini_arcade::{
    GameEngine, SequenceConfig, SequenceEngine, SequenceIntent, SequenceStatus, SignalId,
    SignalOutcome,
};

fn engine(seed: u64) -> SequenceEngine {
    SequenceEngine::new(SequenceConfig::default().with_seed(seed)).unwrap()
}

/// Submit the whole current sequence correctly.
fn replay(engine: &mut SequenceEngine) {
    for signal in engine.sequence().to_vec() {
        assert!(engine.handle(SequenceIntent::Tap(signal)));
    }
}

fn wrong_for(engine: &SequenceEngine, signal: SignalId) -> SignalId {
    SignalId((signal.0 + 1) % engine.config().signal_count)
}

// =============================================================================
// Round Scenarios
// =============================================================================

/// Test the first round: one signal, correct replay, score, growth.
#[test]
fn test_first_round_scores_and_grows() {
    let mut engine = engine(1);
    engine.handle(SequenceIntent::Start);
    assert_eq!(engine.sequence().len(), 1);

    engine.finish_playback();
    let first = engine.sequence()[0];
    assert_eq!(engine.submit_signal(first), SignalOutcome::RoundComplete);

    assert_eq!(engine.score(), 1);
    assert!(engine.player_progress().is_empty());

    engine.advance(engine.config().round_pause());
    assert_eq!(engine.sequence().len(), 2);
}

/// Test that a wrong first signal ends the game with no score.
#[test]
fn test_wrong_first_signal() {
    let mut engine = engine(2);
    engine.handle(SequenceIntent::Start);
    engine.finish_playback();

    let wrong = wrong_for(&engine, engine.sequence()[0]);
    assert_eq!(engine.submit_signal(wrong), SignalOutcome::GameOver);

    let view = engine.view();
    assert!(view.is_game_over);
    assert!(!view.is_playing);
    assert_eq!(view.score, 0);
    assert!(engine.is_finished());
}

/// Test that a mistake mid-round leaves the score of completed rounds.
#[test]
fn test_mistake_mid_round_keeps_score() {
    let mut engine = engine(3);
    engine.handle(SequenceIntent::Start);

    for _ in 0..3 {
        engine.finish_playback();
        replay(&mut engine);
        engine.advance(engine.config().round_pause());
    }
    assert_eq!(engine.score(), 3);
    assert_eq!(engine.sequence().len(), 4);

    engine.finish_playback();
    let sequence = engine.sequence().to_vec();
    assert_eq!(engine.submit_signal(sequence[0]), SignalOutcome::Accepted);
    assert_eq!(engine.submit_signal(sequence[1]), SignalOutcome::Accepted);
    assert_eq!(engine.submit_signal(wrong_for(&engine, sequence[2])), SignalOutcome::GameOver);

    assert_eq!(engine.score(), 3);
    assert_eq!(engine.status(), SequenceStatus::GameOver);
}

/// Test that restarting after game over starts from scratch.
#[test]
fn test_restart_after_game_over() {
    let mut engine = engine(4);
    engine.handle(SequenceIntent::Start);
    engine.finish_playback();
    replay(&mut engine);
    engine.advance(engine.config().round_pause());
    engine.finish_playback();
    let wrong = wrong_for(&engine, engine.sequence()[0]);
    engine.submit_signal(wrong);
    assert!(engine.is_finished());

    assert!(engine.handle(SequenceIntent::Start));
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.sequence().len(), 1);
    assert_eq!(engine.status(), SequenceStatus::Playing);
    assert!(!engine.is_finished());
}

// =============================================================================
// Playback Scenarios
// =============================================================================

/// Test that the highlight follows the sequence during playback.
#[test]
fn test_playback_highlights_every_signal() {
    let mut engine = engine(5);
    engine.handle(SequenceIntent::Start);
    for _ in 0..2 {
        engine.finish_playback();
        replay(&mut engine);
        engine.advance(engine.config().round_pause());
    }
    let sequence = engine.sequence().to_vec();
    assert_eq!(sequence.len(), 3);

    let gap = engine.config().playback_gap();
    let on = engine.config().signal_on();
    let mut shown = Vec::new();
    for _ in &sequence {
        engine.advance(gap);
        shown.push(engine.view().active_signal);
        assert!(engine.view().is_showing_sequence);
        engine.advance(on);
        assert_eq!(engine.view().active_signal, None);
    }

    let expected: Vec<_> = sequence.iter().copied().map(Some).collect();
    assert_eq!(shown, expected);
    assert!(!engine.view().is_showing_sequence);
}

/// Test that taps during playback are dropped, not queued.
#[test]
fn test_taps_during_playback_not_queued() {
    let mut engine = engine(6);
    engine.handle(SequenceIntent::Start);

    let first = engine.sequence()[0];
    engine.advance(Duration::from_millis(300));
    assert!(!engine.handle(SequenceIntent::Tap(first)));
    engine.advance(Duration::from_millis(500));
    assert!(!engine.handle(SequenceIntent::Tap(first)));

    engine.finish_playback();
    assert!(engine.player_progress().is_empty());
    assert_eq!(engine.score(), 0);
}

/// Test playback length with custom timing.
#[test]
fn test_custom_timing() {
    let config = SequenceConfig::default()
        .with_seed(9)
        .with_playback_timing(100, 50)
        .with_round_pause(10);
    let mut engine = SequenceEngine::new(config).unwrap();
    engine.handle(SequenceIntent::Start);

    engine.advance(Duration::from_millis(149));
    assert!(engine.view().is_showing_sequence);
    engine.advance(Duration::from_millis(1));
    assert!(!engine.view().is_showing_sequence);

    replay(&mut engine);
    engine.advance(Duration::from_millis(10));
    assert_eq!(engine.sequence().len(), 2);
}

/// Test that a larger alphabet produces signals across its whole range.
#[test]
fn test_custom_alphabet() {
    let config = SequenceConfig::default().with_seed(11).with_signal_count(6);
    let mut engine = SequenceEngine::new(config).unwrap();
    engine.handle(SequenceIntent::Start);

    for _ in 0..40 {
        engine.finish_playback();
        replay(&mut engine);
        engine.advance(engine.config().round_pause());
    }

    assert!(engine.sequence().iter().all(|s| s.0 < 6));
    assert!(engine.sequence().iter().any(|s| s.0 >= 4));
    assert_eq!(engine.score(), 40);
}

/// Test that the same seed replays the same game.
#[test]
fn test_seeded_games_match() {
    let mut a = engine(77);
    let mut b = engine(77);
    for engine in [&mut a, &mut b] {
        engine.handle(SequenceIntent::Start);
        for _ in 0..5 {
            engine.finish_playback();
            replay(engine);
            engine.advance(engine.config().round_pause());
        }
    }
    assert_eq!(a.sequence(), b.sequence());
}

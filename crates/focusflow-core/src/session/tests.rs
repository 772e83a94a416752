//! Tests for the session module.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;

use super::*;
use crate::{
    error::FlowError,
    models::{Block, Intensity, Mode, Mood, Plan, Reflection, MAX_BLOCK_MINUTES},
};

fn plan_of(minutes: &[u32]) -> Arc<Plan> {
    let blocks = minutes
        .iter()
        .enumerate()
        .map(|(i, m)| Block::new(format!("Block {}", i + 1), *m, "", "medium"))
        .collect::<Vec<_>>();
    Arc::new(Plan {
        id: "plan-test".to_string(),
        task: "Test task".to_string(),
        total_minutes: minutes.iter().sum(),
        created_at: Timestamp::UNIX_EPOCH,
        mode: Mode::Study,
        intensity: Intensity::Normal,
        focus_tip: String::new(),
        energy_level: "medium".to_string(),
        blocks,
    })
}

fn tick_n(engine: &mut SessionEngine, token: SessionToken, n: u32) {
    for _ in 0..n {
        engine.tick(token);
    }
}

#[test]
fn test_start_begins_at_first_block() {
    for minutes in [vec![1], vec![25, 5], vec![3, 10, 2, 45]] {
        let mut engine = SessionEngine::new();
        engine.start(Some(plan_of(&minutes))).unwrap();

        let state = engine.state();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.current_block_index, 0);
        assert_eq!(state.seconds_remaining, minutes[0] * 60);
    }
}

#[test]
fn test_two_block_scenario() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[25, 5]))).unwrap();
    assert_eq!(engine.state().seconds_remaining, 1500);

    tick_n(&mut engine, token, 1500);
    assert_eq!(engine.phase(), Phase::Running);
    assert_eq!(engine.state().current_block_index, 1);
    assert_eq!(engine.state().seconds_remaining, 300);

    tick_n(&mut engine, token, 300);
    assert_eq!(engine.phase(), Phase::Ended);
    assert_eq!(engine.state().current_block_index, 1);
    assert_eq!(engine.state().seconds_remaining, 0);
}

#[test]
fn test_exactly_n_minus_one_advances_before_completion() {
    for minutes in [vec![1], vec![1, 2], vec![2, 1, 1, 3]] {
        let mut engine = SessionEngine::new();
        let token = engine.start(Some(plan_of(&minutes))).unwrap();
        let total_ticks: u32 = minutes.iter().map(|m| m * 60).sum();

        let mut advances = 0;
        let mut completions = 0;
        for _ in 0..total_ticks {
            match engine.tick(token) {
                TickOutcome::Advanced { from, to } => {
                    assert_eq!(to, from + 1);
                    advances += 1;
                }
                TickOutcome::Completed => completions += 1,
                TickOutcome::Counted => {}
                TickOutcome::Ignored => panic!("tick ignored while running"),
            }
            if engine.phase() == Phase::Running {
                assert!(engine.state().current_block_index < minutes.len());
            }
        }

        assert_eq!(advances, minutes.len() - 1);
        assert_eq!(completions, 1);
        assert_eq!(engine.phase(), Phase::Ended);
        assert_eq!(engine.tick(token), TickOutcome::Ignored);
    }
}

#[test]
fn test_progress_is_monotonic_and_reaches_hundred_on_completion() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[1, 1, 2]))).unwrap();

    let mut last = engine.view().unwrap().progress_percent();
    assert_eq!(last, 0);
    while engine.phase() == Phase::Running {
        engine.tick(token);
        let progress = engine.view().unwrap().progress_percent();
        assert!(progress >= last, "progress went from {last} to {progress}");
        if engine.phase() == Phase::Running {
            assert!(progress < 100);
        }
        last = progress;
    }
    assert_eq!(last, 100);
}

#[test]
fn test_progress_ignores_time_inside_block() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[1, 1]))).unwrap();

    tick_n(&mut engine, token, 59);
    assert_eq!(engine.view().unwrap().progress_percent(), 0);
    engine.tick(token);
    assert_eq!(engine.view().unwrap().progress_percent(), 50);
}

#[test]
fn test_end_early_freezes_position() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[25, 5]))).unwrap();
    tick_n(&mut engine, token, 10);

    engine.end_early().unwrap();
    let state = engine.state();
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.current_block_index, 0);
    assert_eq!(state.seconds_remaining, 1490);
    assert_eq!(engine.view().unwrap().progress_percent(), 0);

    // Ticks after cancellation never mutate state
    assert_eq!(engine.tick(token), TickOutcome::Ignored);
    assert_eq!(engine.state(), state);
}

#[test]
fn test_end_early_on_last_block_stays_below_hundred() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[1, 1]))).unwrap();
    tick_n(&mut engine, token, 61);

    engine.end_early().unwrap();
    assert_eq!(engine.view().unwrap().progress_percent(), 50);
}

#[test]
fn test_end_early_requires_running() {
    let mut engine = SessionEngine::new();
    let err = engine.end_early().unwrap_err();
    assert!(err.is_precondition_failed());
}

#[test]
fn test_start_while_running_is_noop() {
    let plan = plan_of(&[25, 5]);
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(Arc::clone(&plan))).unwrap();
    tick_n(&mut engine, token, 42);

    let again = engine.start(Some(plan)).unwrap();
    assert_eq!(again, token);
    assert_eq!(engine.state().seconds_remaining, 1500 - 42);
}

#[test]
fn test_start_without_plan_is_rejected() {
    let mut engine = SessionEngine::new();
    let err = engine.start(None).unwrap_err();
    assert!(err.is_precondition_failed());
    assert_eq!(engine.phase(), Phase::Idle);

    let err = engine.start(Some(plan_of(&[]))).unwrap_err();
    assert!(err.is_precondition_failed());
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_start_rejects_unrunnable_blocks() {
    let mut engine = SessionEngine::new();
    for minutes in [vec![5, 0], vec![MAX_BLOCK_MINUTES + 1], vec![u32::MAX]] {
        let err = engine.start(Some(plan_of(&minutes))).unwrap_err();
        assert!(matches!(err, FlowError::MalformedPlan { .. }), "{minutes:?}");
        assert_eq!(engine.phase(), Phase::Idle);
    }

    engine.start(Some(plan_of(&[MAX_BLOCK_MINUTES]))).unwrap();
    assert_eq!(engine.state().seconds_remaining, 24 * 60 * 60);
}

#[test]
fn test_stale_token_is_ignored_after_restart() {
    let plan = plan_of(&[1, 1]);
    let mut engine = SessionEngine::new();
    let first = engine.start(Some(Arc::clone(&plan))).unwrap();
    engine.end_early().unwrap();

    let second = engine.start(Some(plan)).unwrap();
    assert_ne!(first, second);
    assert_eq!(engine.tick(first), TickOutcome::Ignored);
    assert_eq!(engine.state().seconds_remaining, 60);
    assert_eq!(engine.tick(second), TickOutcome::Counted);
    assert_eq!(engine.state().seconds_remaining, 59);
}

#[test]
fn test_reflection_transitions_require_ended() {
    let mut engine = SessionEngine::new();
    assert!(engine.begin_reflection().unwrap_err().is_precondition_failed());

    let token = engine.start(Some(plan_of(&[1]))).unwrap();
    assert!(engine.begin_reflection().is_err());
    assert_eq!(engine.phase(), Phase::Running);

    tick_n(&mut engine, token, 60);
    engine.begin_reflection().unwrap();
    assert_eq!(engine.phase(), Phase::Reflecting);
    engine.mark_reflected().unwrap();
    assert_eq!(engine.phase(), Phase::Reflected);
    assert!(engine.mark_reflected().is_err());
}

#[test]
fn test_reset_from_every_phase() {
    let plan = plan_of(&[1]);
    for target in [Phase::Running, Phase::Ended, Phase::Reflecting, Phase::Reflected] {
        let mut engine = SessionEngine::new();
        let token = engine.start(Some(Arc::clone(&plan))).unwrap();
        if target != Phase::Running {
            engine.end_early().unwrap();
        }
        if matches!(target, Phase::Reflecting | Phase::Reflected) {
            engine.begin_reflection().unwrap();
        }
        if target == Phase::Reflected {
            engine.mark_reflected().unwrap();
        }
        assert_eq!(engine.phase(), target);

        engine.reset();
        assert_eq!(engine.state(), SessionState::IDLE);
        assert!(engine.plan().is_none());
        assert_eq!(engine.tick(token), TickOutcome::Ignored);
    }
}

#[test]
fn test_pure_tick_outside_running_is_identity() {
    let blocks = plan_of(&[1]).blocks.clone();
    assert_eq!(SessionState::IDLE.tick(&blocks), SessionState::IDLE);

    let ended = SessionState {
        phase: Phase::Ended,
        current_block_index: 0,
        seconds_remaining: 12,
    };
    assert_eq!(ended.tick(&blocks), ended);
    assert_eq!(ended.end(), ended);
}

#[test]
fn test_reflection_draft_requires_mood() {
    let mut capture = ReflectionCapture::new();
    assert!(capture.prepare(Some(Mood::Great), "").is_err());

    capture.open("plan-test");
    let err = capture.prepare(None, "felt slow").unwrap_err();
    assert!(err.is_precondition_failed());
    assert!(capture.record().is_none());
    assert_eq!(capture.draft().unwrap().notes, "felt slow");

    let request = capture.prepare(Some(Mood::Tired), "").unwrap();
    assert_eq!(request.plan_id, "plan-test");
    assert_eq!(request.mood, Mood::Tired);
    assert!(request.notes.is_empty());
}

#[test]
fn test_reflection_open_keeps_single_draft() {
    let mut capture = ReflectionCapture::new();
    capture.open("plan-test");
    capture.draft_mut().unwrap().mood = Some(Mood::Ok);
    capture.open("plan-test");
    assert_eq!(capture.draft().unwrap().mood, Some(Mood::Ok));

    capture.complete(Reflection {
        id: "refl-1".to_string(),
        plan_id: "plan-test".to_string(),
        mood: Mood::Ok,
        notes: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
    });
    assert!(capture.draft().is_none());
    assert_eq!(capture.record().unwrap().id, "refl-1");

    let err = capture.prepare(Some(Mood::Great), "again").unwrap_err();
    assert!(err.to_string().contains("already submitted"));
}

#[tokio::test(start_paused = true)]
async fn test_driver_delivers_armed_token_each_period() {
    let mut engine = SessionEngine::new();
    let token = engine.start(Some(plan_of(&[1]))).unwrap();

    let mut driver = TickDriver::new(Duration::from_secs(1));
    driver.arm(token);
    assert!(driver.is_armed());

    for _ in 0..3 {
        let received = driver.next_tick().await.unwrap();
        assert_eq!(received, token);
        engine.tick(received);
    }
    assert_eq!(engine.state().seconds_remaining, 57);

    driver.disarm();
    assert!(!driver.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_rearming_cancels_previous_timer() {
    let plan = plan_of(&[1]);
    let mut engine = SessionEngine::new();
    let first = engine.start(Some(Arc::clone(&plan))).unwrap();

    let mut driver = TickDriver::new(Duration::from_millis(10));
    driver.arm(first);
    engine.end_early().unwrap();
    let second = engine.start(Some(plan)).unwrap();
    driver.arm(second);

    for _ in 0..5 {
        let received = driver.next_tick().await.unwrap();
        assert_eq!(received, second);
        assert_eq!(engine.tick(received), TickOutcome::Counted);
    }
    assert_eq!(engine.state().seconds_remaining, 55);
}

// ABOUTME: Integration tests for the tokio-driven metronome tick source
// ABOUTME: Uses paused time to check cue timing, restart, stop, and drop behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::RecordingCueSink;
use liftlog::intelligence::tempo::{Cue, TempoMode, TickPosition};
use liftlog::metronome::{CueSink, Metronome};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn metronome() -> (Arc<RecordingCueSink>, Metronome) {
    let sink = Arc::new(RecordingCueSink::default());
    let metronome = Metronome::new(Arc::clone(&sink) as Arc<dyn CueSink>);
    (sink, metronome)
}

#[tokio::test(start_paused = true)]
async fn test_first_cue_is_immediate_then_one_per_second() {
    let (sink, mut metronome) = metronome();
    metronome.start(TempoMode::Basic);
    assert_eq!(sink.tick_count(), 1);
    assert!(metronome.is_running());

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(sink.tick_count(), 4);
    assert!(sink.ticks().iter().all(|tick| tick.position == TickPosition::Free));
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_cues_and_cancels_speech() {
    let (sink, mut metronome) = metronome();
    metronome.start(TempoMode::Basic);
    sleep(Duration::from_millis(2500)).await;
    metronome.stop();

    let count = sink.tick_count();
    assert_eq!(count, 3);
    assert_eq!(sink.cancellations(), 1);
    assert!(!metronome.is_running());

    sleep(Duration::from_secs(5)).await;
    assert_eq!(sink.tick_count(), count);

    metronome.stop();
    assert_eq!(sink.cancellations(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_replaces_previous_run() {
    let (sink, mut metronome) = metronome();
    metronome.start(TempoMode::Basic);
    sleep(Duration::from_millis(1500)).await;
    metronome.start(TempoMode::advanced(2, 4));
    assert_eq!(sink.cancellations(), 1);

    sleep(Duration::from_millis(2500)).await;
    let phases: Vec<Option<usize>> = sink.ticks().iter().map(|tick| tick.phase_index()).collect();
    // Two basic ticks, then the new pattern from its first beat with no interleaving.
    assert_eq!(phases, [None, None, Some(0), Some(0), Some(1)]);
}

#[tokio::test(start_paused = true)]
async fn test_voice_mode_speaks_after_prep_cycle() {
    let (sink, mut metronome) = metronome();
    metronome.start(TempoMode::VoiceCount {
        concentric_seconds: 2,
        max_count: 5,
    });
    sleep(Duration::from_millis(4500)).await;

    let cues: Vec<Cue> = sink.ticks().iter().map(|tick| tick.cue).collect();
    assert!(matches!(cues[0], Cue::Beep { .. }));
    assert!(matches!(cues[1], Cue::Beep { .. }));
    assert_eq!(cues[2], Cue::Speak { count: 1 });
    assert!(matches!(cues[3], Cue::Beep { .. }));
    assert_eq!(cues.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_custom_period_and_drop() {
    let sink = Arc::new(RecordingCueSink::default());
    {
        let mut metronome =
            Metronome::with_period(Arc::clone(&sink) as Arc<dyn CueSink>, Duration::from_millis(250));
        assert_eq!(metronome.period(), Duration::from_millis(250));
        metronome.start(TempoMode::Basic);
        sleep(Duration::from_millis(1100)).await;
    }
    assert_eq!(sink.tick_count(), 5);
    assert_eq!(sink.cancellations(), 1);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(sink.tick_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_falls_back_to_one_second() {
    let sink = Arc::new(RecordingCueSink::default());
    let metronome = Metronome::with_period(sink as Arc<dyn CueSink>, Duration::ZERO);
    assert_eq!(metronome.period(), Duration::from_secs(1));
}

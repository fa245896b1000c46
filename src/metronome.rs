// ABOUTME: Tokio-driven tick source that plays tempo cues at a fixed period
// ABOUTME: Owns at most one background task and cancels it on stop or drop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Metronome
//!
//! Wraps a [`TempoSequencer`] in a periodic tokio task. The first cue is
//! played synchronously by [`Metronome::start`]; later cues are played by
//! the task once per period. Only one task exists at a time and it is
//! always gone after [`Metronome::stop`] returns or the metronome is dropped.
//!
//! Starting requires a running tokio runtime.

use liftlog_core::constants::tempo::TICK_PERIOD;
use liftlog_intelligence::tempo::{TempoMode, TempoSequencer, TempoTick};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Destination for cues: a speaker, a terminal, or a test recorder
pub trait CueSink: Send + Sync {
    /// Play one tick's cue
    fn play(&self, tick: &TempoTick);

    /// Abort any announcement still being spoken
    fn cancel_speech(&self) {}
}

struct Run {
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

/// Periodic driver for a [`TempoSequencer`]
pub struct Metronome {
    sink: Arc<dyn CueSink>,
    period: Duration,
    run: Option<Run>,
}

impl std::fmt::Debug for Metronome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metronome")
            .field("period", &self.period)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl Metronome {
    /// One cue per second into `sink`
    #[must_use]
    pub fn new(sink: Arc<dyn CueSink>) -> Self {
        Self::with_period(sink, TICK_PERIOD)
    }

    /// Cues every `period`; a zero period falls back to one second
    #[must_use]
    pub fn with_period(sink: Arc<dyn CueSink>, period: Duration) -> Self {
        let period = if period.is_zero() { TICK_PERIOD } else { period };
        Self {
            sink,
            period,
            run: None,
        }
    }

    /// Tick period in use
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether a tick task is active
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|run| !run.handle.is_finished())
    }

    /// Stop any current run, then begin `mode` from its first beat
    pub fn start(&mut self, mode: TempoMode) {
        self.stop();

        let mut sequencer = TempoSequencer::new(mode);
        if sequencer.degrades_to_basic() && sequencer.mode() != &TempoMode::Basic {
            info!(mode = ?sequencer.mode(), "Tempo pattern has no playable phases; running basic");
        }
        let pattern = sequencer.mode().pattern_label();
        let first = sequencer.start();
        self.sink.play(&first);

        let (shutdown, mut shutdown_rx) = oneshot::channel();
        let sink = Arc::clone(&self.sink);
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        let Some(tick) = sequencer.tick() else { break };
                        sink.play(&tick);
                    }
                }
            }
            debug!("Metronome task exited");
        });

        info!(
            pattern = %pattern,
            period_ms = self.period.as_millis() as u64,
            "Metronome started"
        );
        self.run = Some(Run {
            shutdown: Some(shutdown),
            handle,
        });
    }

    /// Halt the tick task and cancel speech; no-op when idle
    pub fn stop(&mut self) {
        let Some(mut run) = self.run.take() else {
            return;
        };
        if let Some(shutdown) = run.shutdown.take() {
            // The task may already be gone.
            let _ = shutdown.send(());
        }
        run.handle.abort();
        self.sink.cancel_speech();
        info!("Metronome stopped");
    }
}

impl Drop for Metronome {
    fn drop(&mut self) {
        self.stop();
    }
}

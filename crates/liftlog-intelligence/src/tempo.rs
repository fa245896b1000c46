// ABOUTME: Tempo sequencing state machine for paced repetitions
// ABOUTME: Basic, multi-phase, and voice-count modes advanced by a fixed one-second tick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tempo Sequencer
//!
//! Pure state machine behind the metronome. It owns no timer: whoever drives
//! it calls [`TempoSequencer::start`] once and then [`TempoSequencer::tick`]
//! once per period, and plays whatever [`Cue`] comes back.
//!
//! Phase counters are 1-indexed and a phase lasting N seconds yields exactly
//! N ticks before the next phase begins.

use liftlog_core::constants::tempo::{BASIC_TONE_HZ, CONCENTRIC_TONE_HZ, ECCENTRIC_TONE_HZ};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of a repetition a phase paces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Lowering, muscle lengthening
    Eccentric,
    /// Lifting, muscle shortening
    Concentric,
    /// Hold between the two
    Pause,
}

impl PhaseKind {
    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eccentric => "Eccentric",
            Self::Concentric => "Concentric",
            Self::Pause => "Pause",
        }
    }

    /// Tone frequency for beats in this phase
    #[must_use]
    pub const fn tone_hz(&self) -> u32 {
        match self {
            Self::Eccentric => ECCENTRIC_TONE_HZ,
            Self::Concentric => CONCENTRIC_TONE_HZ,
            Self::Pause => BASIC_TONE_HZ,
        }
    }

    const fn abbreviation(self) -> char {
        match self {
            Self::Eccentric => 'E',
            Self::Concentric => 'C',
            Self::Pause => 'P',
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A named phase and how many seconds it lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoPhase {
    /// What the phase paces
    pub kind: PhaseKind,
    /// Length in whole seconds; zero-length phases are skipped
    pub seconds: u32,
}

impl TempoPhase {
    /// Create a phase
    #[must_use]
    pub const fn new(kind: PhaseKind, seconds: u32) -> Self {
        Self { kind, seconds }
    }
}

/// How the sequencer paces beats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TempoMode {
    /// One beep per second, no phases
    #[default]
    Basic,
    /// Cycle through the phases in order, wrapping after the last
    Advanced {
        /// Phases in order
        phases: Vec<TempoPhase>,
    },
    /// Speak the repetition number, then beep once per concentric second
    VoiceCount {
        /// Beeps after each announcement
        concentric_seconds: u32,
        /// Highest number spoken before wrapping back to 1
        max_count: u32,
    },
}

impl TempoMode {
    /// Two-phase eccentric/concentric pattern
    #[must_use]
    pub fn advanced(eccentric_seconds: u32, concentric_seconds: u32) -> Self {
        Self::Advanced {
            phases: vec![
                TempoPhase::new(PhaseKind::Eccentric, eccentric_seconds),
                TempoPhase::new(PhaseKind::Concentric, concentric_seconds),
            ],
        }
    }

    /// Four-phase pattern with a pause after each movement
    #[must_use]
    pub fn with_pauses(eccentric: u32, bottom_pause: u32, concentric: u32, top_pause: u32) -> Self {
        Self::Advanced {
            phases: vec![
                TempoPhase::new(PhaseKind::Eccentric, eccentric),
                TempoPhase::new(PhaseKind::Pause, bottom_pause),
                TempoPhase::new(PhaseKind::Concentric, concentric),
                TempoPhase::new(PhaseKind::Pause, top_pause),
            ],
        }
    }

    /// Short label such as `2E-4C`; basic mode reads `60 BPM`
    #[must_use]
    pub fn pattern_label(&self) -> String {
        match self {
            Self::Basic => "60 BPM".to_owned(),
            Self::Advanced { phases } => phases
                .iter()
                .map(|phase| format!("{}{}", phase.seconds, phase.kind.abbreviation()))
                .collect::<Vec<_>>()
                .join("-"),
            Self::VoiceCount {
                concentric_seconds,
                max_count,
            } => format!("{concentric_seconds}C x{max_count}"),
        }
    }
}

/// What to play on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cue {
    /// Short tone
    Beep {
        /// Tone frequency
        frequency_hz: u32,
    },
    /// Spoken repetition number
    Speak {
        /// Number to say
        count: u32,
    },
}

/// Where in the pattern a tick landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TickPosition {
    /// Basic mode has no structure
    Free,
    /// Inside an advanced-mode phase
    Phase {
        /// Index into the configured phase list
        index: usize,
        /// Kind of that phase
        kind: PhaseKind,
        /// 1-based second within the phase
        count: u32,
        /// Phase length
        of: u32,
    },
    /// Inside a voice-count cycle
    Voice {
        /// Repetition number; 0 is the silent warm-up cycle
        cycle: u32,
        /// 0 for the announcement, then 1-based beeps
        beat: u32,
    },
}

/// One emitted tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoTick {
    /// Sound to play
    pub cue: Cue,
    /// Position in the pattern
    pub position: TickPosition,
}

impl TempoTick {
    /// Advanced-mode phase index, if any
    #[must_use]
    pub const fn phase_index(&self) -> Option<usize> {
        match self.position {
            TickPosition::Phase { index, .. } => Some(index),
            _ => None,
        }
    }

    fn basic() -> Self {
        Self {
            cue: Cue::Beep {
                frequency_hz: BASIC_TONE_HZ,
            },
            position: TickPosition::Free,
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Stopped,
    Basic,
    Advanced {
        phases: Vec<TempoPhase>,
        index: usize,
        count: u32,
    },
    Voice {
        beats: u32,
        max_count: u32,
        cycle: u32,
        beat: u32,
    },
}

/// Tempo state machine
#[derive(Debug, Clone)]
pub struct TempoSequencer {
    mode: TempoMode,
    state: State,
}

impl TempoSequencer {
    /// Create a stopped sequencer for `mode`
    #[must_use]
    pub const fn new(mode: TempoMode) -> Self {
        Self {
            mode,
            state: State::Stopped,
        }
    }

    /// Configured mode
    #[must_use]
    pub const fn mode(&self) -> &TempoMode {
        &self.mode
    }

    /// Replace the mode; takes effect on the next [`Self::start`]
    pub fn set_mode(&mut self, mode: TempoMode) {
        self.mode = mode;
    }

    /// Whether ticks are being produced
    #[must_use]
    pub const fn is_running(&self) -> bool {
        !matches!(self.state, State::Stopped)
    }

    /// Whether the configured mode will actually run as basic
    #[must_use]
    pub fn degrades_to_basic(&self) -> bool {
        match &self.mode {
            TempoMode::Basic => true,
            TempoMode::Advanced { phases } => phases.iter().all(|phase| phase.seconds == 0),
            TempoMode::VoiceCount {
                concentric_seconds, ..
            } => *concentric_seconds == 0,
        }
    }

    /// Reset to the beginning of the pattern and return the first tick
    pub fn start(&mut self) -> TempoTick {
        if self.degrades_to_basic() {
            self.state = State::Basic;
            return TempoTick::basic();
        }
        match &self.mode {
            TempoMode::Advanced { phases } => {
                let index = next_active_phase(phases, phases.len() - 1);
                let phases = phases.clone();
                let tick = phase_tick(&phases, index, 1);
                self.state = State::Advanced {
                    phases,
                    index,
                    count: 1,
                };
                tick
            }
            TempoMode::VoiceCount {
                concentric_seconds,
                max_count,
            } => {
                self.state = State::Voice {
                    beats: *concentric_seconds,
                    max_count: (*max_count).max(1),
                    cycle: 0,
                    beat: 1,
                };
                voice_beep(0, 1)
            }
            TempoMode::Basic => {
                self.state = State::Basic;
                TempoTick::basic()
            }
        }
    }

    /// Advance one period; `None` when stopped
    pub fn tick(&mut self) -> Option<TempoTick> {
        match &mut self.state {
            State::Stopped => None,
            State::Basic => Some(TempoTick::basic()),
            State::Advanced {
                phases,
                index,
                count,
            } => {
                *count += 1;
                if *count > phases[*index].seconds {
                    *index = next_active_phase(phases, *index);
                    *count = 1;
                }
                Some(phase_tick(phases, *index, *count))
            }
            State::Voice {
                beats,
                max_count,
                cycle,
                beat,
            } => {
                *beat += 1;
                if *beat > *beats {
                    *cycle = if *cycle >= *max_count { 1 } else { *cycle + 1 };
                    *beat = 0;
                    return Some(TempoTick {
                        cue: Cue::Speak { count: *cycle },
                        position: TickPosition::Voice {
                            cycle: *cycle,
                            beat: 0,
                        },
                    });
                }
                Some(voice_beep(*cycle, *beat))
            }
        }
    }

    /// Halt; further ticks return `None` until restarted
    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }
}

/// First phase after `after` (wrapping) with a non-zero length.
///
/// Callers guarantee at least one such phase exists.
fn next_active_phase(phases: &[TempoPhase], after: usize) -> usize {
    let len = phases.len();
    (1..=len)
        .map(|offset| (after + offset) % len)
        .find(|&index| phases[index].seconds > 0)
        .unwrap_or(0)
}

fn phase_tick(phases: &[TempoPhase], index: usize, count: u32) -> TempoTick {
    let phase = phases[index];
    TempoTick {
        cue: Cue::Beep {
            frequency_hz: phase.kind.tone_hz(),
        },
        position: TickPosition::Phase {
            index,
            kind: phase.kind,
            count,
            of: phase.seconds,
        },
    }
}

const fn voice_beep(cycle: u32, beat: u32) -> TempoTick {
    TempoTick {
        cue: Cue::Beep {
            frequency_hz: CONCENTRIC_TONE_HZ,
        },
        position: TickPosition::Voice { cycle, beat },
    }
}

// ABOUTME: Terminal cue sink for the metronome
// ABOUTME: Prints one line per tick, with the terminal bell for beeps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::intelligence::tempo::{Cue, TempoTick, TickPosition};
use liftlog::metronome::CueSink;

/// Writes cues to stdout
pub struct ConsoleCueSink;

impl CueSink for ConsoleCueSink {
    fn play(&self, tick: &TempoTick) {
        let position = match tick.position {
            TickPosition::Free => String::new(),
            TickPosition::Phase {
                kind, count, of, ..
            } => format!("{kind:<10} {count}/{of}"),
            TickPosition::Voice { cycle: 0, beat } => format!("get ready  {beat}"),
            TickPosition::Voice { cycle, beat } => format!("rep {cycle:<6} {beat}"),
        };
        match tick.cue {
            Cue::Beep { frequency_hz } => println!("\x07beep {frequency_hz:>4} Hz  {position}"),
            Cue::Speak { count } => println!(">> {count}"),
        }
    }
}

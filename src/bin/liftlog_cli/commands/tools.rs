// ABOUTME: Training tool commands for liftlog-cli
// ABOUTME: Plate calculator and tempo metronome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::constants::tempo::{
    DEFAULT_CONCENTRIC_SECONDS, DEFAULT_ECCENTRIC_SECONDS, DEFAULT_VOICE_MAX_COUNT,
};
use liftlog::errors::{AppError, AppResult};
use liftlog::intelligence::plates::{default_plates, PlateInventory};
use liftlog::intelligence::TempoMode;
use liftlog::metronome::Metronome;
use std::sync::Arc;
use std::time::Duration;

use crate::helpers::cues::ConsoleCueSink;
use crate::helpers::display::print_plate_solution;
use crate::App;

/// Solve and print a plate breakdown
pub fn plates(app: &App, target: f64, bar: Option<f64>, save: bool) -> AppResult<()> {
    if !target.is_finite() || target < 0.0 {
        return Err(AppError::invalid_input("Target weight must be a number >= 0"));
    }
    let mut inventory = app.plate_settings.load_or(PlateInventory {
        bar_weight: app.config.default_bar_weight,
        plates: default_plates(),
    })?;
    if let Some(bar) = bar {
        if !bar.is_finite() || bar < 0.0 {
            return Err(AppError::invalid_input("Bar weight must be a number >= 0"));
        }
        inventory.bar_weight = bar;
        if save {
            app.plate_settings.save(&inventory)?;
        }
    }

    let solution = inventory.solve(target);
    print_plate_solution(target, inventory.bar_weight, &solution);
    Ok(())
}

/// Mode from the tempo flags; no flags means basic mode
pub fn tempo_mode(
    eccentric: Option<u32>,
    concentric: Option<u32>,
    voice: Option<u32>,
    max_count: Option<u32>,
) -> TempoMode {
    if let Some(concentric_seconds) = voice {
        return TempoMode::VoiceCount {
            concentric_seconds,
            max_count: max_count.unwrap_or(DEFAULT_VOICE_MAX_COUNT),
        };
    }
    match (eccentric, concentric) {
        (None, None) => TempoMode::Basic,
        (eccentric, concentric) => TempoMode::advanced(
            eccentric.unwrap_or(DEFAULT_ECCENTRIC_SECONDS),
            concentric.unwrap_or(DEFAULT_CONCENTRIC_SECONDS),
        ),
    }
}

/// Play the metronome for `seconds`
pub async fn tempo(app: &App, mode: TempoMode, seconds: u64) {
    println!("Tempo {} for {seconds}s", mode.pattern_label());
    let mut metronome = Metronome::with_period(Arc::new(ConsoleCueSink), app.config.tempo_tick);
    metronome.start(mode);
    tokio::time::sleep(Duration::from_secs(seconds)).await;
    metronome.stop();
    println!("Tempo stopped");
}

// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Plate defaults, tempo defaults, storage keys, and export metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the CLI
    pub const LIFTLOG_CLI: &str = "liftlog-cli";
}

/// Keys under which state is written to the key-value storage medium
pub mod storage_keys {
    /// Plans, active plan, exercise library, and workout history
    pub const WORKOUT_STORAGE: &str = "workout-storage";
    /// Plate calculator bar weight
    pub const PLATE_BAR_WEIGHT: &str = "plateCalc-barbellWeight";
    /// Plate calculator inventory
    pub const PLATE_INVENTORY: &str = "plateCalc-plates";
}

/// Backup document metadata
pub mod export {
    /// Version string written into every export document
    pub const FORMAT_VERSION: &str = "1.0";
    /// Prefix of the suggested backup file name
    pub const FILE_PREFIX: &str = "liftlog-backup";
}

/// Plate calculator defaults
pub mod plates {
    /// Standard Olympic barbell in kg
    pub const DEFAULT_BAR_WEIGHT: f64 = 20.0;

    /// Residual per side below which a decomposition counts as exact
    pub const FEASIBILITY_TOLERANCE: f64 = 0.01;

    /// Default inventory as (denomination kg, pairs available)
    pub const DEFAULT_PLATES: [(f64, u32); 7] = [
        (25.0, 4),
        (20.0, 4),
        (15.0, 4),
        (10.0, 4),
        (5.0, 4),
        (2.5, 4),
        (1.25, 4),
    ];
}

/// Metronome defaults
pub mod tempo {
    use std::time::Duration;

    /// One cue per second
    pub const TICK_PERIOD: Duration = Duration::from_secs(1);
    /// Default eccentric phase length in seconds
    pub const DEFAULT_ECCENTRIC_SECONDS: u32 = 2;
    /// Default concentric phase length in seconds
    pub const DEFAULT_CONCENTRIC_SECONDS: u32 = 4;
    /// Default highest spoken repetition before wrapping to 1
    pub const DEFAULT_VOICE_MAX_COUNT: u32 = 10;

    /// Tone used in basic mode and for pauses
    pub const BASIC_TONE_HZ: u32 = 1000;
    /// Tone used for eccentric beats
    pub const ECCENTRIC_TONE_HZ: u32 = 600;
    /// Tone used for concentric beats
    pub const CONCENTRIC_TONE_HZ: u32 = 800;
}

/// Identifier prefixes for generated ids
pub mod id_prefixes {
    /// Plan ids
    pub const PLAN: &str = "plan";
    /// Workout log ids
    pub const WORKOUT: &str = "workout";
    /// Exercise library ids
    pub const LIBRARY: &str = "lib";
}

// ABOUTME: Training algorithms for the LiftLog workout planner
// ABOUTME: Plate decomposition, tempo sequencing, one-rep-max estimation, and progress analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Intelligence
//!
//! Stateless or self-contained computations consulted by the application
//! independently of the workout store. Nothing in this crate performs I/O
//! or owns a timer.

/// Strength estimation formulas
pub mod algorithms;

/// Greedy barbell plate decomposition
pub mod plates;

/// Workout statistics and per-exercise progress series
pub mod progress;

/// Tempo phase state machine
pub mod tempo;

pub use algorithms::OneRepMaxAlgorithm;
pub use plates::{PlateDenomination, PlateInventory, PlateSolution};
pub use progress::{ProgressMetric, ProgressPoint, WorkoutSummary};
pub use tempo::{Cue, PhaseKind, TempoMode, TempoPhase, TempoSequencer, TempoTick, TickPosition};

// ABOUTME: Training algorithms re-exported from liftlog-intelligence
// ABOUTME: Plate solver, tempo sequencer, one-rep max, and progress series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_intelligence::*;

pub use liftlog_intelligence::{algorithms, plates, progress, tempo};

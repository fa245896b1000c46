// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for liftlog-cli
// ABOUTME: Provides terminal cue output and display formatting utilities

pub mod cues;
pub mod display;

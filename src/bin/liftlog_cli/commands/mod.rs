// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for liftlog-cli
// ABOUTME: Provides plan, exercise, library, workout, tool, and backup commands

pub mod data;
pub mod exercise;
pub mod library;
pub mod plan;
pub mod tools;
pub mod workout;

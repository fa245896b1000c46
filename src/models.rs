// ABOUTME: Domain models re-exported from liftlog-core
// ABOUTME: Plans, exercises, library items, and workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::models::*;

// ABOUTME: Unified error types re-exported from liftlog-core
// ABOUTME: Preserves crate::errors paths for the store, persistence, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::errors::*;

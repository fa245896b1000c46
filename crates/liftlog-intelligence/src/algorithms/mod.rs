// ABOUTME: Strength estimation algorithms with selectable formulas
// ABOUTME: Contains OneRepMaxAlgorithm for estimating a single-repetition maximum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-rep-max estimation formulas
pub mod one_rep_max;

pub use one_rep_max::OneRepMaxAlgorithm;

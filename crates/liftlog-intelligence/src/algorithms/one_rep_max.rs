// ABOUTME: One-rep-max estimation from a weight x reps pair
// ABOUTME: Implements Epley, Brzycki, and Lombardi formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reps above which Brzycki's denominator collapses
const BRZYCKI_MAX_REPS: u32 = 36;

/// One-rep-max estimation algorithm
///
/// - `Epley`: weight x (1 + reps/30), the common default
/// - `Brzycki`: weight x 36 / (37 - reps), tighter for low rep ranges
/// - `Lombardi`: weight x reps^0.10, flatter curve for high reps
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Lombardi, V.P. (1989). *Beginning Weight Training*. W.C. Brown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Epley formula: weight x (1 + reps / 30)
    #[default]
    Epley,

    /// Brzycki formula: weight x 36 / (37 - reps)
    ///
    /// Undefined at 37 reps; capped at 36
    Brzycki,

    /// Lombardi formula: weight x reps ^ 0.10
    Lombardi,
}

impl OneRepMaxAlgorithm {
    /// Estimate the one-rep max for a set of `reps` at `weight`.
    ///
    /// Returns 0 for bodyweight (`weight <= 0`) or zero-rep sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use liftlog_intelligence::algorithms::OneRepMaxAlgorithm;
    /// let one_rm = OneRepMaxAlgorithm::Epley.estimate(90.0, 3);
    /// assert!((one_rm - 99.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        if reps == 0 || weight <= 0.0 {
            return 0.0;
        }
        let reps_f64 = f64::from(reps);

        match self {
            Self::Epley => weight * (1.0 + reps_f64 / 30.0),
            Self::Brzycki => {
                let capped = f64::from(reps.min(BRZYCKI_MAX_REPS));
                weight * 36.0 / (37.0 - capped)
            }
            Self::Lombardi => weight * reps_f64.powf(0.10),
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Brzycki => "weight x 36 / (37 - reps)",
            Self::Lombardi => "weight x reps ^ 0.10",
        }
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "lombardi" => Ok(Self::Lombardi),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: '{other}'. Valid options: epley, brzycki, lombardi"
            ))),
        }
    }
}

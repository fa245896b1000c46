// ABOUTME: Barbell plate decomposition for a target total weight
// ABOUTME: Greedy largest-first fill of one sleeve, bounded by the available plate counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plate Solver
//!
//! Loads one sleeve of the bar, largest denomination first, taking as many
//! plates of each size as fit and are available before moving to the next
//! size down. This is a greedy fill, not an exhaustive search: with unusual
//! inventories it can miss a combination that would have worked.

use liftlog_core::constants::plates::{DEFAULT_BAR_WEIGHT, DEFAULT_PLATES, FEASIBILITY_TOLERANCE};
use serde::{Deserialize, Serialize};

/// One plate size and how many of it are available (or used) per side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateDenomination {
    /// Plate weight in kg
    pub weight: f64,
    /// Count available per side, or count used in a solution
    pub count: u32,
}

impl PlateDenomination {
    /// Create a denomination entry
    #[must_use]
    pub const fn new(weight: f64, count: u32) -> Self {
        Self { weight, count }
    }

    /// Weight contributed by `count` plates of this size
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.weight * f64::from(self.count)
    }
}

/// Outcome of [`solve`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateSolution {
    /// Plates to load on each side, largest first
    pub plates: Vec<PlateDenomination>,
    /// Bar plus both sides as actually loaded
    pub total_weight: f64,
    /// Whether the target was hit within tolerance
    pub possible: bool,
}

impl PlateSolution {
    /// Weight of the plates on one side
    #[must_use]
    pub fn per_side_weight(&self) -> f64 {
        self.plates.iter().map(PlateDenomination::subtotal).sum()
    }

    /// Achieved minus requested total
    #[must_use]
    pub fn difference(&self, target_weight: f64) -> f64 {
        self.total_weight - target_weight
    }

    /// Number of plates used on one side
    #[must_use]
    pub fn plate_count(&self) -> u32 {
        self.plates.iter().map(|plate| plate.count).sum()
    }
}

/// Compute a per-side plate breakdown for `target_weight`.
///
/// A target at or below the bar weight is the bar alone and always
/// possible. Otherwise half of the remaining weight is filled greedily and
/// the result is possible when the leftover is below
/// [`FEASIBILITY_TOLERANCE`]. Denominations with a non-positive weight or
/// zero count are ignored; `plates` is never modified.
#[must_use]
pub fn solve(target_weight: f64, bar_weight: f64, plates: &[PlateDenomination]) -> PlateSolution {
    let plate_weight = target_weight - bar_weight;
    if plate_weight <= 0.0 {
        return PlateSolution {
            plates: Vec::new(),
            total_weight: bar_weight,
            possible: true,
        };
    }

    let mut sorted: Vec<PlateDenomination> = plates
        .iter()
        .copied()
        .filter(|plate| plate.weight > 0.0 && plate.count > 0)
        .collect();
    sorted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut remaining = plate_weight / 2.0;
    let mut used = Vec::new();
    for plate in sorted {
        if remaining < plate.weight {
            continue;
        }
        let fits = (remaining / plate.weight).floor() as u32;
        let count = fits.min(plate.count);
        if count > 0 {
            let entry = PlateDenomination::new(plate.weight, count);
            remaining -= entry.subtotal();
            used.push(entry);
        }
    }

    let per_side: f64 = used.iter().map(PlateDenomination::subtotal).sum();
    PlateSolution {
        plates: used,
        total_weight: per_side.mul_add(2.0, bar_weight),
        possible: remaining.abs() < FEASIBILITY_TOLERANCE,
    }
}

/// User-configurable bar and plate inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateInventory {
    /// Empty bar weight in kg
    pub bar_weight: f64,
    /// Available plates per side
    pub plates: Vec<PlateDenomination>,
}

impl Default for PlateInventory {
    fn default() -> Self {
        Self {
            bar_weight: DEFAULT_BAR_WEIGHT,
            plates: default_plates(),
        }
    }
}

impl PlateInventory {
    /// Change how many plates of `weight` are available; unknown sizes are ignored
    pub fn set_count(&mut self, weight: f64, count: u32) {
        for plate in &mut self.plates {
            if (plate.weight - weight).abs() < f64::EPSILON {
                plate.count = count;
            }
        }
    }

    /// Solve against this inventory
    #[must_use]
    pub fn solve(&self, target_weight: f64) -> PlateSolution {
        solve(target_weight, self.bar_weight, &self.plates)
    }
}

/// The standard 25 kg to 1.25 kg set, four of each
#[must_use]
pub fn default_plates() -> Vec<PlateDenomination> {
    DEFAULT_PLATES
        .iter()
        .map(|&(weight, count)| PlateDenomination::new(weight, count))
        .collect()
}

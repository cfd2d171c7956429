// ABOUTME: Mutable list of healthy-living tips
// ABOUTME: Appends random picks from a fixed pool and removes from the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_core::constants::{defaults, HEALTHY_TIPS};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Ordered tip list shown on the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TipList {
    entries: Vec<String>,
}

impl TipList {
    /// The three seed tips
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: defaults::SEED_TIPS.iter().map(|&tip| tip.to_owned()).collect(),
        }
    }

    /// Append a tip drawn uniformly from the pool; duplicates are allowed
    pub fn append_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let tip = HEALTHY_TIPS.choose(rng).copied().unwrap_or(HEALTHY_TIPS[0]);
        self.entries.push(tip.to_owned());
        tip
    }

    /// Remove the last tip; `false` when the list was already empty
    pub fn remove_last(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Current tips in display order
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of tips
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TipList {
    fn default() -> Self {
        Self::seeded()
    }
}

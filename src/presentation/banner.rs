// ABOUTME: Motivational banner text with a toggleable emphasis state
// ABOUTME: Text is replaced by random picks from a fixed motivation pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_core::constants::{defaults, MOTIVATIONS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Banner shown above the tip list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotivationBanner {
    text: String,
    emphasized: bool,
}

impl MotivationBanner {
    /// Flip emphasis and return the new state
    pub fn toggle_emphasis(&mut self) -> bool {
        self.emphasized = !self.emphasized;
        self.emphasized
    }

    /// Replace the text with a random motivation
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let text = MOTIVATIONS.choose(rng).copied().unwrap_or(MOTIVATIONS[0]);
        text.clone_into(&mut self.text);
        &self.text
    }

    /// Banner text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text is emphasized
    #[must_use]
    pub const fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

impl Default for MotivationBanner {
    fn default() -> Self {
        Self {
            text: defaults::MOTIVATION.to_owned(),
            emphasized: defaults::EMPHASIS,
        }
    }
}

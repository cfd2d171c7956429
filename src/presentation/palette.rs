// ABOUTME: Background color palette with a cyclic selection index
// ABOUTME: Each advance moves to the next color, wrapping after the last
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_core::constants::{defaults, BACKGROUND_PALETTE};

/// Selected background color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPalette {
    index: usize,
}

impl BackgroundPalette {
    /// Advance to the next color and return its index
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % BACKGROUND_PALETTE.len();
        self.index
    }

    /// Current index into the palette
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current color value
    #[must_use]
    pub const fn color(&self) -> &'static str {
        BACKGROUND_PALETTE[self.index]
    }
}

impl Default for BackgroundPalette {
    fn default() -> Self {
        Self {
            index: defaults::BACKGROUND_INDEX,
        }
    }
}

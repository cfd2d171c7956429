// ABOUTME: Presentation adapter state for the Health Tracker Panel
// ABOUTME: Tip list, background palette, motivational banner, and output panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presentation Adapter
//!
//! Everything a host UI draws besides the health numbers themselves. This
//! layer holds cosmetic state only; thresholds and calculations live in
//! `health_metrics`, and turning state into text or JSON lives in
//! `formatters`.

/// Motivational banner text and emphasis
pub mod banner;
/// Background color cycling
pub mod palette;
/// Progress indicators
pub mod progress;
/// Healthy tip list
pub mod tips;

pub use banner::MotivationBanner;
pub use palette::BackgroundPalette;
pub use progress::{progress_for, ProgressIndicator, ProgressMetric};
pub use tips::TipList;

use serde::Serialize;

/// Output regions of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRegion {
    /// Latest metrics summary
    Status,
    /// Latest assessment, BMI, or calorie message
    Function,
    /// Latest weekly report summary
    Report,
}

/// Last message written to each output region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputPanels {
    /// Status region
    pub status: Option<String>,
    /// Function region
    pub function: Option<String>,
    /// Report region
    pub report: Option<String>,
}

impl OutputPanels {
    /// Replace the text of one region
    pub fn write(&mut self, region: PanelRegion, text: impl Into<String>) {
        let slot = match region {
            PanelRegion::Status => &mut self.status,
            PanelRegion::Function => &mut self.function,
            PanelRegion::Report => &mut self.report,
        };
        *slot = Some(text.into());
    }

    /// Empty every region
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// All cosmetic state owned by the panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationState {
    /// Healthy tip list
    pub tips: TipList,
    /// Background selection
    pub palette: BackgroundPalette,
    /// Motivational banner
    pub banner: MotivationBanner,
    /// Output regions
    pub panels: OutputPanels,
}

impl PresentationState {
    /// Restore seed tips, first color, default banner, and empty panels
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

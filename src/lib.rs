// ABOUTME: Main library entry point for the Health Tracker Panel
// ABOUTME: Wires the state store, metric algorithms, presentation state, and command panel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Tracker Panel
//!
//! A small health-tracking panel: daily water, steps, and sleep with a derived
//! healthiness flag, BMI and calorie estimates, a random weekly report, and a
//! handful of cosmetic toggles (tips, background, motivational banner).
//!
//! ## Architecture
//!
//! - **`health_core`**: errors, constants, and the data model
//! - **`health_metrics`**: pure assessments, BMI, calories, weekly report
//! - **state**: the owned health record and body inputs
//! - **presentation**: progress bars, tips, palette, banner, output regions
//! - **panel**: the [`panel::HealthPanel`] command executor
//! - **formatters**: text and JSON rendering of command results
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_tracker_panel::config::PanelConfig;
//! use health_tracker_panel::panel::{Command, CommandOutput, HealthPanel};
//!
//! let mut panel = HealthPanel::new(PanelConfig::default());
//! panel.execute(Command::update_metrics("8", "10000", "7"));
//! if let CommandOutput::BmiComputed { display, .. } = panel.execute(Command::compute_bmi(70.0, 1.75)) {
//!     println!("{display}");
//! }
//! ```

pub use health_core::{constants, errors, models};
pub use health_metrics as metrics;

/// Environment configuration
pub mod config;

/// Text and JSON output formatting
pub mod formatters;

/// Permissive numeric input parsing
pub mod input;

/// Structured logging setup
pub mod logging;

/// Command panel and its outputs
pub mod panel;

/// Cosmetic panel state
pub mod presentation;

/// Health record state store
pub mod state;

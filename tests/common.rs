// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and deterministic panel construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_tracker_panel`

use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::panel::{Command, CommandOutput, HealthPanel};
use std::env;
use std::sync::Once;

/// Seed used by tests that need reproducible randomness
pub const TEST_SEED: u64 = 20_250_101;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Panel with default configuration and a fixed seed
pub fn seeded_panel() -> HealthPanel {
    seeded_panel_with(PanelConfig::default())
}

/// Panel with the given configuration and a fixed seed
pub fn seeded_panel_with(config: PanelConfig) -> HealthPanel {
    init_test_logging();
    HealthPanel::new(config.with_seed(TEST_SEED))
}

/// Parse and execute one text command
pub fn run(panel: &mut HealthPanel, line: &str) -> CommandOutput {
    let command: Command = line.parse().unwrap_or_else(|e| panic!("bad command {line:?}: {e}"));
    panel.execute(command)
}

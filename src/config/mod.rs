// ABOUTME: Configuration management module for the Health Tracker Panel
// ABOUTME: Environment-driven calorie profile, randomness seed, and output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Configuration is environment-only: there is no config file. CLI flags are
//! applied on top of [`PanelConfig::from_env`] by the binary.

/// Environment variable loading
pub mod environment;

pub use environment::PanelConfig;

// ABOUTME: Core types and constants for the Health Tracker Panel
// ABOUTME: Foundation crate with error handling, health models, and panel constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Core
//!
//! Foundation crate providing shared types and constants for the Health Tracker
//! Panel. It changes infrequently so the algorithm crate and the panel crate can
//! compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Goals, thresholds, defaults, and the fixed tip/palette/motivation pools
//! - **models**: `HealthRecord`, `BodyMeasurements`, and `WeeklySample`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core health data models
pub mod models;

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for health-tracker
// ABOUTME: Provides the interactive session and one-shot command runners

pub mod oneshot;
pub mod session;

// ABOUTME: The Health Tracker Panel: one owned state object executing the command table
// ABOUTME: Routes commands through the state store, metric algorithms, and presentation state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Tracker Panel
//!
//! [`HealthPanel`] owns the state store, the presentation state, and the RNG
//! used for tips, motivations, and weekly samples. Every command goes through
//! [`HealthPanel::execute`], which takes `&mut self`; hosts that share a panel
//! across threads wrap it in a single owner.
//!
//! Commands never fail. Bad numeric input is coerced to zero by the state
//! store, and an invalid BMI input becomes [`CommandOutput::BmiInvalid`].

/// Command enum and text syntax
pub mod commands;
/// Command results and panel snapshot
pub mod output;

pub use commands::{BodyInputs, Command, COMMAND_NAMES};
pub use output::{CommandOutput, PanelSnapshot};

use crate::config::PanelConfig;
use crate::presentation::{progress_for, PanelRegion, PresentationState};
use crate::state::StateStore;
use chrono::Utc;
use health_core::models::BodyMeasurements;
use health_metrics::{
    compute_bmi, describe_sleep, describe_steps, describe_water, estimate_daily_calories,
    generate_weekly_sample, weekly_report,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Health tracker session state and command executor
#[derive(Debug)]
pub struct HealthPanel<R = ChaCha8Rng> {
    session_id: Uuid,
    config: PanelConfig,
    store: StateStore,
    ui: PresentationState,
    rng: R,
}

impl HealthPanel<ChaCha8Rng> {
    /// Create a panel seeded from the configuration, or from OS entropy
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        let rng = config
            .rng_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> HealthPanel<R> {
    /// Create a panel with a caller-supplied RNG
    ///
    /// The status panel starts out showing the default metrics summary.
    pub fn with_rng(config: PanelConfig, rng: R) -> Self {
        let mut panel = Self {
            session_id: Uuid::new_v4(),
            config,
            store: StateStore::new(),
            ui: PresentationState::default(),
            rng,
        };
        panel.refresh_status();
        info!(
            session_id = %panel.session_id,
            seeded = config.rng_seed.is_some(),
            "Health panel session started"
        );
        panel
    }

    /// Session identifier used in log events
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Read-only state store
    #[must_use]
    pub const fn store(&self) -> &StateStore {
        &self.store
    }

    /// Read-only presentation state
    #[must_use]
    pub const fn presentation(&self) -> &PresentationState {
        &self.ui
    }

    /// Execute one command and return its result
    pub fn execute(&mut self, command: Command) -> CommandOutput {
        let name = command.name();
        debug!(session_id = %self.session_id, command = name, "Executing panel command");

        let output = match command {
            Command::UpdateMetrics {
                water,
                steps,
                sleep,
            } => {
                self.store.set_from_inputs(&water, &steps, &sleep);
                self.metrics_output()
            }
            Command::TrackWater => {
                CommandOutput::WaterAssessed(describe_water(self.store.current_snapshot().daily_water_cups()))
            }
            Command::CheckSteps => {
                CommandOutput::StepsAssessed(describe_steps(self.store.current_snapshot().daily_steps_count()))
            }
            Command::EvaluateSleep => {
                CommandOutput::SleepAssessed(describe_sleep(self.store.current_snapshot().sleep_hours()))
            }
            Command::ComputeBmi { inputs } => {
                let body = self.body_for(inputs.as_ref());
                Self::bmi_output(body)
            }
            Command::EstimateCalories { inputs } => {
                let body = self.body_for(inputs.as_ref());
                let profile = self.config.calorie_profile;
                CommandOutput::CaloriesEstimated {
                    weight_kg: body.weight_kg,
                    height_m: body.height_m,
                    profile,
                    kcal: estimate_daily_calories(body.weight_kg, body.height_m, &profile),
                }
            }
            Command::GenerateWeeklyReport => {
                let sample = generate_weekly_sample(&mut self.rng);
                let report = weekly_report(&sample);
                CommandOutput::WeeklyReportGenerated {
                    generated_at: Utc::now(),
                    sample,
                    report,
                }
            }
            Command::AddRandomTip => {
                let tip = self.ui.tips.append_random(&mut self.rng).to_owned();
                CommandOutput::TipAdded {
                    tip,
                    total: self.ui.tips.len(),
                }
            }
            Command::RemoveLastTip => CommandOutput::TipRemoved {
                removed: self.ui.tips.remove_last(),
                remaining: self.ui.tips.len(),
            },
            Command::CycleBackground => {
                let index = self.ui.palette.advance();
                CommandOutput::BackgroundCycled {
                    index,
                    color: self.ui.palette.color(),
                }
            }
            Command::ToggleEmphasis => CommandOutput::EmphasisToggled {
                emphasized: self.ui.banner.toggle_emphasis(),
            },
            Command::ChangeMotivation => CommandOutput::MotivationChanged {
                text: self.ui.banner.randomize(&mut self.rng).to_owned(),
            },
            Command::Snapshot => CommandOutput::Snapshot(self.snapshot()),
            Command::ResetAll { confirmed: false } => {
                warn!(session_id = %self.session_id, "Reset requested without confirmation");
                CommandOutput::ResetDeclined
            }
            Command::ResetAll { confirmed: true } => {
                self.store.reset();
                self.ui.reset();
                self.refresh_status();
                info!(session_id = %self.session_id, "Panel reset to defaults");
                CommandOutput::Reset(self.snapshot())
            }
        };

        self.write_panels(&output);
        debug!(session_id = %self.session_id, command = name, "Panel command completed");
        output
    }

    /// Full read-only view of the panel
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        let record = self.store.current_snapshot();
        PanelSnapshot {
            record,
            body: self.store.body(),
            progress: progress_for(&record),
            tips: self.ui.tips.clone(),
            background_index: self.ui.palette.index(),
            background_color: self.ui.palette.color(),
            motivation: self.ui.banner.text().to_owned(),
            emphasized: self.ui.banner.is_emphasized(),
            panels: self.ui.panels.clone(),
        }
    }

    /// Metrics output for the stored record; does not touch the panels
    fn metrics_output(&self) -> CommandOutput {
        let record = self.store.current_snapshot();
        CommandOutput::MetricsUpdated {
            record,
            progress: progress_for(&record),
            summary: record.summary(),
        }
    }

    /// Show the stored record's summary in the status panel
    fn refresh_status(&mut self) {
        let output = self.metrics_output();
        self.write_panels(&output);
    }

    fn body_for(&mut self, inputs: Option<&BodyInputs>) -> BodyMeasurements {
        match inputs {
            Some(inputs) => self.store.set_body_inputs(&inputs.weight, &inputs.height),
            None => self.store.body(),
        }
    }

    fn bmi_output(body: BodyMeasurements) -> CommandOutput {
        match compute_bmi(body.weight_kg, body.height_m) {
            Ok(result) => CommandOutput::BmiComputed {
                weight_kg: body.weight_kg,
                height_m: body.height_m,
                display: result.to_string(),
                result,
            },
            Err(error) => CommandOutput::BmiInvalid {
                weight_kg: body.weight_kg,
                height_m: body.height_m,
                message: error.code.description().to_owned(),
            },
        }
    }

    fn write_panels(&mut self, output: &CommandOutput) {
        let region = match output {
            CommandOutput::MetricsUpdated { .. } => PanelRegion::Status,
            CommandOutput::WaterAssessed(_)
            | CommandOutput::StepsAssessed(_)
            | CommandOutput::SleepAssessed(_)
            | CommandOutput::BmiComputed { .. }
            | CommandOutput::BmiInvalid { .. }
            | CommandOutput::CaloriesEstimated { .. } => PanelRegion::Function,
            CommandOutput::WeeklyReportGenerated { .. } => PanelRegion::Report,
            _ => return,
        };
        if let Some(message) = output.panel_message() {
            self.ui.panels.write(region, message);
        }
    }
}

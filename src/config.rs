//! Simulation configuration loaded from `gradeflow.toml`.
//!
//! The [`SimConfig`] struct holds the tunable parameters of the simulation.
//! Keys missing from the file use sensible defaults, and the
//! `GRADEFLOW_GRADE_DELAY_MS` environment variable takes precedence over
//! the file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::GradeflowError;

/// Top-level configuration loaded from `gradeflow.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Simulated latency in milliseconds before a scheduled transition
    /// fires (auto-submit after starting work, random grading after a
    /// submission or forced reminder).
    #[serde(default = "default_grade_delay_ms")]
    pub grade_delay_ms: u64,
}

// Default simulated grading latency: 500ms.
fn default_grade_delay_ms() -> u64 {
    500
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grade_delay_ms: default_grade_delay_ms(),
        }
    }
}

impl SimConfig {
    /// Load the configuration from `gradeflow.toml` in the current
    /// directory, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, GradeflowError> {
        Self::load_from(Path::new("gradeflow.toml"))
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, GradeflowError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<SimConfig>(&contents)?
        } else {
            Self::default()
        };

        // The environment variable takes precedence over the file.
        if let Ok(raw) = std::env::var("GRADEFLOW_GRADE_DELAY_MS")
            && !raw.is_empty()
        {
            config.grade_delay_ms = raw.parse().map_err(|_| {
                GradeflowError::Config(format!(
                    "GRADEFLOW_GRADE_DELAY_MS must be an integer, got {raw:?}"
                ))
            })?;
        }

        Ok(config)
    }

    /// The grading latency as a [`Duration`].
    pub fn grade_delay(&self) -> Duration {
        Duration::from_millis(self.grade_delay_ms)
    }
}
